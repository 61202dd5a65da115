use iquery_domain::{Opcode, ReqAction};
use iquery_infrastructure::dns::{AnswerBuffer, InverseQueryHandler, MessageBuffer, RequestContext};
use tracing::info;

/// What the top level did with one message, plus the lines to print.
#[derive(Debug)]
pub struct DispatchReport {
    pub opcode: Opcode,
    pub action: Option<ReqAction>,
    pub lines: Vec<String>,
}

/// Routes a message on its header opcode; only inverse queries are handled.
pub fn dispatch(
    message: MessageBuffer,
    handler: &InverseQueryHandler,
    answer_capacity: usize,
) -> DispatchReport {
    let header = message.header();
    let opcode = header.opcode();
    let mut lines = vec![format!("opcode = {}", header.opcode_bits())];

    let action = match opcode {
        Opcode::InverseQuery => {
            let mut ctx = RequestContext::new(message, AnswerBuffer::new(answer_capacity));
            let action = handler.handle(&mut ctx);
            lines.extend(ctx.diagnostics.iter().map(ToString::to_string));
            info!(%action, rcode = %ctx.response_code(), "Inverse query handled");
            Some(action)
        }
        _ => {
            lines.push("We only support inverse queries!".to_string());
            None
        }
    };

    DispatchReport {
        opcode,
        action,
        lines,
    }
}
