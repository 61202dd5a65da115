use super::answer::AnswerBuffer;
use super::cursor::Cursor;
use super::message_buffer::MessageBuffer;
use super::name::{CompressedNameSkipper, NameSkipper};
use super::record::{decode_record_header, validate_bounds, DecodedRecord};
use iquery_domain::{RecordType, ReqAction, ResponseCode, HEADER_LEN};
use std::fmt;
use tracing::{debug, info, warn};

/// Whether inverse queries for the recognised record type are answered.
///
/// Read once at start-up and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InverseQueryPolicy {
    enabled: bool,
}

impl InverseQueryPolicy {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Any non-zero flag value enables handling.
    pub fn from_flag(value: i64) -> Self {
        Self::new(value != 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Human-readable decision points reported while handling a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    NameProblem,
    LengthOff,
    Request { class: u16, rtype: u16 },
    BufferOverflow,
    Copying { length: usize, capacity: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NameProblem => write!(f, "FORMERR IQuery packet name problem"),
            Diagnostic::LengthOff => write!(f, "FORMERR IQuery message length off"),
            Diagnostic::Request { class, rtype } => {
                write!(f, "req: IQuery class {} type {}", class, rtype)
            }
            Diagnostic::BufferOverflow => write!(f, "BUFFER OVERFLOW DETECTED!"),
            Diagnostic::Copying { length, capacity } => write!(
                f,
                "Copying {} bytes from fname to anbuf which can store {} bytes",
                length, capacity
            ),
        }
    }
}

/// Where the extracted name came from and how much of it was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction {
    pub name_start: usize,
    pub length: usize,
    /// Answer-buffer offset of the record payload: `length - data_length`.
    /// Recorded only; never used to index.
    pub data_offset: isize,
}

/// Mutable state threaded through one inverse-query parse.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub message: MessageBuffer,
    pub cursor: Cursor,
    pub end: usize,
    /// Caller-visible message length; shrinks by the header size on success.
    pub remaining: usize,
    pub answer: AnswerBuffer,
    pub record: Option<DecodedRecord>,
    pub extraction: Option<Extraction>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RequestContext {
    /// Positions the cursor just after the header and the end at the fill length.
    pub fn new(message: MessageBuffer, answer: AnswerBuffer) -> Self {
        let end = message.len();
        Self {
            message,
            cursor: Cursor::new(HEADER_LEN),
            end,
            remaining: end,
            answer,
            record: None,
            extraction: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn response_code(&self) -> ResponseCode {
        self.message.header().response_code()
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn format_error(&mut self, diagnostic: Diagnostic) -> ReqAction {
        self.report(diagnostic);
        self.message
            .header_mut()
            .set_response_code(ResponseCode::FormErr);
        ReqAction::Finish
    }
}

/// Handles a request whose header carries the inverse-query opcode.
pub struct InverseQueryHandler<S = CompressedNameSkipper> {
    policy: InverseQueryPolicy,
    skipper: S,
}

impl InverseQueryHandler {
    pub fn new(policy: InverseQueryPolicy) -> Self {
        Self::with_skipper(policy, CompressedNameSkipper)
    }
}

impl<S: NameSkipper> InverseQueryHandler<S> {
    pub fn with_skipper(policy: InverseQueryPolicy, skipper: S) -> Self {
        Self { policy, skipper }
    }

    pub fn handle(&self, ctx: &mut RequestContext) -> ReqAction {
        let name_start = ctx.cursor.position();
        let skipped = self
            .skipper
            .skip_name(ctx.message.as_slice(), name_start, ctx.end);
        let name_len = match skipped {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "Inverse query name could not be skipped");
                return ctx.format_error(Diagnostic::NameProblem);
            }
        };
        ctx.cursor.skip(name_len);
        let name_end = ctx.cursor.position();

        let decoded = decode_record_header(ctx.message.as_slice(), &mut ctx.cursor, ctx.end)
            .and_then(|record| validate_bounds(&ctx.cursor, ctx.end).map(|_| record));
        let record = match decoded {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Inverse query record does not fill the message");
                return ctx.format_error(Diagnostic::LengthOff);
            }
        };
        ctx.record = Some(record);

        match record.record_type() {
            Some(RecordType::A) if self.policy.is_enabled() => {}
            Some(RecordType::A) => {
                debug!("Inverse query handling disabled, refusing");
                return ReqAction::Refuse;
            }
            other => {
                debug!(rtype = record.rtype, known = ?other, "Unsupported inverse query type");
                return ReqAction::Refuse;
            }
        }

        info!(class = record.class, rtype = record.rtype, "Inverse query accepted");
        ctx.report(Diagnostic::Request {
            class: record.class,
            rtype: record.rtype,
        });

        self.extract_name(ctx, record, name_end)
    }

    fn extract_name(
        &self,
        ctx: &mut RequestContext,
        record: DecodedRecord,
        name_end: usize,
    ) -> ReqAction {
        let name_start = HEADER_LEN;
        let length = name_end.saturating_sub(name_start);

        let Some(name) = ctx.message.as_slice().get(name_start..name_end) else {
            return ctx.format_error(Diagnostic::NameProblem);
        };
        if let Err(e) = ctx.answer.copy_from(name) {
            warn!(error = %e, "Extracted name does not fit the answer buffer");
            ctx.report(Diagnostic::BufferOverflow);
            return ReqAction::Return;
        }
        ctx.report(Diagnostic::Copying {
            length,
            capacity: ctx.answer.capacity(),
        });

        let data_offset = length as isize - record.data_length as isize;
        ctx.extraction = Some(Extraction {
            name_start,
            length,
            data_offset,
        });

        ctx.cursor.rewind_to(name_start);
        ctx.remaining = ctx.remaining.saturating_sub(HEADER_LEN);

        debug!(length, data_offset, "Extracted name copied");
        ReqAction::Finish
    }
}
