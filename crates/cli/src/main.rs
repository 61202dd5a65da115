use clap::Parser;
use iquery_domain::CliOverrides;
use iquery_infrastructure::dns::InverseQueryHandler;
use iquery_infrastructure::system::{FlagFileReader, MessageFileReader};
use tracing::{error, info};

mod bootstrap;
mod dispatch;

#[derive(Parser)]
#[command(name = "iquery")]
#[command(version)]
#[command(about = "Inverse query message parser")]
struct Cli {
    /// File whose leading integer enables (non-zero) or disables inverse queries
    #[arg(value_name = "FLAG_FILE")]
    flag_file: String,

    /// File holding the raw message bytes
    #[arg(short = 'm', long, value_name = "FILE")]
    message: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        message_path: cli.message.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting iquery v{}", env!("CARGO_PKG_VERSION"));

    let policy = FlagFileReader::new(cli.flag_file.as_str())
        .read_policy()
        .map_err(|e| {
            error!(error = %e, "Flag file unusable");
            anyhow::anyhow!(e)
        })?;
    info!(enabled = policy.is_enabled(), "Inverse query policy set");

    let message = MessageFileReader::new(
        config.parser.message_path.as_str(),
        config.parser.message_capacity,
    )
    .read_message()
    .map_err(|e| {
        error!(error = %e, "Message file unusable");
        anyhow::anyhow!(e)
    })?;

    let handler = InverseQueryHandler::new(policy);
    let report = dispatch::dispatch(message, &handler, config.parser.answer_capacity);

    for line in &report.lines {
        println!("{}", line);
    }
    info!(opcode = %report.opcode, action = ?report.action, "Dispatch complete");

    Ok(())
}
