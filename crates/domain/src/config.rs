pub mod errors;
pub mod logging;
pub mod parser;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use parser::ParserConfig;
pub use root::{CliOverrides, Config};
