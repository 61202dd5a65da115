//! Inverse Query Domain Layer
pub mod config;
pub mod dns_header;
pub mod dns_record;
pub mod errors;
pub mod req_action;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::{Opcode, ResponseCode, HEADER_LEN};
pub use dns_record::RecordType;
pub use errors::{DomainError, WireError};
pub use req_action::ReqAction;
