pub mod answer;
pub mod cursor;
pub mod header;
pub mod iquery;
pub mod message_buffer;
pub mod name;
pub mod record;

pub use answer::{AnswerBuffer, DEFAULT_ANSWER_CAPACITY};
pub use cursor::Cursor;
pub use header::Header;
pub use iquery::{Diagnostic, Extraction, InverseQueryHandler, InverseQueryPolicy, RequestContext};
pub use message_buffer::{MessageBuffer, MessageBufferBuilder, DEFAULT_MESSAGE_CAPACITY};
pub use name::{CompressedNameSkipper, NameSkipper};
pub use record::{decode_record_header, validate_bounds, DecodedRecord};
