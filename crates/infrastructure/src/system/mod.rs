pub mod flag_file;
pub mod message_file;

pub use flag_file::FlagFileReader;
pub use message_file::MessageFileReader;
