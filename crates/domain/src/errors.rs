use thiserror::Error;

/// Failures raised while walking a raw message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Malformed encoded name at offset {0}")]
    NameFormat(usize),

    #[error("Message length off: cursor at {cursor}, end of message at {end}")]
    LengthMismatch { cursor: usize, end: usize },

    #[error("Read of {needed} bytes at offset {offset} runs past end of message")]
    Truncated { offset: usize, needed: usize },

    #[error("Extracted name of {length} bytes exceeds answer buffer capacity of {capacity}")]
    BufferOverflow { length: usize, capacity: usize },
}

/// Failures reading the side files the parser depends on.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to read flag file {0}: {1}")]
    FlagFileRead(String, String),

    #[error("Flag file {0} does not start with a decimal integer")]
    FlagMissing(String),

    #[error("Failed to read message file {0}: {1}")]
    MessageFileRead(String, String),
}
