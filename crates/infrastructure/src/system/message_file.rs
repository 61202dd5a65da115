use crate::dns::{MessageBuffer, MessageBufferBuilder};
use iquery_domain::DomainError;
use std::fs::File;
use std::io::BufReader;
use tracing::info;

/// Loads raw message bytes from a file into a fixed-capacity buffer.
pub struct MessageFileReader {
    path: String,
    builder: MessageBufferBuilder,
}

impl MessageFileReader {
    pub fn new(path: impl Into<String>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            builder: MessageBufferBuilder::new(capacity),
        }
    }

    pub fn read_message(&self) -> Result<MessageBuffer, DomainError> {
        let file = File::open(&self.path)
            .map_err(|e| DomainError::MessageFileRead(self.path.clone(), e.to_string()))?;

        let message = self
            .builder
            .build(BufReader::new(file))
            .map_err(|e| DomainError::MessageFileRead(self.path.clone(), e.to_string()))?;

        info!(path = %self.path, bytes = message.len(), "Message loaded");
        Ok(message)
    }
}
