use super::header::Header;
use iquery_domain::HEADER_LEN;
use std::io::{self, Read};
use tracing::debug;

pub const DEFAULT_MESSAGE_CAPACITY: usize = 10_000;

/// Owned, fixed-capacity message bytes with a logical fill length.
///
/// The backing storage is zero-filled and never shorter than [`HEADER_LEN`],
/// so a header view is always available even when fewer bytes were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBuffer {
    storage: Vec<u8>,
    len: usize,
    capacity: usize,
}

impl MessageBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![0u8; capacity.max(HEADER_LEN)],
            len: 0,
            capacity,
        }
    }

    /// Wraps already-assembled message bytes; capacity equals their length.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::with_capacity(bytes.len());
        buffer.storage[..bytes.len()].copy_from_slice(bytes);
        buffer.len = bytes.len();
        buffer
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The filled portion of the buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    pub fn header(&self) -> Header<&[u8]> {
        Header::over_storage(&self.storage[..])
    }

    pub fn header_mut(&mut self) -> Header<&mut [u8]> {
        Header::over_storage(&mut self.storage[..])
    }

    fn push(&mut self, byte: u8) -> bool {
        if self.len >= self.capacity {
            return false;
        }
        self.storage[self.len] = byte;
        self.len += 1;
        true
    }
}

/// Fills a [`MessageBuffer`] one byte at a time from a byte source.
#[derive(Debug, Clone, Copy)]
pub struct MessageBufferBuilder {
    capacity: usize,
}

impl MessageBufferBuilder {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reads until the source is exhausted or `capacity` bytes are stored.
    ///
    /// Callers reading from a file should hand in a `BufReader`.
    pub fn build<R: Read>(&self, source: R) -> io::Result<MessageBuffer> {
        let mut buffer = MessageBuffer::with_capacity(self.capacity);

        for byte in source.bytes() {
            if !buffer.push(byte?) {
                break;
            }
        }

        debug!(
            bytes = buffer.len(),
            capacity = self.capacity,
            "Message buffer filled"
        );
        Ok(buffer)
    }
}

impl Default for MessageBufferBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_CAPACITY)
    }
}
