use iquery_domain::WireError;

pub const DEFAULT_ANSWER_CAPACITY: usize = 2;

/// Small fixed-capacity destination for an extracted name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBuffer {
    bytes: Box<[u8]>,
    len: usize,
}

impl AnswerBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn check_fits(&self, length: usize) -> Result<(), WireError> {
        if length > self.capacity() {
            return Err(WireError::BufferOverflow {
                length,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Copies all of `src` or nothing.
    pub fn copy_from(&mut self, src: &[u8]) -> Result<(), WireError> {
        self.check_fits(src.len())?;
        self.bytes[..src.len()].copy_from_slice(src);
        self.len = src.len();
        Ok(())
    }
}

impl Default for AnswerBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_ANSWER_CAPACITY)
    }
}
