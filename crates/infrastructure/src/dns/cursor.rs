use iquery_domain::WireError;

/// Forward-only read position into a message.
///
/// Field reads are bounds-checked against the end of message; [`Cursor::skip`]
/// is not, so a declared payload length may carry the cursor past the end.
/// That overshoot is reported later by [`super::record::validate_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    pos: usize,
}

impl Cursor {
    pub fn new(pos: usize) -> Self {
        Self { pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn skip(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count);
    }

    /// Moves the cursor back to an earlier position.
    pub fn rewind_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    pub fn read_u16(&mut self, message: &[u8], end: usize) -> Result<u16, WireError> {
        let bytes = self.take(message, end, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn take<'a>(
        &mut self,
        message: &'a [u8],
        end: usize,
        needed: usize,
    ) -> Result<&'a [u8], WireError> {
        let truncated = WireError::Truncated {
            offset: self.pos,
            needed,
        };
        let stop = self.pos.checked_add(needed).ok_or(truncated.clone())?;
        if stop > end {
            return Err(truncated);
        }
        let bytes = message.get(self.pos..stop).ok_or(truncated)?;
        self.pos = stop;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_is_big_endian_and_advances() {
        let message = [0x01, 0x02, 0x03, 0x04];
        let mut cursor = Cursor::new(0);

        assert_eq!(cursor.read_u16(&message, 4).unwrap(), 0x0102);
        assert_eq!(cursor.read_u16(&message, 4).unwrap(), 0x0304);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_read_u16_refuses_to_cross_end() {
        let message = [0x01, 0x02, 0x03, 0x04];
        let mut cursor = Cursor::new(3);

        let err = cursor.read_u16(&message, 4).unwrap_err();
        assert_eq!(err, WireError::Truncated { offset: 3, needed: 2 });
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_end_bounds_reads_even_inside_storage() {
        let message = [0xFF; 8];
        let mut cursor = Cursor::new(2);

        assert!(cursor.read_u16(&message, 3).is_err());
    }

    #[test]
    fn test_skip_may_pass_end() {
        let mut cursor = Cursor::new(10);
        cursor.skip(usize::MAX);
        assert_eq!(cursor.position(), usize::MAX);
    }
}
