use iquery_domain::WireError;

const COMPRESSION_MASK: u8 = 0xC0;

/// Advances past an encoded name without decoding it.
pub trait NameSkipper {
    /// Returns the number of bytes the name at `start` occupies.
    ///
    /// Fails when the encoding is malformed or the name does not end
    /// at or before `end`.
    fn skip_name(&self, message: &[u8], start: usize, end: usize) -> Result<usize, WireError>;
}

/// Skips uncompressed labels and stops after the first compression pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressedNameSkipper;

impl NameSkipper for CompressedNameSkipper {
    fn skip_name(&self, message: &[u8], start: usize, end: usize) -> Result<usize, WireError> {
        let end = end.min(message.len());
        let mut pos = start;

        loop {
            if pos >= end {
                return Err(WireError::NameFormat(start));
            }
            let label_len = message[pos];
            pos += 1;

            match label_len & COMPRESSION_MASK {
                0x00 if label_len == 0 => break,
                0x00 => pos += label_len as usize,
                COMPRESSION_MASK => {
                    pos += 1;
                    break;
                }
                // 0x40 and 0x80: extended label types are not accepted
                _ => return Err(WireError::NameFormat(start)),
            }
        }

        if pos > end {
            return Err(WireError::NameFormat(start));
        }
        Ok(pos - start)
    }
}
