use super::cursor::Cursor;
use iquery_domain::{RecordType, WireError};

const TTL_LEN: usize = 4;

/// Fixed fields that follow the owner name of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedRecord {
    pub rtype: u16,
    pub class: u16,
    pub data_length: u16,
}

impl DecodedRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }
}

/// Reads TYPE, CLASS, skips TTL, reads RDLENGTH, then skips the payload.
///
/// Only the 16-bit reads are checked against `end`. The TTL and payload
/// skips are not, so the aggregate position must be confirmed with
/// [`validate_bounds`] afterwards.
pub fn decode_record_header(
    message: &[u8],
    cursor: &mut Cursor,
    end: usize,
) -> Result<DecodedRecord, WireError> {
    let rtype = cursor.read_u16(message, end)?;
    let class = cursor.read_u16(message, end)?;
    cursor.skip(TTL_LEN);
    let data_length = cursor.read_u16(message, end)?;
    cursor.skip(data_length as usize);

    Ok(DecodedRecord {
        rtype,
        class,
        data_length,
    })
}

/// The cursor must sit exactly on the end of the message.
pub fn validate_bounds(cursor: &Cursor, end: usize) -> Result<(), WireError> {
    if cursor.position() != end {
        return Err(WireError::LengthMismatch {
            cursor: cursor.position(),
            end,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_fields_and_skips_payload() {
        // type 1, class 1, ttl 3600, rdlength 4, 192.0.2.1
        let message = [
            0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x0E, 0x10, 0x00, 0x04, 192, 0, 2, 1,
        ];
        let mut cursor = Cursor::new(0);

        let record = decode_record_header(&message, &mut cursor, message.len()).unwrap();

        assert_eq!(record.rtype, 1);
        assert_eq!(record.class, 1);
        assert_eq!(record.data_length, 4);
        assert_eq!(record.record_type(), Some(RecordType::A));
        assert_eq!(cursor.position(), message.len());
        assert!(validate_bounds(&cursor, message.len()).is_ok());
    }

    #[test]
    fn test_payload_overshoot_is_caught_by_validation() {
        let message = [0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09];
        let mut cursor = Cursor::new(0);

        decode_record_header(&message, &mut cursor, message.len()).unwrap();

        assert_eq!(
            validate_bounds(&cursor, message.len()).unwrap_err(),
            WireError::LengthMismatch { cursor: 19, end: 10 }
        );
    }

    #[test]
    fn test_missing_rdlength_is_truncated() {
        let message = [0x00, 0x01, 0x00, 0x01, 0x00, 0x00];
        let mut cursor = Cursor::new(0);

        let err = decode_record_header(&message, &mut cursor, message.len()).unwrap_err();
        assert!(matches!(err, WireError::Truncated { offset: 8, .. }));
    }

    #[test]
    fn test_unknown_type_has_no_record_type() {
        let record = DecodedRecord {
            rtype: 999,
            class: 1,
            data_length: 0,
        };
        assert_eq!(record.record_type(), None);
    }
}
