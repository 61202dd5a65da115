use iquery_domain::{Opcode, ResponseCode, HEADER_LEN};

/// Non-owning view over the 12-byte message header.
///
/// Byte 2 carries `QR | OPCODE | AA | TC | RD` and byte 3 carries
/// `RA | Z | AD | CD | RCODE`. Writes through a mutable view land directly
/// in the underlying message bytes.
#[derive(Debug)]
pub struct Header<B> {
    bytes: B,
}

impl<B: AsRef<[u8]>> Header<B> {
    /// Returns `None` when `bytes` is shorter than the header.
    pub fn new(bytes: B) -> Option<Self> {
        if bytes.as_ref().len() < HEADER_LEN {
            return None;
        }
        Some(Self { bytes })
    }

    pub(crate) fn over_storage(bytes: B) -> Self {
        debug_assert!(bytes.as_ref().len() >= HEADER_LEN);
        Self { bytes }
    }

    fn byte(&self, index: usize) -> u8 {
        self.bytes.as_ref()[index]
    }

    fn word(&self, index: usize) -> u16 {
        u16::from_be_bytes([self.byte(index), self.byte(index + 1)])
    }

    pub fn id(&self) -> u16 {
        self.word(0)
    }

    pub fn qr(&self) -> bool {
        self.byte(2) & 0x80 != 0
    }

    pub fn opcode_bits(&self) -> u8 {
        (self.byte(2) >> 3) & 0x0F
    }

    pub fn opcode(&self) -> Opcode {
        Opcode::from_u8(self.opcode_bits())
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_u8(self.byte(3) & 0x0F)
    }

    pub fn qdcount(&self) -> u16 {
        self.word(4)
    }

    pub fn ancount(&self) -> u16 {
        self.word(6)
    }

    pub fn nscount(&self) -> u16 {
        self.word(8)
    }

    pub fn arcount(&self) -> u16 {
        self.word(10)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Header<B> {
    /// Rewrites the RCODE nibble, leaving the other flag bits of byte 3 intact.
    pub fn set_response_code(&mut self, rcode: ResponseCode) {
        let flags = &mut self.bytes.as_mut()[3];
        *flags = (*flags & 0xF0) | rcode.to_u8();
    }
}
