#![allow(dead_code)]
use iquery_domain::HEADER_LEN;
use iquery_infrastructure::dns::MessageBuffer;

/// Assembles raw inverse-query messages: header, one owner name, and the
/// TYPE/CLASS/TTL/RDLENGTH/RDATA fields that follow it.
pub struct IqueryMessageBuilder {
    id: u16,
    opcode: u8,
    flags_low: u8,
    name: Vec<u8>,
    rtype: u16,
    class: u16,
    ttl: u32,
    rdata: Vec<u8>,
    rdlength: Option<u16>,
    trailing: Vec<u8>,
}

impl IqueryMessageBuilder {
    pub fn new() -> Self {
        Self {
            id: 0xBEEF,
            opcode: 1,
            flags_low: 0,
            name: vec![0x00],
            rtype: 1,
            class: 1,
            ttl: 0,
            rdata: Vec::new(),
            rdlength: None,
            trailing: Vec::new(),
        }
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.opcode = opcode;
        self
    }

    /// Raw value for header byte 3 (RA/Z/AD/CD/RCODE).
    pub fn flags_low(mut self, flags: u8) -> Self {
        self.flags_low = flags;
        self
    }

    pub fn name(mut self, name: &[u8]) -> Self {
        self.name = name.to_vec();
        self
    }

    pub fn rtype(mut self, rtype: u16) -> Self {
        self.rtype = rtype;
        self
    }

    pub fn class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn rdata(mut self, rdata: &[u8]) -> Self {
        self.rdata = rdata.to_vec();
        self
    }

    /// Declares an RDLENGTH that need not match the RDATA actually written.
    pub fn rdlength(mut self, rdlength: u16) -> Self {
        self.rdlength = Some(rdlength);
        self
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing = bytes.to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.name.len() + 10 + self.rdata.len());
        bytes.extend_from_slice(&self.id.to_be_bytes());
        bytes.push((self.opcode & 0x0F) << 3);
        bytes.push(self.flags_low);
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());

        bytes.extend_from_slice(&self.name);
        bytes.extend_from_slice(&self.rtype.to_be_bytes());
        bytes.extend_from_slice(&self.class.to_be_bytes());
        bytes.extend_from_slice(&self.ttl.to_be_bytes());
        let rdlength = self.rdlength.unwrap_or(self.rdata.len() as u16);
        bytes.extend_from_slice(&rdlength.to_be_bytes());
        bytes.extend_from_slice(&self.rdata);
        bytes.extend_from_slice(&self.trailing);
        bytes
    }

    pub fn build_buffer(&self) -> MessageBuffer {
        MessageBuffer::from_bytes(&self.build())
    }
}

impl Default for IqueryMessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
