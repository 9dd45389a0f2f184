//! DER encoding of ECDSA signature components

use crate::error::{Error, Result};

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// ECDSA signature components (r, s) as minimal big-endian magnitudes
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignatureComponents {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl SignatureComponents {
    /// Serialize to DER: SEQUENCE { INTEGER r, INTEGER s }
    pub fn to_der(&self) -> Vec<u8> {
        let r = encode_integer(&self.r);
        let s = encode_integer(&self.s);

        let mut body = Vec::with_capacity(r.len() + s.len() + 8);
        push_tlv(&mut body, INTEGER_TAG, &r);
        push_tlv(&mut body, INTEGER_TAG, &s);

        let mut der = Vec::with_capacity(body.len() + 4);
        push_tlv(&mut der, SEQUENCE_TAG, &body);
        der
    }

    /// Parse from DER, rejecting truncated input, trailing bytes and
    /// negative integers
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut outer = Reader::new(der);
        let body = outer.read_tlv(SEQUENCE_TAG, "SEQUENCE")?;
        if !outer.is_empty() {
            return Err(malformed("trailing bytes after SEQUENCE"));
        }

        let mut inner = Reader::new(body);
        let r = inner.read_tlv(INTEGER_TAG, "INTEGER r")?;
        let s = inner.read_tlv(INTEGER_TAG, "INTEGER s")?;
        if !inner.is_empty() {
            return Err(malformed("trailing bytes inside SEQUENCE"));
        }

        Ok(SignatureComponents {
            r: decode_integer(r, "r")?,
            s: decode_integer(s, "s")?,
        })
    }
}

fn malformed(details: &str) -> Error {
    Error::signature("ECDSA DER parsing", details)
}

fn push_tlv(out: &mut Vec<u8>, tag: u8, content: &[u8]) {
    out.push(tag);
    push_length(out, content.len());
    out.extend_from_slice(content);
}

fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
        return;
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
}

/// Encode integer for DER (add leading zero if high bit set)
fn encode_integer(bytes: &[u8]) -> Vec<u8> {
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let magnitude = &bytes[skip..];
    match magnitude.first() {
        None => vec![0x00],
        Some(&b) if b & 0x80 != 0 => {
            let mut result = Vec::with_capacity(magnitude.len() + 1);
            result.push(0x00);
            result.extend_from_slice(magnitude);
            result
        }
        Some(_) => magnitude.to_vec(),
    }
}

/// Decode a minimal non-negative DER integer, dropping the sign byte
fn decode_integer(bytes: &[u8], name: &str) -> Result<Vec<u8>> {
    match bytes {
        [] => Err(malformed(&format!("empty INTEGER {}", name))),
        [b, ..] if b & 0x80 != 0 => Err(malformed(&format!("negative INTEGER {}", name))),
        [0x00, next, ..] if next & 0x80 == 0 => {
            Err(malformed(&format!("non-minimal INTEGER {}", name)))
        }
        [0x00, rest @ ..] if !rest.is_empty() => Ok(rest.to_vec()),
        _ => Ok(bytes.to_vec()),
    }
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    fn byte(&mut self, what: &str) -> Result<u8> {
        let b = *self
            .data
            .get(self.pos)
            .ok_or_else(|| malformed(&format!("truncated {}", what)))?;
        self.pos += 1;
        Ok(b)
    }

    fn length(&mut self, what: &str) -> Result<usize> {
        let first = self.byte(what)?;
        if first & 0x80 == 0 {
            return Ok(first as usize);
        }
        let count = (first & 0x7f) as usize;
        if count == 0 || count > core::mem::size_of::<usize>() {
            return Err(malformed(&format!("unsupported length form in {}", what)));
        }
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | self.byte(what)? as usize;
        }
        if len < 0x80 {
            return Err(malformed(&format!("non-minimal length in {}", what)));
        }
        Ok(len)
    }

    fn read_tlv(&mut self, tag: u8, what: &str) -> Result<&'a [u8]> {
        if self.byte(what)? != tag {
            return Err(malformed(&format!("invalid tag for {}", what)));
        }
        let len = self.length(what)?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| malformed(&format!("truncated {}", what)))?;
        let content = &self.data[self.pos..end];
        self.pos = end;
        Ok(content)
    }
}
