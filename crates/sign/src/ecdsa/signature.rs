//! ECDSA signature values

use core::fmt;

use ecprime_algorithms::validate;
use num_bigint::BigUint;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::common::SignatureComponents;
use crate::error::Result;

/// An ECDSA signature `(r, s)`
///
/// Range checks against a particular group order happen at verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EcdsaSignature {
    r: BigUint,
    s: BigUint,
}

impl EcdsaSignature {
    /// Signature from its components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        EcdsaSignature { r, s }
    }

    /// Signature from base-16 components
    pub fn from_hex(r: &str, s: &str) -> Result<Self> {
        Ok(EcdsaSignature {
            r: validate::hex_integer(r, "r")?,
            s: validate::hex_integer(s, "s")?,
        })
    }

    /// The `r` component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// ASN.1 DER: SEQUENCE { r INTEGER, s INTEGER }
    pub fn to_der(&self) -> Vec<u8> {
        SignatureComponents {
            r: self.r.to_bytes_be(),
            s: self.s.to_bytes_be(),
        }
        .to_der()
    }

    /// Parse an ASN.1 DER signature
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let components = SignatureComponents::from_der(der)?;
        Ok(EcdsaSignature {
            r: BigUint::from_bytes_be(&components.r),
            s: BigUint::from_bytes_be(&components.s),
        })
    }

    /// Exportable form
    pub fn to_record(&self) -> SignatureRecord {
        SignatureRecord {
            r: self.r.to_str_radix(16),
            s: self.s.to_str_radix(16),
        }
    }

    /// Rebuild from an exported record
    pub fn from_record(record: &SignatureRecord) -> Result<Self> {
        Self::from_hex(&record.r, &record.s)
    }
}

impl fmt::Display for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "r = {:x}", self.r)?;
        write!(f, "s = {:x}", self.s)
    }
}

/// Signature as `(hex r, hex s)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignatureRecord {
    /// r, base 16
    pub r: String,
    /// s, base 16
    pub s: String,
}
