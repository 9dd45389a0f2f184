//! Message digests for ECDSA
//!
//! SHA-1 and the SHA-2 family come from the RustCrypto `sha1`/`sha2`
//! crates. ECDSA consumes a digest as the big-endian integer formed by its
//! leftmost `bitlength(n)` bits.

use std::fmt;

use num_bigint::BigUint;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384};

use ecprime_params::utils::hash::{
    SHA1_OUTPUT_SIZE, SHA224_OUTPUT_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE,
};

/// Digest algorithms usable with ECDSA in this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-1 (only for orders below 224 bits)
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
}

impl DigestAlgorithm {
    /// The widest digest that does not exceed a group order of `order_bits`
    ///
    /// secp224k1, whose order has 225 bits, gets SHA-224.
    pub fn for_order_bits(order_bits: u64) -> Self {
        match order_bits {
            b if b >= 384 => DigestAlgorithm::Sha384,
            b if b >= 256 => DigestAlgorithm::Sha256,
            b if b >= 224 => DigestAlgorithm::Sha224,
            _ => DigestAlgorithm::Sha1,
        }
    }

    /// Output length in bytes
    pub fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => SHA1_OUTPUT_SIZE,
            DigestAlgorithm::Sha224 => SHA224_OUTPUT_SIZE,
            DigestAlgorithm::Sha256 => SHA256_OUTPUT_SIZE,
            DigestAlgorithm::Sha384 => SHA384_OUTPUT_SIZE,
        }
    }

    /// Output length in bits
    pub fn output_bits(self) -> u64 {
        self.output_size() as u64 * 8
    }

    /// Algorithm name
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha224 => "SHA-224",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
        }
    }

    /// Hash `data`
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Big-endian integer of the leftmost `order_bits` bits of `digest`
pub fn digest_to_integer(digest: &[u8], order_bits: u64) -> BigUint {
    let e = BigUint::from_bytes_be(digest);
    let digest_bits = digest.len() as u64 * 8;
    if digest_bits > order_bits {
        e >> (digest_bits - order_bits)
    } else {
        e
    }
}
