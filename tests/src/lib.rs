//! Shared fixtures for the ecprime integration tests

pub mod vectors;

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Parse a base-16 integer, panicking on malformed fixtures
pub fn big(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("malformed hex fixture")
}

/// Deterministic CSPRNG for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
