//! Constant-time operations to prevent timing attacks
//!
//! Multi-precision helpers work on little-endian `u32` limb slices of equal
//! width so that callers can pad every operand to the modulus width and get
//! the same sequence of word operations for every value.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of different
/// length compare unequal without inspecting their contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Select between two equal-width limb vectors
///
/// Returns a copy of `a` when `choice` is 0 and of `b` when it is 1.
pub fn ct_select_limbs(a: &[u32], b: &[u32], choice: Choice) -> Vec<u32> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| u32::conditional_select(x, y, choice))
        .collect()
}

/// Conditionally swap two equal-width limb slices in place
pub fn ct_swap_limbs(a: &mut [u32], b: &mut [u32], choice: Choice) {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        u32::conditional_swap(x, y, choice);
    }
}

/// `out = a + b`, returning the final carry (0 or 1)
pub fn ct_add_limbs(a: &[u32], b: &[u32], out: &mut [u32]) -> u32 {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    let mut carry = 0u64;
    for i in 0..out.len() {
        let t = a[i] as u64 + b[i] as u64 + carry;
        out[i] = t as u32;
        carry = t >> 32;
    }
    carry as u32
}

/// `out = a - b` modulo `2^(32·len)`, returning the final borrow (0 or 1)
pub fn ct_sub_limbs(a: &[u32], b: &[u32], out: &mut [u32]) -> u32 {
    debug_assert!(a.len() == b.len() && a.len() == out.len());
    let mut borrow = 0u64;
    for i in 0..out.len() {
        let t = (a[i] as u64).wrapping_sub(b[i] as u64).wrapping_sub(borrow);
        out[i] = t as u32;
        borrow = (t >> 63) & 1;
    }
    borrow as u32
}

/// Read entry `index` of a table by touching every entry
///
/// All rows must have the same width. An out-of-range index yields zeros.
pub fn ct_table_lookup(table: &[Vec<u32>], index: usize) -> Vec<u32> {
    let width = table.first().map_or(0, Vec::len);
    let mut out = vec![0u32; width];
    let wanted = index as u64;
    for (i, row) in table.iter().enumerate() {
        let hit = (i as u64).ct_eq(&wanted);
        for (o, v) in out.iter_mut().zip(row.iter()) {
            o.conditional_assign(v, hit);
        }
    }
    out
}

/// Clear scratch limbs holding secret-dependent values
pub fn wipe_limbs(limbs: &mut Vec<u32>) {
    limbs.zeroize();
}
