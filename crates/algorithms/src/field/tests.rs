use super::*;
use num_bigint::BigUint;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const P224: &str = "ffffffffffffffffffffffffffffffff000000000000000000000001";
const K224: &str = "fffffffffffffffffffffffffffffffffffffffffffffffeffffe56d";

fn big(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

fn small(p: u32) -> PrimeField {
    PrimeField::new(BigUint::from(p)).unwrap()
}

struct Vector {
    modulus: &'static str,
    a: &'static str,
    b: &'static str,
    add: &'static str,
    sub: &'static str,
    mul: &'static str,
    inv_a: &'static str,
    pow: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        modulus: "11",
        a: "9",
        b: "b",
        add: "3",
        sub: "f",
        mul: "e",
        inv_a: "2",
        pow: "f",
    },
    Vector {
        modulus: "17",
        a: "8",
        b: "11",
        add: "2",
        sub: "e",
        mul: "15",
        inv_a: "3",
        pow: "d",
    },
    Vector {
        modulus: P224,
        a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
        b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
        add: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb1",
        sub: "4bfaf57af3fb4c540abecda9afbb4f4728402745d8f4c6bcdcaa004a",
        mul: "e3f0e070dbf1e4fc203c68fd0f31edd578c075d18ade543695fe00e7",
        inv_a: "55555555555555555555555555555555000000000000000000000000",
        pow: "5503eaddbe959f1392d758b763260b5ce839ed865f22a33ab60166a5",
    },
    Vector {
        modulus: K224,
        a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
        b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
        add: "b4050a850c04b3abf54132565044b0b6d7bfd8ba270b394423561a45",
        sub: "4bfaf57af3fb4c540abecda9afbb4f4728402745d8f4c6bcdcaa004a",
        mul: "35ac7b88666a94eab243be7e713f7fdbe8bca160c2539b3830086bdb",
        inv_a: "fd960e41cc4d497898923941abbe0b7d29cf160ef061251fc008259e",
        pow: "a79a0977c048f53dc759813e5dae277ad1249fe57b53b50a63c3c776",
    },
];

fn check_ops<F: FieldOps>(ops: &F, v: &Vector) {
    let a = big(v.a);
    let b = big(v.b);
    assert_eq!(ops.add(&a, &b), big(v.add), "add mod {}", v.modulus);
    assert_eq!(ops.sub(&a, &b), big(v.sub), "sub mod {}", v.modulus);
    assert_eq!(ops.mul(&a, &b), big(v.mul), "mul mod {}", v.modulus);
    assert_eq!(ops.invert(&a).unwrap(), big(v.inv_a), "inv mod {}", v.modulus);
    assert_eq!(ops.pow(&a, &b), big(v.pow), "pow mod {}", v.modulus);
}

#[test]
fn test_known_answers_fast() {
    for v in VECTORS {
        let field = PrimeField::from_hex(v.modulus).unwrap();
        check_ops(&field.fast(), v);
    }
}

#[test]
fn test_known_answers_constant_time() {
    for v in VECTORS {
        let field = PrimeField::from_hex(v.modulus).unwrap();
        check_ops(&field.ct(), v);
    }
}

#[test]
fn test_exponentiation_ladders_agree() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for v in VECTORS {
        let field = PrimeField::from_hex(v.modulus).unwrap();
        let a = big(v.a);
        let b = big(v.b);
        let want = big(v.pow);
        for ops in [&field.fast() as &dyn FieldOps, &field.ct()] {
            assert_eq!(pow_always_multiply(ops, &a, &b), want);
            assert_eq!(pow_atomic(ops, &a, &b), want);
            assert_eq!(pow_montgomery(ops, &a, &b), want);
            assert_eq!(pow_montgomery_randomized(ops, &a, &b, &mut rng), want);
            for w in 1..=5 {
                assert_eq!(pow_window(ops, &a, &b, w).unwrap(), want, "window {}", w);
            }
        }
    }
}

#[test]
fn test_ladders_random_exponents() {
    let field = PrimeField::from_hex(P224).unwrap();
    let ops = field.ct();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for _ in 0..16 {
        let mut bytes = [0u8; 28];
        rng.fill_bytes(&mut bytes);
        let base = field.reduce(&BigUint::from_bytes_be(&bytes));
        rng.fill_bytes(&mut bytes);
        let exp = BigUint::from_bytes_be(&bytes[..(rng.next_u32() % 28 + 1) as usize]);

        let want = base.modpow(&exp, field.modulus());
        assert_eq!(pow_atomic(&ops, &base, &exp), want);
        assert_eq!(pow_montgomery(&ops, &base, &exp), want);
        assert_eq!(pow_always_multiply(&ops, &base, &exp), want);
        assert_eq!(pow_montgomery_randomized(&ops, &base, &exp, &mut rng), want);
        assert_eq!(pow_window(&ops, &base, &exp, DEFAULT_WINDOW_BITS).unwrap(), want);
    }
}

#[test]
fn test_zero_exponent_yields_one() {
    let field = small(23);
    let ops = field.ct();
    let zero = BigUint::from(0u32);
    let five = BigUint::from(5u32);
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    assert_eq!(pow_always_multiply(&ops, &five, &zero), BigUint::from(1u32));
    assert_eq!(pow_atomic(&ops, &five, &zero), BigUint::from(1u32));
    assert_eq!(pow_montgomery(&ops, &five, &zero), BigUint::from(1u32));
    assert_eq!(
        pow_montgomery_randomized(&ops, &five, &zero, &mut rng),
        BigUint::from(1u32)
    );
    assert_eq!(pow_window(&ops, &five, &zero, 4).unwrap(), BigUint::from(1u32));
    assert_eq!(ops.pow(&five, &zero), BigUint::from(1u32));
}

#[test]
fn test_window_width_bounds() {
    let field = small(23);
    let one = BigUint::from(1u32);
    assert!(pow_window(&field.fast(), &one, &one, 0).is_err());
    assert!(pow_window(&field.fast(), &one, &one, 9).is_err());
    assert!(pow_window(&field.fast(), &one, &one, 8).is_ok());
}

#[test]
fn test_unreduced_operands() {
    let field = small(17);
    let a = BigUint::from(9u32 + 17 * 3);
    let b = BigUint::from(11u32 + 17);
    for ops in [&field.fast() as &dyn FieldOps, &field.ct()] {
        assert_eq!(ops.add(&a, &b), BigUint::from(3u32));
        assert_eq!(ops.sub(&a, &b), BigUint::from(15u32));
        assert_eq!(ops.mul(&a, &b), BigUint::from(14u32));
    }
}

#[test]
fn test_modulus_validation() {
    assert!(PrimeField::new(BigUint::from(2u32)).is_err());
    assert!(PrimeField::new(BigUint::from(1u32)).is_err());
    assert!(PrimeField::new(BigUint::from(16u32)).is_err());
    assert!(PrimeField::from_hex("").is_err());
    assert!(PrimeField::from_hex("xyz").is_err());
    let field = PrimeField::from_hex(P224).unwrap();
    assert_eq!(field.bits(), 224);
    assert_eq!(field.byte_len(), 28);
    assert_eq!(field.limbs(), 7);
}

#[test]
fn test_inversion_errors() {
    let field = small(17);
    let zero = BigUint::from(0u32);
    assert!(matches!(
        field.fast().invert(&zero),
        Err(Error::NotInvertible { .. })
    ));
    assert!(matches!(
        field.ct().invert(&zero),
        Err(Error::NotInvertible { .. })
    ));
    assert!(matches!(
        invert_euclid(&BigUint::from(3u32), &BigUint::from(16u32)),
        Err(Error::Modulus { .. })
    ));
    // gcd(6, 9) = 3
    assert!(matches!(
        invert_euclid(&BigUint::from(6u32), &BigUint::from(9u32)),
        Err(Error::NotInvertible { .. })
    ));
    assert_eq!(
        invert_euclid(&BigUint::from(4u32), &BigUint::from(9u32)).unwrap(),
        BigUint::from(7u32)
    );
}

#[test]
fn test_compound_helpers() {
    let field = small(23);
    let ops = field.fast();
    let (a, b, c) = (
        BigUint::from(20u32),
        BigUint::from(7u32),
        BigUint::from(9u32),
    );
    assert_eq!(ops.add_add(&a, &b, &c), BigUint::from(13u32));
    assert_eq!(ops.sub_sub(&b, &a, &c), BigUint::from(1u32));
    assert_eq!(ops.mul_sub(&a, &b, &c), BigUint::from(16u32));
    assert_eq!(ops.mul_u64(&a, 3), BigUint::from(14u32));
    assert_eq!(ops.mul4(&a), BigUint::from(11u32));
    assert_eq!(ops.mul8(&a), BigUint::from(22u32));
    assert_eq!(ops.neg(&b), BigUint::from(16u32));
    assert_eq!(ops.neg(&BigUint::from(0u32)), BigUint::from(0u32));
    assert_eq!(ops.div(&a, &b).unwrap(), BigUint::from(16u32));
}

#[test]
fn test_fixed_width_encoding() {
    let field = PrimeField::from_hex(P224).unwrap();
    let bytes = field.to_bytes_be(&BigUint::from(0x0102u32));
    assert_eq!(bytes.len(), 28);
    assert_eq!(&bytes[26..], &[0x01, 0x02]);
    assert!(bytes[..26].iter().all(|&b| b == 0));
}

#[test]
fn test_square_roots() {
    // p ≡ 3 (mod 4), p ≡ 1 (mod 8) and p ≡ 5 (mod 8)
    for field in [
        small(23),
        small(17),
        PrimeField::from_hex(P224).unwrap(),
        PrimeField::from_hex(K224).unwrap(),
    ] {
        let ops = field.fast();
        for x in [1u32, 2, 3, 4, 7, 12, 13] {
            let x = BigUint::from(x);
            let square = ops.sqr(&x);
            let root = sqrt(&field, &square).unwrap();
            assert_eq!(ops.sqr(&root), square);
            assert!(root == field.reduce(&x) || root == ops.neg(&x));
        }
        assert_eq!(sqrt(&field, &BigUint::from(0u32)), Some(BigUint::from(0u32)));
    }
}

#[test]
fn test_non_residues() {
    for (field, non_residue) in [
        (small(23), 5u32),
        (small(17), 3),
        (PrimeField::from_hex(P224).unwrap(), 11),
        (PrimeField::from_hex(K224).unwrap(), 2),
    ] {
        let n = BigUint::from(non_residue);
        assert!(!is_square(&field, &n));
        assert!(sqrt(&field, &n).is_none());
    }
    assert!(is_square(&small(17), &BigUint::from(2u32)));
    assert!(is_square(&small(17), &BigUint::from(0u32)));
}
