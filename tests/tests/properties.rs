//! Property tests for field exponentiation, scalar multiplication and ECDSA

use ecprime::algorithms::field::{pow_always_multiply, pow_atomic, pow_montgomery, pow_window};
use ecprime::prelude::*;
use ecprime_tests::seeded_rng;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 1..=32).prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn exponentiation_ladders_agree(base in scalar(), exp in scalar(), window in 1usize..=6) {
        let group = CurveGroup::named("secp256r1").unwrap();
        let field = group.field();
        let ops = field.ct();
        let expected = field.fast().pow(&field.reduce(&base), &exp);

        prop_assert_eq!(&pow_always_multiply(&ops, &base, &exp), &expected);
        prop_assert_eq!(&pow_atomic(&ops, &base, &exp), &expected);
        prop_assert_eq!(&pow_montgomery(&ops, &base, &exp), &expected);
        prop_assert_eq!(&pow_window(&ops, &base, &exp, window).unwrap(), &expected);
    }

    #[test]
    fn scalar_multiplication_strategies_agree(k in scalar(), seed in any::<u64>()) {
        let group = CurveGroup::named("secp256k1").unwrap();
        let mut rng = seeded_rng(seed);
        let expected = group.mul_projective(&k, group.generator()).unwrap();
        for strategy in ScalarMulStrategy::ALL {
            let got = group.mul_generator(strategy, &k, &mut rng).unwrap();
            prop_assert_eq!(&got, &expected, "{}", strategy);
        }
    }

    #[test]
    fn scalar_multiplication_is_linear(a in scalar(), b in scalar()) {
        let group = CurveGroup::named("secp224k1").unwrap();
        let g = group.generator();
        let sum = group.mul_projective(&(&a + &b), g).unwrap();
        let parts = group
            .add(&group.mul_projective(&a, g).unwrap(), &group.mul_projective(&b, g).unwrap())
            .unwrap();
        prop_assert_eq!(sum, parts);
    }

    #[test]
    fn compression_round_trips(k in scalar()) {
        let group = CurveGroup::named("secp224r1").unwrap();
        let p = group.mul_projective(&k, group.generator()).unwrap();
        prop_assume!(!p.is_infinity());
        let compressed = group.compress(&p).unwrap();
        prop_assert_eq!(group.decompress(&compressed).unwrap(), p);
    }

    #[test]
    fn signatures_verify_and_resist_tampering(
        message in prop::collection::vec(any::<u8>(), 0..128),
        seed in any::<u64>(),
    ) {
        let mut rng = seeded_rng(seed);
        let scheme = Ecdsa::named("secp224r1").unwrap();
        let key = scheme.keypair(&mut rng).unwrap();
        let signature = scheme.sign(&message, &key, &mut rng).unwrap();
        prop_assert!(scheme.verify(&message, &signature, key.public_key()).unwrap().is_valid());

        let mut tampered = message.clone();
        match tampered.first_mut() {
            Some(byte) => *byte ^= 0x01,
            None => tampered.push(0x00),
        }
        prop_assert_eq!(
            scheme.verify(&tampered, &signature, key.public_key()).unwrap(),
            Verification::Invalid
        );
    }

    #[test]
    fn der_encoding_round_trips(r in scalar(), s in scalar()) {
        let signature = EcdsaSignature::new(r, s);
        prop_assert_eq!(EcdsaSignature::from_der(&signature.to_der()).unwrap(), signature);
    }
}
