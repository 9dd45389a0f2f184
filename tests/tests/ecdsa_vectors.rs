//! Known-answer tests through the public facade

use ecprime::prelude::*;
use ecprime::sign::ecdsa::validate_public_key;
use ecprime_tests::vectors::{self, Record};
use ecprime_tests::{big, seeded_rng};

fn digest_by_name(name: &str) -> DigestAlgorithm {
    match name {
        "SHA-1" => DigestAlgorithm::Sha1,
        "SHA-224" => DigestAlgorithm::Sha224,
        "SHA-256" => DigestAlgorithm::Sha256,
        "SHA-384" => DigestAlgorithm::Sha384,
        other => panic!("unsupported digest {}", other),
    }
}

fn scheme_for(record: &Record) -> Ecdsa {
    let (curve, digest) = record.section.split_once(',').unwrap();
    Ecdsa::named(curve).unwrap().with_digest(digest_by_name(digest))
}

fn point(record: &Record) -> AffinePoint {
    AffinePoint::from_hex(record.get("Qx"), record.get("Qy")).unwrap()
}

#[test]
fn test_signature_verification_vectors() {
    for record in vectors::parse(vectors::SIG_VER) {
        let scheme = scheme_for(&record);
        let message = hex::decode(record.get("Msg")).unwrap();
        let signature = EcdsaSignature::from_hex(record.get("R"), record.get("S")).unwrap();

        let outcome = scheme.verify(&message, &signature, &point(&record)).unwrap();
        assert_eq!(
            outcome.is_valid(),
            record.passes(),
            "[{}] {}",
            record.section,
            record.get("Result")
        );
    }
}

#[test]
fn test_der_encoded_vectors_verify() {
    for record in vectors::parse(vectors::SIG_VER).iter().filter(|r| r.passes()) {
        let scheme = scheme_for(record);
        let message = hex::decode(record.get("Msg")).unwrap();
        let der = EcdsaSignature::from_hex(record.get("R"), record.get("S"))
            .unwrap()
            .to_der();
        let signature = EcdsaSignature::from_der(&der).unwrap();
        assert!(scheme.verify(&message, &signature, &point(record)).unwrap().is_valid());
    }
}

#[test]
fn test_key_pair_vectors() {
    for record in vectors::parse(vectors::KEY_PAIR) {
        let group = CurveGroup::named(&record.section).unwrap();
        let key = KeyPair::from_private(group, &big(record.get("d"))).unwrap();
        assert_eq!(key.public_key(), &point(&record), "[{}]", record.section);
    }
}

#[test]
fn test_public_key_validation_vectors() {
    for record in vectors::parse(vectors::PKV) {
        let group = CurveGroup::named(&record.section).unwrap();
        let outcome = validate_public_key(&group, &point(&record));
        assert_eq!(
            outcome.is_ok(),
            record.passes(),
            "[{}] {}",
            record.section,
            record.get("Result")
        );
    }
}

#[test]
fn test_fresh_signatures_on_vector_keys() {
    let mut rng = seeded_rng(11);
    for record in vectors::parse(vectors::KEY_PAIR) {
        let scheme = Ecdsa::named(&record.section).unwrap();
        let key = KeyPair::from_private(scheme.group().clone(), &big(record.get("d"))).unwrap();
        let signature = scheme.sign(b"fresh signature", &key, &mut rng).unwrap();
        assert!(scheme
            .verify(b"fresh signature", &signature, key.public_key())
            .unwrap()
            .is_valid());
    }
}
