//! Key and signature lifecycle across crate boundaries

use ecprime::params::traditional::ecdsa::SECP256R1;
use ecprime::prelude::*;
use ecprime::sign::ecdsa::{PrivateKeyRecord, PublicKeyRecord, SignatureRecord};
use ecprime_tests::seeded_rng;

#[test]
fn test_records_survive_json() {
    let mut rng = seeded_rng(1);
    let scheme = Ecdsa::named("secp224k1").unwrap();
    let key = scheme.keypair(&mut rng).unwrap();
    let signature = scheme.sign(b"persisted", &key, &mut rng).unwrap();

    let private_json = serde_json::to_string(&key.to_private_record().unwrap()).unwrap();
    let public_json = serde_json::to_string(&key.to_public_record().unwrap()).unwrap();
    let signature_json = serde_json::to_string(&signature.to_record()).unwrap();
    assert!(public_json.contains("\"curve\":\"secp224k1\""));

    let private: PrivateKeyRecord = serde_json::from_str(&private_json).unwrap();
    let public: PublicKeyRecord = serde_json::from_str(&public_json).unwrap();
    let record: SignatureRecord = serde_json::from_str(&signature_json).unwrap();

    let restored = KeyPair::from_private_record(&private).unwrap();
    assert_eq!(restored.private_key(), key.private_key());
    let verifier = KeyPair::from_public_record(&public).unwrap();
    let signature = EcdsaSignature::from_record(&record).unwrap();
    assert!(scheme
        .verify(b"persisted", &signature, verifier.public_key())
        .unwrap()
        .is_valid());
}

#[test]
fn test_explicit_curve_parameters() {
    let mut rng = seeded_rng(2);
    let named = CurveGroup::named("prime256v1").unwrap();
    assert_eq!(CurveGroup::from_params(&SECP256R1).unwrap(), named);

    let explicit = CurveGroup::new(
        "custom-p256",
        named.modulus().clone(),
        named.a().clone(),
        named.b().clone(),
        named.generator().clone(),
        named.order().clone(),
        named.cofactor().clone(),
    )
    .unwrap();
    let scheme = Ecdsa::new(explicit);
    assert_eq!(scheme.name(), "ECDSA-custom-p256-SHA-256");

    let key = scheme.keypair(&mut rng).unwrap();
    let signature = scheme.sign(b"explicit", &key, &mut rng).unwrap();

    // the same point verifies on the named curve
    let named_scheme = Ecdsa::new(named);
    assert!(named_scheme
        .verify(b"explicit", &signature, key.public_key())
        .unwrap()
        .is_valid());
}

#[test]
fn test_errors_convert_to_api_errors() -> ecprime::api::Result<()> {
    let mut rng = seeded_rng(3);
    let scheme = Ecdsa::named("secp256k1")?;
    let key = scheme.keypair(&mut rng)?;
    let public_only = KeyPair::from_public(scheme.group().clone(), key.public_key().clone())?;

    let err = scheme.sign(b"no secret", &public_only, &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }));
    assert_eq!(err.context(), "ECDSA sign");

    let err = Ecdsa::named("curve25519").unwrap_err();
    assert!(matches!(Error::from(err), Error::InvalidCurve { .. }));
    Ok(())
}

#[test]
fn test_wiping_a_key_pair() {
    let mut rng = seeded_rng(4);
    let scheme = Ecdsa::named("secp224r1").unwrap();
    let mut key = scheme.keypair(&mut rng).unwrap();
    let copy = key.clone();

    key.zeroize();
    assert!(!key.has_private_key());
    assert!(scheme.sign(b"wiped", &key, &mut rng).is_err());
    assert!(scheme.sign(b"wiped", &copy, &mut rng).is_ok());
}
