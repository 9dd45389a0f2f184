//! Named short-Weierstrass curves over prime fields
//!
//! Values follow SEC 2 v2 and FIPS 186-4. Every field is a big-endian
//! base-16 string without prefix.

/// Domain parameters of a curve `y² = x³ + ax + b` over `GF(p)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Curve identifier
    pub name: &'static str,
    /// Field prime
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Generator x-coordinate
    pub gx: &'static str,
    /// Generator y-coordinate
    pub gy: &'static str,
    /// Order of the generator
    pub n: &'static str,
    /// Cofactor
    pub h: &'static str,
}

/// secp224k1 (Koblitz curve, 225-bit group order)
pub const SECP224K1: CurveParams = CurveParams {
    name: "secp224k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFE56D",
    a: "0",
    b: "5",
    gx: "A1455B334DF099DF30FC28A169A467E9E47075A90F7E650EB6B7A45C",
    gy: "7E089FED7FBA344282CAFBD6F7E319F7C0B0BD59E2CA4BDB556D61A5",
    n: "010000000000000000000000000001DCE8D2EC6184CAF0A971769FB1F7",
    h: "1",
};

/// secp224r1, also known as NIST P-224
pub const SECP224R1: CurveParams = CurveParams {
    name: "secp224r1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    gx: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
    gy: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
    h: "1",
};

/// secp256k1 (Koblitz curve)
pub const SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "0",
    b: "7",
    gx: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    gy: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    h: "1",
};

/// secp256r1, also known as NIST P-256
pub const SECP256R1: CurveParams = CurveParams {
    name: "secp256r1",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    h: "1",
};

/// secp384r1, also known as NIST P-384
pub const SECP384R1: CurveParams = CurveParams {
    name: "secp384r1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC",
    b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    gx: "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7",
    gy: "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
    h: "1",
};

/// All compiled-in curves, in ascending field size
pub const NAMED_CURVES: &[CurveParams] = &[SECP224K1, SECP224R1, SECP256K1, SECP256R1, SECP384R1];

/// NIST and ANSI X9.62 aliases of the SEC 2 names
const ALIASES: &[(&str, &str)] = &[
    ("P-224", "secp224r1"),
    ("P-256", "secp256r1"),
    ("prime256v1", "secp256r1"),
    ("P-384", "secp384r1"),
];

/// Look up a curve by its SEC 2 name
///
/// NIST aliases (`P-224`, `P-256`, `P-384`, `prime256v1`) are accepted too.
/// Matching is case-insensitive.
pub fn curve_by_name(name: &str) -> Option<&'static CurveParams> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map_or(name, |(_, canonical)| *canonical);
    NAMED_CURVES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
