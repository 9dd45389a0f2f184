//! Known-answer vectors in the NIST response-file layout
//!
//! Each block starts with a `[section]` header followed by `Key = Value`
//! records separated by blank lines.

use std::collections::BTreeMap;

/// One record and the section it appeared under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Header text without brackets, e.g. `secp256r1,SHA-256`
    pub section: String,
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Value of `key`, panicking when the fixture lacks it
    pub fn get(&self, key: &str) -> &str {
        self.fields
            .get(key)
            .unwrap_or_else(|| panic!("record in [{}] has no {}", self.section, key))
    }

    /// Whether the expected outcome is a pass
    pub fn passes(&self) -> bool {
        self.get("Result").starts_with('P')
    }
}

/// Parse response-file text into records
pub fn parse(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut section = String::new();
    let mut fields = BTreeMap::new();

    let mut flush = |section: &str, fields: &mut BTreeMap<String, String>| {
        if !fields.is_empty() {
            records.push(Record {
                section: section.to_string(),
                fields: std::mem::take(fields),
            });
        }
    };

    for line in text.lines().map(str::trim) {
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            flush(&section, &mut fields);
        } else if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            flush(&section, &mut fields);
            section = header.to_string();
        } else if let Some((key, value)) = line.split_once('=') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    flush(&section, &mut fields);
    records
}

/// Signature verification over messages; `Result = F` marks a tampered record
pub const SIG_VER: &str = "
# Msg is the hex of the signed bytes

[secp224r1,SHA-224]

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e67
Qx = 605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab
Qy = f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669
R = 2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6
S = b5496815ecddf47c21edc43bbdecf84bdea32d9dc3787b58923ea523
Result = P

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e67
Qx = 605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab
Qy = f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669
R = 2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6
S = b5496815ecddf47c21edc43bbdecf84bdea32d9dc3787b58923ea524
Result = F (4 - S changed)

[secp224r1,SHA-256]

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e67
Qx = 605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab
Qy = f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669
R = 2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6
S = a611665b7481a769a0ec41fa795d5840427456f67eb54bc128e465d5
Result = P

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e66
Qx = 605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab
Qy = f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669
R = 2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6
S = a611665b7481a769a0ec41fa795d5840427456f67eb54bc128e465d5
Result = F (1 - Message changed)

[secp256r1,SHA-256]

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e67
Qx = 8101ece47464a6ead70cf69a6e2bd3d88691a3262d22cba4f7635eaff26680a8
Qy = d8a12ba61d599235f67d9cb4d58f1783d3ca43e78f0a5abaa624079936c0c3a9
R = 7214bc9647160bbd39ff2f80533f5dc6ddd70ddf86bb815661e805d5d4e6f27c
S = 7d1ff961980f961bdaa3233b6209f4013317d3e3f9e1493592dbeaa1af2bc367
Result = P

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e67
Qx = 8101ece47464a6ead70cf69a6e2bd3d88691a3262d22cba4f7635eaff26680a8
Qy = d8a12ba61d599235f67d9cb4d58f1783d3ca43e78f0a5abaa624079936c0c3a9
R = 7214bc9647160bbd39ff2f80533f5dc6ddd70ddf86bb815661e805d5d4e6f27d
S = 7d1ff961980f961bdaa3233b6209f4013317d3e3f9e1493592dbeaa1af2bc367
Result = F (3 - R changed)

[secp384r1,SHA-384]

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e67
Qx = 1fbac8eebd0cbf35640b39efe0808dd774debff20a2a329e91713baf7d7f3c3e81546d883730bee7e48678f857b02ca0
Qy = eb213103bd68ce343365a8a4c3d4555fa385f5330203bdd76ffad1f3affb95751c132007e1b240353cb0a4cf1693bdf9
R = a0c27ec893092dea1e1bd2ccfed3cf945c8134ed0c9f81311a0f4a05942db8dbed8dd59f267471d5462aa14fe72de856
S = 20ab3f45b74f10b6e11f96a2c8eb694d206b9dda86d3c7e331c26b22c987b7537726577667adadf168ebbe803794a402
Result = P

Msg = 54686973206973206f6e6c7920612074657374206d6573736167652e204974206973203438206279746573206c6f6e67
Qx = 1fbac8eebd0cbf35640b39efe0808dd774debff20a2a329e91713baf7d7f3c3e81546d883730bee7e48678f857b02ca0
Qy = eb213103bd68ce343365a8a4c3d4555fa385f5330203bdd76ffad1f3affb95751c132007e1b240353cb0a4cf1693bdf9
R = a0c27ec893092dea1e1bd2ccfed3cf945c8134ed0c9f81311a0f4a05942db8dbed8dd59f267471d5462aa14fe72de856
S = 20ab3f45b74f10b6e11f96a2c8eb694d206b9dda86d3c7e331c26b22c987b7537726577667adadf168ebbe803794a403
Result = F (4 - S changed)

[secp256k1,SHA-256]

Msg = 73616d706c65
Qx = e643980f30dd129877992d5f8a90f79a9ada2f5f8ab8cc9c353bbf6745eac136
Qy = fb17056ebeed245950cb98c472981e17f903a807316c75af531e9a8b9995d0b4
R = 481e92f133054eef703c6fac2c56b242e01efe2cb470f0c5af255dc4d67e7fd2
S = c5ecc005235674f6029f42f66a12743d348cc6ad927ed251614300b1ad8782b2
Result = P

[secp224k1,SHA-224]

Msg = 73616d706c65
Qx = d8984997a55c0dcdc0bea8c8292ce7cc20a6d894b645fdb3deb54553
Qy = 6bc683951a930e271fbdc849d4b5dae37442cd382b096e035da43826
R = b8fcb6dda72155b2e1908c1ab123b5292f1fe7481d124f6af0212f0d
S = fce53e72f629d261c0f961236f8c144f02becaad97e6aee3bc6f7f83
Result = P
";

/// Private key to public key derivation
pub const KEY_PAIR: &str = "
[secp224r1]

d = 16797b5c0c7ed5461e2ff1b88e6eafa03c0f46bf072000dfc830d615
Qx = 605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab
Qy = f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669

[secp256r1]

d = 70a12c2db16845ed56ff68cfc21a472b3f04d7d6851bf6349f2d7d5b3452b38a
Qx = 8101ece47464a6ead70cf69a6e2bd3d88691a3262d22cba4f7635eaff26680a8
Qy = d8a12ba61d599235f67d9cb4d58f1783d3ca43e78f0a5abaa624079936c0c3a9

[secp384r1]

d = c838b85253ef8dc7394fa5808a5183981c7deef5a69ba8f4f2117ffea39cfcd90e95f6cbc854abacab701d50c1f3cf24
Qx = 1fbac8eebd0cbf35640b39efe0808dd774debff20a2a329e91713baf7d7f3c3e81546d883730bee7e48678f857b02ca0
Qy = eb213103bd68ce343365a8a4c3d4555fa385f5330203bdd76ffad1f3affb95751c132007e1b240353cb0a4cf1693bdf9

[secp256k1]

d = 1d2b5c0f3e8a4b6c7d9e0f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b
Qx = e643980f30dd129877992d5f8a90f79a9ada2f5f8ab8cc9c353bbf6745eac136
Qy = fb17056ebeed245950cb98c472981e17f903a807316c75af531e9a8b9995d0b4

[secp224k1]

d = 1d2b5c0f3e8a4b6c7d9e0f1a2b3c4d5e6f708192a3b4c5d6e7f8
Qx = d8984997a55c0dcdc0bea8c8292ce7cc20a6d894b645fdb3deb54553
Qy = 6bc683951a930e271fbdc849d4b5dae37442cd382b096e035da43826
";

/// Public-key validation; `Result = F` records must be rejected
pub const PKV: &str = "
[secp256r1]

Qx = 8101ece47464a6ead70cf69a6e2bd3d88691a3262d22cba4f7635eaff26680a8
Qy = d8a12ba61d599235f67d9cb4d58f1783d3ca43e78f0a5abaa624079936c0c3a9
Result = P

Qx = 8101ece47464a6ead70cf69a6e2bd3d88691a3262d22cba4f7635eaff26680a8
Qy = d8a12ba61d599235f67d9cb4d58f1783d3ca43e78f0a5abaa624079936c0c3aa
Result = F (1 - Point not on curve)

Qx = ffffffff00000001000000000000000000000000ffffffffffffffffffffffff
Qy = d8a12ba61d599235f67d9cb4d58f1783d3ca43e78f0a5abaa624079936c0c3a9
Result = F (2 - Qx out of range)

Qx = e643980f30dd129877992d5f8a90f79a9ada2f5f8ab8cc9c353bbf6745eac136
Qy = fb17056ebeed245950cb98c472981e17f903a807316c75af531e9a8b9995d0b4
Result = F (1 - Point not on curve)

[secp256k1]

Qx = e643980f30dd129877992d5f8a90f79a9ada2f5f8ab8cc9c353bbf6745eac136
Qy = fb17056ebeed245950cb98c472981e17f903a807316c75af531e9a8b9995d0b4
Result = P

Qx = 0
Qy = 0
Result = F (1 - Point not on curve)
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_records() {
        let records = parse(SIG_VER);
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].section, "secp224r1,SHA-224");
        assert!(records[0].passes());
        assert!(!records[1].passes());
        assert_eq!(records[9].get("Msg"), "73616d706c65");
        assert_eq!(parse(KEY_PAIR).len(), 5);
        assert_eq!(parse(PKV).len(), 6);
    }
}
