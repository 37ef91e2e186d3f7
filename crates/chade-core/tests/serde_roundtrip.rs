//! Serde serialization/deserialization round-trip tests.

#![cfg(feature = "serde")]

use chade_core::*;

fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

#[test]
fn test_serde_codepoint_is_a_number() {
    let cp = Codepoint::from('é');
    assert_eq!(serde_json::to_string(&cp).unwrap(), "233");
    roundtrip(&cp);
}

#[test]
fn test_serde_codepoint_rejects_out_of_range() {
    assert!(serde_json::from_str::<Codepoint>("1114112").is_err());
}

#[test]
fn test_serde_byte_sequence_rejects_empty() {
    roundtrip(&ByteSequence::new(vec![0xE3, 0x81, 0x82]).unwrap());
    assert!(serde_json::from_str::<ByteSequence>("[]").is_err());
}

#[test]
fn test_serde_interpretation() {
    roundtrip(&Interpretation::claimed(
        "Bytes",
        InterpretationOutcome::Bytes(ByteSequence::new(vec![0x41]).unwrap()),
    ));
    roundtrip(&Interpretation::unrecognized());
}

#[test]
fn test_serde_outcome_tagging() {
    let outcome = InterpretationOutcome::Codepoint(Codepoint::from('A'));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({"kind": "codepoint", "value": 65})
    );
}

#[test]
fn test_serde_decode_report() {
    let mut report = DecodeReport::new();
    report.record("ASCII", DecodeAttempt::Success(Codepoint::from('A')));
    report.record("UTF-16LE", DecodeAttempt::failure("unacceptable number of bytes"));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["successes"]["65"], serde_json::json!(["ASCII"]));
    assert_eq!(value["failures"][0]["decoder"], "UTF-16LE");
}

#[test]
fn test_serde_char_properties() {
    roundtrip(&CharProperties {
        name: "LATIN SMALL LETTER E WITH ACUTE".to_string(),
        block: "Latin-1 Supplement".to_string(),
        general_category: "Ll".to_string(),
        ..CharProperties::default()
    });
    roundtrip(&Representation {
        encoder: "UTF-8".to_string(),
        value: "(hex) C3 A9".to_string(),
    });
}
