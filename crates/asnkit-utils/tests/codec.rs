//! End-to-end decode/encode checks on certificate-shaped documents.

use asnkit_types::{Asn1Error, DecodeError, EncodeError};
use asnkit_utils::asn1::{
    decode, decode_with_config, encode, traverse, Asn1Constructive, Asn1Data, Asn1Primitive,
    Asn1Tagged, DecoderConfig, NativeValue, TagClass, TaggedValue, Tagging, UniversalType,
};
use asnkit_utils::oid::OidRegistry;
use chrono::{TimeZone, Utc};

fn hex(s: &str) -> Vec<u8> {
    let s: String = s.split_whitespace().collect();
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

/// A cut-down TBSCertificate: version, serial, algorithm, issuer, validity.
fn tbs_certificate() -> Asn1Data {
    let name = Asn1Constructive::sequence(vec![Asn1Constructive::set(vec![
        Asn1Constructive::sequence(vec![
            Asn1Primitive::object_id("CN").into(),
            Asn1Primitive::utf8_string("example").into(),
        ])
        .into(),
    ])
    .into()]);
    let validity = Asn1Constructive::sequence(vec![
        Asn1Primitive::utc_time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).into(),
        Asn1Primitive::generalized_time(Utc.with_ymd_and_hms(2051, 1, 1, 0, 0, 0).unwrap()).into(),
    ]);
    Asn1Constructive::sequence(vec![
        Asn1Primitive::integer(2).with_tag(0, Tagging::Explicit).into(),
        Asn1Primitive::integer(0x0102_0304_0506_0708_i64).into(),
        Asn1Constructive::sequence(vec![
            Asn1Primitive::object_id("sha1WithRSAEncryption").into(),
            Asn1Primitive::null().into(),
        ])
        .into(),
        name.into(),
        validity.into(),
        Asn1Primitive::bit_string(vec![0x05, 0xA0]).with_tag(1, Tagging::Implicit).into(),
    ])
    .into()
}

#[test]
fn test_der_round_trip_is_byte_exact() {
    let der = tbs_certificate().to_der().unwrap();
    let decoded = decode(&der).unwrap();
    assert_eq!(decoded.to_der().unwrap(), der);
}

#[test]
fn test_decoded_tree_shape() {
    let der = tbs_certificate().to_der().unwrap();
    let decoded = decode(&der).unwrap();
    let tbs = decoded.as_constructive().unwrap();
    assert_eq!(tbs.len(), 6);

    // [0] EXPLICIT INTEGER comes back as a generic tagged value
    let version = tbs.get(0).and_then(Asn1Data::as_tagged).unwrap();
    assert_eq!((version.tag, version.tag_class), (0, TagClass::ContextSpecific));
    assert!(version.is_constructed());

    let alg = tbs.get(2).and_then(Asn1Data::as_constructive).unwrap();
    let oid = alg.get(0).and_then(Asn1Data::as_primitive).unwrap();
    assert_eq!(oid.value(), &NativeValue::ObjectId("1.2.840.113549.1.1.5".into()));
    assert_eq!(oid.long_name().as_deref(), Some("sha1WithRSAEncryption"));

    // [1] IMPLICIT BIT STRING is primitive, so its content stays raw
    let unique_id = tbs.get(5).and_then(Asn1Data::as_tagged).unwrap();
    assert_eq!(unique_id.value, TaggedValue::Raw(vec![0x05, 0x05, 0xA0]));
}

#[test]
fn test_spot_encodings() {
    let cases: Vec<(Asn1Data, &str)> = vec![
        (Asn1Primitive::object_id("rsaEncryption").into(), "06 09 2A 86 48 86 F7 0D 01 01 01"),
        (Asn1Primitive::boolean(true).into(), "01 01 FF"),
        (Asn1Primitive::null().into(), "05 00"),
        (Asn1Primitive::bit_string(vec![0x80]).into(), "03 02 07 80"),
        (Asn1Primitive::integer(5).with_tag(0, Tagging::Explicit).into(), "A0 03 02 01 05"),
        (Asn1Primitive::integer(5).with_tag(0, Tagging::Implicit).into(), "80 01 05"),
    ];
    for (value, expected) in cases {
        assert_eq!(encode(&value).unwrap(), hex(expected), "{expected}");
        assert_eq!(decode(&hex(expected)).unwrap().to_der().unwrap(), hex(expected));
    }
}

#[test]
fn test_unknown_context_tag_is_generic() {
    let value = decode(&hex("A0 03 02 01 05")).unwrap();
    let expected = Asn1Tagged::explicit(0, Asn1Primitive::integer(5));
    assert_eq!(value, Asn1Data::from(expected));
}

#[test]
fn test_malformed_length() {
    assert_eq!(decode(&hex("30 05 02 01")), Err(DecodeError::Truncated));
    let err: Asn1Error = decode(&hex("30 FF")).unwrap_err().into();
    assert_eq!(err.to_string(), "decode: invalid length encoding");
}

#[test]
fn test_ber_input_reencodes_as_der() {
    // indefinite SEQUENCE holding a constructed OCTET STRING and a padded INTEGER
    let ber = hex("30 80 24 80 04 01 AA 04 01 BB 00 00 02 02 00 01 00 00");
    let value = decode(&ber).unwrap();
    assert_eq!(value.to_der().unwrap(), hex("30 07 04 02 AA BB 02 01 01"));
    assert!(decode_with_config(&ber, DecoderConfig::strict()).is_err());
}

#[test]
fn test_long_form_tags_round_trip() {
    let value = Asn1Tagged::new(
        1000,
        TagClass::Private,
        TaggedValue::Nested(vec![Asn1Primitive::null().into()]),
    );
    let der = Asn1Data::from(value.clone()).to_der().unwrap();
    assert_eq!(der, hex("FF 87 68 02 05 00"));
    assert_eq!(decode(&der).unwrap(), Asn1Data::from(value));
}

#[test]
fn test_utc_time_window() {
    let value = decode(&hex("17 0D 34 39 31 32 33 31 32 33 35 39 35 39 5A")).unwrap();
    let time = value.as_primitive().and_then(|p| p.as_time().copied()).unwrap();
    assert_eq!(time, Utc.with_ymd_and_hms(2049, 12, 31, 23, 59, 59).unwrap());

    let value = decode(&hex("17 0D 35 30 30 31 30 31 30 30 30 30 30 30 5A")).unwrap();
    let time = value.as_primitive().and_then(|p| p.as_time().copied()).unwrap();
    assert_eq!(time, Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_depth_limit_on_hostile_input() {
    let mut data = Vec::new();
    for _ in 0..10_000 {
        data.extend_from_slice(&[0xA0, 0x80]);
    }
    assert!(matches!(decode(&data), Err(DecodeError::DepthExceeded { .. })));
    assert!(traverse(&data).is_err());
}

#[test]
fn test_traverse_matches_tree() {
    let der = tbs_certificate().to_der().unwrap();
    let infos = traverse(&der).unwrap();
    assert_eq!(infos[0].offset, 0);
    assert_eq!(infos[0].header_len + infos[0].length, der.len());
    let max_depth = infos.iter().map(|i| i.depth).max().unwrap();
    // SEQUENCE > Name > SET > SEQUENCE > OID
    assert_eq!(max_depth, 4);
}

#[test]
fn test_runtime_registration_is_visible_to_codec() {
    let registry = OidRegistry::global();
    registry
        .register("1.3.6.1.4.1.55555.1", "tstExt", "testExtensionForCodec")
        .unwrap();

    let value = Asn1Primitive::object_id("testExtensionForCodec");
    assert_eq!(value.to_der().unwrap(), hex("06 09 2B 06 01 04 01 83 B2 03 01"));

    let decoded = decode(&hex("06 09 2B 06 01 04 01 83 B2 03 01")).unwrap();
    let decoded = decoded.as_primitive().unwrap();
    assert_eq!(decoded.short_name().as_deref(), Some("tstExt"));
    assert_eq!(decoded.long_name().as_deref(), Some("testExtensionForCodec"));
}

#[test]
fn test_bmp_string_round_trip() {
    let value = Asn1Primitive::string(UniversalType::BmpString, vec![0x00, 0x48, 0x00, 0x69]);
    let der = value.to_der().unwrap();
    assert_eq!(der, hex("1E 04 00 48 00 69"));
    let decoded = decode(&der).unwrap();
    assert_eq!(decoded.as_primitive().and_then(|p| p.text()).as_deref(), Some("Hi"));
}

#[test]
fn test_values_survive_encode_then_decode() {
    let big = num_bigint::BigInt::parse_bytes(b"-123456789012345678901234567890", 10).unwrap();
    let whole = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    let fractional = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
    let values: Vec<Asn1Data> = vec![
        Asn1Primitive::boolean(true).into(),
        Asn1Primitive::boolean(false).into(),
        Asn1Primitive::integer(0).into(),
        Asn1Primitive::integer(-1).into(),
        Asn1Primitive::integer(-129).into(),
        Asn1Primitive::integer(big).into(),
        Asn1Primitive::enumerated(3).into(),
        Asn1Primitive::bit_string_with_unused(Vec::new(), 0).into(),
        Asn1Primitive::bit_string_with_unused(vec![0xFF], 0).into(),
        Asn1Primitive::bit_string_with_unused(vec![0x0F, 0xF0], 4).into(),
        Asn1Primitive::bit_string_with_unused(vec![0x80], 7).into(),
        Asn1Primitive::octet_string(vec![0x00, 0xFF, 0x10]).into(),
        Asn1Primitive::null().into(),
        Asn1Primitive::object_id("1.2.840.113549.1.1.1").into(),
        Asn1Primitive::object_id("2.999.1").into(),
        Asn1Primitive::utf8_string("h\u{e9}llo").into(),
        Asn1Primitive::string(UniversalType::NumericString, b"0123 45".to_vec()).into(),
        Asn1Primitive::printable_string("Example Org").into(),
        Asn1Primitive::string(UniversalType::T61String, vec![0x68, 0xE9]).into(),
        Asn1Primitive::ia5_string("user@example.com").into(),
        Asn1Primitive::string(UniversalType::GeneralString, b"general".to_vec()).into(),
        Asn1Primitive::string(UniversalType::UniversalString, vec![0, 0, 0, 0x41]).into(),
        Asn1Primitive::string(UniversalType::BmpString, vec![0x00, 0x41, 0x04, 0x14]).into(),
        Asn1Primitive::utc_time(whole).into(),
        Asn1Primitive::generalized_time(whole).into(),
        Asn1Primitive::generalized_time(fractional).into(),
        Asn1Constructive::sequence(Vec::new()).into(),
        Asn1Constructive::sequence(vec![
            Asn1Primitive::integer(1).into(),
            Asn1Constructive::sequence(vec![Asn1Primitive::null().into()]).into(),
        ])
        .into(),
        Asn1Constructive::set(vec![
            Asn1Primitive::integer(2).into(),
            Asn1Primitive::integer(1).into(),
        ])
        .into(),
    ];
    for value in values {
        let der = encode(&value).unwrap();
        assert_eq!(decode(&der).unwrap(), value, "{value:?}");
    }
}

#[test]
fn test_utc_time_with_fraction_is_rejected() {
    let time = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
    let value = Asn1Data::from(Asn1Primitive::utc_time(time));
    assert_eq!(encode(&value), Err(EncodeError::TimePrecision));
}

#[test]
fn test_object_descriptor_with_nested_content() {
    let value = decode(&hex("07 03 02 01 05")).unwrap();
    let expected = Asn1Tagged::new(
        7,
        TagClass::Universal,
        TaggedValue::Nested(vec![Asn1Primitive::integer(5).into()]),
    );
    assert_eq!(value, Asn1Data::from(expected));
}
