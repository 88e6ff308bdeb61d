//! The ASN.1 value model.
//!
//! A decoded or hand-built document is a tree of [`Asn1Data`] nodes. Each
//! node is one of three closed variants: a scalar [`Asn1Primitive`], a
//! SEQUENCE/SET [`Asn1Constructive`], or a generic [`Asn1Tagged`] element
//! whose contents are kept as nested nodes or raw octets.

use std::fmt;
use std::str::FromStr;

use asnkit_types::EncodeError;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

use super::encoder::Encoder;
use super::universal::{NativeCategory, UniversalType};
use super::TagClass;
use crate::oid::OidRegistry;

/// EXPLICIT or IMPLICIT tagging of a primitive or constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagging {
    Explicit,
    Implicit,
}

impl Tagging {
    pub fn as_str(self) -> &'static str {
        match self {
            Tagging::Explicit => "EXPLICIT",
            Tagging::Implicit => "IMPLICIT",
        }
    }
}

impl fmt::Display for Tagging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tagging {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(':').unwrap_or(s) {
            "EXPLICIT" => Ok(Tagging::Explicit),
            "IMPLICIT" => Ok(Tagging::Implicit),
            _ => Err(EncodeError::InvalidTagging(s.to_string())),
        }
    }
}

/// Scalar content of a primitive value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeValue {
    Boolean(bool),
    Integer(BigInt),
    BitString { data: Vec<u8>, unused_bits: u8 },
    OctetString(Vec<u8>),
    Null,
    /// A dotted OID or a registered name; resolved when encoding.
    ObjectId(String),
    /// Content octets of a character string, in the string type's own
    /// encoding.
    Text(Vec<u8>),
    Time(DateTime<Utc>),
}

impl NativeValue {
    pub fn category(&self) -> NativeCategory {
        match self {
            NativeValue::Boolean(_) => NativeCategory::Boolean,
            NativeValue::Integer(_) => NativeCategory::Integer,
            NativeValue::BitString { .. } => NativeCategory::BitString,
            NativeValue::OctetString(_) => NativeCategory::OctetString,
            NativeValue::Null => NativeCategory::Null,
            NativeValue::ObjectId(_) => NativeCategory::ObjectId,
            NativeValue::Text(_) => NativeCategory::Text,
            NativeValue::Time(_) => NativeCategory::Time,
        }
    }

    /// Short description of the value shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        self.category().as_str()
    }
}

/// Count unused trailing bits of a bit string buffer.
///
/// Each trailing zero byte counts 8; the last nonzero byte contributes its
/// trailing zero bits. An all-zero buffer yields `8 * data.len()`.
pub fn unused_bits_of(data: &[u8]) -> usize {
    let mut unused = 0;
    for &byte in data.iter().rev() {
        if byte == 0 {
            unused += 8;
        } else {
            unused += byte.trailing_zeros() as usize;
            break;
        }
    }
    unused
}

/// Tagging mode for a value of type `ty` carrying `tag`/`tag_class`.
fn tagging_for(ty: UniversalType, tag: u32, tag_class: TagClass, tagging: Option<Tagging>) -> Option<Tagging> {
    let natural = tag == ty.tag_number() && tag_class == TagClass::Universal;
    match tagging {
        None if !natural => Some(Tagging::Explicit),
        other => other,
    }
}

/// A primitive universal value, optionally re-tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asn1Primitive {
    ty: UniversalType,
    value: NativeValue,
    tag: u32,
    tag_class: TagClass,
    tagging: Option<Tagging>,
}

impl Asn1Primitive {
    /// A value of universal type `ty` with its natural tag.
    ///
    /// The value shape is checked against `ty` when encoding.
    pub fn new(ty: UniversalType, value: NativeValue) -> Self {
        Self {
            ty,
            value,
            tag: ty.tag_number(),
            tag_class: TagClass::Universal,
            tagging: None,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(UniversalType::Boolean, NativeValue::Boolean(value))
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::new(UniversalType::Integer, NativeValue::Integer(value.into()))
    }

    pub fn enumerated(value: impl Into<BigInt>) -> Self {
        Self::new(UniversalType::Enumerated, NativeValue::Integer(value.into()))
    }

    /// A BIT STRING whose unused bit count is derived from the data.
    ///
    /// Buffers ending in a zero byte (including empty ones) get a count of 0.
    pub fn bit_string(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let unused = unused_bits_of(&data);
        let unused_bits = if unused > 7 { 0 } else { unused as u8 };
        Self::bit_string_with_unused(data, unused_bits)
    }

    pub fn bit_string_with_unused(data: impl Into<Vec<u8>>, unused_bits: u8) -> Self {
        Self::new(
            UniversalType::BitString,
            NativeValue::BitString {
                data: data.into(),
                unused_bits,
            },
        )
    }

    pub fn octet_string(data: impl Into<Vec<u8>>) -> Self {
        Self::new(UniversalType::OctetString, NativeValue::OctetString(data.into()))
    }

    pub fn null() -> Self {
        Self::new(UniversalType::Null, NativeValue::Null)
    }

    /// An OBJECT IDENTIFIER from a dotted string or a registered name.
    ///
    /// The input is kept as given and resolved when encoding; it is not
    /// replaced by [`OidRegistry::display_name_for`].
    pub fn object_id(name_or_oid: impl Into<String>) -> Self {
        Self::new(UniversalType::ObjectId, NativeValue::ObjectId(name_or_oid.into()))
    }

    pub fn utf8_string(s: &str) -> Self {
        Self::string(UniversalType::Utf8String, s.as_bytes().to_vec())
    }

    pub fn printable_string(s: &str) -> Self {
        Self::string(UniversalType::PrintableString, s.as_bytes().to_vec())
    }

    pub fn ia5_string(s: &str) -> Self {
        Self::string(UniversalType::Ia5String, s.as_bytes().to_vec())
    }

    /// A character string of type `ty` from its raw content octets.
    pub fn string(ty: UniversalType, content: Vec<u8>) -> Self {
        Self::new(ty, NativeValue::Text(content))
    }

    pub fn utc_time(time: DateTime<Utc>) -> Self {
        Self::new(UniversalType::UtcTime, NativeValue::Time(time))
    }

    pub fn generalized_time(time: DateTime<Utc>) -> Self {
        Self::new(UniversalType::GeneralizedTime, NativeValue::Time(time))
    }

    /// Re-tag with a CONTEXT_SPECIFIC tag.
    pub fn with_tag(mut self, tag: u32, tagging: Tagging) -> Self {
        self.set_tag(tag, TagClass::ContextSpecific, Some(tagging));
        self
    }

    pub fn with_tag_class(mut self, tag_class: TagClass) -> Self {
        self.set_tag(self.tag, tag_class, self.tagging);
        self
    }

    /// Set the tag, class and tagging mode.
    ///
    /// A tag other than the natural one with no tagging mode is tagged
    /// EXPLICIT.
    pub fn set_tag(&mut self, tag: u32, tag_class: TagClass, tagging: Option<Tagging>) {
        self.tag = tag;
        self.tag_class = tag_class;
        self.tagging = tagging_for(self.ty, tag, tag_class, tagging);
    }

    /// Go back to the natural universal tag.
    pub fn clear_tag(&mut self) {
        self.set_tag(self.ty.tag_number(), TagClass::Universal, None);
    }

    pub fn set_value(&mut self, value: NativeValue) {
        self.value = value;
    }

    pub fn universal_type(&self) -> UniversalType {
        self.ty
    }

    pub fn value(&self) -> &NativeValue {
        &self.value
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn tag_class(&self) -> TagClass {
        self.tag_class
    }

    pub fn tagging(&self) -> Option<Tagging> {
        self.tagging
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            NativeValue::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match &self.value {
            NativeValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Raw bytes of a bit string, octet string or character string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &self.value {
            NativeValue::BitString { data, .. } => Some(data),
            NativeValue::OctetString(data) | NativeValue::Text(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&DateTime<Utc>> {
        match &self.value {
            NativeValue::Time(t) => Some(t),
            _ => None,
        }
    }

    /// Decode character string content according to its string type.
    ///
    /// T61String and GeneralString are read as Latin-1, BMPString as
    /// UTF-16BE and UniversalString as UCS-4. Returns `None` for non-text
    /// values or content that is not valid in its encoding.
    pub fn text(&self) -> Option<String> {
        let NativeValue::Text(bytes) = &self.value else {
            return None;
        };
        match self.ty {
            UniversalType::T61String | UniversalType::GeneralString => {
                Some(bytes.iter().map(|&b| b as char).collect())
            }
            UniversalType::BmpString => {
                if bytes.len() % 2 != 0 {
                    return None;
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&units).ok()
            }
            UniversalType::UniversalString => {
                if bytes.len() % 4 != 0 {
                    return None;
                }
                bytes
                    .chunks_exact(4)
                    .map(|c| char::from_u32(u32::from_be_bytes([c[0], c[1], c[2], c[3]])))
                    .collect()
            }
            _ => String::from_utf8(bytes.clone()).ok(),
        }
    }

    /// Dotted OID of an object identifier, resolved through the global
    /// registry.
    pub fn oid(&self) -> Option<String> {
        match &self.value {
            NativeValue::ObjectId(s) => Some(OidRegistry::global().resolve(s)),
            _ => None,
        }
    }

    pub fn short_name(&self) -> Option<String> {
        match &self.value {
            NativeValue::ObjectId(s) => OidRegistry::global().short_name_for(s),
            _ => None,
        }
    }

    pub fn long_name(&self) -> Option<String> {
        match &self.value {
            NativeValue::ObjectId(s) => OidRegistry::global().long_name_for(s),
            _ => None,
        }
    }

    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        let mut enc = Encoder::new();
        enc.write_primitive(self)?;
        Ok(enc.finish())
    }
}

/// A SEQUENCE or SET with ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asn1Constructive {
    ty: UniversalType,
    children: Vec<Asn1Data>,
    tag: u32,
    tag_class: TagClass,
    tagging: Option<Tagging>,
}

impl Asn1Constructive {
    pub(crate) fn with_type(ty: UniversalType, children: Vec<Asn1Data>) -> Self {
        Self {
            ty,
            children,
            tag: ty.tag_number(),
            tag_class: TagClass::Universal,
            tagging: None,
        }
    }

    pub fn sequence(children: Vec<Asn1Data>) -> Self {
        Self::with_type(UniversalType::Sequence, children)
    }

    /// A SET; children are kept and encoded in the given order.
    pub fn set(children: Vec<Asn1Data>) -> Self {
        Self::with_type(UniversalType::Set, children)
    }

    pub fn with_tag(mut self, tag: u32, tagging: Tagging) -> Self {
        self.set_tag(tag, TagClass::ContextSpecific, Some(tagging));
        self
    }

    pub fn with_tag_class(mut self, tag_class: TagClass) -> Self {
        self.set_tag(self.tag, tag_class, self.tagging);
        self
    }

    /// See [`Asn1Primitive::set_tag`].
    pub fn set_tag(&mut self, tag: u32, tag_class: TagClass, tagging: Option<Tagging>) {
        self.tag = tag;
        self.tag_class = tag_class;
        self.tagging = tagging_for(self.ty, tag, tag_class, tagging);
    }

    pub fn clear_tag(&mut self) {
        self.set_tag(self.ty.tag_number(), TagClass::Universal, None);
    }

    pub fn push(&mut self, child: impl Into<Asn1Data>) {
        self.children.push(child.into());
    }

    pub fn universal_type(&self) -> UniversalType {
        self.ty
    }

    pub fn children(&self) -> &[Asn1Data] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Asn1Data> {
        &mut self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asn1Data> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Asn1Data> {
        self.children.get(index)
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn tag_class(&self) -> TagClass {
        self.tag_class
    }

    pub fn tagging(&self) -> Option<Tagging> {
        self.tagging
    }
}

impl<'a> IntoIterator for &'a Asn1Constructive {
    type Item = &'a Asn1Data;
    type IntoIter = std::slice::Iter<'a, Asn1Data>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// Contents of a generic tagged element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedValue {
    /// Constructed contents, as decoded TLVs.
    Nested(Vec<Asn1Data>),
    /// Primitive contents, e.g. an implicitly tagged scalar.
    Raw(Vec<u8>),
}

/// An element identified only by its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asn1Tagged {
    pub tag: u32,
    pub tag_class: TagClass,
    pub value: TaggedValue,
}

impl Asn1Tagged {
    pub fn new(tag: u32, tag_class: TagClass, value: TaggedValue) -> Self {
        Self {
            tag,
            tag_class,
            value,
        }
    }

    /// `[tag] EXPLICIT inner` in the CONTEXT_SPECIFIC class.
    pub fn explicit(tag: u32, inner: impl Into<Asn1Data>) -> Self {
        Self::new(
            tag,
            TagClass::ContextSpecific,
            TaggedValue::Nested(vec![inner.into()]),
        )
    }

    pub fn is_constructed(&self) -> bool {
        matches!(self.value, TaggedValue::Nested(_))
    }

    /// The content octets this element encodes to.
    pub fn content_der(&self) -> Result<Vec<u8>, EncodeError> {
        match &self.value {
            TaggedValue::Raw(bytes) => Ok(bytes.clone()),
            TaggedValue::Nested(children) => {
                let mut enc = Encoder::new();
                for child in children {
                    enc.write_value(child)?;
                }
                Ok(enc.finish())
            }
        }
    }
}

/// One node of an ASN.1 tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asn1Data {
    Tagged(Asn1Tagged),
    Primitive(Asn1Primitive),
    Constructive(Asn1Constructive),
}

impl Asn1Data {
    pub fn tag(&self) -> u32 {
        match self {
            Asn1Data::Tagged(t) => t.tag,
            Asn1Data::Primitive(p) => p.tag(),
            Asn1Data::Constructive(c) => c.tag(),
        }
    }

    pub fn tag_class(&self) -> TagClass {
        match self {
            Asn1Data::Tagged(t) => t.tag_class,
            Asn1Data::Primitive(p) => p.tag_class(),
            Asn1Data::Constructive(c) => c.tag_class(),
        }
    }

    /// Encode this tree as DER, resolving OID names through the global
    /// registry.
    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        let mut enc = Encoder::new();
        enc.write_value(self)?;
        Ok(enc.finish())
    }

    pub fn as_primitive(&self) -> Option<&Asn1Primitive> {
        match self {
            Asn1Data::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_constructive(&self) -> Option<&Asn1Constructive> {
        match self {
            Asn1Data::Constructive(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_tagged(&self) -> Option<&Asn1Tagged> {
        match self {
            Asn1Data::Tagged(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Asn1Primitive> for Asn1Data {
    fn from(value: Asn1Primitive) -> Self {
        Asn1Data::Primitive(value)
    }
}

impl From<Asn1Constructive> for Asn1Data {
    fn from(value: Asn1Constructive) -> Self {
        Asn1Data::Constructive(value)
    }
}

impl From<Asn1Tagged> for Asn1Data {
    fn from(value: Asn1Tagged) -> Self {
        Asn1Data::Tagged(value)
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Boolean(b) => write!(f, "{b}"),
            NativeValue::Integer(i) => write!(f, "{i}"),
            NativeValue::BitString { data, unused_bits } => {
                write!(f, "{} ({unused_bits} unused bits)", hex_string(data))
            }
            NativeValue::OctetString(data) | NativeValue::Text(data) => f.write_str(&hex_string(data)),
            NativeValue::Null => Ok(()),
            NativeValue::ObjectId(s) => f.write_str(s),
            NativeValue::Time(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S%.f UTC")),
        }
    }
}

/// `[CLASS n] MODE ` prefix for a re-tagged value, empty otherwise.
fn tag_prefix(tag: u32, tag_class: TagClass, tagging: Option<Tagging>) -> String {
    match tagging {
        Some(tagging) => format!("[{tag_class} {tag}] {tagging} "),
        None => String::new(),
    }
}

impl Asn1Data {
    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = indent * 2)?;
        match self {
            Asn1Data::Primitive(p) => {
                let prefix = tag_prefix(p.tag, p.tag_class, p.tagging);
                write!(f, "{prefix}{}", p.ty.name())?;
                match &p.value {
                    NativeValue::Null => writeln!(f),
                    NativeValue::Text(_) => match p.text() {
                        Some(text) => writeln!(f, ": {text:?}"),
                        None => writeln!(f, ": {}", p.value),
                    },
                    NativeValue::ObjectId(s) => match p.long_name() {
                        Some(name) if name != *s => writeln!(f, ": {s} ({name})"),
                        _ => writeln!(f, ": {s}"),
                    },
                    value => writeln!(f, ": {value}"),
                }
            }
            Asn1Data::Constructive(c) => {
                let prefix = tag_prefix(c.tag, c.tag_class, c.tagging);
                writeln!(f, "{prefix}{} ({} elements)", c.ty.name(), c.children.len())?;
                c.children
                    .iter()
                    .try_for_each(|child| child.fmt_indented(f, indent + 1))
            }
            Asn1Data::Tagged(t) => match &t.value {
                TaggedValue::Nested(children) => {
                    writeln!(f, "[{} {}]", t.tag_class, t.tag)?;
                    children
                        .iter()
                        .try_for_each(|child| child.fmt_indented(f, indent + 1))
                }
                TaggedValue::Raw(bytes) => writeln!(f, "[{} {}]: {}", t.tag_class, t.tag, hex_string(bytes)),
            },
        }
    }
}

/// An indented tree, one node per line.
impl fmt::Display for Asn1Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unused_bits_of() {
        assert_eq!(unused_bits_of(&[0x80]), 7);
        assert_eq!(unused_bits_of(&[0xFF]), 0);
        assert_eq!(unused_bits_of(&[0x01, 0x10]), 4);
        assert_eq!(unused_bits_of(&[0x80, 0x00]), 15);
        assert_eq!(unused_bits_of(&[0x00, 0x00]), 16);
        assert_eq!(unused_bits_of(&[]), 0);
    }

    #[test]
    fn test_bit_string_derives_unused_bits() {
        let bs = Asn1Primitive::bit_string(vec![0x80]);
        assert_eq!(
            bs.value(),
            &NativeValue::BitString {
                data: vec![0x80],
                unused_bits: 7
            }
        );
        for data in [vec![], vec![0x00, 0x00], vec![0x80, 0x00]] {
            let bs = Asn1Primitive::bit_string(data);
            assert!(matches!(
                bs.value(),
                NativeValue::BitString { unused_bits: 0, .. }
            ));
        }
    }

    #[test]
    fn test_tagging_symbols() {
        assert_eq!("EXPLICIT".parse::<Tagging>().unwrap(), Tagging::Explicit);
        assert_eq!(":IMPLICIT".parse::<Tagging>().unwrap(), Tagging::Implicit);
        assert_eq!(
            "implicit".parse::<Tagging>(),
            Err(EncodeError::InvalidTagging("implicit".into()))
        );
    }

    #[test]
    fn test_retagging() {
        let mut p = Asn1Primitive::integer(5).with_tag(7, Tagging::Implicit);
        assert_eq!(p.tag(), 7);
        assert_eq!(p.tag_class(), TagClass::ContextSpecific);
        assert_eq!(p.tagging(), Some(Tagging::Implicit));
        p.clear_tag();
        assert_eq!(p.tag(), 2);
        assert_eq!(p.tag_class(), TagClass::Universal);
        assert_eq!(p.tagging(), None);

        let p = Asn1Primitive::null().with_tag(1, Tagging::Explicit).with_tag_class(TagClass::Private);
        assert_eq!(Asn1Data::from(p).tag_class(), TagClass::Private);
    }

    #[test]
    fn test_text_per_string_type() {
        let p = Asn1Primitive::utf8_string("h\u{e9}llo");
        assert_eq!(p.text().as_deref(), Some("h\u{e9}llo"));

        let p = Asn1Primitive::string(UniversalType::T61String, vec![0x68, 0xE9]);
        assert_eq!(p.text().as_deref(), Some("h\u{e9}"));

        let p = Asn1Primitive::string(UniversalType::BmpString, vec![0x00, 0x41, 0x04, 0x14]);
        assert_eq!(p.text().as_deref(), Some("A\u{414}"));

        let p = Asn1Primitive::string(UniversalType::UniversalString, vec![0, 1, 0xF6, 0x00]);
        assert_eq!(p.text().as_deref(), Some("\u{1F600}"));

        let p = Asn1Primitive::string(UniversalType::Utf8String, vec![0xFF]);
        assert_eq!(p.text(), None);
        assert_eq!(Asn1Primitive::null().text(), None);
    }

    #[test]
    fn test_object_id_names() {
        let p = Asn1Primitive::object_id("CN");
        assert_eq!(p.value(), &NativeValue::ObjectId("CN".into()));
        assert_eq!(p.oid().as_deref(), Some("2.5.4.3"));
        assert_eq!(p.short_name().as_deref(), Some("CN"));
        assert_eq!(p.long_name().as_deref(), Some("commonName"));
    }

    #[test]
    fn test_constructive_children() {
        let mut seq = Asn1Constructive::sequence(vec![Asn1Primitive::integer(1).into()]);
        seq.push(Asn1Primitive::boolean(true));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(1).and_then(Asn1Data::as_primitive).and_then(Asn1Primitive::as_bool), Some(true));
        let tags: Vec<u32> = (&seq).into_iter().map(Asn1Data::tag).collect();
        assert_eq!(tags, vec![2, 1]);
        assert_eq!(Asn1Data::from(seq).tag(), 16);
    }

    #[test]
    fn test_tag_without_mode_is_explicit() {
        let mut p = Asn1Primitive::integer(1);
        p.set_tag(7, TagClass::ContextSpecific, None);
        assert_eq!(p.tagging(), Some(Tagging::Explicit));
        assert_eq!(p.to_der().unwrap(), vec![0xA7, 0x03, 0x02, 0x01, 0x01]);

        let p = Asn1Primitive::null().with_tag_class(TagClass::Private);
        assert_eq!(p.tagging(), Some(Tagging::Explicit));
        assert_eq!(p.to_der().unwrap(), vec![0xE5, 0x02, 0x05, 0x00]);

        // the natural tag stays untagged
        let mut p = Asn1Primitive::integer(1);
        p.set_tag(2, TagClass::Universal, None);
        assert_eq!(p.tagging(), None);
        assert_eq!(p.to_der().unwrap(), vec![0x02, 0x01, 0x01]);

        let mut seq = Asn1Constructive::sequence(Vec::new());
        seq.set_tag(3, TagClass::ContextSpecific, None);
        assert_eq!(seq.tagging(), Some(Tagging::Explicit));
        assert_eq!(Asn1Data::from(seq).to_der().unwrap(), vec![0xA3, 0x02, 0x30, 0x00]);
    }

    #[test]
    fn test_display_tree() {
        let tree: Asn1Data = Asn1Constructive::sequence(vec![
            Asn1Primitive::integer(5).with_tag(0, Tagging::Explicit).into(),
            Asn1Primitive::object_id("2.5.4.3").into(),
            Asn1Primitive::utf8_string("hi").into(),
            Asn1Tagged::new(1, TagClass::ContextSpecific, TaggedValue::Raw(vec![0xAB])).into(),
            Asn1Primitive::null().into(),
        ])
        .into();
        let expected = "\
SEQUENCE (5 elements)
  [CONTEXT_SPECIFIC 0] EXPLICIT INTEGER: 5
  OBJECT: 2.5.4.3 (commonName)
  UTF8STRING: \"hi\"
  [CONTEXT_SPECIFIC 1]: ab
  NULL
";
        assert_eq!(tree.to_string(), expected);
    }
}
