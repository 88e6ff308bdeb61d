//! ASN.1 BER decoding and DER encoding over a closed value model.
//!
//! [`decode`] turns bytes into an [`Asn1Data`] tree; [`Asn1Data::to_der`]
//! (or [`encode`]) turns a tree back into DER.

mod decoder;
mod encoder;
mod tag;
mod time;
mod universal;
mod value;

use std::fmt;
use std::str::FromStr;

use asnkit_types::EncodeError;

pub use decoder::{
    decode, decode_all, decode_with_config, traverse, Decoder, DecoderConfig, DecoderConfigBuilder,
    TlvInfo,
};
pub use encoder::{encode, encode_with_registry, Encoder};
pub use universal::{
    universal_tag, universal_tag_name, NativeCategory, UniversalTag, UniversalType, UNIVERSAL_TAGS,
};
pub use value::{
    unused_bits_of, Asn1Constructive, Asn1Data, Asn1Primitive, Asn1Tagged, NativeValue, TaggedValue,
    Tagging,
};

/// Universal tag numbers.
pub mod tags {
    pub const EOC: u32 = 0;
    pub const BOOLEAN: u32 = 1;
    pub const INTEGER: u32 = 2;
    pub const BIT_STRING: u32 = 3;
    pub const OCTET_STRING: u32 = 4;
    pub const NULL: u32 = 5;
    pub const OBJECT: u32 = 6;
    pub const OBJECT_DESCRIPTOR: u32 = 7;
    pub const EXTERNAL: u32 = 8;
    pub const REAL: u32 = 9;
    pub const ENUMERATED: u32 = 10;
    pub const EMBEDDED_PDV: u32 = 11;
    pub const UTF8_STRING: u32 = 12;
    pub const RELATIVE_OID: u32 = 13;
    pub const SEQUENCE: u32 = 16;
    pub const SET: u32 = 17;
    pub const NUMERIC_STRING: u32 = 18;
    pub const PRINTABLE_STRING: u32 = 19;
    pub const T61_STRING: u32 = 20;
    pub const VIDEOTEX_STRING: u32 = 21;
    pub const IA5_STRING: u32 = 22;
    pub const UTC_TIME: u32 = 23;
    pub const GENERALIZED_TIME: u32 = 24;
    pub const GRAPHIC_STRING: u32 = 25;
    pub const ISO64_STRING: u32 = 26;
    pub const GENERAL_STRING: u32 = 27;
    pub const UNIVERSAL_STRING: u32 = 28;
    pub const CHARACTER_STRING: u32 = 29;
    pub const BMP_STRING: u32 = 30;
}

/// Represents a parsed ASN.1 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub class: TagClass,
    pub constructed: bool,
    pub number: u32,
}

/// ASN.1 tag class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl TagClass {
    /// The symbolic name, e.g. `"CONTEXT_SPECIFIC"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TagClass::Universal => "UNIVERSAL",
            TagClass::Application => "APPLICATION",
            TagClass::ContextSpecific => "CONTEXT_SPECIFIC",
            TagClass::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for TagClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagClass {
    type Err = EncodeError;

    /// Parse a tag class symbol; a leading `:` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(':').unwrap_or(s) {
            "UNIVERSAL" => Ok(TagClass::Universal),
            "APPLICATION" => Ok(TagClass::Application),
            "CONTEXT_SPECIFIC" => Ok(TagClass::ContextSpecific),
            "PRIVATE" => Ok(TagClass::Private),
            _ => Err(EncodeError::InvalidTagClass(s.to_string())),
        }
    }
}

/// A borrowed ASN.1 TLV element.
#[derive(Debug, Clone)]
pub struct Tlv<'a> {
    pub tag: Tag,
    /// Content octets, excluding any end-of-contents marker.
    pub value: &'a [u8],
    /// Bytes taken by the tag and length octets.
    pub header_len: usize,
    /// True when the length was encoded in indefinite form.
    pub indefinite: bool,
}
