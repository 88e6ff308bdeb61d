//! The universal tag table.

use super::tags;

/// Shape of the native value a universal type carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeCategory {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectId,
    Text,
    Time,
    Constructed,
}

impl NativeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NativeCategory::Boolean => "boolean",
            NativeCategory::Integer => "integer",
            NativeCategory::BitString => "bit string",
            NativeCategory::OctetString => "octet string",
            NativeCategory::Null => "null",
            NativeCategory::ObjectId => "object identifier",
            NativeCategory::Text => "text",
            NativeCategory::Time => "time",
            NativeCategory::Constructed => "constructed",
        }
    }
}

/// Universal types with a native value mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniversalType {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectId,
    Enumerated,
    Utf8String,
    Sequence,
    Set,
    NumericString,
    PrintableString,
    T61String,
    Ia5String,
    UtcTime,
    GeneralizedTime,
    GeneralString,
    UniversalString,
    BmpString,
}

impl UniversalType {
    pub fn tag_number(self) -> u32 {
        match self {
            UniversalType::Boolean => tags::BOOLEAN,
            UniversalType::Integer => tags::INTEGER,
            UniversalType::BitString => tags::BIT_STRING,
            UniversalType::OctetString => tags::OCTET_STRING,
            UniversalType::Null => tags::NULL,
            UniversalType::ObjectId => tags::OBJECT,
            UniversalType::Enumerated => tags::ENUMERATED,
            UniversalType::Utf8String => tags::UTF8_STRING,
            UniversalType::Sequence => tags::SEQUENCE,
            UniversalType::Set => tags::SET,
            UniversalType::NumericString => tags::NUMERIC_STRING,
            UniversalType::PrintableString => tags::PRINTABLE_STRING,
            UniversalType::T61String => tags::T61_STRING,
            UniversalType::Ia5String => tags::IA5_STRING,
            UniversalType::UtcTime => tags::UTC_TIME,
            UniversalType::GeneralizedTime => tags::GENERALIZED_TIME,
            UniversalType::GeneralString => tags::GENERAL_STRING,
            UniversalType::UniversalString => tags::UNIVERSAL_STRING,
            UniversalType::BmpString => tags::BMP_STRING,
        }
    }

    /// The mapped type for a universal tag number, if any.
    pub fn from_tag(number: u32) -> Option<Self> {
        universal_tag(number).and_then(|t| t.native)
    }

    pub fn category(self) -> NativeCategory {
        match self {
            UniversalType::Boolean => NativeCategory::Boolean,
            UniversalType::Integer | UniversalType::Enumerated => NativeCategory::Integer,
            UniversalType::BitString => NativeCategory::BitString,
            UniversalType::OctetString => NativeCategory::OctetString,
            UniversalType::Null => NativeCategory::Null,
            UniversalType::ObjectId => NativeCategory::ObjectId,
            UniversalType::Sequence | UniversalType::Set => NativeCategory::Constructed,
            UniversalType::UtcTime | UniversalType::GeneralizedTime => NativeCategory::Time,
            UniversalType::Utf8String
            | UniversalType::NumericString
            | UniversalType::PrintableString
            | UniversalType::T61String
            | UniversalType::Ia5String
            | UniversalType::GeneralString
            | UniversalType::UniversalString
            | UniversalType::BmpString => NativeCategory::Text,
        }
    }

    /// Canonical table name, e.g. `"PRINTABLESTRING"`.
    pub fn name(self) -> &'static str {
        universal_tag_name(self.tag_number()).unwrap_or("UNKNOWN")
    }

    pub fn is_constructed(self) -> bool {
        self.category() == NativeCategory::Constructed
    }
}

/// One row of [`UNIVERSAL_TAGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniversalTag {
    pub number: u32,
    pub name: Option<&'static str>,
    pub native: Option<UniversalType>,
}

const fn row(number: u32, name: &'static str, native: Option<UniversalType>) -> UniversalTag {
    UniversalTag {
        number,
        name: Some(name),
        native,
    }
}

const fn unnamed(number: u32) -> UniversalTag {
    UniversalTag {
        number,
        name: None,
        native: None,
    }
}

/// Universal tag numbers 0 to 30, indexed by number.
#[rustfmt::skip]
pub static UNIVERSAL_TAGS: [UniversalTag; 31] = [
    row(0,  "EOC",               None),
    row(1,  "BOOLEAN",           Some(UniversalType::Boolean)),
    row(2,  "INTEGER",           Some(UniversalType::Integer)),
    row(3,  "BIT_STRING",        Some(UniversalType::BitString)),
    row(4,  "OCTET_STRING",      Some(UniversalType::OctetString)),
    row(5,  "NULL",              Some(UniversalType::Null)),
    row(6,  "OBJECT",            Some(UniversalType::ObjectId)),
    row(7,  "OBJECT_DESCRIPTOR", None),
    row(8,  "EXTERNAL",          None),
    row(9,  "REAL",              None),
    row(10, "ENUMERATED",        Some(UniversalType::Enumerated)),
    row(11, "EMBEDDED_PDV",      None),
    row(12, "UTF8STRING",        Some(UniversalType::Utf8String)),
    row(13, "RELATIVE_OID",      None),
    unnamed(14),
    unnamed(15),
    row(16, "SEQUENCE",          Some(UniversalType::Sequence)),
    row(17, "SET",               Some(UniversalType::Set)),
    row(18, "NUMERICSTRING",     Some(UniversalType::NumericString)),
    row(19, "PRINTABLESTRING",   Some(UniversalType::PrintableString)),
    row(20, "T61STRING",         Some(UniversalType::T61String)),
    row(21, "VIDEOTEXSTRING",    None),
    row(22, "IA5STRING",         Some(UniversalType::Ia5String)),
    row(23, "UTCTIME",           Some(UniversalType::UtcTime)),
    row(24, "GENERALIZEDTIME",   Some(UniversalType::GeneralizedTime)),
    row(25, "GRAPHICSTRING",     None),
    row(26, "ISO64STRING",       None),
    row(27, "GENERALSTRING",     Some(UniversalType::GeneralString)),
    row(28, "UNIVERSALSTRING",   Some(UniversalType::UniversalString)),
    row(29, "CHARACTER_STRING",  None),
    row(30, "BMPSTRING",         Some(UniversalType::BmpString)),
];

pub fn universal_tag(number: u32) -> Option<&'static UniversalTag> {
    UNIVERSAL_TAGS.get(usize::try_from(number).ok()?)
}

pub fn universal_tag_name(number: u32) -> Option<&'static str> {
    universal_tag(number).and_then(|t| t.name)
}
