//! ASN.1 BER decoder.

use std::borrow::Cow;

use asnkit_types::DecodeError;
use log::{debug, trace};
use num_bigint::BigInt;

use super::tag::read_length;
use super::time::{parse_generalized_time, parse_utc_time};
use super::universal::{NativeCategory, UniversalType};
use super::value::{Asn1Constructive, Asn1Data, Asn1Primitive, Asn1Tagged, NativeValue, TaggedValue};
use super::{Tag, TagClass, Tlv};
use crate::oid::Oid;

/// Limits and BER leniency switches for [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest allowed nesting of constructed values; the outermost TLV
    /// is at depth 0.
    pub max_depth: usize,
    /// Accept indefinite lengths on constructed encodings.
    pub allow_indefinite_length: bool,
    /// Accept constructed encodings of string types.
    pub allow_constructed_strings: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            allow_indefinite_length: true,
            allow_constructed_strings: true,
        }
    }
}

impl DecoderConfig {
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::default()
    }

    /// Settings that accept only DER-shaped framing: definite lengths and
    /// primitive strings.
    pub fn strict() -> Self {
        Self {
            allow_indefinite_length: false,
            allow_constructed_strings: false,
            ..Self::default()
        }
    }
}

/// Builder for `DecoderConfig`.
#[derive(Debug, Default)]
pub struct DecoderConfigBuilder {
    config: DecoderConfig,
}

impl DecoderConfigBuilder {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn allow_indefinite_length(mut self, allow: bool) -> Self {
        self.config.allow_indefinite_length = allow;
        self
    }

    pub fn allow_constructed_strings(mut self, allow: bool) -> Self {
        self.config.allow_constructed_strings = allow;
        self
    }

    pub fn build(self) -> DecoderConfig {
        self.config
    }
}

/// Header facts about one TLV, as reported by [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvInfo {
    pub depth: usize,
    /// Offset of the first tag byte in the input.
    pub offset: usize,
    pub header_len: usize,
    /// Content length, excluding any end-of-contents marker.
    pub length: usize,
    pub indefinite: bool,
    pub constructed: bool,
    pub tag_class: TagClass,
    pub tag: u32,
}

/// A streaming ASN.1 BER decoder.
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
    config: DecoderConfig,
}

impl<'a> Decoder<'a> {
    /// Create a new decoder over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecoderConfig::default())
    }

    pub fn with_config(data: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            data,
            pos: 0,
            depth: 0,
            config,
        }
    }

    /// Returns the remaining undecoded bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the next tag without consuming it.
    pub fn peek_tag(&self) -> Result<Tag, DecodeError> {
        let (tag, _) = Tag::from_bytes(self.remaining())?;
        Ok(tag)
    }

    /// Parse the next TLV element without interpreting its content.
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>, DecodeError> {
        let start = self.pos;
        let (tag, tag_len) = Tag::from_bytes(self.remaining())?;
        let (length, len_len) = read_length(&self.data[start + tag_len..])?;
        let header_len = tag_len + len_len;
        let body = start + header_len;

        let (value, end, indefinite) = match length {
            Some(len) => {
                let end = body
                    .checked_add(len)
                    .filter(|&end| end <= self.data.len())
                    .ok_or(DecodeError::Truncated)?;
                (&self.data[body..end], end, false)
            }
            None => {
                if !tag.constructed || !self.config.allow_indefinite_length {
                    return Err(DecodeError::IndefiniteLength);
                }
                let len = self.indefinite_content_len(&self.data[body..])?;
                // content plus the two end-of-contents octets
                (&self.data[body..body + len], body + len + 2, true)
            }
        };
        self.pos = end;

        Ok(Tlv {
            tag,
            value,
            header_len,
            indefinite,
        })
    }

    /// Decode the next TLV into a value tree.
    pub fn read_value(&mut self) -> Result<Asn1Data, DecodeError> {
        let tlv = self.read_tlv()?;
        self.value_from_tlv(&tlv)
    }

    /// Length of indefinite-form content up to its end-of-contents marker.
    fn indefinite_content_len(&self, rest: &'a [u8]) -> Result<usize, DecodeError> {
        let mut inner = self.nested(rest)?;
        loop {
            if inner.remaining().starts_with(&[0x00, 0x00]) {
                return Ok(inner.pos);
            }
            inner.read_tlv()?;
        }
    }

    /// A decoder one level deeper, over constructed content.
    fn nested(&self, content: &'a [u8]) -> Result<Decoder<'a>, DecodeError> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth && !content.is_empty() {
            debug!("asn1 nesting exceeds {} levels", self.config.max_depth);
            return Err(DecodeError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(Decoder {
            data: content,
            pos: 0,
            depth,
            config: self.config,
        })
    }

    fn children(&self, content: &'a [u8]) -> Result<Vec<Asn1Data>, DecodeError> {
        let mut inner = self.nested(content)?;
        let mut children = Vec::new();
        while !inner.is_empty() {
            children.push(inner.read_value()?);
        }
        Ok(children)
    }

    fn value_from_tlv(&self, tlv: &Tlv<'a>) -> Result<Asn1Data, DecodeError> {
        let tag = tlv.tag;
        if tag.class != TagClass::Universal {
            return self.tagged(tlv).map(Asn1Data::from);
        }

        match UniversalType::from_tag(tag.number) {
            Some(ty) if ty.is_constructed() => {
                if !tag.constructed {
                    return Err(DecodeError::content(ty.name(), "must be constructed"));
                }
                let children = self.children(tlv.value)?;
                Ok(Asn1Constructive::with_type(ty, children).into())
            }
            Some(ty) => {
                let content = if tag.constructed {
                    Cow::Owned(self.constructed_string(ty, tlv.value)?)
                } else {
                    Cow::Borrowed(tlv.value)
                };
                let value = native_value(ty, &content)?;
                Ok(Asn1Primitive::new(ty, value).into())
            }
            None if tag.constructed => self.tagged(tlv).map(Asn1Data::from),
            None => self.unmapped_primitive(tlv).map(Asn1Data::from),
        }
    }

    /// A primitive universal tag with no native form. Its content is kept
    /// only if it parses as a sequence of TLVs.
    fn unmapped_primitive(&self, tlv: &Tlv<'a>) -> Result<Asn1Tagged, DecodeError> {
        let number = tlv.tag.number;
        let children = self.children(tlv.value).map_err(|err| match err {
            DecodeError::DepthExceeded { .. } => err,
            _ => DecodeError::UnsupportedUniversal(number),
        })?;
        trace!("universal tag {number} read as nested content");
        Ok(Asn1Tagged::new(number, TagClass::Universal, TaggedValue::Nested(children)))
    }

    fn tagged(&self, tlv: &Tlv<'a>) -> Result<Asn1Tagged, DecodeError> {
        let tag = tlv.tag;
        trace!(
            "generic tagged value [{} {}], {} content bytes",
            tag.class,
            tag.number,
            tlv.value.len()
        );
        let value = if tag.constructed {
            TaggedValue::Nested(self.children(tlv.value)?)
        } else {
            TaggedValue::Raw(tlv.value.to_vec())
        };
        Ok(Asn1Tagged::new(tag.number, tag.class, value))
    }

    /// Join the segments of a constructed string into primitive content.
    fn constructed_string(&self, ty: UniversalType, content: &'a [u8]) -> Result<Vec<u8>, DecodeError> {
        let kind = ty.name();
        match ty.category() {
            NativeCategory::BitString
            | NativeCategory::OctetString
            | NativeCategory::Text
            | NativeCategory::Time => {}
            _ => return Err(DecodeError::content(kind, "must be primitive")),
        }
        if !self.config.allow_constructed_strings {
            return Err(DecodeError::content(kind, "constructed form not allowed"));
        }

        let is_bit_string = ty == UniversalType::BitString;
        let mut inner = self.nested(content)?;
        let mut joined = Vec::new();
        let mut last_unused = 0u8;
        while !inner.is_empty() {
            let segment = inner.read_tlv()?;
            if segment.tag.class != TagClass::Universal || segment.tag.number != ty.tag_number() {
                return Err(DecodeError::content(kind, "segment has a different tag"));
            }
            let bytes = if segment.tag.constructed {
                Cow::Owned(inner.constructed_string(ty, segment.value)?)
            } else {
                Cow::Borrowed(segment.value)
            };

            if is_bit_string {
                if last_unused != 0 {
                    return Err(DecodeError::content(kind, "unused bits before last segment"));
                }
                let (&unused, data) = bytes
                    .split_first()
                    .ok_or(DecodeError::content(kind, "missing unused bit count"))?;
                last_unused = unused;
                joined.extend_from_slice(data);
            } else {
                joined.extend_from_slice(&bytes);
            }
        }

        if is_bit_string {
            joined.insert(0, last_unused);
        }
        Ok(joined)
    }

    fn walk(&mut self, base: usize, out: &mut Vec<TlvInfo>) -> Result<(), DecodeError> {
        while !self.is_empty() {
            let offset = base + self.pos;
            let tlv = self.read_tlv()?;
            out.push(TlvInfo {
                depth: self.depth,
                offset,
                header_len: tlv.header_len,
                length: tlv.value.len(),
                indefinite: tlv.indefinite,
                constructed: tlv.tag.constructed,
                tag_class: tlv.tag.class,
                tag: tlv.tag.number,
            });
            if tlv.tag.constructed {
                self.nested(tlv.value)?
                    .walk(offset + tlv.header_len, out)?;
            }
        }
        Ok(())
    }
}

/// Interpret primitive content octets of a mapped universal type.
fn native_value(ty: UniversalType, content: &[u8]) -> Result<NativeValue, DecodeError> {
    let kind = ty.name();
    let value = match ty.category() {
        NativeCategory::Boolean => match content {
            [b] => NativeValue::Boolean(*b != 0),
            _ => return Err(DecodeError::content(kind, "expected one content byte")),
        },
        NativeCategory::Integer => {
            if content.is_empty() {
                return Err(DecodeError::content(kind, "no content"));
            }
            NativeValue::Integer(BigInt::from_signed_bytes_be(content))
        }
        NativeCategory::BitString => {
            let (&unused_bits, data) = content
                .split_first()
                .ok_or(DecodeError::content(kind, "missing unused bit count"))?;
            if unused_bits > 7 {
                return Err(DecodeError::content(kind, "unused bit count above 7"));
            }
            if data.is_empty() && unused_bits != 0 {
                return Err(DecodeError::content(kind, "unused bits without data"));
            }
            NativeValue::BitString {
                data: data.to_vec(),
                unused_bits,
            }
        }
        NativeCategory::OctetString => NativeValue::OctetString(content.to_vec()),
        NativeCategory::Null => {
            if !content.is_empty() {
                return Err(DecodeError::content(kind, "content must be empty"));
            }
            NativeValue::Null
        }
        NativeCategory::ObjectId => NativeValue::ObjectId(Oid::from_der_value(content)?.to_dot_string()),
        NativeCategory::Text => {
            match ty {
                UniversalType::Utf8String if std::str::from_utf8(content).is_err() => {
                    return Err(DecodeError::content(kind, "invalid UTF-8"));
                }
                UniversalType::BmpString if content.len() % 2 != 0 => {
                    return Err(DecodeError::content(kind, "odd length"));
                }
                UniversalType::UniversalString if content.len() % 4 != 0 => {
                    return Err(DecodeError::content(kind, "length not a multiple of 4"));
                }
                _ => {}
            }
            NativeValue::Text(content.to_vec())
        }
        NativeCategory::Time => {
            let time = if ty == UniversalType::UtcTime {
                parse_utc_time(content)?
            } else {
                parse_generalized_time(content)?
            };
            NativeValue::Time(time)
        }
        NativeCategory::Constructed => return Err(DecodeError::content(kind, "must be constructed")),
    };
    Ok(value)
}

/// Decode exactly one TLV; trailing bytes are an error.
pub fn decode(data: &[u8]) -> Result<Asn1Data, DecodeError> {
    decode_with_config(data, DecoderConfig::default())
}

pub fn decode_with_config(data: &[u8], config: DecoderConfig) -> Result<Asn1Data, DecodeError> {
    let mut dec = Decoder::with_config(data, config);
    let value = dec.read_value()?;
    if !dec.is_empty() {
        return Err(DecodeError::TrailingData(dec.remaining().len()));
    }
    Ok(value)
}

/// Decode a concatenation of TLVs.
pub fn decode_all(data: &[u8]) -> Result<Vec<Asn1Data>, DecodeError> {
    let mut dec = Decoder::new(data);
    let mut values = Vec::new();
    while !dec.is_empty() {
        values.push(dec.read_value()?);
    }
    Ok(values)
}

/// List every TLV header in document order without building values.
pub fn traverse(data: &[u8]) -> Result<Vec<TlvInfo>, DecodeError> {
    let mut infos = Vec::new();
    Decoder::new(data).walk(0, &mut infos)?;
    Ok(infos)
}
