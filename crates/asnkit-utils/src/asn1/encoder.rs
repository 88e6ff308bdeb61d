//! ASN.1 DER encoder.

use asnkit_types::EncodeError;

use super::tag::write_length;
use super::time::{format_generalized_time, format_utc_time};
use super::universal::UniversalType;
use super::value::{Asn1Constructive, Asn1Data, Asn1Primitive, Asn1Tagged, NativeValue, TaggedValue, Tagging};
use super::{Tag, TagClass};
use crate::oid::{Oid, OidRegistry};

/// A builder for constructing DER-encoded ASN.1 data.
///
/// Object identifier names are resolved through the encoder's registry.
pub struct Encoder<'r> {
    buf: Vec<u8>,
    registry: &'r OidRegistry,
}

impl Encoder<'static> {
    /// Create a new encoder that resolves names through the global registry.
    pub fn new() -> Self {
        Self::with_registry(OidRegistry::global())
    }
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Encoder<'r> {
    pub fn with_registry(registry: &'r OidRegistry) -> Self {
        Self {
            buf: Vec::new(),
            registry,
        }
    }

    /// Consume the encoder and return the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Write a TLV with the given tag and content.
    pub fn write_tlv(&mut self, tag: Tag, value: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(&tag.to_bytes());
        write_length(&mut self.buf, value.len());
        self.buf.extend_from_slice(value);
        self
    }

    /// Write raw bytes directly (already DER-encoded).
    pub fn write_raw(&mut self, data: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(data);
        self
    }

    /// Write any value tree.
    pub fn write_value(&mut self, value: &Asn1Data) -> Result<&mut Self, EncodeError> {
        match value {
            Asn1Data::Primitive(p) => self.write_primitive(p),
            Asn1Data::Constructive(c) => self.write_constructive(c),
            Asn1Data::Tagged(t) => self.write_tagged(t),
        }
    }

    pub fn write_primitive(&mut self, value: &Asn1Primitive) -> Result<&mut Self, EncodeError> {
        let ty = value.universal_type();
        let content = self.primitive_content(ty, value.value())?;
        let natural = Tag::universal(ty.tag_number());
        self.write_with_tagging(natural, value.tag(), value.tag_class(), value.tagging(), &content)
    }

    /// Write a SEQUENCE or SET; children keep their stored order.
    pub fn write_constructive(&mut self, value: &Asn1Constructive) -> Result<&mut Self, EncodeError> {
        let content = self.children_content(value.children())?;
        let natural = Tag {
            class: TagClass::Universal,
            constructed: true,
            number: value.universal_type().tag_number(),
        };
        self.write_with_tagging(natural, value.tag(), value.tag_class(), value.tagging(), &content)
    }

    /// Write a generic tagged element: nested children under a constructed
    /// header, raw content under a primitive one.
    pub fn write_tagged(&mut self, value: &Asn1Tagged) -> Result<&mut Self, EncodeError> {
        check_universal_tag(value.tag_class, value.tag)?;
        let (constructed, content) = match &value.value {
            TaggedValue::Nested(children) => (true, self.children_content(children)?),
            TaggedValue::Raw(bytes) => (false, bytes.clone()),
        };
        let tag = Tag {
            class: value.tag_class,
            constructed,
            number: value.tag,
        };
        Ok(self.write_tlv(tag, &content))
    }

    fn children_content(&self, children: &[Asn1Data]) -> Result<Vec<u8>, EncodeError> {
        let mut sub = Encoder::with_registry(self.registry);
        for child in children {
            sub.write_value(child)?;
        }
        Ok(sub.finish())
    }

    fn write_with_tagging(
        &mut self,
        natural: Tag,
        number: u32,
        class: TagClass,
        tagging: Option<Tagging>,
        content: &[u8],
    ) -> Result<&mut Self, EncodeError> {
        let Some(tagging) = tagging else {
            return Ok(self.write_tlv(natural, content));
        };
        check_universal_tag(class, number)?;
        match tagging {
            Tagging::Implicit => {
                let tag = Tag {
                    class,
                    constructed: natural.constructed,
                    number,
                };
                Ok(self.write_tlv(tag, content))
            }
            Tagging::Explicit => {
                let mut inner = Encoder::with_registry(self.registry);
                inner.write_tlv(natural, content);
                let tag = Tag {
                    class,
                    constructed: true,
                    number,
                };
                Ok(self.write_tlv(tag, &inner.finish()))
            }
        }
    }

    fn primitive_content(&self, ty: UniversalType, value: &NativeValue) -> Result<Vec<u8>, EncodeError> {
        if value.category() != ty.category() {
            return Err(EncodeError::ValueMismatch {
                expected: ty.name(),
                expected_value: ty.category().as_str(),
                found: value.kind(),
            });
        }

        let content = match value {
            NativeValue::Boolean(b) => vec![if *b { 0xFF } else { 0x00 }],
            NativeValue::Integer(i) => i.to_signed_bytes_be(),
            NativeValue::BitString { data, unused_bits } => {
                if *unused_bits > 7 || (data.is_empty() && *unused_bits != 0) {
                    return Err(EncodeError::InvalidUnusedBits(*unused_bits));
                }
                let mut content = Vec::with_capacity(data.len() + 1);
                content.push(*unused_bits);
                content.extend_from_slice(data);
                content
            }
            NativeValue::OctetString(data) | NativeValue::Text(data) => data.clone(),
            NativeValue::Null => Vec::new(),
            NativeValue::ObjectId(name) => {
                let oid = self.registry.resolve(name);
                oid.parse::<Oid>()
                    .map_err(|_| EncodeError::InvalidOid(name.clone()))?
                    .to_der_value()
            }
            NativeValue::Time(time) => {
                let text = if ty == UniversalType::UtcTime {
                    format_utc_time(time)?
                } else {
                    format_generalized_time(time)?
                };
                text.into_bytes()
            }
        };
        Ok(content)
    }
}

fn check_universal_tag(class: TagClass, number: u32) -> Result<(), EncodeError> {
    if class == TagClass::Universal && number > 31 {
        return Err(EncodeError::UniversalTagTooLarge(number));
    }
    Ok(())
}

/// Encode a value tree, resolving names through the global registry.
pub fn encode(value: &Asn1Data) -> Result<Vec<u8>, EncodeError> {
    encode_with_registry(value, OidRegistry::global())
}

pub fn encode_with_registry(value: &Asn1Data, registry: &OidRegistry) -> Result<Vec<u8>, EncodeError> {
    let mut enc = Encoder::with_registry(registry);
    enc.write_value(value)?;
    Ok(enc.finish())
}
