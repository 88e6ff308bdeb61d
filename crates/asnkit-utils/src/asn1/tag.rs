//! ASN.1 tag and length octets.

use super::{Tag, TagClass};
use asnkit_types::DecodeError;

const CONSTRUCTED: u8 = 0x20;
const LONG_FORM: u8 = 0x1F;

impl Tag {
    /// A primitive universal tag.
    pub const fn universal(number: u32) -> Self {
        Self {
            class: TagClass::Universal,
            constructed: false,
            number,
        }
    }

    /// Parse a tag from the first bytes of `input`.
    /// Returns the tag and number of bytes consumed.
    pub fn from_bytes(input: &[u8]) -> Result<(Self, usize), DecodeError> {
        let Some(&first) = input.first() else {
            return Err(DecodeError::Truncated);
        };

        let class = match first >> 6 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        };
        let constructed = (first & CONSTRUCTED) != 0;

        let low_bits = first & LONG_FORM;
        if low_bits < LONG_FORM {
            return Ok((
                Tag {
                    class,
                    constructed,
                    number: low_bits as u32,
                },
                1,
            ));
        }

        // Long form: base-128 groups, high bit set on all but the last
        if input.get(1) == Some(&0x80) {
            return Err(DecodeError::InvalidTag);
        }
        let mut number: u32 = 0;
        let mut i = 1;
        loop {
            let Some(&byte) = input.get(i) else {
                return Err(DecodeError::Truncated);
            };
            if number > (u32::MAX >> 7) {
                return Err(DecodeError::InvalidTag);
            }
            number = (number << 7) | (byte & 0x7F) as u32;
            i += 1;
            if (byte & 0x80) == 0 {
                break;
            }
        }
        Ok((
            Tag {
                class,
                constructed,
                number,
            },
            i,
        ))
    }

    /// Encode this tag to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let class_bits = match self.class {
            TagClass::Universal => 0x00,
            TagClass::Application => 0x40,
            TagClass::ContextSpecific => 0x80,
            TagClass::Private => 0xC0,
        };
        let constructed_bit = if self.constructed { CONSTRUCTED } else { 0x00 };

        if self.number < LONG_FORM as u32 {
            return vec![class_bits | constructed_bit | (self.number as u8)];
        }

        let mut result = vec![class_bits | constructed_bit | LONG_FORM];
        let mut num = self.number;
        let mut bytes = Vec::new();
        while num > 0 {
            bytes.push((num & 0x7F) as u8);
            num >>= 7;
        }
        bytes.reverse();
        let last = bytes.len() - 1;
        for (i, b) in bytes.iter().enumerate() {
            if i < last {
                result.push(b | 0x80);
            } else {
                result.push(*b);
            }
        }
        result
    }
}

/// Parse length octets. `Ok((None, n))` means indefinite form.
pub(crate) fn read_length(input: &[u8]) -> Result<(Option<usize>, usize), DecodeError> {
    let Some(&first) = input.first() else {
        return Err(DecodeError::Truncated);
    };

    match first {
        0x00..=0x7F => Ok((Some(first as usize), 1)),
        0x80 => Ok((None, 1)),
        0xFF => Err(DecodeError::InvalidLength),
        _ => {
            let num_bytes = (first & 0x7F) as usize;
            if num_bytes > 4 {
                return Err(DecodeError::InvalidLength);
            }
            let bytes = input
                .get(1..1 + num_bytes)
                .ok_or(DecodeError::Truncated)?;
            let length = bytes
                .iter()
                .fold(0usize, |acc, &b| (acc << 8) | b as usize);
            Ok((Some(length), 1 + num_bytes))
        }
    }
}

/// Append DER length octets (minimal definite form).
pub(crate) fn write_length(buf: &mut Vec<u8>, length: usize) {
    if length < 0x80 {
        buf.push(length as u8);
        return;
    }
    let bytes = length.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    buf.push(0x80 | (bytes.len() - skip) as u8);
    buf.extend_from_slice(&bytes[skip..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tag() {
        let (tag, len) = Tag::from_bytes(&[0x30]).unwrap();
        assert_eq!(tag.class, TagClass::Universal);
        assert!(tag.constructed);
        assert_eq!(tag.number, 0x10);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_parse_context_tag() {
        let (tag, len) = Tag::from_bytes(&[0xA3, 0x00]).unwrap();
        assert_eq!(tag.class, TagClass::ContextSpecific);
        assert!(tag.constructed);
        assert_eq!(tag.number, 3);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_long_form_tag() {
        // [APPLICATION 200] primitive: 0x5F 0x81 0x48
        let (tag, len) = Tag::from_bytes(&[0x5F, 0x81, 0x48]).unwrap();
        assert_eq!(tag.class, TagClass::Application);
        assert!(!tag.constructed);
        assert_eq!(tag.number, 200);
        assert_eq!(len, 3);
        assert_eq!(tag.to_bytes(), vec![0x5F, 0x81, 0x48]);
    }

    #[test]
    fn test_bad_tags() {
        assert_eq!(Tag::from_bytes(&[]), Err(DecodeError::Truncated));
        assert_eq!(Tag::from_bytes(&[0x1F, 0x81]), Err(DecodeError::Truncated));
        assert_eq!(Tag::from_bytes(&[0x1F, 0x80, 0x01]), Err(DecodeError::InvalidTag));
        assert_eq!(
            Tag::from_bytes(&[0x1F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]),
            Err(DecodeError::InvalidTag)
        );
    }

    #[test]
    fn test_roundtrip() {
        for number in [0, 3, 30, 31, 127, 128, 16_383, 16_384, u32::MAX] {
            let tag = Tag {
                class: TagClass::ContextSpecific,
                constructed: true,
                number,
            };
            let bytes = tag.to_bytes();
            let (parsed, used) = Tag::from_bytes(&bytes).unwrap();
            assert_eq!(tag, parsed);
            assert_eq!(used, bytes.len());
        }
    }

    #[test]
    fn test_lengths() {
        assert_eq!(read_length(&[0x05]).unwrap(), (Some(5), 1));
        assert_eq!(read_length(&[0x80]).unwrap(), (None, 1));
        assert_eq!(read_length(&[0x82, 0x01, 0x00]).unwrap(), (Some(256), 3));
        assert_eq!(read_length(&[0x82, 0x01]), Err(DecodeError::Truncated));
        assert_eq!(read_length(&[0x85, 1, 2, 3, 4, 5]), Err(DecodeError::InvalidLength));
        assert_eq!(read_length(&[0xFF]), Err(DecodeError::InvalidLength));

        let mut buf = Vec::new();
        write_length(&mut buf, 0x7F);
        write_length(&mut buf, 0x80);
        write_length(&mut buf, 0x1_0000);
        assert_eq!(buf, vec![0x7F, 0x81, 0x80, 0x83, 0x01, 0x00, 0x00]);
    }
}
