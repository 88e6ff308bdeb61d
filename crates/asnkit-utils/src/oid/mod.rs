//! OID (Object Identifier) arcs and the process-wide name registry.

mod builtin;
mod registry;

pub use builtin::{nid, ObjectInfo, BUILTIN_OBJECTS};
pub use registry::OidRegistry;

use std::fmt;
use std::str::FromStr;

use asnkit_types::{DecodeError, EncodeError};

/// A validated OID represented as a sequence of arc values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid {
    arcs: Vec<u64>,
}

impl Oid {
    /// Create an OID from arc values.
    ///
    /// Needs at least two arcs, a first arc of 0, 1 or 2, and a second arc
    /// below 40 unless the first arc is 2.
    pub fn from_arcs(arcs: &[u64]) -> Result<Self, EncodeError> {
        let valid = match arcs {
            [0..=1, second, ..] => *second < 40,
            [2, second, ..] => second.checked_add(80).is_some(),
            _ => false,
        };
        if !valid {
            return Err(EncodeError::InvalidOid(dotted(arcs)));
        }
        Ok(Self {
            arcs: arcs.to_vec(),
        })
    }

    /// Return the arc values.
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    /// Encode this OID to DER bytes (just the value, no tag/length).
    pub fn to_der_value(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_arc(&mut buf, self.arcs[0] * 40 + self.arcs[1]);
        for &arc in &self.arcs[2..] {
            encode_arc(&mut buf, arc);
        }
        buf
    }

    /// Parse an OID from DER value bytes.
    pub fn from_der_value(data: &[u8]) -> Result<Self, DecodeError> {
        if data.is_empty() {
            return Err(DecodeError::content("OBJECT", "empty identifier"));
        }
        let mut arcs = Vec::new();
        let mut i = 0;
        while i < data.len() {
            let (arc, consumed) = decode_arc(&data[i..])?;
            if arcs.is_empty() {
                // The first subidentifier packs two arcs as 40 * X + Y.
                let first = (arc / 40).min(2);
                arcs.push(first);
                arcs.push(arc - first * 40);
            } else {
                arcs.push(arc);
            }
            i += consumed;
        }
        Ok(Self { arcs })
    }

    /// Return the dotted-string representation (e.g., "1.2.840.113549.1.1.1").
    pub fn to_dot_string(&self) -> String {
        dotted(&self.arcs)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dot_string())
    }
}

impl FromStr for Oid {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arcs = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                part.parse::<u64>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| EncodeError::InvalidOid(s.to_string()))?;
        Self::from_arcs(&arcs).map_err(|_| EncodeError::InvalidOid(s.to_string()))
    }
}

fn dotted(arcs: &[u64]) -> String {
    arcs.iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn encode_arc(buf: &mut Vec<u8>, mut value: u64) {
    if value < 0x80 {
        buf.push(value as u8);
        return;
    }
    let mut bytes = Vec::new();
    while value > 0 {
        bytes.push((value & 0x7F) as u8);
        value >>= 7;
    }
    bytes.reverse();
    let last = bytes.len() - 1;
    for (i, b) in bytes.iter().enumerate() {
        if i < last {
            buf.push(b | 0x80);
        } else {
            buf.push(*b);
        }
    }
}

fn decode_arc(data: &[u8]) -> Result<(u64, usize), DecodeError> {
    if data[0] == 0x80 {
        return Err(DecodeError::content("OBJECT", "non-minimal subidentifier"));
    }
    let mut value: u64 = 0;
    for (i, &byte) in data.iter().enumerate() {
        if value > (u64::MAX >> 7) {
            return Err(DecodeError::content("OBJECT", "arc too large"));
        }
        value = (value << 7) | (byte & 0x7F) as u64;
        if (byte & 0x80) == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(DecodeError::content("OBJECT", "truncated subidentifier"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_roundtrip() {
        let oid: Oid = "1.2.840.113549.1.1.1".parse().unwrap();
        let der = oid.to_der_value();
        let parsed = Oid::from_der_value(&der).unwrap();
        assert_eq!(oid, parsed);
    }

    #[test]
    fn test_dot_string() {
        let oid = Oid::from_arcs(&[1, 2, 840, 113549, 1, 1, 1]).unwrap();
        assert_eq!(oid.to_dot_string(), "1.2.840.113549.1.1.1");
        assert_eq!(oid.to_string(), "1.2.840.113549.1.1.1");
    }

    #[test]
    fn test_rsa_encryption_oid_der() {
        // The well-known DER encoding of rsaEncryption OID
        let oid: Oid = "1.2.840.113549.1.1.1".parse().unwrap();
        assert_eq!(
            oid.to_der_value(),
            &[0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01]
        );
    }

    #[test]
    fn test_joint_iso_large_second_arc() {
        // 2.999.3: first subidentifier 1079 spans two bytes
        let oid: Oid = "2.999.3".parse().unwrap();
        let der = oid.to_der_value();
        assert_eq!(der, &[0x88, 0x37, 0x03]);
        assert_eq!(Oid::from_der_value(&der).unwrap().to_dot_string(), "2.999.3");
    }

    #[test]
    fn test_first_arc_split() {
        assert_eq!(Oid::from_der_value(&[0x27]).unwrap().arcs(), &[0, 39]);
        assert_eq!(Oid::from_der_value(&[0x28]).unwrap().arcs(), &[1, 0]);
        assert_eq!(Oid::from_der_value(&[0x55, 0x04, 0x03]).unwrap().arcs(), &[2, 5, 4, 3]);
    }

    #[test]
    fn test_invalid_strings() {
        for bad in ["", "1", "3.1", "1.40", "1..2", "1.2.x", "1.2.-3", " 1.2"] {
            assert!(
                matches!(bad.parse::<Oid>(), Err(EncodeError::InvalidOid(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(Oid::from_der_value(&[]).is_err());
        // continuation bit set on the last byte
        assert!(Oid::from_der_value(&[0x2A, 0x86]).is_err());
        // leading 0x80 padding
        assert!(Oid::from_der_value(&[0x2A, 0x80, 0x01]).is_err());
        // more than 64 bits in one arc
        let mut long = vec![0x2A];
        long.extend_from_slice(&[0xFF; 10]);
        long.push(0x7F);
        assert!(Oid::from_der_value(&long).is_err());
    }
}
