#![forbid(unsafe_code)]
#![doc = "ASN.1 BER/DER codec and object identifier registry for asnkit."]

#[cfg(feature = "asn1")]
pub mod asn1;

#[cfg(feature = "oid")]
pub mod oid;
