#![forbid(unsafe_code)]
#![doc = "Common error types for the asnkit ASN.1 codec and OID registry."]

pub mod error;

pub use error::*;
