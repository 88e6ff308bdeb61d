#![no_main]
use asnkit_utils::asn1::{decode, traverse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = traverse(data);
    // Anything that decodes must re-encode, and DER output must decode
    // back to the same tree.
    if let Ok(value) = decode(data) {
        if let Ok(der) = value.to_der() {
            let again = decode(&der).expect("encoder output decodes");
            assert_eq!(again.to_der().ok(), Some(der));
        }
    }
});
