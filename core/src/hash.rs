//! The hashing capability consumed by this crate.
//!
//! Per the "no dynamic dispatch" design note, the engine never reaches for a process-wide
//! hashing singleton: every function that needs to hash bytes takes a `&impl HashPrimitive`
//! (or is generic over `H: HashPrimitive`) as an explicit parameter.

/// A capability that computes Bitcoin's double-SHA-256 over an arbitrary byte span.
pub trait HashPrimitive {
    fn double_sha256(&self, bytes: &[u8]) -> [u8; 32];
}

/// The reference [`HashPrimitive`], backed by the `sha2` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256d;

impl HashPrimitive for Sha256d {
    fn double_sha256(&self, bytes: &[u8]) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let first = Sha256::digest(bytes);
        Sha256::digest(first).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_sha256_of_empty_matches_known_vector() {
        // sha256(sha256("")) is a well-known constant.
        let got = Sha256d.double_sha256(&[]);
        let expected =
            hex::decode("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
                .unwrap();
        assert_eq!(&got[..], &expected[..]);
    }
}
