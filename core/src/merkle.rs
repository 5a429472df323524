//! Merkle-root computation with the CVE-2012-2459 duplicate-transaction guard.
//!
//! CVE-2012-2459: a miner can duplicate the last transaction hash of an odd-sized level to
//! produce two different transaction lists with the same Merkle root, letting an attacker
//! re-broadcast a mutated block that still validates against the original root. The reference
//! fix rejects trees where the duplication that produced the root was *itself* a duplication of
//! an already-adjacent-equal pair, rather than the harmless odd-count carry-forward.

use crate::error::ConsensusError;
use crate::hash::HashPrimitive;

/// Computes the Merkle root of `leaves` using Bitcoin's pairwise-hash-and-duplicate algorithm,
/// rejecting any level where two *distinct* adjacent positions hold an identical hash.
pub fn merkle_root(
    leaves: &[[u8; 32]],
    hasher: &impl HashPrimitive,
) -> Result<[u8; 32], ConsensusError> {
    if leaves.is_empty() {
        return Err(ConsensusError::EmptyMerkleInput);
    }

    let mut level = leaves.to_vec();
    let mut depth = 0usize;

    while level.len() > 1 {
        // The CVE-2012-2459 guard: two adjacent *distinct array positions* sharing a hash is
        // always rejected. This is deliberately stricter than some historical implementations,
        // which only check the final pairing of an even-length level — the odd-count carry
        // duplication the algorithm performs below never creates two array positions holding
        // the same hash (the lone trailing element is paired with itself, not with a sibling
        // entry), so no exception is needed here.
        for pos in 0..level.len() - 1 {
            if level[pos] == level[pos + 1] {
                return Err(ConsensusError::DuplicateSibling {
                    level: depth,
                    position: pos,
                });
            }
        }

        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut i = 0;
        while i < level.len() {
            let left = level[i];
            let right = if i + 1 < level.len() { level[i + 1] } else { left };
            let mut preimage = [0u8; 64];
            preimage[..32].copy_from_slice(&left);
            preimage[32..].copy_from_slice(&right);
            next.push(hasher.double_sha256(&preimage));
            i += 2;
        }
        level = next;
        depth += 1;
    }

    Ok(level[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256d;

    fn leaf(byte: u8) -> [u8; 32] {
        [byte; 32]
    }

    #[test]
    fn single_leaf_is_returned_unchanged() {
        let h = leaf(0xaa);
        assert_eq!(merkle_root(&[h], &Sha256d).unwrap(), h);
    }

    #[test]
    fn two_leaves_hash_once() {
        let a = leaf(0x01);
        let b = leaf(0x02);
        let mut preimage = [0u8; 64];
        preimage[..32].copy_from_slice(&a);
        preimage[32..].copy_from_slice(&b);
        let expected = Sha256d.double_sha256(&preimage);
        assert_eq!(merkle_root(&[a, b], &Sha256d).unwrap(), expected);
    }

    #[test]
    fn odd_count_duplicates_the_last_leaf() {
        let a = leaf(0x01);
        let b = leaf(0x02);
        let c = leaf(0x03);
        // Level 0: [a, b, c] -> duplicate c -> [a,b,c,c] -> pairs (a,b) (c,c)
        let root = merkle_root(&[a, b, c], &Sha256d).unwrap();

        let mut ab = [0u8; 64];
        ab[..32].copy_from_slice(&a);
        ab[32..].copy_from_slice(&b);
        let h_ab = Sha256d.double_sha256(&ab);

        let mut cc = [0u8; 64];
        cc[..32].copy_from_slice(&c);
        cc[32..].copy_from_slice(&c);
        let h_cc = Sha256d.double_sha256(&cc);

        let mut top = [0u8; 64];
        top[..32].copy_from_slice(&h_ab);
        top[32..].copy_from_slice(&h_cc);
        let expected = Sha256d.double_sha256(&top);

        assert_eq!(root, expected);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(merkle_root(&[], &Sha256d), Err(ConsensusError::EmptyMerkleInput));
    }

    #[test]
    fn genuine_adjacent_duplicate_is_rejected() {
        let a = leaf(0x01);
        // Four leaves where positions 1 and 2 (both even-indexed pairs already) coincide: this
        // is not the single trailing duplicate, so it must be rejected.
        let leaves = [a, a, leaf(0x02), leaf(0x03)];
        assert_eq!(
            merkle_root(&leaves, &Sha256d),
            Err(ConsensusError::DuplicateSibling { level: 0, position: 0 })
        );
    }

    #[test]
    fn explicit_trailing_duplicate_is_rejected() {
        let a = leaf(0x01);
        let b = leaf(0x02);
        // [a, b, b]: an explicit third leaf equal to the second is indistinguishable, at the
        // byte level, from the CVE-2012-2459 duplication attack, so the stricter any-level
        // policy rejects it even though the automatic odd-count carry alone would not.
        assert_eq!(
            merkle_root(&[a, b, b], &Sha256d),
            Err(ConsensusError::DuplicateSibling { level: 0, position: 1 })
        );
    }

    #[test]
    fn odd_count_without_explicit_duplicate_is_accepted() {
        let a = leaf(0x01);
        let b = leaf(0x02);
        let c = leaf(0x03);
        assert!(merkle_root(&[a, b, c], &Sha256d).is_ok());
    }
}
