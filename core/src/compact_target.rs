//! Compact ("bits") target encoding, decoding, and work computation.
//!
//! The compact form packs a 256-bit target into 32 bits as `exponent (1 byte) || mantissa
//! (3 bytes)`. This module is the only place that knows how to move between the two
//! representations; everything else in the crate works with decoded [`U256`] targets.

use crate::consts::MAX_TARGET_BITS;
use crate::error::ConsensusError;
use crate::u256::U256;
use std::sync::OnceLock;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Decodes a compact `bits` value into a 256-bit target.
pub fn bits_to_target(bits: u32) -> Result<U256, ConsensusError> {
    if bits & SIGN_BIT != 0 {
        return Err(ConsensusError::NegativeTarget(bits));
    }
    let exponent = bits >> 24;
    let mantissa = bits & MANTISSA_MASK;

    let target = if exponent <= 3 {
        U256::from_u32(mantissa).shr(8 * (3 - exponent))
    } else {
        U256::from_u32(mantissa)
            .checked_shl(8 * (exponent - 3))
            .map_err(|_| ConsensusError::TargetOverflow(bits))?
    };

    Ok(target)
}

/// Decodes `bits` and checks it does not exceed [`max_target`].
pub fn bits_to_checked_target(bits: u32) -> Result<U256, ConsensusError> {
    let target = bits_to_target(bits)?;
    if target > max_target() {
        return Err(ConsensusError::TargetAboveMax);
    }
    Ok(target)
}

/// Encodes a 256-bit target into its canonical compact `bits` form.
///
/// Canonical means: the minimal mantissa byte-length is used, and if the top bit of the
/// candidate mantissa would be set (making the value look negative), the mantissa is shifted
/// down by a byte and the exponent bumped, so the sign bit always reads zero.
pub fn target_to_bits(target: U256) -> u32 {
    let mut size = target.byte_len();
    let mut compact = if size <= 3 {
        let shift = 8 * (3 - size);
        let bytes = target.to_be_bytes();
        u32::from_be_bytes([0, bytes[29], bytes[30], bytes[31]]) << shift
    } else {
        let shift = 8 * (size - 3);
        let shifted = target.shr(shift);
        let bytes = shifted.to_be_bytes();
        u32::from_be_bytes([0, bytes[29], bytes[30], bytes[31]])
    };

    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    (size << 24) | (compact & MANTISSA_MASK)
}

/// The network's maximum (easiest) target, decoded from [`MAX_TARGET_BITS`].
pub fn max_target() -> U256 {
    static MAX_TARGET: OnceLock<U256> = OnceLock::new();
    *MAX_TARGET.get_or_init(|| {
        bits_to_target(MAX_TARGET_BITS).expect("MAX_TARGET_BITS is a valid compact target")
    })
}

/// `floor((2^256 - 1) / (target + 1))`, additive work contributed by a block with this target.
pub fn compute_work_from_target(target: U256) -> Result<U256, ConsensusError> {
    if target == U256::MAX {
        return Ok(U256::ONE);
    }
    let denominator = target.checked_add(U256::ONE)?;
    U256::MAX.checked_div(denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_target_bits_round_trip() {
        let target = bits_to_target(MAX_TARGET_BITS).unwrap();
        assert_eq!(target_to_bits(target), MAX_TARGET_BITS);
    }

    #[test]
    fn sign_bit_is_rejected() {
        assert_eq!(
            bits_to_target(0x0180_0000 | SIGN_BIT),
            Err(ConsensusError::NegativeTarget(0x0180_0000 | SIGN_BIT))
        );
    }

    #[test]
    fn low_exponent_shifts_right() {
        // exponent 2, mantissa 0x123456 -> target = mantissa >> 8
        let bits = (2u32 << 24) | 0x0012_3456;
        let target = bits_to_target(bits).unwrap();
        assert_eq!(target, U256::from_u32(0x0012_3456).shr(8));
    }

    #[test]
    fn above_max_target_is_rejected() {
        // exponent 0x21 with a large mantissa decodes well above MAX_TARGET.
        let bits = (0x21u32 << 24) | 0x0000_00ff;
        assert_eq!(bits_to_checked_target(bits), Err(ConsensusError::TargetAboveMax));
    }

    #[test]
    fn work_of_max_target_is_one() {
        assert_eq!(compute_work_from_target(U256::MAX).unwrap(), U256::ONE);
    }

    #[test]
    fn work_is_monotonically_non_increasing_in_target() {
        let low = bits_to_target(0x1d00_1fff).unwrap();
        let high = bits_to_target(MAX_TARGET_BITS).unwrap();
        assert!(low < high);
        let work_low = compute_work_from_target(low).unwrap();
        let work_high = compute_work_from_target(high).unwrap();
        assert!(work_low >= work_high);
    }

    #[test]
    fn canonical_round_trip_property_holds_for_sampled_bits() {
        // P1: target_to_bits(bits_to_target(b)) == b for canonically-encoded b.
        for bits in [0x1d00ffffu32, 0x1b0404cb, 0x207fffff, 0x03000001, 0x04000080] {
            let target = bits_to_target(bits).unwrap();
            assert_eq!(target_to_bits(target), bits, "round-trip failed for {bits:#010x}");
        }
    }
}
