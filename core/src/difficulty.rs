//! The two-week difficulty retargeting algorithm and its clamps.

use crate::compact_target::{bits_to_target, max_target, target_to_bits};
use crate::consts::{RETARGET_INTERVAL, TARGET_TIMESPAN};
use crate::error::ConsensusError;
use crate::u256::U256;

/// Returns whether `height` is a retarget boundary (`height > 0` and a multiple of
/// [`RETARGET_INTERVAL`]).
pub fn is_retarget_height(height: u32) -> bool {
    height > 0 && height % RETARGET_INTERVAL == 0
}

/// Clamps a (possibly negative, for a header whose timestamp precedes its epoch's start)
/// `actual_timespan` to `[TARGET_TIMESPAN/4, TARGET_TIMESPAN*4]`.
pub fn clamp_timespan(actual_timespan: i64) -> u32 {
    let lower = i64::from(TARGET_TIMESPAN / 4);
    let upper = i64::from(TARGET_TIMESPAN * 4);
    actual_timespan.clamp(lower, upper) as u32
}

/// Computes the new compact target for a retarget boundary block.
///
/// `header_time` is the `time` of the block being retargeted onto (the last block of the
/// epoch just closed is implicit in `epoch_start_time` having already been recorded at that
/// epoch's first block); `current_bits` is the target in force through the closing epoch.
pub fn next_retarget_bits(
    current_bits: u32,
    epoch_start_time: u32,
    header_time: u32,
) -> Result<u32, ConsensusError> {
    let signed_timespan = i64::from(header_time) - i64::from(epoch_start_time);
    let actual_timespan = clamp_timespan(signed_timespan);
    let old_target = bits_to_target(current_bits)?;

    let scaled = old_target.checked_mul(U256::from_u32(actual_timespan))?;
    let new_target = scaled
        .checked_div(U256::from_u32(TARGET_TIMESPAN))?
        .min(max_target());

    Ok(target_to_bits(new_target))
}

/// Computes the `bits` a candidate header at `height` must declare, given the current state's
/// `current_bits` and, if `height` is a retarget boundary, the epoch's `epoch_start_time`.
pub fn expected_bits(
    height: u32,
    current_bits: u32,
    epoch_start_time: u32,
    header_time: u32,
) -> Result<u32, ConsensusError> {
    if is_retarget_height(height) {
        next_retarget_bits(current_bits, epoch_start_time, header_time)
    } else {
        Ok(current_bits)
    }
}

/// Verifies a header's declared `bits` matches the expected value for its height, and that its
/// hash satisfies the resulting target.
pub fn check_target(
    height: u32,
    declared_bits: u32,
    current_bits: u32,
    epoch_start_time: u32,
    header_time: u32,
) -> Result<(), ConsensusError> {
    let expected = expected_bits(height, current_bits, epoch_start_time, header_time)?;
    if declared_bits != expected {
        return Err(ConsensusError::UnexpectedTarget {
            height,
            expected,
            actual: declared_bits,
        });
    }
    Ok(())
}

/// Verifies `hash_as_u256 <= target`.
pub fn check_proof_of_work(hash_as_u256: U256, target: U256) -> Result<(), ConsensusError> {
    if hash_as_u256 <= target {
        Ok(())
    } else {
        Err(ConsensusError::InsufficientWork)
    }
}
