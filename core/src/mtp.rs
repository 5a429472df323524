//! Median-time-past: a fixed 11-slot rolling window of prior block timestamps.
//!
//! The window is a plain fixed-length ring, indexed by `block_height mod MTP_WINDOW` — no
//! growable container is needed, and the "circular timestamps window" design note is satisfied
//! by `[u32; MTP_WINDOW]` living directly on `ChainState`.

use crate::consts::MTP_WINDOW;
use crate::error::ConsensusError;

/// Computes the median of the populated prefix of `prev_timestamps`, where only the first
/// `min(MTP_WINDOW, block_height)` entries participate.
pub fn median_time_past(prev_timestamps: &[u32; MTP_WINDOW], block_height: u32) -> u32 {
    let populated = (block_height as usize).min(MTP_WINDOW);
    if populated == 0 {
        return 0;
    }
    let mut window: Vec<u32> = prev_timestamps[..populated].to_vec();
    window.sort_unstable();
    window[populated / 2]
}

/// Checks that `time` is strictly after the median time past.
pub fn check_timestamp(
    time: u32,
    prev_timestamps: &[u32; MTP_WINDOW],
    block_height: u32,
) -> Result<(), ConsensusError> {
    let median = median_time_past(prev_timestamps, block_height);
    if time > median {
        Ok(())
    } else {
        Err(ConsensusError::TimestampTooOld { time, median })
    }
}

/// Rotates `header_time` into the window at the slot for the block being applied at
/// `new_height` (i.e. `new_height - 1`, since the window records applied blocks).
pub fn rotate(prev_timestamps: &mut [u32; MTP_WINDOW], new_height: u32, header_time: u32) {
    let slot = ((new_height - 1) as usize) % MTP_WINDOW;
    prev_timestamps[slot] = header_time;
}
