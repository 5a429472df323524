//! Consensus constants. These are fixed protocol parameters, not runtime configuration — the
//! engine has no config file or environment surface of its own (§2.1 of the specification this
//! crate implements).

/// Target duration, in seconds, of one 2016-block retarget epoch (two weeks).
pub const TARGET_TIMESPAN: u32 = 1_209_600;

/// Number of blocks between difficulty retargets.
pub const RETARGET_INTERVAL: u32 = 2016;

/// Number of blocks between subsidy halvings.
pub const HALVING_INTERVAL: u32 = 210_000;

/// Initial block subsidy, in satoshis, before any halving.
pub const INITIAL_SUBSIDY_SATS: u64 = 5_000_000_000;

/// Number of halvings after which the subsidy is permanently zero.
pub const MAX_HALVINGS: u32 = 64;

/// Width of the median-time-past rolling window.
pub const MTP_WINDOW: usize = 11;

/// Compact encoding of the network's maximum (easiest) target.
pub const MAX_TARGET_BITS: u32 = 0x1d00ffff;

/// The null outpoint's output index, marking a coinbase input.
pub const COINBASE_OUTPOINT_VOUT: u32 = 0xFFFF_FFFF;
