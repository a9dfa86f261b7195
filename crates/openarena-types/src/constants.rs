//! System-wide constants for the OpenArena admission engine.

/// Default timeout for a single Referral Tree Oracle call, in milliseconds.
/// A timeout is treated the same as an unreachable oracle.
pub const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 3_000;

/// Hex-digit length of a wallet address (without the `0x` prefix).
pub const WALLET_ADDRESS_HEX_LEN: usize = 40;

/// Maximum decimal precision for coin amounts (8 decimal places).
pub const COIN_PRECISION: u32 = 8;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenArena";
