//! System-wide constants for the OpenEscrow engine.

/// A claim's security deposit is the claim amount's minor units divided by
/// this (10% of the claimed amount, floor toward zero).
pub const SECURITY_DEPOSIT_DIVISOR: i64 = 10;

/// The arbitrator's fee is the security deposit's minor units divided by
/// this (50% of the security deposit, floor toward zero).
pub const ARBITRATOR_FEE_DIVISOR: i64 = 2;

/// Default claim lifetime: an un-ruled claim lapses after this many days.
pub const DEFAULT_CLAIM_LIFETIME_DAYS: i64 = 14;

/// Default settlement currency code.
pub const DEFAULT_SETTLEMENT_CODE: &str = "EOS";

/// Default settlement currency precision (decimal places in a minor unit).
pub const DEFAULT_SETTLEMENT_PRECISION: u32 = 4;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenEscrow";
