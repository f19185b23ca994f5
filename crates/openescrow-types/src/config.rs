//! Configuration for an OpenEscrow engine instance.

use serde::{Deserialize, Serialize};

use crate::{constants, Currency, IdentityId};

/// Configuration for a single escrow engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscrowConfig {
    /// The system-controlled identity that custodies deposited funds
    /// between creation and release.
    pub escrow_identity: IdentityId,
    /// The denomination contracts are funded in and security deposits are
    /// settled in.
    pub settlement_currency: Currency,
    /// How long a claim stays open before it lapses, in days.
    pub claim_lifetime_days: i64,
}

impl EscrowConfig {
    /// Config with the stock settlement currency and claim lifetime.
    #[must_use]
    pub fn new(escrow_identity: IdentityId) -> Self {
        Self {
            escrow_identity,
            settlement_currency: Currency::new(
                constants::DEFAULT_SETTLEMENT_CODE,
                constants::DEFAULT_SETTLEMENT_PRECISION,
            ),
            claim_lifetime_days: constants::DEFAULT_CLAIM_LIFETIME_DAYS,
        }
    }

    /// The claim lifetime as a duration.
    #[must_use]
    pub fn claim_lifetime(&self) -> chrono::Duration {
        chrono::Duration::days(self.claim_lifetime_days)
    }
}
