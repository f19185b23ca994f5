//! The claim record — a dispute filed against a contract's deposit.
//!
//! ## Lifecycle
//!
//! ```text
//!   ┌──────┐  arbitrator rules   ┌────────┐
//!   │ OPEN ├────────────────────▶│ RULED  │ (upheld or rejected)
//!   └──┬───┘                     └────────┘
//!      │ expires un-ruled
//!      ▼
//!   ┌────────┐
//!   │ LAPSED │
//!   └────────┘
//! ```
//!
//! Both terminal states delete the record and decrement the parent
//! contract's `active_claims`; there is no transition back to OPEN. A
//! claim therefore exists in the store exactly while it is open, and any
//! operation naming a ruled or lapsed claim fails with `NotFound`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ClaimName, ContractName, IdentityId, Money};

/// An open dispute against a contract's deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Primary key.
    pub name: ClaimName,
    /// The identity that filed the claim and posted the security deposit.
    pub claimer: IdentityId,
    /// Non-owning back-reference to the contract under dispute, resolved
    /// by lookup at operation time.
    pub contract_name: ContractName,
    /// The disputed amount.
    pub amount: Money,
    /// Free-text description of the dispute. Non-empty.
    pub details: String,
    /// Language tag for `details`. Non-empty.
    pub language: String,
    /// Creation time plus the configured claim lifetime. After this the
    /// arbitrator can no longer rule and the claimer may withdraw.
    pub expiration: DateTime<Utc>,
}

impl Claim {
    /// Whether the claim's ruling window has closed.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiration
    }
}
