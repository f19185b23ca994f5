//! The contract record — a standing escrow agreement.
//!
//! A contract holds a creator's deposit behind a named, human-readable
//! agreement until it either expires claim-free or is consumed by upheld
//! claims. The deposit only ever decreases: it starts positive and is
//! debited by upheld rulings, never topped up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ContractName, IdentityId, Money};

/// A standing escrow agreement.
///
/// Invariants maintained by the engine:
/// - `deposit` is monotonically non-increasing over the contract's life;
/// - `active_claims` counts exactly the open claims naming this contract;
/// - the record can only be deleted while `active_claims == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Primary key.
    pub name: ContractName,
    /// The identity that funded the contract and receives refunds.
    pub creator: IdentityId,
    /// Remaining escrowed balance.
    pub deposit: Money,
    /// Human-readable agreement text. Non-empty.
    pub ricardian_text: String,
    /// After this instant the contract may be closed unconditionally once
    /// it is claim-free.
    pub expiration: DateTime<Utc>,
    /// The identity authorized to rule on claims against this contract.
    pub arbitrator: IdentityId,
    /// Number of claims currently open against this contract.
    pub active_claims: u32,
}

impl Contract {
    /// Whether the contract's expiration has passed.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration <= now
    }
}
