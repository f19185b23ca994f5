//! Identifiers used throughout OpenEscrow.
//!
//! Contract and claim names are caller-chosen primary keys; identities are
//! account names as known to the authorization oracle and funds gateway.
//! `TransferId` uses UUIDv7 for time-ordered lexicographic sorting.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ContractName
// ---------------------------------------------------------------------------

/// Primary key of a [`crate::Contract`]. Chosen by the creator, must be
/// non-empty and unique across the contract store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ContractName(pub String);

impl ContractName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ClaimName
// ---------------------------------------------------------------------------

/// Primary key of a [`crate::Claim`]. Chosen by the claimer, must be
/// non-empty and unique across the claim store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ClaimName(pub String);

impl ClaimName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// IdentityId
// ---------------------------------------------------------------------------

/// An account identity. The authorization oracle proves control of an
/// identity; the funds gateway moves value between identities. The engine
/// never inspects the inside of an identity, it only compares and forwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct IdentityId(pub String);

impl IdentityId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TransferId
// ---------------------------------------------------------------------------

/// Unique identifier for an executed funds transfer. UUIDv7, so receipts
/// sort in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TransferId(pub Uuid);

impl TransferId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TransferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_name_empty_check() {
        assert!(ContractName::new("").is_empty());
        assert!(!ContractName::new("lease.a").is_empty());
    }

    #[test]
    fn display_is_raw_name() {
        assert_eq!(ContractName::new("cA").to_string(), "cA");
        assert_eq!(ClaimName::new("cl1").to_string(), "cl1");
        assert_eq!(IdentityId::new("arb1").to_string(), "arb1");
    }

    #[test]
    fn transfer_id_uniqueness() {
        let a = TransferId::new();
        let b = TransferId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn transfer_id_ordering() {
        let a = TransferId::new();
        let b = TransferId::new();
        assert!(a < b);
    }

    #[test]
    fn serde_roundtrips() {
        let name = ContractName::new("cA");
        let json = serde_json::to_string(&name).unwrap();
        let back: ContractName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);

        let id = TransferId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: TransferId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
