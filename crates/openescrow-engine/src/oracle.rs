//! Authorization oracle — proves a caller controls an identity.
//!
//! Identity and key management are outside this core. The engine only
//! asks one question per operation: is the current call authorized by a
//! specific identity? A surrounding service answers it from session keys,
//! signatures, or whatever mechanism it uses.

use std::collections::HashSet;

use openescrow_types::{EscrowError, IdentityId, Result};

/// Answers whether the current operation is authorized by an identity.
pub trait AuthorizationOracle {
    /// Fails with `UnauthorizedCaller` if the current operation is not
    /// authorized by `identity`.
    fn require_authorization(&self, identity: &IdentityId) -> Result<()>;
}

/// In-memory oracle granting a fixed set of identities. One value models
/// one call context; tests build a fresh oracle per caller.
#[derive(Debug, Clone, Default)]
pub struct StaticOracle {
    authorized: HashSet<IdentityId>,
}

impl StaticOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle for a call made by a single identity.
    #[must_use]
    pub fn acting_as(identity: IdentityId) -> Self {
        let mut oracle = Self::new();
        oracle.grant(identity);
        oracle
    }

    pub fn grant(&mut self, identity: IdentityId) {
        self.authorized.insert(identity);
    }

    pub fn revoke(&mut self, identity: &IdentityId) {
        self.authorized.remove(identity);
    }
}

impl AuthorizationOracle for StaticOracle {
    fn require_authorization(&self, identity: &IdentityId) -> Result<()> {
        if self.authorized.contains(identity) {
            Ok(())
        } else {
            Err(EscrowError::UnauthorizedCaller {
                identity: identity.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_identity_passes() {
        let oracle = StaticOracle::acting_as(IdentityId::new("alice"));
        assert!(oracle.require_authorization(&IdentityId::new("alice")).is_ok());
    }

    #[test]
    fn ungranted_identity_fails() {
        let oracle = StaticOracle::acting_as(IdentityId::new("alice"));
        let err = oracle
            .require_authorization(&IdentityId::new("bob"))
            .unwrap_err();
        assert!(matches!(err, EscrowError::UnauthorizedCaller { identity } if identity.as_str() == "bob"));
    }

    #[test]
    fn revoke_removes_grant() {
        let mut oracle = StaticOracle::acting_as(IdentityId::new("alice"));
        oracle.revoke(&IdentityId::new("alice"));
        assert!(oracle.require_authorization(&IdentityId::new("alice")).is_err());
    }
}
