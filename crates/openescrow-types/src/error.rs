//! Error types for the OpenEscrow engine.
//!
//! All errors use the `ES_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by kind:
//! - 1xx: input validation (malformed arguments, key collisions)
//! - 2xx: missing records
//! - 3xx: authorization
//! - 4xx: business-rule gates
//! - 5xx: funds transfer
//!
//! Every operation validates before it mutates, so any of these surfacing
//! to a caller means the operation left no partial state behind.

use thiserror::Error;

use crate::IdentityId;

/// Central error enum for all OpenEscrow operations.
#[derive(Debug, Error)]
pub enum EscrowError {
    /// Malformed or out-of-range input: empty name, non-positive amount,
    /// empty text, denomination mismatch, amount below the fee
    /// quantization threshold.
    #[error("ES_ERR_100: invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A contract or claim with this name already exists.
    #[error("ES_ERR_101: duplicate key: {name}")]
    DuplicateKey { name: String },

    /// The referenced contract or claim does not exist.
    #[error("ES_ERR_200: not found: {name}")]
    NotFound { name: String },

    /// The current operation is not authorized by the required identity.
    #[error("ES_ERR_300: caller is not authorized as {identity}")]
    UnauthorizedCaller { identity: IdentityId },

    /// A business-rule gate was not met: closing a contract with active
    /// claims, ruling an expired claim, closing an unexpired claim against
    /// a funded contract.
    #[error("ES_ERR_400: precondition failed: {reason}")]
    PreconditionFailed { reason: String },

    /// The funds gateway refused a transfer (insufficient balance or
    /// unknown identity). Propagated as-is; the operation that requested
    /// the transfer is rolled back in full.
    #[error("ES_ERR_500: transfer failed: {reason}")]
    TransferFailed { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, EscrowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = EscrowError::NotFound {
            name: "cA".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("ES_ERR_200"), "Got: {msg}");
        assert!(msg.contains("cA"));
    }

    #[test]
    fn unauthorized_display_names_identity() {
        let err = EscrowError::UnauthorizedCaller {
            identity: IdentityId::new("arb1"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("ES_ERR_300"));
        assert!(msg.contains("arb1"));
    }

    #[test]
    fn all_errors_have_es_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(EscrowError::InvalidArgument {
                reason: "x".into(),
            }),
            Box::new(EscrowError::DuplicateKey { name: "x".into() }),
            Box::new(EscrowError::NotFound { name: "x".into() }),
            Box::new(EscrowError::UnauthorizedCaller {
                identity: IdentityId::new("x"),
            }),
            Box::new(EscrowError::PreconditionFailed {
                reason: "x".into(),
            }),
            Box::new(EscrowError::TransferFailed {
                reason: "x".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("ES_ERR_"),
                "Error missing ES_ERR_ prefix: {msg}"
            );
        }
    }
}
