//! Transfer receipts — the audit trail of executed funds movements.
//!
//! Every transfer the engine requests from the funds gateway produces a
//! [`TransferReceipt`]. Receipts are append-only; the digest lets an
//! external auditor verify a receipt log entry was not altered after the
//! fact.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{IdentityId, Money, TransferId};

/// Record of one executed funds transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Unique, time-ordered identifier minted by the gateway.
    pub id: TransferId,
    /// Debited identity.
    pub from: IdentityId,
    /// Credited identity.
    pub to: IdentityId,
    /// Amount moved.
    pub amount: Money,
    /// Memo naming the operation that caused the transfer, e.g.
    /// `"deposit for claim cl1"`.
    pub memo: String,
}

impl TransferReceipt {
    /// SHA-256 digest of the canonical receipt payload, hex-encoded.
    ///
    /// Format: `"openescrow:receipt:v1:" || id || from || to || amount ||
    /// currency || memo`, fields separated by `0x1f`.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"openescrow:receipt:v1:");
        for field in [
            self.id.0.to_string(),
            self.from.0.clone(),
            self.to.0.clone(),
            self.amount.amount.to_string(),
            self.amount.currency.code.clone(),
            self.memo.clone(),
        ] {
            hasher.update(field.as_bytes());
            hasher.update([0x1f]);
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Currency;

    fn make_receipt() -> TransferReceipt {
        TransferReceipt {
            id: TransferId::new(),
            from: IdentityId::new("bob"),
            to: IdentityId::new("escrow.hold"),
            amount: Money::from_minor_units(100_000, Currency::new("EOS", 4)),
            memo: "deposit for claim cl1".to_string(),
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let receipt = make_receipt();
        assert_eq!(receipt.digest(), receipt.digest());
    }

    #[test]
    fn digest_changes_with_memo() {
        let receipt = make_receipt();
        let mut altered = receipt.clone();
        altered.memo = "closed claim cl1".to_string();
        assert_ne!(receipt.digest(), altered.digest());
    }

    #[test]
    fn digest_changes_with_amount() {
        let receipt = make_receipt();
        let mut altered = receipt.clone();
        altered.amount = Money::from_minor_units(100_001, Currency::new("EOS", 4));
        assert_ne!(receipt.digest(), altered.digest());
    }

    #[test]
    fn serde_roundtrip() {
        let receipt = make_receipt();
        let json = serde_json::to_string(&receipt).unwrap();
        let back: TransferReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, back);
    }
}
