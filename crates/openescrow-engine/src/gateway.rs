//! Funds transfer gateway — moves value between identities.
//!
//! The token rail itself is outside this core; the engine only describes
//! the transfers an operation requires and hands them to a gateway. The
//! batch form is the atomicity seam: an operation stages every transfer
//! it needs, validation happens first, and the one `transfer_batch` call
//! either applies all of them or none — after which the engine's store
//! writes cannot fail. That is how a store mutation and its transfer
//! intents commit together.

use std::collections::{HashMap, HashSet};

use openescrow_types::{
    EscrowError, IdentityId, Money, Result, TransferId, TransferReceipt,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One transfer an operation wants executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferIntent {
    pub from: IdentityId,
    pub to: IdentityId,
    pub amount: Money,
    pub memo: String,
}

impl TransferIntent {
    #[must_use]
    pub fn new(from: IdentityId, to: IdentityId, amount: Money, memo: String) -> Self {
        Self {
            from,
            to,
            amount,
            memo,
        }
    }
}

/// Executes value movement between identities.
pub trait FundsGateway {
    /// Whether `identity` is known to the funds service.
    fn identity_exists(&self, identity: &IdentityId) -> bool;

    /// Execute a group of transfers as one atomic unit: either every
    /// transfer in `batch` applies, or none do and `TransferFailed` is
    /// returned. Implementations must uphold this all-or-nothing
    /// contract.
    fn transfer_batch(&mut self, batch: &[TransferIntent]) -> Result<()>;

    /// Execute a single transfer.
    fn transfer(
        &mut self,
        from: &IdentityId,
        to: &IdentityId,
        amount: &Money,
        memo: &str,
    ) -> Result<()> {
        self.transfer_batch(&[TransferIntent::new(
            from.clone(),
            to.clone(),
            amount.clone(),
            memo.to_string(),
        )])
    }
}

/// In-memory funds gateway: per-(identity, currency) balances, a receipt
/// log, and per-currency supply totals for conservation checks.
#[derive(Debug, Default)]
pub struct MemoryFundsGateway {
    identities: HashSet<IdentityId>,
    /// Per-(identity, currency code) balances.
    balances: HashMap<(IdentityId, String), Decimal>,
    receipts: Vec<TransferReceipt>,
}

impl MemoryFundsGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an identity known to the gateway without funding it.
    pub fn register(&mut self, identity: IdentityId) {
        self.identities.insert(identity);
    }

    /// Register an identity and credit it.
    pub fn deposit(&mut self, identity: &IdentityId, amount: &Money) {
        self.identities.insert(identity.clone());
        *self
            .balances
            .entry((identity.clone(), amount.currency.code.clone()))
            .or_insert(Decimal::ZERO) += amount.amount;
    }

    /// The identity's balance in the given currency code.
    #[must_use]
    pub fn balance(&self, identity: &IdentityId, currency_code: &str) -> Decimal {
        self.balances
            .get(&(identity.clone(), currency_code.to_string()))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all identities' balances in the given currency code.
    /// Transfers never change this; only [`Self::deposit`] does.
    #[must_use]
    pub fn total_supply(&self, currency_code: &str) -> Decimal {
        self.balances
            .iter()
            .filter(|((_, code), _)| code == currency_code)
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// The append-only log of executed transfers, oldest first.
    #[must_use]
    pub fn receipts(&self) -> &[TransferReceipt] {
        &self.receipts
    }
}

impl FundsGateway for MemoryFundsGateway {
    fn identity_exists(&self, identity: &IdentityId) -> bool {
        self.identities.contains(identity)
    }

    fn transfer_batch(&mut self, batch: &[TransferIntent]) -> Result<()> {
        // Stage against a copy so a failure part-way leaves nothing applied.
        let mut staged = self.balances.clone();
        for intent in batch {
            if !self.identities.contains(&intent.from) {
                return Err(EscrowError::TransferFailed {
                    reason: format!("unknown identity {}", intent.from),
                });
            }
            if !self.identities.contains(&intent.to) {
                return Err(EscrowError::TransferFailed {
                    reason: format!("unknown identity {}", intent.to),
                });
            }
            if !intent.amount.is_positive() {
                return Err(EscrowError::TransferFailed {
                    reason: format!("non-positive transfer amount {}", intent.amount),
                });
            }

            let from_key = (intent.from.clone(), intent.amount.currency.code.clone());
            let available = staged.get(&from_key).copied().unwrap_or(Decimal::ZERO);
            if available < intent.amount.amount {
                return Err(EscrowError::TransferFailed {
                    reason: format!(
                        "insufficient balance: {} has {} {}, needs {}",
                        intent.from, available, intent.amount.currency.code, intent.amount.amount
                    ),
                });
            }
            staged.insert(from_key, available - intent.amount.amount);
            *staged
                .entry((intent.to.clone(), intent.amount.currency.code.clone()))
                .or_insert(Decimal::ZERO) += intent.amount.amount;
        }

        self.balances = staged;
        for intent in batch {
            self.receipts.push(TransferReceipt {
                id: TransferId::new(),
                from: intent.from.clone(),
                to: intent.to.clone(),
                amount: intent.amount.clone(),
                memo: intent.memo.clone(),
            });
        }
        Ok(())
    }
}
