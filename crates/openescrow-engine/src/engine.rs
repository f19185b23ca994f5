//! The escrow engine — the claim-arbitration state machine.
//!
//! Five operations, each an all-or-nothing transaction:
//!
//! 1. `create_contract` — escrow a deposit behind a named agreement
//! 2. `close_contract`  — delete a claim-free contract, refunding what's left
//! 3. `create_claim`    — file a dispute, posting a security deposit
//! 4. `rule_claim`      — arbitrator upholds or rejects, splitting funds
//! 5. `close_claim`     — claimer withdraws a lapsed claim's deposit
//!
//! Every check runs before any mutation. Funds movements for an operation
//! are staged as [`TransferIntent`]s and committed through one
//! [`FundsGateway::transfer_batch`] call; the store writes that follow
//! cannot fail, so an operation either happens in full or not at all.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use openescrow_types::{
    Claim, ClaimName, Contract, ContractName, EscrowConfig, EscrowError, IdentityId, Money, Result,
};

use crate::clock::Clock;
use crate::fees;
use crate::gateway::{FundsGateway, TransferIntent};
use crate::oracle::AuthorizationOracle;
use crate::store::{ClaimStore, ContractStore, MemoryClaimStore, MemoryContractStore};

/// The escrow ledger and claim-arbitration state machine.
///
/// The engine owns its stores and clock; the authorization oracle and
/// funds gateway are passed per call because they model the *current*
/// call's context. All operations take `&mut self`, so one engine value
/// processes one operation at a time to completion — callers that share
/// an engine across threads wrap it in a mutex, which preserves the
/// per-operation atomicity the design requires.
pub struct EscrowEngine {
    contracts: Box<dyn ContractStore>,
    claims: Box<dyn ClaimStore>,
    clock: Box<dyn Clock>,
    config: EscrowConfig,
}

fn invalid(reason: impl Into<String>) -> EscrowError {
    EscrowError::InvalidArgument {
        reason: reason.into(),
    }
}

impl EscrowEngine {
    #[must_use]
    pub fn new(
        contracts: Box<dyn ContractStore>,
        claims: Box<dyn ClaimStore>,
        clock: Box<dyn Clock>,
        config: EscrowConfig,
    ) -> Self {
        Self {
            contracts,
            claims,
            clock,
            config,
        }
    }

    /// Engine over in-memory stores and the system clock.
    #[must_use]
    pub fn in_memory(config: EscrowConfig) -> Self {
        Self::new(
            Box::new(MemoryContractStore::new()),
            Box::new(MemoryClaimStore::new()),
            Box::new(crate::clock::SystemClock),
            config,
        )
    }

    #[must_use]
    pub fn config(&self) -> &EscrowConfig {
        &self.config
    }

    /// Read-only projection of a contract record.
    #[must_use]
    pub fn contract(&self, name: &ContractName) -> Option<Contract> {
        self.contracts.get(name)
    }

    /// Read-only projection of a claim record.
    #[must_use]
    pub fn claim(&self, name: &ClaimName) -> Option<Claim> {
        self.claims.get(name)
    }

    #[must_use]
    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    #[must_use]
    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    /// Create a contract: escrow `deposit` from `creator` behind `name`.
    ///
    /// # Errors
    /// - `UnauthorizedCaller` if the call is not authorized by `creator`
    /// - `DuplicateKey` if `name` is taken
    /// - `InvalidArgument` for an empty name or agreement text, a
    ///   non-positive or wrongly-denominated deposit, an expiration not
    ///   strictly in the future, an unknown arbitrator, or an arbitrator
    ///   equal to the creator
    /// - `TransferFailed` if the deposit cannot be escrowed
    #[allow(clippy::too_many_arguments)]
    pub fn create_contract(
        &mut self,
        oracle: &dyn AuthorizationOracle,
        gateway: &mut dyn FundsGateway,
        creator: IdentityId,
        name: ContractName,
        deposit: Money,
        ricardian_text: String,
        expiration: DateTime<Utc>,
        arbitrator: IdentityId,
    ) -> Result<()> {
        oracle.require_authorization(&creator)?;

        if name.is_empty() {
            return Err(invalid("contract name must not be empty"));
        }
        if self.contracts.contains(&name) {
            return Err(EscrowError::DuplicateKey {
                name: name.to_string(),
            });
        }
        if !deposit.is_positive() {
            return Err(invalid("deposit must be greater than zero"));
        }
        if deposit.currency != self.config.settlement_currency {
            return Err(invalid(format!(
                "deposit must be denominated in the settlement currency {}",
                self.config.settlement_currency
            )));
        }
        if ricardian_text.is_empty() {
            return Err(invalid("ricardian text must not be empty"));
        }
        if expiration <= self.clock.now() {
            return Err(invalid("expiration must be after the current time"));
        }
        if !gateway.identity_exists(&arbitrator) {
            return Err(invalid(format!("arbitrator {arbitrator} is not a known identity")));
        }
        if arbitrator == creator {
            return Err(invalid("arbitrator must not be the contract creator"));
        }

        gateway.transfer(
            &creator,
            &self.config.escrow_identity,
            &deposit,
            &format!("security deposit for contract {name}"),
        )?;

        tracing::info!(
            contract = %name,
            creator = %creator,
            deposit = %deposit,
            arbitrator = %arbitrator,
            "contract created"
        );

        self.contracts.insert(Contract {
            name,
            creator,
            deposit,
            ricardian_text,
            expiration,
            arbitrator,
            active_claims: 0,
        })
    }

    /// Close a contract, refunding any remaining deposit to its creator.
    ///
    /// A contract with a zero deposit can always be closed early (nothing
    /// left to protect); one still holding funds stays locked until its
    /// expiration so potential claimants keep their window.
    ///
    /// # Errors
    /// - `NotFound` if the contract does not exist
    /// - `UnauthorizedCaller` if the call is not authorized by the creator
    /// - `PreconditionFailed` if claims are open against it, or it is
    ///   unexpired and still funded
    /// - `TransferFailed` if the refund cannot be executed
    pub fn close_contract(
        &mut self,
        oracle: &dyn AuthorizationOracle,
        gateway: &mut dyn FundsGateway,
        name: &ContractName,
    ) -> Result<()> {
        let contract = self.contracts.get(name).ok_or_else(|| EscrowError::NotFound {
            name: name.to_string(),
        })?;
        oracle.require_authorization(&contract.creator)?;

        if contract.active_claims > 0 {
            return Err(EscrowError::PreconditionFailed {
                reason: format!(
                    "contract {name} has {} active claims",
                    contract.active_claims
                ),
            });
        }
        if !contract.is_expired(self.clock.now()) && !contract.deposit.is_zero() {
            return Err(EscrowError::PreconditionFailed {
                reason: format!("contract {name} is not expired and still holds a deposit"),
            });
        }

        if !contract.deposit.is_zero() {
            gateway.transfer(
                &self.config.escrow_identity,
                &contract.creator,
                &contract.deposit,
                &format!("close contract {name}"),
            )?;
        }
        self.contracts.remove(name);

        tracing::info!(contract = %name, refunded = %contract.deposit, "contract closed");
        Ok(())
    }

    /// File a claim against a contract's deposit. The claimer posts a
    /// security deposit of one tenth of the claimed amount, settled in
    /// the engine's settlement currency.
    ///
    /// # Errors
    /// - `UnauthorizedCaller` if the call is not authorized by `claimer`
    /// - `NotFound` if the contract does not exist
    /// - `DuplicateKey` if `claim_name` is taken
    /// - `PreconditionFailed` if the contract holds no funds
    /// - `InvalidArgument` for an empty name/details/language, a
    ///   non-positive or wrongly-denominated amount, or an amount too
    ///   small to quantize into a positive deposit and fee
    /// - `TransferFailed` if the security deposit cannot be escrowed
    #[allow(clippy::too_many_arguments)]
    pub fn create_claim(
        &mut self,
        oracle: &dyn AuthorizationOracle,
        gateway: &mut dyn FundsGateway,
        claimer: IdentityId,
        contract_name: ContractName,
        claim_name: ClaimName,
        amount: Money,
        details: String,
        language: String,
    ) -> Result<()> {
        oracle.require_authorization(&claimer)?;

        let mut contract =
            self.contracts
                .get(&contract_name)
                .ok_or_else(|| EscrowError::NotFound {
                    name: contract_name.to_string(),
                })?;

        if claim_name.is_empty() {
            return Err(invalid("claim name must not be empty"));
        }
        if self.claims.contains(&claim_name) {
            return Err(EscrowError::DuplicateKey {
                name: claim_name.to_string(),
            });
        }
        if !contract.deposit.is_positive() {
            return Err(EscrowError::PreconditionFailed {
                reason: format!("contract {contract_name} holds no funds"),
            });
        }
        if details.is_empty() {
            return Err(invalid("claim details must not be empty"));
        }
        if language.is_empty() {
            return Err(invalid("claim details language must not be empty"));
        }
        if !amount.is_positive() {
            return Err(invalid("claim amount must be greater than zero"));
        }
        if amount.currency != contract.deposit.currency {
            return Err(invalid(format!(
                "claim must be denominated in the contract's deposit currency {}",
                contract.deposit.currency
            )));
        }

        let security_deposit = fees::security_deposit(&amount, &self.config.settlement_currency)?;
        let (fee_portion, _) = fees::split_arbitrator_fee(&security_deposit)?;
        if !security_deposit.is_positive() || !fee_portion.is_positive() {
            return Err(invalid(
                "amount too small to fund a security deposit and arbitrator fee",
            ));
        }

        gateway.transfer(
            &claimer,
            &self.config.escrow_identity,
            &security_deposit,
            &format!("deposit for claim {claim_name}"),
        )?;

        contract.active_claims += 1;
        self.contracts.update(contract)?;

        let expiration = self.clock.now() + self.config.claim_lifetime();
        tracing::info!(
            claim = %claim_name,
            contract = %contract_name,
            claimer = %claimer,
            amount = %amount,
            security_deposit = %security_deposit,
            "claim filed"
        );
        self.claims.insert(Claim {
            name: claim_name,
            claimer,
            contract_name,
            amount,
            details,
            language,
            expiration,
        })
    }

    /// Rule on a claim as the contract's arbitrator.
    ///
    /// The claimer's security deposit is recomputed from the stored claim
    /// amount. The arbitrator is paid half of it win or lose. If the
    /// claim is upheld, the claimer receives the net deposit plus the
    /// claimed amount, capped at whatever remains of the contract's
    /// deposit; if rejected, the net deposit compensates the creator.
    ///
    /// `details` documents the ruling rationale; it is emitted on the
    /// ruling event and not persisted by this core.
    ///
    /// # Errors
    /// - `NotFound` if the claim, or its contract, does not exist
    /// - `UnauthorizedCaller` if the call is not authorized by the
    ///   contract's arbitrator
    /// - `PreconditionFailed` if the claim has expired or the contract
    ///   holds no funds
    /// - `TransferFailed` if the payouts cannot be executed
    pub fn rule_claim(
        &mut self,
        oracle: &dyn AuthorizationOracle,
        gateway: &mut dyn FundsGateway,
        claim_name: &ClaimName,
        authorize: bool,
        details: &str,
    ) -> Result<()> {
        let claim = self.claims.get(claim_name).ok_or_else(|| EscrowError::NotFound {
            name: claim_name.to_string(),
        })?;
        let mut contract =
            self.contracts
                .get(&claim.contract_name)
                .ok_or_else(|| EscrowError::NotFound {
                    name: claim.contract_name.to_string(),
                })?;
        oracle.require_authorization(&contract.arbitrator)?;

        if claim.is_expired(self.clock.now()) {
            return Err(EscrowError::PreconditionFailed {
                reason: format!("claim {claim_name} has expired"),
            });
        }
        if !contract.deposit.is_positive() {
            return Err(EscrowError::PreconditionFailed {
                reason: format!("contract {} holds no funds to rule against", contract.name),
            });
        }

        let security_deposit =
            fees::security_deposit(&claim.amount, &self.config.settlement_currency)?;
        let (arbitrator_fee, net_deposit) = fees::split_arbitrator_fee(&security_deposit)?;

        let mut batch = vec![TransferIntent::new(
            self.config.escrow_identity.clone(),
            contract.arbitrator.clone(),
            arbitrator_fee.clone(),
            format!("fee for claim {claim_name}"),
        )];

        if authorize {
            let (awarded, remaining) =
                if claim.amount.try_cmp(&contract.deposit)? == Ordering::Greater {
                    // Claim exceeds what's left: the claimer takes the
                    // remainder and the contract is drained.
                    (
                        contract.deposit.clone(),
                        Money::zero(contract.deposit.currency.clone()),
                    )
                } else {
                    (
                        claim.amount.clone(),
                        contract.deposit.checked_sub(&claim.amount)?,
                    )
                };
            let payout = net_deposit.checked_add(&awarded)?;
            contract.deposit = remaining;
            batch.push(TransferIntent::new(
                self.config.escrow_identity.clone(),
                claim.claimer.clone(),
                payout,
                format!("approved claim {claim_name}"),
            ));
        } else {
            batch.push(TransferIntent::new(
                self.config.escrow_identity.clone(),
                contract.creator.clone(),
                net_deposit,
                format!("compensation for rejected claim {claim_name}"),
            ));
        }

        gateway.transfer_batch(&batch)?;

        self.claims.remove(claim_name);
        contract.active_claims = contract.active_claims.saturating_sub(1);
        self.contracts.update(contract)?;

        tracing::info!(
            claim = %claim_name,
            authorize,
            arbitrator_fee = %arbitrator_fee,
            ruling_details = details,
            "claim ruled"
        );
        Ok(())
    }

    /// Withdraw a lapsed claim. The claimer's full security deposit is
    /// refunded — no arbitrator fee is taken on a claim that was never
    /// ruled.
    ///
    /// # Errors
    /// - `NotFound` if the claim, or its contract, does not exist
    /// - `UnauthorizedCaller` if the call is not authorized by the
    ///   claimer
    /// - `PreconditionFailed` if the claim has not expired while the
    ///   contract still holds funds
    /// - `TransferFailed` if the refund cannot be executed
    pub fn close_claim(
        &mut self,
        oracle: &dyn AuthorizationOracle,
        gateway: &mut dyn FundsGateway,
        claim_name: &ClaimName,
    ) -> Result<()> {
        let claim = self.claims.get(claim_name).ok_or_else(|| EscrowError::NotFound {
            name: claim_name.to_string(),
        })?;
        let mut contract =
            self.contracts
                .get(&claim.contract_name)
                .ok_or_else(|| EscrowError::NotFound {
                    name: claim.contract_name.to_string(),
                })?;
        oracle.require_authorization(&claim.claimer)?;

        if !claim.is_expired(self.clock.now()) && !contract.deposit.is_zero() {
            return Err(EscrowError::PreconditionFailed {
                reason: format!(
                    "contract {} still holds funds and claim {claim_name} has not expired",
                    contract.name
                ),
            });
        }

        let refund = fees::security_deposit(&claim.amount, &self.config.settlement_currency)?;
        gateway.transfer(
            &self.config.escrow_identity,
            &claim.claimer,
            &refund,
            &format!("closed claim {claim_name}"),
        )?;

        self.claims.remove(claim_name);
        contract.active_claims = contract.active_claims.saturating_sub(1);
        self.contracts.update(contract)?;

        tracing::info!(claim = %claim_name, refund = %refund, "claim lapsed and closed");
        Ok(())
    }
}
