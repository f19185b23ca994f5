//! Keyed record stores for contracts and claims.
//!
//! The engine owns its stores through these traits, so a persistent
//! backend can replace the in-memory maps without touching the operation
//! logic, and tests get isolation for free. Within one engine value all
//! access goes through `&mut self`, which is what makes each operation's
//! read-validate-write sequence atomic.

use std::collections::HashMap;

use openescrow_types::{Claim, ClaimName, Contract, ContractName, EscrowError, Result};

/// Durable keyed collection of [`Contract`] records.
pub trait ContractStore: Send {
    fn get(&self, name: &ContractName) -> Option<Contract>;
    fn contains(&self, name: &ContractName) -> bool;
    /// Fails with `DuplicateKey` if a contract with this name exists.
    fn insert(&mut self, contract: Contract) -> Result<()>;
    /// Replace an existing record. Fails with `NotFound` if absent.
    fn update(&mut self, contract: Contract) -> Result<()>;
    fn remove(&mut self, name: &ContractName) -> Option<Contract>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Durable keyed collection of [`Claim`] records.
pub trait ClaimStore: Send {
    fn get(&self, name: &ClaimName) -> Option<Claim>;
    fn contains(&self, name: &ClaimName) -> bool;
    /// Fails with `DuplicateKey` if a claim with this name exists.
    fn insert(&mut self, claim: Claim) -> Result<()>;
    fn remove(&mut self, name: &ClaimName) -> Option<Claim>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory contract store.
#[derive(Debug, Default)]
pub struct MemoryContractStore {
    records: HashMap<ContractName, Contract>,
}

impl MemoryContractStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractStore for MemoryContractStore {
    fn get(&self, name: &ContractName) -> Option<Contract> {
        self.records.get(name).cloned()
    }

    fn contains(&self, name: &ContractName) -> bool {
        self.records.contains_key(name)
    }

    fn insert(&mut self, contract: Contract) -> Result<()> {
        if self.records.contains_key(&contract.name) {
            return Err(EscrowError::DuplicateKey {
                name: contract.name.to_string(),
            });
        }
        self.records.insert(contract.name.clone(), contract);
        Ok(())
    }

    fn update(&mut self, contract: Contract) -> Result<()> {
        if !self.records.contains_key(&contract.name) {
            return Err(EscrowError::NotFound {
                name: contract.name.to_string(),
            });
        }
        self.records.insert(contract.name.clone(), contract);
        Ok(())
    }

    fn remove(&mut self, name: &ContractName) -> Option<Contract> {
        self.records.remove(name)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// In-memory claim store.
#[derive(Debug, Default)]
pub struct MemoryClaimStore {
    records: HashMap<ClaimName, Claim>,
}

impl MemoryClaimStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClaimStore for MemoryClaimStore {
    fn get(&self, name: &ClaimName) -> Option<Claim> {
        self.records.get(name).cloned()
    }

    fn contains(&self, name: &ClaimName) -> bool {
        self.records.contains_key(name)
    }

    fn insert(&mut self, claim: Claim) -> Result<()> {
        if self.records.contains_key(&claim.name) {
            return Err(EscrowError::DuplicateKey {
                name: claim.name.to_string(),
            });
        }
        self.records.insert(claim.name.clone(), claim);
        Ok(())
    }

    fn remove(&mut self, name: &ClaimName) -> Option<Claim> {
        self.records.remove(name)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
