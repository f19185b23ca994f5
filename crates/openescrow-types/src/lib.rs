//! # openescrow-types
//!
//! Shared types, errors, and configuration for the **OpenEscrow**
//! arbitration engine.
//!
//! This crate is the leaf dependency of the workspace — the engine crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ContractName`], [`ClaimName`], [`IdentityId`], [`TransferId`]
//! - **Money**: [`Money`], [`Currency`]
//! - **Records**: [`Contract`], [`Claim`]
//! - **Receipts**: [`TransferReceipt`]
//! - **Configuration**: [`EscrowConfig`]
//! - **Errors**: [`EscrowError`] with `ES_ERR_` prefix codes
//! - **Constants**: fee divisors, claim lifetime, settlement defaults

pub mod claim;
pub mod config;
pub mod constants;
pub mod contract;
pub mod error;
pub mod ids;
pub mod money;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use openescrow_types::{Contract, Claim, Money, EscrowError, ...};

pub use claim::*;
pub use config::*;
pub use contract::*;
pub use error::*;
pub use ids::*;
pub use money::*;
pub use receipt::*;

// Constants are accessed via `openescrow_types::constants::FOO`
// (not re-exported to avoid name collisions).
