//! # openescrow-engine
//!
//! The escrow ledger and claim-arbitration state machine.
//!
//! ## Architecture
//!
//! The engine sits between a caller-facing service and two external
//! collaborators it never implements:
//! 1. **AuthorizationOracle**: proves the current call is authorized by an
//!    identity
//! 2. **FundsGateway**: moves value between identities, all-or-nothing per
//!    batch
//! 3. **ContractStore / ClaimStore**: the engine's own keyed record stores
//! 4. **Clock**: time source gating expirations
//! 5. **EscrowEngine**: the five operations, each an atomic transaction
//!
//! ## Operation flow
//!
//! ```text
//! caller → EscrowEngine.op() → oracle.require_authorization()
//!        → validate against stores → gateway.transfer_batch()
//!        → store writes (infallible after validation)
//! ```
//!
//! Every funds movement an operation needs commits in one gateway batch
//! before the stores are touched, so a failure at any point leaves no
//! partial state.

pub mod clock;
pub mod engine;
pub mod fees;
pub mod gateway;
pub mod oracle;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::EscrowEngine;
pub use gateway::{FundsGateway, MemoryFundsGateway, TransferIntent};
pub use oracle::{AuthorizationOracle, StaticOracle};
pub use store::{ClaimStore, ContractStore, MemoryClaimStore, MemoryContractStore};
