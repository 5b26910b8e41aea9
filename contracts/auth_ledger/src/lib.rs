//! Multi-party authorization ledger.
//!
//! A fixed committee of owners submits outbound calls (target, value,
//! payload), approves or revokes them, and executes a call once the number of
//! distinct approvals reaches the threshold set at deployment. Every
//! transaction gets exactly one execution attempt.
#![no_std]

mod errors;
mod events;
mod multisig;
mod target;
mod types;

pub use crate::errors::LedgerError;
pub use crate::events::{Approved, CallFailed, Deposited, Executed, Revoked, Submitted};
pub use crate::multisig::{AuthorizationLedger, AuthorizationLedgerClient};
pub use crate::target::{CallableTarget, CallableTargetClient};
pub use crate::types::{ExecutionOutcome, ExecutionStatus, Transaction};

#[cfg(test)]
mod test_targets;
