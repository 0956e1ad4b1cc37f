//! # split-engine
//!
//! Expense splitting balance and greedy debt settlement engine.
//!
//! Given a group of participants and a list of shared expenses, this engine
//! computes each participant's net balance and produces a near-minimal
//! ordered list of pairwise transfers that zeroes out all balances.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: participants, expenses, groups, balances
//! - **settlement** — Greedy debt netting, transfer plans, summaries
//! - **store** — JSON key-value persistence for groups
//! - **simulation** — Random group generation for testing

pub mod core;
pub mod settlement;
pub mod simulation;
pub mod store;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::balance::BalanceSheet;
    pub use crate::core::expense::{Expense, InvalidExpenseError};
    pub use crate::core::group::Group;
    pub use crate::core::participant::ParticipantId;
    pub use crate::settlement::greedy::{SettlementEngine, SETTLEMENT_EPSILON};
    pub use crate::settlement::plan::{SettlementPlan, Transfer};
}
