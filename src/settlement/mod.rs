//! Greedy debt netting: turning a balance sheet into pairwise transfers.

pub mod greedy;
pub mod plan;
pub mod summary;
