//! Random group generation.
//!
//! Produces groups with arbitrary expenses to exercise the balance and
//! settlement paths at various sizes.

use crate::core::expense::Expense;
use crate::core::group::Group;
use crate::core::participant::ParticipantId;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random group.
#[derive(Debug, Clone)]
pub struct GroupConfig {
    /// Number of participants; values below 2 are raised to 2.
    pub participant_count: usize,
    /// Number of expenses to generate.
    pub expense_count: usize,
    /// Minimum expense amount in cents.
    pub min_amount_cents: i64,
    /// Maximum expense amount in cents.
    pub max_amount_cents: i64,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            participant_count: 5,
            expense_count: 20,
            min_amount_cents: 100,
            max_amount_cents: 50_000,
        }
    }
}

/// Generate a random group for testing.
///
/// Every expense picks a random payer and a random non-empty subset of the
/// roster to split among, so the result always passes group validation.
pub fn generate_random_group(config: &GroupConfig) -> Group {
    let mut rng = rand::thread_rng();

    let participant_count = config.participant_count.max(2);
    let participants: Vec<ParticipantId> = (0..participant_count)
        .map(|i| ParticipantId::new(format!("participant-{:03}", i)))
        .collect();

    let mut group = Group::new("generated", participants.clone())
        .expect("generated roster is unique and has at least two members");

    for _ in 0..config.expense_count {
        let payer = participants[rng.gen_range(0..participants.len())].clone();

        let split_size = rng.gen_range(1..=participants.len());
        let split: Vec<ParticipantId> = participants
            .choose_multiple(&mut rng, split_size)
            .cloned()
            .collect();

        let cents = rng.gen_range(config.min_amount_cents..=config.max_amount_cents);
        let amount = Decimal::new(cents, 2);

        group
            .add_expense(Expense::new(amount, payer, split))
            .expect("generated expense references only group members");
    }

    group
}
