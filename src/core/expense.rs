use crate::core::participant::ParticipantId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors arising from malformed expense records.
///
/// Detected at the [`Group`](crate::core::group::Group) boundary before any
/// balance accumulation runs; the pure computation functions assume
/// pre-validated input.
#[derive(Debug, Error)]
pub enum InvalidExpenseError {
    #[error("expense amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },
    #[error("expense must be split among at least one participant")]
    EmptySplit,
    #[error("participant {id} appears more than once in the split")]
    DuplicateSplitMember { id: ParticipantId },
    #[error("participant {id} is not a member of the group")]
    UnknownParticipant { id: ParticipantId },
}

/// A shared expense: one participant paid, a set of participants share
/// the cost equally.
///
/// Expenses are immutable once created. The balance engine operates on
/// collections of expenses to compute net positions; `description` and
/// `date` are descriptive metadata the algorithm never reads.
///
/// # Examples
///
/// ```
/// use split_engine::core::expense::Expense;
/// use split_engine::core::participant::ParticipantId;
/// use rust_decimal_macros::dec;
///
/// let dinner = Expense::new(
///     dec!(90),
///     ParticipantId::new("alice"),
///     [ParticipantId::new("alice"), ParticipantId::new("bob")],
/// )
/// .with_description("dinner at the harbor");
///
/// assert_eq!(dinner.amount(), dec!(90));
/// assert_eq!(dinner.split_among().len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for this expense.
    id: Uuid,
    /// The amount paid. Must be positive; validated by `Group::add_expense`.
    amount: Decimal,
    /// The participant who paid the full amount up front.
    paid_by: ParticipantId,
    /// The participants who share the cost equally. The payer may or may
    /// not be among them.
    split_among: Vec<ParticipantId>,
    /// Optional free-form description.
    description: Option<String>,
    /// When the expense occurred.
    date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense.
    ///
    /// No validation happens here — membership and amount checks run when
    /// the expense is added to a group.
    pub fn new(
        amount: Decimal,
        paid_by: ParticipantId,
        split_among: impl IntoIterator<Item = ParticipantId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            paid_by,
            split_among: split_among.into_iter().collect(),
            description: None,
            date: Utc::now(),
        }
    }

    /// Create an expense with a specific ID (useful for testing / determinism).
    pub fn with_id(
        id: Uuid,
        amount: Decimal,
        paid_by: ParticipantId,
        split_among: impl IntoIterator<Item = ParticipantId>,
    ) -> Self {
        Self {
            id,
            amount,
            paid_by,
            split_among: split_among.into_iter().collect(),
            description: None,
            date: Utc::now(),
        }
    }

    /// Set a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the expense date.
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn paid_by(&self) -> &ParticipantId {
        &self.paid_by
    }

    pub fn split_among(&self) -> &[ParticipantId] {
        &self.split_among
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// The equal share each split member owes for this expense.
    ///
    /// Precondition: `split_among` is non-empty. Groups enforce this before
    /// an expense is ever accumulated.
    pub fn share(&self) -> Decimal {
        self.amount / Decimal::from(self.split_among.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_expense() -> Expense {
        Expense::new(
            dec!(120),
            ParticipantId::new("alice"),
            [
                ParticipantId::new("alice"),
                ParticipantId::new("bob"),
                ParticipantId::new("carol"),
            ],
        )
    }

    #[test]
    fn test_expense_creation() {
        let e = sample_expense();
        assert_eq!(e.paid_by().as_str(), "alice");
        assert_eq!(e.amount(), dec!(120));
        assert_eq!(e.split_among().len(), 3);
        assert!(e.description().is_none());
    }

    #[test]
    fn test_expense_share() {
        let e = sample_expense();
        assert_eq!(e.share(), dec!(40));
    }

    #[test]
    fn test_expense_metadata() {
        let e = sample_expense().with_description("groceries");
        assert_eq!(e.description(), Some("groceries"));
    }

    #[test]
    fn test_expense_ids_unique() {
        let a = sample_expense();
        let b = sample_expense();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_expense_with_fixed_id() {
        let id = Uuid::new_v4();
        let e = Expense::with_id(
            id,
            dec!(10),
            ParticipantId::new("alice"),
            [ParticipantId::new("bob")],
        );
        assert_eq!(e.id(), id);
    }
}
