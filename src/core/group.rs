use crate::core::balance::BalanceSheet;
use crate::core::expense::{Expense, InvalidExpenseError};
use crate::core::participant::ParticipantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors arising from group construction and membership changes.
#[derive(Debug, Error)]
pub enum GroupError {
    #[error("a group needs at least two participants, got {count}")]
    TooFewParticipants { count: usize },
    #[error("participant {id} is already a member of the group")]
    DuplicateParticipant { id: ParticipantId },
    #[error(transparent)]
    InvalidExpense(#[from] InvalidExpenseError),
}

/// A named collection of participants and the expenses they share.
///
/// The group is the validation boundary: every expense is checked against
/// the roster before it is accepted, so the balance and settlement
/// computations downstream can assume well-formed input. Groups serialize
/// to JSON for persistence.
///
/// # Examples
///
/// ```
/// use split_engine::core::group::Group;
/// use split_engine::core::expense::Expense;
/// use split_engine::core::participant::ParticipantId;
/// use rust_decimal_macros::dec;
///
/// let mut group = Group::new(
///     "ski trip",
///     [ParticipantId::new("alice"), ParticipantId::new("bob")],
/// )
/// .unwrap();
///
/// group
///     .add_expense(Expense::new(
///         dec!(100),
///         ParticipantId::new("alice"),
///         [ParticipantId::new("alice"), ParticipantId::new("bob")],
///     ))
///     .unwrap();
///
/// assert_eq!(group.gross_total(), dec!(100));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    name: String,
    /// Ordered roster; uniqueness enforced on construction and insertion.
    participants: Vec<ParticipantId>,
    /// Expenses in entry order.
    expenses: Vec<Expense>,
}

impl Group {
    /// Create a new group with the given roster.
    ///
    /// Requires at least two unique participants.
    pub fn new(
        name: impl Into<String>,
        participants: impl IntoIterator<Item = ParticipantId>,
    ) -> Result<Self, GroupError> {
        let participants: Vec<ParticipantId> = participants.into_iter().collect();

        let mut seen = HashSet::new();
        for p in &participants {
            if !seen.insert(p.clone()) {
                return Err(GroupError::DuplicateParticipant { id: p.clone() });
            }
        }
        if participants.len() < 2 {
            return Err(GroupError::TooFewParticipants {
                count: participants.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            participants,
            expenses: Vec::new(),
        })
    }

    /// Add a participant to the roster.
    pub fn add_participant(&mut self, id: ParticipantId) -> Result<(), GroupError> {
        if self.is_member(&id) {
            return Err(GroupError::DuplicateParticipant { id });
        }
        self.participants.push(id);
        Ok(())
    }

    /// Whether the given participant belongs to this group.
    pub fn is_member(&self, id: &ParticipantId) -> bool {
        self.participants.iter().any(|p| p == id)
    }

    /// Check an expense against this group without adding it.
    ///
    /// Rejects non-positive amounts, empty or duplicated split sets, and
    /// references to participants outside the roster.
    pub fn validate_expense(&self, expense: &Expense) -> Result<(), InvalidExpenseError> {
        if expense.amount() <= Decimal::ZERO {
            return Err(InvalidExpenseError::NonPositiveAmount {
                amount: expense.amount(),
            });
        }
        if expense.split_among().is_empty() {
            return Err(InvalidExpenseError::EmptySplit);
        }
        if !self.is_member(expense.paid_by()) {
            return Err(InvalidExpenseError::UnknownParticipant {
                id: expense.paid_by().clone(),
            });
        }
        let mut seen = HashSet::new();
        for member in expense.split_among() {
            if !self.is_member(member) {
                return Err(InvalidExpenseError::UnknownParticipant {
                    id: member.clone(),
                });
            }
            if !seen.insert(member.clone()) {
                return Err(InvalidExpenseError::DuplicateSplitMember {
                    id: member.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate and record an expense.
    pub fn add_expense(&mut self, expense: Expense) -> Result<(), InvalidExpenseError> {
        self.validate_expense(&expense)?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Re-check the whole group: roster size, roster uniqueness, and every
    /// recorded expense.
    ///
    /// Deserialized groups bypass `new`/`add_expense`, so callers loading
    /// JSON from external storage run this before computing anything.
    pub fn validate(&self) -> Result<(), GroupError> {
        let mut seen = HashSet::new();
        for p in &self.participants {
            if !seen.insert(p.clone()) {
                return Err(GroupError::DuplicateParticipant { id: p.clone() });
            }
        }
        if self.participants.len() < 2 {
            return Err(GroupError::TooFewParticipants {
                count: self.participants.len(),
            });
        }
        for expense in &self.expenses {
            self.validate_expense(expense)?;
        }
        Ok(())
    }

    // --- Accessors ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Total gross value of all recorded expenses.
    pub fn gross_total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount()).sum()
    }

    /// Compute every participant's net balance from the recorded expenses.
    ///
    /// This is the validated entry point: all expenses passed the boundary
    /// checks, so the accumulation preconditions hold.
    pub fn balances(&self) -> BalanceSheet {
        BalanceSheet::from_expenses(&self.participants, &self.expenses)
    }
}
