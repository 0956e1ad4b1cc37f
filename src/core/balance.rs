use crate::core::expense::Expense;
use crate::core::participant::ParticipantId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tolerance for the conservation check. Equal splits of amounts not
/// divisible by the member count leave repeating-decimal residue far below
/// this threshold.
const DRIFT_TOLERANCE: Decimal = dec!(0.000000001);

/// Net balance of every participant in a group.
///
/// A positive balance means the participant is owed money (net creditor).
/// A negative balance means the participant owes money (net debtor).
///
/// The sheet is derived state: recomputed from scratch on every query and
/// never persisted independently of the expense list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// ParticipantId -> net balance.
    /// Positive = net creditor, Negative = net debtor.
    balances: HashMap<ParticipantId, Decimal>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate balances from an expense list.
    ///
    /// Every participant starts at zero. For each expense the payer gains
    /// the full amount and each split member loses one equal share; a payer
    /// who is also a split member nets out to receiving only the others'
    /// shares.
    ///
    /// Precondition: every expense has a non-empty split set and references
    /// only listed participants. [`Group`](crate::core::group::Group)
    /// enforces this at its boundary.
    pub fn from_expenses(participants: &[ParticipantId], expenses: &[Expense]) -> Self {
        let mut balances: HashMap<ParticipantId, Decimal> = participants
            .iter()
            .map(|p| (p.clone(), Decimal::ZERO))
            .collect();

        for expense in expenses {
            let share = expense.share();
            *balances
                .entry(expense.paid_by().clone())
                .or_insert(Decimal::ZERO) += expense.amount();
            for member in expense.split_among() {
                *balances.entry(member.clone()).or_insert(Decimal::ZERO) -= share;
            }
        }

        Self { balances }
    }

    /// Get the net balance of a participant. Unknown participants read as zero.
    pub fn balance(&self, participant: &ParticipantId) -> Decimal {
        self.balances
            .get(participant)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// All balances, including settled (zero) participants.
    pub fn all_balances(&self) -> &HashMap<ParticipantId, Decimal> {
        &self.balances
    }

    /// Number of participants on the sheet.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Verify conservation of money: all balances sum to (nearly) zero.
    pub fn is_conserved(&self) -> bool {
        let sum: Decimal = self.balances.values().sum();
        sum.abs() <= DRIFT_TOLERANCE
    }

    /// Total amount owed to creditors (= total owed by debtors).
    /// This is the amount that actually has to change hands.
    pub fn total_outstanding(&self) -> Decimal {
        self.balances
            .values()
            .filter(|v| **v > Decimal::ZERO)
            .sum()
    }

    /// Participants owed more than `epsilon`, ordered by balance descending;
    /// ties break lexicographically by id so the order is reproducible.
    pub fn creditors(&self, epsilon: Decimal) -> Vec<(ParticipantId, Decimal)> {
        let mut creditors: Vec<(ParticipantId, Decimal)> = self
            .balances
            .iter()
            .filter(|(_, amount)| **amount > epsilon)
            .map(|(p, amount)| (p.clone(), *amount))
            .collect();
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        creditors
    }

    /// Participants owing more than `epsilon`, ordered by debt magnitude
    /// descending with the same lexicographic tie-break. Amounts are
    /// returned as positive magnitudes.
    pub fn debtors(&self, epsilon: Decimal) -> Vec<(ParticipantId, Decimal)> {
        let mut debtors: Vec<(ParticipantId, Decimal)> = self
            .balances
            .iter()
            .filter(|(_, amount)| **amount < -epsilon)
            .map(|(p, amount)| (p.clone(), amount.abs()))
            .collect();
        debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        debtors
    }

    /// Whether every participant is within `epsilon` of zero.
    pub fn is_settled(&self, epsilon: Decimal) -> bool {
        self.balances.values().all(|v| v.abs() <= epsilon)
    }

    /// Apply a payment: `from` pays `to`, moving both balances toward zero.
    /// Used to verify that a settlement plan actually closes out the sheet.
    pub fn apply_payment(&mut self, from: &ParticipantId, to: &ParticipantId, amount: Decimal) {
        *self.balances.entry(from.clone()).or_insert(Decimal::ZERO) += amount;
        *self.balances.entry(to.clone()).or_insert(Decimal::ZERO) -= amount;
    }
}
