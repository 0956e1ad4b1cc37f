use crate::core::balance::BalanceSheet;
use crate::core::participant::ParticipantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single settlement instruction: `from` pays `to` exactly `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Decimal,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}: {}", self.from, self.to, self.amount.round_dp(2))
    }
}

/// Result of a settlement computation.
///
/// An ordered list of transfers that, applied in any order, brings every
/// participant's balance to (near) zero, together with totals describing
/// how much money actually moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Transfers in emission order (largest remaining pairs first).
    transfers: Vec<Transfer>,
    /// Total owed to creditors before settling.
    outstanding_before: Decimal,
    /// Sum of all transfer amounts.
    total_transferred: Decimal,
}

impl SettlementPlan {
    pub(crate) fn new(transfers: Vec<Transfer>, outstanding_before: Decimal) -> Self {
        let total_transferred = transfers.iter().map(|t| t.amount).sum();
        Self {
            transfers,
            outstanding_before,
            total_transferred,
        }
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Total owed to creditors before settling.
    pub fn outstanding_before(&self) -> Decimal {
        self.outstanding_before
    }

    /// Sum of all transfer amounts.
    pub fn total_transferred(&self) -> Decimal {
        self.total_transferred
    }

    /// Verify the plan against the sheet it was computed from: applying
    /// every transfer must leave all balances within `epsilon` of zero.
    pub fn settles(&self, sheet: &BalanceSheet, epsilon: Decimal) -> bool {
        let mut sheet = sheet.clone();
        for transfer in &self.transfers {
            sheet.apply_payment(&transfer.from, &transfer.to, transfer.amount);
        }
        sheet.is_settled(epsilon)
    }
}

impl std::fmt::Display for SettlementPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Settlement Plan ===")?;
        writeln!(f, "Outstanding:  {}", self.outstanding_before.round_dp(2))?;
        writeln!(f, "Transferred:  {}", self.total_transferred.round_dp(2))?;
        writeln!(f, "Transfers:    {}", self.transfers.len())?;
        for (i, transfer) in self.transfers.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, transfer)?;
        }
        Ok(())
    }
}
