use crate::core::participant::ParticipantId;
use crate::settlement::plan::SettlementPlan;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated view of a settlement plan: how much each debtor pays out
/// and each creditor receives in total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// Total amount each debtor pays across all their transfers.
    pub outgoing: HashMap<ParticipantId, Decimal>,
    /// Total amount each creditor receives across all their transfers.
    pub incoming: HashMap<ParticipantId, Decimal>,
    /// Sum of all transfer amounts.
    pub total_transferred: Decimal,
    /// Number of transfers in the plan.
    pub transfer_count: usize,
}

impl SettlementSummary {
    /// Aggregate a plan's transfers per participant.
    pub fn from_plan(plan: &SettlementPlan) -> Self {
        let mut outgoing: HashMap<ParticipantId, Decimal> = HashMap::new();
        let mut incoming: HashMap<ParticipantId, Decimal> = HashMap::new();

        for transfer in plan.transfers() {
            *outgoing
                .entry(transfer.from.clone())
                .or_insert(Decimal::ZERO) += transfer.amount;
            *incoming
                .entry(transfer.to.clone())
                .or_insert(Decimal::ZERO) += transfer.amount;
        }

        SettlementSummary {
            outgoing,
            incoming,
            total_transferred: plan.total_transferred(),
            transfer_count: plan.len(),
        }
    }

    /// Participants who pay nothing and receive nothing.
    pub fn is_uninvolved(&self, participant: &ParticipantId) -> bool {
        !self.outgoing.contains_key(participant) && !self.incoming.contains_key(participant)
    }
}

impl std::fmt::Display for SettlementSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Settlement Summary ===")?;
        writeln!(f, "Transfers:   {}", self.transfer_count)?;
        writeln!(f, "Total moved: {}", self.total_transferred.round_dp(2))?;

        let mut payers: Vec<_> = self.outgoing.iter().collect();
        payers.sort_by(|a, b| a.0.cmp(b.0));
        writeln!(f, "\nPays:")?;
        for (participant, amount) in payers {
            writeln!(f, "  {} pays {}", participant, amount.round_dp(2))?;
        }

        let mut receivers: Vec<_> = self.incoming.iter().collect();
        receivers.sort_by(|a, b| a.0.cmp(b.0));
        writeln!(f, "\nReceives:")?;
        for (participant, amount) in receivers {
            writeln!(f, "  {} receives {}", participant, amount.round_dp(2))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::BalanceSheet;
    use crate::core::expense::Expense;
    use crate::settlement::greedy::SettlementEngine;
    use rust_decimal_macros::dec;

    fn ids(names: &[&str]) -> Vec<ParticipantId> {
        names.iter().map(|n| ParticipantId::new(*n)).collect()
    }

    #[test]
    fn test_summary_aggregates_per_participant() {
        // alice +60, bob -30, carol -30 → two transfers into alice.
        let participants = ids(&["alice", "bob", "carol"]);
        let expenses = vec![Expense::new(
            dec!(90),
            ParticipantId::new("alice"),
            participants.clone(),
        )];
        let sheet = BalanceSheet::from_expenses(&participants, &expenses);
        let plan = SettlementEngine::settle(&sheet);

        let summary = SettlementSummary::from_plan(&plan);
        assert_eq!(summary.transfer_count, 2);
        assert_eq!(summary.total_transferred, dec!(60));
        assert_eq!(summary.incoming[&ParticipantId::new("alice")], dec!(60));
        assert_eq!(summary.outgoing[&ParticipantId::new("bob")], dec!(30));
        assert_eq!(summary.outgoing[&ParticipantId::new("carol")], dec!(30));
    }

    #[test]
    fn test_uninvolved_participant() {
        let participants = ids(&["alice", "bob", "carol"]);
        // carol neither pays nor is owed: expense splits only alice/bob.
        let expenses = vec![Expense::new(
            dec!(40),
            ParticipantId::new("alice"),
            ids(&["alice", "bob"]),
        )];
        let sheet = BalanceSheet::from_expenses(&participants, &expenses);
        let plan = SettlementEngine::settle(&sheet);

        let summary = SettlementSummary::from_plan(&plan);
        assert!(summary.is_uninvolved(&ParticipantId::new("carol")));
        assert!(!summary.is_uninvolved(&ParticipantId::new("bob")));
    }

    #[test]
    fn test_empty_plan_summary() {
        let plan = SettlementEngine::settle(&BalanceSheet::new());
        let summary = SettlementSummary::from_plan(&plan);
        assert_eq!(summary.transfer_count, 0);
        assert_eq!(summary.total_transferred, Decimal::ZERO);
        assert!(summary.outgoing.is_empty());
    }
}
