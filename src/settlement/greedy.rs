use crate::core::balance::BalanceSheet;
use crate::settlement::plan::{SettlementPlan, Transfer};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Balances within this distance of zero count as settled. One cent, so
/// residue from equal splits never produces a phantom transfer.
pub const SETTLEMENT_EPSILON: Decimal = dec!(0.01);

/// The settlement engine.
///
/// Turns a balance sheet into a near-minimal ordered list of pairwise
/// transfers using greedy debt netting.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Compute a settlement plan with the default epsilon.
    pub fn settle(sheet: &BalanceSheet) -> SettlementPlan {
        Self::settle_with_epsilon(sheet, SETTLEMENT_EPSILON)
    }

    /// Compute a settlement plan, treating balances within `epsilon` of
    /// zero as already settled.
    ///
    /// # Algorithm
    ///
    /// 1. Partition participants into creditors (owed more than `epsilon`)
    ///    and debtors (owing more than `epsilon`).
    /// 2. Sort both sides by magnitude descending, ties lexicographic by id.
    /// 3. Match the current largest creditor against the current largest
    ///    debtor; the transfer is the smaller of the two remainders.
    /// 4. Advance past either side once its remainder falls to `epsilon`
    ///    or below.
    /// 5. Stop when either side is exhausted. Conservation means both sides
    ///    run out together, modulo residue below `epsilon`.
    ///
    /// Every emitted amount is positive, no transfer is a self-payment, and
    /// the plan holds at most `creditors + debtors - 1` transfers.
    pub fn settle_with_epsilon(sheet: &BalanceSheet, epsilon: Decimal) -> SettlementPlan {
        let mut creditors = sheet.creditors(epsilon);
        let mut debtors = sheet.debtors(epsilon);

        let mut transfers = Vec::new();
        let mut ci = 0;
        let mut di = 0;

        while ci < creditors.len() && di < debtors.len() {
            let credit = creditors[ci].1;
            let debt = debtors[di].1;
            let amount = credit.min(debt);

            transfers.push(Transfer {
                from: debtors[di].0.clone(),
                to: creditors[ci].0.clone(),
                amount,
            });

            creditors[ci].1 -= amount;
            debtors[di].1 -= amount;

            // The matched side zeroes exactly; the other may land inside
            // epsilon and is then considered settled too.
            if creditors[ci].1 <= epsilon {
                ci += 1;
            }
            if debtors[di].1 <= epsilon {
                di += 1;
            }
        }

        log::debug!(
            "settled {} creditors / {} debtors with {} transfers",
            creditors.len(),
            debtors.len(),
            transfers.len()
        );

        SettlementPlan::new(transfers, sheet.total_outstanding())
    }
}
