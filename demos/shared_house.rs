//! Shared house example with persistence.
//!
//! A month of household expenses: everyone pays for something, balances
//! mostly cancel, and the group is saved to and reloaded from a store
//! before settling.

use rust_decimal_macros::dec;
use split_engine::core::expense::Expense;
use split_engine::core::group::Group;
use split_engine::core::participant::ParticipantId;
use split_engine::settlement::greedy::{SettlementEngine, SETTLEMENT_EPSILON};
use split_engine::store::groups::GroupStore;
use split_engine::store::kv::MemoryStore;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║   split-engine: Shared House Example     ║");
    println!("╚══════════════════════════════════════════╝\n");

    let erin = ParticipantId::new("erin");
    let frank = ParticipantId::new("frank");
    let grace = ParticipantId::new("grace");
    let roster = [erin.clone(), frank.clone(), grace.clone()];

    let mut group = Group::new("house-june", roster.clone()).unwrap();
    group
        .add_expense(Expense::new(dec!(900), erin.clone(), roster.clone()).with_description("rent"))
        .unwrap();
    group
        .add_expense(
            Expense::new(dec!(150), frank.clone(), roster.clone()).with_description("utilities"),
        )
        .unwrap();
    group
        .add_expense(
            Expense::new(dec!(210), grace.clone(), roster.clone()).with_description("groceries"),
        )
        .unwrap();

    // Persist and reload: balances are derived, only expenses are stored.
    let mut store = GroupStore::new(MemoryStore::new());
    store.save(&group).unwrap();
    let group = store.load("house-june").unwrap().unwrap();
    println!(
        "Reloaded '{}' with {} expenses, gross {}\n",
        group.name(),
        group.expense_count(),
        group.gross_total()
    );

    let sheet = group.balances();
    println!("━━━ Net Balances ━━━\n");
    for participant in &roster {
        println!(
            "  {:<8} {:>10}",
            participant.to_string(),
            sheet.balance(participant).round_dp(2).to_string()
        );
    }

    let plan = SettlementEngine::settle(&sheet);
    println!("\n{}", plan);

    assert!(plan.settles(&sheet, SETTLEMENT_EPSILON));
    println!("Plan verified: all balances settle to zero.");
}
