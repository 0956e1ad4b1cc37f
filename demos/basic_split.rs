//! Basic balance and settlement example.
//!
//! Demonstrates how the engine turns a handful of shared expenses into
//! net balances and a short list of transfers.

use rust_decimal_macros::dec;
use split_engine::core::expense::Expense;
use split_engine::core::group::Group;
use split_engine::core::participant::ParticipantId;
use split_engine::settlement::greedy::SettlementEngine;
use split_engine::settlement::summary::SettlementSummary;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║   split-engine: Basic Split Example      ║");
    println!("╚══════════════════════════════════════════╝\n");

    // --- Scenario 1: One expense, two people ---
    println!("━━━ Scenario 1: Dinner for Two ━━━\n");

    let alice = ParticipantId::new("alice");
    let bob = ParticipantId::new("bob");

    let mut group = Group::new("dinner", [alice.clone(), bob.clone()]).unwrap();
    group
        .add_expense(
            Expense::new(dec!(100), alice.clone(), [alice.clone(), bob.clone()])
                .with_description("dinner"),
        )
        .unwrap();

    let sheet = group.balances();
    println!("alice is owed: {}", sheet.balance(&alice));
    println!("bob owes:      {}", sheet.balance(&bob).abs());

    let plan = SettlementEngine::settle(&sheet);
    println!("\n{}", plan);

    // --- Scenario 2: Weekend trip, four people ---
    println!("━━━ Scenario 2: Weekend Trip (4 people) ━━━\n");

    let carol = ParticipantId::new("carol");
    let dave = ParticipantId::new("dave");
    let roster = [alice.clone(), bob.clone(), carol.clone(), dave.clone()];

    let mut group = Group::new("weekend", roster.clone()).unwrap();
    group
        .add_expense(Expense::new(dec!(400), alice.clone(), roster.clone()).with_description("cabin"))
        .unwrap();
    group
        .add_expense(Expense::new(dec!(120), bob.clone(), roster.clone()).with_description("food"))
        .unwrap();
    group
        .add_expense(
            Expense::new(dec!(60), carol.clone(), [carol.clone(), dave.clone()])
                .with_description("fuel"),
        )
        .unwrap();

    let sheet = group.balances();

    println!("━━━ Net Balances ━━━\n");
    let mut roster = roster.to_vec();
    roster.sort();
    for participant in &roster {
        let balance = sheet.balance(participant);
        let status = if balance > dec!(0) {
            "CREDITOR"
        } else if balance < dec!(0) {
            "DEBTOR"
        } else {
            "SETTLED"
        };
        println!(
            "  {:<10} {:>10}  [{}]",
            participant.to_string(),
            balance.round_dp(2).to_string(),
            status
        );
    }

    let plan = SettlementEngine::settle(&sheet);
    println!("\n{}", plan);

    let summary = SettlementSummary::from_plan(&plan);
    println!("{}", summary);
}
