use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use split_engine::core::expense::Expense;
use split_engine::core::group::Group;
use split_engine::core::participant::ParticipantId;
use split_engine::settlement::greedy::{SettlementEngine, SETTLEMENT_EPSILON};
use split_engine::settlement::summary::SettlementSummary;
use split_engine::store::groups::GroupStore;
use split_engine::store::kv::{DirStore, MemoryStore};

fn id(name: &str) -> ParticipantId {
    ParticipantId::new(name)
}

/// Full pipeline test: group → balances → settlement → summary → storage.
#[test]
fn full_pipeline_holiday_scenario() {
    let roster = [id("alice"), id("bob"), id("carol"), id("dave")];
    let mut group = Group::new("holiday", roster.clone()).unwrap();

    group
        .add_expense(
            Expense::new(dec!(400), id("alice"), roster.clone()).with_description("cabin"),
        )
        .unwrap();
    group
        .add_expense(
            Expense::new(dec!(120), id("bob"), roster.clone()).with_description("groceries"),
        )
        .unwrap();
    group
        .add_expense(
            Expense::new(dec!(60), id("carol"), [id("carol"), id("dave")])
                .with_description("fuel"),
        )
        .unwrap();
    group
        .add_expense(Expense::new(dec!(80), id("dave"), roster.clone()).with_description("ferry"))
        .unwrap();

    assert_eq!(group.expense_count(), 4);
    assert_eq!(group.gross_total(), dec!(660));

    // Balances conserve money.
    let sheet = group.balances();
    assert!(sheet.is_conserved());
    let sum: Decimal = roster.iter().map(|p| sheet.balance(p)).sum();
    assert_eq!(sum, Decimal::ZERO);

    // alice: +400 - 150 = +250; bob: +120 - 150 = -30;
    // carol: +60 - 150 - 30 = -120; dave: +80 - 150 - 30 = -100.
    assert_eq!(sheet.balance(&id("alice")), dec!(250));
    assert_eq!(sheet.balance(&id("bob")), dec!(-30));
    assert_eq!(sheet.balance(&id("carol")), dec!(-120));
    assert_eq!(sheet.balance(&id("dave")), dec!(-100));

    // Settlement closes out every balance.
    let plan = SettlementEngine::settle(&sheet);
    assert!(plan.settles(&sheet, SETTLEMENT_EPSILON));
    assert_eq!(plan.len(), 3); // 1 creditor + 3 debtors - 1
    for transfer in plan.transfers() {
        assert!(transfer.amount > Decimal::ZERO);
        assert_ne!(transfer.from, transfer.to);
        assert_eq!(transfer.to, id("alice"));
    }

    // Summary totals match the plan.
    let summary = SettlementSummary::from_plan(&plan);
    assert_eq!(summary.transfer_count, 3);
    assert_eq!(summary.incoming[&id("alice")], dec!(250));
    assert_eq!(summary.total_transferred, dec!(250));

    // Storage round-trip preserves the group; balances are derived again.
    let mut store = GroupStore::new(MemoryStore::new());
    store.save(&group).unwrap();
    let restored = store.load("holiday").unwrap().unwrap();
    assert_eq!(restored.balances(), sheet);
}

/// Single expense, equal two-way split: one transfer of half the amount.
#[test]
fn boundary_single_expense_equal_split() {
    let mut group = Group::new("pair", [id("alice"), id("bob")]).unwrap();
    group
        .add_expense(Expense::new(
            dec!(100),
            id("alice"),
            [id("alice"), id("bob")],
        ))
        .unwrap();

    let sheet = group.balances();
    assert_eq!(sheet.balance(&id("alice")), dec!(50));
    assert_eq!(sheet.balance(&id("bob")), dec!(-50));

    let plan = SettlementEngine::settle(&sheet);
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.transfers()[0].from, id("bob"));
    assert_eq!(plan.transfers()[0].to, id("alice"));
    assert_eq!(plan.transfers()[0].amount, dec!(50));
}

/// Three participants each pay the same three-way expense: nothing to settle.
#[test]
fn boundary_three_way_cycle() {
    let roster = [id("alice"), id("bob"), id("carol")];
    let mut group = Group::new("cycle", roster.clone()).unwrap();
    for payer in &roster {
        group
            .add_expense(Expense::new(dec!(30), payer.clone(), roster.clone()))
            .unwrap();
    }

    let sheet = group.balances();
    for p in &roster {
        assert_eq!(sheet.balance(p), Decimal::ZERO);
    }

    let plan = SettlementEngine::settle(&sheet);
    assert!(plan.is_empty());
}

/// One creditor, two debtors: exactly two transfers.
#[test]
fn boundary_multi_debtor_netting() {
    let roster = [id("alice"), id("bob"), id("carol")];
    let mut group = Group::new("lunch", roster.clone()).unwrap();
    group
        .add_expense(Expense::new(dec!(90), id("alice"), roster.clone()))
        .unwrap();

    let sheet = group.balances();
    assert_eq!(sheet.balance(&id("alice")), dec!(60));
    assert_eq!(sheet.balance(&id("bob")), dec!(-30));
    assert_eq!(sheet.balance(&id("carol")), dec!(-30));

    let plan = SettlementEngine::settle(&sheet);
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.transfers()[0].from, id("bob"));
    assert_eq!(plan.transfers()[0].amount, dec!(30));
    assert_eq!(plan.transfers()[1].from, id("carol"));
    assert_eq!(plan.transfers()[1].amount, dec!(30));
}

/// A group with no expenses settles trivially.
#[test]
fn empty_expense_list_produces_empty_plan() {
    let group = Group::new("new", [id("alice"), id("bob")]).unwrap();
    let sheet = group.balances();
    assert!(sheet.is_settled(SETTLEMENT_EPSILON));

    let plan = SettlementEngine::settle(&sheet);
    assert!(plan.is_empty());
    assert_eq!(plan.outstanding_before(), Decimal::ZERO);
}

/// JSON round-trip for groups, including expense metadata.
#[test]
fn group_json_round_trip() {
    let mut group = Group::new("trip", [id("alice"), id("bob")]).unwrap();
    group
        .add_expense(
            Expense::new(dec!(59.5), id("bob"), [id("alice"), id("bob")])
                .with_description("museum tickets"),
        )
        .unwrap();

    let json = serde_json::to_string_pretty(&group).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["name"], "trip");
    assert_eq!(parsed["expenses"][0]["paid_by"], "bob");
    assert_eq!(parsed["expenses"][0]["amount"], "59.5");

    let restored: Group = serde_json::from_str(&json).unwrap();
    restored.validate().unwrap();
    assert_eq!(restored.balances(), group.balances());
}

/// Settlement plans serialize with their transfers.
#[test]
fn settlement_plan_serializes() {
    let mut group = Group::new("pair", [id("alice"), id("bob")]).unwrap();
    group
        .add_expense(Expense::new(dec!(100), id("alice"), [id("bob")]))
        .unwrap();

    let plan = SettlementEngine::settle(&group.balances());
    let json = serde_json::to_string(&plan).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["transfers"][0]["from"], "bob");
    assert_eq!(parsed["transfers"][0]["amount"], "100");
}

/// Groups persist through a directory-backed store across reopens.
#[test]
fn dir_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let mut group = Group::new("flat", [id("alice"), id("bob")]).unwrap();
    group
        .add_expense(Expense::new(dec!(42), id("alice"), [id("alice"), id("bob")]))
        .unwrap();

    {
        let mut store = GroupStore::new(DirStore::open(dir.path()).unwrap());
        store.save(&group).unwrap();
    }

    let store = GroupStore::new(DirStore::open(dir.path()).unwrap());
    assert_eq!(store.list().unwrap(), vec!["flat"]);
    let restored = store.load("flat").unwrap().unwrap();
    assert_eq!(restored.gross_total(), dec!(42));
    assert_eq!(restored.balances(), group.balances());
}
