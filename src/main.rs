//! split-engine CLI
//!
//! Compute balances and settlement plans from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Net balances for a group stored as JSON
//! split-engine balances --input group.json
//!
//! # Who pays whom
//! split-engine settle --input group.json
//!
//! # Output as JSON
//! split-engine settle --input group.json --format json
//!
//! # Generate a random group for testing
//! split-engine generate --participants 6 --expenses 25
//! ```

use rust_decimal::Decimal;
use split_engine::core::group::Group;
use split_engine::settlement::greedy::SettlementEngine;
use split_engine::settlement::summary::SettlementSummary;
use split_engine::simulation::random_group::{generate_random_group, GroupConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"split-engine — expense splitting balance and settlement engine

USAGE:
    split-engine <COMMAND> [OPTIONS]

COMMANDS:
    balances    Compute each participant's net balance
    settle      Compute who pays whom to settle the group
    generate    Generate a random group (for testing)
    help        Show this message

OPTIONS (balances, settle):
    --input <FILE>      Path to a JSON group file
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --participants <N>  Number of participants (default: 5)
    --expenses <N>      Number of expenses (default: 20)
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    split-engine balances --input trip.json
    split-engine settle --input trip.json --format json
    split-engine generate --participants 6 --expenses 25 --output test.json"#
    );
}

/// JSON output schema for balances.
#[derive(serde::Serialize)]
struct BalancesOutput {
    group: String,
    gross_total: String,
    outstanding: String,
    conserved: bool,
    balances: Vec<BalanceOutput>,
}

#[derive(serde::Serialize)]
struct BalanceOutput {
    participant: String,
    balance: String,
    status: String,
}

/// JSON output schema for settlement plans.
#[derive(serde::Serialize)]
struct SettleOutput {
    group: String,
    outstanding: String,
    transferred: String,
    transfer_count: usize,
    transfers: Vec<TransferOutput>,
}

#[derive(serde::Serialize)]
struct TransferOutput {
    from: String,
    to: String,
    amount: String,
}

fn load_group(path: &str) -> Group {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let group: Group = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "name": "trip",
  "participants": ["alice", "bob"],
  "expenses": [
    {{
      "id": "6f6cbc0e-54e9-4fb9-9b30-a2f33e5b8c7e",
      "amount": "100",
      "paid_by": "alice",
      "split_among": ["alice", "bob"],
      "description": "hotel",
      "date": "2024-05-01T00:00:00Z"
    }}
  ]
}}"#
        );
        process::exit(1);
    });

    if let Err(e) = group.validate() {
        eprintln!("Invalid group: {}", e);
        process::exit(1);
    }
    group
}

fn parse_io_options(args: &[String]) -> (String, String) {
    let mut input_path = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });
    (path, format)
}

fn cmd_balances(args: &[String]) {
    let (path, format) = parse_io_options(args);
    let group = load_group(&path);
    let sheet = group.balances();

    if format == "json" {
        let mut balances: Vec<BalanceOutput> = sheet
            .all_balances()
            .iter()
            .map(|(participant, amount)| BalanceOutput {
                participant: participant.to_string(),
                balance: amount.round_dp(2).to_string(),
                status: if *amount > Decimal::ZERO {
                    "CREDITOR".to_string()
                } else if *amount < Decimal::ZERO {
                    "DEBTOR".to_string()
                } else {
                    "SETTLED".to_string()
                },
            })
            .collect();
        balances.sort_by(|a, b| a.participant.cmp(&b.participant));

        let output = BalancesOutput {
            group: group.name().to_string(),
            gross_total: group.gross_total().to_string(),
            outstanding: sheet.total_outstanding().round_dp(2).to_string(),
            conserved: sheet.is_conserved(),
            balances,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("Group:       {}", group.name());
        println!("Expenses:    {}", group.expense_count());
        println!("Gross total: {}", group.gross_total());
        println!("Outstanding: {}", sheet.total_outstanding().round_dp(2));
        println!();
        let mut participants = group.participants().to_vec();
        participants.sort();
        for participant in &participants {
            let balance = sheet.balance(participant);
            let status = if balance > Decimal::ZERO {
                "CREDITOR"
            } else if balance < Decimal::ZERO {
                "DEBTOR"
            } else {
                "SETTLED"
            };
            println!(
                "  {:<20} {:>12}  [{}]",
                participant.to_string(),
                balance.round_dp(2).to_string(),
                status
            );
        }
    }
}

fn cmd_settle(args: &[String]) {
    let (path, format) = parse_io_options(args);
    let group = load_group(&path);
    let sheet = group.balances();
    let plan = SettlementEngine::settle(&sheet);

    if format == "json" {
        let output = SettleOutput {
            group: group.name().to_string(),
            outstanding: plan.outstanding_before().round_dp(2).to_string(),
            transferred: plan.total_transferred().round_dp(2).to_string(),
            transfer_count: plan.len(),
            transfers: plan
                .transfers()
                .iter()
                .map(|t| TransferOutput {
                    from: t.from.to_string(),
                    to: t.to.to_string(),
                    amount: t.amount.round_dp(2).to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}", plan);
        let summary = SettlementSummary::from_plan(&plan);
        println!("{}", summary);
    }
}

fn cmd_generate(args: &[String]) {
    let mut participants = 5usize;
    let mut expenses = 20usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--participants" => {
                i += 1;
                participants = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--participants requires a number");
                        process::exit(1);
                    });
            }
            "--expenses" => {
                i += 1;
                expenses = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--expenses requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = GroupConfig {
        participant_count: participants,
        expense_count: expenses,
        ..Default::default()
    };
    let group = generate_random_group(&config);
    let json = serde_json::to_string_pretty(&group).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} expenses across {} participants → {}",
            group.expense_count(),
            group.participants().len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "balances" => cmd_balances(rest),
        "settle" => cmd_settle(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
