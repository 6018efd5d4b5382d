use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use receipt_points::logging::init_logger;
use receipt_points::{Receipt, ReceiptValidator, ScoringEngine, VERSION};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    init_logger(verbose, false);

    let positional: Vec<&str> = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|a| !a.starts_with('-'))
        .collect();

    match positional.as_slice() {
        ["score", path] => run_score(Path::new(path)),
        _ => {
            print_usage();
            if args.iter().any(|a| a == "-h" || a == "--help") {
                Ok(())
            } else {
                bail!("expected: receipt-points score <receipt.json>")
            }
        }
    }
}

fn print_usage() {
    println!("receipt-points {}", VERSION);
    println!();
    println!("USAGE:");
    println!("    receipt-points score <receipt.json> [--verbose]");
    println!();
    println!("Scores a receipt file offline and prints each rule's contribution.");
}

fn run_score(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {:?}", path))?;
    let receipt: Receipt = serde_json::from_str(&content)
        .context("Failed to parse receipt JSON")?;

    let valid = match ReceiptValidator::new().validate(receipt) {
        Ok(valid) => valid,
        Err(errors) => {
            eprintln!("❌ The receipt is invalid:");
            for error in &errors {
                eprintln!("   - {}", error);
            }
            bail!("{} validation error(s)", errors.len());
        }
    };

    let breakdown = ScoringEngine::new().breakdown(&valid);

    println!("🧾 {}", valid.receipt().retailer);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for contribution in &breakdown.contributions {
        println!(
            "{:>5}  {:<18} {}",
            contribution.points,
            contribution.rule.id(),
            contribution.rule.description()
        );
    }
    for failure in &breakdown.parse_failures {
        println!("   ⚠️  {} (scored as 0)", failure);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:>5}  total", breakdown.total());

    Ok(())
}
