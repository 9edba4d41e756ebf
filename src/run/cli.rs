use anyhow::Result;
use std::path::Path;

use crate::classify::Classifier;
use crate::import::StatementImporter;
use crate::models::Transaction;
use crate::store::CategoryStore;
use crate::summary;
use crate::ui::util::format_aed;

pub(crate) fn as_cli(args: &[String], store: &mut CategoryStore) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], store),
        "payments" => cli_payments(&args[2..], store),
        "categories" => cli_categories(store),
        "add-category" => cli_add_category(&args[2..], store),
        "add-keyword" => cli_add_keyword(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("findash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Findash — bank-statement dashboard for the terminal");
    println!();
    println!("Usage: findash [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Launch interactive dashboard");
    println!("  summary <file.csv>              Print expenses by category");
    println!("  payments <file.csv>             Print the payments total and rows");
    println!("  categories                      List categories and their keywords");
    println!("  add-category <name>             Create a new category");
    println!("  add-keyword <category> <word>   Teach a keyword to a category");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
}

/// Shared load path for the file-based commands: parse, classify against the
/// current store, split into expense and payment views.
fn load_statement(
    args: &[String],
    store: &CategoryStore,
) -> Result<(Vec<Transaction>, Vec<Transaction>)> {
    let Some(file_path) = args.first() else {
        anyhow::bail!("Usage: findash summary|payments <file.csv>");
    };
    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }

    let mut transactions = StatementImporter::load(path)?;
    Classifier::new(store).classify_batch(&mut transactions);
    Ok(summary::split_by_direction(transactions))
}

fn cli_summary(args: &[String], store: &mut CategoryStore) -> Result<()> {
    let (debits, _) = load_statement(args, store)?;
    if debits.is_empty() {
        println!("No debit transactions in this statement");
        return Ok(());
    }

    let totals = summary::category_totals(&debits);
    let grand_total: rust_decimal::Decimal = totals.iter().map(|(_, amt)| *amt).sum();

    println!("Expenses by category ({} transactions):", debits.len());
    for (name, total) in &totals {
        println!("  {name:<24} {:>16}", format_aed(*total));
    }
    println!("  {:<24} {:>16}", "Total", format_aed(grand_total));
    Ok(())
}

fn cli_payments(args: &[String], store: &mut CategoryStore) -> Result<()> {
    let (_, credits) = load_statement(args, store)?;

    println!(
        "Total payments: {}",
        format_aed(summary::total_payments(&credits))
    );
    for txn in &credits {
        let date = txn
            .date
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|| "—".to_string());
        println!("  {date:<12} {:<40} {:>16}", txn.details, format_aed(txn.amount));
    }
    Ok(())
}

fn cli_categories(store: &CategoryStore) -> Result<()> {
    for cat in store.categories() {
        if cat.keywords.is_empty() {
            println!("{cat} (no keywords)");
        } else {
            println!("{cat} ({}): {}", cat.keywords.len(), cat.keywords.join(", "));
        }
    }
    Ok(())
}

fn cli_add_category(args: &[String], store: &mut CategoryStore) -> Result<()> {
    let Some(name) = args.first() else {
        anyhow::bail!("Usage: findash add-category <name>");
    };
    if store.add_category(name)? {
        println!("Added category: {name}");
    } else {
        println!("Category '{name}' already exists");
    }
    Ok(())
}

fn cli_add_keyword(args: &[String], store: &mut CategoryStore) -> Result<()> {
    let (Some(category), Some(keyword)) = (args.first(), args.get(1)) else {
        anyhow::bail!("Usage: findash add-keyword <category> <keyword>");
    };
    if store.add_keyword(category, keyword)? {
        println!("Added keyword '{keyword}' to {category}");
    } else {
        println!("Keyword '{keyword}' already present in {category}");
    }
    Ok(())
}
