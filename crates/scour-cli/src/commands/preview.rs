//! Preview command - show what cleaning would change without writing.

use colored::Colorize;
use scour::{CleanRecord, Scour};

use super::clean::print_summary;
use super::config_from;
use crate::cli::PreviewArgs;

pub fn run(args: PreviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let scour = Scour::with_config(config_from(&args.input_options));
    let result = scour.clean(&args.input)?;
    let shown = &result.records[..args.rows.min(result.records.len())];

    if args.json {
        let preview = serde_json::json!({
            "source": result.source,
            "summary": result.summary,
            "stages": result.report.changes,
            "rows": shown,
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Preview of".cyan().bold(),
        result.source.file.white()
    );
    println!();

    println!("{}", "Stages:".yellow().bold());
    for change in &result.report.changes {
        let count = if change.rows_removed > 0 {
            format!("-{} rows", change.rows_removed).red()
        } else {
            format!("{} values", change.values_changed).blue()
        };
        let fill = change
            .fill_value
            .as_deref()
            .map(|f| format!(" (fill {})", f))
            .unwrap_or_default();
        println!(
            "  {:<14} {:>12}  {}{}",
            change.stage.white().bold(),
            count,
            change.description,
            fill.dimmed()
        );
    }

    print_summary(&result.summary);
    println!();

    println!(
        "{} {} of {}",
        "Rows:".yellow().bold(),
        shown.len(),
        result.records.len()
    );
    println!("  {}", CleanRecord::headers().join(" | ").dimmed());
    for record in shown {
        println!("  {}", record.to_row().join(" | "));
    }

    Ok(())
}
