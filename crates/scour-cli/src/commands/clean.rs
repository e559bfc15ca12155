//! Clean command - clean a data file and write the result.

use colored::Colorize;
use scour::{CleanSummary, Scour, write_audit};
use tracing::info;

use super::config_from;
use crate::cli::CleanArgs;

pub fn run(args: CleanArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let scour = Scour::with_config(config_from(&args.input_options));

    if verbose {
        println!(
            "{} {}",
            "Cleaning".cyan().bold(),
            args.input.display().to_string().white()
        );
    }

    let result = scour.clean(&args.input)?;
    scour.write(&result, &args.output)?;
    info!(
        output = %args.output.display(),
        rows = result.summary.rows_written,
        "Wrote cleaned data"
    );

    if let Some(audit_path) = &args.audit {
        write_audit(audit_path, &result)?;
    }

    if verbose {
        print_summary(&result.summary);
        println!(
            "Wrote {}",
            args.output.display().to_string().cyan()
        );
        if let Some(audit_path) = &args.audit {
            println!("Audit {}", audit_path.display().to_string().cyan());
        }
        println!();
    }

    println!("{}", "Messy data cleaned successfully".green().bold());
    Ok(())
}

pub(crate) fn print_summary(summary: &CleanSummary) {
    println!();
    println!("{}", "Summary:".yellow().bold());
    println!("  Rows read:          {}", summary.rows_read.to_string().white());
    println!(
        "  Duplicates removed: {}",
        summary.duplicates_removed.to_string().red()
    );
    println!(
        "  Rows written:       {}",
        summary.rows_written.to_string().green()
    );
    println!(
        "  Values changed:     {}",
        summary.values_changed.to_string().blue()
    );

    if !summary.values_changed_by_column.is_empty() {
        println!();
        println!("{}", "Changes by column:".yellow().bold());
        for (column, count) in &summary.values_changed_by_column {
            println!("  {:<12} {}", column, count.to_string().white());
        }
    }

    for column in &summary.degenerate_columns {
        println!(
            "{} column {} had no usable values and was left empty",
            "Warning:".yellow().bold(),
            column.white().bold()
        );
    }

    if !summary.dropped_columns.is_empty() {
        println!(
            "{} {}",
            "Dropped columns:".dimmed(),
            summary.dropped_columns.join(", ").dimmed()
        );
    }
}
