//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scour: batch cleaner for messy employee tables
#[derive(Parser)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to `clean` with default paths
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a data file and write the result
    Clean(CleanArgs),

    /// Run the cleaning stages and show what would change, writing nothing
    Preview(PreviewArgs),
}

#[derive(Args)]
pub struct CleanArgs {
    /// Path to the input file
    #[arg(value_name = "INPUT", default_value = "input_data.csv")]
    pub input: PathBuf,

    /// Path for the cleaned output
    #[arg(value_name = "OUTPUT", default_value = "cleaned_data.csv")]
    pub output: PathBuf,

    /// Also write a JSON audit of every change
    #[arg(long, value_name = "PATH")]
    pub audit: Option<PathBuf>,

    #[command(flatten)]
    pub input_options: InputOptions,
}

impl Default for CleanArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input_data.csv"),
            output: PathBuf::from("cleaned_data.csv"),
            audit: None,
            input_options: InputOptions::default(),
        }
    }
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Path to the input file
    #[arg(value_name = "INPUT", default_value = "input_data.csv")]
    pub input: PathBuf,

    /// Number of cleaned rows to show
    #[arg(short = 'n', long, default_value = "10")]
    pub rows: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub input_options: InputOptions,
}

/// Loader options shared by every command.
#[derive(Args, Default)]
pub struct InputOptions {
    /// Field delimiter: a single character, `tab`, or `auto` to detect
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: Delimiter,

    /// Additional token read as a missing value (repeatable)
    #[arg(long = "na-value", value_name = "TOKEN")]
    pub na_values: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Auto,
    Byte(u8),
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Byte(b',')
    }
}

impl Delimiter {
    pub fn as_option(self) -> Option<u8> {
        match self {
            Delimiter::Auto => None,
            Delimiter::Byte(b) => Some(b),
        }
    }
}

fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(Delimiter::Auto),
        "tab" | "\\t" => Ok(Delimiter::Byte(b'\t')),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(Delimiter::Byte(*b)),
            _ => Err(format!(
                "Invalid delimiter: {}. Use a single ASCII character, tab, or auto.",
                s
            )),
        },
    }
}
