//! CLI command implementations.

pub mod clean;
pub mod preview;

use scour::{ParserConfig, ScourConfig};

use crate::cli::InputOptions;

/// Build the library configuration from shared loader flags.
pub(crate) fn config_from(options: &InputOptions) -> ScourConfig {
    ScourConfig {
        parser: ParserConfig {
            delimiter: options.delimiter.as_option(),
            na_values: options.na_values.clone(),
            ..ParserConfig::default()
        },
        ..ScourConfig::default()
    }
}
