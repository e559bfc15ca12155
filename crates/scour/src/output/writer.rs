//! Delimited output and JSON audit files.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::{Result, ScourError};
use crate::schema::CleanRecord;
use crate::scour::CleanResult;

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Serializes cleaned records with a header row.
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    /// Create a writer with default configuration.
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Create a writer with custom configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write records to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>, records: &[CleanRecord]) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source: io::Error| ScourError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::create(path).map_err(io_err)?;
        self.write_to(file, records).map_err(io_err)?;

        info!(path = %path.display(), rows = records.len(), "wrote cleaned data");
        Ok(())
    }

    /// Serialize records into an in-memory buffer.
    pub fn to_bytes(&self, records: &[CleanRecord]) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, records)
            .map_err(|source| ScourError::Io {
                path: "<memory>".into(),
                source,
            })?;
        Ok(buffer)
    }

    fn write_to<W: io::Write>(&self, sink: W, records: &[CleanRecord]) -> io::Result<()> {
        // Header is written explicitly so an empty dataset still gets one.
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(false)
            .from_writer(sink);

        writer.write_record(CleanRecord::headers())?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the cleaning report as pretty-printed JSON.
pub fn write_audit(path: impl AsRef<Path>, result: &CleanResult) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&result.audit())?;
    fs::write(path, json).map_err(|source| ScourError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote audit report");
    Ok(())
}
