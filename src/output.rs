//! Serialization of fixture documents to stdout or a file

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::domain::FixtureDocument;
use crate::error::Result;
use crate::log_messages;

/// JSON layout of the written document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two-space indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
}

impl OutputFormat {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Where the document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    /// Created if missing, truncated otherwise
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputSink {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Serialize `document` into `writer`, terminated by a newline.
pub fn write_document<W: Write>(
    document: &FixtureDocument,
    mut writer: W,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut writer, document)?,
        OutputFormat::Compact => serde_json::to_writer(&mut writer, document)?,
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write `document` to `sink`.
pub fn emit(document: &FixtureDocument, sink: &OutputSink, format: OutputFormat) -> Result<()> {
    match sink {
        OutputSink::Stdout => {
            info!("{}", log_messages::output::WRITING_STDOUT);
            write_document(document, io::stdout().lock(), format)
        }
        OutputSink::File(path) => {
            info!(path = %path.display(), "{}", log_messages::output::WRITING_FILE);
            let file = File::create(path)?;
            write_document(document, BufWriter::new(file), format)
        }
    }
}
