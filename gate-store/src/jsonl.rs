use gate_core::{ReservationSource, SourceError};
use gate_shared::RawRecord;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reservation file with one JSON object per line
#[derive(Debug, Clone)]
pub struct JsonlFile {
    path: PathBuf,
}

impl JsonlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReservationSource for JsonlFile {
    fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                path: self.path.clone(),
            },
            _ => SourceError::Io {
                path: self.path.clone(),
                source,
            },
        })?;

        let records = parse_lines(&contents)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "Read reservation file");
        Ok(records)
    }
}

/// Decode JSONL text. Blank lines are skipped; line numbers in errors are
/// 1-based and count blank lines.
pub fn parse_lines(contents: &str) -> Result<Vec<RawRecord>, SourceError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let line_no = index + 1;
            match serde_json::from_str(line) {
                Ok(Value::Object(record)) => Ok(record),
                Ok(_) => Err(SourceError::NotAnObject { line: line_no }),
                Err(source) => Err(SourceError::Parse {
                    line: line_no,
                    source,
                }),
            }
        })
        .collect()
}
