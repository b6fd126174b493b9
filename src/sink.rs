// src/sink.rs
// =============================================================================
// Persists crawl results.
//
// The crawler only needs "save this mapping somewhere"; JsonFileSink writes
// it as a pretty-printed JSON object of domain -> product URLs:
//
//   {
//     "books.toscrape.com": [
//       "https://books.toscrape.com/catalogue/..."
//     ]
//   }
// =============================================================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::crawl::AggregateResult;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait ResultSink {
    fn save(&self, result: &AggregateResult) -> Result<(), SinkError>;
}

pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ResultSink for JsonFileSink {
    fn save(&self, result: &AggregateResult) -> Result<(), SinkError> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, result)?;
        writer.write_all(b"\n").map_err(|e| self.io_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        Ok(())
    }
}
