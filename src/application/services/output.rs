//! Final result writer: file or stdout

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::response::compact;
use crate::infrastructure::traits::FileSystem;

/// Where the result ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Writes a JSON document as exactly one line.
pub struct OutputWriter {
    fs: Arc<dyn FileSystem>,
}

impl OutputWriter {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Compact document plus trailing newline.
    pub fn render_line(document: &Value) -> String {
        format!("{}\n", compact(document))
    }

    /// Write to `destination`, or stdout when None.
    ///
    /// Missing parent directories are created; an existing file is overwritten.
    pub fn write(
        &self,
        document: &Value,
        destination: Option<&Path>,
    ) -> ApplicationResult<OutputTarget> {
        let line = Self::render_line(document);
        match destination {
            Some(path) => {
                self.fs
                    .ensure_parent(path)
                    .with_path_context("create output directory", path)?;
                self.fs
                    .write(path, &line)
                    .with_path_context("write output file", path)?;
                debug!("wrote {} bytes to {}", line.len(), path.display());
                Ok(OutputTarget::File(path.to_path_buf()))
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                Self::write_to(&mut stdout, &line)?;
                Ok(OutputTarget::Stdout)
            }
        }
    }

    /// Write an already rendered line to any writer and flush it.
    pub fn write_to(writer: &mut impl Write, line: &str) -> ApplicationResult<()> {
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ApplicationError::Io {
                context: "write output to stdout".to_string(),
                source: e,
            })
    }
}
