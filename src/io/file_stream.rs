use std::path::{Path, PathBuf};

use tracing::debug;

use super::{parse_cells, render_cells, IoError, Reader, Writer};
use crate::utils::Config;

/// Reads and writes a generation as a `.cell` text file.
#[derive(Clone, Debug)]
pub struct FileStream {
    path: PathBuf,
}

impl FileStream {
    /// Fails if `path` is empty or its extension is not `.cell`.
    ///
    /// The file itself is not touched, so the same path can serve as an output.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, IoError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(IoError::EmptyPath);
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(Config::FILE_EXTENSION) {
            return Err(IoError::InvalidExtension {
                path,
                expected: Config::FILE_EXTENSION,
            });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> IoError {
        match source.kind() {
            std::io::ErrorKind::NotFound => IoError::NotFound(self.path.clone()),
            _ => IoError::Io {
                path: self.path.clone(),
                source,
            },
        }
    }
}

impl Reader for FileStream {
    fn read(&mut self) -> Result<Vec<Vec<bool>>, IoError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read generation");
        parse_cells(&text)
    }
}

impl Writer for FileStream {
    fn write(&mut self, cells: &[Vec<bool>]) -> Result<(), IoError> {
        if cells.is_empty() {
            return Err(IoError::EmptyGeneration);
        }
        let text = render_cells(cells.iter().map(Vec::as_slice));
        std::fs::write(&self.path, &text).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), bytes = text.len(), "wrote generation");
        Ok(())
    }
}
