mod error;
mod file_stream;
mod memory_stream;
mod text;

pub use error::IoError;
pub use file_stream::FileStream;
pub use memory_stream::MemoryStream;
pub use text::{parse_cells, render_cells};

/// Source of an initial generation.
pub trait Reader {
    /// Returns the rows of cells, not yet validated as a generation.
    fn read(&mut self) -> Result<Vec<Vec<bool>>, IoError>;
}

/// Sink for a final generation.
pub trait Writer {
    /// Stores `cells`. Implementations reject a matrix with no rows.
    fn write(&mut self, cells: &[Vec<bool>]) -> Result<(), IoError>;
}
