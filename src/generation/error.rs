/// Reasons a raw matrix is rejected as a generation.
///
/// Checks run in declaration order, so the first failing one is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("generation is absent")]
    NullInput,

    #[error("generation has no rows")]
    EmptyInput,

    #[error("generation is not rectangular: row {row} has {found} cells, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
}
