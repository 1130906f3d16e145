mod error;
mod grid;
mod state;
mod step;

pub use error::GenerationError;
pub use state::Generation;
