#![warn(clippy::all)]

mod generation;
pub mod io;
mod params;
pub mod simulation;
mod utils;

pub use generation::{Generation, GenerationError};
pub use params::{Cli, ParamError, Params, StreamKind};
pub use utils::Config;
