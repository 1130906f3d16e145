use std::io::Write;

use tracing::{debug, info, warn};

use crate::io::IoError;
use crate::{Generation, GenerationError, Params};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid initial generation: {0}")]
    Generation(#[from] GenerationError),

    #[error("failed to print generation: {0}")]
    Output(#[from] std::io::Error),
}

/// Outcome of [`run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Index of the last generation printed.
    pub generations_run: u32,
    /// Index of the first generation with no live cells, if the run stopped early.
    pub extinct_at: Option<u32>,
    pub final_population: usize,
}

/// Reads the initial generation, prints generations `0..=params.generations()`
/// to `out` and writes the last one.
///
/// An extinct generation ends the run early and nothing is written, since the
/// writers reject a generation with no rows.
pub fn run(params: &mut Params, out: &mut impl Write) -> Result<Summary, RunError> {
    let mut generation = Generation::new(&params.reader().read()?)?;
    info!(
        rows = generation.rows(),
        cols = generation.cols(),
        population = generation.population(),
        "loaded initial generation"
    );

    let last = params.generations();
    let mut index = 0;
    loop {
        writeln!(out)?;
        writeln!(out, "generation {}", index)?;
        writeln!(out, "{}", generation)?;
        debug!(
            generation = index,
            rows = generation.rows(),
            cols = generation.cols(),
            population = generation.population(),
            "printed generation"
        );

        if generation.is_extinct() {
            warn!(generation = index, "population died out, final generation not written");
            return Ok(Summary {
                generations_run: index,
                extinct_at: Some(index),
                final_population: 0,
            });
        }
        if index == last {
            break;
        }
        generation = generation.next();
        index += 1;
    }

    params.writer().write(&generation.snapshot())?;
    info!(
        generation = index,
        population = generation.population(),
        "wrote final generation"
    );
    Ok(Summary {
        generations_run: index,
        extinct_at: None,
        final_population: generation.population(),
    })
}
