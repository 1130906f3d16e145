use std::fmt;

use super::grid::Grid;
use super::step::step;
use super::GenerationError;
use crate::io::render_cells;

/// One timestep of the simulation, stored in canonical form.
///
/// The grid is trimmed to the bounding box of its live cells, or has no rows
/// at all once every cell is dead. A `Generation` never shares its cells with
/// the caller: construction and [`Generation::snapshot`] both copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation {
    grid: Grid,
}

impl Generation {
    /// Validates and copies `cells`.
    pub fn new(cells: &[Vec<bool>]) -> Result<Self, GenerationError> {
        Self::try_from_raw(Some(cells))
    }

    /// Validates a possibly absent matrix.
    ///
    /// Checks run in order: absent, no rows, rows of different lengths.
    pub fn try_from_raw(raw: Option<&[Vec<bool>]>) -> Result<Self, GenerationError> {
        let rows = raw.ok_or(GenerationError::NullInput)?;
        let first = rows.first().ok_or(GenerationError::EmptyInput)?;
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != first.len())
        {
            return Err(GenerationError::NonRectangular {
                row,
                expected: first.len(),
                found: cells.len(),
            });
        }
        Ok(Self {
            grid: Grid::from_rows(rows).trimmed(),
        })
    }

    /// Create a `rows x cols` soup where every cell is alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    ///
    /// # Panics
    ///
    /// Panics if `fill_rate` is outside `[0, 1]`.
    pub fn random(rows: usize, cols: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut grid = Grid::blank(cols, rows);
        for y in 0..rows {
            for x in 0..cols {
                grid.set(x, y, rng.gen_bool(fill_rate));
            }
        }
        Self {
            grid: grid.trimmed(),
        }
    }

    /// Deep copy of the canonical cells; no rows if the generation is extinct.
    pub fn snapshot(&self) -> Vec<Vec<bool>> {
        self.grid.to_rows()
    }

    /// Computes the following generation, leaving `self` untouched.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            grid: step(&self.grid),
        }
    }

    /// Endless sequence starting with `self`.
    pub fn evolve(self) -> impl Iterator<Item = Generation> {
        std::iter::successors(Some(self), |g| Some(g.next()))
    }

    /// Text form: `o` for live, `-` for dead, rows separated by `\n`.
    pub fn render(&self) -> String {
        render_cells(self.grid.rows())
    }

    pub fn rows(&self) -> usize {
        self.grid.size().1
    }

    pub fn cols(&self) -> usize {
        self.grid.size().0
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_extinct(&self) -> bool {
        self.rows() == 0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_is_reproducible() {
        let a = Generation::random(32, 48, Some(42), 0.3);
        let b = Generation::random(32, 48, Some(42), 0.3);
        assert_eq!(a, b);
        assert!(a.rows() <= 32 && a.cols() <= 48);
        assert!(a.population() > 0);
    }

    #[test]
    fn test_random_fill_rate_bounds() {
        assert!(Generation::random(8, 8, Some(1), 0.0).is_extinct());
        let full = Generation::random(8, 5, Some(1), 1.0);
        assert_eq!((full.rows(), full.cols(), full.population()), (8, 5, 40));
    }

    #[test]
    fn test_extinct_has_no_dimensions() {
        let g = Generation::new(&vec![vec![false; 4]; 3]).unwrap();
        assert!(g.is_extinct());
        assert_eq!((g.rows(), g.cols(), g.population()), (0, 0, 0));
        assert_eq!(g.render(), "");
        assert_eq!(g, Generation::default());
    }

    #[test]
    fn test_display_matches_render() {
        let g = Generation::new(&[vec![true, false], vec![true, true]]).unwrap();
        assert_eq!(format!("{}", g), g.render());
        assert_eq!(g.render(), "o-\noo");
    }

    #[test]
    fn test_evolve_starts_with_self() {
        let g = Generation::new(&[vec![true, true, true]]).unwrap();
        let seq = g.clone().evolve().take(3).collect::<Vec<_>>();
        assert_eq!(seq[0], g);
        assert_eq!(seq[1], g.next());
        assert_eq!(seq[2], g);
    }
}
