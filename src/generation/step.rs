use super::grid::Grid;
use crate::utils::Config;

fn count_neibs(grid: &Grid, x: usize, y: usize) -> usize {
    grid.get(x - 1, y - 1) as usize
        + grid.get(x, y - 1) as usize
        + grid.get(x + 1, y - 1) as usize
        + grid.get(x - 1, y) as usize
        + grid.get(x + 1, y) as usize
        + grid.get(x - 1, y + 1) as usize
        + grid.get(x, y + 1) as usize
        + grid.get(x + 1, y + 1) as usize
}

/// B3/S23: survive on 2 or 3 neighbors, be born on exactly 3.
fn next_state(alive: bool, neibs: usize) -> bool {
    (alive && neibs == 2) || neibs == 3
}

/// Computes the next generation of a trimmed grid and trims the result.
///
/// Only cells with a full neighborhood inside the padded grid are evaluated;
/// the outer ring of the padding is never alive afterwards.
pub(crate) fn step(grid: &Grid) -> Grid {
    let curr = grid.padded(Config::STEP_MARGIN);
    let (w, h) = curr.size();
    let r = Config::NEIGHBORHOOD_RADIUS;
    let mut next = Grid::blank(w, h);
    for y in r..h - r {
        for x in r..w - r {
            next.set(x, y, next_state(curr.get(x, y), count_neibs(&curr, x, y)));
        }
    }
    next.trimmed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        for neibs in 0..=8 {
            assert_eq!(next_state(true, neibs), neibs == 2 || neibs == 3);
            assert_eq!(next_state(false, neibs), neibs == 3);
        }
    }

    #[test]
    fn test_count_neibs() {
        let g = Grid::from_rows(&[
            vec![true, true, true],
            vec![true, true, true],
            vec![true, true, false],
        ]);
        assert_eq!(count_neibs(&g, 1, 1), 7);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        assert_eq!(step(&Grid::default()), Grid::default());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = Grid::from_rows(&[vec![true, true], vec![true, true]]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_birth_outside_live_box() {
        // an L-tromino fills its own box
        let tromino = Grid::from_rows(&[vec![true, false], vec![true, true]]);
        let block = Grid::from_rows(&[vec![true, true], vec![true, true]]);
        assert_eq!(step(&tromino), block);

        // the blinker's births land one row above and below the live row
        let row = Grid::from_rows(&[vec![true, true, true]]);
        assert_eq!(step(&row).size(), (1, 3));
    }
}
