/// Inclusive bounds of the live region of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BoundingBox {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl BoundingBox {
    fn at(x: usize, y: usize) -> Self {
        Self {
            x_min: x,
            x_max: x,
            y_min: y,
            y_max: y,
        }
    }

    fn including(self, x: usize, y: usize) -> Self {
        Self {
            x_min: self.x_min.min(x),
            x_max: self.x_max.max(x),
            y_min: self.y_min.min(y),
            y_max: self.y_max.max(y),
        }
    }

    pub fn width(&self) -> usize {
        self.x_max - self.x_min + 1
    }

    pub fn height(&self) -> usize {
        self.y_max - self.y_min + 1
    }
}

/// Row-major rectangular field of cells.
///
/// `x` is the column and `y` is the row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Copies `rows` into a new grid. The caller guarantees that all rows have equal length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self {
            cells: rows.iter().flatten().copied().collect(),
            width,
            height: rows.len(),
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.width] = state;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut alive = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| (i % self.width, i / self.width));
        let (x, y) = alive.next()?;
        Some(alive.fold(BoundingBox::at(x, y), |bb, (x, y)| bb.including(x, y)))
    }

    /// Restricts the grid to its bounding box, or to the 0x0 grid if no cell is alive.
    pub fn trimmed(&self) -> Self {
        let Some(bb) = self.bounding_box() else {
            return Self::default();
        };
        let (width, height) = (bb.width(), bb.height());
        let mut cells = Vec::with_capacity(width * height);
        for y in bb.y_min..=bb.y_max {
            let row = y * self.width;
            cells.extend_from_slice(&self.cells[row + bb.x_min..=row + bb.x_max]);
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Surrounds the grid with `margin` dead cells on every side.
    pub fn padded(&self, margin: usize) -> Self {
        let mut result = Self::blank(self.width + 2 * margin, self.height + 2 * margin);
        for (y, row) in self.rows().enumerate() {
            let dst = margin + (y + margin) * result.width;
            result.cells[dst..dst + self.width].copy_from_slice(row);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(pattern: &[&str]) -> Grid {
        let rows = pattern
            .iter()
            .map(|line| line.chars().map(|c| c == 'o').collect())
            .collect::<Vec<Vec<bool>>>();
        Grid::from_rows(&rows)
    }

    #[test]
    fn test_bounding_box() {
        let g = grid(&["-----", "--o--", "---o-", "-----"]);
        assert_eq!(
            g.bounding_box(),
            Some(BoundingBox {
                x_min: 2,
                x_max: 3,
                y_min: 1,
                y_max: 2
            })
        );
        assert_eq!(grid(&["---", "---"]).bounding_box(), None);
        assert_eq!(Grid::default().bounding_box(), None);
    }

    #[test]
    fn test_trimmed() {
        let g = grid(&["-----", "--o--", "---o-", "-----"]);
        assert_eq!(g.trimmed(), grid(&["o-", "-o"]));
        assert_eq!(g.trimmed().trimmed(), g.trimmed());
    }

    #[test]
    fn test_trimmed_dead_grid_is_empty() {
        let g = grid(&["---", "---", "---"]);
        assert_eq!(g.trimmed(), Grid::default());
        assert_eq!(g.trimmed().size(), (0, 0));
        assert_eq!(Grid::from_rows(&[vec![], vec![]]).trimmed(), Grid::default());
    }

    #[test]
    fn test_padded() {
        let g = grid(&["oo"]).padded(2);
        assert_eq!(g.size(), (6, 5));
        assert_eq!(g.population(), 2);
        assert!(g.get(2, 2) && g.get(3, 2));
        assert_eq!(g.trimmed(), grid(&["oo"]));
        assert_eq!(Grid::default().padded(2), Grid::blank(4, 4));
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![true, false, true], vec![false, false, true]];
        let g = Grid::from_rows(&rows);
        assert_eq!(g.size(), (3, 2));
        assert_eq!(g.to_rows(), rows);
    }
}
