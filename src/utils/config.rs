/// Fixed parameters of the simulation and of the `.cell` text format.
pub struct Config;

impl Config {
    pub const LIVE_CELL: char = 'o';
    pub const DEAD_CELL: char = '-';
    pub const ROW_SEPARATOR: &'static str = "\n";

    pub const FILE_EXTENSION: &'static str = "cell";

    /// Chebyshev radius of the Moore neighborhood.
    pub const NEIGHBORHOOD_RADIUS: usize = 1;
    /// Dead border added around a trimmed generation before stepping.
    ///
    /// A birth can land `NEIGHBORHOOD_RADIUS` cells outside the live box, and that
    /// cell must itself be evaluated with its whole neighborhood inside the grid.
    pub const STEP_MARGIN: usize = 2 * Self::NEIGHBORHOOD_RADIUS;

    pub const MIN_GENERATIONS: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_glyphs_are_distinct() {
        assert_ne!(Config::LIVE_CELL, Config::DEAD_CELL);
        assert!(!Config::ROW_SEPARATOR.contains(Config::LIVE_CELL));
        assert!(!Config::ROW_SEPARATOR.contains(Config::DEAD_CELL));
    }

    #[test]
    fn test_margin_covers_one_step_of_growth() {
        assert_eq!(Config::STEP_MARGIN, 2);
    }
}
