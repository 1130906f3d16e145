use super::IoError;
use crate::utils::Config;

/// Parses the `.cell` text form into rows of cells.
///
/// A single trailing line break is accepted. Row lengths are not checked here.
pub fn parse_cells(text: &str) -> Result<Vec<Vec<bool>>, IoError> {
    if text.trim_end_matches(['\r', '\n']).is_empty() {
        return Err(IoError::EmptyContent);
    }
    text.lines()
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, c)| match c {
                    Config::LIVE_CELL => Ok(true),
                    Config::DEAD_CELL => Ok(false),
                    found => Err(IoError::InvalidCharacter {
                        line: y + 1,
                        column: x + 1,
                        found,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Renders rows of cells, one line per row, without a trailing line break.
pub fn render_cells<'a>(rows: impl IntoIterator<Item = &'a [bool]>) -> String {
    rows.into_iter()
        .map(|row| {
            row.iter()
                .map(|&c| if c { Config::LIVE_CELL } else { Config::DEAD_CELL })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(Config::ROW_SEPARATOR)
}
