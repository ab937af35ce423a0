//! Plain-text rendering of the smallest rectangle holding every live cell.
//!
//! Each row becomes one line of `O` (alive) and `_` (dead) glyphs, and every
//! line, the last included, ends with the platform line terminator.

use std::fmt;

use super::{Coordinate, RenderError, World};

#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

impl World {
    /// Render the bounding box of the live cells.
    ///
    /// Row and column spans are measured with [`Coordinate::distance`], so a
    /// world whose live cells straddle row or column zero renders with the
    /// spans that measure produces.
    pub fn render(&self) -> Result<String, RenderError> {
        let grid = self.grid_of_coordinates()?;
        Ok(self.render_grid(&grid))
    }

    fn render_grid(&self, grid: &[Vec<Coordinate>]) -> String {
        grid.iter().map(|row| self.render_row(row)).collect()
    }

    fn render_row(&self, row: &[Coordinate]) -> String {
        row.iter()
            .map(|&c| self.cell_at(c).glyph())
            .chain(LINE_TERMINATOR.chars())
            .collect()
    }

    fn grid_of_coordinates(&self) -> Result<Vec<Vec<Coordinate>>, RenderError> {
        let (Some(north_most), Some(south_most)) = (self.north_most(), self.south_most()) else {
            return Err(RenderError::EmptyWorld);
        };
        let west_most = self.live_cells().min_by(Coordinate::cmp_west_first);
        let east_most = self.live_cells().max_by(Coordinate::cmp_west_first);
        let (Some(west_most), Some(east_most)) = (west_most, east_most) else {
            return Err(RenderError::EmptyWorld);
        };

        // walking west, east or south from the north-most cell stops exactly
        // on the extreme cell's column or row
        let top_left = Coordinate::new(north_most.row(), west_most.col());
        let top_right = Coordinate::new(north_most.row(), east_most.col());
        let bottom_left = Coordinate::new(south_most.row(), north_most.col());

        let top_row: Vec<Coordinate> = (0..span(top_left, top_right))
            .map(|col| top_left.offset(0, col))
            .collect();

        // rows are counted on the row axis alone
        let left_edge_bottom = Coordinate::new(bottom_left.row(), top_left.col());
        Ok((0..span(top_left, left_edge_bottom))
            .map(|row| top_row.iter().map(|c| c.offset(row, 0)).collect())
            .collect())
    }
}

/// Cells covered from one corner to another, both inclusive.
fn span(from: Coordinate, to: Coordinate) -> i64 {
    if from == to {
        1
    } else {
        i64::try_from(from.distance(to)).map_or(i64::MAX, |d| d.saturating_add(1))
    }
}

/// Writes the rendered bounding box, or nothing at all for an empty world.
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grid_of_coordinates() {
            Ok(grid) => f.write_str(&self.render_grid(&grid)),
            Err(RenderError::EmptyWorld) => Ok(()),
        }
    }
}
