//! Building worlds from text grids.
//!
//! A grid is one line per row, `O` for a live cell and `_` or `.` for a dead
//! one. Blank lines are skipped and whitespace around each line is ignored,
//! so the output of [`World::render`] parses back to the same shape.

use std::str::FromStr;

use super::{Coordinate, ParseError, World};

impl World {
    /// Parse a grid whose first cell sits at row 1, column 1.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_at(text, Coordinate::new(1, 1))
    }

    /// Parse a grid whose first cell sits at `origin`.
    pub fn parse_at(text: &str, origin: Coordinate) -> Result<Self, ParseError> {
        let rows = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let mut width = None;
        let mut live = Vec::new();
        for (row, (line_no, line)) in (0i64..).zip(rows) {
            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(ParseError::RaggedRow { line: line_no, expected, found });
            }

            for (col, (idx, ch)) in (0i64..).zip(line.chars().enumerate()) {
                match ch {
                    'O' => live.push(origin.offset(row, col)),
                    '_' | '.' => {}
                    _ => {
                        return Err(ParseError::UnexpectedCharacter {
                            line: line_no,
                            column: idx + 1,
                            ch,
                        });
                    }
                }
            }
        }

        Ok(Self::with_cells_at(live))
    }
}

impl FromStr for World {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_and_columns_start_at_one() {
        let world = World::parse("_O\nO_").unwrap();
        assert_eq!(
            world,
            World::with_cells_at([Coordinate::new(1, 2), Coordinate::new(2, 1)])
        );
    }

    #[test]
    fn test_origin_offsets_every_cell() {
        let world = World::parse_at("O.\n.O", Coordinate::new(-5, 10)).unwrap();
        assert_eq!(
            world,
            World::with_cells_at([Coordinate::new(-5, 10), Coordinate::new(-4, 11)])
        );
    }

    #[test]
    fn test_origin_at_the_edge_of_the_range() {
        let world = World::parse_at("_O\nO_", Coordinate::new(i64::MAX, i64::MAX)).unwrap();
        assert_eq!(
            world,
            World::with_cells_at([
                Coordinate::new(i64::MAX, i64::MIN),
                Coordinate::new(i64::MIN, i64::MAX),
            ])
        );
    }

    #[test]
    fn test_blank_lines_and_indentation_are_ignored() {
        let world = World::parse("\n   OO\n\n   OO   \n").unwrap();
        assert_eq!(world.population(), 4);
        assert!(world.is_live_at(Coordinate::new(2, 2)));
    }

    #[test]
    fn test_no_rows_is_empty_world() {
        assert_eq!(World::parse(""), Ok(World::empty()));
        assert_eq!(World::parse("___\n___"), Ok(World::empty()));
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            World::parse("O_\n_X"),
            Err(ParseError::UnexpectedCharacter { line: 2, column: 2, ch: 'X' })
        );
    }

    #[test]
    fn test_ragged_row() {
        assert_eq!(
            World::parse("OOO\n\nO_"),
            Err(ParseError::RaggedRow { line: 3, expected: 3, found: 2 })
        );
    }

    #[test]
    fn test_render_parses_back() {
        let world = World::parse("_OO_\nO__O\n_O_O\n__O_").unwrap();
        let text = world.render().unwrap();
        assert_eq!(World::parse(&text), Ok(world));
    }
}
