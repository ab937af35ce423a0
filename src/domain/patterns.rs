use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Coordinate, World};

/// A named shape that can be dropped anywhere on the plane
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Live cells as (row, col) offsets from the pattern's top-left corner
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self { name, description, cells }
    }

    /// A world holding just this pattern, top-left corner at `origin`
    pub fn at(&self, origin: Coordinate) -> World {
        self.cells
            .iter()
            .map(|&(row, col)| origin.offset(row, col))
            .collect()
    }

    /// Rows and columns spanned by the pattern
    pub fn size(&self) -> (i64, i64) {
        let rows = self.cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
        let cols = self.cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);
        (rows, cols)
    }
}

/// Random soup filling `rows` x `cols` from the origin; same seed, same soup.
pub fn random_soup(rows: u32, cols: u32, density: f64, seed: u64) -> World {
    let density = density.clamp(0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..i64::from(rows))
        .flat_map(|row| (0..i64::from(cols)).map(move |col| Coordinate::new(row, col)))
        .filter(|_| rng.random_bool(density))
        .collect()
}

/// Classic Game of Life patterns library
#[rustfmt::skip]
pub mod presets {
    use super::*;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }

    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            vec![
                        (0, 1), (0, 2),
                (1, 0),                 (1, 3),
                        (2, 1), (2, 2),
            ]
        )
    }

    pub fn loaf() -> Pattern {
        Pattern::new(
            "Loaf",
            "Still life",
            vec![
                        (0, 1), (0, 2),
                (1, 0),                 (1, 3),
                        (2, 1),         (2, 3),
                                (3, 2),
            ]
        )
    }

    pub fn boat() -> Pattern {
        Pattern::new(
            "Boat",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0),         (1, 2),
                        (2, 1),
            ]
        )
    }

    /// Blinker - period 2 oscillator, starts horizontal
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1), (0, 2),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                        (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                                        (2, 3),
                                (3, 2), (3, 3),
            ]
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
                // Upper middle
                (2, 0), (2, 5), (2, 7), (2, 12),
                (3, 0), (3, 5), (3, 7), (3, 12),
                (4, 0), (4, 5), (4, 7), (4, 12),
                // Center
                (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
                (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
                // Lower middle
                (8, 0), (8, 5), (8, 7), (8, 12),
                (9, 0), (9, 5), (9, 7), (9, 12),
                (10, 0), (10, 5), (10, 7), (10, 12),
                // Bottom
                (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
            ]
        )
    }

    /// Glider - simplest spaceship, moves south-east
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                        (0, 1),
                                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                        (0, 1),                 (0, 4),
                (1, 0),
                (2, 0),                         (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                        (0, 1), (0, 2),
                (1, 0), (1, 1),
                        (2, 1),
            ]
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                        (0, 1),
                                        (1, 3),
                (2, 0), (2, 1),                 (2, 4), (2, 5), (2, 6),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            beehive(),
            loaf(),
            boat(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            glider(),
            lwss(),
            r_pentomino(),
            acorn(),
        ]
    }

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        let name = name.trim();
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let patterns = presets::all_patterns();
        let mut names: Vec<_> = patterns.iter().map(|p| p.name.to_lowercase()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), patterns.len());
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(presets::find("pulsar").map(|p| p.name), Some("Pulsar"));
        assert_eq!(presets::find(" r-PENTOMINO ").map(|p| p.name), Some("R-pentomino"));
        assert!(presets::find("gosper").is_none());
    }

    #[test]
    fn test_placement_offsets_cells() {
        let world = presets::block().at(Coordinate::new(-2, 7));
        assert!(world.is_live_at(Coordinate::new(-2, 7)));
        assert!(world.is_live_at(Coordinate::new(-1, 8)));
        assert_eq!(world.population(), 4);
    }

    #[test]
    fn test_placement_at_the_edge_of_the_range() {
        let world = presets::blinker().at(Coordinate::new(3, i64::MAX));
        assert!(world.is_live_at(Coordinate::new(3, i64::MAX)));
        assert!(world.is_live_at(Coordinate::new(3, i64::MIN)));
        assert!(world.is_live_at(Coordinate::new(3, i64::MIN + 1)));
    }

    #[test]
    fn test_size() {
        assert_eq!(presets::pulsar().size(), (13, 13));
        assert_eq!(presets::blinker().size(), (1, 3));
    }

    #[test]
    fn test_random_soup_is_seeded() {
        let a = random_soup(16, 16, 0.4, 7);
        assert_eq!(a, random_soup(16, 16, 0.4, 7));
        assert!(a.live_cells().all(|c| (0..16).contains(&c.row()) && (0..16).contains(&c.col())));
        assert!(random_soup(8, 8, 0.0, 1).is_empty());
        assert_eq!(random_soup(8, 8, 1.0, 1).population(), 64);
    }
}
