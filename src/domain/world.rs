use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use super::{Algorithm, Cell, Coordinate};

/// A sparse, immutable Game of Life world.
///
/// Only live cells are stored; every other position on the plane is dead.
/// Evolving returns a new world and never touches the current one, so a world
/// can be shared freely between threads.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct World {
    live: BTreeSet<Coordinate>,
}

impl World {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a world with live cells at the given positions. Duplicates collapse.
    pub fn with_cells_at<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coordinate>,
    {
        Self {
            live: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a world from several groups of positions, as if concatenated.
    pub fn from_groups<G, I>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = Coordinate>,
    {
        groups.into_iter().flatten().collect()
    }

    pub fn is_live_at(&self, coordinate: Coordinate) -> bool {
        self.live.contains(&coordinate)
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Live cells, north-most first.
    pub fn live_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.live.iter().copied()
    }

    /// The same shape moved by the given number of rows and columns.
    pub fn translated(&self, rows: i64, cols: i64) -> Self {
        self.live_cells().map(|c| c.offset(rows, cols)).collect()
    }

    /// First live cell in the north-first order.
    pub fn north_most(&self) -> Option<Coordinate> {
        self.live.first().copied()
    }

    /// Last live cell in the north-first order.
    pub fn south_most(&self) -> Option<Coordinate> {
        self.live.last().copied()
    }

    pub(crate) fn cell_at(&self, coordinate: Coordinate) -> Cell {
        Cell::from_alive(self.is_live_at(coordinate))
    }

    /// The next generation, using the default strategy.
    pub fn evolve(&self) -> Self {
        self.evolve_with(Algorithm::default())
    }

    /// The next generation, using the given strategy.
    pub fn evolve_with(&self, algorithm: Algorithm) -> Self {
        let newborns = match algorithm {
            Algorithm::TripleEnumeration => self.newborns_from_triples(),
            Algorithm::NeighborTally => self.newborns_from_tally(),
        };
        let next: Self = self.survivors().chain(newborns).collect();

        trace!(
            algorithm = algorithm.name(),
            before = self.population(),
            after = next.population(),
            "evolved world"
        );
        next
    }

    fn live_neighbor_count(&self, coordinate: Coordinate) -> usize {
        coordinate
            .neighbors()
            .into_iter()
            .filter(|&n| self.is_live_at(n))
            .count()
    }

    fn survivors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.live_cells()
            .filter(|&c| Cell::Alive.evolve(self.live_neighbor_count(c)).is_alive())
    }

    // Births by neighbor tally ///////////////////////////////////////////////

    fn newborns_from_tally(&self) -> Vec<Coordinate> {
        let mut tally: HashMap<Coordinate, usize> = HashMap::new();
        self.live_cells()
            .flat_map(Coordinate::neighbors)
            .filter(|&n| !self.is_live_at(n))
            .for_each(|n| *tally.entry(n).or_default() += 1);

        tally
            .into_iter()
            .filter(|&(_, count)| Cell::Dead.evolve(count).is_alive())
            .map(|(c, _)| c)
            .collect()
    }

    // Births by triple enumeration ///////////////////////////////////////////

    fn newborns_from_triples(&self) -> Vec<Coordinate> {
        let live = &self.live;
        live.iter()
            .flat_map(|&a| {
                live.iter()
                    .flat_map(move |&b| live.iter().map(move |&c| [a, b, c]))
            })
            .filter(|triple| could_share_a_neighbor(triple))
            .flat_map(|triple| self.empty_cells_bordered_by_exactly(&triple))
            .collect()
    }

    /// Dead cells adjacent to every cell of `triple` whose live neighbors are
    /// precisely the triple, no more.
    fn empty_cells_bordered_by_exactly(&self, triple: &[Coordinate; 3]) -> Vec<Coordinate> {
        let wanted: BTreeSet<Coordinate> = triple.iter().copied().collect();
        self.shared_empty_neighbors(triple)
            .into_iter()
            .filter(|&c| self.live_neighbors(c) == wanted)
            .collect()
    }

    fn shared_empty_neighbors(&self, cells: &[Coordinate]) -> Vec<Coordinate> {
        cells
            .iter()
            .map(|&c| self.empty_neighbors(c))
            .reduce(|xs, ys| xs.into_iter().filter(|x| ys.contains(x)).collect())
            .unwrap_or_default()
    }

    fn empty_neighbors(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        coordinate
            .neighbors()
            .into_iter()
            .filter(|&n| !self.is_live_at(n))
            .collect()
    }

    fn live_neighbors(&self, coordinate: Coordinate) -> BTreeSet<Coordinate> {
        coordinate
            .neighbors()
            .into_iter()
            .filter(|&n| self.is_live_at(n))
            .collect()
    }
}

/// Cheap prefilter: the cells must be pairwise distinct and pairwise within
/// two steps, or no single cell can neighbor all of them.
fn could_share_a_neighbor(cells: &[Coordinate]) -> bool {
    cells.iter().enumerate().all(|(i, &a)| {
        cells[i + 1..].iter().all(|&b| a != b && a.distance(b) <= 2)
    })
}

impl FromIterator<Coordinate> for World {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self {
            live: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i64, col: i64) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn both_ways(world: &World) -> World {
        let triple = world.evolve_with(Algorithm::TripleEnumeration);
        let tally = world.evolve_with(Algorithm::NeighborTally);
        assert_eq!(triple, tally, "strategies disagree");
        tally
    }

    #[test]
    fn test_empty_world_is_empty() {
        assert!(World::empty().is_empty());
        assert!(!World::with_cells_at([at(5, 7)]).is_empty());
        assert!(!World::with_cells_at([at(5, 7), at(2, 6)]).is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let world = World::with_cells_at([at(1, 1), at(1, 1), at(2, 2)]);
        assert_eq!(world.population(), 2);
    }

    #[test]
    fn test_groups_are_concatenated() {
        let world = World::from_groups([vec![at(1, 1), at(1, 2)], vec![at(1, 2), at(3, 3)]]);
        assert_eq!(world, World::with_cells_at([at(3, 3), at(1, 2), at(1, 1)]));
    }

    #[test]
    fn test_empty_world_stays_empty() {
        assert!(both_ways(&World::empty()).is_empty());
    }

    #[test]
    fn test_lonely_cell_dies() {
        let c = at(3, 4);
        assert!(!both_ways(&World::with_cells_at([c])).is_live_at(c));
    }

    #[test]
    fn test_cell_with_one_neighbor_dies() {
        let c = at(3, 4);
        assert!(!both_ways(&World::with_cells_at([c, at(3, 5)])).is_live_at(c));
    }

    #[test]
    fn test_cell_with_two_neighbors_survives() {
        let c = at(3, 4);
        let world = World::with_cells_at([c, at(3, 3), at(3, 5)]);
        assert!(both_ways(&world).is_live_at(c));
    }

    #[test]
    fn test_cell_with_three_neighbors_survives() {
        let c = at(4, 3);
        let world = World::with_cells_at([at(3, 2), at(3, 3), at(3, 4), c]);
        assert!(both_ways(&world).is_live_at(c));
    }

    #[test]
    fn test_dead_cell_with_three_neighbors_is_born() {
        let world = World::with_cells_at([at(2, 2), at(2, 3), at(2, 4)]);
        let next = both_ways(&world);
        assert!(next.is_live_at(at(3, 3)));
        assert!(next.is_live_at(at(1, 3)));
    }

    #[test]
    fn test_dead_cell_with_four_neighbors_stays_dead() {
        // (2, 2) sees four live cells, each pair of which shares it
        let world = World::with_cells_at([at(1, 1), at(1, 3), at(3, 1), at(3, 3)]);
        assert!(!both_ways(&world).is_live_at(at(2, 2)));
    }

    #[test]
    fn test_dead_cell_with_two_neighbors_stays_dead() {
        let world = World::with_cells_at([at(1, 1), at(1, 3)]);
        assert!(both_ways(&world).is_empty());
    }

    #[test]
    fn test_births_across_the_origin() {
        let world = World::with_cells_at([at(-1, -1), at(-1, 0), at(-1, 1)]);
        let expected = World::with_cells_at([at(-2, 0), at(-1, 0), at(0, 0)]);
        assert_eq!(both_ways(&world), expected);
    }

    #[test]
    fn test_prefilter_rejects_repeats_and_distant_cells() {
        assert!(could_share_a_neighbor(&[at(1, 1), at(1, 2), at(3, 3)]));
        assert!(!could_share_a_neighbor(&[at(1, 1), at(1, 1), at(1, 2)]));
        assert!(!could_share_a_neighbor(&[at(1, 1), at(1, 2), at(1, 4)]));
    }

    #[test]
    fn test_translation_keeps_shape() {
        let world = World::with_cells_at([at(1, 1), at(1, 2)]);
        assert_eq!(
            world.translated(-3, 2),
            World::with_cells_at([at(-2, 3), at(-2, 4)])
        );
    }

    #[test]
    fn test_lonely_cells_at_the_edges_of_the_range_die() {
        for c in [at(i64::MAX, 0), at(0, i64::MIN), at(i64::MIN, i64::MAX)] {
            assert!(both_ways(&World::with_cells_at([c])).is_empty());
        }
    }

    #[test]
    fn test_blinker_across_the_column_edge() {
        let world = World::with_cells_at([at(0, i64::MAX - 1), at(0, i64::MAX), at(0, i64::MIN)]);
        let expected = World::with_cells_at([at(-1, i64::MAX), at(0, i64::MAX), at(1, i64::MAX)]);
        assert_eq!(both_ways(&world), expected);
        assert_eq!(both_ways(&expected), world);
    }

    #[test]
    fn test_translation_wraps() {
        let world = World::with_cells_at([at(i64::MAX, 0)]);
        assert_eq!(world.translated(1, -1), World::with_cells_at([at(i64::MIN, -1)]));
    }

    #[test]
    fn test_evolve_leaves_original_untouched() {
        let world = World::with_cells_at([at(2, 2), at(2, 3), at(2, 4)]);
        let snapshot = world.clone();
        let _ = world.evolve();
        assert_eq!(world, snapshot);
    }
}
