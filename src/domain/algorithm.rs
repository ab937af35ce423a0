//! Algorithm enum for selecting the evolution strategy.
//!
//! Both strategies compute the same next generation; they differ only in
//! how births are discovered.

use std::str::FromStr;

use super::error::UnknownAlgorithm;

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Enumerate every triple of live cells and keep the dead cells whose
    /// whole live neighborhood is exactly that triple. Cubic in population.
    TripleEnumeration,
    /// Tally live neighbors for every dead cell adjacent to a live one.
    #[default]
    NeighborTally,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::TripleEnumeration, Algorithm::NeighborTally]
    }

    /// Short name, also accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::TripleEnumeration => "triple",
            Algorithm::NeighborTally => "tally",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::TripleEnumeration => "Births from live-cell triples, O(n^3)",
            Algorithm::NeighborTally => "Births from per-cell neighbor tallies, O(n)",
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
