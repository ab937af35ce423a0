//! Performance benchmark comparing the evolution strategies.
//!
//! Every soup is evolved with both strategies and the results are compared,
//! so a run doubles as an equivalence check. Independent soups are evolved on
//! separate threads with rayon; each world is only ever read.

use std::time::Instant;

use rayon::prelude::*;
use sparse_life::domain::random_soup;
use sparse_life::{Algorithm, World};

const GENERATIONS: u32 = 10;
const SOUPS_PER_SIZE: u64 = 16;
const DENSITY: f64 = 0.35;

/// Average milliseconds per generation, plus the final world
fn benchmark(world: &World, algorithm: Algorithm, generations: u32) -> (f64, World) {
    let start = Instant::now();
    let last = (0..generations).fold(world.clone(), |w, _| w.evolve_with(algorithm));
    let ms = start.elapsed().as_secs_f64() * 1000.0 / f64::from(generations.max(1));
    (ms, last)
}

struct SoupReport {
    population: usize,
    triple_ms: f64,
    tally_ms: f64,
    agree: bool,
}

fn run_soup(size: u32, seed: u64) -> SoupReport {
    let soup = random_soup(size, size, DENSITY, seed);
    let (triple_ms, triple_world) = benchmark(&soup, Algorithm::TripleEnumeration, GENERATIONS);
    let (tally_ms, tally_world) = benchmark(&soup, Algorithm::NeighborTally, GENERATIONS);
    SoupReport {
        population: soup.population(),
        triple_ms,
        tally_ms,
        agree: triple_world == tally_world,
    }
}

fn main() {
    println!("=== Sparse Life Strategy Benchmark ===\n");
    println!(
        "{SOUPS_PER_SIZE} soups per size, density {DENSITY}, {GENERATIONS} generations each\n"
    );

    println!("{:>8} {:>10} {:>12} {:>12} {:>10} {:>8}",
        "Size", "Avg pop", "Triple ms", "Tally ms", "Speedup", "Agree");
    println!("{:-<66}", "");

    let sizes = [4, 8, 12, 16, 24];
    let mut disagreements = 0;

    for size in sizes {
        let reports: Vec<SoupReport> = (0..SOUPS_PER_SIZE)
            .into_par_iter()
            .map(|seed| run_soup(size, seed))
            .collect();

        let n = reports.len() as f64;
        let population = reports.iter().map(|r| r.population as f64).sum::<f64>() / n;
        let triple_ms = reports.iter().map(|r| r.triple_ms).sum::<f64>() / n;
        let tally_ms = reports.iter().map(|r| r.tally_ms).sum::<f64>() / n;
        let agreeing = reports.iter().filter(|r| r.agree).count();
        disagreements += reports.len() - agreeing;

        let speedup_str = if tally_ms > 0.0 {
            format!("{:>9.1}x", triple_ms / tally_ms)
        } else {
            format!("{:>10}", "-")
        };

        println!(
            "{:>8} {:>10.1} {:>12.3} {:>12.3} {} {:>8}",
            format!("{}x{}", size, size),
            population,
            triple_ms,
            tally_ms,
            speedup_str,
            format!("{}/{}", agreeing, reports.len()),
        );
    }

    println!();
    if disagreements == 0 {
        println!("All soups evolved identically under both strategies.");
    } else {
        println!("WARNING: {disagreements} soups diverged between strategies.");
        std::process::exit(1);
    }
}
