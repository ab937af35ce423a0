//! Command-line driver: seeds a world, evolves it, prints each generation.
//!
//! Rendered worlds go to stdout; logs go to stderr and are filtered by
//! `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sparse_life::domain::random_soup;
use sparse_life::{Algorithm, Coordinate, Simulation, World, presets};

/// Conway's Game of Life on an unbounded plane.
#[derive(Parser, Debug)]
#[command(name = "sparse_life", version, about)]
#[command(group(ArgGroup::new("seed_world").args(["pattern", "file", "random"])))]
struct Args {
    /// Start from a named preset (see --list).
    #[arg(long, short)]
    pattern: Option<String>,

    /// Start from a text grid file: `O` live, `_` or `.` dead.
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Start from a random soup of the given size, e.g. 20x40.
    #[arg(long, value_parser = parse_size)]
    random: Option<(u32, u32)>,

    /// Chance that a soup cell starts alive.
    #[arg(long, default_value_t = 0.35)]
    density: f64,

    /// Seed for the random soup.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Top-left corner of the seeded pattern, as `row,col`.
    #[arg(long, value_parser = parse_origin, default_value = "1,1", allow_hyphen_values = true)]
    origin: Coordinate,

    /// Number of generations to evolve.
    #[arg(long, short, default_value_t = 1)]
    generations: u64,

    /// Evolution strategy: `triple` or `tally`.
    #[arg(long, short, default_value = "tally")]
    algorithm: Algorithm,

    /// Report the period of the seed world, searching up to this many generations.
    #[arg(long)]
    period: Option<u64>,

    /// List the preset patterns and evolution strategies, then exit.
    #[arg(long)]
    list: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows = rows.trim().parse().map_err(|e| format!("bad row count: {e}"))?;
    let cols = cols.trim().parse().map_err(|e| format!("bad column count: {e}"))?;
    Ok((rows, cols))
}

fn parse_origin(s: &str) -> Result<Coordinate, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok(Coordinate::new(row, col))
}

fn seed_world(args: &Args) -> Result<World> {
    if let Some(name) = &args.pattern {
        let pattern = presets::find(name)
            .with_context(|| format!("no preset named {name:?}; try --list"))?;
        return Ok(pattern.at(args.origin));
    }
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return World::parse_at(&text, args.origin)
            .with_context(|| format!("parsing {}", path.display()));
    }
    if let Some((rows, cols)) = args.random {
        let soup = random_soup(rows, cols, args.density, args.seed);
        return Ok(soup.translated(args.origin.row(), args.origin.col()));
    }
    bail!("nothing to simulate: pass --pattern, --file or --random")
}

/// Presets and strategies, one per line, as shown by `--list`
fn catalog() -> String {
    let mut out = String::from("Patterns:\n");
    for pattern in presets::all_patterns() {
        let (rows, cols) = pattern.size();
        out += &format!("  {:<12} {:>3}x{:<3} {}\n", pattern.name, rows, cols, pattern.description);
    }
    out += "Algorithms:\n";
    for algorithm in Algorithm::all() {
        out += &format!("  {:<12} {}\n", algorithm.name(), algorithm.description());
    }
    out
}

fn print_generation(sim: &Simulation) {
    println!("Generation {} (population {})", sim.generation, sim.world.population());
    if sim.world.is_empty() {
        println!("(empty)");
    } else {
        print!("{}", sim.world);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        print!("{}", catalog());
        return Ok(());
    }

    let world = seed_world(&args)?;
    info!(
        population = world.population(),
        algorithm = args.algorithm.name(),
        "seeded world"
    );
    let sim = Simulation::new(world).with_algorithm(args.algorithm);

    if let Some(max) = args.period {
        match sim.period(max) {
            Some(period) => println!("period {period}"),
            None => println!("no period within {max} generations"),
        }
        return Ok(());
    }

    let shown = usize::try_from(args.generations).map_or(usize::MAX, |n| n.saturating_add(1));
    sim.generations()
        .take(shown)
        .for_each(|s| {
            print_generation(&s);
            println!();
        });

    Ok(())
}
