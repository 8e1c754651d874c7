//! Command-line interface for solving a tileset onto a grid

use crate::algorithm::executor::{SolveStatus, Solver};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAX_BACKTRACKS, DEFAULT_MAX_STEPS, DEFAULT_WIDTH,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::prefill::{CellPin, PrefillData};
use crate::io::progress::ProgressManager;
use crate::io::render::render_grid;
use crate::io::tileset::load_tileset;
use crate::spatial::tiles::TileSet;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Fill a grid with tiles using wave function collapse"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// JSON tileset to solve with
    #[arg(value_name = "TILESET")]
    pub tileset: PathBuf,

    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum steps per grid
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_STEPS)]
    pub steps: usize,

    /// Contradictions each grid may recover from
    #[arg(short, long, default_value_t = DEFAULT_MAX_BACKTRACKS)]
    pub backtracks: usize,

    /// Fix a cell before solving, as X,Y,NAME (repeatable)
    #[arg(short, long = "pin", value_name = "X,Y,NAME")]
    pub pins: Vec<CellPin>,

    /// Number of grids to generate; seeded runs use consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the resolved tileset before solving
    #[arg(long)]
    pub show_tileset: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed for the run at `index`
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }
}

/// Outcome of a single grid generation
pub struct RunResult {
    /// Seed the run used, if any
    pub seed: Option<u64>,
    /// Final solver state
    pub solver: Solver,
}

/// Orchestrates loading, pinning, solving, and printing
pub struct Runner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the tileset, generate every requested grid, and print them
    ///
    /// # Errors
    ///
    /// Returns an error if the tileset cannot be loaded, a pin is invalid, or
    /// a grid turns out unsolvable
    // Allow print for the generated grids and tileset listing
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter("count", &0, &"must be at least 1"));
        }

        let tileset = Arc::new(load_tileset(&self.cli.tileset)?);
        info!(
            "Loaded {} tiles from {}",
            tileset.len(),
            self.cli.tileset.display()
        );

        if self.cli.show_tileset {
            print!("{tileset}");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut results = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            results.push(self.run(index, Arc::clone(&tileset))?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let mut failure = None;
        for result in &results {
            if let Some(seed) = result.seed {
                println!("seed {seed}");
            }
            println!("{}", render_grid(result.solver.grid(), &tileset));

            if result.solver.has_failed() && failure.is_none() {
                let stats = result.solver.stats();
                failure = Some(AlgorithmError::Unsolvable {
                    steps: stats.steps,
                    backtracks: stats.backtracks,
                });
            }
        }

        failure.map_or(Ok(()), Err)
    }

    /// Generate one grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions or a pin are invalid
    pub fn run(&mut self, index: usize, tileset: Arc<TileSet>) -> Result<RunResult> {
        let seed = self.cli.seed_for(index);
        let mut solver = Solver::initialize(self.cli.width, self.cli.height, seed, tileset)?;

        PrefillData::new(self.cli.pins.iter().cloned()).apply(&mut solver)?;

        let cells = solver.grid().len();
        let label = seed.map_or_else(|| format!("run {}", index + 1), |seed| format!("seed {seed}"));

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_run(index, &label, cells);
        }

        let status = match self.progress_manager.as_mut() {
            Some(pm) => solver.solve_with(self.cli.steps, self.cli.backtracks, |solver| {
                pm.update_run(index, solver.grid().collapsed_count(), solver.stats());
            }),
            None => solver.solve(self.cli.steps, self.cli.backtracks),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_run(index, status == SolveStatus::Collapsed);
        }

        let stats = solver.stats();
        info!(
            "{label}: {status:?} after {} steps, {} contradictions, {} backtracks",
            stats.steps, stats.contradictions, stats.backtracks
        );

        Ok(RunResult { seed, solver })
    }
}
