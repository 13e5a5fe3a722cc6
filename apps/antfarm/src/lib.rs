//! antfarm — command-line front end.
//!
//! Reads a farm description, solves it, and prints the input followed by a
//! blank line and one line per turn.  The command-line surface lives here
//! rather than in `main.rs` so the whole pipeline can be driven from tests
//! with in-memory writers.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use af_core::{ReroutePolicy, SchedulePolicy, SolverConfig};
use af_io::{CsvPresenter, TextPresenter, load_farm_file, present};
use af_solve::{Solution, Solver};

// ── Command line ──────────────────────────────────────────────────────────────

/// Move every ant from ##start to ##end in as few turns as possible.
#[derive(Parser, Debug)]
#[command(name = "antfarm", version, about)]
pub struct Cli {
    /// Farm description file.
    pub file: PathBuf,

    /// Output format of the turn trace.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Do not echo the farm description before the moves.
    #[arg(short, long)]
    pub quiet: bool,

    /// Never move a blocked ant at start onto another path.
    #[arg(long)]
    pub no_reroute: bool,

    /// Extra rooms a reroute target may have while few ants remain at start.
    #[arg(long, value_name = "N", default_value_t = ReroutePolicy::default().detour_slack)]
    pub detour_slack: usize,

    /// Allow several ants through a direct start-end tunnel in one turn.
    #[arg(long)]
    pub no_direct_lock: bool,

    /// Print every evaluated path-set size with its turns and moves to stderr.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `L1-a L2-b`, one line per turn.
    Text,
    /// `turn,ant,room` rows.
    Csv,
}

impl Cli {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            schedule: SchedulePolicy {
                reroute: ReroutePolicy {
                    enabled:      !self.no_reroute,
                    detour_slack: self.detour_slack,
                },
                direct_path_lock: !self.no_direct_lock,
            },
        }
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Load, solve, and print.  The result goes to `out`; the optional summary
/// goes to `diag`.  Nothing is written to `out` unless solving succeeds.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, diag: &mut E) -> Result<()> {
    let farm = load_farm_file(&cli.file)
        .with_context(|| format!("cannot load {}", cli.file.display()))?;
    info!(
        file = %cli.file.display(),
        rooms = farm.graph.node_count(),
        ants = farm.agent_count,
        "farm loaded"
    );

    let solution = Solver::new(&farm.graph, cli.solver_config())
        .solve(farm.agent_count)
        .context("no schedule found")?;

    if cli.summary {
        write_summary(diag, &solution)?;
    }

    if !cli.quiet {
        writeln!(out, "{}", farm.source_text())?;
        writeln!(out)?;
    }
    match cli.format {
        Format::Text => present(&mut TextPresenter::new(&mut *out), &farm.graph, &solution.schedule)?,
        Format::Csv => present(&mut CsvPresenter::new(&mut *out)?, &farm.graph, &solution.schedule)?,
    }
    Ok(())
}

/// One line per candidate, largest set first; the winner is starred.
pub fn write_summary<E: Write>(diag: &mut E, solution: &Solution) -> Result<()> {
    for (i, c) in solution.candidates.iter().enumerate() {
        let mark = if i == solution.chosen { " *" } else { "" };
        writeln!(diag, "k={} turns={} moves={}{mark}", c.cardinality, c.turns, c.moves)?;
    }
    Ok(())
}
