//! `antfarm` binary entry point.
//!
//! Logs go to stderr through `tracing`; set `RUST_LOG=debug` to see the
//! candidate search.  Stdout carries only the result.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use antfarm::{Cli, run};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let mut out = BufWriter::new(io::stdout().lock());
    let result = run(&cli, &mut out, &mut io::stderr())
        .and_then(|()| out.flush().context("cannot write output"));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
