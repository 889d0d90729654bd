//! Console runner.
//!
//! Reads `"<player> <pit>"` lines from stdin and prints the feedback for
//! each. Logs go to stderr, filtered by `RUST_LOG`.
//!
//! Configuration is read from `mancala.toml` in the working directory, or
//! from the path in `MANCALA_CONFIG`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use mancala::session::{Session, SessionConfig};

const CONFIG_ENV: &str = "MANCALA_CONFIG";
const DEFAULT_CONFIG: &str = "mancala.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config_path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = SessionConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let session = Session::from_config(config);
    tracing::info!(
        persist = session.config().persist,
        save_path = %session.config().save_path.display(),
        "starting session"
    );

    run(session)
}

fn run(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    // Show the board before the first move.
    print_feedback(&mut stdout, &session.handle("", ""))?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        print_feedback(&mut stdout, &session.handle_line(&line))?;
    }

    Ok(())
}

fn print_feedback(out: &mut impl Write, feedback: &[String]) -> Result<()> {
    for message in feedback {
        writeln!(out, "{message}")?;
    }
    out.flush()?;
    Ok(())
}
