//! Pkgstat CLI - Debian Contents manifest statistics
//!
//! Exit codes: 0 on success, 1 when the manifest cannot be fetched or read,
//! 3 when the downloaded manifest cannot be cleaned up, and clap's usual 2
//! for usage errors such as an unknown architecture.

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use pkgstat::ops::{format_rankings, package_stats, StatsError, StatsOptions};
use pkgstat::sources::{FileSource, MirrorSource};

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("pkgstat=debug")
    } else {
        EnvFilter::new("pkgstat=info")
    };

    // Rankings go to stdout; keep logs out of the way on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli) {
        let code = exit_code(&e);
        eprintln!("error: {:#}", e);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // clap requires the architecture unless --completions was given.
    let Some(arch) = cli.arch else {
        return Ok(());
    };

    let opts = StatsOptions {
        arch,
        top: cli.top,
        keep: cli.keep,
    };

    let rankings = match cli.input {
        Some(path) => package_stats(&FileSource::new(path), &opts)?,
        None => package_stats(&MirrorSource::new(cli.mirror), &opts)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
    } else {
        print!("{}", format_rankings(&rankings));
    }

    Ok(())
}

/// Map a run failure to its exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StatsError>() {
        Some(StatsError::Cleanup(_)) => 3,
        _ => 1,
    }
}
