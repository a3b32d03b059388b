// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorcount CLI - counts furniture in ASCII floor plans.
//!
//! Reads a floor-plan text file, maps its rooms, and prints per-room and
//! total furniture counts to stdout. Any failure (missing file, unreadable
//! content, empty plan, no room labels) exits with code 1 and a message on
//! stderr.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use floorcount_core::{parse_floor_plan, Report};

/// Count chairs in floor plans
#[derive(Debug, Parser)]
#[command(name = "floorcount", version, about)]
struct Args {
    /// Path to the floor plan text file
    file_path: PathBuf,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    if !args.file_path.exists() {
        bail!("File {} does not exist", args.file_path.display());
    }

    let floor_plan = fs::read_to_string(&args.file_path)
        .with_context(|| format!("reading file {}", args.file_path.display()))?;

    let rooms = parse_floor_plan(&floor_plan).context("parsing floor plan")?;
    tracing::debug!(rooms = rooms.len(), "mapped floor plan");

    let report = Report::from_rooms(&rooms);
    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.render())
    }
}
