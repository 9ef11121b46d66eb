use std::path::PathBuf;
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use env_logger::Env;

use crate::config::Config;
use crate::report::build_report;

mod aggregate;
mod config;
mod csv_reader;
mod report;
mod transaction;
mod util;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Credit card activity export, overrides the configured path
    file: Option<PathBuf>,

    /// Config file path
    #[clap(long)]
    config: Option<PathBuf>,

    /// Maximum number of charges to list
    #[clap(long)]
    limit: Option<usize>,

    /// Length of the lookback window in days
    #[clap(long)]
    days: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::default(),
    };
    let config = config.with_overrides(cli.file, cli.days, cli.limit);

    let now = Local::now().naive_local();
    let report = build_report(&config, now)
        .with_context(|| format!("Unable to build report from {}", config.csv_path.display()))?;

    println!("{report}");
    Ok(())
}
