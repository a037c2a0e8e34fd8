use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "greenhouse-dss",
    version,
    about = "Rule-based greenhouse decision support simulator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of hourly intervals to simulate
    #[arg(short = 'n', long)]
    pub intervals: Option<u32>,

    /// Seed for reproducible sensor readings
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Report output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Browse the report in an interactive terminal view
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the simulation and print the report (default)
    Run,
    /// Verify the critical flag is raised after sustained alerts
    Check,
    /// Interactively write a config file
    Init,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
