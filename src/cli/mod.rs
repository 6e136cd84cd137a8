//! CLI for the bed occupancy API

pub mod serve;

use clap::{Parser, Subcommand};

/// Length-of-stay prediction and bed availability over HTTP
#[derive(Parser)]
#[command(name = "bed-occupancy-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
