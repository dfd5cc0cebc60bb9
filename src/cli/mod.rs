//! CLI module for the subway station registry

pub mod serve;

use clap::{Parser, Subcommand};

/// Subway Station Registry - admin-gated registry of subway stations
#[derive(Parser)]
#[command(name = "subway-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
