//! Command line definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TripPlanner - AI-assisted trip itinerary planning
#[derive(Parser)]
#[command(name = "tripplanner", version, about = "AI-assisted trip itinerary planning")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the itinerary backend
    Serve {
        /// Port to listen on, overrides the config file
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Request an itinerary for a trip described in a JSON file
    Plan {
        /// TripRequest JSON file
        #[arg(short, long)]
        request: PathBuf,

        /// Backend base URL, overrides the config file
        #[arg(short, long)]
        backend: Option<String>,
    },

    /// Print the model prompt for a trip described in a JSON file
    Prompt {
        /// TripRequest JSON file
        #[arg(short, long)]
        request: PathBuf,
    },

    /// List the choices a trip request can use
    Options,
}
