use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use simplelog::LevelFilter;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "relations",
    about = "Closures and equivalence classes of binary relations",
    version
)]
pub struct Cli {
    /// Log level
    #[arg(long = "log-level", value_enum, default_value_t, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the closures and equivalence classes of a relation
    Analyze {
        /// Relation matrix, one row of 0 and 1 per line
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write the equivalence closure to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Count transitive relations by checking every relation
    Count {
        /// Sizes of the set
        #[arg(value_name = "N", default_values_t = [2, 3, 4])]
        sizes: Vec<usize>,
    },
    /// Show the relation encoded by the binary digits of a number
    Decode {
        #[arg(value_name = "NUM")]
        num: u64,

        /// Size of the set
        #[arg(value_name = "N")]
        size: usize,
    },
    /// Generate a random relation
    Random {
        /// Size of the set
        #[arg(value_name = "N")]
        size: usize,

        /// Probability that two elements are related
        #[arg(short, long, default_value_t = 0.5)]
        probability: f64,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the relation to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
