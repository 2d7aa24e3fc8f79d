pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::sampler::DEFAULT_SAMPLE_SIZE;
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, IntegerPolicy};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "puzzle-sampler")]
#[command(about = "Sample random chess puzzles from a CSV dump into a JSON file")]
pub struct CliConfig {
    /// Puzzle CSV file to sample from
    #[arg(long, env = "PUZZLE_INPUT", default_value = "lichess_db_puzzle.csv")]
    pub input: String,

    /// JSON file to write
    #[arg(long, env = "PUZZLE_OUTPUT", default_value = "chess_puzzles.json")]
    pub output: String,

    /// How many puzzles to include
    #[arg(short = 'n', long, env = "PUZZLE_COUNT", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub count: usize,

    /// Seed for a reproducible sample
    #[arg(long, env = "PUZZLE_SEED")]
    pub seed: Option<u64>,

    /// Treat the first line as data instead of a header
    #[arg(long)]
    pub no_headers: bool,

    /// Write null for non-integer ratings and play counts instead of failing
    #[arg(long)]
    pub lenient_integers: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn sample_size(&self) -> usize {
        self.count
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn has_headers(&self) -> bool {
        !self.no_headers
    }

    fn integer_policy(&self) -> IntegerPolicy {
        if self.lenient_integers {
            IntegerPolicy::Null
        } else {
            IntegerPolicy::Fail
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_distinct_paths(&self.input, &self.output)?;
        validation::validate_positive_number("count", self.count, 1)?;
        Ok(())
    }
}
