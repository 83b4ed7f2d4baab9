use std::path::PathBuf;

use clap::Parser;

/// Build transient-data squashing hints for a batch of transactions.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about)]
pub struct Args {
    /// JSON file holding the side effects of each transaction in the batch.
    pub input: PathBuf,

    /// Write the report to this file instead of stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Check the produced hints the way the reset circuit would.
    #[clap(long)]
    pub validate: bool,

    /// Apply the hints and report the side effects that survive, together
    /// with the resulting transaction hash. Implies `--validate`.
    #[clap(long)]
    pub squash: bool,

    /// Number of worker threads. Defaults to one per logical core.
    #[clap(long, value_parser(clap::value_parser!(u16).range(1..)))]
    pub threads: Option<u16>,
}

/// What to do with each transaction once its hints are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub validate: bool,
    pub squash: bool,
}

impl Args {
    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions {
            validate: self.validate || self.squash,
            squash: self.squash,
        }
    }
}
