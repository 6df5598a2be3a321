use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// jverify - build and run the SAE verifier test suite
#[derive(Parser, Debug)]
#[command(name = "jverify")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Test ids to run; runs every discovered test when empty
    pub tests: Vec<String>,

    /// Harness root containing build.sh, run.sh, src/ and the soot archive
    #[arg(short = 'r', long, default_value = ".")]
    pub root: PathBuf,

    /// Per-test bound in seconds; unbounded when absent
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,
}

impl Args {
    /// The per-test wait bound, if one was requested.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
