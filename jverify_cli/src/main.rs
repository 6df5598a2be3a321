//! jverify CLI
//!
//! Entry point for the verifier test harness. Resolves the toolchain
//! configuration, builds the analyzer and test programs, then runs the
//! analyzer against each selected test and reports expected-vs-actual
//! verdicts per axis.

mod args;

use std::process::ExitCode;

use clap::Parser;
use jverify_common::{
    ComparisonReport, HarnessError, Summary, ToolchainConfig, build, execute_test,
    load_test_cases,
};
use tracing::{error, info};

use args::Args;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            println!("{summary}");
            if summary.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("jverify: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Execute the whole pipeline: resolve, build, load, run, compare.
///
/// Configuration and build failures abort; spawn failures and timeouts are
/// reported per test and counted, and the run continues.
fn run(args: &Args) -> Result<Summary, HarnessError> {
    let config = ToolchainConfig::resolve(&args.root)?;
    build(&args.root, &config)?;

    let cases = load_test_cases(&args.root, &args.tests)?;
    info!(count = cases.len(), "executing tests");

    let mut summary = Summary::default();
    for case in &cases {
        match execute_test(&args.root, &config, case, args.timeout()) {
            Ok(result) => {
                let report = ComparisonReport::new(case, &result);
                summary.record(&report);
                println!("{report}");
            }
            Err(e @ (HarnessError::Spawn { .. } | HarnessError::Timeout { .. })) => {
                summary.record_error();
                println!("[{}]: {}", case.id, case.description);
                println!("\t[EE] {e}");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(summary)
}
