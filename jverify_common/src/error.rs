//! Error types for the harness.
//!
//! Configuration and build errors are fatal and abort the run before any
//! test executes. Spawn and timeout errors are per-test: the run continues
//! and the affected test is counted as failed. Everything else the analyzer
//! can throw at us (missing verdict lines, malformed headers, garbage bytes)
//! is absorbed into the comparison model as empty strings and never becomes
//! an error.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while driving the verifier test suite.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A toolchain descriptor file (`build.sh` / `run.sh`) is missing or
    /// unreadable. Fatal: nothing can be resolved without it.
    #[error("Failed to read descriptor {path}: {source}")]
    Config {
        /// Path of the descriptor that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A compile step exited non-zero.
    #[error("Build step '{step}' failed with {status}:\n{stderr}")]
    Build {
        /// Source location the failing `javac` invocation covered.
        step: String,
        /// Exit status reported by the compiler process.
        status: ExitStatus,
        /// Captured compiler stderr.
        stderr: String,
    },

    /// A source or test directory could not be enumerated.
    #[error("Failed to list sources under {path}: {source}")]
    SourceList {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A child process could not be started at all.
    #[error("Failed to spawn {what}: {source}")]
    Spawn {
        /// Human-readable description of the command that failed to start.
        what: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A test's analyzer process outlived the configured bound.
    #[error("Test '{test_id}' timed out after {secs}s")]
    Timeout {
        /// Id of the test whose process was killed.
        test_id: String,
        /// Configured bound in seconds.
        secs: u64,
    },
}

impl HarnessError {
    /// Create a descriptor read error.
    pub fn config(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    /// Create a source enumeration error.
    pub fn source_list(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceList {
            path: path.into(),
            source,
        }
    }

    /// Create a spawn error.
    pub fn spawn(what: impl Into<String>, source: io::Error) -> Self {
        Self::Spawn {
            what: what.into(),
            source,
        }
    }
}
