//! Toolchain configuration, resolved once per harness run.
//!
//! The build and run environments are described by two shell-script
//! descriptors (`build.sh` and `run.sh` in the harness root). Only their
//! `JAVA_HOME*=...` and `APRON_HOME*=...` assignment lines matter; the rest
//! of each script is opaque to the harness.

use std::fs;
use std::path::Path;

use crate::error::HarnessError;

/// Descriptor file describing the build environment.
pub const BUILD_DESCRIPTOR: &str = "build.sh";
/// Descriptor file describing the run environment.
pub const RUN_DESCRIPTOR: &str = "run.sh";

/// Resolved toolchain locations for building and running.
///
/// Immutable after resolution; threaded by reference into the build invoker
/// and the command builder. A key absent from its descriptor leaves the
/// corresponding field empty, which later surfaces as an invalid command
/// rather than a resolution error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolchainConfig {
    /// `JAVA_HOME` from the build descriptor.
    pub java_home_build: String,
    /// `JAVA_HOME` from the run descriptor.
    pub java_home_run: String,
    /// `APRON_HOME` from the build descriptor.
    pub apron_home_build: String,
    /// `APRON_HOME` from the run descriptor.
    pub apron_home_run: String,
}

impl ToolchainConfig {
    /// Resolve the configuration from `build.sh` and `run.sh` under `root`.
    ///
    /// # Errors
    /// Returns [`HarnessError::Config`] if either descriptor cannot be read.
    pub fn resolve(root: &Path) -> Result<Self, HarnessError> {
        Self::from_descriptors(
            &root.join(BUILD_DESCRIPTOR),
            &root.join(RUN_DESCRIPTOR),
        )
    }

    /// Resolve the configuration from explicit descriptor paths.
    ///
    /// # Errors
    /// Returns [`HarnessError::Config`] if either descriptor cannot be read.
    pub fn from_descriptors(build: &Path, run: &Path) -> Result<Self, HarnessError> {
        let (java_home_build, apron_home_build) = read_descriptor(build)?;
        let (java_home_run, apron_home_run) = read_descriptor(run)?;

        let config = Self {
            java_home_build,
            java_home_run,
            apron_home_build,
            apron_home_run,
        };
        tracing::debug!(?config, "resolved toolchain configuration");
        Ok(config)
    }
}

/// Scan one descriptor for its `JAVA_HOME` and `APRON_HOME` values.
///
/// A line contributes iff the text before its first `=` starts with one of
/// the two recognized prefixes; the value is everything after that `=`,
/// right-trimmed. Later assignments overwrite earlier ones, matching shell
/// semantics. Malformed bytes are decoded lossily.
fn read_descriptor(path: &Path) -> Result<(String, String), HarnessError> {
    let bytes = fs::read(path).map_err(|e| HarnessError::config(path, e))?;
    let text = String::from_utf8_lossy(&bytes);

    let mut java_home = String::new();
    let mut apron_home = String::new();
    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.starts_with("JAVA_HOME") {
            java_home = value.trim_end().to_string();
        } else if key.starts_with("APRON_HOME") {
            apron_home = value.trim_end().to_string();
        }
    }
    Ok((java_home, apron_home))
}
