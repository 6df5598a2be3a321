//! Shared library for the jverify harness.
//!
//! This crate provides toolchain configuration, analyzer command
//! construction, build invocation, test-case loading, execution and
//! reporting for the SAE verifier test suite. The `jverify_cli` binary is a
//! thin orchestrator over these pieces.

mod command;
mod compile;
mod config;
mod error;
mod exec;
mod report;
mod test_case;
mod verdict;

pub use crate::command::*;
pub use crate::compile::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::exec::*;
pub use crate::report::*;
pub use crate::test_case::*;
pub use crate::verdict::*;
