//! Construction of the analyzer run command.
//!
//! Purely string/path assembly: nothing here touches the process table, so
//! the exact invocation is unit-testable without a Java or APRON
//! installation. Execution happens in [`crate::exec`].

use std::path::{Path, PathBuf};

use crate::config::ToolchainConfig;

/// Analyzer dependency archive expected in the harness root.
pub const SOOT_JAR: &str = "soot-2.5.0.jar";
/// Entry point of the analyzer.
pub const VERIFIER_CLASS: &str = "ch.ethz.sae.Verifier";
/// Compiled-output directory, relative to the harness root.
pub const BIN_DIR: &str = "bin";

/// A fully assembled child-process invocation: program, argument list and
/// environment overrides. No shell is involved at any point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCommand {
    /// Executable to launch.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Environment variables set for the child.
    pub env: Vec<(String, String)>,
}

impl RunCommand {
    /// Render the invocation as a single human-readable line for logs and
    /// diagnostics. Never fed back to a shell.
    pub fn display(&self) -> String {
        let words = self
            .env
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .chain(std::iter::once(self.program.display().to_string()))
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>();
        shell_words::join(&words)
    }

    /// Materialize as a [`std::process::Command`], ready to spawn.
    pub fn to_command(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Build the invocation that runs the analyzer against one test.
///
/// The classpath lists the working directory, the soot archive, the two
/// japron archives and the compiled-output directory; `LD_LIBRARY_PATH`
/// covers the native APRON domain libraries. The runtime is
/// `<java_home_run>/java`, exactly as the run descriptor's environment
/// launches it.
#[contracts::debug_requires(!test_id.is_empty())]
pub fn analyzer_command(root: &Path, config: &ToolchainConfig, test_id: &str) -> RunCommand {
    let apron = &config.apron_home_run;
    let classpath = [
        ".".to_string(),
        root.join(SOOT_JAR).display().to_string(),
        format!("{apron}/japron/apron.jar"),
        format!("{apron}/japron/gmp.jar"),
        root.join(BIN_DIR).display().to_string(),
    ]
    .join(":");
    let library_path = ["box", "octagons", "newpolka", "apron", "japron", "japron/gmp"]
        .map(|sub| format!("{apron}/{sub}"))
        .join(":");

    RunCommand {
        program: PathBuf::from(format!("{}/java", config.java_home_run)),
        args: vec![VERIFIER_CLASS.to_string(), test_id.to_string()],
        env: vec![
            ("CLASSPATH".to_string(), classpath),
            ("LD_LIBRARY_PATH".to_string(), library_path),
        ],
    }
}
