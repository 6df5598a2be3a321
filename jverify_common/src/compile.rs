//! Build invoker: compiles the analyzer and the test programs into `bin/`.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::command::{BIN_DIR, RunCommand, SOOT_JAR};
use crate::config::ToolchainConfig;
use crate::error::HarnessError;

/// Source locations compiled, in order: top-level helpers, the analyzer
/// package, then the test programs.
pub const SOURCE_DIRS: [&str; 3] = ["src", "src/ch/ethz/sae", "src/test"];

/// Compile all sources under the fixed layout into `<root>/bin`.
///
/// Runs `javac` once per entry of [`SOURCE_DIRS`]; locations with no `.java`
/// files are skipped. Unlike the run step, a compiler process exiting
/// non-zero is fatal here: every downstream verdict would otherwise be
/// silently empty.
///
/// # Errors
/// [`HarnessError::Build`] on a non-zero compiler exit,
/// [`HarnessError::Spawn`] if `javac` cannot be started, and
/// [`HarnessError::SourceList`] if the output directory cannot be created.
pub fn build(root: &Path, config: &ToolchainConfig) -> Result<(), HarnessError> {
    tracing::info!("start building..");
    let bin = root.join(BIN_DIR);
    fs::create_dir_all(&bin).map_err(|e| HarnessError::source_list(&bin, e))?;

    for dir in SOURCE_DIRS {
        let sources = java_sources(&root.join(dir))?;
        if sources.is_empty() {
            tracing::debug!(dir, "no sources, skipping compile step");
            continue;
        }
        let cmd = javac_command(root, config, &sources);
        tracing::debug!(step = dir, command = %cmd.display(), "compiling");

        let output = cmd
            .to_command()
            .current_dir(root)
            .stdin(std::process::Stdio::null())
            .output()
            .map_err(|e| HarnessError::spawn(cmd.display(), e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::error!(step = dir, status = ?output.status, "javac failed:\n{stderr}");
            return Err(HarnessError::Build {
                step: dir.to_string(),
                status: output.status,
                stderr,
            });
        }
    }
    tracing::info!("finished building.");
    Ok(())
}

/// Build one `javac` invocation over an explicit source list.
///
/// Glob expansion is the harness's job since no shell is involved; the
/// caller supplies the already-enumerated files.
pub fn javac_command(root: &Path, config: &ToolchainConfig, sources: &[PathBuf]) -> RunCommand {
    let apron = &config.apron_home_build;
    let classpath = format!(
        "{}/:{}:{apron}/apron.jar:{apron}/gmp.jar",
        BIN_DIR,
        root.join(SOOT_JAR).display(),
    );

    let mut args = vec!["-d".to_string(), BIN_DIR.to_string()];
    args.extend(sources.iter().map(|p| p.display().to_string()));

    RunCommand {
        program: PathBuf::from(format!("{}/bin/javac", config.java_home_build)),
        args,
        env: vec![
            ("CLASSPATH".to_string(), classpath),
            ("LD_LIBRARY_PATH".to_string(), format!("{}/", root.display())),
        ],
    }
}

/// Enumerate the `.java` files directly under `dir`, sorted by path.
///
/// A missing directory yields an empty list, matching what a shell glob
/// over it would produce.
pub(crate) fn java_sources(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| HarnessError::source_list(dir, e.into()))?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().and_then(|s| s.to_str()) == Some("java")
        {
            sources.push(path.to_path_buf());
        }
    }
    sources.sort();
    Ok(sources)
}
