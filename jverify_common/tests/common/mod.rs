#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a harness root with descriptor files pointing the build toolchain
/// at `java_build` and the run toolchain at `java_run`.
pub fn harness_root(java_build: &str, java_run: &str) -> TempDir {
    let dir = TempDir::new().expect("temp harness root");
    fs::write(
        dir.path().join("build.sh"),
        format!("#!/bin/sh\nJAVA_HOME={java_build}\nAPRON_HOME=/opt/apron-build\n"),
    )
    .expect("write build.sh");
    fs::write(
        dir.path().join("run.sh"),
        format!("#!/bin/sh\nJAVA_HOME={java_run}\nAPRON_HOME=/opt/apron-run\n"),
    )
    .expect("write run.sh");
    dir
}

/// Write a test source with the standard 3-line header under
/// `<root>/src/test/<id>.java`.
pub fn write_test_source(root: &Path, id: &str, descr: &str, np: &str, oob: &str) -> PathBuf {
    let dir = root.join("src/test");
    fs::create_dir_all(&dir).expect("create test dir");
    let path = dir.join(format!("{id}.java"));
    fs::write(
        &path,
        format!("// {descr}\n// {np}\n// {oob}\npublic class {id} {{}}\n"),
    )
    .expect("write test source");
    path
}

/// Drop an executable shell script at `path` (unix only).
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create script dir");
    }
    fs::write(path, format!("#!/bin/sh\n{body}")).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
}

/// Install a fake `java` under its own home directory and return that home.
/// The script ignores its arguments and prints `stdout` verbatim.
#[cfg(unix)]
pub fn fake_java_home(dir: &Path, stdout: &str) -> PathBuf {
    let home = dir.join("jdk-run");
    write_script(&home.join("java"), &format!("printf '%s' '{stdout}'\n"));
    home
}
