#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use jverify_common::{ToolchainConfig, VERIFIER_CLASS, analyzer_command, javac_command};

fn config() -> ToolchainConfig {
    ToolchainConfig {
        java_home_build: "/opt/jdk".to_string(),
        java_home_run: "/opt/jre".to_string(),
        apron_home_build: "/opt/apron-b".to_string(),
        apron_home_run: "/opt/apron-r".to_string(),
    }
}

#[test]
fn test_analyzer_command_layout() {
    let cmd = analyzer_command(Path::new("/work"), &config(), "Test1");

    assert_eq!(cmd.program, PathBuf::from("/opt/jre/java"));
    assert_eq!(cmd.args, vec![VERIFIER_CLASS.to_string(), "Test1".to_string()]);
}

#[test]
fn test_analyzer_command_classpath() {
    let cmd = analyzer_command(Path::new("/work"), &config(), "Test1");

    let classpath = &cmd
        .env
        .iter()
        .find(|(k, _)| k == "CLASSPATH")
        .expect("CLASSPATH set")
        .1;
    assert_eq!(
        classpath,
        ".:/work/soot-2.5.0.jar:/opt/apron-r/japron/apron.jar:/opt/apron-r/japron/gmp.jar:/work/bin"
    );
}

#[test]
fn test_analyzer_command_library_path_order() {
    let cmd = analyzer_command(Path::new("/work"), &config(), "Test1");

    let lib = &cmd
        .env
        .iter()
        .find(|(k, _)| k == "LD_LIBRARY_PATH")
        .expect("LD_LIBRARY_PATH set")
        .1;
    assert_eq!(
        lib,
        "/opt/apron-r/box:/opt/apron-r/octagons:/opt/apron-r/newpolka:\
         /opt/apron-r/apron:/opt/apron-r/japron:/opt/apron-r/japron/gmp"
    );
}

#[test]
fn test_analyzer_command_empty_toolchain_builds_invalid_path() {
    // Unresolved keys are not an error at construction time; they produce a
    // command that will fail to spawn later.
    let cmd = analyzer_command(Path::new("/work"), &ToolchainConfig::default(), "Test1");
    assert_eq!(cmd.program, PathBuf::from("/java"));
}

#[test]
fn test_display_is_shell_quoted() {
    let mut cmd = analyzer_command(Path::new("/work"), &config(), "Test1");
    cmd.args.push("has space".to_string());

    let line = cmd.display();
    assert!(line.contains("/opt/jre/java"));
    assert!(line.contains("'has space'"));
    assert!(line.starts_with("CLASSPATH="));
}

#[test]
fn test_javac_command_layout() {
    let sources = vec![PathBuf::from("/work/src/Helper.java")];
    let cmd = javac_command(Path::new("/work"), &config(), &sources);

    assert_eq!(cmd.program, PathBuf::from("/opt/jdk/bin/javac"));
    assert_eq!(
        cmd.args,
        vec!["-d", "bin", "/work/src/Helper.java"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
    let classpath = &cmd.env.iter().find(|(k, _)| k == "CLASSPATH").unwrap().1;
    assert_eq!(
        classpath,
        "bin/:/work/soot-2.5.0.jar:/opt/apron-b/apron.jar:/opt/apron-b/gmp.jar"
    );
}

#[cfg(debug_assertions)]
#[test]
#[should_panic]
fn test_analyzer_command_rejects_empty_id() {
    let _ = analyzer_command(Path::new("/work"), &config(), "");
}
