use std::{fs, path::Path};

use anyhow::{Context, Result};
use tempfile::tempdir;

use crate::common::{fixture, launcher_command, BINARY_PATH};

fn run_failing(config: &Path, args: &[&str]) -> Result<String> {
    let output = launcher_command(Path::new(BINARY_PATH), Some(config))
        .args(args)
        .output()
        .context("failed to run launcher")?;
    assert_eq!(
        output.status.code(),
        Some(1),
        "launcher should exit with failure: {output:?}"
    );
    assert!(output.stdout.is_empty(), "nothing should reach stdout");
    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn missing_ini_file_is_reported() -> Result<()> {
    let temp = tempdir()?;
    let config = temp.path().join("absent.ini");

    let stderr = run_failing(&config, &[])?;

    assert!(stderr.contains("Cannot read ini file"), "stderr: {stderr}");
    assert!(stderr.contains("absent.ini"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_file_name_is_reported() -> Result<()> {
    let stderr = run_failing(&fixture("missing_file_name.ini"), &["first"])?;

    assert!(
        stderr.contains("Missing FileName= setting in the [Run] section"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn unresolved_placeholder_is_reported() -> Result<()> {
    let stderr = run_failing(&fixture("missing_argument.ini"), &["first"])?;

    assert!(
        stderr.contains("Argument %3 was not passed and default setting Arg3= was not found"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("missing_argument.ini"), "stderr: {stderr}");
    Ok(())
}

fn stderr_lines(stderr: &str) -> Vec<&str> {
    stderr.lines().filter(|line| !line.trim().is_empty()).collect()
}

#[test]
fn missing_ini_file_prints_a_single_line() -> Result<()> {
    let temp = tempdir()?;
    let config = temp.path().join("absent.ini");

    let stderr = run_failing(&config, &[])?;

    let lines = stderr_lines(&stderr);
    assert_eq!(lines.len(), 1, "stderr: {stderr}");
    assert!(lines[0].starts_with("Cannot read ini file"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr must not carry ANSI codes: {stderr}");
    Ok(())
}

#[test]
fn missing_target_advisory_prints_a_single_line() -> Result<()> {
    let temp = tempdir()?;
    let config = temp.path().join("launcher.ini");
    fs::write(&config, "[Run]\nFileName=/no/such/tool\n")?;

    let output = launcher_command(Path::new(BINARY_PATH), Some(config.as_path()))
        .env("INIRUN_DRY_RUN", "1")
        .output()
        .context("failed to run launcher")?;

    assert!(output.status.success(), "dry run should succeed: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr_lines(&stderr),
        vec!["Could not find file /no/such/tool"],
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn missing_target_then_spawn_failure_prints_one_line_each() -> Result<()> {
    let temp = tempdir()?;
    let config = temp.path().join("launcher.ini");
    fs::write(&config, "[Run]\nFileName=/no/such/tool\n")?;

    let stderr = run_failing(&config, &[])?;

    let lines = stderr_lines(&stderr);
    assert_eq!(lines.len(), 2, "stderr: {stderr}");
    assert_eq!(lines[0], "Could not find file /no/such/tool");
    assert!(lines[1].starts_with("Failed to start /no/such/tool"), "stderr: {stderr}");
    Ok(())
}
