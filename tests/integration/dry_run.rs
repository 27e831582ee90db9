use std::{fs, path::Path};

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{fixture, launcher_command, run_dry, BINARY_PATH};

#[test]
fn scenario_resolves_env_defaults_and_placeholders() -> Result<()> {
    let temp = tempdir()?;
    let config = fixture("scenario.ini");
    let mut command = launcher_command(Path::new(BINARY_PATH), Some(config.as_path()));
    command
        .current_dir(temp.path())
        .env("INIRUN_TOOL", BINARY_PATH)
        .arg("first");

    let (output, payload) = run_dry(&mut command)?;

    assert!(
        output.status.success(),
        "dry run should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(payload["file_name"], BINARY_PATH);
    assert_eq!(payload["args"], "first fallback");
    let expected_data = temp.path().join("data");
    assert_eq!(
        payload["env"]["INIRUN_DATA"],
        expected_data.to_string_lossy().into_owned()
    );
    Ok(())
}

#[test]
fn passed_arguments_win_and_empty_ones_fall_back() -> Result<()> {
    let config = fixture("scenario.ini");

    let mut both = launcher_command(Path::new(BINARY_PATH), Some(config.as_path()));
    both.env("INIRUN_TOOL", BINARY_PATH).args(["first", "second"]);
    let (_, payload) = run_dry(&mut both)?;
    assert_eq!(payload["args"], "first second");

    let mut empty = launcher_command(Path::new(BINARY_PATH), Some(config.as_path()));
    empty.env("INIRUN_TOOL", BINARY_PATH).args(["first", ""]);
    let (_, payload) = run_dry(&mut empty)?;
    assert_eq!(payload["args"], "first fallback");
    Ok(())
}

#[test]
fn missing_target_warns_but_still_resolves() -> Result<()> {
    let config = fixture("scenario.ini");
    let mut command = launcher_command(Path::new(BINARY_PATH), Some(config.as_path()));
    command
        .env("INIRUN_TOOL", "/definitely/not/here")
        .arg("first");

    let (output, payload) = run_dry(&mut command)?;

    assert!(output.status.success());
    assert_eq!(payload["file_name"], "/definitely/not/here");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not find file /definitely/not/here"),
        "stderr: {stderr}"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn renamed_copy_reads_ini_next_to_itself() -> Result<()> {
    let temp = tempdir()?;
    let launcher = temp.path().join("tool-launcher");
    fs::copy(BINARY_PATH, &launcher)?;
    fs::write(
        temp.path().join("tool-launcher.ini"),
        format!(
            "[Run]\nFileName={}\nArgs=--name %1\n",
            launcher.display()
        ),
    )?;

    let mut command = launcher_command(&launcher, None);
    command.arg("given");
    let (output, payload) = run_dry(&mut command)?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(payload["args"], "--name given");
    Ok(())
}
