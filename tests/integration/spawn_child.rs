#![cfg(unix)]

use std::{
    fs,
    path::Path,
    thread,
    time::{Duration, Instant},
};

use anyhow::{bail, Result};
use tempfile::tempdir;

use crate::common::{launcher_command, BINARY_PATH};

fn wait_for_file(path: &Path) -> Result<String> {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if let Ok(contents) = fs::read_to_string(path) {
            if contents.ends_with('\n') {
                return Ok(contents);
            }
        }
        thread::sleep(Duration::from_millis(50));
    }
    bail!("child never wrote {}", path.display())
}

#[test]
fn child_inherits_env_section_and_receives_arguments() -> Result<()> {
    if !Path::new("/bin/sh").exists() {
        eprintln!("Skipping spawn test because /bin/sh is missing");
        return Ok(());
    }

    let temp = tempdir()?;
    let out = temp.path().join("out.txt");
    let config = temp.path().join("launcher.ini");
    fs::write(
        &config,
        concat!(
            "[Env]\nINIRUN_MARK=from-ini\n\n",
            "[Run]\nFileName=/bin/sh\nArgs=-c \"echo $INIRUN_MARK %2 > %1\"\nArg2=default-word\n",
        ),
    )?;

    let status = launcher_command(Path::new(BINARY_PATH), Some(config.as_path()))
        .arg(&out)
        .status()?;

    assert!(status.success(), "launcher should exit cleanly: {status:?}");
    assert_eq!(wait_for_file(&out)?, "from-ini default-word\n");
    Ok(())
}
