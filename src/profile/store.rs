use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::ProfileDocument;
use crate::lib::errors::LaunchError;

/// Handle to a profile file on disk.
///
/// Every query reads the file afresh; no handle is kept open between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFile {
    path: PathBuf,
}

impl ProfileFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file.
    pub fn load(&self) -> Result<ProfileDocument, LaunchError> {
        let bytes = fs::read(&self.path).map_err(|err| {
            debug!(
                target: "inirun::profile",
                path = %self.path.display(),
                reason = %err,
                "Failed to read ini file"
            );
            LaunchError::config_access(&self.path, err)
        })?;
        Ok(ProfileDocument::parse(&decode(&bytes)))
    }

    /// Names of every section in the file.
    pub fn sections(&self) -> Result<Vec<String>, LaunchError> {
        Ok(self.load()?.section_names())
    }

    /// Keys defined under `section`; empty when the section does not exist.
    pub fn keys(&self, section: &str) -> Result<Vec<String>, LaunchError> {
        let keys = self.load()?.keys(section);
        debug!(
            target: "inirun::profile",
            section,
            count = keys.len(),
            "Enumerated section keys"
        );
        Ok(keys)
    }

    /// Configured value of `section.key`, or `default` when it is not defined.
    ///
    /// A `None` default means "no default": a miss then yields `None`.
    pub fn get_string(
        &self,
        section: &str,
        key: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, LaunchError> {
        let document = self.load()?;
        let found = document.value(section, key);
        debug!(
            target: "inirun::profile",
            section,
            key,
            found = found.is_some(),
            "Looked up ini value"
        );
        Ok(found.or(default).map(str::to_string))
    }
}

/// Decode file bytes, honouring UTF-8 and UTF-16 byte order marks.
fn decode(bytes: &[u8]) -> String {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn decode_utf16(bytes: &[u8], read_unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| read_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
