use std::{collections::BTreeMap, env};

/// Environment seen by expansion steps and handed to the child process.
///
/// Holds a snapshot of the launcher's own environment plus the variables
/// applied from the `[Env]` section. Applied variables shadow inherited ones
/// and are passed to the child at spawn time; the launcher's real
/// environment block is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnvironment {
    inherited: BTreeMap<String, String>,
    applied: BTreeMap<String, String>,
}

impl ProcessEnvironment {
    /// Snapshot the current process environment. Non-Unicode entries are skipped.
    pub fn capture() -> Self {
        let inherited = env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();
        Self {
            inherited,
            applied: BTreeMap::new(),
        }
    }

    /// Build from explicit variables instead of the real environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            inherited: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            applied: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        lookup(&self.applied, name).or_else(|| lookup(&self.inherited, name))
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(existing) = matching_key(&self.applied, name) {
            self.applied.remove(&existing);
        }
        self.applied.insert(name.to_string(), value.into());
    }

    /// Variables set through [`ProcessEnvironment::set`], for the child process.
    pub fn applied(&self) -> &BTreeMap<String, String> {
        &self.applied
    }
}

// Windows treats variable names case-insensitively.
fn matching_key(map: &BTreeMap<String, String>, name: &str) -> Option<String> {
    if map.contains_key(name) {
        return Some(name.to_string());
    }
    if cfg!(windows) {
        return map.keys().find(|key| key.eq_ignore_ascii_case(name)).cloned();
    }
    None
}

fn lookup<'a>(map: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    if let Some(value) = map.get(name) {
        return Some(value);
    }
    if cfg!(windows) {
        return map
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str());
    }
    None
}
