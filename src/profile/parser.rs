//! Parser for profile-style `[Section]` / `key=value` text.

/// A single `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Entries gathered under one section name, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// First entry whose key matches `key` case-insensitively.
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| names_match(&entry.key, key))
    }

    fn push(&mut self, key: &str, value: &str) {
        if self.entry(key).is_some() {
            return;
        }
        self.entries.push(Entry {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
}

/// Parsed contents of a profile file.
///
/// Section and key names compare case-insensitively. The first definition of
/// a key wins, and a section header that appears again continues the earlier
/// section. Values are kept verbatim apart from surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDocument {
    sections: Vec<Section>,
}

impl ProfileDocument {
    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        let mut current: Option<usize> = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('[') {
                let name = header.split(']').next().unwrap_or_default().trim();
                let index = match sections.iter().position(|s| names_match(&s.name, name)) {
                    Some(index) => index,
                    None => {
                        sections.push(Section::new(name));
                        sections.len() - 1
                    }
                };
                current = Some(index);
                continue;
            }

            let Some(index) = current else {
                continue;
            };
            let (key, value) = match trimmed.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (trimmed, ""),
            };
            if key.is_empty() {
                continue;
            }
            sections[index].push(key, value);
        }

        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| names_match(&s.name, name))
    }

    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name.clone()).collect()
    }

    pub fn keys(&self, section: &str) -> Vec<String> {
        self.section(section)
            .map(|s| s.entries.iter().map(|e| e.key.clone()).collect())
            .unwrap_or_default()
    }

    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)
            .and_then(|s| s.entry(key))
            .map(|e| e.value.as_str())
    }
}

fn names_match(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }
    left.to_lowercase() == right.to_lowercase()
}
