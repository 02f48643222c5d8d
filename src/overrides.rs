//! Display-name overrides, keyed by canonical item name.
//!
//! An override only changes what is printed on the label. Entries are keyed
//! by name, not by queue entry, so every copy of a name shares one override.

use serde::Serialize;
use std::collections::BTreeMap;

/// Longest override accepted, in characters.
pub const MAX_OVERRIDE_CHARS: usize = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameOverrideStore {
    overrides: BTreeMap<String, String>,
}

impl NameOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override for `name`.
    ///
    /// The text is trimmed and capped at [`MAX_OVERRIDE_CHARS`]. Text that is
    /// empty after trimming removes the override. Returns the stored value.
    pub fn set_override(&mut self, name: &str, text: &str) -> Option<&str> {
        let capped: String = text.trim().chars().take(MAX_OVERRIDE_CHARS).collect();
        let capped = capped.trim_end();
        if capped.is_empty() {
            self.overrides.remove(name);
            return None;
        }
        self.overrides.insert(name.to_string(), capped.to_string());
        self.overrides.get(name).map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.overrides.get(name).map(String::as_str)
    }

    /// The name to print: the override if one is set, else `name` itself.
    pub fn display_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Drop the override for `name`, returning it.
    pub fn reset(&mut self, name: &str) -> Option<String> {
        self.overrides.remove(name)
    }

    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}
