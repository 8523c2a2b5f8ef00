// src/operator.rs

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::resources::Resources;
use crate::core::sanitize::title_case;

/// Tier-qualified stat name → value as found in the character table.
pub type Stats = BTreeMap<String, Value>;

/// Named report sections, in the order they were first added.
/// Adding to an existing name appends; nothing is ever overwritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, Vec<String>)>,
}

impl Properties {
    pub fn append<I>(&mut self, name: &str, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => existing.extend(lines),
            None => self.entries.push((name.to_string(), lines.into_iter().collect())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, lines)| lines.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(n, l)| (n.as_str(), l.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Operator {
    pub name: String,
    /// Star count, 1..=6.
    pub rarity: usize,
    pub profession: String,
    pub description: Vec<String>,
    pub tags: Vec<String>,
    pub stats: Stats,
    pub properties: Properties,
}

impl Operator {
    pub fn new(
        name: impl Into<String>,
        rarity: usize,
        profession: impl Into<String>,
        description: Vec<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rarity,
            profession: profession.into(),
            description,
            tags,
            stats: Stats::new(),
            properties: Properties::default(),
        }
    }

    pub fn has_stats(&self) -> bool {
        !self.stats.is_empty()
    }

    /// Tags on one line, each followed by a five-space gap.
    pub fn formatted_tags(&self) -> String {
        self.tags.iter().map(|t| format!("{t}     ")).collect()
    }
}

/// `"ch'en"` / `"silver-ash"` → title-cased display name, then mapped
/// through the character-table name replacements.
pub fn display_name(identifier: &str, resources: &Resources) -> String {
    let formatted = title_case(&identifier.replace('-', " "));
    resources
        .json_names
        .get(&formatted)
        .cloned()
        .unwrap_or(formatted)
}

/// Page slug for the operator URL.
pub fn page_slug(identifier: &str, resources: &Resources) -> String {
    let lowered = identifier.to_lowercase();
    resources
        .url_names
        .get(&lowered)
        .cloned()
        .unwrap_or(lowered)
}
