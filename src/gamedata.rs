// src/gamedata.rs
//! Game-data JSON resources and their loader.
//!
//! The character table stays untyped (`serde_json::Value`): stats are copied
//! out exactly as the JSON carries them. The skill table is kept untyped too
//! and each record is read on lookup, so one malformed skill cannot take the
//! whole table down. The other tables are typed; missing and `null` fields
//! read as their defaults.
//!
//! Each table is fetched at most once per run, sequentially, and only when a
//! requested section needs it. A failed fetch is logged and becomes `None`;
//! the section that needed it renders its own "failed to load" line.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{options::Sections, resources::ResourceUrls};
use crate::core::Fetch;
use crate::error::ScrapeError;

/// Character id → operator data. Ordered so name lookups are deterministic.
pub type CharacterTable = BTreeMap<String, Value>;

/// Skill id → raw skill record. See [`skill_entry`].
pub type SkillTable = HashMap<String, Value>;

/// Buff id → English base-skill name and description.
pub type RiicTable = HashMap<String, RiicEntry>;

/// Field deserializer that reads `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub levels: Vec<SkillLevel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLevel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sp_data: SpData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blackboard: Vec<BlackboardEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpData {
    #[serde(default)]
    pub sp_cost: Value,
    #[serde(default)]
    pub init_sp: Value,
}

/// One named number a skill description can refer to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlackboardEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl BlackboardEntry {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value: Some(value) }
    }
}

/// Promotion phase and level needed to unlock a talent or base skill.
/// `phase` is a number in older tables and `"PHASE_<n>"` in newer ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnlockCondition {
    #[serde(default)]
    pub phase: Value,
    #[serde(default)]
    pub level: Value,
}

impl UnlockCondition {
    /// Phase digit as printed after `E`.
    pub fn phase_label(&self) -> String {
        match &self.phase {
            Value::String(s) => s.strip_prefix("PHASE_").unwrap_or(s).to_string(),
            other => display_value(other),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingData {
    #[serde(default)]
    pub chars: HashMap<String, BuildingChar>,
    #[serde(default)]
    pub buffs: HashMap<String, BuildingBuff>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingChar {
    #[serde(default, deserialize_with = "null_as_default")]
    pub buff_char: Vec<BuffGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub buff_data: Vec<BuffRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffRef {
    pub buff_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cond: UnlockCondition,
}

/// Buff metadata from the (Chinese) building table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingBuff {
    #[serde(default, deserialize_with = "null_as_default")]
    pub buff_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiicEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

/// Typed view of one skill-table record. A record that does not have the
/// skill shape is logged and reads as missing.
pub fn skill_entry(table: &SkillTable, id: &str) -> Option<SkillEntry> {
    let raw = table.get(id)?;
    serde_json::from_value(raw.clone())
        .inspect_err(|e| warn!("skill {id} is malformed: {e}"))
        .ok()
}

/// The operator's row in the character table.
#[derive(Debug, Clone, Copy)]
pub struct OperatorEntry<'a> {
    pub key: &'a str,
    pub data: &'a Value,
}

/// Find an operator by display name (case-insensitive).
pub fn find_operator<'a>(table: &'a CharacterTable, name: &str) -> Option<OperatorEntry<'a>> {
    let wanted = name.to_lowercase();
    table
        .iter()
        .find(|(_, data)| {
            data.get("name")
                .and_then(Value::as_str)
                .is_some_and(|n| n.to_lowercase() == wanted)
        })
        .map(|(key, data)| OperatorEntry { key, data })
}

/// JSON scalars as the report prints them: strings bare, everything else as JSON text.
pub fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Every resource a report run may need. Fields stay `None` when the
/// resource was not requested or failed to load.
#[derive(Debug, Default)]
pub struct GameData {
    pub characters: Option<CharacterTable>,
    pub skills: Option<SkillTable>,
    pub building: Option<BuildingData>,
    pub riic: Option<RiicTable>,
}

impl GameData {
    pub fn load(fetcher: &dyn Fetch, urls: &ResourceUrls, sections: &Sections) -> Self {
        let mut data = GameData::default();
        if sections.needs_character_table() {
            data.characters = fetch_json(fetcher, &urls.characters, "character table");
        }
        if sections.skills {
            data.skills = fetch_json(fetcher, &urls.skills, "skill table");
        }
        if sections.base {
            data.building = fetch_json(fetcher, &urls.base_skills, "building table");
            data.riic = fetch_json(fetcher, &urls.riic, "riic table");
        }
        data
    }
}

fn fetch_json<T: DeserializeOwned>(fetcher: &dyn Fetch, url: &str, label: &str) -> Option<T> {
    let parsed = fetcher
        .get(url)
        .and_then(|body| serde_json::from_str::<T>(&body).map_err(ScrapeError::from));
    match parsed {
        Ok(v) => {
            info!("loaded {label}");
            Some(v)
        }
        Err(e) => {
            warn!("{label} failed to load from {url}: {e}");
            None
        }
    }
}
