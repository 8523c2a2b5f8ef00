// src/specs/talents.rs

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::core::sanitize::filter_description;
use crate::gamedata::{UnlockCondition, display_value, null_as_default};

pub const TITLE: &str = "Talents";
pub const NONE_FOUND: &str = "No talents found!";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Talent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<TalentCandidate>,
}

/// One unlock stage of a talent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentCandidate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unlock_condition: UnlockCondition,
    /// 0-based; printed 1-based.
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_potential_rank: i64,
}

impl TalentCandidate {
    pub fn summary(&self) -> String {
        format!(
            "{} - Lvl {} E{} Pot{} - ",
            self.name.as_deref().unwrap_or_default(),
            display_value(&self.unlock_condition.level),
            self.unlock_condition.phase_label(),
            self.required_potential_rank + 1,
        )
    }
}

/// Talents from a character-table entry. `null` or missing `talents` read as
/// "no talents". Candidates are read one at a time; a malformed one is
/// logged and skipped, and a talent left with no candidates is dropped.
pub fn talents_of(operator: &Value) -> Vec<Talent> {
    let Some(list) = operator.get("talents").and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .map(|talent| Talent { candidates: candidates_of(talent) })
        .filter(|talent| !talent.candidates.is_empty())
        .collect()
}

fn candidates_of(talent: &Value) -> Vec<TalentCandidate> {
    let Some(list) = talent.get("candidates").and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .filter_map(|c| {
            serde_json::from_value(c.clone())
                .inspect_err(|e| warn!("talent candidate is malformed: {e}"))
                .ok()
        })
        .collect()
}

/// Title line, then for each candidate stage a summary line followed by its
/// filtered description and a blank line.
pub fn format_talents(operator: &Value) -> Vec<String> {
    let talents = talents_of(operator);
    if talents.is_empty() {
        return vec![s!(TITLE), s!(NONE_FOUND)];
    }

    let mut lines = vec![s!(TITLE)];
    for stage in talents.iter().flat_map(|t| &t.candidates) {
        lines.push(stage.summary());
        lines.push(join!(" ", &filter_description(stage.description.as_deref().unwrap_or_default())));
        lines.push(s!());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_talents_gives_title_and_sentinel() {
        for op in [json!({}), json!({ "talents": [] }), json!({ "talents": null })] {
            assert_eq!(format_talents(&op), vec![TITLE, NONE_FOUND]);
        }
    }

    #[test]
    fn malformed_candidate_is_skipped() {
        let op = json!({ "talents": [
            { "candidates": [
                { "name": "Broken", "requiredPotentialRank": "high" },
                { "name": "Swift Strike", "description": "ATK +8%",
                  "unlockCondition": { "phase": 1, "level": 1 }, "requiredPotentialRank": null }
            ]},
            { "candidates": null },
            { "candidates": [{ "name": ["Broken", "too"] }] }
        ]});

        assert_eq!(talents_of(&op).len(), 1);
        assert_eq!(format_talents(&op), vec![TITLE, "Swift Strike - Lvl 1 E1 Pot1 - ", " ATK +8%", ""]);
    }

    #[test]
    fn each_stage_gets_summary_and_description() {
        let op = json!({ "talents": [
            { "candidates": [
                { "name": "Swift Strike", "description": "ATK <@ba.vup>+8%</>",
                  "unlockCondition": { "phase": 1, "level": 1 }, "requiredPotentialRank": 0 },
                { "name": "Swift Strike", "description": "ATK <@ba.vup>+10%</>",
                  "unlockCondition": { "phase": "PHASE_2", "level": 1 }, "requiredPotentialRank": 4 }
            ]},
            { "candidates": [
                { "name": "Angel", "description": null,
                  "unlockCondition": { "phase": 2, "level": 60 }, "requiredPotentialRank": 0 }
            ]}
        ]});

        let lines = format_talents(&op);
        assert_eq!(lines, vec![
            TITLE,
            "Swift Strike - Lvl 1 E1 Pot1 - ",
            " ATK +8%",
            "",
            "Swift Strike - Lvl 1 E2 Pot5 - ",
            " ATK +10%",
            "",
            "Angel - Lvl 60 E2 Pot1 - ",
            " ",
            "",
        ]);
    }
}
