// src/specs/skills.rs
//! Skill section: per requested tier, an aligned metadata line and the
//! description with its blackboard placeholders filled in.
//!
//! Tiers are 1-based skill levels; 8, 9 and 10 are masteries 1–3 and are
//! labelled `Lv7 M1` .. `Lv7 M3`.

use serde_json::Value;

use super::blackboard::substitute;
use crate::config::consts::{
    INIT_SP_COL_WIDTH, MAX_SKILL_LEVEL, MAX_SKILL_TIER, SP_COST_COL_WIDTH, TIER_COL_WIDTH,
    TIER_SEPARATOR,
};
use crate::core::sanitize::filter_description;
use crate::gamedata::{SkillEntry, SkillLevel, SkillTable, display_value, skill_entry};

pub const TITLE: &str = "Operator Skills";
pub const JSON_FAILED: &str = "Skills: skill JSON failed to load!";
pub const NONE_FOUND: &str = "Skills: no skills found!";
pub const NO_TIER_DATA: &str = "No data for this level.";

pub fn tier_label(tier: u8) -> String {
    if (MAX_SKILL_LEVEL + 1..=MAX_SKILL_TIER).contains(&tier) {
        format!("Lv7 M{}", tier.abs_diff(MAX_SKILL_LEVEL))
    } else {
        format!("Lv{tier}")
    }
}

fn duration_text(duration: &Value) -> String {
    match duration {
        Value::Null => s!("-"),
        v if v.as_f64() == Some(-1.0) => s!("-"),
        v => display_value(v),
    }
}

/// `Lv7 M3         SP cost: 40       Initial SP: 20        Duration: 25.0`
pub fn metadata_line(tier: u8, level: &SkillLevel) -> String {
    let sp_cost = format!("SP cost: {}", display_value(&level.sp_data.sp_cost));
    let init_sp = format!("Initial SP: {}", display_value(&level.sp_data.init_sp));
    format!(
        "{:<tw$}{:<cw$}{:<iw$}Duration: {}",
        tier_label(tier),
        sp_cost,
        init_sp,
        duration_text(&level.duration),
        tw = TIER_COL_WIDTH,
        cw = SP_COST_COL_WIDTH,
        iw = INIT_SP_COL_WIDTH,
    )
}

/// Filtered description with placeholders resolved against this level's blackboard.
pub fn describe_level(level: &SkillLevel) -> String {
    let filtered = filter_description(level.description.as_deref().unwrap_or_default());
    substitute(&filtered, &level.blackboard)
}

fn format_skill(index: usize, entry: &SkillEntry, tiers: &[u8], lines: &mut Vec<String>) {
    let name = entry.levels.first().map(|l| l.name.as_str()).unwrap_or_default();
    lines.push(format!("Skill {index}: {name}"));

    for &tier in tiers {
        let level = usize::from(tier).checked_sub(1).and_then(|i| entry.levels.get(i));
        match level {
            Some(level) => {
                lines.push(metadata_line(tier, level));
                lines.push(join!(" ", &describe_level(level)));
            }
            None => lines.push(format!("{:<tw$}{NO_TIER_DATA}", tier_label(tier), tw = TIER_COL_WIDTH)),
        }

        // a blank line closes every tier block
        if tiers.len() > 1 {
            lines.push(s!(TIER_SEPARATOR));
        }
        lines.push(s!());
    }
}

/// Skills of a character-table entry, looked up in the skill table.
/// Skills missing from the table, or whose record is malformed, get a
/// one-line notice; the rest still render.
pub fn format_skills(operator: &Value, table: Option<&SkillTable>, tiers: &[u8]) -> Vec<String> {
    let Some(table) = table else {
        return vec![s!(JSON_FAILED)];
    };
    let skills = match operator.get("skills").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list,
        _ => return vec![s!(NONE_FOUND)],
    };

    let mut lines = vec![s!(TITLE)];
    for (i, skill) in skills.iter().enumerate() {
        let entry = skill
            .get("skillId")
            .and_then(Value::as_str)
            .and_then(|id| skill_entry(table, id));
        match entry {
            Some(entry) => format_skill(i + 1, &entry, tiers, &mut lines),
            None => lines.push(format!("Skill {}: could not locate this skill in the JSON...", i + 1)),
        }
    }
    lines
}
