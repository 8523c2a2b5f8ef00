// src/specs/stats.rs
//! Per-promotion stats from an operator's character-table entry.
//!
//! Max-level numbers come from the second attribute keyframe of each phase;
//! attack interval and deploy time from the first keyframe of phase 0.
//! Values are copied as-is, never coerced.

use serde_json::{Value, json};

use crate::operator::Stats;

pub const TITLE: &str = "Stats";
pub const NONE_FOUND: &str = "No stats found!";

/// Tier labels in phase order; truncated to the phases present.
pub const TIERS: [&str; 3] = ["ne", "e1", "e2"];

/// Key template (`$` = tier label) → field in the keyframe data.
const ATTRS: [(&str, &str); 6] = [
    ("max_atk$", "atk"),
    ("max_def$", "def"),
    ("max_hp$", "maxHp"),
    ("$_arts", "magicResistance"),
    ("$_block", "blockCnt"),
    ("$_cost", "cost"),
];

pub const ATTACK_INTERVAL: &str = "atk_int";
pub const DEPLOY_TIME: &str = "deploy_time";

pub fn stat_key(template: &str, tier: &str) -> String {
    template.replace('$', tier)
}

/// Empty when the entry lacks `phases[0].attributesKeyFrames[0].data`,
/// or when any present phase lacks its max-level keyframe.
pub fn extract_stats(operator: &Value) -> Stats {
    let Some(phases) = operator.get("phases").and_then(Value::as_array) else {
        return Stats::new();
    };
    let Some(base) = phases.first().and_then(|p| p.pointer("/attributesKeyFrames/0/data")) else {
        return Stats::new();
    };

    let mut stats = Stats::new();
    for (phase, tier) in phases.iter().zip(TIERS) {
        let Some(max) = phase.pointer("/attributesKeyFrames/1/data") else {
            return Stats::new();
        };
        for (template, field) in ATTRS {
            if let Some(v) = max.get(field) {
                stats.insert(stat_key(template, tier), v.clone());
            }
        }
    }

    let scalar = |field: &str| base.get(field).cloned().unwrap_or_else(|| json!(-1));
    stats.insert(s!(ATTACK_INTERVAL), scalar("baseAttackTime"));
    stats.insert(s!(DEPLOY_TIME), scalar("respawnTime"));
    stats
}

/// Report lines: one per tier, then interval and deploy time.
pub fn format_stats(stats: &Stats) -> Vec<String> {
    if stats.is_empty() {
        return vec![s!(TITLE), s!(NONE_FOUND)];
    }

    let get = |key: &str| stats.get(key).map(crate::gamedata::display_value).unwrap_or_else(|| s!("-"));

    let mut lines = vec![s!(TITLE)];
    for (i, tier) in TIERS.iter().enumerate() {
        if !stats.contains_key(&stat_key("max_atk$", tier)) { continue; }
        lines.push(format!(
            "E{i}  ATK: {}  DEF: {}  HP: {}  RES: {}  Block: {}  Cost: {}",
            get(&stat_key("max_atk$", tier)),
            get(&stat_key("max_def$", tier)),
            get(&stat_key("max_hp$", tier)),
            get(&stat_key("$_arts", tier)),
            get(&stat_key("$_block", tier)),
            get(&stat_key("$_cost", tier)),
        ));
    }
    lines.push(format!(
        "Attack interval: {}  Deploy time: {}",
        get(ATTACK_INTERVAL),
        get(DEPLOY_TIME)
    ));
    lines
}
