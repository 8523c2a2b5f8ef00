// src/specs/blackboard.rs
//! Placeholder substitution for skill descriptions.
//!
//! Descriptions reference blackboard values as `{key}` or `{key:0%}` /
//! `{key:0.0%}`, optionally with a leading `-` (`{-key:0%}`). Keys are
//! letters, digits, `_`, `.`, `@`, `[` and `]`, and match case-insensitively.
//! A `:` suffix must end in `%`; `{key:0}` is not a placeholder.
//!
//! For each placeholder the blackboard is scanned in order and the **first**
//! entry with a matching key wins; later duplicates are never consulted.
//! Every literal occurrence of that placeholder is then replaced. A
//! placeholder with no matching key (or whose first match has no value) is
//! left as-is.
//!
//! Numbers print as `abs(trunc(value * 100))%` for percent placeholders and
//! `abs(trunc(value))` otherwise. The truncation is plain `f64` arithmetic,
//! so `0.29` renders as `28%`.

use std::sync::LazyLock;

use regex::Regex;

use crate::gamedata::BlackboardEntry;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{-?([A-Za-z0-9_.@\[\]]+)(:[0-9.]*%)?\}").expect("placeholder regex")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Full text including braces, e.g. `{-atk_scale:0%}`.
    pub raw: &'a str,
    /// Lower-cased key.
    pub key: String,
    pub percent: bool,
}

/// Placeholders in order of appearance (repeats included).
pub fn placeholders(description: &str) -> Vec<Placeholder<'_>> {
    PLACEHOLDER
        .captures_iter(description)
        .filter_map(|caps| {
            let raw = caps.get(0)?.as_str();
            let key = caps.get(1)?.as_str().to_lowercase();
            let percent = caps.get(2).is_some();
            Some(Placeholder { raw, key, percent })
        })
        .collect()
}

pub fn render_value(value: f64, percent: bool) -> String {
    if percent {
        format!("{}%", (value * 100.0).trunc().abs() as i64)
    } else {
        format!("{}", value.trunc().abs() as i64)
    }
}

/// First blackboard entry whose key matches, ignoring case.
pub fn lookup<'b>(blackboard: &'b [BlackboardEntry], key: &str) -> Option<&'b BlackboardEntry> {
    let key = key.to_lowercase();
    blackboard.iter().find(|e| e.key.to_lowercase() == key)
}

/// Returns a new string; `description` is untouched.
pub fn substitute(description: &str, blackboard: &[BlackboardEntry]) -> String {
    let mut out = description.to_string();
    for ph in placeholders(description) {
        let Some(value) = lookup(blackboard, &ph.key).and_then(|e| e.value) else {
            continue;
        };
        out = out.replace(ph.raw, &render_value(value, ph.percent));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb(entries: &[(&str, f64)]) -> Vec<BlackboardEntry> {
        entries.iter().map(|(k, v)| BlackboardEntry::new(*k, *v)).collect()
    }

    #[test]
    fn percent_placeholder() {
        let out = substitute("Deals {atk_scale:0%} ATK damage", &bb(&[("atk_scale", 1.5)]));
        assert_eq!(out, "Deals 150% ATK damage");
    }

    #[test]
    fn plain_placeholder_truncates() {
        let out = substitute("Lasts {duration} seconds", &bb(&[("duration", 10.9)]));
        assert_eq!(out, "Lasts 10 seconds");
    }

    #[test]
    fn first_matching_entry_wins() {
        let table = bb(&[("atk", 0.4), ("ATK", 0.9), ("atk", 2.0)]);
        assert_eq!(substitute("ATK +{atk:0%}", &table), "ATK +40%");
    }

    #[test]
    fn keys_match_case_insensitively() {
        let out = substitute("{ATTACK@Prob:0%} chance", &bb(&[("attack@prob", 0.25)]));
        assert_eq!(out, "25% chance");
    }

    #[test]
    fn leading_minus_and_negative_values_print_absolute() {
        let out = substitute("DEF {-def:0%}", &bb(&[("def", -0.3)]));
        assert_eq!(out, "DEF 30%");
    }

    #[test]
    fn brackets_in_keys_are_literal() {
        let table = bb(&[("attack@max_target[0]", 3.0), ("x", 1.0)]);
        let out = substitute("hits {attack@max_target[0]} targets", &table);
        assert_eq!(out, "hits 3 targets");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let out = substitute("{hp:0%} now, {hp:0%} later", &bb(&[("hp", 0.1)]));
        assert_eq!(out, "10% now, 10% later");
    }

    #[test]
    fn unknown_keys_stay_put() {
        let desc = "Gain {sp} SP and {atk:0.0%} ATK";
        let out = substitute(desc, &bb(&[("atk", 0.5)]));
        assert_eq!(out, "Gain {sp} SP and 50% ATK");
    }

    #[test]
    fn suffix_without_percent_is_not_a_placeholder() {
        assert!(placeholders("{k:0} {k:}").is_empty());
        let out = substitute("{k:0} and {k}", &bb(&[("k", 4.0)]));
        assert_eq!(out, "{k:0} and 4");
    }

    #[test]
    fn truncation_is_preserved() {
        // 0.29 * 100 = 28.999999999999996
        assert_eq!(render_value(0.29, true), "28%");
        assert_eq!(render_value(-1.75, false), "1");
    }

    #[test]
    fn scans_placeholders_in_order() {
        let found = placeholders("{a} {-B:0%} {c:0.0%}");
        let keys: Vec<_> = found.iter().map(|p| (p.key.as_str(), p.percent)).collect();
        assert_eq!(keys, [("a", false), ("b", true), ("c", true)]);
        assert_eq!(found[1].raw, "{-B:0%}");
    }
}
