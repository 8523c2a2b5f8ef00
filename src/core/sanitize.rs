// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

// Web-app styling hooks such as `@ba.vup`
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*@[A-Za-z]+\.[A-Za-z]+").expect("annotation regex"));

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Word-wise title case: a letter is upper-cased when the previous char is
/// not a letter, otherwise lower-cased. `"ch'en"` becomes `"Ch'En"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_letter { out.extend(ch.to_lowercase()); }
            else { out.extend(ch.to_uppercase()); }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

/// Strip `<...>` markup (including the bare `</>` closer) and `@ns.token`
/// annotations from a game-data description. An annotation and the
/// whitespace before it become a single space.
pub fn filter_description(description: &str) -> String {
    let no_close = description.replace("</>", "");
    let no_tags = TAG.replace_all(&no_close, "");
    ANNOTATION.replace_all(&no_tags, " ").into_owned()
}
