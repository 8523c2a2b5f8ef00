// src/config/resources.rs

use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use super::consts::*;
use crate::core::sanitize::title_case;
use crate::error::ScrapeError;

/// Lookup tables and URLs read from the info directory.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    /// Display name → name used in the character table.
    pub json_names: HashMap<String, String>,
    /// CLI identifier → page slug.
    pub url_names: HashMap<String, String>,
    /// Lower-cased room type → room name shown in the report.
    pub rooms: HashMap<String, String>,
    pub urls: ResourceUrls,
}

#[derive(Clone, Debug, Default)]
pub struct ResourceUrls {
    pub page: String,
    pub characters: String,
    pub skills: String,
    pub base_skills: String,
    pub riic: String,
}

impl Resources {
    pub fn load(dir: &Path) -> Result<Self, ScrapeError> {
        debug!("loading resource tables from {}", dir.display());
        let rooms = read_lines_into_map(&dir.join(ROOM_NAMES))?
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Ok(Self {
            json_names: read_lines_into_map(&dir.join(JSON_NAME_REPLACEMENTS))?,
            url_names: read_lines_into_map(&dir.join(URL_NAME_REPLACEMENTS))?,
            rooms,
            urls: ResourceUrls {
                page: read_line(&dir.join(PAGE_URL))?,
                characters: read_line(&dir.join(CHARACTER_JSON_URL))?,
                skills: read_line(&dir.join(SKILLS_JSON_URL))?,
                base_skills: read_line(&dir.join(BASE_SKILLS_JSON_URL))?,
                riic: read_line(&dir.join(RIIC_JSON_URL))?,
            },
        })
    }

    /// Room display name, matched on the title-cased room type regardless of case.
    /// Unknown room types fall back to their title-cased form.
    pub fn room_name(&self, room_type: &str) -> String {
        let titled = title_case(room_type);
        self.rooms
            .get(&titled.to_lowercase())
            .cloned()
            .unwrap_or(titled)
    }
}

fn read(path: &Path) -> Result<String, ScrapeError> {
    fs::read_to_string(path).map_err(|source| ScrapeError::Io { path: path.to_path_buf(), source })
}

pub fn read_lines_into_map(path: &Path) -> Result<HashMap<String, String>, ScrapeError> {
    parse_key_values(&read(path)?, path)
}

pub fn read_line(path: &Path) -> Result<String, ScrapeError> {
    read(path)?
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ScrapeError::EmptyResource { path: path.to_path_buf() })
}

/// Parse `key = value` lines. Blank lines and `#` comments are skipped.
pub fn parse_key_values(text: &str, path: &Path) -> Result<HashMap<String, String>, ScrapeError> {
    let mut out = HashMap::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ScrapeError::Resource { path: path.to_path_buf(), line: n + 1 })?;
        out.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(out)
}
