// src/specs/mod.rs
//! # Extraction "specs"
//!
//! One module per report section. Each spec knows *where the ground truth
//! lives* (operator page markup, character table, skill table, building
//! tables) and how to turn it into display lines.
//!
//! ## What lives here
//! - **Pure parsing and formatting.** Every function takes already-fetched
//!   data (HTML text, `serde_json::Value`, typed tables) and returns values
//!   or `Vec<String>` lines. None of them touch the network.
//! - **Defensive traversal.** Missing keys or nesting degrade to an empty
//!   result or a localized "not found" line; nothing here panics on data.
//!
//! ## What does **not** live here
//! - Fetching and resource loading (`gamedata`, `core::net`).
//! - Choosing which sections run, and printing (`report`).
//!
//! ## Line conventions
//! - A formatter's first line is its section title, except for the
//!   single-line failure messages of `skills` and `base_skills`, which
//!   carry the section name inline.
//! - Lines never carry trailing newlines; the report adds spacing.

pub mod base_skills;
pub mod blackboard;
pub mod page;
pub mod skills;
pub mod stats;
pub mod talents;
