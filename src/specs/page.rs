// src/specs/page.rs
//! Operator page markup: tags, rarity, profession and description blocks.
//!
//! - Tags: every `div.tag-title`.
//! - Rarity: number of `<img>` stars inside the first `div.rarity-cell`.
//! - Profession: first `div.profession-title`.
//! - Description: first three `div.description-box` blocks; fewer than three
//!   means the page layout is not the one we know, so a placeholder is used.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

pub const NO_DESCRIPTION: &str = "No proper description.";
const DESCRIPTION_BLOCKS: usize = 3;

static TAG: LazyLock<Selector> = LazyLock::new(|| sel("div.tag-title"));
static RARITY: LazyLock<Selector> = LazyLock::new(|| sel("div.rarity-cell"));
static STAR: LazyLock<Selector> = LazyLock::new(|| sel("img"));
static PROFESSION: LazyLock<Selector> = LazyLock::new(|| sel("div.profession-title"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| sel("div.description-box"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorPage {
    pub tags: Vec<String>,
    pub rarity: usize,
    pub profession: String,
    pub description: Vec<String>,
}

fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn parse_page(html: &str) -> Result<OperatorPage, ScrapeError> {
    let doc = Html::parse_document(html);

    let tags = doc.select(&TAG).map(text_of).collect();

    let rarity = doc
        .select(&RARITY)
        .next()
        .ok_or(ScrapeError::MissingElement("rarity cell"))?
        .select(&STAR)
        .count();

    let profession = doc
        .select(&PROFESSION)
        .next()
        .map(text_of)
        .ok_or(ScrapeError::MissingElement("profession"))?;

    let blocks: Vec<String> = doc.select(&DESCRIPTION).map(text_of).collect();
    let description = if blocks.len() < DESCRIPTION_BLOCKS {
        vec![s!(NO_DESCRIPTION)]
    } else {
        blocks.into_iter().take(DESCRIPTION_BLOCKS).collect()
    };

    Ok(OperatorPage { tags, rarity, profession, description })
}
