// src/report.rs
//! Report assembly: fetch the operator page, load the tables the requested
//! sections need, run each enabled section from the dispatch table, print.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::config::{options::{ReportOptions, Sections}, resources::Resources};
use crate::core::Fetch;
use crate::gamedata::{GameData, OperatorEntry, find_operator};
use crate::operator::{Operator, Stats, display_name, page_slug};
use crate::progress::Progress;
use crate::specs::{base_skills, page, skills, stats, talents};

pub const OPERATOR_JSON_FAILED: &str = "Operator JSON failed to load!";
pub const OPERATOR_NOT_IN_JSON: &str = "Could not find operator in the operator JSON!";
pub const PAGE_NOT_FOUND: &str =
    "Could not find operator! Either the server is down, or your spelling is!";

/// Everything a section formatter may read. All of it is fetched up front.
pub struct SectionContext<'a> {
    pub entry: OperatorEntry<'a>,
    pub stats: &'a Stats,
    pub data: &'a GameData,
    pub resources: &'a Resources,
    pub tiers: &'a [u8],
}

/// One optional report section.
pub struct SectionSpec {
    /// Property name the lines are stored under.
    pub name: &'static str,
    pub title: &'static str,
    pub enabled: fn(&Sections) -> bool,
    pub render: fn(&SectionContext<'_>) -> Vec<String>,
}

fn info_enabled(s: &Sections) -> bool { s.info }
fn skills_enabled(s: &Sections) -> bool { s.skills }
fn talent_enabled(s: &Sections) -> bool { s.talent }
fn base_enabled(s: &Sections) -> bool { s.base }

fn render_stats(ctx: &SectionContext<'_>) -> Vec<String> {
    stats::format_stats(ctx.stats)
}

fn render_skills(ctx: &SectionContext<'_>) -> Vec<String> {
    skills::format_skills(ctx.entry.data, ctx.data.skills.as_ref(), ctx.tiers)
}

fn render_talents(ctx: &SectionContext<'_>) -> Vec<String> {
    talents::format_talents(ctx.entry.data)
}

fn render_base_skills(ctx: &SectionContext<'_>) -> Vec<String> {
    base_skills::format_base_skills(
        ctx.entry.key,
        ctx.data.building.as_ref(),
        ctx.data.riic.as_ref(),
        ctx.resources,
    )
}

/// Sections in print order.
pub const SECTIONS: [SectionSpec; 4] = [
    SectionSpec { name: "stats", title: stats::TITLE, enabled: info_enabled, render: render_stats },
    SectionSpec { name: "skills", title: skills::TITLE, enabled: skills_enabled, render: render_skills },
    SectionSpec { name: "talent", title: talents::TITLE, enabled: talent_enabled, render: render_talents },
    SectionSpec { name: "base skills", title: base_skills::TITLE, enabled: base_enabled, render: render_base_skills },
];

#[derive(Debug)]
pub enum Outcome {
    Found(Operator),
    /// The operator page could not be fetched or parsed.
    NotFound { name: String },
}

fn page_url(resources: &Resources, slug: &str) -> String {
    format!("{}/operator/{}", resources.urls.page.trim_end_matches('/'), slug)
}

/// Fetch and assemble an operator report. Only the page fetch can fail the
/// whole run; every other problem degrades its own section.
pub fn build(
    opts: &ReportOptions,
    resources: &Resources,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Outcome {
    let name = display_name(&opts.operator, resources);
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching...");
    }

    let url = page_url(resources, &page_slug(&opts.operator, resources));
    let parsed = fetcher.get(&url).and_then(|html| page::parse_page(&html));
    let page = match parsed {
        Ok(page) => page,
        Err(e) => {
            warn!("operator page {url}: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.finish(false);
            }
            return Outcome::NotFound { name };
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log("Parsing...");
    }
    let mut operator = Operator::new(&name, page.rarity, page.profession, page.description, page.tags);

    let data = GameData::load(fetcher, &resources.urls, &opts.sections);
    let entry = data.characters.as_ref().and_then(|t| find_operator(t, &name));
    match (&data.characters, entry) {
        (_, Some(e)) => {
            info!("{name} is {}", e.key);
            operator.stats = stats::extract_stats(e.data);
        }
        (Some(_), None) => warn!("{name} is not in the character table"),
        (None, None) => {}
    }

    for spec in SECTIONS.iter().filter(|s| (s.enabled)(&opts.sections)) {
        let lines = match entry {
            Some(entry) => (spec.render)(&SectionContext {
                entry,
                stats: &operator.stats,
                data: &data,
                resources,
                tiers: &opts.tiers,
            }),
            None if data.characters.is_none() => vec![s!(spec.title), s!(OPERATOR_JSON_FAILED)],
            None => vec![s!(spec.title), s!(OPERATOR_NOT_IN_JSON)],
        };
        operator.properties.append(spec.name, lines);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(true);
    }
    Outcome::Found(operator)
}

pub fn render_operator(op: &Operator, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n\n{}   {}   {}", op.name, "*".repeat(op.rarity), op.profession)?;
    writeln!(out, "{}\n", op.formatted_tags())?;
    for block in &op.description {
        writeln!(out, "{block}")?;
    }
    for (_, lines) in op.properties.iter() {
        writeln!(out)?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }
    writeln!(out, "\n")
}

pub fn render_not_found(name: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n\n{name}\n\n{PAGE_NOT_FOUND}\n\n")
}

pub fn render(outcome: &Outcome, out: &mut dyn Write) -> io::Result<()> {
    match outcome {
        Outcome::Found(op) => render_operator(op, out),
        Outcome::NotFound { name } => render_not_found(name, out),
    }
}
