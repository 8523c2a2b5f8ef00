// src/config/options.rs
use super::consts::DEFAULT_TIERS;

/// Optional report sections. The header block (name, rarity, profession,
/// tags, description) is always printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sections {
    pub info: bool,
    pub skills: bool,
    pub talent: bool,
    pub base: bool,
}

impl Sections {
    pub fn all() -> Self {
        Self { info: true, skills: true, talent: true, base: true }
    }

    /// Anything that needs the operator's entry in the character table.
    pub fn needs_character_table(&self) -> bool {
        self.info || self.skills || self.talent || self.base
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Operator identifier as typed, hyphens standing in for spaces.
    pub operator: String,
    pub sections: Sections,
    /// Skill tiers to render, 1..=10 in the order given.
    pub tiers: Vec<u8>,
}

impl ReportOptions {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            sections: Sections::default(),
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }

    pub fn with_sections(mut self, sections: Sections) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_tiers(mut self, tiers: Vec<u8>) -> Self {
        self.tiers = tiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_report_needs_no_tables() {
        let opts = ReportOptions::new("exusiai");
        assert!(!opts.sections.needs_character_table());
        assert_eq!(opts.tiers, vec![7, 10]);
    }

    #[test]
    fn any_detailed_section_needs_character_table() {
        let talent_only = Sections { talent: true, ..Sections::default() };
        assert!(talent_only.needs_character_table());
        assert!(Sections::all().needs_character_table());
    }
}
