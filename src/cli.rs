// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{INFO_DIR, INFO_DIR_ENV, MAX_SKILL_TIER};
use crate::config::options::{ReportOptions, Sections};
use crate::config::resources::Resources;
use crate::core::HttpFetcher;
use crate::progress::StderrProgress;
use crate::report;

#[derive(Debug, Parser)]
#[command(name = "ark", version, about = "Find information about any operator in Arknights!")]
pub struct Args {
    /// The operator you want information for. Use '-' in place of spaces.
    pub operator: String,

    /// Display the operator's stats
    #[arg(short, long)]
    pub info: bool,

    /// Display the operator's skills
    #[arg(short, long)]
    pub skills: bool,

    /// Display the operator's talents
    #[arg(short, long)]
    pub talent: bool,

    /// Display the operator's base skills
    #[arg(short, long)]
    pub base: bool,

    /// Display everything about the operator
    #[arg(short, long)]
    pub all: bool,

    /// Skill tiers to show, comma separated (8-10 are masteries M1-M3)
    #[arg(long, value_delimiter = ',', default_values_t = [7u8, 10],
          value_parser = clap::value_parser!(u8).range(1..=MAX_SKILL_TIER as i64))]
    pub tiers: Vec<u8>,

    /// Directory holding the name tables and resource URLs
    #[arg(long, env = INFO_DIR_ENV, default_value = INFO_DIR)]
    pub info_dir: PathBuf,

    /// Log to stderr instead of the debug log file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn sections(&self) -> Sections {
        if self.all {
            return Sections::all();
        }
        Sections { info: self.info, skills: self.skills, talent: self.talent, base: self.base }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::new(&self.operator)
            .with_sections(self.sections())
            .with_tiers(self.tiers.clone())
    }
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init(args.verbose);

    let resources = Resources::load(&args.info_dir)
        .wrap_err_with(|| format!("loading resource tables from {}", args.info_dir.display()))?;
    let fetcher = HttpFetcher::new()?;

    let mut progress = StderrProgress;
    let outcome = report::build(&args.report_options(), &resources, &fetcher, Some(&mut progress));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render(&outcome, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_minimal_report() {
        let args = Args::try_parse_from(["ark", "exusiai"]).unwrap();
        assert_eq!(args.sections(), Sections::default());
        assert_eq!(args.tiers, vec![7, 10]);
    }

    #[test]
    fn all_overrides_individual_flags() {
        let args = Args::try_parse_from(["ark", "blue-poison", "-s", "-a"]).unwrap();
        assert_eq!(args.sections(), Sections::all());
        assert_eq!(args.report_options().operator, "blue-poison");
    }

    #[test]
    fn flags_and_tiers() {
        let args = Args::try_parse_from(["ark", "amiya", "-s", "-t", "--tiers", "1,8,9"]).unwrap();
        let s = args.sections();
        assert!(s.skills && s.talent && !s.info && !s.base);
        assert_eq!(args.tiers, vec![1, 8, 9]);
    }

    #[test]
    fn info_dir_flag_overrides_default() {
        let args = Args::try_parse_from(["ark", "amiya", "--info-dir", "/tmp/ark-info"]).unwrap();
        assert_eq!(args.info_dir, PathBuf::from("/tmp/ark-info"));
    }

    #[test]
    fn tiers_out_of_range_are_rejected() {
        assert!(Args::try_parse_from(["ark", "amiya", "--tiers", "11"]).is_err());
        assert!(Args::try_parse_from(["ark", "amiya", "--tiers", "0"]).is_err());
    }
}
