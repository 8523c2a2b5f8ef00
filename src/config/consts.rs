// src/config/consts.rs

// Resource tables
pub const INFO_DIR: &str = "info";
pub const INFO_DIR_ENV: &str = "ARK_INFO_DIR";
pub const JSON_NAME_REPLACEMENTS: &str = "jsonOperatorReplacements.txt";
pub const URL_NAME_REPLACEMENTS: &str = "urlOperatorReplacements.txt";
pub const ROOM_NAMES: &str = "scraper/formattedJsonRooms.txt";
pub const PAGE_URL: &str = "url.txt";
pub const CHARACTER_JSON_URL: &str = "scraper/characterJsonUrl.txt";
pub const SKILLS_JSON_URL: &str = "scraper/skillsJsonUrl.txt";
pub const BASE_SKILLS_JSON_URL: &str = "scraper/baseSkillsJsonUrl.txt";
pub const RIIC_JSON_URL: &str = "scraper/riicJsonUrl.txt";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Net config
pub const USER_AGENT: &str = concat!("ark_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Skill metadata columns
pub const TIER_COL_WIDTH: usize = 15;
pub const SP_COST_COL_WIDTH: usize = 18;
pub const INIT_SP_COL_WIDTH: usize = 22;
pub const TIER_SEPARATOR: &str = "--------------------";

// Skill tiers: 1..=7 are levels, 8..=10 are masteries
pub const MAX_SKILL_LEVEL: u8 = 7;
pub const MAX_SKILL_TIER: u8 = 10;
pub const DEFAULT_TIERS: [u8; 2] = [7, 10];
