// tests/resources.rs
//
// Loading the info directory from disk.
//
use std::fs;
use std::path::PathBuf;

use ark_scrape::ScrapeError;
use ark_scrape::config::consts::*;
use ark_scrape::config::resources::Resources;

fn tmp_info(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ark_info_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(p.join("scraper")).unwrap();
    p
}

fn write_all(dir: &PathBuf) {
    fs::write(dir.join(JSON_NAME_REPLACEMENTS), "Ch'En = Ch'en\n").unwrap();
    fs::write(dir.join(URL_NAME_REPLACEMENTS), "ch'en = chen\n").unwrap();
    fs::write(dir.join(ROOM_NAMES), "# rooms\nManufacture = Factory\n").unwrap();
    fs::write(dir.join(PAGE_URL), "\nhttps://pages.test/arknights/\n").unwrap();
    fs::write(dir.join(CHARACTER_JSON_URL), "https://data.test/c.json").unwrap();
    fs::write(dir.join(SKILLS_JSON_URL), "https://data.test/s.json").unwrap();
    fs::write(dir.join(BASE_SKILLS_JSON_URL), "https://data.test/b.json").unwrap();
    fs::write(dir.join(RIIC_JSON_URL), "https://data.test/r.json").unwrap();
}

#[test]
fn loads_tables_and_urls() {
    let dir = tmp_info("ok");
    write_all(&dir);

    let res = Resources::load(&dir).unwrap();
    assert_eq!(res.json_names["Ch'En"], "Ch'en");
    assert_eq!(res.url_names["ch'en"], "chen");
    assert_eq!(res.room_name("MANUFACTURE"), "Factory");
    assert_eq!(res.urls.page, "https://pages.test/arknights/");
    assert_eq!(res.urls.riic, "https://data.test/r.json");
}

#[test]
fn missing_file_names_the_path() {
    let dir = tmp_info("missing");
    write_all(&dir);
    fs::remove_file(dir.join(SKILLS_JSON_URL)).unwrap();

    match Resources::load(&dir) {
        Err(ScrapeError::Io { path, .. }) => assert!(path.ends_with(SKILLS_JSON_URL)),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn blank_url_file_is_rejected() {
    let dir = tmp_info("blank");
    write_all(&dir);
    fs::write(dir.join(PAGE_URL), "  \n\n").unwrap();

    assert!(matches!(Resources::load(&dir), Err(ScrapeError::EmptyResource { .. })));
}

#[test]
fn shipped_info_directory_loads() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(INFO_DIR);
    let res = Resources::load(&dir).unwrap();
    assert_eq!(res.room_name("TRADING"), "Trading Post");
    assert!(res.urls.skills.ends_with("skill_table.json"));
}
