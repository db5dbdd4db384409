// Composition tests — the pure stages chained together:
//   raw JSON -> enrich_and_rank -> summarize -> render
// without network access. Brief rendering writes to the temp dir.

use neo_hazard::asteroid::models::{RawAsteroidRecord, SizeCategory};
use neo_hazard::output::markdown::{generate_brief, render_brief};
use neo_hazard::pipeline::enrich::enrich_and_rank;
use neo_hazard::pipeline::summary::summarize;

const FEED: &str = r#"[
    {"id": "tiny", "name": "(2025 AA)", "nasa_jpl_url": "https://ssd.jpl.nasa.gov/a",
     "estimated_diameter_km_max": 0.02, "is_potentially_hazardous_asteroid": false,
     "is_sentry_object": false, "relative_velocity_km_s": 8.1, "miss_distance_au": 0.3},
    {"id": "pha", "name": "(2010 PK9)", "nasa_jpl_url": "https://ssd.jpl.nasa.gov/b",
     "estimated_diameter_km_max": 0.26, "is_potentially_hazardous_asteroid": true,
     "is_sentry_object": false, "relative_velocity_km_s": 17.2, "miss_distance_au": 0.19},
    {"id": "sentry", "name": "(2024 YR4)", "nasa_jpl_url": "https://ssd.jpl.nasa.gov/c",
     "estimated_diameter_km_max": 1.5, "is_potentially_hazardous_asteroid": true,
     "is_sentry_object": true, "relative_velocity_km_s": 26.0, "miss_distance_au": 0.01},
    {"id": "big", "name": "433 Eros | A898 PA", "nasa_jpl_url": "https://ssd.jpl.nasa.gov/d",
     "estimated_diameter_km_max": 0.7, "is_potentially_hazardous_asteroid": false,
     "is_sentry_object": false, "relative_velocity_km_s": 5.6, "miss_distance_au": 0.15}
]"#;

fn ranked_feed() -> Vec<neo_hazard::asteroid::models::EnrichedAsteroidRecord> {
    let raw: Vec<RawAsteroidRecord> = serde_json::from_str(FEED).unwrap();
    enrich_and_rank(&raw).unwrap()
}

#[test]
fn feed_ranks_sentry_first() {
    let ranked = ranked_feed();
    let ids: Vec<&str> = ranked.iter().map(|r| r.id()).collect();
    // sentry: 3+2+2+3=10, pha: 1+1+1+2=5, big: 2+0+1=3, tiny: 1
    assert_eq!(ids, vec!["sentry", "pha", "big", "tiny"]);
    assert_eq!(ranked[0].importance_score, 10);
}

#[test]
fn summary_counts_match_feed() {
    let summary = summarize(&ranked_feed());
    assert_eq!(summary.total, 4);
    assert_eq!(summary.hazardous, 2);
    assert_eq!(summary.sentry, 1);
    assert!((summary.hazardous_fraction() - 0.5).abs() < 1e-12);
    assert_eq!(summary.by_size.len(), 4);
    assert_eq!(summary.by_size[&SizeCategory::Tiny].non_hazardous, 1);
    assert_eq!(summary.by_size[&SizeCategory::Medium].hazardous, 1);
    assert_eq!(summary.by_size[&SizeCategory::Enormous].total(), 1);
    assert!(summary.max_torino_scale >= 7);
}

#[test]
fn empty_summary_is_zeroed() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.hazardous_fraction(), 0.0);
    assert!(summary.by_size.is_empty());
}

#[test]
fn brief_respects_max_visible_and_escapes_names() {
    let ranked = ranked_feed();
    let summary = summarize(&ranked);
    let md = render_brief(&ranked, &summary, 2);

    assert!(md.contains("## Ranked Objects (top 2)"));
    assert!(md.contains("(2024 YR4)"));
    assert!(md.contains("(2010 PK9)"));
    assert!(!md.contains("(2025 AA)"));

    let full = render_brief(&ranked, &summary, 10);
    assert!(full.contains("433 Eros \\| A898 PA"));
}

#[test]
fn brief_written_to_disk() {
    let ranked = ranked_feed();
    let summary = summarize(&ranked);
    let dir = std::env::temp_dir().join(format!("neo-hazard-test-{}", std::process::id()));
    let path = dir.join("brief.md");
    let path_str = path.to_str().unwrap();

    let written = generate_brief(&ranked, &summary, 5, path_str).unwrap();
    assert_eq!(written, path_str);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("# Near-Earth Object Hazard Brief"));

    let _ = std::fs::remove_dir_all(&dir);
}
