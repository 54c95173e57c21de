//! Integration tests for heritage-domain
//!
//! These tests load a small JSON dataset and run it through parsing, metrics
//! and filtering together, the way the CLI consumes the crate.

use chrono::NaiveDate;
use heritage_domain::{
    destroyed_value, filter_sites, glow_contribution, heritage_integrity, parse_year,
    total_heritage_value, FilterState, HeritageReport, MetricsConfig, Site, SiteStatus, SiteType,
    YearRange,
};

const DATASET: &str = r#"[
    {
        "id": "anthedon",
        "name": "Anthedon Harbour",
        "yearBuilt": "800 BCE",
        "type": "archaeological",
        "status": "destroyed",
        "dateDestroyed": "2024-01-01",
        "unescoListed": true,
        "isUnique": true
    },
    {
        "id": "omari",
        "name": "Great Omari Mosque",
        "nameArabic": "المسجد العمري الكبير",
        "yearBuilt": "7th century",
        "type": "mosque",
        "status": "heavily-damaged",
        "dateDestroyed": "2023-12-08",
        "religiousSignificance": true,
        "communityGatheringPlace": true,
        "historicalEvents": ["Byzantine church converted", "Earthquake of 1927", "Restoration 2010"]
    },
    {
        "id": "qasr",
        "name": "Qasr al-Basha",
        "yearBuilt": "Mamluk period",
        "type": "museum",
        "status": "damaged",
        "sourceAssessmentDate": "2024-02-15",
        "artifactCount": 17000
    }
]"#;

fn load() -> Vec<Site> {
    serde_json::from_str(DATASET).expect("dataset should deserialize")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_parsed_years_from_dataset() {
    let sites = load();
    let years: Vec<Option<i32>> = sites.iter().map(|s| parse_year(&s.year_built)).collect();
    assert_eq!(years, vec![Some(-800), Some(650), None]);
}

#[test]
fn test_glow_contributions_from_dataset() {
    let config = MetricsConfig::default();
    let sites = load();

    // 100 * 3 * 2 * 2 * 1.8
    assert_eq!(glow_contribution(&sites[0], &config), 2160);
    // 100 * 2 * 1.3 * 1.2 * 1.3 = 405.6
    assert_eq!(glow_contribution(&sites[1], &config), 406);
    // 100 * 1.5 * 1.6, age factor skipped
    assert_eq!(glow_contribution(&sites[2], &config), 240);

    assert_eq!(total_heritage_value(&sites, &config), 2806);
}

#[test]
fn test_destroyed_value_over_time() {
    let config = MetricsConfig::default();
    let sites = load();

    let before = destroyed_value(&sites, date("2023-12-01"), &config);
    assert_eq!((before.value, before.count), (0, 0));

    let mid = destroyed_value(&sites, date("2023-12-08"), &config);
    assert_eq!((mid.value, mid.count), (406, 1));

    // The museum only has an assessment date, which never counts here
    let after = destroyed_value(&sites, date("2024-06-01"), &config);
    assert_eq!((after.value, after.count), (2566, 2));
}

#[test]
fn test_integrity_over_time() {
    let config = MetricsConfig::default();
    let sites = load();

    assert_eq!(heritage_integrity(&sites, date("2023-01-01"), &config), 100);
    // (2806 - 406) / 2806 = 85.53%
    assert_eq!(heritage_integrity(&sites, date("2023-12-31"), &config), 86);
    // 240 / 2806 = 8.55%
    assert_eq!(heritage_integrity(&sites, date("2024-06-01"), &config), 9);
}

#[test]
fn test_report_matches_individual_metrics() {
    let config = MetricsConfig::default();
    let sites = load();
    let as_of = date("2024-06-01");

    let report = HeritageReport::compute(&sites, as_of, &config);
    assert_eq!(report.total_value, total_heritage_value(&sites, &config));
    assert_eq!(report.destroyed, destroyed_value(&sites, as_of, &config));
    assert_eq!(report.integrity, heritage_integrity(&sites, as_of, &config));
    assert_eq!(report.reference_year, 2024);
}

#[test]
fn test_filter_fixture_selects_single_site() {
    let sites = load();
    let mut state = FilterState::default();
    state.selected_types.insert(SiteType::Mosque);
    state.selected_statuses.insert(SiteStatus::HeavilyDamaged);

    let kept = filter_sites(&sites, &state);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "omari");
}

#[test]
fn test_filter_identity_on_dataset() {
    let sites = load();
    let kept: Vec<Site> = filter_sites(&sites, &FilterState::default())
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(kept, sites);
}

#[test]
fn test_filter_then_aggregate() {
    let config = MetricsConfig::default();
    let sites = load();

    let mut state = FilterState::default();
    state.creation_range = YearRange::between(0, 1000);

    // Anthedon drops out; the undated museum passes through
    let kept: Vec<Site> = filter_sites(&sites, &state).into_iter().cloned().collect();
    let ids: Vec<&str> = kept.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["omari", "qasr"]);
    assert_eq!(total_heritage_value(&kept, &config), 646);
}

#[test]
fn test_filter_state_deserializes_from_json() {
    let json = r#"{
        "selected_types": ["mosque", "church"],
        "destruction_range": {"start": "2023-10-07", "end": null},
        "search_term": "omari"
    }"#;
    let state: FilterState = serde_json::from_str(json).unwrap();
    assert!(state.selected_statuses.is_empty());
    assert!(state.creation_range.is_unbounded());

    let sites = load();
    let kept = filter_sites(&sites, &state);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "omari");
}
