//! Heritage metric computation
//!
//! Two independent importance models share only the parsed construction year:
//!
//! - **Glow contribution** is multiplicative: a base weight of 100 is scaled by
//!   every applicable factor in turn and the product is rounded.
//! - **Significance score** is additive: each attribute adds a fixed bonus.
//!
//! The age bands of the glow model (2000/1000/200 years) and of the age color
//! classification (2000/500/200 years) differ. Both sets are kept as they are.

use crate::{parse_year, Site, SiteStatus, SiteType};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Year that ages are measured from unless configured otherwise
pub const DEFAULT_REFERENCE_YEAR: i32 = 2024;

/// Starting weight before any glow factor applies
pub const BASE_GLOW_WEIGHT: f64 = 100.0;

/// Glow multiplier per historical event (applied as `1 + n * factor`)
pub const EVENT_GLOW_FACTOR: f64 = 0.1;

/// Artifact count a collection must exceed to earn the artifact multiplier
pub const ARTIFACT_GLOW_THRESHOLD: u32 = 100;

/// Configuration for metric computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Year ages are measured from (`age = reference_year - parsed_year`)
    pub reference_year: i32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

impl MetricsConfig {
    /// Configuration anchored at the given reference year
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }
}

/// Age of a site in years, or `None` when its construction date is unparseable
///
/// Widened to `i64`: the span between two `i32` years can exceed `i32::MAX`.
pub fn site_age(site: &Site, config: &MetricsConfig) -> Option<i64> {
    parse_year(&site.year_built).map(|year| i64::from(config.reference_year) - i64::from(year))
}

/// Compute the glow contribution of a site
///
/// Factors, applied in order and compounding:
/// 1. Age: > 2000 years ×3, > 1000 ×2, > 200 ×1.5 (skipped when the year is unparseable)
/// 2. UNESCO listed ×2
/// 3. More than 100 artifacts ×1.5
/// 4. Unique ×2
/// 5. Type: archaeological ×1.8, museum ×1.6
/// 6. Religious significance ×1.3
/// 7. Community gathering place ×1.2
/// 8. Historical events ×(1 + 0.1 per event)
///
/// # Examples
///
/// ```
/// use heritage_domain::{glow_contribution, MetricsConfig, Site, SiteStatus, SiteType};
///
/// let mut site = Site::new("tell", "Tell es-Sakan", SiteType::Archaeological, SiteStatus::Destroyed)
///     .with_year_built("1 BCE");
/// site.unesco_listed = true;
/// site.is_unique = true;
///
/// assert_eq!(glow_contribution(&site, &MetricsConfig::default()), 2160);
/// ```
pub fn glow_contribution(site: &Site, config: &MetricsConfig) -> u64 {
    let mut weight = BASE_GLOW_WEIGHT;

    weight *= age_multiplier(site_age(site, config));

    if site.unesco_listed {
        weight *= 2.0;
    }

    if site.artifact_count.is_some_and(|count| count > ARTIFACT_GLOW_THRESHOLD) {
        weight *= 1.5;
    }

    if site.is_unique {
        weight *= 2.0;
    }

    // Library carries no type weight yet
    weight *= type_multiplier(&site.site_type);

    if site.religious_significance {
        weight *= 1.3;
    }

    if site.community_gathering_place {
        weight *= 1.2;
    }

    if !site.historical_events.is_empty() {
        weight *= 1.0 + EVENT_GLOW_FACTOR * site.event_count() as f64;
    }

    weight.round() as u64
}

fn age_multiplier(age: Option<i64>) -> f64 {
    match age {
        Some(age) if age > 2000 => 3.0,
        Some(age) if age > 1000 => 2.0,
        Some(age) if age > 200 => 1.5,
        _ => 1.0,
    }
}

fn type_multiplier(site_type: &SiteType) -> f64 {
    match site_type {
        SiteType::Archaeological => 1.8,
        SiteType::Museum => 1.6,
        _ => 1.0,
    }
}

/// Age-based color classification of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeColor {
    /// Older than 2000 years
    Gold,
    /// Older than 500 years
    Bronze,
    /// Older than 200 years
    Silver,
    /// Modern or unknown age
    Blue,
}

impl AgeColor {
    /// Hex color code
    pub fn hex(&self) -> &'static str {
        match self {
            AgeColor::Gold => "#FFD700",
            AgeColor::Bronze => "#CD7F32",
            AgeColor::Silver => "#C0C0C0",
            AgeColor::Blue => "#4A90E2",
        }
    }

    /// Human-readable tier name
    pub fn label(&self) -> &'static str {
        match self {
            AgeColor::Gold => "ancient",
            AgeColor::Bronze => "medieval",
            AgeColor::Silver => "early modern",
            AgeColor::Blue => "modern/unknown",
        }
    }
}

impl Serialize for AgeColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// Classify a site by age for color coding
pub fn age_color_code(site: &Site, config: &MetricsConfig) -> AgeColor {
    match site_age(site, config) {
        Some(age) if age > 2000 => AgeColor::Gold,
        Some(age) if age > 500 => AgeColor::Bronze,
        Some(age) if age > 200 => AgeColor::Silver,
        _ => AgeColor::Blue,
    }
}

/// Compute the additive significance score of a site
///
/// `1 + age/1000 + 2 (UNESCO) + artifacts/100 + 3 (unique)
///  + 1 (religious) + 1 (community) + 0.5 per event`
pub fn significance_score(site: &Site, config: &MetricsConfig) -> f64 {
    let mut score = 1.0;

    if let Some(age) = site_age(site, config) {
        score += age as f64 / 1000.0;
    }
    if site.unesco_listed {
        score += 2.0;
    }
    if let Some(count) = site.artifact_count {
        score += f64::from(count) / 100.0;
    }
    if site.is_unique {
        score += 3.0;
    }
    if site.religious_significance {
        score += 1.0;
    }
    if site.community_gathering_place {
        score += 1.0;
    }
    score += 0.5 * site.event_count() as f64;

    score
}

/// Sum of glow contributions over a collection (0 when empty)
pub fn total_heritage_value(sites: &[Site], config: &MetricsConfig) -> u64 {
    sites.iter().map(|site| glow_contribution(site, config)).sum()
}

/// Glow value and number of sites destroyed on or before a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DestroyedValue {
    /// Summed glow contribution of the destroyed sites
    pub value: u64,
    /// Number of destroyed sites
    pub count: usize,
}

/// Glow value lost as of `as_of` (inclusive)
///
/// Only `date_destroyed` counts here; the assessment-date fallback used by
/// the destruction-date filter does not apply.
pub fn destroyed_value(sites: &[Site], as_of: NaiveDate, config: &MetricsConfig) -> DestroyedValue {
    sites
        .iter()
        .filter(|site| site.date_destroyed.is_some_and(|date| date <= as_of))
        .fold(DestroyedValue::default(), |acc, site| DestroyedValue {
            value: acc.value + glow_contribution(site, config),
            count: acc.count + 1,
        })
}

/// Percentage (0-100) of total glow value still intact as of `as_of`
///
/// An empty or zero-valued collection is fully intact.
pub fn heritage_integrity(sites: &[Site], as_of: NaiveDate, config: &MetricsConfig) -> u8 {
    let total = total_heritage_value(sites, config);
    let destroyed = destroyed_value(sites, as_of, config).value;
    integrity_percentage(total, destroyed)
}

fn integrity_percentage(total: u64, destroyed: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let intact = total.saturating_sub(destroyed) as f64;
    (100.0 * intact / total as f64).round().clamp(0.0, 100.0) as u8
}

/// Every per-site metric, computed together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteMetrics {
    /// Year recovered from the construction date, if any
    pub parsed_year: Option<i32>,
    /// Age in years relative to the reference year
    pub age: Option<i64>,
    /// Multiplicative glow contribution
    pub glow_contribution: u64,
    /// Age color classification
    pub age_color: AgeColor,
    /// Additive significance score
    pub significance_score: f64,
}

impl SiteMetrics {
    /// Compute all metrics for a site
    pub fn compute(site: &Site, config: &MetricsConfig) -> Self {
        Self {
            parsed_year: parse_year(&site.year_built),
            age: site_age(site, config),
            glow_contribution: glow_contribution(site, config),
            age_color: age_color_code(site, config),
            significance_score: significance_score(site, config),
        }
    }
}

/// Aggregate metrics over a collection as of a date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeritageReport {
    /// Date the report is computed for
    pub as_of: NaiveDate,
    /// Reference year used for ages
    pub reference_year: i32,
    /// Number of sites in the collection
    pub site_count: usize,
    /// Sum of all glow contributions
    pub total_value: u64,
    /// Value and count destroyed on or before `as_of`
    pub destroyed: DestroyedValue,
    /// Percentage of value still intact
    pub integrity: u8,
    /// Number of sites per status (every status present, possibly zero)
    pub status_counts: BTreeMap<SiteStatus, usize>,
}

impl HeritageReport {
    /// Compute the report for a collection
    pub fn compute(sites: &[Site], as_of: NaiveDate, config: &MetricsConfig) -> Self {
        let total_value = total_heritage_value(sites, config);
        let destroyed = destroyed_value(sites, as_of, config);

        let mut status_counts: BTreeMap<SiteStatus, usize> =
            SiteStatus::ALL.iter().map(|status| (*status, 0)).collect();
        for site in sites {
            *status_counts.entry(site.status).or_insert(0) += 1;
        }

        tracing::debug!(
            sites = sites.len(),
            total_value,
            destroyed_value = destroyed.value,
            "Computed heritage report"
        );

        Self {
            as_of,
            reference_year: config.reference_year,
            site_count: sites.len(),
            total_value,
            destroyed,
            integrity: integrity_percentage(total_value, destroyed.value),
            status_counts,
        }
    }
}
