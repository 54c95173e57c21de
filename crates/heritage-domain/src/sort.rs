//! Presentation ordering for filtered sites
//!
//! Sorting is separate from the filter pipeline, which never reorders.

use crate::metrics::{glow_contribution, significance_score, MetricsConfig};
use crate::{parse_year, Site};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Key to sort sites by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Display name (case-insensitive)
    #[default]
    Name,
    /// Destruction date
    DateDestroyed,
    /// Parsed construction year
    YearBuilt,
    /// Glow contribution
    Glow,
    /// Significance score
    Significance,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

/// Stable sort of sites in place
///
/// Sites missing the key (no destruction date, unparseable year) go last in
/// either direction. Each key is computed once per site.
pub fn sort_sites(sites: &mut [&Site], by: SortBy, order: SortOrder, config: &MetricsConfig) {
    match by {
        SortBy::Name => sort_by_key(sites, order, |site| Some(site.name.to_lowercase())),
        SortBy::DateDestroyed => sort_by_key(sites, order, |site| site.date_destroyed),
        SortBy::YearBuilt => sort_by_key(sites, order, |site| parse_year(&site.year_built)),
        SortBy::Glow => sort_by_key(sites, order, |site| Some(glow_contribution(site, config))),
        SortBy::Significance => sort_by_key(sites, order, |site| {
            Some(Score(significance_score(site, config)))
        }),
    }
}

fn sort_by_key<'a, K, F>(sites: &mut [&'a Site], order: SortOrder, key: F)
where
    K: Ord,
    F: Fn(&Site) -> Option<K>,
{
    let mut keyed: Vec<(Option<K>, &'a Site)> = sites.iter().map(|site| (key(*site), *site)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), order));

    for (slot, (_, site)) in sites.iter_mut().zip(keyed) {
        *slot = site;
    }
}

fn compare_keys<K: Ord>(a: Option<&K>, b: Option<&K>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Total order over significance scores
#[derive(Debug, Clone, Copy)]
struct Score(f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
