//! Filter pipeline
//!
//! Narrows a site collection through four stages, each consuming the output
//! of the previous one:
//!
//! 1. Type and status selection
//! 2. Destruction-date range (on the effective destruction date)
//! 3. Creation-year range (on the parsed construction year)
//! 4. Free-text search on the name
//!
//! The pipeline never reorders sites, and a default [`FilterState`] returns
//! the input unchanged.

use crate::{parse_year, Site, SiteStatus, SiteType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Inclusive calendar-date range; an absent bound is unconstrained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest date kept
    pub start: Option<NaiveDate>,
    /// Latest date kept
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range with both bounds given
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `date` lies within the set bounds
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Inclusive signed-year range (negative = BCE); an absent bound is unconstrained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// Earliest year kept
    pub start: Option<i32>,
    /// Latest year kept
    pub end: Option<i32>,
}

impl YearRange {
    /// Range with both bounds given
    pub fn between(start: i32, end: i32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `year` lies within the set bounds
    pub fn contains(&self, year: i32) -> bool {
        self.start.is_none_or(|start| year >= start) && self.end.is_none_or(|end| year <= end)
    }
}

/// Active filter criteria
///
/// Every criterion is optional: an empty selection, an unbounded range or a
/// blank search term imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Types to keep (empty = all)
    #[serde(default)]
    pub selected_types: HashSet<SiteType>,
    /// Statuses to keep (empty = all)
    #[serde(default)]
    pub selected_statuses: HashSet<SiteStatus>,
    /// Range on the effective destruction date
    #[serde(default)]
    pub destruction_range: DateRange,
    /// Range on the parsed construction year
    #[serde(default)]
    pub creation_range: YearRange,
    /// Search term matched against names
    #[serde(default)]
    pub search_term: String,
}

impl FilterState {
    /// Whether no criterion is active
    pub fn is_empty(&self) -> bool {
        self.selected_types.is_empty()
            && self.selected_statuses.is_empty()
            && self.destruction_range.is_unbounded()
            && self.creation_range.is_unbounded()
            && self.search_term.trim().is_empty()
    }
}

/// Run every filter stage in order
///
/// # Examples
///
/// ```
/// use heritage_domain::{filter_sites, FilterState, Site, SiteStatus, SiteType};
///
/// let sites = vec![
///     Site::new("1", "Great Omari Mosque", SiteType::Mosque, SiteStatus::Destroyed),
///     Site::new("2", "Church of Saint Porphyrius", SiteType::Church, SiteStatus::Damaged),
/// ];
///
/// let mut state = FilterState::default();
/// state.selected_types.insert(SiteType::Mosque);
///
/// let kept = filter_sites(&sites, &state);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].id, "1");
/// ```
pub fn filter_sites<'a>(sites: &'a [Site], state: &FilterState) -> Vec<&'a Site> {
    let kept: Vec<&Site> = sites.iter().collect();

    let kept = filter_by_type_and_status(kept, &state.selected_types, &state.selected_statuses);
    tracing::debug!(remaining = kept.len(), "Applied type/status filter");

    let kept = filter_by_destruction_date(kept, &state.destruction_range);
    tracing::debug!(remaining = kept.len(), "Applied destruction-date filter");

    let kept = filter_by_creation_year(kept, &state.creation_range);
    tracing::debug!(remaining = kept.len(), "Applied creation-year filter");

    let kept = filter_by_search(kept, &state.search_term);
    tracing::debug!(remaining = kept.len(), "Applied search filter");

    kept
}

/// Stage 1: keep sites whose type and status are selected
pub fn filter_by_type_and_status<'a>(
    sites: Vec<&'a Site>,
    types: &HashSet<SiteType>,
    statuses: &HashSet<SiteStatus>,
) -> Vec<&'a Site> {
    sites
        .into_iter()
        .filter(|site| types.is_empty() || types.contains(&site.site_type))
        .filter(|site| statuses.is_empty() || statuses.contains(&site.status))
        .collect()
}

/// Stage 2: keep sites whose effective destruction date is within range
///
/// With any bound set, sites that have neither a destruction nor an
/// assessment date are dropped.
pub fn filter_by_destruction_date<'a>(sites: Vec<&'a Site>, range: &DateRange) -> Vec<&'a Site> {
    if range.is_unbounded() {
        return sites;
    }

    sites
        .into_iter()
        .filter(|site| {
            site.effective_destruction_date()
                .is_some_and(|date| range.contains(date))
        })
        .collect()
}

/// Stage 3: keep sites built within range
///
/// Sites whose construction date cannot be parsed always pass.
pub fn filter_by_creation_year<'a>(sites: Vec<&'a Site>, range: &YearRange) -> Vec<&'a Site> {
    if range.is_unbounded() {
        return sites;
    }

    sites
        .into_iter()
        .filter(|site| parse_year(&site.year_built).is_none_or(|year| range.contains(year)))
        .collect()
}

/// Stage 4: keep sites whose name contains the search term
///
/// The English name is matched case-insensitively, the Arabic name exactly.
/// A blank term keeps everything.
pub fn filter_by_search<'a>(sites: Vec<&'a Site>, term: &str) -> Vec<&'a Site> {
    let term = term.trim();
    if term.is_empty() {
        return sites;
    }

    let needle = term.to_lowercase();
    sites
        .into_iter()
        .filter(|site| {
            site.name.to_lowercase().contains(&needle)
                || site
                    .name_arabic
                    .as_deref()
                    .is_some_and(|arabic| arabic.contains(term))
        })
        .collect()
}
