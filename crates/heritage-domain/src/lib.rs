//! Heritage Watch Domain Layer
//!
//! This crate contains the core computation over documented cultural-heritage
//! sites: parsing free-text construction dates, computing per-site and
//! aggregate heritage metrics, and narrowing a site collection through the
//! filter pipeline.
//!
//! ## Key Concepts
//!
//! - **Site**: An immutable record of a documented heritage site
//! - **Parsed year**: A signed year (negative = BCE) recovered from free text
//! - **Glow contribution**: Multiplicatively weighted importance of a site
//! - **Significance score**: Additively weighted importance of a site
//! - **Integrity**: Share of total glow value not yet destroyed as of a date
//!
//! ## Architecture
//!
//! Every operation is a pure, synchronous function over borrowed input.
//! Nothing here performs I/O or holds shared state; loading datasets and
//! rendering results live in the CLI crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date_parser;
pub mod filter;
pub mod metrics;
pub mod site;
pub mod sort;

// Re-exports for convenience
pub use date_parser::parse_year;
pub use filter::{filter_sites, DateRange, FilterState, YearRange};
pub use metrics::{
    age_color_code, destroyed_value, glow_contribution, heritage_integrity, significance_score,
    site_age, total_heritage_value, AgeColor, DestroyedValue, HeritageReport, MetricsConfig,
    SiteMetrics, DEFAULT_REFERENCE_YEAR,
};
pub use site::{Coordinates, Site, SiteStatus, SiteType};
pub use sort::{sort_sites, SortBy, SortOrder};
