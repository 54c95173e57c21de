//! Site module - the documented heritage site record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of heritage site
///
/// Known tags are closed variants; any other tag is preserved verbatim in
/// [`SiteType::Other`] so datasets with new categories still load and still
/// pass filters that do not constrain the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteType {
    /// Mosque
    Mosque,
    /// Church
    Church,
    /// Museum
    Museum,
    /// Archaeological site
    Archaeological,
    /// Library or archive
    Library,
    /// Historic building (palace, market, house)
    HistoricBuilding,
    /// Monument or memorial
    Monument,
    /// Cemetery
    Cemetery,
    /// Any tag not listed above, lowercased
    Other(String),
}

impl SiteType {
    /// Get the canonical tag for this type
    pub fn as_str(&self) -> &str {
        match self {
            SiteType::Mosque => "mosque",
            SiteType::Church => "church",
            SiteType::Museum => "museum",
            SiteType::Archaeological => "archaeological",
            SiteType::Library => "library",
            SiteType::HistoricBuilding => "historic-building",
            SiteType::Monument => "monument",
            SiteType::Cemetery => "cemetery",
            SiteType::Other(tag) => tag,
        }
    }

    /// Parse a type tag (case-insensitive). Never fails.
    pub fn parse(s: &str) -> Self {
        let tag = s.trim().to_lowercase();
        match tag.as_str() {
            "mosque" => SiteType::Mosque,
            "church" => SiteType::Church,
            "museum" => SiteType::Museum,
            "archaeological" => SiteType::Archaeological,
            "library" => SiteType::Library,
            "historic-building" => SiteType::HistoricBuilding,
            "monument" => SiteType::Monument,
            "cemetery" => SiteType::Cemetery,
            _ => SiteType::Other(tag),
        }
    }
}

impl From<String> for SiteType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SiteType> for String {
    fn from(t: SiteType) -> Self {
        t.as_str().to_string()
    }
}

impl std::str::FromStr for SiteType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Damage status of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SiteStatus {
    /// Completely destroyed
    Destroyed,
    /// Structurally compromised but standing
    HeavilyDamaged,
    /// Partially damaged
    Damaged,
}

impl SiteStatus {
    /// All statuses, most severe first
    pub const ALL: [SiteStatus; 3] = [
        SiteStatus::Destroyed,
        SiteStatus::HeavilyDamaged,
        SiteStatus::Damaged,
    ];

    /// Get the status tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Destroyed => "destroyed",
            SiteStatus::HeavilyDamaged => "heavily-damaged",
            SiteStatus::Damaged => "damaged",
        }
    }

    /// Parse a status from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "destroyed" => Some(SiteStatus::Destroyed),
            "heavily-damaged" => Some(SiteStatus::HeavilyDamaged),
            "damaged" => Some(SiteStatus::Damaged),
            _ => None,
        }
    }
}

impl std::str::FromStr for SiteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid site status: {}", s))
    }
}

impl TryFrom<String> for SiteStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SiteStatus> for String {
    fn from(status: SiteStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position as `[latitude, longitude]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

/// A documented heritage site
///
/// Sites are read-only inputs; nothing in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Arabic name, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_arabic: Option<String>,

    /// Free-text construction date ("1100 BCE", "circa 1200", "7th century")
    #[serde(default)]
    pub year_built: String,

    /// Site type tag
    #[serde(rename = "type")]
    pub site_type: SiteType,

    /// Damage status
    pub status: SiteStatus,

    /// Date the site was destroyed or damaged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_destroyed: Option<NaiveDate>,

    /// Date of the last survey reporting the site's condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_assessment_date: Option<NaiveDate>,

    /// Listed (or tentatively listed) by UNESCO
    #[serde(default)]
    pub unesco_listed: bool,

    /// The only surviving example of its kind
    #[serde(default)]
    pub is_unique: bool,

    /// Active place of worship or pilgrimage
    #[serde(default)]
    pub religious_significance: bool,

    /// Used as a community gathering place
    #[serde(default)]
    pub community_gathering_place: bool,

    /// Number of artifacts held, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_count: Option<u32>,

    /// Notable events in the site's history, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub historical_events: Vec<String>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Location, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Site {
    /// Create a site with every optional attribute absent
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        site_type: SiteType,
        status: SiteStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_arabic: None,
            year_built: String::new(),
            site_type,
            status,
            date_destroyed: None,
            source_assessment_date: None,
            unesco_listed: false,
            is_unique: false,
            religious_significance: false,
            community_gathering_place: false,
            artifact_count: None,
            historical_events: Vec::new(),
            description: None,
            coordinates: None,
        }
    }

    /// Set the free-text construction date
    pub fn with_year_built(mut self, year_built: impl Into<String>) -> Self {
        self.year_built = year_built.into();
        self
    }

    /// Set the destruction date
    pub fn with_date_destroyed(mut self, date: NaiveDate) -> Self {
        self.date_destroyed = Some(date);
        self
    }

    /// Date used for destruction-range filtering
    ///
    /// Falls back to the assessment date when the destruction date is
    /// unknown. Value aggregation does not use this fallback.
    pub fn effective_destruction_date(&self) -> Option<NaiveDate> {
        self.date_destroyed.or(self.source_assessment_date)
    }

    /// Number of recorded historical events
    pub fn event_count(&self) -> usize {
        self.historical_events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_site_type_parsing() {
        assert_eq!(SiteType::parse("Mosque"), SiteType::Mosque);
        assert_eq!(SiteType::parse("ARCHAEOLOGICAL"), SiteType::Archaeological);
        assert_eq!(SiteType::parse("historic-building"), SiteType::HistoricBuilding);
        assert_eq!(
            SiteType::parse("hammam"),
            SiteType::Other("hammam".to_string())
        );
        assert_eq!(SiteType::parse("hammam").as_str(), "hammam");
    }

    #[test]
    fn test_unknown_type_tags_ignore_case() {
        assert_eq!(SiteType::parse("Hammam"), SiteType::parse("hammam"));
        assert_eq!(SiteType::parse(" HAMMAM ").as_str(), "hammam");

        let json = r#"{"id": "x", "name": "Old Hammam", "type": "Hammam", "status": "damaged"}"#;
        let site: Site = serde_json::from_str(json).unwrap();
        assert_eq!(site.site_type, SiteType::Other("hammam".to_string()));
    }

    #[test]
    fn test_site_status_parsing() {
        assert_eq!("destroyed".parse::<SiteStatus>(), Ok(SiteStatus::Destroyed));
        assert_eq!(
            "Heavily-Damaged".parse::<SiteStatus>(),
            Ok(SiteStatus::HeavilyDamaged)
        );
        assert!("ruined".parse::<SiteStatus>().is_err());
    }

    #[test]
    fn test_effective_destruction_date_fallback() {
        let mut site = Site::new("s1", "Test", SiteType::Mosque, SiteStatus::Damaged);
        assert_eq!(site.effective_destruction_date(), None);

        site.source_assessment_date = Some(date("2024-02-10"));
        assert_eq!(site.effective_destruction_date(), Some(date("2024-02-10")));

        site.date_destroyed = Some(date("2023-11-05"));
        assert_eq!(site.effective_destruction_date(), Some(date("2023-11-05")));
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": "great-omari",
            "name": "Great Omari Mosque",
            "nameArabic": "المسجد العمري الكبير",
            "yearBuilt": "7th century",
            "type": "mosque",
            "status": "destroyed",
            "dateDestroyed": "2023-12-08",
            "unescoListed": false,
            "religiousSignificance": true,
            "communityGatheringPlace": true,
            "historicalEvents": ["Converted from a Byzantine church", "Rebuilt after 1927 earthquake"],
            "coordinates": [31.5042, 34.4635]
        }"#;

        let site: Site = serde_json::from_str(json).unwrap();
        assert_eq!(site.site_type, SiteType::Mosque);
        assert_eq!(site.status, SiteStatus::Destroyed);
        assert_eq!(site.date_destroyed, Some(date("2023-12-08")));
        assert_eq!(site.source_assessment_date, None);
        assert!(site.religious_significance);
        assert!(!site.is_unique);
        assert_eq!(site.artifact_count, None);
        assert_eq!(site.event_count(), 2);
        assert_eq!(site.coordinates, Some(Coordinates(31.5042, 34.4635)));
    }

    #[test]
    fn test_unknown_type_round_trips() {
        let json = r#"{"id": "x", "name": "Old Hammam", "type": "hammam", "status": "damaged"}"#;
        let site: Site = serde_json::from_str(json).unwrap();
        assert_eq!(site.site_type, SiteType::Other("hammam".to_string()));

        let out = serde_json::to_value(&site).unwrap();
        assert_eq!(out["type"], "hammam");
        assert_eq!(out["status"], "damaged");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id": "x", "name": "X", "type": "church", "status": "intact"}"#;
        assert!(serde_json::from_str::<Site>(json).is_err());
    }
}
