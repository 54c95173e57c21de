//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use heritage_domain::{HeritageReport, MetricsConfig, Site, SiteMetrics};
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Integrity at or above this is reported in green.
const INTEGRITY_GOOD: u8 = 80;

/// Integrity below this is reported in red.
const INTEGRITY_CRITICAL: u8 = 50;

/// A site together with its computed metrics, for JSON output.
#[derive(Serialize)]
struct SiteView<'a> {
    #[serde(flatten)]
    site: &'a Site,
    metrics: SiteMetrics,
}

/// One parsed construction date, for JSON output.
#[derive(Serialize)]
struct ParsedYearView<'a> {
    input: &'a str,
    year: Option<i32>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of sites.
    pub fn format_sites(&self, sites: &[&Site], config: &MetricsConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_sites_json(sites, config),
            OutputFormat::Table => self.format_sites_table(sites, config),
            OutputFormat::Quiet => self.format_sites_quiet(sites),
        }
    }

    fn format_sites_json(&self, sites: &[&Site], config: &MetricsConfig) -> Result<String> {
        let views: Vec<SiteView> = sites
            .iter()
            .map(|&site| SiteView {
                site,
                metrics: SiteMetrics::compute(site, config),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&views)?)
    }

    fn format_sites_table(&self, sites: &[&Site], config: &MetricsConfig) -> Result<String> {
        if sites.is_empty() {
            return Ok(self.colorize("No sites found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Type", "Status", "Built", "Year", "Glow", "Age"]);

        for site in sites {
            let metrics = SiteMetrics::compute(site, config);
            builder.push_record([
                site.id.clone(),
                site.name.clone(),
                site.site_type.to_string(),
                site.status.to_string(),
                site.year_built.clone(),
                format_year(metrics.parsed_year),
                metrics.glow_contribution.to_string(),
                format!("{} {}", metrics.age_color.label(), metrics.age_color.hex()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(format!("{}\n{}", table, self.info(&format!("{} site(s)", sites.len()))))
    }

    fn format_sites_quiet(&self, sites: &[&Site]) -> Result<String> {
        let ids: Vec<&str> = sites.iter().map(|s| s.id.as_str()).collect();
        Ok(ids.join("\n"))
    }

    /// Format one site with its metrics.
    pub fn format_site(&self, site: &Site, metrics: &SiteMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&SiteView {
                site,
                metrics: metrics.clone(),
            })?),
            OutputFormat::Quiet => Ok(metrics.glow_contribution.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);

                let rows = [
                    ("ID", site.id.clone()),
                    ("Name", site.name.clone()),
                    ("Arabic name", optional(site.name_arabic.as_deref())),
                    ("Type", site.site_type.to_string()),
                    ("Status", site.status.to_string()),
                    ("Year built", site.year_built.clone()),
                    ("Parsed year", format_year(metrics.parsed_year)),
                    ("Age", metrics.age.map_or_else(|| "-".to_string(), |a| format!("{} years", a))),
                    ("Date destroyed", optional(site.date_destroyed.map(|d| d.to_string()).as_deref())),
                    (
                        "Assessment date",
                        optional(site.source_assessment_date.map(|d| d.to_string()).as_deref()),
                    ),
                    ("UNESCO listed", yes_no(site.unesco_listed)),
                    ("Unique", yes_no(site.is_unique)),
                    ("Religious significance", yes_no(site.religious_significance)),
                    ("Community gathering place", yes_no(site.community_gathering_place)),
                    ("Artifacts", optional(site.artifact_count.map(|c| c.to_string()).as_deref())),
                    ("Historical events", site.event_count().to_string()),
                    ("Glow contribution", metrics.glow_contribution.to_string()),
                    ("Significance score", format!("{:.2}", metrics.significance_score)),
                    (
                        "Age tier",
                        format!("{} {}", metrics.age_color.label(), metrics.age_color.hex()),
                    ),
                ];
                for (field, value) in rows {
                    builder.push_record([field.to_string(), value]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let mut out = table.to_string();
                for (idx, event) in site.historical_events.iter().enumerate() {
                    out.push_str(&format!("\n  {}. {}", idx + 1, event));
                }
                Ok(out)
            }
        }
    }

    /// Format an aggregate report.
    pub fn format_report(&self, report: &HeritageReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.integrity.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["As of".to_string(), report.as_of.to_string()]);
                builder.push_record(["Reference year".to_string(), report.reference_year.to_string()]);
                builder.push_record(["Sites".to_string(), report.site_count.to_string()]);
                builder.push_record(["Total heritage value".to_string(), report.total_value.to_string()]);
                builder.push_record(["Destroyed value".to_string(), report.destroyed.value.to_string()]);
                builder.push_record(["Destroyed sites".to_string(), report.destroyed.count.to_string()]);
                builder.push_record(["Integrity".to_string(), format!("{}%", report.integrity)]);
                for (status, count) in &report.status_counts {
                    builder.push_record([format!("Status: {}", status), count.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!("{}\n{}", table, self.integrity_summary(report.integrity)))
            }
        }
    }

    /// Format parsed construction dates.
    pub fn format_parsed_years(&self, rows: &[(String, Option<i32>)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let views: Vec<ParsedYearView> = rows
                    .iter()
                    .map(|(input, year)| ParsedYearView { input, year: *year })
                    .collect();
                Ok(serde_json::to_string_pretty(&views)?)
            }
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|(_, year)| year.map_or_else(|| "-".to_string(), |y| y.to_string()))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Input", "Year", "Era"]);
                for (input, year) in rows {
                    let raw = year.map_or_else(|| "-".to_string(), |y| y.to_string());
                    builder.push_record([input.clone(), raw, format_year(*year)]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn integrity_summary(&self, integrity: u8) -> String {
        let message = format!("Heritage integrity: {}%", integrity);
        if integrity >= INTEGRITY_GOOD {
            self.colorize(&format!("✓ {}", message), "green")
        } else if integrity >= INTEGRITY_CRITICAL {
            self.warning(&message)
        } else {
            self.colorize(&format!("✗ {}", message), "red")
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a signed year with its era ("800 BCE", "650 CE").
pub fn format_year(year: Option<i32>) -> String {
    match year {
        Some(y) if y < 0 => format!("{} BCE", -(y as i64)),
        Some(y) => format!("{} CE", y),
        None => "unknown".to_string(),
    }
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use heritage_domain::{SiteStatus, SiteType};

    fn create_test_site() -> Site {
        let mut site = Site::new("omari", "Great Omari Mosque", SiteType::Mosque, SiteStatus::Destroyed)
            .with_year_built("7th century")
            .with_date_destroyed(NaiveDate::from_ymd_opt(2023, 12, 8).unwrap());
        site.historical_events = vec!["Converted from a church".to_string()];
        site
    }

    #[test]
    fn test_json_format_includes_metrics() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let site = create_test_site();
        let output = formatter
            .format_sites(&[&site], &MetricsConfig::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], "omari");
        assert_eq!(value[0]["yearBuilt"], "7th century");
        assert_eq!(value[0]["metrics"]["parsed_year"], 650);
        // 100 * 2 * 1.1
        assert_eq!(value[0]["metrics"]["glow_contribution"], 220);
        assert_eq!(value[0]["metrics"]["age_color"], "#CD7F32");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let site = create_test_site();
        let output = formatter
            .format_sites(&[&site], &MetricsConfig::default())
            .unwrap();
        assert_eq!(output, "omari");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let site = create_test_site();
        let output = formatter
            .format_sites(&[&site], &MetricsConfig::default())
            .unwrap();
        assert!(output.contains("Glow"));
        assert!(output.contains("650 CE"));
        assert!(output.contains("1 site(s)"));
    }

    #[test]
    fn test_empty_sites() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_sites(&[], &MetricsConfig::default()).unwrap();
        assert!(output.contains("No sites found"));
    }

    #[test]
    fn test_site_detail_lists_events() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let site = create_test_site();
        let metrics = SiteMetrics::compute(&site, &MetricsConfig::default());
        let output = formatter.format_site(&site, &metrics).unwrap();
        assert!(output.contains("Significance score"));
        assert!(output.contains("1. Converted from a church"));
    }

    #[test]
    fn test_report_formats() {
        let site = create_test_site();
        let report = HeritageReport::compute(
            &[site],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            &MetricsConfig::default(),
        );

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_report(&report).unwrap();
        assert_eq!(quiet, "0");

        let table = Formatter::new(OutputFormat::Table, false).format_report(&report).unwrap();
        assert!(table.contains("Total heritage value"));
        assert!(table.contains("Status: heavily-damaged"));
        assert!(table.contains("✗ Heritage integrity: 0%"));

        let json = Formatter::new(OutputFormat::Json, false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["destroyed"]["count"], 1);
        assert_eq!(value["status_counts"]["destroyed"], 1);
    }

    #[test]
    fn test_parsed_years_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let rows = vec![("800 BCE".to_string(), Some(-800)), ("unknown".to_string(), None)];
        assert_eq!(formatter.format_parsed_years(&rows).unwrap(), "-800\n-");
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(Some(-800)), "800 BCE");
        assert_eq!(format_year(Some(650)), "650 CE");
        assert_eq!(format_year(None), "unknown");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("test"), "ℹ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
