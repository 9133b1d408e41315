// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Input locations and report options for a market profiling run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::schema::google;

/// Configuration for a market profiling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// App Store export (default: AppleStore.csv)
    pub apple_path: PathBuf,

    /// Google Play export (default: googleplaystore.csv)
    pub google_path: PathBuf,

    /// Drop the known-bad Google row before cleaning
    pub apply_row_correction: bool,

    /// Google data row dropped when `apply_row_correction` is set
    pub google_bad_row: usize,

    /// Rows previewed per dataset in the exploration section (default: 3)
    pub explore_rows: usize,

    /// tracing env-filter directive (default: "info")
    pub log_filter: String,

    /// App Store genres listed app-by-app
    pub apple_drilldown_genres: Vec<String>,

    /// Google Play categories listed in full, every free English app
    pub google_listing_categories: Vec<String>,

    /// Google Play categories listed app-by-app, top install tiers only
    pub google_drilldown_categories: Vec<String>,

    /// Installs buckets that count as "top" in Google drill-downs
    pub google_top_install_tiers: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            apple_path: PathBuf::from("AppleStore.csv"),
            google_path: PathBuf::from("googleplaystore.csv"),
            apply_row_correction: true,
            google_bad_row: google::KNOWN_BAD_ROW,
            explore_rows: 3,
            log_filter: "info".to_string(),
            apple_drilldown_genres: to_strings(&["Navigation", "Social Networking", "Music"]),
            google_listing_categories: to_strings(&["BOOKS_AND_REFERENCE"]),
            google_drilldown_categories: to_strings(&["COMMUNICATION", "BOOKS_AND_REFERENCE"]),
            google_top_install_tiers: to_strings(&[
                "1,000,000,000+",
                "500,000,000+",
                "100,000,000+",
            ]),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl AnalysisConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for in-memory fixtures: no known bad row, no preview
    pub fn fixture() -> Self {
        Self {
            apply_row_correction: false,
            explore_rows: 0,
            ..Default::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.apple_path.as_os_str().is_empty() {
            return Err("apple_path must not be empty".to_string());
        }
        if self.google_path.as_os_str().is_empty() {
            return Err("google_path must not be empty".to_string());
        }
        if self.apple_path == self.google_path {
            return Err("apple_path and google_path must differ".to_string());
        }
        if self.log_filter.trim().is_empty() {
            return Err("log_filter must not be empty".to_string());
        }
        if self
            .google_top_install_tiers
            .iter()
            .any(|tier| !tier.ends_with('+'))
        {
            return Err("google_top_install_tiers entries must end with '+'".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
        assert_eq!(AnalysisConfig::default().google_bad_row, 10472);
        assert!(!AnalysisConfig::fixture().apply_row_correction);
    }

    #[test]
    fn test_default_listings() {
        let config = AnalysisConfig::default();
        assert_eq!(
            config.apple_drilldown_genres,
            vec!["Navigation", "Social Networking", "Music"]
        );
        assert_eq!(config.google_listing_categories, vec!["BOOKS_AND_REFERENCE"]);
    }

    #[test]
    fn test_same_paths_rejected() {
        let config = AnalysisConfig {
            google_path: PathBuf::from("AppleStore.csv"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_install_tier_needs_plus() {
        let config = AnalysisConfig {
            google_top_install_tiers: vec!["1,000".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
