//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Club finder query parameters
    #[serde(default)]
    pub search: SearchConfig,

    /// Detail page location and contact markup selectors
    #[serde(default)]
    pub detail: DetailConfig,

    /// Main contact priority rules
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }

        url::Url::parse(&self.search.endpoint)?;
        url::Url::parse(&self.detail.base_url)?;
        if self.search.radius.trim().is_empty() {
            return Err(AppError::validation("search.radius is empty"));
        }

        for selector in [
            &self.detail.container_selector,
            &self.detail.section_selector,
            &self.detail.heading_selector,
            &self.detail.field_selector,
        ] {
            Selector::parse(selector)
                .map_err(|e| AppError::selector(selector.as_str(), format!("{e:?}")))?;
        }
        if self.detail.field_separator.is_empty() {
            return Err(AppError::validation("detail.field_separator is empty"));
        }

        if self.selection.email_fields.is_empty() {
            return Err(AppError::validation("selection.email_fields is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent detail page requests within one coordinate
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Club finder API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint receiving the form POST
    #[serde(default = "defaults::search_endpoint")]
    pub endpoint: String,

    /// Search radius sent verbatim, in kilometers
    #[serde(default = "defaults::radius")]
    pub radius: String,

    /// Values sent as `find_club[licenceType1][]`
    #[serde(default = "defaults::licence_type1")]
    pub licence_type1: Vec<String>,

    /// Values sent as `find_club[licenceType2][]`
    #[serde(default = "defaults::licence_type2")]
    pub licence_type2: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::search_endpoint(),
            radius: defaults::radius(),
            licence_type1: defaults::licence_type1(),
            licence_type2: defaults::licence_type2(),
        }
    }
}

/// Detail page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailConfig {
    /// Prefix of every club information page
    #[serde(default = "defaults::detail_base_url")]
    pub base_url: String,

    /// Selector for the staff container
    #[serde(default = "defaults::container_selector")]
    pub container_selector: String,

    /// Selector for each role block inside the container
    #[serde(default = "defaults::section_selector")]
    pub section_selector: String,

    /// Selector for the bold title and name lines of a role block
    #[serde(default = "defaults::heading_selector")]
    pub heading_selector: String,

    /// Selector for "label : value" lines (heading lines are skipped)
    #[serde(default = "defaults::field_selector")]
    pub field_selector: String,

    /// Separator between a field label and its value
    #[serde(default = "defaults::field_separator")]
    pub field_separator: String,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::detail_base_url(),
            container_selector: defaults::container_selector(),
            section_selector: defaults::section_selector(),
            heading_selector: defaults::heading_selector(),
            field_selector: defaults::field_selector(),
            field_separator: defaults::field_separator(),
        }
    }
}

/// Main contact selection rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Role titles, most preferred first
    #[serde(default = "defaults::title_priority")]
    pub title_priority: Vec<String>,

    /// Email field labels, most preferred first
    #[serde(default = "defaults::email_fields")]
    pub email_fields: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            title_priority: defaults::title_priority(),
            email_fields: defaults::email_fields(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// CSV of latitude/longitude rows
    #[serde(default = "defaults::input")]
    pub input: PathBuf,

    /// Append-only JSON output
    #[serde(default = "defaults::output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: defaults::input(),
            output: defaults::output(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; club-crawler/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        4
    }

    // Search defaults
    pub fn search_endpoint() -> String {
        "https://www.fff.fr/api/find-club".into()
    }
    pub fn radius() -> String {
        "5".into()
    }
    pub fn licence_type1() -> Vec<String> {
        vec!["FC".into(), "FL".into(), "FH".into()]
    }
    pub fn licence_type2() -> Vec<String> {
        vec!["F11".into(), "F8".into(), "FS".into(), "BS".into()]
    }

    // Detail page defaults
    pub fn detail_base_url() -> String {
        "https://www.fff.fr/competition/club/".into()
    }
    pub fn container_selector() -> String {
        "section.staff.container".into()
    }
    pub fn section_selector() -> String {
        "section.legende_map".into()
    }
    pub fn heading_selector() -> String {
        "p.bold".into()
    }
    pub fn field_selector() -> String {
        "p.margin_b8".into()
    }
    pub fn field_separator() -> String {
        " : ".into()
    }

    // Selection defaults
    pub fn title_priority() -> Vec<String> {
        [
            "CORRESPONDANT",
            "PRESIDENT",
            "VICE PRESIDENT",
            "SECRETAIRE GENERAL",
            "TRESORIER",
            "RESPONSABLE TECHNIQUE JEUNES",
            "DIRECTEUR TECHNIQUE",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn email_fields() -> Vec<String> {
        ["Email principal", "Email officiel", "Email autre"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    // Path defaults
    pub fn input() -> PathBuf {
        PathBuf::from("data/lat_long.csv")
    }
    pub fn output() -> PathBuf {
        PathBuf::from("data/fff_clubs.json")
    }
}
