// src/services/contacts.rs

//! Contact extraction from club information pages.
//!
//! The staff container holds one block per role. Each block starts with two
//! bold lines (role title, then person name) followed by `label : value`
//! lines.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{ContactMap, DetailConfig};
use crate::utils::normalize_whitespace;

/// Parses the staff section of a detail page into a [`ContactMap`].
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    container: Selector,
    section: Selector,
    heading: Selector,
    field: Selector,
    separator: String,
}

impl ContactExtractor {
    /// Compile the configured selectors.
    pub fn new(config: &DetailConfig) -> Result<Self> {
        Ok(Self {
            container: Self::parse_selector(&config.container_selector)?,
            section: Self::parse_selector(&config.section_selector)?,
            heading: Self::parse_selector(&config.heading_selector)?,
            field: Self::parse_selector(&config.field_selector)?,
            separator: config.field_separator.clone(),
        })
    }

    /// Parse raw markup and extract its contacts.
    pub fn extract_html(&self, html: &str, url: &str) -> Result<ContactMap> {
        let document = Html::parse_document(html);
        self.extract(&document, url)
    }

    /// Extract contacts from a parsed page. `url` is only used in errors.
    ///
    /// A missing container, or a role block without title and name lines,
    /// is a [`AppError::MalformedContactSection`]. A container without any
    /// role block yields an empty map.
    pub fn extract(&self, document: &Html, url: &str) -> Result<ContactMap> {
        let container = document
            .select(&self.container)
            .next()
            .ok_or_else(|| AppError::malformed(url, "staff container not found"))?;

        let mut contacts = ContactMap::new();
        for (position, block) in container.select(&self.section).enumerate() {
            let mut headings = block.select(&self.heading).map(element_text);
            let (Some(title), Some(name)) = (headings.next(), headings.next()) else {
                return Err(AppError::malformed(
                    url,
                    format!("role block {position} lacks title and name lines"),
                ));
            };

            let fields = contacts.start_section(title, name);
            for line in block.select(&self.field) {
                if self.heading.matches(&line) {
                    continue;
                }
                let text = element_text(line);
                match text.split_once(self.separator.as_str()) {
                    Some((label, value)) => {
                        fields.insert(label.trim().to_string(), value.trim().to_string());
                    }
                    None => log::debug!("Skipping unlabeled contact line '{}' in {}", text, url),
                }
            }
        }

        Ok(contacts)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new(&DetailConfig::default()).expect("default contact selectors are valid")
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}
