// src/models/contact.rs

//! Contact information scraped from a club detail page.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field label to value for one role, including the reserved `name` field.
pub type ContactSection = IndexMap<String, String>;

/// Role title to contact section, in document order.
///
/// Equality ignores ordering; iteration follows insertion order, which the
/// main contact fallback relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactMap(IndexMap<String, ContactSection>);

impl ContactMap {
    /// Reserved field holding the person's display name.
    pub const NAME_FIELD: &'static str = "name";

    pub fn new() -> Self {
        Self::default()
    }

    /// Start a section for `title`, replacing any earlier section with the
    /// same title but keeping its position.
    pub fn start_section(
        &mut self,
        title: impl Into<String>,
        name: impl Into<String>,
    ) -> &mut ContactSection {
        let section = self.0.entry(title.into()).or_default();
        section.clear();
        section.insert(Self::NAME_FIELD.to_string(), name.into());
        section
    }

    pub fn get(&self, title: &str) -> Option<&ContactSection> {
        self.0.get(title)
    }

    /// Section titles in insertion order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactSection)> {
        self.0.iter().map(|(title, section)| (title.as_str(), section))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ContactSection)> for ContactMap {
    fn from_iter<I: IntoIterator<Item = (String, ContactSection)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
