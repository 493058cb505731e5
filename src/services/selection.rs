// src/services/selection.rs

//! Main contact selection.

use crate::models::{ContactMap, ContactSection, SelectionConfig};

/// Picks the single best email from a club's contacts.
///
/// Priority titles are tried in order, then every other title in document
/// order. Within a title the first present email field wins.
#[derive(Debug, Clone)]
pub struct ContactSelector {
    titles: Vec<String>,
    fields: Vec<String>,
}

impl ContactSelector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            titles: config.title_priority.clone(),
            fields: config.email_fields.clone(),
        }
    }

    /// Select the main email, or `None` when no section carries one.
    pub fn select<'a>(&self, contacts: &'a ContactMap) -> Option<&'a str> {
        let prioritized = self.titles.iter().filter_map(|title| contacts.get(title));
        let remaining = contacts
            .iter()
            .filter(|(title, _)| !self.is_priority(title))
            .map(|(_, section)| section);

        prioritized
            .chain(remaining)
            .find_map(|section| self.email_in(section))
    }

    fn is_priority(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    fn email_in<'a>(&self, section: &'a ContactSection) -> Option<&'a str> {
        self.fields
            .iter()
            .find_map(|field| section.get(field))
            .map(String::as_str)
    }
}

impl Default for ContactSelector {
    fn default() -> Self {
        Self::new(&SelectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts(sections: Vec<(&str, Vec<(&str, &str)>)>) -> ContactMap {
        let mut map = ContactMap::new();
        for (title, fields) in sections {
            let section = map.start_section(title, "someone");
            for (label, value) in fields {
                section.insert(label.to_string(), value.to_string());
            }
        }
        map
    }

    #[test]
    fn test_highest_priority_title_wins() {
        let map = contacts(vec![
            ("TRESORIER", vec![("Email principal", "t@x.com")]),
            ("PRESIDENT", vec![("Email autre", "p@x.com")]),
        ]);
        assert_eq!(ContactSelector::default().select(&map), Some("p@x.com"));
    }

    #[test]
    fn test_highest_priority_field_wins_within_title() {
        let map = contacts(vec![(
            "CORRESPONDANT",
            vec![
                ("Email autre", "other@x.com"),
                ("Email officiel", "official@x.com"),
            ],
        )]);
        assert_eq!(
            ContactSelector::default().select(&map),
            Some("official@x.com")
        );
    }

    #[test]
    fn test_priority_title_without_email_is_skipped() {
        let map = contacts(vec![
            ("PRESIDENT", vec![("Téléphone", "0102030405")]),
            ("SECRETAIRE GENERAL", vec![("Email principal", "s@x.com")]),
        ]);
        assert_eq!(ContactSelector::default().select(&map), Some("s@x.com"));
    }

    #[test]
    fn test_falls_back_to_other_titles_in_insertion_order() {
        let map = contacts(vec![
            ("EDUCATEUR", vec![("Téléphone", "0102030405")]),
            ("ARBITRE", vec![("Email autre", "a@x.com")]),
            ("MEDECIN", vec![("Email principal", "m@x.com")]),
        ]);
        assert_eq!(ContactSelector::default().select(&map), Some("a@x.com"));
    }

    #[test]
    fn test_priority_titles_beat_earlier_other_titles() {
        let map = contacts(vec![
            ("ARBITRE", vec![("Email principal", "a@x.com")]),
            ("DIRECTEUR TECHNIQUE", vec![("Email autre", "d@x.com")]),
        ]);
        assert_eq!(ContactSelector::default().select(&map), Some("d@x.com"));
    }

    #[test]
    fn test_no_email_anywhere_is_absent() {
        let map = contacts(vec![("PRESIDENT", vec![("Téléphone", "0102030405")])]);
        assert_eq!(ContactSelector::default().select(&map), None);
        assert_eq!(ContactSelector::default().select(&ContactMap::new()), None);
    }
}
