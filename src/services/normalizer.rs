// src/services/normalizer.rs

//! Turns raw search records into clubs with a detail page URL.

use crate::models::{Club, Coordinate, RawEntity, keys};
use crate::utils::scalar_text;

/// Strips internal fields and derives the detail page URL.
#[derive(Debug, Clone)]
pub struct ClubNormalizer {
    base_url: String,
}

impl ClubNormalizer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `{base_url}{code}-{slug}/information.html`
    pub fn detail_url(&self, code: &str, slug: &str) -> String {
        format!("{}{}-{}/information.html", self.base_url, code, slug)
    }

    /// Normalize one record. Returns `None` when the code or slug is missing.
    pub fn normalize(&self, mut raw: RawEntity) -> Option<Club> {
        let code = raw.get(keys::CODE).and_then(scalar_text)?;
        let slug = raw.get(keys::NAME_SLUG).and_then(scalar_text)?;
        let detail_url = self.detail_url(&code, &slug);

        for key in keys::INTERNAL {
            raw.remove(key);
        }

        Some(Club {
            fields: raw,
            detail_url,
        })
    }

    /// Normalize every record of a coordinate, logging the ones dropped.
    pub fn normalize_all(&self, coordinate: &Coordinate, raws: Vec<RawEntity>) -> Vec<Club> {
        let total = raws.len();
        let clubs: Vec<Club> = raws
            .into_iter()
            .filter_map(|raw| {
                let name = raw
                    .get(keys::NAME)
                    .and_then(scalar_text)
                    .unwrap_or_else(|| "<unnamed>".to_string());
                let club = self.normalize(raw);
                if club.is_none() {
                    log::warn!(
                        "Dropping club {} at {}: missing {} or {}",
                        name,
                        coordinate,
                        keys::CODE,
                        keys::NAME_SLUG
                    );
                }
                club
            })
            .collect();

        if clubs.len() < total {
            log::debug!(
                "Normalized {}/{} clubs at {}",
                clubs.len(),
                total,
                coordinate
            );
        }
        clubs
    }
}
