// src/pipeline/enrich.rs

//! Per-coordinate enrichment: normalize, fetch details, extract, select.

use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{Club, Config, Coordinate, EnrichedClub, RawEntity};
use crate::services::{ClubNormalizer, ContactExtractor, ContactSelector, DetailSource};

/// Result of enriching one coordinate's clubs.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Enriched clubs, in search result order
    pub clubs: Vec<EnrichedClub>,
    /// Records returned by the search
    pub received: usize,
    /// Records dropped by normalization
    pub dropped: usize,
    /// Clubs whose detail page could not be fetched or parsed
    pub failed: usize,
}

/// Turns raw search records into enriched clubs.
///
/// Detail pages are fetched through a bounded pool; a failing club is logged
/// and left out without affecting its siblings.
pub struct EnrichmentPipeline<'a> {
    details: &'a dyn DetailSource,
    normalizer: ClubNormalizer,
    extractor: ContactExtractor,
    selector: ContactSelector,
    concurrency: usize,
}

impl<'a> EnrichmentPipeline<'a> {
    pub fn new(config: &Config, details: &'a dyn DetailSource) -> Result<Self> {
        Ok(Self {
            details,
            normalizer: ClubNormalizer::new(&config.detail.base_url),
            extractor: ContactExtractor::new(&config.detail)?,
            selector: ContactSelector::new(&config.selection),
            concurrency: config.crawler.max_concurrent.max(1),
        })
    }

    /// Enrich every club found around `coordinate`.
    ///
    /// Always completes: per-club failures are counted in the outcome.
    pub async fn enrich(&self, coordinate: &Coordinate, raws: Vec<RawEntity>) -> BatchOutcome {
        let received = raws.len();
        let clubs = self.normalizer.normalize_all(coordinate, raws);

        let mut outcome = BatchOutcome {
            received,
            dropped: received - clubs.len(),
            ..BatchOutcome::default()
        };

        let mut results = stream::iter(clubs)
            .map(|club| async move {
                let url = club.detail_url.clone();
                (url, self.enrich_club(club).await)
            })
            .buffered(self.concurrency);

        while let Some((url, result)) = results.next().await {
            match result {
                Ok(enriched) => outcome.clubs.push(enriched),
                Err(error) => {
                    outcome.failed += 1;
                    log::warn!("Club {} at {} excluded: {}", url, coordinate, error);
                }
            }
        }

        outcome
    }

    /// Fetch, extract and select contacts for one club.
    pub async fn enrich_club(&self, club: Club) -> Result<EnrichedClub> {
        let html = self.details.fetch_detail(&club.detail_url).await?;
        let contact = self.extractor.extract_html(&html, &club.detail_url)?;
        let main_email = self.selector.select(&contact).map(str::to_string);

        if main_email.is_none() {
            log::debug!("No main email for {}", club.detail_url);
        }

        Ok(EnrichedClub {
            club,
            contact,
            main_email,
        })
    }
}
