//! Service layer for the club crawler.
//!
//! This module contains the business logic for:
//! - Club search and detail page access (`ClubDirectory`)
//! - Record normalization (`ClubNormalizer`)
//! - Contact extraction (`ContactExtractor`)
//! - Main contact selection (`ContactSelector`)

mod contacts;
mod directory;
mod normalizer;
mod selection;

pub use contacts::ContactExtractor;
pub use directory::{ClubDirectory, ClubSource, DetailSource};
pub use normalizer::ClubNormalizer;
pub use selection::ContactSelector;
