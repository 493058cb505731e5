// src/models/mod.rs

//! Domain models for the club crawler.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod club;
mod config;
mod contact;
mod coordinate;

// Re-export all public types
pub use club::{Club, EnrichedClub, RawEntity, keys};
pub use config::{
    Config, CrawlerConfig, DetailConfig, PathsConfig, SearchConfig, SelectionConfig,
};
pub use contact::{ContactMap, ContactSection};
pub use coordinate::Coordinate;
