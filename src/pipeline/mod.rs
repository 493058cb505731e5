//! Pipeline entry points for crawler operations.
//!
//! - `CoordinateStream`: Read search origins from the coordinate table
//! - `EnrichmentPipeline`: Turn one coordinate's search results into enriched clubs
//! - `RunWriter` / `run_crawler`: Drive a whole run into the output sink

pub mod coordinates;
pub mod enrich;
pub mod run;

pub use coordinates::CoordinateStream;
pub use enrich::{BatchOutcome, EnrichmentPipeline};
pub use run::{RunOutcome, RunWriter, run_crawler};
