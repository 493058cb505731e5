//! Storage abstractions for result persistence.
//!
//! Results are appended one coordinate at a time. Each successful coordinate
//! produces one compact JSON array, written directly after the previous one:
//!
//! ```text
//! [{"cl_nom":"A",...}][][{"cl_nom":"B",...},{"cl_nom":"C",...}]
//! ```
//!
//! The file is therefore a sequence of arrays, not a single JSON document.
//! [`LocalSink::load_batches`] reads it back batch by batch.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::EnrichedClub;

// Re-export for convenience
pub use local::LocalSink;

/// Append-only destination for enriched club batches.
#[async_trait]
pub trait ResultSink: Send {
    /// Append one coordinate's batch. Failures are fatal for the run.
    async fn append_batch(&mut self, batch: &[EnrichedClub]) -> Result<()>;
}
