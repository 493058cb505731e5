// src/pipeline/run.rs

//! Run driver: coordinates in, appended batches out.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Config, Coordinate};
use crate::pipeline::{BatchOutcome, CoordinateStream, EnrichmentPipeline};
use crate::services::{ClubDirectory, ClubSource};
use crate::storage::{LocalSink, ResultSink};
use crate::utils::http;

/// Summary of a run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Coordinates pulled from the stream, including failed rows
    pub coordinates: usize,
    /// Coordinates whose batch was appended
    pub succeeded: usize,
    /// Coordinates skipped after an error
    pub failed: usize,
    pub clubs_written: usize,
    pub clubs_with_email: usize,
    /// Clubs left out by normalization or detail failures
    pub clubs_excluded: usize,
}

impl RunOutcome {
    fn started() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            coordinates: 0,
            succeeded: 0,
            failed: 0,
            clubs_written: 0,
            clubs_with_email: 0,
            clubs_excluded: 0,
        }
    }
}

/// Drives coordinates through search and enrichment into a sink.
///
/// A failing coordinate is logged and skipped. Only sink errors stop the run.
pub struct RunWriter<'a> {
    source: &'a dyn ClubSource,
    pipeline: EnrichmentPipeline<'a>,
}

impl<'a> RunWriter<'a> {
    pub fn new(source: &'a dyn ClubSource, pipeline: EnrichmentPipeline<'a>) -> Self {
        Self { source, pipeline }
    }

    /// Process every coordinate in order, appending one batch per success.
    pub async fn run<I>(&self, coordinates: I, sink: &mut dyn ResultSink) -> Result<RunOutcome>
    where
        I: IntoIterator<Item = Result<Coordinate>>,
    {
        let mut outcome = RunOutcome::started();

        for item in coordinates {
            outcome.coordinates += 1;

            let coordinate = match item {
                Ok(coordinate) => coordinate,
                Err(error) => {
                    outcome.failed += 1;
                    log::error!("Coordinate row skipped: {}", error);
                    continue;
                }
            };

            let batch = match self.process(&coordinate).await {
                Ok(batch) => batch,
                Err(error) => {
                    outcome.failed += 1;
                    log::error!("Data ({}) failed: {}", coordinate, error);
                    continue;
                }
            };

            sink.append_batch(&batch.clubs).await?;

            outcome.succeeded += 1;
            outcome.clubs_written += batch.clubs.len();
            outcome.clubs_with_email += batch
                .clubs
                .iter()
                .filter(|club| club.main_email.is_some())
                .count();
            outcome.clubs_excluded += batch.dropped + batch.failed;

            log::info!(
                "Data ({}) successfully written: {} club(s), {} excluded",
                coordinate,
                batch.clubs.len(),
                batch.dropped + batch.failed
            );
        }

        outcome.finished_at = Utc::now();
        Ok(outcome)
    }

    async fn process(&self, coordinate: &Coordinate) -> Result<BatchOutcome> {
        let raws = self.source.search(coordinate).await?;
        log::debug!("Search at {} returned {} record(s)", coordinate, raws.len());
        Ok(self.pipeline.enrich(coordinate, raws).await)
    }
}

/// Run the crawler over `input`, appending results to `output`.
///
/// `skip` omits the first data rows, for resuming an interrupted run.
pub async fn run_crawler(
    config: &Config,
    input: &Path,
    output: &Path,
    skip: u64,
) -> Result<RunOutcome> {
    log::info!(
        "Crawling clubs from {} into {} (skipping {} row(s))",
        input.display(),
        output.display(),
        skip
    );

    let client = http::create_async_client(&config.crawler)?;
    let directory = ClubDirectory::new(client, config.search.clone());
    let pipeline = EnrichmentPipeline::new(config, &directory)?;
    let writer = RunWriter::new(&directory, pipeline);

    let coordinates = CoordinateStream::open(input, skip)?;
    let mut sink = LocalSink::open(output).await?;

    let outcome = writer.run(coordinates, &mut sink).await?;

    let elapsed = outcome.finished_at - outcome.started_at;
    log::info!(
        "Run finished in {}s: {}/{} coordinate(s) written, {} failed",
        elapsed.num_seconds(),
        outcome.succeeded,
        outcome.coordinates,
        outcome.failed
    );
    log::info!(
        "Clubs written: {} ({} with main email, {} excluded)",
        outcome.clubs_written,
        outcome.clubs_with_email,
        outcome.clubs_excluded
    );

    Ok(outcome)
}
