// src/pipeline/coordinates.rs

//! Lazy coordinate reader over the latitude/longitude table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};

use crate::error::{AppError, Result};
use crate::models::Coordinate;

/// Ordered `(index, latitude, longitude)` rows from a two-column CSV.
///
/// The index is the 0-based data row. Rows below `skip` are read but not
/// yielded, so a resumed run keeps the original indices. The stream holds no
/// persisted cursor: resume by opening a new stream with a larger `skip`.
pub struct CoordinateStream<R: Read> {
    records: StringRecordsIntoIter<R>,
    next_index: u64,
    skip: u64,
}

impl CoordinateStream<File> {
    /// Open a coordinate table on disk.
    pub fn open(path: impl AsRef<Path>, skip: u64) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, skip)
    }
}

impl<R: Read> CoordinateStream<R> {
    /// Wrap any reader producing CSV with a header row.
    pub fn from_reader(reader: R, skip: u64) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns = reader.headers()?.len();
        if columns != 2 {
            return Err(AppError::validation(format!(
                "coordinate table must have 2 columns (latitude, longitude), found {columns}"
            )));
        }

        Ok(Self {
            records: reader.into_records(),
            next_index: 0,
            skip,
        })
    }
}

impl<R: Read> Iterator for CoordinateStream<R> {
    type Item = Result<Coordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.records.next()?;
            let index = self.next_index;
            self.next_index += 1;

            if index < self.skip {
                continue;
            }

            return Some(
                record
                    .map_err(|e| AppError::Input {
                        index,
                        message: e.to_string(),
                    })
                    .and_then(|record| parse_row(index, &record)),
            );
        }
    }
}

fn parse_row(index: u64, record: &StringRecord) -> Result<Coordinate> {
    let latitude = parse_degrees(index, record, 0, "latitude", 90.0)?;
    let longitude = parse_degrees(index, record, 1, "longitude", 180.0)?;
    Ok(Coordinate::new(index, latitude, longitude))
}

fn parse_degrees(
    index: u64,
    record: &StringRecord,
    position: usize,
    column: &str,
    limit: f64,
) -> Result<f64> {
    let raw = record.get(position).unwrap_or_default();
    let value: f64 = raw.parse().map_err(|_| AppError::Input {
        index,
        message: format!("invalid {column} '{raw}'"),
    })?;

    if !value.is_finite() || value.abs() > limit {
        return Err(AppError::Input {
            index,
            message: format!("{column} {value} out of range"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "latitude,longitude\n48.85,2.35\n45.75,4.85\n43.3,5.37\n";

    fn collect(stream: CoordinateStream<&[u8]>) -> Vec<Coordinate> {
        stream.map(|c| c.unwrap()).collect()
    }

    #[test]
    fn test_reads_rows_in_order_with_indices() {
        let coordinates = collect(CoordinateStream::from_reader(TABLE.as_bytes(), 0).unwrap());
        assert_eq!(
            coordinates,
            [
                Coordinate::new(0, 48.85, 2.35),
                Coordinate::new(1, 45.75, 4.85),
                Coordinate::new(2, 43.3, 5.37),
            ]
        );
    }

    #[test]
    fn test_skip_keeps_original_indices() {
        let coordinates = collect(CoordinateStream::from_reader(TABLE.as_bytes(), 2).unwrap());
        assert_eq!(coordinates, [Coordinate::new(2, 43.3, 5.37)]);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let stream = CoordinateStream::from_reader(TABLE.as_bytes(), 10).unwrap();
        assert_eq!(stream.count(), 0);
    }

    #[test]
    fn test_restart_with_offset_is_independent() {
        let first: Vec<_> = CoordinateStream::from_reader(TABLE.as_bytes(), 0)
            .unwrap()
            .take(1)
            .map(|c| c.unwrap().index)
            .collect();
        let resumed: Vec<_> = CoordinateStream::from_reader(TABLE.as_bytes(), 1)
            .unwrap()
            .map(|c| c.unwrap().index)
            .collect();
        assert_eq!(first, [0]);
        assert_eq!(resumed, [1, 2]);
    }

    #[test]
    fn test_bad_row_is_isolated() {
        let table = "latitude,longitude\n48.85,2.35\nabc,4.85\n43.3,5.37\n";
        let items: Vec<_> = CoordinateStream::from_reader(table.as_bytes(), 0)
            .unwrap()
            .collect();

        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(AppError::Input { index: 1, .. })));
        assert_eq!(items[2].as_ref().unwrap().index, 2);
    }

    #[test]
    fn test_out_of_range_latitude_is_rejected() {
        let table = "latitude,longitude\n123.0,2.35\n";
        let mut stream = CoordinateStream::from_reader(table.as_bytes(), 0).unwrap();
        assert!(matches!(stream.next(), Some(Err(AppError::Input { .. }))));
    }

    #[test]
    fn test_rejects_wrong_column_count() {
        let table = "city,latitude,longitude\nParis,48.85,2.35\n";
        assert!(matches!(
            CoordinateStream::from_reader(table.as_bytes(), 0),
            Err(AppError::Validation(_))
        ));
    }
}
