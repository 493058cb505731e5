// src/models/coordinate.rs

//! Search coordinate read from the input table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single search origin, identified by its input row index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// 0-based data row index in the input table
    pub index: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(index: u64, latitude: f64, longitude: f64) -> Self {
        Self {
            index,
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.index, self.latitude, self.longitude)
    }
}
