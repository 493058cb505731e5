// src/models/club.rs

//! Club records returned by the search API and their enriched form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::ContactMap;

/// A club record exactly as returned by the search API.
pub type RawEntity = Map<String, Value>;

/// Wire keys of the search API records.
pub mod keys {
    /// Federation club code, used in the detail URL
    pub const CODE: &str = "cl_cod";
    /// URL slug of the club name, used in the detail URL
    pub const NAME_SLUG: &str = "cl_nom_slug";
    pub const LOGO: &str = "logo";
    pub const GEO_LOCATION: &str = "cl_geo_location";
    /// Display name, kept in the output
    pub const NAME: &str = "cl_nom";

    /// Keys that never reach the output.
    pub const INTERNAL: [&str; 4] = [CODE, NAME_SLUG, LOGO, GEO_LOCATION];
}

/// A normalized club with its detail page location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    /// Every public field of the raw record
    #[serde(flatten)]
    pub fields: Map<String, Value>,

    /// Club information page
    #[serde(rename = "info_url")]
    pub detail_url: String,
}

impl Club {
    /// Club display name, if the API provided one.
    pub fn name(&self) -> Option<&str> {
        self.fields.get(keys::NAME).and_then(Value::as_str)
    }
}

/// A club with its scraped contacts and selected main email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedClub {
    #[serde(flatten)]
    pub club: Club,

    pub contact: ContactMap,

    pub main_email: Option<String>,
}
