// src/services/directory.rs

//! Club finder API and detail page access.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{Coordinate, RawEntity, SearchConfig};
use crate::utils::http::fetch_text;

const LICENCE_TYPE1_KEY: &str = "find_club[licenceType1][]";
const LICENCE_TYPE2_KEY: &str = "find_club[licenceType2][]";

/// Source of raw club records around a coordinate.
#[async_trait]
pub trait ClubSource: Send + Sync {
    /// Query clubs within the configured radius of `coordinate`.
    ///
    /// Fails with [`AppError::RemoteQuery`] on a non-success status.
    async fn search(&self, coordinate: &Coordinate) -> Result<Vec<RawEntity>>;
}

/// Source of club detail page markup.
#[async_trait]
pub trait DetailSource: Send + Sync {
    async fn fetch_detail(&self, url: &str) -> Result<String>;
}

/// HTTP client for the federation club finder and club pages.
pub struct ClubDirectory {
    client: Client,
    search: SearchConfig,
}

impl ClubDirectory {
    pub fn new(client: Client, search: SearchConfig) -> Self {
        Self { client, search }
    }

    /// Form body for one search request.
    ///
    /// Every licence filter is sent as its own repeated pair.
    pub fn form_params(&self, coordinate: &Coordinate) -> Vec<(&'static str, String)> {
        let licences = self
            .search
            .licence_type1
            .iter()
            .map(|value| (LICENCE_TYPE1_KEY, value.clone()))
            .chain(
                self.search
                    .licence_type2
                    .iter()
                    .map(|value| (LICENCE_TYPE2_KEY, value.clone())),
            );

        licences
            .chain([
                ("find_club[latitude]", coordinate.latitude.to_string()),
                ("find_club[longitude]", coordinate.longitude.to_string()),
                ("find_club[radius]", self.search.radius.clone()),
            ])
            .collect()
    }
}

#[async_trait]
impl ClubSource for ClubDirectory {
    async fn search(&self, coordinate: &Coordinate) -> Result<Vec<RawEntity>> {
        let params = self.form_params(coordinate);
        let response = self
            .client
            .post(&self.search.endpoint)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RemoteQuery {
                index: coordinate.index,
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl DetailSource for ClubDirectory {
    async fn fetch_detail(&self, url: &str) -> Result<String> {
        fetch_text(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_params_send_every_licence_filter() {
        let directory = ClubDirectory::new(Client::new(), SearchConfig::default());
        let params = directory.form_params(&Coordinate::new(0, 48.5, 2.25));

        let type1: Vec<_> = params
            .iter()
            .filter(|(key, _)| *key == LICENCE_TYPE1_KEY)
            .map(|(_, value)| value.as_str())
            .collect();
        let type2: Vec<_> = params
            .iter()
            .filter(|(key, _)| *key == LICENCE_TYPE2_KEY)
            .map(|(_, value)| value.as_str())
            .collect();

        assert_eq!(type1, ["FC", "FL", "FH"]);
        assert_eq!(type2, ["F11", "F8", "FS", "BS"]);
        assert!(params.contains(&("find_club[latitude]", "48.5".to_string())));
        assert!(params.contains(&("find_club[longitude]", "2.25".to_string())));
        assert!(params.contains(&("find_club[radius]", "5".to_string())));
    }
}
