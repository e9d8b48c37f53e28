use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;
use reqwest::Client as HttpClient;
use url::Url;

use shared::{LocationDetails, Lookup};

use super::models::{
    DetailResponse, LocationRecord, LocationSearchApiResponse, MaterialResponse, PostalResponse,
};

const API_BASE_URL: &str = "https://api.earth911.com/";

/// Fixed search radius and result cap for drop-off searches.
const MAX_DISTANCE: u32 = 20;
const MAX_RESULTS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum Earth911Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),
}

/// Returns true only for well-formed US ZIP codes: exactly five ASCII
/// digits. Anything else must be rejected before a network call is made.
pub fn validate_zip(zip_code: &str) -> bool {
    zip_code.len() == 5 && zip_code.chars().all(|c| c.is_ascii_digit())
}

/// Client for the geographic materials-search API. All four endpoints are
/// idempotent reads; responses are memoized by request parameters for the
/// lifetime of the process.
pub struct Earth911Client {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    material_cache: Mutex<HashMap<String, Lookup<String>>>,
    postal_cache: Mutex<HashMap<String, Lookup<(f64, f64)>>>,
    location_cache: Mutex<HashMap<String, Vec<LocationRecord>>>,
    detail_cache: Mutex<HashMap<String, Lookup<LocationDetails>>>,
}

impl Earth911Client {
    pub fn new(api_key: String) -> Self {
        Self::with_base(api_key, API_BASE_URL.to_string())
    }

    #[cfg(test)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::with_base(api_key, base_url)
    }

    fn with_base(api_key: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
            material_cache: Mutex::new(HashMap::new()),
            postal_cache: Mutex::new(HashMap::new()),
            location_cache: Mutex::new(HashMap::new()),
            detail_cache: Mutex::new(HashMap::new()),
        }
    }

    fn endpoint(&self, method: &str) -> Result<Url, Earth911Error> {
        Ok(Url::parse(&self.base_url)?.join(method)?)
    }

    /// Resolves a free-text sub-item query to the first matching material
    /// id. An empty result set is a normal `NoMatch`, not an error.
    pub async fn search_materials(&self, query: &str) -> Result<Lookup<String>, Earth911Error> {
        if let Some(cached) = self.material_cache.lock().unwrap().get(query) {
            return Ok(cached.clone());
        }

        let url = self.endpoint("earth911.searchMaterials")?;
        let response = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?
            .error_for_status()?;
        let parsed: MaterialResponse = response.json().await?;

        let outcome = match parsed.result.into_iter().next() {
            Some(record) => {
                debug!(
                    "Material query {:?} matched {:?}",
                    query,
                    record.description.as_deref().unwrap_or("<unnamed>")
                );
                match record.material_id {
                    Some(material_id) => Lookup::Found(material_id),
                    None => Lookup::NoMatch,
                }
            }
            None => Lookup::NoMatch,
        };

        self.material_cache
            .lock()
            .unwrap()
            .insert(query.to_string(), outcome.clone());
        Ok(outcome)
    }

    /// Resolves a validated ZIP code to (latitude, longitude).
    pub async fn postal_coordinates(
        &self,
        zip_code: &str,
    ) -> Result<Lookup<(f64, f64)>, Earth911Error> {
        if let Some(cached) = self.postal_cache.lock().unwrap().get(zip_code) {
            return Ok(cached.clone());
        }

        let url = self.endpoint("earth911.getPostalData")?;
        let response = self
            .http_client
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("country", "US"),
                ("postal_code", zip_code),
            ])
            .send()
            .await?
            .error_for_status()?;
        let parsed: PostalResponse = response.json().await?;

        let outcome = match parsed.result {
            Some(record) => match (record.latitude, record.longitude) {
                (Some(latitude), Some(longitude)) => Lookup::Found((latitude, longitude)),
                _ => Lookup::NoMatch,
            },
            None => Lookup::NoMatch,
        };

        self.postal_cache
            .lock()
            .unwrap()
            .insert(zip_code.to_string(), outcome.clone());
        Ok(outcome)
    }

    /// Searches drop-off locations around the coordinates. An empty list is
    /// the normal "nothing nearby" outcome.
    pub async fn search_locations(
        &self,
        latitude: f64,
        longitude: f64,
        material_id: &str,
    ) -> Result<Vec<LocationRecord>, Earth911Error> {
        let cache_key = format!("{latitude}:{longitude}:{material_id}");
        if let Some(cached) = self.location_cache.lock().unwrap().get(&cache_key) {
            return Ok(cached.clone());
        }

        let url = self.endpoint("earth911.searchLocations")?;
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();
        let max_distance = MAX_DISTANCE.to_string();
        let max_results = MAX_RESULTS.to_string();
        let response = self
            .http_client
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("material_id", material_id),
                ("max_distance", max_distance.as_str()),
                ("max_results", max_results.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let parsed: LocationSearchApiResponse = response.json().await?;

        self.location_cache
            .lock()
            .unwrap()
            .insert(cache_key, parsed.result.clone());
        Ok(parsed.result)
    }

    /// Fetches address/phone/hours/url details for one location id.
    pub async fn location_details(
        &self,
        location_id: &str,
    ) -> Result<Lookup<LocationDetails>, Earth911Error> {
        if let Some(cached) = self.detail_cache.lock().unwrap().get(location_id) {
            return Ok(cached.clone());
        }

        let url = self.endpoint("earth911.getLocationDetails")?;
        let response = self
            .http_client
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("location_id", location_id),
            ])
            .send()
            .await?
            .error_for_status()?;
        let mut parsed: DetailResponse = response.json().await?;

        let outcome = match parsed.result.remove(location_id) {
            Some(record) => Lookup::Found(record.into_details()),
            None => Lookup::NoMatch,
        };

        self.detail_cache
            .lock()
            .unwrap()
            .insert(location_id.to_string(), outcome.clone());
        Ok(outcome)
    }
}
