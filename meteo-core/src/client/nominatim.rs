use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    client::{Geocode, truncate_body},
    config::Config,
    error::WeatherError,
    model::Location,
};

const SERVICE: &str = "geocoding";

/// Client for the Nominatim place-search endpoint.
///
/// Always requests a single candidate and takes it as-is: no retries and
/// no disambiguation.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client for the geocoding service")?;

        Ok(Self {
            http,
            base_url: config.geocoder_url.clone(),
        })
    }
}

#[async_trait]
impl Geocode for NominatimClient {
    async fn resolve(&self, place: &str) -> Result<Location, WeatherError> {
        debug!(place, "resolving place name");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", place),
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await
            .map_err(|source| WeatherError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| WeatherError::Transport {
                service: SERVICE,
                source,
            })?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                service: SERVICE,
                status,
                body: truncate_body(&body),
            });
        }

        let candidates: Vec<SearchCandidate> =
            serde_json::from_str(&body).map_err(|e| WeatherError::Malformed {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        // An empty candidate list is "no such place", not a fault.
        let Some(first) = candidates.into_iter().next() else {
            return Err(WeatherError::PlaceNotFound(place.to_string()));
        };

        let location = Location::try_from(first)?;
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            display_name = %location.display_name,
            "place resolved",
        );

        Ok(location)
    }
}

/// One search result. Nominatim sends coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchCandidate {
    lat: String,
    lon: String,
    display_name: String,
}

impl TryFrom<SearchCandidate> for Location {
    type Error = WeatherError;

    fn try_from(candidate: SearchCandidate) -> Result<Self, Self::Error> {
        Ok(Location {
            latitude: parse_coordinate(&candidate.lat, "lat")?,
            longitude: parse_coordinate(&candidate.lon, "lon")?,
            display_name: candidate.display_name,
        })
    }
}

fn parse_coordinate(raw: &str, field: &str) -> Result<f64, WeatherError> {
    raw.parse().map_err(|_| WeatherError::Malformed {
        service: SERVICE,
        detail: format!("{field} '{raw}' is not a number"),
    })
}
