use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    client::{CurrentConditions, truncate_body},
    config::Config,
    error::WeatherError,
    model::{Location, WeatherSnapshot},
};

const SERVICE: &str = "forecast";

/// The five current-condition fields the advice engine needs.
const CURRENT_FIELDS: &str = "temperature_2m,precipitation,rain,weather_code,wind_speed_10m";

/// Client for the Open-Meteo current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client for the forecast service")?;

        Ok(Self {
            http,
            base_url: config.forecast_url.clone(),
        })
    }
}

#[async_trait]
impl CurrentConditions for OpenMeteoClient {
    async fn current(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError> {
        debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "fetching current conditions",
        );

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
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

        // All-or-nothing: a `current` block missing any requested field is
        // a malformed response, never a partial snapshot.
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Malformed {
                service: SERVICE,
                detail: e.to_string(),
            })?;

        WeatherSnapshot::try_from(parsed.current)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: f64,
    precipitation: f64,
    rain: f64,
    weather_code: i32,
    wind_speed_10m: f64,
}

impl TryFrom<CurrentBlock> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(current: CurrentBlock) -> Result<Self, Self::Error> {
        // Open-Meteo sends local time without seconds, e.g. "2026-08-28T11:45".
        let observed_at = NaiveDateTime::parse_from_str(&current.time, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(&current.time, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|_| WeatherError::Malformed {
                service: SERVICE,
                detail: format!("unrecognized observation time '{}'", current.time),
            })?;

        Ok(WeatherSnapshot {
            temperature_c: current.temperature_2m,
            wind_speed_kmh: current.wind_speed_10m,
            weather_code: current.weather_code,
            precipitation_mm: current.precipitation,
            rain_mm: current.rain,
            observed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = r#"{
        "latitude": 48.86,
        "longitude": 2.35,
        "timezone": "Europe/Paris",
        "current": {
            "time": "2026-08-28T11:45",
            "temperature_2m": 21.4,
            "precipitation": 0.3,
            "rain": 0.3,
            "weather_code": 61,
            "wind_speed_10m": 12.8
        }
    }"#;

    #[test]
    fn full_response_becomes_a_snapshot() {
        let parsed: ForecastResponse = serde_json::from_str(CURRENT).unwrap();
        let snapshot = WeatherSnapshot::try_from(parsed.current).unwrap();

        assert!((snapshot.temperature_c - 21.4).abs() < 1e-9);
        assert!((snapshot.wind_speed_kmh - 12.8).abs() < 1e-9);
        assert_eq!(snapshot.weather_code, 61);
        assert!((snapshot.precipitation_mm - 0.3).abs() < 1e-9);
        assert!((snapshot.rain_mm - 0.3).abs() < 1e-9);
        assert_eq!(
            snapshot.observed_at.format("%Y-%m-%d %H:%M").to_string(),
            "2026-08-28 11:45"
        );
    }

    #[test]
    fn missing_field_rejects_the_whole_block() {
        // No wind_speed_10m: must not yield a partial snapshot.
        let body = r#"{"current": {
            "time": "2026-08-28T11:45",
            "temperature_2m": 21.4,
            "precipitation": 0.0,
            "rain": 0.0,
            "weather_code": 0
        }}"#;

        let result: std::result::Result<ForecastResponse, _> = serde_json::from_str(body);
        let err = result.unwrap_err();

        assert!(err.to_string().contains("wind_speed_10m"));
    }

    #[test]
    fn missing_current_block_is_an_error() {
        let result: std::result::Result<ForecastResponse, _> =
            serde_json::from_str(r#"{"latitude": 48.86}"#);

        assert!(result.is_err());
    }

    #[test]
    fn unparseable_observation_time_is_malformed() {
        let current = CurrentBlock {
            time: "yesterday-ish".to_string(),
            temperature_2m: 10.0,
            precipitation: 0.0,
            rain: 0.0,
            weather_code: 0,
            wind_speed_10m: 0.0,
        };

        let err = WeatherSnapshot::try_from(current).unwrap_err();
        assert!(matches!(err, WeatherError::Malformed { .. }));
    }
}
