use anyhow::Result;
use tracing::info;

use crate::{
    advice,
    client::{CurrentConditions, Geocode, NominatimClient, OpenMeteoClient},
    config::Config,
    error::WeatherError,
    model::Report,
};

/// The one-shot geocode → fetch → advise sequence shared by both
/// delivery surfaces. Holds its clients behind trait objects so tests
/// can substitute in-memory fakes.
#[derive(Debug)]
pub struct Pipeline {
    geocoder: Box<dyn Geocode>,
    conditions: Box<dyn CurrentConditions>,
}

impl Pipeline {
    pub fn new(geocoder: Box<dyn Geocode>, conditions: Box<dyn CurrentConditions>) -> Self {
        Self {
            geocoder,
            conditions,
        }
    }

    /// Construct the real clients from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Box::new(NominatimClient::new(config)?),
            Box::new(OpenMeteoClient::new(config)?),
        ))
    }

    /// Runs the full lookup for one city name.
    ///
    /// The two outbound calls are strictly sequential and nothing is
    /// retried; a failure at either step ends this run with no partial
    /// result.
    pub async fn run(&self, city: &str) -> Result<Report, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InputMissing);
        }

        let location = self.geocoder.resolve(city).await?;
        let snapshot = self.conditions.current(&location).await?;
        let advice = advice::advise(&snapshot);

        info!(
            city,
            display_name = %location.display_name,
            weather_code = snapshot.weather_code,
            has_rain = advice.has_rain,
            "lookup completed",
        );

        Ok(Report {
            location,
            snapshot,
            advice,
        })
    }
}
