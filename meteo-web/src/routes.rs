//! The web surface: one JSON advice endpoint plus a minimal lookup page.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use meteo_core::{AdviceResult, Pipeline, Report, WeatherError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Request body for the advice endpoint.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// City name; missing or blank is rejected before any outbound call.
    #[serde(default)]
    pub city: Option<String>,
}

/// Successful advice response.
#[derive(Debug, Serialize)]
pub struct WeatherReply {
    pub city: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub advice: AdviceResult,
}

impl From<Report> for WeatherReply {
    fn from(report: Report) -> Self {
        Self {
            city: report.location.display_name,
            temperature: report.snapshot.temperature_c,
            wind_speed: report.snapshot.wind_speed_kmh,
            precipitation: report.snapshot.precipitation_mm,
            advice: report.advice,
        }
    }
}

/// Error body of every failure path.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Wraps a pipeline error for translation into a JSON error response.
#[derive(Debug)]
pub struct ApiError(WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            WeatherError::InputMissing => StatusCode::BAD_REQUEST,
            WeatherError::PlaceNotFound(_) => StatusCode::NOT_FOUND,
            // Transport, Status, Malformed: a downstream service failed.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self.0, "weather lookup failed");
        }

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// All routes of the web surface.
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/weather", post(weather))
        .with_state(pipeline)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

async fn weather(
    State(pipeline): State<Arc<Pipeline>>,
    Json(query): Json<WeatherQuery>,
) -> Result<Json<WeatherReply>, ApiError> {
    let city = query.city.unwrap_or_default();
    if city.trim().is_empty() {
        return Err(WeatherError::InputMissing.into());
    }

    info!(%city, "weather lookup requested");
    let report = pipeline.run(&city).await?;

    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use meteo_core::{CurrentConditions, Geocode, Location, WeatherSnapshot};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingGeocoder {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Geocode for CountingGeocoder {
        async fn resolve(&self, place: &str) -> Result<Location, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Location {
                latitude: 48.85,
                longitude: 2.35,
                display_name: format!("{place}, France"),
            })
        }
    }

    #[derive(Debug, Default)]
    struct FixedConditions;

    #[async_trait]
    impl CurrentConditions for FixedConditions {
        async fn current(&self, _location: &Location) -> Result<WeatherSnapshot, WeatherError> {
            Ok(WeatherSnapshot {
                temperature_c: 22.0,
                wind_speed_kmh: 10.0,
                weather_code: 0,
                precipitation_mm: 0.0,
                rain_mm: 0.0,
                observed_at: NaiveDate::from_ymd_opt(2026, 8, 28)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            })
        }
    }

    fn fake_pipeline() -> (Arc<Pipeline>, Arc<AtomicUsize>) {
        let geocoder = CountingGeocoder::default();
        let calls = Arc::clone(&geocoder.calls);
        let pipeline = Arc::new(Pipeline::new(
            Box::new(geocoder),
            Box::new(FixedConditions),
        ));
        (pipeline, calls)
    }

    #[test]
    fn error_statuses_match_the_taxonomy() {
        assert_eq!(
            ApiError::from(WeatherError::InputMissing).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(WeatherError::PlaceNotFound("Xyzzyplace".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(WeatherError::Malformed {
                service: "forecast",
                detail: "missing field `current`".into(),
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn missing_city_is_rejected_before_any_outbound_call() {
        let (pipeline, geocoder_calls) = fake_pipeline();

        // The JSON body `{}` deserializes to a query with no city.
        let query: WeatherQuery = serde_json::from_str("{}").unwrap();
        let err = weather(State(pipeline), Json(query)).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(geocoder_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_city_is_also_rejected() {
        let (pipeline, geocoder_calls) = fake_pipeline();

        let query: WeatherQuery = serde_json::from_str(r#"{"city": "   "}"#).unwrap();
        let err = weather(State(pipeline), Json(query)).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(geocoder_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_lookup_flattens_the_report() {
        let (pipeline, _) = fake_pipeline();

        let query: WeatherQuery = serde_json::from_str(r#"{"city": "Paris"}"#).unwrap();
        let Json(reply) = weather(State(pipeline), Json(query)).await.unwrap();

        assert_eq!(reply.city, "Paris, France");
        assert!((reply.temperature - 22.0).abs() < 1e-9);
        assert!((reply.wind_speed - 10.0).abs() < 1e-9);
        assert!(!reply.advice.has_rain);
    }

    #[test]
    fn error_body_serializes_with_an_error_field() {
        let body = ErrorBody {
            error: "place 'Xyzzyplace' could not be found".into(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("error").is_some());
    }
}
