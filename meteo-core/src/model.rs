use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A place resolved from free-text user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Current conditions for one location, as reported by the forecast service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
    pub precipitation_mm: f64,
    pub rain_mm: f64,
    /// Local observation time at the queried location.
    pub observed_at: NaiveDateTime,
}

/// Categorized recommendations derived from a single snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceResult {
    /// Human description of the weather code, symbol included.
    pub weather: String,
    pub temperature: Vec<String>,
    pub wind: Vec<String>,
    pub rain: Vec<String>,
    pub has_rain: bool,
}

/// Bundled output of one pipeline run; both surfaces format from this.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub location: Location,
    pub snapshot: WeatherSnapshot,
    pub advice: AdviceResult,
}
