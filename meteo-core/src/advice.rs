//! The advice engine: a pure mapping from a weather snapshot to
//! categorized clothing and rain recommendations.
//!
//! One consolidated rule table serves both delivery surfaces; the
//! thresholds and code sets are documented in DESIGN.md.

use crate::codes;
use crate::model::{AdviceResult, WeatherSnapshot};

const THUNDERSTORM_CODES: [i32; 3] = [95, 96, 99];
const HEAVY_RAIN_CODES: [i32; 2] = [65, 82];
const MODERATE_RAIN_CODES: [i32; 2] = [63, 81];
const LIGHT_RAIN_CODES: [i32; 5] = [51, 53, 55, 61, 80];
const SNOW_CODES: [i32; 6] = [71, 73, 75, 77, 85, 86];

/// Derives all advice for one snapshot. Pure and deterministic.
pub fn advise(snapshot: &WeatherSnapshot) -> AdviceResult {
    let rain = rain_advice(snapshot);

    AdviceResult {
        weather: codes::describe(snapshot.weather_code).to_string(),
        temperature: vec![temperature_advice(snapshot.temperature_c).to_string()],
        wind: wind_advice(snapshot.wind_speed_kmh)
            .map(String::from)
            .into_iter()
            .collect(),
        has_rain: !rain.is_empty(),
        rain,
    }
}

/// Mutually exclusive bands, evaluated low to high; exactly one matches
/// for every temperature.
fn temperature_advice(temperature_c: f64) -> &'static str {
    if temperature_c < 0.0 {
        "🥶 Very cold! Winter coat, gloves and a hat"
    } else if temperature_c < 5.0 {
        "🧥 Warm coat and scarf required"
    } else if temperature_c < 10.0 {
        "🧥 Coat or a heavy jacket recommended"
    } else if temperature_c < 15.0 {
        "🧥 Jacket or sweater advised"
    } else if temperature_c < 20.0 {
        "👕 T-shirt plus a light jacket, just in case"
    } else if temperature_c < 25.0 {
        "👕 T-shirt weather, pleasant outside"
    } else {
        "🩳 Light clothing, it is hot out"
    }
}

/// Highest threshold wins; below 15 km/h the wind is not worth a mention.
fn wind_advice(wind_speed_kmh: f64) -> Option<&'static str> {
    if wind_speed_kmh > 40.0 {
        Some("💨 Violent wind! Watch out for flying objects")
    } else if wind_speed_kmh > 25.0 {
        Some("💨 Strong wind, zip your jacket all the way up")
    } else if wind_speed_kmh > 15.0 {
        Some("💨 Light wind, dress a bit warmer")
    } else {
        None
    }
}

/// Priority-ordered rain rules; the first matching rule wins. Code-based
/// rules outrank the precipitation-amount fallback.
fn rain_advice(snapshot: &WeatherSnapshot) -> Vec<String> {
    let code = snapshot.weather_code;
    let precipitation = snapshot.precipitation_mm;
    let rain = snapshot.rain_mm;

    if THUNDERSTORM_CODES.contains(&code) {
        vec![
            "⛈️ Thunderstorm! Stay inside if you can".to_string(),
            "☔ Raincoat and a sturdy umbrella are a must".to_string(),
        ]
    } else if HEAVY_RAIN_CODES.contains(&code) || precipitation > 5.0 || rain > 5.0 {
        vec![
            "🌧️ Heavy rain expected!".to_string(),
            "☔ Raincoat required, plus an umbrella".to_string(),
        ]
    } else if MODERATE_RAIN_CODES.contains(&code) || precipitation > 2.0 || rain > 2.0 {
        vec![
            "🌧️ Moderate rain".to_string(),
            "☔ Umbrella or raincoat recommended".to_string(),
        ]
    } else if LIGHT_RAIN_CODES.contains(&code) {
        vec![
            "🌦️ Light rain or drizzle".to_string(),
            "🧥 A hooded coat is enough, or a small umbrella".to_string(),
        ]
    } else if SNOW_CODES.contains(&code) {
        vec![
            "❄️ Snow expected!".to_string(),
            "🧥 Waterproof coat, gloves and a hat".to_string(),
        ]
    } else if precipitation > 0.0 {
        vec![format!("💧 Light precipitation expected ({precipitation} mm)")]
    } else {
        Vec::new()
    }
}
