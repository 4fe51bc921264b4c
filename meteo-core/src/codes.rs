//! Fixed table of WMO weather codes, as reported by the forecast service.

/// Fallback label for codes outside the table.
pub const UNKNOWN_CONDITIONS: &str = "🌡️ Unknown conditions";

/// Translates a WMO weather code into a short description with a symbol.
///
/// Total function: codes outside the table map to [`UNKNOWN_CONDITIONS`].
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "☀️ Clear sky",
        1 => "🌤️ Mainly clear",
        2 => "⛅ Partly cloudy",
        3 => "☁️ Overcast",
        45 => "🌫️ Fog",
        48 => "🌫️ Depositing rime fog",
        51 => "🌦️ Light drizzle",
        53 => "🌦️ Moderate drizzle",
        55 => "🌧️ Dense drizzle",
        61 => "🌧️ Light rain",
        63 => "🌧️ Moderate rain",
        65 => "🌧️ Heavy rain",
        71 => "🌨️ Light snow",
        73 => "🌨️ Moderate snow",
        75 => "❄️ Heavy snow",
        80 => "🌦️ Light showers",
        81 => "🌧️ Moderate showers",
        82 => "⛈️ Violent showers",
        95 => "⛈️ Thunderstorm",
        96 => "⛈️ Thunderstorm with light hail",
        99 => "⛈️ Thunderstorm with heavy hail",
        _ => UNKNOWN_CONDITIONS,
    }
}
