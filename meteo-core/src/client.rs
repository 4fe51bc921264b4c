use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::WeatherError,
    model::{Location, WeatherSnapshot},
};

pub mod nominatim;
pub mod open_meteo;

pub use nominatim::NominatimClient;
pub use open_meteo::OpenMeteoClient;

/// Resolves a free-text place name to coordinates.
#[async_trait]
pub trait Geocode: Send + Sync + Debug {
    async fn resolve(&self, place: &str) -> Result<Location, WeatherError>;
}

/// Fetches current conditions for resolved coordinates.
#[async_trait]
pub trait CurrentConditions: Send + Sync + Debug {
    async fn current(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError>;
}

/// Keeps error payloads readable when a service replies with an HTML page.
/// Cuts on a character boundary so multi-byte text cannot panic.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((i, _)) => format!("{}...", &body[..i]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(truncate_body("not json"), "not json");
    }

    #[test]
    fn long_bodies_are_cut_with_a_marker() {
        let long = "x".repeat(500);
        let cut = truncate_body(&long);

        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn multibyte_text_at_the_cut_point_is_kept_whole() {
        // Accented characters straddling the cut must not split a char.
        let long = format!("{}{}", "x".repeat(199), "é".repeat(10));
        let cut = truncate_body(&long);

        assert!(cut.ends_with("é..."));
        assert_eq!(cut.chars().count(), 203);
    }

    #[test]
    fn emoji_heavy_bodies_are_cut_cleanly() {
        let long = "⛈️".repeat(300);
        let cut = truncate_body(&long);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
