use thiserror::Error;

/// Everything that can go wrong in a single lookup run.
///
/// The first two variants are input problems; the remaining three are
/// faults of an external service (transport, status, or body shape) and
/// are grouped by [`WeatherError::is_service_fault`].
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no city was provided")]
    InputMissing,

    #[error("place '{0}' could not be found")]
    PlaceNotFound(String),

    #[error("failed to reach the {service} service: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response from the {service} service: {detail}")]
    Malformed {
        service: &'static str,
        detail: String,
    },
}

impl WeatherError {
    /// True for faults of an external service rather than of the input.
    pub fn is_service_fault(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Malformed { .. }
        )
    }
}
