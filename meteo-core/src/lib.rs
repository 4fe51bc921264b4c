//! Core library for the `meteo` weather-advice tool.
//!
//! This crate defines:
//! - Configuration handling
//! - Clients for the geocoding and forecast services
//! - The weather-code interpreter and the advice engine
//! - The lookup pipeline shared by the delivery surfaces
//!
//! It is used by `meteo-cli` and `meteo-web`, but can also be reused by other binaries.

pub mod advice;
pub mod client;
pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;

pub use advice::advise;
pub use client::{CurrentConditions, Geocode, NominatimClient, OpenMeteoClient};
pub use config::Config;
pub use error::WeatherError;
pub use model::{AdviceResult, Location, Report, WeatherSnapshot};
pub use pipeline::Pipeline;
