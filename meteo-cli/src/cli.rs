use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;
use meteo_core::{Config, Pipeline, Report, WeatherError};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "City weather and clothing advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather and clothing advice for a city.
    Show {
        /// City name. Falls back to the configured default city, then to
        /// an interactive prompt.
        city: Option<String>,
    },

    /// Set or clear the default city used when none is given.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(city).await,
            // Bare `meteo` behaves like `meteo show`.
            None => show(None).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let current = config.default_city.clone().unwrap_or_default();
    let answer = Text::new("Default city (leave empty to clear):")
        .with_initial_value(&current)
        .prompt()
        .context("Failed to read the default city")?;

    let answer = answer.trim();
    config.default_city = (!answer.is_empty()).then(|| answer.to_string());
    config.save()?;

    match &config.default_city {
        Some(city) => println!("Saved. `meteo` will now look up {city} by default."),
        None => println!("Saved. Default city cleared."),
    }

    Ok(())
}

async fn show(city: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;

    let city = match city.or_else(|| config.default_city.clone()) {
        Some(city) => city,
        None => Text::new("City name:")
            .prompt()
            .context("Failed to read the city name")?,
    };

    let pipeline = Pipeline::from_config(&config)?;

    println!(
        "\n🌤️ METEO — {}",
        chrono::Local::now().format("%A %e %B %Y")
    );
    println!("🔍 Looking up {city}...");

    // Lookup failures are reported as friendly text; the process still
    // exits 0 either way.
    match pipeline.run(&city).await {
        Ok(report) => print_report(&report),
        Err(err) => print_failure(&err),
    }

    Ok(())
}

fn print_report(report: &Report) {
    let location = &report.location;
    let snapshot = &report.snapshot;
    let advice = &report.advice;

    println!("✅ Found: {}", location.display_name);
    println!(
        "📍 Coordinates: {:.2}°, {:.2}°",
        location.latitude, location.longitude
    );

    println!("\n📊 CURRENT CONDITIONS");
    println!("{}", "-".repeat(50));
    println!("  {}", advice.weather);
    println!("  🌡️ Temperature: {} °C", snapshot.temperature_c);
    println!("  💨 Wind: {} km/h", snapshot.wind_speed_kmh);
    println!("  💧 Precipitation: {} mm", snapshot.precipitation_mm);
    println!(
        "  🕒 Observed at {} local time",
        snapshot.observed_at.format("%H:%M")
    );

    if advice.has_rain {
        println!("\n☔ RAIN");
        println!("{}", "-".repeat(50));
        for line in &advice.rain {
            println!("  {line}");
        }
    }

    println!("\n👔 CLOTHING");
    println!("{}", "-".repeat(50));
    for line in advice.temperature.iter().chain(&advice.wind) {
        println!("  {line}");
    }
    println!();
}

fn print_failure(err: &WeatherError) {
    match err {
        WeatherError::InputMissing => {
            println!("❌ No city given. Try `meteo show Paris`.");
        }
        WeatherError::PlaceNotFound(place) => {
            println!("❌ City '{place}' not found.");
            println!("💡 Check the spelling or try a nearby larger town.");
        }
        other => println!("❌ Weather lookup failed: {other}"),
    }
}
