use chrono::NaiveDateTime;

use crate::condition::{resolve, IconKind, PrecipitationType, SkyState};
use crate::constants::{DEFAULT_CITY, LABEL_UNKNOWN, PLACEHOLDER};
use crate::locations::Location;
use crate::models::{DataSource, FetchOutcome};

/// Display-ready values for the weather card
#[derive(Debug, Clone, PartialEq)]
pub struct CardFields {
    pub city: String,
    pub observed_at: String,
    pub temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub sky_condition: String,
    pub precipitation: String,
    pub condition: String,
    pub icon: IconKind,
    pub source: DataSource,
}

/// Maps a fetched observation onto card fields
pub fn present(city: &str, outcome: &FetchOutcome, now: NaiveDateTime) -> CardFields {
    let observation = &outcome.observation;
    let sky_code = observation.sky_code.as_deref();
    let precipitation_code = observation.precipitation_code.as_deref();
    let condition = resolve(sky_code, precipitation_code);

    CardFields {
        city: city.to_string(),
        observed_at: format_timestamp(now),
        temperature: observation
            .temperature
            .map(|t| t.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        humidity: format!(
            "{}%",
            observation
                .humidity
                .map(|h| h.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        ),
        wind_speed: format!(
            "{} m/s",
            observation
                .wind_speed
                .map(|w| w.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        ),
        sky_condition: sky_code
            .and_then(SkyState::from_code)
            .map_or(LABEL_UNKNOWN, |sky| sky.label())
            .to_string(),
        precipitation: precipitation_label(precipitation_code).to_string(),
        condition: condition.label.to_string(),
        icon: condition.icon,
        source: outcome.source,
    }
}

fn precipitation_label(code: Option<&str>) -> &'static str {
    match code.and_then(PrecipitationType::from_code) {
        Some(kind) => kind.label(),
        None => LABEL_UNKNOWN,
    }
}

/// ko-KR style local timestamp, 24-hour, to the minute
pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y. %m. %d. %H:%M").to_string()
}

/// Formats a weather card into a human-readable string
pub fn format_card(card: &CardFields) -> String {
    let source = match card.source {
        DataSource::Live => "KMA observation",
        DataSource::Synthetic => "synthetic fallback (provider unreachable)",
    };

    format!(
        "Current Weather: {}\n  Updated: {}\n  Conditions: {} [{}]\n  Temperature: {}\u{00b0}C\n  Humidity: {}\n  Wind Speed: {}\n  Sky: {}\n  Precipitation: {}\n  Source: {}\n",
        card.city,
        card.observed_at,
        card.condition,
        card.icon.css_class(),
        card.temperature,
        card.humidity,
        card.wind_speed,
        card.sky_condition,
        card.precipitation,
        source
    )
}

/// Formats the supported cities into a human-readable string
pub fn format_locations(locations: &[Location]) -> String {
    let mut output = String::from("Supported Cities:\n\n");
    for location in locations {
        let marker = if location.name == DEFAULT_CITY { " [default]" } else { "" };
        output.push_str(&format!(
            "  {} (grid {}, {}){}\n",
            location.name, location.nx, location.ny, marker
        ));
    }
    output
}
