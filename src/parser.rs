use crate::models::{Observation, RawRecord};

/// Builds an observation from provider records.
///
/// Records are applied in order, so a repeated category keeps its last
/// value. Unknown categories and unparsable values leave the field unknown.
pub fn parse(records: &[RawRecord]) -> Observation {
    let mut observation = Observation::default();

    for record in records {
        let value = record.value.trim();
        match record.category.as_str() {
            "T1H" => observation.temperature = value.parse().ok(),
            "REH" => observation.humidity = parse_percent(value),
            "WSD" => observation.wind_speed = value.parse().ok(),
            "RN1" => observation.precipitation_amount = value.parse().ok(),
            "SKY" => observation.sky_code = Some(record.value.clone()),
            "PTY" => observation.precipitation_code = Some(record.value.clone()),
            _ => {}
        }
    }

    observation
}

/// Humidity is an integer percent; fractional values are truncated
fn parse_percent(value: &str) -> Option<u8> {
    let percent = value.parse::<f64>().ok()?.trunc();
    (0.0..=100.0).contains(&percent).then_some(percent as u8)
}
