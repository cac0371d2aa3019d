//! Fixed table of supported cities and their KMA grid cells.

use crate::error::WeatherError;

/// A supported city and its provider grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub nx: u16,
    pub ny: u16,
}

const fn city(name: &'static str, nx: u16, ny: u16) -> Location {
    Location { name, nx, ny }
}

/// Major Gyeonggi-do cities on the KMA forecast grid
const LOCATIONS: [Location; 10] = [
    city("안산시", 58, 121),
    city("수원시", 60, 121),
    city("성남시", 63, 124),
    city("고양시", 57, 128),
    city("용인시", 64, 119),
    city("부천시", 56, 125),
    city("안양시", 59, 123),
    city("남양주시", 64, 128),
    city("화성시", 57, 119),
    city("평택시", 62, 114),
];

/// Looks up a city by its exact name
pub fn lookup(name: &str) -> Result<Location, WeatherError> {
    LOCATIONS
        .iter()
        .find(|location| location.name == name)
        .copied()
        .ok_or_else(|| WeatherError::UnknownLocation(name.to_string()))
}

/// All supported cities, in display order
pub fn all() -> &'static [Location] {
    &LOCATIONS
}
