//! Mapping of KMA sky and precipitation codes to labels and icons.

use crate::constants::LABEL_UNKNOWN;

/// `SKY` category values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkyState {
    Clear,
    MostlyCloudy,
    Overcast,
}

impl SkyState {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Clear),
            "3" => Some(Self::MostlyCloudy),
            "4" => Some(Self::Overcast),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Clear => "1",
            Self::MostlyCloudy => "3",
            Self::Overcast => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "맑음",
            Self::MostlyCloudy => "구름많음",
            Self::Overcast => "흐림",
        }
    }
}

/// `PTY` category values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationType {
    None,
    Rain,
    RainAndSnow,
    Snow,
    Raindrops,
    RaindropsAndSnowFlurries,
    SnowFlurries,
}

impl PrecipitationType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::None),
            "1" => Some(Self::Rain),
            "2" => Some(Self::RainAndSnow),
            "3" => Some(Self::Snow),
            "5" => Some(Self::Raindrops),
            "6" => Some(Self::RaindropsAndSnowFlurries),
            "7" => Some(Self::SnowFlurries),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Rain => "1",
            Self::RainAndSnow => "2",
            Self::Snow => "3",
            Self::Raindrops => "5",
            Self::RaindropsAndSnowFlurries => "6",
            Self::SnowFlurries => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "없음",
            Self::Rain => "비",
            Self::RainAndSnow => "비/눈",
            Self::Snow => "눈",
            Self::Raindrops => "빗방울",
            Self::RaindropsAndSnowFlurries => "빗방울눈날림",
            Self::SnowFlurries => "눈날림",
        }
    }
}

/// Icon shown next to the condition label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Unknown,
}

impl IconKind {
    /// Font Awesome class list used by the card
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Sunny => "fas fa-sun sunny",
            Self::PartlyCloudy => "fas fa-cloud-sun cloudy",
            Self::Cloudy => "fas fa-cloud cloudy",
            Self::Rainy => "fas fa-cloud-rain rainy",
            Self::Snowy => "fas fa-snowflake",
            Self::Unknown => "fas fa-question",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionResult {
    pub label: &'static str,
    pub icon: IconKind,
}

impl ConditionResult {
    const fn new(label: &'static str, icon: IconKind) -> Self {
        Self { label, icon }
    }
}

/// Resolves the overall condition. Any precipitation other than "none"
/// takes priority over the sky state.
pub fn resolve(sky_code: Option<&str>, precipitation_code: Option<&str>) -> ConditionResult {
    if let Some(code) = precipitation_code.filter(|code| *code != PrecipitationType::None.code()) {
        return match PrecipitationType::from_code(code) {
            Some(PrecipitationType::Rain) => ConditionResult::new("비", IconKind::Rainy),
            Some(PrecipitationType::RainAndSnow) => ConditionResult::new("비/눈", IconKind::Rainy),
            Some(PrecipitationType::Snow) => ConditionResult::new("눈", IconKind::Snowy),
            _ => ConditionResult::new("강수", IconKind::Rainy),
        };
    }

    match sky_code.and_then(SkyState::from_code) {
        Some(SkyState::Clear) => ConditionResult::new("맑음", IconKind::Sunny),
        Some(SkyState::MostlyCloudy) => ConditionResult::new("구름많음", IconKind::PartlyCloudy),
        Some(SkyState::Overcast) => ConditionResult::new("흐림", IconKind::Cloudy),
        None => ConditionResult::new(LABEL_UNKNOWN, IconKind::Unknown),
    }
}
