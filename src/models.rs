use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{DATA_TYPE, NUM_OF_ROWS, PAGE_NO, RESULT_CODE_OK};
use crate::error::TransportError;
use crate::locations::Location;
use crate::time_window::TimeWindow;

// ============================================================================
// KMA API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProviderEnvelope {
    pub response: Option<ProviderResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    pub header: ResponseHeader,
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    pub items: Option<ResponseItems>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseItems {
    #[serde(default)]
    pub item: Vec<RawRecord>,
}

/// One measurement as published by the provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub category: String,
    #[serde(rename = "obsrValue")]
    pub value: String,
}

impl RawRecord {
    pub fn new(category: &str, value: &str) -> Self {
        Self {
            category: category.to_string(),
            value: value.to_string(),
        }
    }
}

impl ProviderEnvelope {
    /// Validates the envelope and returns its records.
    ///
    /// A non-`00` result code, a missing body or an empty item list are all
    /// route failures.
    pub fn into_records(self) -> Result<Vec<RawRecord>, TransportError> {
        let response = self.response.ok_or(TransportError::Empty)?;

        if response.header.result_code != RESULT_CODE_OK {
            return Err(TransportError::Provider {
                code: response.header.result_code,
                message: response.header.result_msg,
            });
        }

        let records = response
            .body
            .and_then(|body| body.items)
            .map(|items| items.item)
            .unwrap_or_default();

        if records.is_empty() {
            return Err(TransportError::Empty);
        }
        Ok(records)
    }
}

/// Query parameters for a single nowcast request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationQuery {
    pub base_date: String,
    pub base_time: String,
    pub nx: u16,
    pub ny: u16,
}

impl ObservationQuery {
    pub fn new(location: &Location, window: &TimeWindow) -> Self {
        Self {
            base_date: window.base_date.clone(),
            base_time: window.base_time.clone(),
            nx: location.nx,
            ny: location.ny,
        }
    }

    /// Provider query pairs, in the order the API documents them
    pub fn query_pairs(&self, service_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("serviceKey", service_key.to_string()),
            ("pageNo", PAGE_NO.to_string()),
            ("numOfRows", NUM_OF_ROWS.to_string()),
            ("dataType", DATA_TYPE.to_string()),
            ("base_date", self.base_date.clone()),
            ("base_time", self.base_time.clone()),
            ("nx", self.nx.to_string()),
            ("ny", self.ny.to_string()),
        ]
    }
}

// ============================================================================
// Domain Models
// ============================================================================

/// Current conditions for one grid cell. `None` means unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    /// Celsius
    pub temperature: Option<f64>,
    /// Relative humidity, percent
    pub humidity: Option<u8>,
    /// m/s
    pub wind_speed: Option<f64>,
    /// One-hour precipitation, mm
    pub precipitation_amount: Option<f64>,
    /// Raw `SKY` code
    pub sky_code: Option<String>,
    /// Raw `PTY` code
    pub precipitation_code: Option<String>,
}

/// Whether an observation came from the provider or was generated locally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub observation: Observation,
    pub source: DataSource,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    /// City name as listed by `list_cities`, e.g. "수원시"
    pub city: Option<String>,
}
