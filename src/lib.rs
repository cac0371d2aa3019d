//! Current-weather lookups for Gyeonggi-do cities from the KMA nowcast API,
//! served as MCP tools.

pub mod condition;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod locations;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod service;
pub mod synthetic;
pub mod time_window;

pub use config::{RouteKind, ServiceConfig};
pub use error::{TransportError, WeatherError};
pub use fetcher::{HttpRoute, TransportRoute, WeatherFetcher};
pub use models::{DataSource, FetchOutcome, Observation, RawRecord};
pub use orchestrator::{Orchestrator, Panel, RecordingUi, UiPort, ViewState};
pub use service::Weather;
