//! Selection → fetch → display flow and its view state machine.
//!
//! Only one panel is ever visible: the loading spinner, the weather card or
//! the error message. Each [`UiPort`] call replaces whatever was shown before.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::constants::{MSG_FETCH_FAILED, MSG_SELECT_LOCATION};
use crate::error::WeatherError;
use crate::fetcher::WeatherFetcher;
use crate::formatters::{present, CardFields};
use crate::locations;
use crate::time_window::compute_window;

/// Display capabilities the orchestrator drives
pub trait UiPort {
    fn show_loading(&mut self);
    fn show_card(&mut self, card: &CardFields);
    fn show_error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Success(CardFields),
    Error(String),
}

/// A panel as shown on a [`RecordingUi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Loading,
    Card(CardFields),
    Error(String),
}

/// UI that keeps every panel it was asked to show
#[derive(Debug, Default)]
pub struct RecordingUi {
    panels: Vec<Panel>,
}

impl RecordingUi {
    /// The panel currently visible, if any
    pub fn visible(&self) -> Option<&Panel> {
        self.panels.last()
    }

    pub fn history(&self) -> &[Panel] {
        &self.panels
    }
}

impl UiPort for RecordingUi {
    fn show_loading(&mut self) {
        self.panels.push(Panel::Loading);
    }

    fn show_card(&mut self, card: &CardFields) {
        self.panels.push(Panel::Card(card.clone()));
    }

    fn show_error(&mut self, message: &str) {
        self.panels.push(Panel::Error(message.to_string()));
    }
}

pub struct Orchestrator<U> {
    fetcher: Arc<WeatherFetcher>,
    ui: U,
    state: ViewState,
}

impl<U: UiPort> Orchestrator<U> {
    pub fn new(fetcher: Arc<WeatherFetcher>, ui: U) -> Self {
        Self {
            fetcher,
            ui,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Handles a search at the current local time
    pub async fn handle_search(&mut self, selection: Option<&str>) -> &ViewState {
        self.handle_search_at(selection, Local::now().naive_local()).await
    }

    /// Handles a search as if issued at `now`.
    ///
    /// An empty selection goes straight to the error panel without a fetch.
    pub async fn handle_search_at(
        &mut self,
        selection: Option<&str>,
        now: NaiveDateTime,
    ) -> &ViewState {
        let Some(city) = selection.map(str::trim).filter(|city| !city.is_empty()) else {
            self.show_error(MSG_SELECT_LOCATION);
            return &self.state;
        };

        self.state = ViewState::Loading;
        self.ui.show_loading();

        match self.load(city, now).await {
            Ok(card) => {
                self.ui.show_card(&card);
                self.state = ViewState::Success(card);
            }
            Err(e) => {
                tracing::error!("Error fetching weather data: {}", e);
                self.show_error(MSG_FETCH_FAILED);
            }
        }
        &self.state
    }

    async fn load(&self, city: &str, now: NaiveDateTime) -> Result<CardFields, WeatherError> {
        let location = locations::lookup(city)?;
        let window = compute_window(now);
        let outcome = self.fetcher.fetch(&location, &window).await;
        Ok(present(location.name, &outcome, now))
    }

    fn show_error(&mut self, message: &str) {
        self.ui.show_error(message);
        self.state = ViewState::Error(message.to_string());
    }
}
