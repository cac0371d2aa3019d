use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::fetcher::WeatherFetcher;
use crate::formatters::{format_card, format_locations};
use crate::locations;
use crate::models::GetCurrentWeatherRequest;
use crate::orchestrator::{Orchestrator, RecordingUi, ViewState};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    fetcher: Arc<WeatherFetcher>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self::with_fetcher(Arc::new(WeatherFetcher::new(config)?)))
    }

    pub fn with_fetcher(fetcher: Arc<WeatherFetcher>) -> Self {
        Self {
            fetcher,
            tool_router: Self::tool_router(),
        }
    }

    /// Runs one search and renders the final view as a tool result
    pub async fn current_weather(&self, city: Option<&str>) -> CallToolResult {
        let mut orchestrator = Orchestrator::new(self.fetcher.clone(), RecordingUi::default());

        match orchestrator.handle_search(city).await {
            ViewState::Success(card) => CallToolResult::success(vec![Content::text(format_card(card))]),
            ViewState::Error(message) => CallToolResult::error(vec![Content::text(message.clone())]),
            ViewState::Idle | ViewState::Loading => {
                CallToolResult::error(vec![Content::text("Search did not complete")])
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "gyeonggi-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Current weather for major Gyeonggi-do cities, powered by the Korea \
                Meteorological Administration nowcast API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current observed weather for a supported city
    #[tool(description = "Get current observed weather for a Gyeonggi-do city. Provide the Korean city name exactly as listed by list_cities (e.g., '수원시'). When the user has not picked a city, suggest 안산시, the default. Falls back to generated data when the KMA API is unreachable.")]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting current weather for city: {:?}", request.city);

        Ok(self.current_weather(request.city.as_deref()).await)
    }

    /// Lists the supported cities
    #[tool(description = "List the supported Gyeonggi-do cities and their KMA grid coordinates.")]
    async fn list_cities(&self) -> Result<CallToolResult, McpError> {
        let formatted = format_locations(locations::all());

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}
