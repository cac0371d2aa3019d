use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::config::{RouteKind, ServiceConfig};
use crate::constants::USER_AGENT;
use crate::error::TransportError;
use crate::locations::Location;
use crate::models::{DataSource, FetchOutcome, ObservationQuery, ProviderEnvelope, RawRecord};
use crate::parser::parse;
use crate::synthetic::synthesize;
use crate::time_window::TimeWindow;

/// One way of reaching the provider. Every route returns the same envelope.
#[async_trait]
pub trait TransportRoute: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn fetch(&self, provider_url: &Url) -> Result<ProviderEnvelope, TransportError>;
}

/// Route that issues a GET over HTTP, optionally through a proxy
pub struct HttpRoute {
    client: Arc<Client>,
    kind: RouteKind,
}

impl HttpRoute {
    pub fn new(client: Arc<Client>, kind: RouteKind) -> Self {
        Self { client, kind }
    }

    /// The URL actually requested for a given provider URL
    pub fn target_url(&self, provider_url: &Url) -> Result<Url, TransportError> {
        let url = match &self.kind {
            RouteKind::Direct => provider_url.clone(),
            RouteKind::QueryWrapped { prefix } => {
                let encoded: String = byte_serialize(provider_url.as_str().as_bytes()).collect();
                Url::parse(&format!("{}{}", prefix, encoded))?
            }
            RouteKind::PathPrefixed { prefix } => {
                Url::parse(&format!("{}{}", prefix, provider_url))?
            }
        };
        Ok(url)
    }
}

#[async_trait]
impl TransportRoute for HttpRoute {
    fn name(&self) -> &str {
        match &self.kind {
            RouteKind::Direct => "direct",
            RouteKind::QueryWrapped { prefix } | RouteKind::PathPrefixed { prefix } => prefix.as_str(),
        }
    }

    async fn fetch(&self, provider_url: &Url) -> Result<ProviderEnvelope, TransportError> {
        let url = self.target_url(provider_url)?;
        tracing::debug!("Requesting observation via {}", self.name());

        // reqwest errors carry the request URL, which includes the service key
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !response.status().is_success() {
            return Err(TransportError::Status(response.status()));
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Fetches observations by trying each route in order, falling back to
/// synthetic data when every route fails
pub struct WeatherFetcher {
    routes: Vec<Box<dyn TransportRoute>>,
    base_url: Url,
    service_key: String,
    route_timeout: Duration,
}

impl WeatherFetcher {
    /// Creates a fetcher with HTTP routes for every configured route kind
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.route_timeout)
            .build()?;
        let client = Arc::new(client);

        let routes = config
            .routes
            .iter()
            .cloned()
            .map(|kind| Box::new(HttpRoute::new(client.clone(), kind)) as Box<dyn TransportRoute>)
            .collect();

        Ok(Self::with_routes(config, routes))
    }

    /// Creates a fetcher over caller-supplied routes
    pub fn with_routes(config: &ServiceConfig, routes: Vec<Box<dyn TransportRoute>>) -> Self {
        Self {
            routes,
            base_url: config.base_url.clone(),
            service_key: config.service_key.clone(),
            route_timeout: config.route_timeout,
        }
    }

    /// Full provider URL including the service key
    pub fn provider_url(&self, query: &ObservationQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .extend_pairs(query.query_pairs(&self.service_key));
        url
    }

    /// Never fails: transport and provider errors end in synthetic data
    pub async fn fetch(&self, location: &Location, window: &TimeWindow) -> FetchOutcome {
        let query = ObservationQuery::new(location, window);
        let provider_url = self.provider_url(&query);

        tracing::info!(
            "Fetching observation for {} (nx={}, ny={}) at {} {}",
            location.name,
            query.nx,
            query.ny,
            query.base_date,
            query.base_time
        );

        for route in &self.routes {
            match self.attempt(route.as_ref(), &provider_url).await {
                Ok(records) => {
                    tracing::info!("Received {} records via {}", records.len(), route.name());
                    return FetchOutcome {
                        observation: parse(&records),
                        source: DataSource::Live,
                    };
                }
                Err(e) => tracing::warn!("Route {} failed: {}", route.name(), e),
            }
        }

        tracing::warn!(
            "All {} routes failed for {}, falling back to synthetic data",
            self.routes.len(),
            location.name
        );
        let observation = synthesize(location.name, &mut rand::thread_rng());

        FetchOutcome {
            observation,
            source: DataSource::Synthetic,
        }
    }

    async fn attempt(
        &self,
        route: &dyn TransportRoute,
        provider_url: &Url,
    ) -> Result<Vec<RawRecord>, TransportError> {
        let envelope = tokio::time::timeout(self.route_timeout, route.fetch(provider_url))
            .await
            .map_err(|_| TransportError::Timeout(self.route_timeout))??;

        envelope.into_records()
    }
}
