use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use gyeonggi_weather_server::constants::KMA_API_BASE;
use gyeonggi_weather_server::{RouteKind, ServiceConfig, Weather};

#[derive(Debug, Parser)]
#[command(version, about = "MCP server for current Gyeonggi-do weather from the KMA API")]
struct Args {
    /// data.go.kr service key (the decoded form)
    #[arg(long, env = "KMA_SERVICE_KEY", hide_env_values = true)]
    service_key: String,

    /// Nowcast endpoint
    #[arg(long, env = "KMA_API_BASE", default_value = KMA_API_BASE)]
    base_url: Url,

    /// Upper bound on each route attempt, in seconds
    #[arg(long, default_value_t = 10)]
    route_timeout_secs: u64,

    /// Call the provider directly and skip the CORS proxies
    #[arg(long)]
    direct_only: bool,
}

impl Args {
    fn into_config(self) -> ServiceConfig {
        let mut config = ServiceConfig::new(self.service_key, self.base_url)
            .with_route_timeout(Duration::from_secs(self.route_timeout_secs));
        if self.direct_only {
            config = config.with_routes(vec![RouteKind::Direct]);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gyeonggi_weather_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Args::parse().into_config();
    tracing::info!(
        "Starting Gyeonggi weather MCP server ({} routes, {:?} per route)",
        config.routes.len(),
        config.route_timeout
    );

    let weather = Weather::new(&config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
