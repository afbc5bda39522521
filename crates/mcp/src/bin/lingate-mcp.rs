use anyhow::{bail, Result};
use clap::Parser;
use lingate_client::{ClientConfig, LinearClient};
use lingate_mcp::auth::HttpBroker;
use lingate_mcp::tools::default_registry;
use lingate_mcp::{AuthProvider, Dispatcher};
use std::sync::Arc;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "lingate-mcp")]
#[command(about = "MCP gateway for the Linear issue tracker", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "LINGATE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "LINGATE_PORT", default_value = "8000")]
    port: u16,

    /// Auth mode: "passthrough" forwards the caller's bearer token,
    /// "managed" exchanges it at a credential broker
    #[arg(long, env = "LINGATE_AUTH_MODE", default_value = "passthrough")]
    auth_mode: String,

    /// Credential broker token endpoint (required in managed mode)
    #[arg(long, env = "LINGATE_BROKER_URL")]
    broker_url: Option<Url>,

    /// Upstream GraphQL endpoint override
    #[arg(long, env = "LINGATE_LINEAR_ENDPOINT")]
    linear_endpoint: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lingate=info,tower_http=debug".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let client_config = match args.linear_endpoint {
        Some(endpoint) => ClientConfig::new(endpoint),
        None => ClientConfig::default(),
    };
    tracing::info!("Upstream endpoint: {}", client_config.endpoint);
    let client = Arc::new(LinearClient::new(client_config)?);

    let auth = match args.auth_mode.as_str() {
        "passthrough" => AuthProvider::PassThrough,
        "managed" => {
            let Some(broker_url) = args.broker_url else {
                bail!("--broker-url is required when --auth-mode is 'managed'");
            };
            tracing::info!("Managed auth via broker at {broker_url}");
            AuthProvider::Managed(Arc::new(HttpBroker::new(broker_url)?))
        }
        other => bail!("unknown auth mode '{other}' (expected 'passthrough' or 'managed')"),
    };

    let dispatcher = Arc::new(Dispatcher::new(default_registry(client), auth));

    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("Starting MCP gateway on {}", addr);
    lingate_mcp::server::serve(&addr, dispatcher).await?;

    Ok(())
}
