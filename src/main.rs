use mcp_canva_server::client::CanvaClient;
use mcp_canva_server::config::ServerConfig;
use mcp_canva_server::server::McpServer;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout is reserved for the JSON-RPC transport.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env();
    let client = CanvaClient::new(config);

    let mut server = McpServer::new(client);
    if let Err(e) = server.run().await {
        tracing::error!("mcp-canva-server: fatal error: {e}");
        std::process::exit(1);
    }
}
