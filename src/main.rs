//! Holocron - REST catalog API for films, planets, and starships
//!
//! This binary serves the three resource collections over HTTP, seeds empty
//! collections from fixture data at startup, and publishes its own OpenAPI
//! document.

use holocron::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env file before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    holocron::start_server(config).await?;

    Ok(())
}
