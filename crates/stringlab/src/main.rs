//! Run the stringlab API server standalone.
//!
//! Usage: STRINGLAB_PORT=3000 cargo run -p stringlab

use std::net::SocketAddr;

use stringlab::server::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("STRINGLAB_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    match Server::bind(addr).await {
        Ok(server) => {
            println!("stringlab listening on http://{}", server.addr());
            println!("\nAvailable endpoints:");
            println!("  GET    /health                              - Health check");
            println!("  POST   /strings                             - Analyse and store a string");
            println!("  GET    /strings                             - List strings (filter params)");
            println!("  GET    /strings/filter-by-natural-language  - Filter via free-text query");
            println!("  GET    /strings/:value                      - Fetch a stored string");
            println!("  DELETE /strings/:value                      - Delete a stored string");
            println!("\nPress Ctrl+C to stop");

            tokio::signal::ctrl_c().await.expect("ctrl-c handler");
            println!("\nShutting down...");
        }
        Err(e) => {
            eprintln!("Failed to start server: {e}");
            std::process::exit(1);
        }
    }
}
