//! Entry point for the Payroll Liquidation Engine binary.
//!
//! Running this binary starts an HTTP server exposing the `/calculate`
//! endpoint. The directory containing the jurisdiction rules YAML files
//! may be specified via the `LIQUIDATION_RULES_DIR` environment variable;
//! if unset the server looks for `config/cl` relative to the current
//! working directory. The bind address is taken from
//! `LIQUIDATION_BIND_ADDR` and defaults to `127.0.0.1:3000`.

use tracing::info;

use liquidation_engine::api::{AppState, create_router};
use liquidation_engine::config::RulesLoader;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let rules_dir =
        std::env::var("LIQUIDATION_RULES_DIR").unwrap_or_else(|_| "config/cl".to_string());
    let addr =
        std::env::var("LIQUIDATION_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let rules = match RulesLoader::load(&rules_dir) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("Failed to load rules from '{}': {}", rules_dir, err);
            std::process::exit(1);
        }
    };

    let router = create_router(AppState::new(rules));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    info!(rules_dir = %rules_dir, addr = %addr, "Liquidation engine listening");

    if let Err(err) = axum::serve(listener, router).await {
        eprintln!("Server error: {}", err);
        std::process::exit(1);
    }
}
