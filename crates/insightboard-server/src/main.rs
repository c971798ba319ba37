#![allow(clippy::doc_markdown)]
//! InsightBoard Server - REST API for the InsightBoard dashboard.

use axum::Router;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insightboard_core::{InsightConfig, LoggingConfig, QueryService, RecordStore};
use insightboard_server::{api_router, ApiDoc, AppState};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// InsightBoard Server - dashboard API over the records store
#[derive(Parser, Debug)]
#[command(name = "insightboard-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to ./insightboard.toml when present)
    #[arg(short, long, env = "INSIGHTBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database URL
    #[arg(long, env = "INSIGHTBOARD_DATABASE_URL")]
    database_url: Option<String>,

    /// Host address to bind to
    #[arg(long, env = "INSIGHTBOARD_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "INSIGHTBOARD_PORT")]
    port: Option<u16>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("{},tower_http=debug", logging.level)),
    );
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "compact" {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Resolve configuration: defaults < file < env < flags
    let mut config = match &args.config {
        Some(path) => InsightConfig::load_from_path(path)?,
        None => InsightConfig::load()?,
    };
    if let Some(url) = args.database_url {
        config.storage.database_url = url;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    init_tracing(&config.logging);

    tracing::info!("Starting InsightBoard server...");
    tracing::info!("Database: {}", config.storage.database_url);

    // Open the store
    let store = RecordStore::open(&config.storage).await?;
    let state = Arc::new(AppState {
        service: QueryService::new(store),
    });

    // Swagger UI (stateless router)
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let mut app = api_router(state).merge(Router::<()>::new().merge(swagger_ui));
    if config.server.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("InsightBoard server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
