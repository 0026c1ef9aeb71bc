// Bring in required crates
use clap::Parser;
use tokio::net;
use tower_http::trace;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Bring in our local modules
mod api;
mod config;
mod controller;
mod error;
mod image;
mod mood;
mod recipe;
mod service;
mod templates;
mod view;
mod web;

use config::*;
use controller::*;
use error::*;
use mood::*;
use recipe::*;
use service::*;
use templates::*;
use view::*;
use web::*;

// Main server setup
async fn serve(config: Config) -> Result<(), ServeError> {
    // Initialize structured logging and HTTP tracing for Axum with environment-based filtering.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_recipe=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let trace_layer = trace::TraceLayer::new_for_http()
        .make_span_with(trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(trace::DefaultOnResponse::new().level(tracing::Level::INFO));

    let service = HttpRecipeService::new(
        config.service_url.clone(),
        config.cuisine.clone(),
        config.timeout(),
    )?;
    tracing::info!(service = %config.service_url, moods = config.moods.len(), "recipe service configured");

    let app = router(AppState::new(service, &config), &config.assets).layer(trace_layer);

    let listener = net::TcpListener::bind(config.bind).await?;
    tracing::info!("serving on http://{}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}

// Entry point of the app
#[tokio::main]
async fn main() {
    let config = Config::parse();
    // If serve() returns an error, log and exit
    if let Err(err) = serve(config).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
