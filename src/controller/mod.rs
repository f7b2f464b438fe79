use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::http::header::CONTENT_TYPE;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::models::tariff::Tariff;

pub mod enquiry_controller;
pub mod health_check;
pub mod price_list_controller;
pub mod quote_controller;

/// Shared, read-only state handed to every router.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppState {
    pub tariff: Tariff,
}

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let origins = parse_origins(&config.origin_urls)?;

    let application = application(AppState::default())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([CONTENT_TYPE])
                )
        );

    let addr = config.listen_addr();
    info!("Quote API server listening on: {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the quote API server")
}

/// All endpoints plus the fallback, without transport layers.
pub fn application(app_state: AppState) -> Router {
    router_endpoints(app_state).fallback(page_not_found_handler)
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(price_list_controller::router(app_state))
        .merge(quote_controller::router(app_state))
        .merge(enquiry_controller::router(app_state))
}

fn parse_origins(origin_urls: &str) -> anyhow::Result<Vec<HeaderValue>> {
    origin_urls
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .with_context(|| format!("Invalid origin url: {}", s))
        })
        .collect()
}
