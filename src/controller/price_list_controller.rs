use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use crate::controller::AppState;
use crate::models::tariff::Tariff;

pub fn router(app_state: AppState) -> Router {
    let tariff = Arc::new(app_state.tariff);

    Router::new()
        .route("/prices", get(retrieve_price_list))
        .route_layer(Extension(tariff))
}

pub async fn retrieve_price_list(
    Extension(tariff): Extension<Arc<Tariff>>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(tariff.price_list()))
}
