use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::controller::AppState;
use crate::models::price_result::PriceResult;
use crate::models::stay_request::StayRequest;
use crate::models::tariff::Tariff;
use crate::services::price_estimator::estimate_with;
use crate::services::stay_form::{apply_change, can_submit, default_request, summary, FieldChange};

pub fn router(app_state: AppState) -> Router {
    let tariff = Arc::new(app_state.tariff);

    Router::new()
        .route("/quote", get(quote_from_query).post(quote_from_body))
        .route("/quote/defaults", get(default_quote))
        .route("/quote/change", post(change_field))
        .route_layer(Extension(tariff))
}

/// Everything the quote form needs to render after an input change.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    pub request: StayRequest,
    pub result: PriceResult,
    pub summary: String,
    pub can_submit: bool,
}

impl QuoteView {
    pub fn build(tariff: &Tariff, request: StayRequest) -> Self {
        let result = estimate_with(tariff, &request);
        debug!("Estimated {:?} -> {}", request, result.message);

        Self {
            summary: summary(&result),
            can_submit: can_submit(&request, &result),
            request,
            result,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChangeFieldBody {
    pub request: StayRequest,
    pub change: FieldChange,
}

pub async fn quote_from_query(
    Extension(tariff): Extension<Arc<Tariff>>,
    Query(request): Query<StayRequest>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(QuoteView::build(&tariff, request)))
}

pub async fn quote_from_body(
    Extension(tariff): Extension<Arc<Tariff>>,
    Json(request): Json<StayRequest>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(QuoteView::build(&tariff, request)))
}

pub async fn default_quote(
    Extension(tariff): Extension<Arc<Tariff>>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(QuoteView::build(&tariff, default_request())))
}

pub async fn change_field(
    Extension(tariff): Extension<Arc<Tariff>>,
    Json(body): Json<ChangeFieldBody>,
) -> impl IntoResponse {
    let request = apply_change(&body.request, body.change);

    (StatusCode::OK, Json(QuoteView::build(&tariff, request)))
}
