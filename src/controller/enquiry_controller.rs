use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use tracing::{info, warn};
use crate::controller::AppState;
use crate::models::contact_prefill::ContactPrefill;
use crate::models::stay_request::StayRequest;
use crate::models::tariff::Tariff;
use crate::services::price_estimator::estimate_with;
use crate::services::stay_form::can_submit;

pub fn router(app_state: AppState) -> Router {
    let tariff = Arc::new(app_state.tariff);

    Router::new()
        .route("/enquiry", post(prefill_enquiry))
        .route_layer(Extension(tariff))
}

/// Hands the stay the guest settled on to the contact form. Nothing is stored.
pub async fn prefill_enquiry(
    Extension(tariff): Extension<Arc<Tariff>>,
    Json(body): Json<StayRequest>,
) -> impl IntoResponse {
    let result = estimate_with(&tariff, &body);

    if !can_submit(&body, &result) {
        warn!("Refusing enquiry for unresolved stay: {}", result.message);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please complete your stay details before sending an enquiry.",
        ).into_response();
    }

    info!("Prefilling contact form for stay {} - {}", body.checkin, body.checkout);
    (StatusCode::OK, Json(ContactPrefill::from_stay(&body))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use serde_json::json;
    use tower::ServiceExt;

    async fn enquire(body: serde_json::Value) -> Response {
        router(AppState::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/enquiry")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn priced_stay_prefills_contact_dates() {
        let response = enquire(json!({
            "checkin": "2024-06-01",
            "checkout": "2024-06-03",
            "persons": 2,
            "roomType": "DZ",
            "breakfast": false,
            "isEvent": false
        })).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let prefill: ContactPrefill = serde_json::from_slice(&body).unwrap();

        assert_eq!(prefill.checkin, "2024-06-01");
        assert_eq!(prefill.checkout, "2024-06-03");
        assert_eq!(prefill.name, "");
        assert_eq!(prefill.stay.persons, 2);
    }

    #[tokio::test]
    async fn event_stay_may_enquire_without_dates() {
        let response = enquire(json!({
            "checkin": "",
            "checkout": "",
            "persons": 1,
            "roomType": "EZ",
            "breakfast": false,
            "isEvent": true
        })).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn inverted_stay_is_refused() {
        let response = enquire(json!({
            "checkin": "2024-06-05",
            "checkout": "2024-06-04",
            "persons": 1,
            "roomType": "EZ",
            "breakfast": false,
            "isEvent": false
        })).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
