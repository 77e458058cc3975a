use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use rental_market::pricing::charges_router;
use rental_market::search::{city_router, CityDirectory};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_marketplace_routes(directory: Arc<CityDirectory>) -> Router {
    city_router(directory)
        .merge(charges_router())
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use rental_market::search::CityCatalog;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn build_router(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let directory = Arc::new(CityDirectory::new(CityCatalog::standard()));
        with_marketplace_routes(directory).layer(Extension(state))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&body).expect("json"))
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, payload) = get_json(build_router(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["status"], "initializing");

        let (status, payload) = get_json(build_router(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ready");
    }

    #[tokio::test]
    async fn health_and_city_routes_are_mounted() {
        let (status, payload) = get_json(build_router(true), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");

        let (status, payload) = get_json(build_router(true), "/api/cities?query=lisb").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["cities"][0]["name"], "Lisbon");
    }

    #[tokio::test]
    async fn charges_route_is_mounted() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/charges")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "monthly_rent": 1000,
                    "deposit_policy": "standard",
                    "move_in": "2025-01-01",
                    "move_out": "2025-03-31",
                })
                .to_string(),
            ))
            .expect("request");

        let response = build_router(true)
            .oneshot(request)
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload["upfront_total"], 1240);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let response = build_router(true)
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }
}
