use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::City;
use super::directory::{CityDirectory, Suggestions};

#[derive(Debug, Default, Deserialize)]
pub struct CitySearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CitySearchResponse {
    pub cities: Vec<City>,
}

/// Router exposing the location autocomplete.
pub fn city_router(directory: Arc<CityDirectory>) -> Router {
    Router::new()
        .route("/api/cities", get(search_handler))
        .with_state(directory)
}

pub(crate) async fn search_handler(
    State(directory): State<Arc<CityDirectory>>,
    Query(params): Query<CitySearchParams>,
) -> Json<CitySearchResponse> {
    let suggestions = directory.suggestions(params.query.as_deref());

    if matches!(suggestions, Suggestions::Matches(_)) && !directory.simulated_latency().is_zero() {
        tokio::time::sleep(directory.simulated_latency()).await;
    }

    let cities: Vec<City> = suggestions.into_cities().into_iter().cloned().collect();
    debug!(query = ?params.query, returned = cities.len(), "city suggestions served");

    Json(CitySearchResponse { cities })
}
