use axum::{routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::calculator::compute_charges;
use super::dates::deserialize_stay_date;
use super::domain::{ChargeRequest, RentalCharges};
use crate::error::AppError;

/// Quote request as submitted by the property page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeQuoteRequest {
    pub monthly_rent: i64,
    pub deposit_policy: String,
    #[serde(deserialize_with = "deserialize_stay_date")]
    pub move_in: NaiveDate,
    #[serde(deserialize_with = "deserialize_stay_date")]
    pub move_out: NaiveDate,
}

/// Router exposing the rental charge calculator.
pub fn charges_router() -> Router {
    Router::new().route("/api/v1/charges", post(quote_handler))
}

pub(crate) async fn quote_handler(
    Json(payload): Json<ChargeQuoteRequest>,
) -> Result<Json<RentalCharges>, AppError> {
    let charges = ChargeRequest::new(
        payload.monthly_rent,
        &payload.deposit_policy,
        payload.move_in,
        payload.move_out,
    )
    .and_then(|request| compute_charges(&request))
    .inspect_err(|error| warn!(%error, "rejected charge quote"))?;

    Ok(Json(charges))
}
