//! Premium classifier API routes

use crate::error::ApiError;
use crate::services::PremiumService;
use crate::state::PremiumState;
use axum::{extract::State, Json};
use carelog_shared::types::{PredictRequest, PredictResponse};

/// POST /predict - Predict the premium category for a profile
pub async fn predict(
    State(state): State<PremiumState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let predicted_premium = PremiumService::predict(state.model(), request)?;

    Ok(Json(PredictResponse { predicted_premium }))
}
