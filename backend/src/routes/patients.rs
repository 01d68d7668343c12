//! Patient record store API routes

use crate::error::ApiError;
use crate::services::PatientService;
use crate::state::RecordsState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use carelog_shared::models::PatientUpdate;
use carelog_shared::types::{
    CreatePatientRequest, MessageResponse, PatientMutationResponse, PatientResponse, SortField,
    SortOrder, SortQuery,
};
use serde::Serialize;

/// Service metadata response
#[derive(Serialize)]
pub struct AboutResponse {
    pub app: String,
    pub version: String,
    pub description: String,
}

/// GET / - Service banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Patient Records API".to_string(),
    })
}

/// GET /about - Service metadata
pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        app: "Patient Records".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "CRUD API over patient records with derived BMI and health verdict"
            .to_string(),
    })
}

/// GET /view - All records with derived fields
pub async fn view(
    State(state): State<RecordsState>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    let records = PatientService::list_all(state.store()).await?;
    Ok(Json(records))
}

/// GET /patient/{id} - One record with derived fields
pub async fn get_patient(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, ApiError> {
    let record = PatientService::get(state.store(), &id).await?;
    Ok(Json(record))
}

/// POST /create - Create a new record
pub async fn create_patient(
    State(state): State<RecordsState>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<PatientMutationResponse>), ApiError> {
    let patient = PatientService::create(state.store(), request).await?;

    Ok((
        StatusCode::CREATED,
        Json(PatientMutationResponse {
            message: "Patient created successfully".to_string(),
            patient,
        }),
    ))
}

/// PUT /edit/{id} - Apply a partial update
pub async fn edit_patient(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
    Json(update): Json<PatientUpdate>,
) -> Result<Json<PatientMutationResponse>, ApiError> {
    let patient = PatientService::update(state.store(), &id, update).await?;

    Ok(Json(PatientMutationResponse {
        message: "Patient updated successfully".to_string(),
        patient,
    }))
}

/// DELETE /delete/{id} - Remove a record
pub async fn delete_patient(
    State(state): State<RecordsState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    PatientService::delete(state.store(), &id).await?;

    Ok(Json(MessageResponse {
        message: "Patient deleted successfully".to_string(),
    }))
}

/// GET /sort?sort_by={height_m|weight_kg|bmi}&order={asc|desc}
///
/// Field matching is strict; unknown fields or orders are validation
/// errors, not near-miss guesses.
pub async fn sort_patients(
    State(state): State<RecordsState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    let field: SortField = query.sort_by.parse().map_err(ApiError::Validation)?;
    let order = match query.order.as_deref() {
        Some(raw) => raw.parse::<SortOrder>().map_err(ApiError::Validation)?,
        None => SortOrder::default(),
    };

    let records = PatientService::sort(state.store(), field, order).await?;
    Ok(Json(records))
}
