//! API request and response types

use crate::health_metrics::HealthVerdict;
use crate::models::{Gender, StoredPatient};
use crate::risk::{Occupation, PremiumCategory, PremiumProfile};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Patient Record Store
// ============================================================================

/// Create request: stored fields plus the externally supplied id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height_m: f64,
    pub weight_kg: f64,
}

impl CreatePatientRequest {
    /// Split into the map key and the stored object
    pub fn into_parts(self) -> (String, StoredPatient) {
        (
            self.id,
            StoredPatient {
                name: self.name,
                city: self.city,
                age: self.age,
                gender: self.gender,
                height_m: self.height_m,
                weight_kg: self.weight_kg,
            },
        )
    }
}

/// Full patient record with derived fields populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientResponse {
    pub id: String,
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height_m: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub health_verdict: HealthVerdict,
}

impl PatientResponse {
    /// Build a response from a stored record, deriving bmi and verdict
    pub fn from_stored(id: &str, patient: &StoredPatient) -> Self {
        Self {
            id: id.to_string(),
            name: patient.name.clone(),
            city: patient.city.clone(),
            age: patient.age,
            gender: patient.gender,
            height_m: patient.height_m,
            weight_kg: patient.weight_kg,
            bmi: patient.bmi(),
            health_verdict: patient.health_verdict(),
        }
    }
}

/// Mutation response carrying the affected record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientMutationResponse {
    pub message: String,
    pub patient: PatientResponse,
}

/// Plain message response (delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Sortable record fields
///
/// Matching is strict: near-misses like `weight` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    HeightM,
    WeightKg,
    Bmi,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height_m" => Ok(SortField::HeightM),
            "weight_kg" => Ok(SortField::WeightKg),
            "bmi" => Ok(SortField::Bmi),
            other => Err(format!(
                "invalid sort_by field '{}'; must be one of height_m, weight_kg, bmi",
                other
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid order '{}'; must be 'asc' or 'desc'", other)),
        }
    }
}

/// Raw sort query parameters
///
/// Kept as strings so the boundary can reject bad values with a structured
/// validation error instead of a bare deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SortQuery {
    pub sort_by: String,
    #[serde(default)]
    pub order: Option<String>,
}

// ============================================================================
// Premium Classifier
// ============================================================================

/// Prediction request body
///
/// Wire names `weight` and `height` (kilograms and meters).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub smoker: bool,
    pub income_lpa: f64,
    pub occupation: Occupation,
    pub city: String,
}

impl PredictRequest {
    /// Convert into the internal profile representation
    pub fn into_profile(self) -> PremiumProfile {
        PremiumProfile {
            age: self.age,
            weight_kg: self.weight,
            height_m: self.height,
            smoker: self.smoker,
            income_lpa: self.income_lpa,
            occupation: self.occupation,
            city: self.city,
        }
    }
}

/// Prediction response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_premium: PremiumCategory,
}
