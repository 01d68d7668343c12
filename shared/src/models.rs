//! Patient domain models
//!
//! `StoredPatient` is the flat object persisted per patient id; BMI and the
//! health verdict are never part of it and are derived on read via
//! [`crate::health_metrics`].

use crate::health_metrics::{classify_bmi, rounded_bmi, HealthVerdict};
use serde::{Deserialize, Serialize};

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Stored (non-derived) patient fields
///
/// The patient id is the key of the persisted map, not a field of the
/// stored object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPatient {
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height_m: f64,
    pub weight_kg: f64,
}

impl StoredPatient {
    /// BMI rounded to 2 decimal places, derived from the stored fields
    pub fn bmi(&self) -> f64 {
        rounded_bmi(self.weight_kg, self.height_m)
    }

    /// Health verdict classified from the rounded BMI
    pub fn health_verdict(&self) -> HealthVerdict {
        classify_bmi(self.bmi())
    }

    /// Apply a partial update, overwriting only the supplied fields
    pub fn apply_update(&mut self, update: PatientUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(height_m) = update.height_m {
            self.height_m = height_m;
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = weight_kg;
        }
    }
}

/// Partial update to an existing patient record
///
/// All fields optional; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl PatientUpdate {
    /// True if no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.city.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.height_m.is_none()
            && self.weight_kg.is_none()
    }
}
