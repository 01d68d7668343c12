//! Patient record service
//!
//! Business logic for the record store: CRUD over the whole-collection
//! storage collaborator, derived fields recomputed on every read, and the
//! sort/filter query surface. Nothing is persisted when an operation
//! fails.

use crate::error::ApiError;
use crate::repositories::PatientStore;
use carelog_shared::models::{PatientUpdate, StoredPatient};
use carelog_shared::types::{CreatePatientRequest, PatientResponse, SortField, SortOrder};
use carelog_shared::validation;
use std::cmp::Ordering;

/// Patient service for business logic
pub struct PatientService;

impl PatientService {
    /// List every record with derived fields, in storage order
    pub async fn list_all(store: &dyn PatientStore) -> Result<Vec<PatientResponse>, ApiError> {
        let patients = store.load().await?;
        Ok(patients
            .iter()
            .map(|(id, patient)| PatientResponse::from_stored(id, patient))
            .collect())
    }

    /// Fetch one record with derived fields
    pub async fn get(store: &dyn PatientStore, id: &str) -> Result<PatientResponse, ApiError> {
        let patients = store.load().await?;
        patients
            .get(id)
            .map(|patient| PatientResponse::from_stored(id, patient))
            .ok_or_else(|| ApiError::NotFound(format!("Patient '{id}' not found")))
    }

    /// Create a new record; the id must not already exist
    pub async fn create(
        store: &dyn PatientStore,
        request: CreatePatientRequest,
    ) -> Result<PatientResponse, ApiError> {
        Self::validate_create(&request)?;

        let (id, patient) = request.into_parts();
        let mut patients = store.load().await?;

        if patients.contains_key(&id) {
            return Err(ApiError::Conflict(format!(
                "Patient '{id}' already exists"
            )));
        }

        let response = PatientResponse::from_stored(&id, &patient);
        patients.insert(id, patient);
        store.save(&patients).await?;

        Ok(response)
    }

    /// Apply a partial update to an existing record
    pub async fn update(
        store: &dyn PatientStore,
        id: &str,
        update: PatientUpdate,
    ) -> Result<PatientResponse, ApiError> {
        Self::validate_update(&update)?;

        let mut patients = store.load().await?;
        let patient = patients
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound(format!("Patient '{id}' not found")))?;

        patient.apply_update(update);
        let response = PatientResponse::from_stored(id, patient);
        store.save(&patients).await?;

        Ok(response)
    }

    /// Remove a record; deleting an absent id fails the same way every time
    pub async fn delete(store: &dyn PatientStore, id: &str) -> Result<(), ApiError> {
        let mut patients = store.load().await?;

        if patients.remove(id).is_none() {
            return Err(ApiError::NotFound(format!("Patient '{id}' not found")));
        }

        store.save(&patients).await?;
        Ok(())
    }

    /// Return all records ordered by the requested field
    ///
    /// The sort is stable: ties keep storage order. BMI is computed ad hoc
    /// from the stored fields since it is never persisted.
    pub async fn sort(
        store: &dyn PatientStore,
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<PatientResponse>, ApiError> {
        let mut records = Self::list_all(store).await?;

        let key = |record: &PatientResponse| match field {
            SortField::HeightM => record.height_m,
            SortField::WeightKg => record.weight_kg,
            SortField::Bmi => record.bmi,
        };

        records.sort_by(|a, b| {
            let ordering = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(records)
    }

    fn validate_create(request: &CreatePatientRequest) -> Result<(), ApiError> {
        validation::validate_patient_id(&request.id)
            .and_then(|_| validation::validate_age(request.age))
            .and_then(|_| validation::validate_height_m(request.height_m))
            .and_then(|_| validation::validate_weight_kg(request.weight_kg))
            .map_err(ApiError::Validation)
    }

    /// Validate only the supplied fields of a partial update
    fn validate_update(update: &PatientUpdate) -> Result<(), ApiError> {
        if let Some(age) = update.age {
            validation::validate_age(age).map_err(ApiError::Validation)?;
        }
        if let Some(height_m) = update.height_m {
            validation::validate_height_m(height_m).map_err(ApiError::Validation)?;
        }
        if let Some(weight_kg) = update.weight_kg {
            validation::validate_weight_kg(weight_kg).map_err(ApiError::Validation)?;
        }
        Ok(())
    }
}
