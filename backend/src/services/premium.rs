//! Premium prediction service
//!
//! Validates the submitted profile, engineers the feature vector and
//! delegates to the injected model collaborator.

use crate::error::ApiError;
use crate::model::PremiumModel;
use carelog_shared::risk::{FeatureVector, PremiumCategory};
use carelog_shared::types::PredictRequest;
use carelog_shared::validation;

/// Premium service for business logic
pub struct PremiumService;

impl PremiumService {
    /// Predict the premium category for a submitted profile
    pub fn predict(
        model: &dyn PremiumModel,
        request: PredictRequest,
    ) -> Result<PremiumCategory, ApiError> {
        Self::validate(&request)?;

        let profile = request.into_profile();
        let features = FeatureVector::from_profile(&profile);

        Ok(model.predict(&features)?)
    }

    fn validate(request: &PredictRequest) -> Result<(), ApiError> {
        validation::validate_age(request.age)
            .and_then(|_| validation::validate_height_m(request.height))
            .and_then(|_| validation::validate_weight_kg(request.weight))
            .and_then(|_| validation::validate_income_lpa(request.income_lpa))
            .map_err(ApiError::Validation)
    }
}
