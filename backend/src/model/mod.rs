//! Premium classification model
//!
//! The trained model is an opaque collaborator: it accepts the engineered
//! feature vector and returns one of three premium category labels. It is
//! loaded once at process start, validated, and shared read-only for the
//! remainder of the process lifetime.

use carelog_shared::risk::{
    AgeGroup, CityTier, FeatureVector, LifestyleRisk, Occupation, PremiumCategory,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Model collaborator failure
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("model artifact I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("model artifact is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model artifact is invalid: {0}")]
    Invalid(String),
}

/// Contract with the trained model
///
/// Implementations must be deterministic: repeated calls with an identical
/// feature vector return the identical label.
pub trait PremiumModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<PremiumCategory, ModelError>;
}

/// On-disk model artifact exported by the training pipeline
///
/// Per-class intercepts, per-class weights for each numeric feature, and
/// per-class weight rows for every level of each categorical feature. The
/// class order of `classes` indexes every weight row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub classes: Vec<String>,
    pub intercepts: Vec<f64>,
    pub numeric_weights: BTreeMap<String, Vec<f64>>,
    pub categorical_weights: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}

/// Linear scorer over the engineered feature vector
///
/// Scores every class and returns the argmax; ties go to the earliest
/// class in artifact order, so inference is deterministic.
#[derive(Debug)]
pub struct LinearScorer {
    classes: Vec<PremiumCategory>,
    intercepts: Vec<f64>,
    numeric: BTreeMap<String, Vec<f64>>,
    categorical: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}

const NUMERIC_FEATURES: [&str; 2] = ["bmi", "income_lpa"];

impl LinearScorer {
    /// Load and validate a model artifact from disk
    ///
    /// Any structural problem is fatal: callers are expected to refuse to
    /// serve rather than degrade silently.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let artifact: ModelArtifact = serde_json::from_slice(&bytes)?;
        let scorer = Self::from_artifact(artifact)?;
        info!(path = %path.display(), classes = scorer.classes.len(), "premium model loaded");
        Ok(scorer)
    }

    /// Validate an artifact's shape and build the scorer
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        let classes: Vec<PremiumCategory> = artifact
            .classes
            .iter()
            .map(|label| {
                PremiumCategory::from_label(label)
                    .ok_or_else(|| ModelError::Invalid(format!("unknown class label '{label}'")))
            })
            .collect::<Result<_, _>>()?;

        if classes.len() != 3 {
            return Err(ModelError::Invalid(format!(
                "expected 3 classes, artifact has {}",
                classes.len()
            )));
        }

        let arity = classes.len();
        if artifact.intercepts.len() != arity {
            return Err(ModelError::Invalid(format!(
                "intercepts arity {} does not match class count {arity}",
                artifact.intercepts.len()
            )));
        }

        for name in NUMERIC_FEATURES {
            let weights = artifact
                .numeric_weights
                .get(name)
                .ok_or_else(|| ModelError::Invalid(format!("missing numeric feature '{name}'")))?;
            if weights.len() != arity {
                return Err(ModelError::Invalid(format!(
                    "numeric feature '{name}' arity {} does not match class count {arity}",
                    weights.len()
                )));
            }
        }

        let expected_levels: [(&str, Vec<&str>); 4] = [
            ("age_group", AgeGroup::all().iter().map(|v| v.as_str()).collect()),
            ("lifestyle_risk", LifestyleRisk::all().iter().map(|v| v.as_str()).collect()),
            ("city_tier", CityTier::all().iter().map(|v| v.as_str()).collect()),
            ("occupation", Occupation::all().iter().map(|v| v.as_str()).collect()),
        ];

        for (feature, levels) in &expected_levels {
            let table = artifact.categorical_weights.get(*feature).ok_or_else(|| {
                ModelError::Invalid(format!("missing categorical feature '{feature}'"))
            })?;
            for level in levels {
                let weights = table.get(*level).ok_or_else(|| {
                    ModelError::Invalid(format!(
                        "categorical feature '{feature}' is missing level '{level}'"
                    ))
                })?;
                if weights.len() != arity {
                    return Err(ModelError::Invalid(format!(
                        "categorical '{feature}'/'{level}' arity {} does not match class count {arity}",
                        weights.len()
                    )));
                }
            }
        }

        Ok(Self {
            classes,
            intercepts: artifact.intercepts,
            numeric: artifact.numeric_weights,
            categorical: artifact.categorical_weights,
        })
    }

    fn numeric_weights(&self, feature: &str) -> Result<&[f64], ModelError> {
        self.numeric
            .get(feature)
            .map(Vec::as_slice)
            .ok_or_else(|| ModelError::Invalid(format!("missing numeric feature '{feature}'")))
    }

    fn level_weights(&self, feature: &str, level: &str) -> Result<&[f64], ModelError> {
        self.categorical
            .get(feature)
            .and_then(|table| table.get(level))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                ModelError::Invalid(format!("missing weights for '{feature}'='{level}'"))
            })
    }
}

impl PremiumModel for LinearScorer {
    fn predict(&self, features: &FeatureVector) -> Result<PremiumCategory, ModelError> {
        let mut scores = self.intercepts.clone();

        let bmi_weights = self.numeric_weights("bmi")?;
        let income_weights = self.numeric_weights("income_lpa")?;
        let level_rows = [
            self.level_weights("age_group", features.age_group.as_str())?,
            self.level_weights("lifestyle_risk", features.lifestyle_risk.as_str())?,
            self.level_weights("city_tier", features.city_tier.as_str())?,
            self.level_weights("occupation", features.occupation.as_str())?,
        ];

        for (idx, score) in scores.iter_mut().enumerate() {
            *score += features.bmi * bmi_weights[idx];
            *score += features.income_lpa * income_weights[idx];
            for row in &level_rows {
                *score += row[idx];
            }
        }

        // Strictly-greater comparison keeps ties on the earliest class
        let mut best = 0;
        for (idx, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = idx;
            }
        }

        Ok(self.classes[best])
    }
}
