//! Premium risk feature engineering
//!
//! Transforms a submitted profile into the engineered feature vector the
//! premium classification model expects. The bucket cut points, risk rule
//! and city tier membership lists are exactly what the bundled model was
//! trained against and must not be changed independently of it.

use crate::health_metrics::calculate_bmi;
use serde::{Deserialize, Serialize};

/// Occupation categories accepted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Retired,
    Employed,
    Unemployed,
    Freelancer,
    Student,
    BusinessOwner,
}

impl Occupation {
    /// Feature-level name as the model artifact spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Retired => "retired",
            Occupation::Employed => "employed",
            Occupation::Unemployed => "unemployed",
            Occupation::Freelancer => "freelancer",
            Occupation::Student => "student",
            Occupation::BusinessOwner => "business_owner",
        }
    }

    /// All accepted occupations, in artifact order
    pub fn all() -> [Occupation; 6] {
        [
            Occupation::Retired,
            Occupation::Employed,
            Occupation::Unemployed,
            Occupation::Freelancer,
            Occupation::Student,
            Occupation::BusinessOwner,
        ]
    }
}

/// Age bucket feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Adult,
    Senior,
}

impl AgeGroup {
    /// Bucket an age in years
    ///
    /// Cut points: child < 18, adult 18-64, senior 65+.
    pub fn from_age(age: u32) -> Self {
        if age < 18 {
            AgeGroup::Child
        } else if age < 65 {
            AgeGroup::Adult
        } else {
            AgeGroup::Senior
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }

    pub fn all() -> [AgeGroup; 3] {
        [AgeGroup::Child, AgeGroup::Adult, AgeGroup::Senior]
    }
}

/// Lifestyle risk feature combining smoking status and BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleRisk {
    Low,
    Medium,
    High,
}

impl LifestyleRisk {
    /// Derive lifestyle risk from smoking status and raw BMI
    ///
    /// High: smoker with BMI above 30. Medium: smoker or BMI above 30,
    /// not both. Low: neither.
    pub fn from_smoker_and_bmi(smoker: bool, bmi: f64) -> Self {
        if smoker && bmi > 30.0 {
            LifestyleRisk::High
        } else if smoker || bmi > 30.0 {
            LifestyleRisk::Medium
        } else {
            LifestyleRisk::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifestyleRisk::Low => "low",
            LifestyleRisk::Medium => "medium",
            LifestyleRisk::High => "high",
        }
    }

    pub fn all() -> [LifestyleRisk; 3] {
        [LifestyleRisk::Low, LifestyleRisk::Medium, LifestyleRisk::High]
    }
}

/// Tier-1 cities for the city tier feature
pub const TIER_1_CITIES: [&str; 7] = [
    "Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata", "Hyderabad", "Pune",
];

/// Tier-2 cities for the city tier feature
pub const TIER_2_CITIES: [&str; 48] = [
    "Jaipur", "Chandigarh", "Indore", "Lucknow", "Patna", "Ranchi", "Visakhapatnam", "Coimbatore",
    "Bhopal", "Nagpur", "Vadodara", "Surat", "Rajkot", "Jodhpur", "Raipur", "Amritsar", "Varanasi",
    "Agra", "Dehradun", "Mysore", "Jabalpur", "Guwahati", "Thiruvananthapuram", "Ludhiana",
    "Nashik", "Allahabad", "Udaipur", "Aurangabad", "Hubli", "Belgaum", "Salem", "Vijayawada",
    "Tiruchirappalli", "Bhavnagar", "Gwalior", "Dhanbad", "Bareilly", "Aligarh", "Gaya",
    "Kozhikode", "Warangal", "Kolhapur", "Bilaspur", "Jalandhar", "Noida", "Guntur", "Asansol",
    "Siliguri",
];

/// Coarse economic tier of a city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityTier {
    Tier1,
    Tier2,
    Tier3,
}

impl CityTier {
    /// Map a city name to its tier
    ///
    /// Membership is exact string match; unknown cities default to tier 3.
    pub fn from_city(city: &str) -> Self {
        if TIER_1_CITIES.contains(&city) {
            CityTier::Tier1
        } else if TIER_2_CITIES.contains(&city) {
            CityTier::Tier2
        } else {
            CityTier::Tier3
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CityTier::Tier1 => "tier_1",
            CityTier::Tier2 => "tier_2",
            CityTier::Tier3 => "tier_3",
        }
    }

    pub fn all() -> [CityTier; 3] {
        [CityTier::Tier1, CityTier::Tier2, CityTier::Tier3]
    }
}

/// Predicted premium category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumCategory {
    Low,
    Medium,
    High,
}

impl PremiumCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PremiumCategory::Low => "Low",
            PremiumCategory::Medium => "Medium",
            PremiumCategory::High => "High",
        }
    }

    /// Parse a class label as spelled in the model artifact
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(PremiumCategory::Low),
            "Medium" => Some(PremiumCategory::Medium),
            "High" => Some(PremiumCategory::High),
            _ => None,
        }
    }
}

/// Validated profile submitted for premium prediction
///
/// Request-scoped; never persisted.
#[derive(Debug, Clone)]
pub struct PremiumProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_m: f64,
    pub smoker: bool,
    pub income_lpa: f64,
    pub occupation: Occupation,
    pub city: String,
}

/// Engineered feature vector passed to the classifier
///
/// BMI is deliberately the raw (unrounded) value; the model was trained on
/// raw BMI.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub bmi: f64,
    pub age_group: AgeGroup,
    pub lifestyle_risk: LifestyleRisk,
    pub city_tier: CityTier,
    pub income_lpa: f64,
    pub occupation: Occupation,
}

impl FeatureVector {
    /// Engineer the feature vector from a validated profile
    pub fn from_profile(profile: &PremiumProfile) -> Self {
        let bmi = calculate_bmi(profile.weight_kg, profile.height_m);
        Self {
            bmi,
            age_group: AgeGroup::from_age(profile.age),
            lifestyle_risk: LifestyleRisk::from_smoker_and_bmi(profile.smoker, bmi),
            city_tier: CityTier::from_city(&profile.city),
            income_lpa: profile.income_lpa,
            occupation: profile.occupation,
        }
    }
}
