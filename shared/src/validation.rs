//! Input validation functions
//!
//! Field-level validators shared by both services. Validators return a
//! message describing the violation so the boundary can surface it
//! directly in the error response.

/// Validate a patient identifier
pub fn validate_patient_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("Patient id cannot be empty".to_string());
    }
    if id.len() > 64 {
        return Err("Patient id too long (max 64 characters)".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age == 0 {
        return Err("Age must be positive".to_string());
    }
    if age > 119 {
        return Err("Age must be less than 120".to_string());
    }
    Ok(())
}

/// Validate height value (in meters)
pub fn validate_height_m(height_m: f64) -> Result<(), String> {
    if height_m.is_nan() || height_m.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_m <= 0.0 {
        return Err("Height must be positive".to_string());
    }
    if height_m > 3.0 {
        return Err("Height must be at most 3 meters".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate annual income (lakhs per annum)
pub fn validate_income_lpa(income_lpa: f64) -> Result<(), String> {
    if income_lpa.is_nan() || income_lpa.is_infinite() {
        return Err("Income must be a valid number".to_string());
    }
    if income_lpa < 0.0 {
        return Err("Income cannot be negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_id() {
        assert!(validate_patient_id("P001").is_ok());
        assert!(validate_patient_id("").is_err());
        assert!(validate_patient_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(119).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(120).is_err());
    }

    #[test]
    fn test_height_bounds() {
        assert!(validate_height_m(1.75).is_ok());
        assert!(validate_height_m(0.0).is_err());
        assert!(validate_height_m(-1.0).is_err());
        assert!(validate_height_m(3.5).is_err());
        assert!(validate_height_m(f64::NAN).is_err());
        assert!(validate_height_m(f64::INFINITY).is_err());
    }

    #[test]
    fn test_weight_bounds() {
        assert!(validate_weight_kg(60.0).is_ok());
        assert!(validate_weight_kg(0.0).is_err());
        assert!(validate_weight_kg(500.1).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
    }

    #[test]
    fn test_income_bounds() {
        assert!(validate_income_lpa(0.0).is_ok());
        assert!(validate_income_lpa(20.5).is_ok());
        assert!(validate_income_lpa(-0.01).is_err());
        assert!(validate_income_lpa(f64::NAN).is_err());
    }
}
