//! Walk constants and validation functions.
//!
//! A walk is a named trail with a length, a description, and references
//! to one region and one difficulty tier. Referential integrity of those
//! two foreign keys belongs to the database; only field-level shape is
//! checked here.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a walk name.
pub const MAX_WALK_NAME_LENGTH: usize = 100;

/// Maximum length of a walk description.
pub const MAX_WALK_DESCRIPTION_LENGTH: usize = 1000;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a walk name: non-empty and within the length limit.
pub fn validate_walk_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.len() > MAX_WALK_NAME_LENGTH {
        return Err(format!(
            "name exceeds maximum length of {MAX_WALK_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a walk description: non-empty and within the length limit.
pub fn validate_walk_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("description must not be empty".to_string());
    }
    if description.len() > MAX_WALK_DESCRIPTION_LENGTH {
        return Err(format!(
            "description exceeds maximum length of {MAX_WALK_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a walk length: must be a finite, strictly positive number
/// of kilometers.
pub fn validate_length_in_km(length_in_km: f64) -> Result<(), String> {
    if !length_in_km.is_finite() {
        return Err("lengthInKm must be a finite number".to_string());
    }
    if length_in_km <= 0.0 {
        return Err("lengthInKm must be greater than zero".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_walk_name --------------------------------------------------

    #[test]
    fn valid_name_accepted() {
        assert!(validate_walk_name("Tongariro Alpine Crossing").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(validate_walk_name("").is_err());
        assert!(validate_walk_name("  ").is_err());
    }

    #[test]
    fn name_over_max_length_rejected() {
        let name = "a".repeat(MAX_WALK_NAME_LENGTH + 1);
        assert!(validate_walk_name(&name).is_err());
    }

    // -- validate_walk_description -------------------------------------------

    #[test]
    fn valid_description_accepted() {
        assert!(validate_walk_description("A scenic ridge walk.").is_ok());
    }

    #[test]
    fn empty_description_rejected() {
        let result = validate_walk_description("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must not be empty"));
    }

    #[test]
    fn description_at_max_length_accepted() {
        let description = "a".repeat(MAX_WALK_DESCRIPTION_LENGTH);
        assert!(validate_walk_description(&description).is_ok());
    }

    #[test]
    fn description_over_max_length_rejected() {
        let description = "a".repeat(MAX_WALK_DESCRIPTION_LENGTH + 1);
        assert!(validate_walk_description(&description).is_err());
    }

    // -- validate_length_in_km -----------------------------------------------

    #[test]
    fn positive_length_accepted() {
        assert!(validate_length_in_km(5.2).is_ok());
        assert!(validate_length_in_km(0.1).is_ok());
    }

    #[test]
    fn zero_length_rejected() {
        let result = validate_length_in_km(0.0);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("greater than zero"));
    }

    #[test]
    fn negative_length_rejected() {
        assert!(validate_length_in_km(-3.5).is_err());
    }

    #[test]
    fn non_finite_length_rejected() {
        assert!(validate_length_in_km(f64::NAN).is_err());
        assert!(validate_length_in_km(f64::INFINITY).is_err());
    }
}
