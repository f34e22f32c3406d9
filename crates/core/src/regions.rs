//! Region constants and validation functions.
//!
//! Regions are the geographic areas walks belong to. Write payloads are
//! validated here before anything touches the database.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a region code (short identifiers like "WLG").
pub const MAX_REGION_CODE_LENGTH: usize = 12;

/// Maximum length of a region display name.
pub const MAX_REGION_NAME_LENGTH: usize = 100;

/// Maximum length of an image URL on any resource.
pub const MAX_IMAGE_URL_LENGTH: usize = 2048;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a region code: non-empty and within the length limit.
pub fn validate_region_code(code: &str) -> Result<(), String> {
    if code.trim().is_empty() {
        return Err("code must not be empty".to_string());
    }
    if code.len() > MAX_REGION_CODE_LENGTH {
        return Err(format!(
            "code exceeds maximum length of {MAX_REGION_CODE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a region display name: non-empty and within the length limit.
pub fn validate_region_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.len() > MAX_REGION_NAME_LENGTH {
        return Err(format!(
            "name exceeds maximum length of {MAX_REGION_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional image URL: within the length limit when present.
///
/// Shared by regions (`regionImageUrl`) and walks (`walkImageUrl`).
pub fn validate_image_url(url: Option<&str>) -> Result<(), String> {
    if let Some(url) = url {
        if url.len() > MAX_IMAGE_URL_LENGTH {
            return Err(format!(
                "image URL exceeds maximum length of {MAX_IMAGE_URL_LENGTH} characters"
            ));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_region_code ------------------------------------------------

    #[test]
    fn valid_code_accepted() {
        assert!(validate_region_code("WLG").is_ok());
        assert!(validate_region_code("AKL").is_ok());
    }

    #[test]
    fn empty_code_rejected() {
        let result = validate_region_code("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must not be empty"));
    }

    #[test]
    fn whitespace_code_rejected() {
        assert!(validate_region_code("   ").is_err());
    }

    #[test]
    fn code_at_max_length_accepted() {
        let code = "A".repeat(MAX_REGION_CODE_LENGTH);
        assert!(validate_region_code(&code).is_ok());
    }

    #[test]
    fn code_over_max_length_rejected() {
        let code = "A".repeat(MAX_REGION_CODE_LENGTH + 1);
        let result = validate_region_code(&code);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }

    // -- validate_region_name ------------------------------------------------

    #[test]
    fn valid_name_accepted() {
        assert!(validate_region_name("Wellington").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let result = validate_region_name("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must not be empty"));
    }

    #[test]
    fn name_over_max_length_rejected() {
        let name = "a".repeat(MAX_REGION_NAME_LENGTH + 1);
        assert!(validate_region_name(&name).is_err());
    }

    // -- validate_image_url --------------------------------------------------

    #[test]
    fn absent_image_url_accepted() {
        assert!(validate_image_url(None).is_ok());
    }

    #[test]
    fn short_image_url_accepted() {
        assert!(validate_image_url(Some("https://example.com/img.png")).is_ok());
    }

    #[test]
    fn oversized_image_url_rejected() {
        let url = "a".repeat(MAX_IMAGE_URL_LENGTH + 1);
        let result = validate_image_url(Some(&url));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }
}
