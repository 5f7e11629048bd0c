pub mod error;
pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod user;

use crate::errors::{ApiError, ApiResult};

// column widths from the schema
pub const MAX_EMAIL: usize = 120;
pub const MAX_NAME: usize = 20;
pub const MAX_GENDER: usize = 6;
pub const MAX_CLIMATE: usize = 10;

/// Absent, null and blank all count as missing.
pub(crate) fn required_str(field: &str, value: Option<String>, max: usize) -> ApiResult<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::missing(field))?;
    if value.chars().count() > max {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializers::people::PeopleCreateReq;

    #[test]
    fn blank_is_missing() {
        let err = required_str("name", Some("   ".into()), MAX_NAME).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn enforces_column_width() {
        let req = PeopleCreateReq {
            name: Some("Luke".into()),
            gender: Some("droid-ish".into()),
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "gender must be at most 6 characters");
    }

    #[test]
    fn trims_values() {
        assert_eq!(required_str("name", Some(" Leia ".into()), MAX_NAME).unwrap(), "Leia");
    }
}
