use crate::utils::error::{MuralError, Result};
use url::Url;

/// 設定層級的驗證 (表單欄位驗證在 core::schema)
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MuralError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MuralError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MuralError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(MuralError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MuralError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_route(field_name: &str, route: &str) -> Result<()> {
    validate_non_empty_string(field_name, route)?;
    if !route.starts_with('/') {
        return Err(MuralError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: route.to_string(),
            reason: "Route must start with '/'".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("backend.endpoint", "https://example.com/api/projects").is_ok());
        assert!(validate_url("backend.endpoint", "http://localhost:3000").is_ok());
        assert!(validate_url("backend.endpoint", "").is_err());
        assert!(validate_url("backend.endpoint", "invalid-url").is_err());
        assert!(validate_url("backend.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("backend.timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("backend.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_route() {
        assert!(validate_route("navigation.gallery_route", "/").is_ok());
        assert!(validate_route("navigation.gallery_route", "/mural").is_ok());
        assert!(validate_route("navigation.gallery_route", "mural").is_err());
        assert!(validate_route("navigation.gallery_route", "   ").is_err());
    }
}
