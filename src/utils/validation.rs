use crate::utils::error::{RenderError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> RenderError {
    RenderError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RenderError::MissingConfig {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Filter categories end up as `data-category` attributes on the filter
/// buttons, one button each.
pub fn validate_categories(field_name: &str, categories: &[String]) -> Result<()> {
    if categories.is_empty() {
        return Err(invalid(
            field_name,
            "[]",
            "At least one filter category is required",
        ));
    }

    let mut seen = HashSet::new();
    for category in categories {
        validate_non_empty_string(field_name, category)?;
        if !seen.insert(category.as_str()) {
            return Err(invalid(field_name, category, "Duplicate filter category"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_validate_url() {
        assert_ok!(validate_url("source.endpoint", "https://example.com/data.json"));
        assert_ok!(validate_url("source.endpoint", "http://localhost:8080"));
        assert!(validate_url("source.endpoint", "").is_err());
        assert!(validate_url("source.endpoint", "data.json").is_err());
        assert_err!(validate_url("source.endpoint", "ftp://example.com"));
    }

    #[test]
    fn test_validate_required() {
        assert_ok!(validate_required("output.path", "./dist"));
        assert!(matches!(
            validate_required("output.path", "  "),
            Err(RenderError::MissingConfig { ref field }) if field == "output.path"
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("render.animation_delay_ms", 500u64, 0, 60_000).is_ok());
        assert!(validate_range("render.animation_delay_ms", 90_000u64, 0, 60_000).is_err());
    }

    #[test]
    fn test_validate_categories() {
        let ok = vec!["all".to_string(), "web".to_string()];
        assert!(validate_categories("render.filter_categories", &ok).is_ok());

        let dup = vec!["web".to_string(), "web".to_string()];
        assert!(validate_categories("render.filter_categories", &dup).is_err());

        let blank = vec!["all".to_string(), "  ".to_string()];
        assert!(validate_categories("render.filter_categories", &blank).is_err());

        assert!(validate_categories("render.filter_categories", &[]).is_err());
    }
}
