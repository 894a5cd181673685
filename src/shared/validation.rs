use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;
use validator::ValidationError;

use crate::shared::slug::{validate_slug, InvalidSlug};

lazy_static! {
    /// Canonical slug format: lowercase alphanumeric groups joined by single hyphens
    /// - Valid: "amazon-prime", "streaming", "ok-slug-123"
    /// - Invalid: "-slug", "slug-", "slug--name", "Slug", "slug_name", ""
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// True for absolute `http`/`https` URLs with a host
pub fn is_http_url(value: &str) -> bool {
    Url::parse(value.trim())
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

/// `validator` hook for URL fields (url, logo_url)
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    if is_http_url(value) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("must be an absolute http(s) URL".into()))
    }
}

/// `validator` hook for optional URL fields; blank means "clear"
pub fn validate_optional_http_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        validate_http_url(value)
    }
}

/// `validator` hook for explicitly supplied slugs; surrounding whitespace is ignored
pub fn validate_slug_field(value: &str) -> Result<(), ValidationError> {
    validate_slug(value.trim()).map_err(|e| {
        let code = match e {
            InvalidSlug::Empty => "required",
            InvalidSlug::Malformed => "slug",
        };
        ValidationError::new(code).with_message(e.to_string().into())
    })
}

/// `validator` hook rejecting whitespace-only text
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("required").with_message("must not be blank".into()))
    } else {
        Ok(())
    }
}

/// Trim optional text; blank input clears the field
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("amazon-prime"));
        assert!(SLUG_REGEX.is_match("streaming"));
        assert!(SLUG_REGEX.is_match("ok-slug-123"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-slug")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("slug-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("slug--name")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Slug")); // uppercase
        assert!(!SLUG_REGEX.is_match("slug_name")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("slug name")); // space
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://www.amazon.com/prime"));
        assert!(is_http_url("http://localhost:9000/bucket/logo.png"));
        assert!(is_http_url("  https://example.com  "));
        assert!(!is_http_url("ftp://example.com/file"));
        assert!(!is_http_url("mailto:someone@example.com"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn test_validate_optional_http_url() {
        assert!(validate_optional_http_url("").is_ok());
        assert!(validate_optional_http_url("https://cdn.example.com/logo.png").is_ok());
        assert!(validate_optional_http_url("logo.png").is_err());
    }

    #[test]
    fn test_validate_slug_field_codes() {
        assert!(validate_slug_field("ok-slug").is_ok());
        assert!(validate_slug_field(" ok-slug ").is_ok());
        assert_eq!(validate_slug_field("").unwrap_err().code, "required");
        assert_eq!(validate_slug_field("Bad Slug").unwrap_err().code, "slug");
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some("  Music  ".into())), Some("Music".to_string()));
        assert_eq!(optional_text(Some("   ".into())), None);
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Streaming").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
