//! Human-readable record identifiers.
//!
//! Slugs are the public route key for categories and referral codes
//! (`/api/categories/{slug}`), so every persisted slug must satisfy
//! [`validate_slug`] no matter whether it was derived or typed by hand.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::shared::validation::SLUG_REGEX;

lazy_static! {
    /// Anything that is not an ASCII letter/digit, underscore, whitespace or hyphen
    static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^a-z0-9_\s-]").unwrap();

    /// Runs of separators that collapse into one hyphen
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_-]+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidSlug {
    #[error("slug is required")]
    Empty,

    #[error("slug must be lowercase letters or digits separated by single hyphens")]
    Malformed,
}

/// Derive a slug from a display name.
///
/// Lowercases, drops every character outside `[a-z0-9_]`/whitespace/`-`,
/// collapses separator runs into a single `-` and trims hyphens at both ends.
/// Total: a name without ASCII alphanumerics yields an empty string.
pub fn derive_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let cleaned = DISALLOWED_CHARS.replace_all(&lowered, "");
    let hyphenated = SEPARATOR_RUN.replace_all(&cleaned, "-");
    hyphenated.trim_matches('-').to_string()
}

pub fn validate_slug(slug: &str) -> Result<(), InvalidSlug> {
    if slug.is_empty() {
        return Err(InvalidSlug::Empty);
    }
    if !SLUG_REGEX.is_match(slug) {
        return Err(InvalidSlug::Malformed);
    }
    Ok(())
}

/// Slug to persist on create: the explicit one when given, otherwise derived from `name`
pub fn resolve_slug(explicit: Option<&str>, name: &str) -> Result<String, InvalidSlug> {
    let slug = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slug.to_string(),
        None => derive_slug(name),
    };
    validate_slug(&slug)?;
    Ok(slug)
}
