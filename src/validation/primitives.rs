// src/validation/primitives.rs

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use url::Url;
use uuid::Uuid;

/// Hard ceiling for any price, independent of the search UI window.
pub const PRICE_CEILING: f64 = 100_000.0;
/// Lower edge of the default price window shown by the search UI.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
/// Upper edge of the default price window shown by the search UI.
pub const DEFAULT_MAX_PRICE: f64 = 10_000.0;

pub const THAI_PHONE_MESSAGE: &str = "Invalid Thai phone number format";
pub const DATE_FORMAT_MESSAGE: &str = "Date must be in YYYY-MM-DD format";

static THAI_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{9}$").expect("thai phone pattern"));
static DATE_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern"));
static CANONICAL_UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern")
});

/// A closed set of string literals.
pub trait Choice: Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive match against the literal set.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.as_str() == raw)
    }
}

pub fn choice_error<C: Choice>(received: &str) -> String {
    let expected: Vec<&str> = C::ALL.iter().map(|c| c.as_str()).collect();
    format!(
        "Invalid value '{received}'. Expected one of: {}",
        expected.join(", ")
    )
}

/// Strips spaces and hyphens, then requires ten digits with a leading 0.
/// Returns the bare digit string.
pub fn thai_phone(raw: &str) -> Result<String, String> {
    let digits: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if THAI_PHONE.is_match(&digits) {
        Ok(digits)
    } else {
        Err(THAI_PHONE_MESSAGE.to_string())
    }
}

/// `YYYY-MM-DD` with no time part. Only the shape is checked unless
/// `strict` is set, so `2026-13-45` passes in lenient mode.
pub fn date_string(raw: &str, strict: bool) -> Result<String, String> {
    if !DATE_STRING.is_match(raw) {
        return Err(DATE_FORMAT_MESSAGE.to_string());
    }
    if strict && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_err() {
        return Err(format!("'{raw}' is not a valid calendar date"));
    }
    Ok(raw.to_string())
}

pub fn price_bound(value: f64) -> Result<f64, String> {
    if value < 0.0 {
        return Err("Price must be at least 0".to_string());
    }
    if value > PRICE_CEILING {
        return Err(format!("Price must not exceed {PRICE_CEILING}"));
    }
    Ok(value)
}

/// Canonical 8-4-4-4-12 hex only; braced, URN and simple forms are refused.
pub fn uuid(raw: &str) -> Result<Uuid, String> {
    if !CANONICAL_UUID.is_match(raw) {
        return Err("Invalid UUID format".to_string());
    }
    Uuid::parse_str(raw).map_err(|_| "Invalid UUID format".to_string())
}

pub fn is_http_url(raw: &str) -> bool {
    matches!(Url::parse(raw), Ok(url) if url.scheme() == "http" || url.scheme() == "https")
}

pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validates a collection of photo URLs, ensuring each is an http(s) URL of
/// reasonable length.
pub fn validate_photo_urls(urls: &[String]) -> Result<(), validator::ValidationError> {
    for url in urls {
        if url.len() > 500 {
            return Err(validator::ValidationError::new("url_too_long")
                .with_message("Photo URL must be at most 500 characters".into()));
        }
        if !is_http_url(url) {
            return Err(validator::ValidationError::new("invalid_url")
                .with_message(format!("Invalid photo URL: {url}").into()));
        }
    }
    Ok(())
}

/// Validates a single website URL.
pub fn validate_website(url: &str) -> Result<(), validator::ValidationError> {
    if !is_http_url(url) {
        return Err(validator::ValidationError::new("invalid_url")
            .with_message("Invalid website URL".into()));
    }
    Ok(())
}
