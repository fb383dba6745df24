//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use crate::middleware::security_headers::PLACEHOLDER_IMAGE_HOST;

/// Brand colours of the placeholder image (background, text).
const PLACEHOLDER_COLORS: (&str, &str) = ("8B5CF6", "FFFFFF");

/// Build a placeholder image URL showing `text`.
#[must_use]
pub fn placeholder_url(text: &str, width: u32, height: u32) -> String {
    let (background, foreground) = PLACEHOLDER_COLORS;
    format!(
        "{PLACEHOLDER_IMAGE_HOST}/{width}x{height}/{background}/{foreground}?text={}",
        urlencoding::encode(text)
    )
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Fallback for a product card image (400x400, product name).
///
/// Usage in templates: `data-fallback="{{ product.name|card_fallback }}"`
#[askama::filter_fn]
pub fn card_fallback(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(placeholder_url(&name.to_string(), 400, 400))
}

/// Fallback for the main image on the product page (600x600).
#[askama::filter_fn]
pub fn hero_fallback(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(placeholder_url(&name.to_string(), 600, 600))
}

/// Fallback for a gallery thumbnail, labelled with its position.
///
/// Usage in templates: `{{ loop.index|thumb_fallback }}`
#[askama::filter_fn]
pub fn thumb_fallback(position: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(placeholder_url(&position.to_string(), 100, 100))
}

/// Fallback for a cart line image (150x150, product name).
#[askama::filter_fn]
pub fn line_fallback(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(placeholder_url(&name.to_string(), 150, 150))
}

/// Fallback for the checkout summary, showing only the first letter.
#[askama::filter_fn]
pub fn initial_fallback(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let name = name.to_string();
    let initial: String = name.chars().take(1).collect();
    Ok(placeholder_url(&initial, 60, 60))
}
