//! Editor configuration from built-in defaults and environment variables.

use crate::consts::{
    AUTO_SCALE_RATIO, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_TEXT, INLINE_SVG_PREFIX,
};
use crate::text::TextStyle;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for FetchTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_FETCH_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Data-URI prefix identifying inline SVG stickers.
    pub inline_prefix: String,
    /// Coverage threshold and target for auto-scaling inserted images.
    pub auto_scale_ratio: f64,
    /// Installed font families, in preference order.
    pub font_families: Vec<String>,
    /// Text inserted when the caller gives none.
    pub default_text: String,
    /// Style layered over the built-in text defaults when the caller gives none.
    pub text_style: TextStyle,
    pub timeouts: FetchTimeouts,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            inline_prefix: INLINE_SVG_PREFIX.to_string(),
            auto_scale_ratio: AUTO_SCALE_RATIO,
            font_families: Vec::new(),
            default_text: DEFAULT_TEXT.to_string(),
            text_style: TextStyle::default(),
            timeouts: FetchTimeouts::default(),
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `STICKER_INLINE_PREFIX`: data-URI prefix for inline SVG
    /// - `STICKER_AUTO_SCALE_RATIO`: in `(0, 1]`, default 0.6
    /// - `STICKER_FONT_FAMILIES`: comma-separated family names
    /// - `STICKER_DEFAULT_TEXT`: default text content
    /// - `STICKER_FETCH_TIMEOUT_SECS`: default 30
    /// - `STICKER_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to a value that
    /// does not parse or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let inline_prefix = match std::env::var("STICKER_INLINE_PREFIX") {
            Ok(raw) => parse_prefix(&raw)?,
            Err(_) => defaults.inline_prefix,
        };
        let auto_scale_ratio = match std::env::var("STICKER_AUTO_SCALE_RATIO") {
            Ok(raw) => parse_ratio(&raw)?,
            Err(_) => defaults.auto_scale_ratio,
        };
        let font_families = std::env::var("STICKER_FONT_FAMILIES")
            .map(|raw| parse_families(&raw))
            .unwrap_or(defaults.font_families);
        let default_text = std::env::var("STICKER_DEFAULT_TEXT").unwrap_or(defaults.default_text);
        let timeouts = FetchTimeouts {
            request_secs: env_parse_u64("STICKER_FETCH_TIMEOUT_SECS", defaults.timeouts.request_secs)?,
            connect_secs: env_parse_u64("STICKER_CONNECT_TIMEOUT_SECS", defaults.timeouts.connect_secs)?,
        };

        Ok(Self { inline_prefix, auto_scale_ratio, font_families, default_text, text_style: defaults.text_style, timeouts })
    }
}

fn env_parse_u64(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

/// An empty prefix would match every source, so it is rejected.
fn parse_prefix(raw: &str) -> Result<String, ConfigError> {
    let prefix = raw.trim().trim_end_matches(',');
    if prefix.trim().is_empty() {
        return Err(ConfigError::Invalid { var: "STICKER_INLINE_PREFIX", value: raw.to_string() });
    }
    Ok(prefix.to_string())
}

fn parse_ratio(raw: &str) -> Result<f64, ConfigError> {
    let invalid = || ConfigError::Invalid { var: "STICKER_AUTO_SCALE_RATIO", value: raw.to_string() };
    let ratio = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if ratio > 0.0 && ratio <= 1.0 { Ok(ratio) } else { Err(invalid()) }
}

fn parse_families(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
