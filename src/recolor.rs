//! Recolorable-asset detection and SVG color-token rewriting.
//!
//! DESIGN
//! ======
//! Recoloring is a textual substitution over the markup, not an SVG parse:
//! every `#` followed by three to six hex digits is replaced with the new
//! color. Markup with no `fill=` attribute at all first gets `fill="#333"` on
//! its first `<path`, so single-color icons that rely on the default black
//! fill still pick up the new color. References such as `url(#abc)` look
//! like color tokens and get rewritten too.
//!
//! Recoloring is idempotent only for colors of three to six hex digits. An
//! eight-digit color such as `#ff0000ff` is itself rewritten on a second pass
//! (its first six digits match), growing to `#ff0000ffff`.
//!
//! The recolored markup always ends up inline, as a percent-encoded data-URI,
//! whether it started remote or inline.

#[cfg(test)]
#[path = "recolor_test.rs"]
mod recolor_test;

use std::borrow::Cow;

use base64::{Engine as _, engine::general_purpose};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tracing::{debug, warn};

use crate::assets::FetchError;
use crate::consts::DEFAULT_FILL;
use crate::editor::Editor;
use crate::error::EditorError;
use crate::object::{ObjectKind, RenderObject};
use crate::surface::{ActiveSelection, RenderSurface};

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MIN_TOKEN_DIGITS: usize = 3;
const MAX_TOKEN_DIGITS: usize = 6;

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Whether the asset behind `source` is vector markup we can rewrite: a
/// remote `.svg`, or an inline data-URI with `inline_prefix`.
#[must_use]
pub fn is_recolorable(source: &str, inline_prefix: &str) -> bool {
    let remote = source.starts_with("http:") || source.starts_with("https:");
    (remote && source.ends_with(".svg")) || source.starts_with(inline_prefix)
}

/// Rewrite every color token in `markup` to `color`.
#[must_use]
pub fn recolor(markup: &str, color: &str) -> String {
    let based: Cow<'_, str> = if markup.contains("fill=") {
        Cow::Borrowed(markup)
    } else {
        Cow::Owned(markup.replacen("<path ", &format!("<path fill=\"{DEFAULT_FILL}\" "), 1))
    };
    replace_color_tokens(&based, color)
}

/// Replace each `#` + 3..=6 hex digits (longest match) with `color`.
fn replace_color_tokens(markup: &str, color: &str) -> String {
    let bytes = markup.as_bytes();
    let mut out = String::with_capacity(markup.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'#' {
            let digits = bytes[i + 1..]
                .iter()
                .take(MAX_TOKEN_DIGITS)
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            if digits >= MIN_TOKEN_DIGITS {
                out.push_str(&markup[copied..i]);
                out.push_str(color);
                i += 1 + digits;
                copied = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&markup[copied..]);
    out
}

/// Wrap markup as an inline data-URI.
#[must_use]
pub fn encode_inline(markup: &str, inline_prefix: &str) -> String {
    format!("{inline_prefix},{}", utf8_percent_encode(markup, URI_COMPONENT))
}

/// Extract the markup from an inline data-URI, percent-encoded or base64.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if `source` does not carry `inline_prefix`
/// or its payload is not valid UTF-8 in either encoding.
pub fn decode_inline(source: &str, inline_prefix: &str) -> Result<String, FetchError> {
    let rest = source
        .strip_prefix(inline_prefix)
        .ok_or_else(|| FetchError::Decode("not an inline asset".into()))?;

    if let Some(payload) = rest.strip_prefix(";base64,") {
        let bytes = general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        return String::from_utf8(bytes).map_err(|e| FetchError::Decode(e.to_string()));
    }

    let payload = rest
        .strip_prefix(',')
        .ok_or_else(|| FetchError::Decode("missing data-URI payload".into()))?;
    percent_decode_str(payload)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

// =============================================================================
// EDITOR
// =============================================================================

impl<S: RenderSurface> Editor<S> {
    /// Whether `obj` is an image whose asset can be recolored.
    #[must_use]
    pub fn check_image_can_be_colored(&self, obj: &RenderObject) -> bool {
        obj.kind == ObjectKind::Image
            && obj
                .asset
                .as_ref()
                .is_some_and(|asset| is_recolorable(&asset.source, &self.config.inline_prefix))
    }

    /// Recolor the selected image sticker in place.
    ///
    /// Remote SVGs are fetched and become inline; inline SVGs are decoded and
    /// re-encoded. The object only changes once the recolored asset has
    /// loaded. Empty colors, multi selections, non-images and
    /// non-recolorable images are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSelection`] if nothing is selected, or
    /// [`EditorError::AssetLoad`] if fetching, decoding or reloading fails.
    pub async fn change_shape_fill_color(&mut self, color: &str) -> Result<(), EditorError> {
        if color.is_empty() {
            return Ok(());
        }
        let id = match self.surface.active() {
            None => return Err(EditorError::NoSelection),
            Some(ActiveSelection::Multi(_)) => return Ok(()),
            Some(ActiveSelection::Object(id)) => id,
        };
        let Some(obj) = self.surface.object(&id) else {
            return Err(EditorError::NoSelection);
        };
        if !self.check_image_can_be_colored(obj) {
            debug!(%id, kind = obj.kind.as_str(), "selection is not a recolorable image");
            return Ok(());
        }
        let Some(source) = obj.asset.as_ref().map(|a| a.source.clone()) else {
            return Ok(());
        };

        let prefix = self.config.inline_prefix.clone();
        let markup = if source.starts_with(&prefix) {
            decode_inline(&source, &prefix).map_err(|e| EditorError::asset_load(&source, e))?
        } else {
            self.fetcher.fetch_text(&source).await.map_err(|e| {
                warn!(%source, error = %e, "sticker markup fetch failed");
                EditorError::asset_load(&source, e)
            })?
        };
        if markup.is_empty() {
            debug!(%source, "empty sticker markup; nothing to recolor");
            return Ok(());
        }

        let recolored = encode_inline(&recolor(&markup, color), &prefix);
        let natural = self.loader.load(&recolored).await.map_err(|e| {
            warn!(%id, error = %e, "recolored sticker failed to load");
            EditorError::asset_load(&source, e)
        })?;

        if let Some(asset) = self.surface.object_mut(&id).and_then(|o| o.asset.as_mut()) {
            asset.source = recolored;
            asset.width = natural.width;
            asset.height = natural.height;
        }
        self.surface.render_all();
        debug!(%id, %color, "sticker recolored");
        Ok(())
    }
}
