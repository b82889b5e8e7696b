//! Shared numeric and string constants.

// ── Placement ───────────────────────────────────────────────────

/// Fraction of the container an inserted image may cover before it is
/// scaled down, and the fraction it is scaled down to.
pub const AUTO_SCALE_RATIO: f64 = 0.6;

// ── Style ───────────────────────────────────────────────────────

/// Horizontal offset of the drop shadow built from `shadowColor`.
pub const SHADOW_OFFSET_X: f64 = 3.0;

/// Vertical offset of the drop shadow built from `shadowColor`.
pub const SHADOW_OFFSET_Y: f64 = 3.0;

/// Blur radius of the drop shadow built from `shadowColor`.
pub const SHADOW_BLUR: f64 = 0.0;

/// Fill injected into vector markup that carries no `fill=` attribute, and
/// the default text fill.
pub const DEFAULT_FILL: &str = "#333";

// ── Recolor ─────────────────────────────────────────────────────

/// Data-URI prefix used for inline SVG stickers.
pub const INLINE_SVG_PREFIX: &str = "data:image/svg+xml;charset=utf-8";

// ── Text ────────────────────────────────────────────────────────

/// Text placed when the caller does not supply any.
pub const DEFAULT_TEXT: &str = "DuelPeak";

pub const DEFAULT_FONT_SIZE: f64 = 60.0;

pub const DEFAULT_FONT_WEIGHT: u16 = 400;

/// Box width layered over the built-in text defaults.
pub const DEFAULT_TEXT_WIDTH: f64 = 150.0;

/// Default top offset of a text object that is not centered.
pub const DEFAULT_TEXT_TOP: f64 = 10.0;

/// Font family names at or above this many characters are skipped when
/// picking the default family.
pub const MAX_DEFAULT_FONT_NAME_LEN: usize = 15;

/// Average glyph advance as a fraction of the font size, used by the
/// in-memory canvas to measure text.
pub const GLYPH_ADVANCE_RATIO: f64 = 0.6;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.16;

// ── Shapes ──────────────────────────────────────────────────────

pub const DEFAULT_RECT_LEFT: f64 = 100.0;
pub const DEFAULT_RECT_TOP: f64 = 100.0;
pub const DEFAULT_RECT_WIDTH: f64 = 400.0;
pub const DEFAULT_RECT_HEIGHT: f64 = 300.0;
pub const DEFAULT_RECT_STROKE: &str = "pink";
pub const DEFAULT_RECT_STROKE_WIDTH: f64 = 3.0;

// ── Assets ──────────────────────────────────────────────────────

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
