//! Text insertion with layered default attributes.
//!
//! Attributes are composed from three layers, lowest precedence first: the
//! built-in defaults, the fixed box width, and the caller's style. A field the
//! caller leaves out never overrides a lower layer.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::{
    DEFAULT_FILL, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT, DEFAULT_TEXT_TOP, DEFAULT_TEXT_WIDTH,
    MAX_DEFAULT_FONT_NAME_LEN,
};
use crate::editor::Editor;
use crate::object::{ObjectId, ObjectKind, Position, RenderObject, Scale, Size, TextData, new_object_id};
use crate::style::{SemanticStyle, drop_shadow};
use crate::surface::RenderSurface;

/// Text attributes; `None` means "not set at this layer".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl TextStyle {
    /// `over` layered on top of `self`: every field set in `over` wins.
    #[must_use]
    pub fn layered(&self, over: &TextStyle) -> TextStyle {
        TextStyle {
            font_size: over.font_size.or(self.font_size),
            font_weight: over.font_weight.or(self.font_weight),
            font_family: over.font_family.clone().or_else(|| self.font_family.clone()),
            fill: over.fill.clone().or_else(|| self.fill.clone()),
            char_spacing: over.char_spacing.or(self.char_spacing),
            border_width: over.border_width.or(self.border_width),
            border_color: over.border_color.clone().or_else(|| self.border_color.clone()),
            shadow_color: over.shadow_color.clone().or_else(|| self.shadow_color.clone()),
            left: over.left.or(self.left),
            top: over.top.or(self.top),
            width: over.width.or(self.width),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextInsertOptions {
    /// Text content; the configured default text when `None`.
    pub text: Option<String>,
    /// Caller style; the configured text style when `None`.
    pub default_style: Option<TextStyle>,
    /// Center the text on the canvas using its measured size.
    pub autocenter: bool,
    /// Uniform scale; `None` or `0.0` leaves the text unscaled.
    pub scale: Option<f64>,
}

impl Default for TextInsertOptions {
    fn default() -> Self {
        Self { text: None, default_style: None, autocenter: true, scale: None }
    }
}

/// First family name shorter than the length cap, or empty.
#[must_use]
pub fn default_font_family(families: &[String]) -> String {
    families
        .iter()
        .find(|name| name.chars().count() < MAX_DEFAULT_FONT_NAME_LEN)
        .cloned()
        .unwrap_or_default()
}

fn builtin_style(families: &[String]) -> TextStyle {
    TextStyle {
        font_size: Some(DEFAULT_FONT_SIZE),
        font_weight: Some(DEFAULT_FONT_WEIGHT),
        font_family: Some(default_font_family(families)),
        fill: Some(DEFAULT_FILL.to_string()),
        char_spacing: Some(0.0),
        left: Some(0.0),
        top: Some(DEFAULT_TEXT_TOP),
        ..TextStyle::default()
    }
}

impl<S: RenderSurface> Editor<S> {
    /// Insert a text object, select it, and publish its fill through
    /// [`Editor::change_style`].
    pub fn insert_text(&mut self, options: TextInsertOptions) -> ObjectId {
        let caller = options.default_style.clone().unwrap_or_else(|| self.config.text_style.clone());
        let width_layer = TextStyle { width: Some(DEFAULT_TEXT_WIDTH), ..TextStyle::default() };
        let composed = builtin_style(&self.config.font_families).layered(&width_layer).layered(&caller);

        let data = TextData {
            content: options.text.clone().unwrap_or_else(|| self.config.default_text.clone()),
            font_size: composed.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            font_weight: composed.font_weight.unwrap_or(DEFAULT_FONT_WEIGHT),
            font_family: composed.font_family.clone().unwrap_or_default(),
            char_spacing: composed.char_spacing.unwrap_or_default(),
        };
        let measured = self.surface.measure_text(&data);
        let box_width = composed.width.unwrap_or(DEFAULT_TEXT_WIDTH).max(measured.width);

        let mut text = RenderObject::new(new_object_id(), ObjectKind::Text, Size::new(box_width, measured.height));
        text.position = Position::new(composed.left.unwrap_or_default(), composed.top.unwrap_or(DEFAULT_TEXT_TOP));
        text.style.fill.clone_from(&composed.fill);
        text.style.stroke.clone_from(&composed.border_color);
        text.style.stroke_width = composed.border_width.unwrap_or_default();
        text.style.shadow = composed.shadow_color.as_deref().map(drop_shadow);
        text.text = Some(data);

        if let Some(scale) = options.scale.filter(|s| *s != 0.0) {
            text.scale = Scale::uniform(scale);
        }

        // Centering follows the laid-out text, not the minimum box width.
        if options.autocenter {
            let canvas = self.surface.size();
            text.position = Position::new(
                ((canvas.width - measured.width) / 2.0).trunc(),
                ((canvas.height - measured.height) / 2.0).trunc(),
            );
        }

        let id = text.id.clone();
        self.surface.add_object(text);
        self.surface.bring_to_front(&id);
        self.surface.render_all();
        self.surface.set_active_object(&id);

        let fill = caller.fill.unwrap_or_else(|| DEFAULT_FILL.to_string());
        if let Err(e) = self.change_style(&SemanticStyle::fill(fill)) {
            warn!(%id, error = %e, "text fill not applied");
        }
        info!(%id, "text inserted");
        id
    }
}
