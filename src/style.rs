//! Semantic style → renderer attribute translation.
//!
//! The style panel speaks in `borderWidth`/`borderColor`/`shadowColor`; the
//! renderer wants `strokeWidth`/`stroke`/`shadow`. Translation runs one way
//! only. Keys without a mapping pass through untouched because the renderer
//! already understands them (`fill`, `opacity`, ...).

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{SHADOW_BLUR, SHADOW_OFFSET_X, SHADOW_OFFSET_Y};
use crate::object::{RenderObject, Shadow};

/// Style as expressed by the editor's style panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    /// Keys the renderer understands as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SemanticStyle {
    /// A style that only sets the fill color.
    #[must_use]
    pub fn fill(color: impl Into<String>) -> Self {
        Self { fill: Some(color.into()), ..Self::default() }
    }
}

/// Style in the renderer's own attribute names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Always present; the empty shadow resets any shadow on the target.
    pub shadow: Shadow,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Drop shadow in the fixed editor style, varying only by color.
#[must_use]
pub fn drop_shadow(color: &str) -> Shadow {
    Shadow { color: Some(color.to_string()), offset_x: SHADOW_OFFSET_X, offset_y: SHADOW_OFFSET_Y, blur: SHADOW_BLUR }
}

/// Translate a semantic style into renderer attributes.
#[must_use]
pub fn translate(style: &SemanticStyle) -> RendererStyle {
    RendererStyle {
        fill: style.fill.clone(),
        stroke_width: style.border_width,
        stroke: style.border_color.clone(),
        shadow: style.shadow_color.as_deref().map(drop_shadow).unwrap_or_default(),
        extra: style.extra.clone(),
    }
}

impl RendererStyle {
    /// Write these attributes onto `obj`. Absent fields leave the object's
    /// value alone; the shadow is always written.
    pub fn apply_to(&self, obj: &mut RenderObject) {
        if let Some(fill) = &self.fill {
            obj.style.fill = Some(fill.clone());
        }
        if let Some(width) = self.stroke_width {
            obj.style.stroke_width = width;
        }
        if let Some(stroke) = &self.stroke {
            obj.style.stroke = Some(stroke.clone());
        }
        obj.style.shadow = (!self.shadow.is_empty()).then(|| self.shadow.clone());
        for (key, value) in &self.extra {
            if !obj.set(key, value) {
                tracing::debug!(id = %obj.id, %key, "style attribute rejected");
            }
        }
    }
}
