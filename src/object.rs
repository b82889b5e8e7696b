//! Render objects and the geometry/style value types they carry.
//!
//! A [`RenderObject`] is what the render surface stores in its object stack:
//! an image sticker, a text label, a plain shape, or a group of other objects.
//! Field names serialize in the renderer's camelCase vocabulary so objects can
//! be handed to the host UI (e.g. in `object:modified` events) unchanged.
//!
//! Groups keep their children in canvas coordinates; the group's own
//! position and size are the children's bounding box.

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique identifier for an object within one surface.
pub type ObjectId = String;

/// Generate a fresh object id.
#[must_use]
pub fn new_object_id() -> ObjectId {
    uuid::Uuid::new_v4().simple().to_string()
}

/// The kind of a render object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Raster or vector image sticker.
    Image,
    /// Editable text label.
    Text,
    /// Plain vector shape (rectangle and friends).
    Shape,
    /// Group of objects moved and styled as one.
    Group,
}

impl ObjectKind {
    /// Discriminator string used by the host UI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Shape => "shape",
            Self::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// Same factor on both axes.
    #[must_use]
    pub fn uniform(factor: f64) -> Self {
        Self { x: factor, y: factor }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Drop shadow attached to an object.
///
/// The default value has no color and zero offsets; applying it clears
/// whatever shadow the object had.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default)]
    pub blur: f64,
}

impl Shadow {
    /// `true` for the reset shadow produced when no color is given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

/// Renderer-native paint attributes of an object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    pub stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// Image payload: where the pixels come from and their natural size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// URI or data-URI of the image.
    pub source: String,
    pub width: f64,
    pub height: f64,
}

impl ImageAsset {
    #[must_use]
    pub fn new(source: impl Into<String>, natural: Size) -> Self {
        Self { source: source.into(), width: natural.width, height: natural.height }
    }

    #[must_use]
    pub fn natural_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Text payload of a text object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    pub content: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub font_family: String,
    pub char_spacing: f64,
}

/// An object in the render surface's stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub position: Position,
    pub scale: Scale,
    pub size: Size,
    pub style: ObjectStyle,
    pub selectable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<ImageAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderObject>,
    /// Attributes the core does not model, kept for the renderer.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
}

impl RenderObject {
    /// A selectable object at the origin with unit scale and no paint.
    #[must_use]
    pub fn new(id: impl Into<ObjectId>, kind: ObjectKind, size: Size) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            scale: Scale::default(),
            size,
            style: ObjectStyle::default(),
            selectable: true,
            asset: None,
            text: None,
            children: Vec::new(),
            props: Map::new(),
        }
    }

    /// An image object sized to the asset's natural dimensions.
    #[must_use]
    pub fn image(id: impl Into<ObjectId>, asset: ImageAsset) -> Self {
        let mut obj = Self::new(id, ObjectKind::Image, asset.natural_size());
        obj.asset = Some(asset);
        obj
    }

    /// A group wrapping `children`, positioned at their bounding box.
    #[must_use]
    pub fn group(id: impl Into<ObjectId>, children: Vec<RenderObject>) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for child in &children {
            let scaled = child.scaled_size();
            min_x = min_x.min(child.position.left);
            min_y = min_y.min(child.position.top);
            max_x = max_x.max(child.position.left + scaled.width);
            max_y = max_y.max(child.position.top + scaled.height);
        }

        let mut obj = Self::new(id, ObjectKind::Group, Size::default());
        if !children.is_empty() {
            obj.position = Position::new(min_x, min_y);
            obj.size = Size::new(max_x - min_x, max_y - min_y);
        }
        obj.children = children;
        obj
    }

    /// On-canvas size after scaling.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        Size::new(self.size.width * self.scale.x, self.size.height * self.scale.y)
    }

    /// Set a single attribute by its renderer name.
    ///
    /// Known keys are type-checked against the matching field; a value of the
    /// wrong type is rejected and `false` is returned. Unknown keys are kept
    /// in `props`.
    pub fn set(&mut self, key: &str, value: &Value) -> bool {
        match key {
            "left" => set_f64(&mut self.position.left, value),
            "top" => set_f64(&mut self.position.top, value),
            "scaleX" => set_f64(&mut self.scale.x, value),
            "scaleY" => set_f64(&mut self.scale.y, value),
            "width" => set_f64(&mut self.size.width, value),
            "height" => set_f64(&mut self.size.height, value),
            "strokeWidth" => set_f64(&mut self.style.stroke_width, value),
            "fill" => set_color(&mut self.style.fill, value),
            "stroke" => set_color(&mut self.style.stroke, value),
            "selectable" => match value.as_bool() {
                Some(flag) => {
                    self.selectable = flag;
                    true
                }
                None => false,
            },
            "shadow" => match serde_json::from_value::<Shadow>(value.clone()) {
                Ok(shadow) => {
                    self.style.shadow = (!shadow.is_empty()).then_some(shadow);
                    true
                }
                Err(_) if value.is_null() => {
                    self.style.shadow = None;
                    true
                }
                Err(_) => false,
            },
            "text" | "fontSize" | "fontWeight" | "fontFamily" | "charSpacing" => self.set_text_attr(key, value),
            _ => {
                self.props.insert(key.to_string(), value.clone());
                true
            }
        }
    }

    fn set_text_attr(&mut self, key: &str, value: &Value) -> bool {
        let Some(text) = self.text.as_mut() else {
            self.props.insert(key.to_string(), value.clone());
            return true;
        };
        match (key, value) {
            ("text", Value::String(s)) => text.content.clone_from(s),
            ("fontFamily", Value::String(s)) => text.font_family.clone_from(s),
            ("fontSize", v) if v.is_number() => return set_f64(&mut text.font_size, v),
            ("charSpacing", v) if v.is_number() => return set_f64(&mut text.char_spacing, v),
            ("fontWeight", v) => match v.as_u64().map(u16::try_from) {
                Some(Ok(weight)) => text.font_weight = weight,
                _ => return false,
            },
            _ => return false,
        }
        true
    }
}

fn set_f64(slot: &mut f64, value: &Value) -> bool {
    match value.as_f64() {
        Some(v) => {
            *slot = v;
            true
        }
        None => false,
    }
}

fn set_color(slot: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::String(s) => {
            *slot = Some(s.clone());
            true
        }
        Value::Null => {
            *slot = None;
            true
        }
        _ => false,
    }
}
