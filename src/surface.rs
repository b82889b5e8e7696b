//! The render-surface seam and its in-memory implementation.
//!
//! DESIGN
//! ======
//! The real surface (object storage, hit-testing, paint loop) lives in the
//! host. The core only needs the capability set in [`RenderSurface`]; every
//! editor operation goes through it. [`Canvas`] implements the same contract
//! in memory so the whole core can run headless and under test.
//!
//! The active selection is stored as ids, never as object copies, and is
//! resolved against the stack on every read. Removing an object drops it from
//! the active selection, so a selection can never point outside the stack.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{GLYPH_ADVANCE_RATIO, LINE_HEIGHT_RATIO};
use crate::object::{ObjectId, RenderObject, Size, TextData};

// =============================================================================
// TYPES
// =============================================================================

/// Ids of the active selection as stored by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveSelection {
    /// One object is active.
    Object(ObjectId),
    /// Several objects are active together.
    Multi(Vec<ObjectId>),
}

/// Two-stop linear gradient spanning the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearGradient {
    pub start_color: String,
    pub end_color: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Canvas background. One slot, so image and color exclude each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Image(Box<RenderObject>),
    Color(String),
    Gradient(LinearGradient),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Capability set the editor core consumes from the render surface.
pub trait RenderSurface {
    /// Logical canvas size.
    fn size(&self) -> Size;

    /// Set the logical canvas size.
    fn set_size(&mut self, size: Size);

    /// Device pixel ratio of the container.
    fn dpr(&self) -> f64;

    /// Push an object on top of the stack.
    fn add_object(&mut self, obj: RenderObject);

    /// Remove an object from the stack, returning it if present.
    fn remove_object(&mut self, id: &str) -> Option<RenderObject>;

    /// All objects, back to front.
    fn objects(&self) -> &[RenderObject];

    fn object(&self, id: &str) -> Option<&RenderObject> {
        self.objects().iter().find(|o| o.id == id)
    }

    fn object_mut(&mut self, id: &str) -> Option<&mut RenderObject>;

    /// Make a single object active. Returns `false` if it is not in the stack.
    fn set_active_object(&mut self, id: &str) -> bool;

    /// Make several objects active together. Ids not in the stack are dropped;
    /// returns `false` if none remain.
    fn set_active_selection(&mut self, ids: Vec<ObjectId>) -> bool;

    fn discard_active_object(&mut self);

    /// The active selection, restricted to ids still in the stack.
    fn active(&self) -> Option<ActiveSelection>;

    /// Request a repaint.
    fn render_all(&mut self);

    /// Move one step toward the front.
    fn bring_forward(&mut self, id: &str);

    /// Move one step toward the back.
    fn send_backwards(&mut self, id: &str);

    fn bring_to_front(&mut self, id: &str);

    fn send_to_back(&mut self, id: &str);

    fn background(&self) -> Option<&Background>;

    fn set_background(&mut self, background: Option<Background>);

    /// Laid-out size of a text run.
    fn measure_text(&self, text: &TextData) -> Size;

    /// Remove every object, the selection and the background.
    fn clear(&mut self);
}

// =============================================================================
// CANVAS
// =============================================================================

/// In-memory render surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    dpr: f64,
    objects: Vec<RenderObject>,
    active: Option<ActiveSelection>,
    background: Option<Background>,
    renders: u64,
}

impl Canvas {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_dpr(width, height, 1.0)
    }

    #[must_use]
    pub fn with_dpr(width: f64, height: f64, dpr: f64) -> Self {
        Self { size: Size::new(width, height), dpr, objects: Vec::new(), active: None, background: None, renders: 0 }
    }

    /// Number of repaints requested so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    fn move_to(&mut self, id: &str, target: impl FnOnce(usize, usize) -> usize) {
        let Some(from) = self.index_of(id) else {
            return;
        };
        let last = self.objects.len() - 1;
        let to = target(from, last).min(last);
        if to != from {
            let obj = self.objects.remove(from);
            self.objects.insert(to, obj);
        }
    }
}

impl RenderSurface for Canvas {
    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn dpr(&self) -> f64 {
        self.dpr
    }

    fn add_object(&mut self, obj: RenderObject) {
        if let Some(idx) = self.index_of(&obj.id) {
            self.objects.remove(idx);
        }
        self.objects.push(obj);
    }

    fn remove_object(&mut self, id: &str) -> Option<RenderObject> {
        let idx = self.index_of(id)?;
        let deselect = match &mut self.active {
            Some(ActiveSelection::Object(active)) => active == id,
            Some(ActiveSelection::Multi(ids)) => {
                ids.retain(|a| a != id);
                ids.is_empty()
            }
            None => false,
        };
        if deselect {
            self.active = None;
        }
        Some(self.objects.remove(idx))
    }

    fn objects(&self) -> &[RenderObject] {
        &self.objects
    }

    fn object_mut(&mut self, id: &str) -> Option<&mut RenderObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    fn set_active_object(&mut self, id: &str) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.active = Some(ActiveSelection::Object(id.to_string()));
        true
    }

    fn set_active_selection(&mut self, mut ids: Vec<ObjectId>) -> bool {
        let mut seen = HashSet::new();
        ids.retain(|id| self.index_of(id).is_some() && seen.insert(id.clone()));
        if ids.is_empty() {
            return false;
        }
        self.active = Some(ActiveSelection::Multi(ids));
        true
    }

    fn discard_active_object(&mut self) {
        self.active = None;
    }

    fn active(&self) -> Option<ActiveSelection> {
        match self.active.as_ref()? {
            ActiveSelection::Object(id) => {
                self.index_of(id).map(|_| ActiveSelection::Object(id.clone()))
            }
            ActiveSelection::Multi(ids) => {
                let live: Vec<ObjectId> = ids.iter().filter(|id| self.index_of(id).is_some()).cloned().collect();
                (!live.is_empty()).then_some(ActiveSelection::Multi(live))
            }
        }
    }

    fn render_all(&mut self) {
        self.renders += 1;
    }

    fn bring_forward(&mut self, id: &str) {
        self.move_to(id, |from, _| from + 1);
    }

    fn send_backwards(&mut self, id: &str) {
        self.move_to(id, |from, _| from.saturating_sub(1));
    }

    fn bring_to_front(&mut self, id: &str) {
        self.move_to(id, |_, last| last);
    }

    fn send_to_back(&mut self, id: &str) {
        self.move_to(id, |_, _| 0);
    }

    fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    fn set_background(&mut self, background: Option<Background>) {
        self.background = background;
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&self, text: &TextData) -> Size {
        let lines: Vec<&str> = text.content.split('\n').collect();
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let spacing = text.char_spacing / 1000.0 * text.font_size;
        let width = longest as f64 * (text.font_size * GLYPH_ADVANCE_RATIO + spacing);
        let height = lines.len() as f64 * text.font_size * LINE_HEIGHT_RATIO;
        Size::new(width, height)
    }

    fn clear(&mut self) {
        self.objects.clear();
        self.active = None;
        self.background = None;
    }
}
