//! Selection controller: the single-slot selection state machine.
//!
//! DESIGN
//! ======
//! The selection is never cached here. Every operation asks the surface for
//! the active ids and resolves them against the object stack, so a removed
//! object can never be mutated through a stale handle. All mutating
//! operations are gated on that lookup: style changes report
//! [`EditorError::NoSelection`], the rest are silent no-ops when nothing is
//! selected.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, info};

use crate::editor::Editor;
use crate::error::{EditorError, UnknownToken};
use crate::object::{ObjectId, ObjectKind, Position, RenderObject, new_object_id};
use crate::style::{SemanticStyle, translate};
use crate::surface::{ActiveSelection, RenderSurface};

/// Discriminator reported for a multi-object selection.
pub const MULTI_SELECTION_TYPE: &str = "activeSelection";

// =============================================================================
// TYPES
// =============================================================================

/// The live selection, borrowed from the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Selected<'a> {
    Object(&'a RenderObject),
    Multi(Vec<&'a RenderObject>),
}

impl Selected<'_> {
    /// Discriminator string: the object kind, or `"activeSelection"`.
    #[must_use]
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Object(obj) => obj.kind.as_str(),
            Self::Multi(_) => MULTI_SELECTION_TYPE,
        }
    }

    /// The selected object when exactly one object (not a multi selection)
    /// is active.
    #[must_use]
    pub fn single(&self) -> Option<&RenderObject> {
        match self {
            Self::Object(obj) => Some(obj),
            Self::Multi(_) => None,
        }
    }

    #[must_use]
    pub fn ids(&self) -> Vec<ObjectId> {
        match self {
            Self::Object(obj) => vec![obj.id.clone()],
            Self::Multi(objs) => objs.iter().map(|o| o.id.clone()).collect(),
        }
    }
}

/// Where to snap the active object on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Top,
    Right,
    Bottom,
    Left,
    /// Center on both axes.
    Center,
    /// Center horizontally, keep `top`.
    XCenter,
    /// Center vertically, keep `left`.
    YCenter,
}

impl FromStr for Align {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "x-center" => Ok(Self::XCenter),
            "y-center" => Ok(Self::YCenter),
            other => Err(UnknownToken { kind: "alignment", token: other.to_string() }),
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

impl<S: RenderSurface> Editor<S> {
    /// The current selection, if any.
    #[must_use]
    pub fn get_selected(&self) -> Option<Selected<'_>> {
        match self.surface.active()? {
            ActiveSelection::Object(id) => self.surface.object(&id).map(Selected::Object),
            ActiveSelection::Multi(ids) => {
                let objs: Vec<&RenderObject> = ids.iter().filter_map(|id| self.surface.object(id)).collect();
                (!objs.is_empty()).then_some(Selected::Multi(objs))
            }
        }
    }

    /// Discriminator of `selected`, or of the current selection when `None`.
    /// Empty when nothing is selected.
    #[must_use]
    pub fn get_selected_type(&self, selected: Option<&Selected<'_>>) -> &'static str {
        match selected {
            Some(sel) => sel.kind_str(),
            None => self.get_selected().map_or("", |sel| sel.kind_str()),
        }
    }

    /// Ids of every selected object, empty when nothing is selected.
    pub(crate) fn selected_ids(&self) -> Vec<ObjectId> {
        match self.surface.active() {
            Some(ActiveSelection::Object(id)) => vec![id],
            Some(ActiveSelection::Multi(ids)) => ids,
            None => Vec::new(),
        }
    }

    /// Apply a semantic style to the selection and publish `object:modified`
    /// for each changed object.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSelection`] if nothing is selected.
    pub fn change_style(&mut self, style: &SemanticStyle) -> Result<(), EditorError> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return Err(EditorError::NoSelection);
        }

        let attrs = translate(style);
        for id in &ids {
            if let Some(obj) = self.surface.object_mut(id) {
                attrs.apply_to(obj);
            }
        }
        self.surface.render_all();

        for id in &ids {
            if let Some(obj) = self.surface.object(id) {
                self.publish_modified(obj);
            }
        }
        debug!(count = ids.len(), "style changed");
        Ok(())
    }

    /// Recolor the selection: a fill change for text and plain shapes, an
    /// in-place SVG rewrite for image stickers.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSelection`] if nothing is selected, or
    /// [`EditorError::AssetLoad`] if the sticker markup cannot be loaded.
    pub async fn change_text_or_shape_color(&mut self, color: &str) -> Result<(), EditorError> {
        let kind = self.get_selected_type(None);
        if kind == ObjectKind::Text.as_str() || kind == ObjectKind::Shape.as_str() {
            self.change_style(&SemanticStyle::fill(color))
        } else {
            self.change_shape_fill_color(color).await
        }
    }

    /// Make the object with `id` active. Returns `false` (and changes
    /// nothing) if no such object exists.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        if !self.surface.set_active_object(id) {
            debug!(%id, "select_by_id: no such object");
            return false;
        }
        self.surface.render_all();
        true
    }

    /// Clear the selection.
    pub fn unselect_all(&mut self) {
        self.surface.discard_active_object();
        self.surface.render_all();
    }

    /// Remove the selected objects from the canvas, returning them.
    pub fn remove_selected(&mut self) -> Vec<RenderObject> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return Vec::new();
        }

        self.surface.discard_active_object();
        let removed: Vec<RenderObject> = ids.iter().filter_map(|id| self.surface.remove_object(id)).collect();
        self.surface.render_all();
        info!(count = removed.len(), "removed selected objects");
        removed
    }

    /// Turn a multi-object selection into one group with a fresh id and
    /// select it. Returns the group id, or `None` if the selection is not a
    /// multi selection of at least two objects.
    pub fn group(&mut self) -> Option<ObjectId> {
        let Some(ActiveSelection::Multi(ids)) = self.surface.active() else {
            return None;
        };
        if ids.len() < 2 {
            return None;
        }

        let ordered: Vec<ObjectId> = self
            .surface
            .objects()
            .iter()
            .filter(|o| ids.contains(&o.id))
            .map(|o| o.id.clone())
            .collect();

        self.surface.discard_active_object();
        let children: Vec<RenderObject> = ordered.iter().filter_map(|id| self.surface.remove_object(id)).collect();
        let group = RenderObject::group(new_object_id(), children);
        let group_id = group.id.clone();

        self.surface.add_object(group);
        self.surface.set_active_object(&group_id);
        self.surface.render_all();
        info!(%group_id, members = ordered.len(), "grouped selection");
        Some(group_id)
    }

    /// Split the active group back into its members and select them
    /// together. Returns `false` if the active object is not a group.
    pub fn ungroup(&mut self) -> bool {
        let Some(ActiveSelection::Object(id)) = self.surface.active() else {
            return false;
        };
        if !self.surface.object(&id).is_some_and(|o| o.kind == ObjectKind::Group) {
            return false;
        }
        let Some(group) = self.surface.remove_object(&id) else {
            return false;
        };

        let member_ids: Vec<ObjectId> = group.children.iter().map(|c| c.id.clone()).collect();
        for child in group.children {
            self.surface.add_object(child);
        }
        self.surface.set_active_selection(member_ids);
        self.surface.render_all();
        info!(group_id = %id, "ungrouped");
        true
    }

    /// Set whether the selected objects can be picked on the canvas.
    pub fn set_selectable_flag(&mut self, selectable: bool) {
        for id in self.selected_ids() {
            if let Some(obj) = self.surface.object_mut(&id) {
                obj.selectable = selectable;
            }
        }
    }

    /// Set one attribute on the selected objects by its renderer name.
    pub fn update_property(&mut self, key: &str, value: &Value) {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return;
        }
        for id in &ids {
            if let Some(obj) = self.surface.object_mut(id) {
                if !obj.set(key, value) {
                    debug!(%id, %key, "property rejected");
                }
            }
        }
        self.surface.render_all();
    }

    /// Snap the selected objects to a canvas edge or center line, using their
    /// scaled size.
    pub fn align(&mut self, align: Align) {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return;
        }

        let canvas = self.surface.size();
        for id in &ids {
            let Some(obj) = self.surface.object_mut(id) else {
                continue;
            };
            let scaled = obj.scaled_size();
            let centered = Position::new((canvas.width - scaled.width) / 2.0, (canvas.height - scaled.height) / 2.0);
            match align {
                Align::Top => obj.position.top = 0.0,
                Align::Right => obj.position.left = canvas.width - scaled.width,
                Align::Bottom => obj.position.top = canvas.height - scaled.height,
                Align::Left => obj.position.left = 0.0,
                Align::Center => obj.position = centered,
                Align::XCenter => obj.position.left = centered.left,
                Align::YCenter => obj.position.top = centered.top,
            }
        }
        self.surface.render_all();
    }
}
