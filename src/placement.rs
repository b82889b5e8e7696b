//! Insertion geometry for new images.
//!
//! DESIGN
//! ======
//! The rect is decided in a fixed order: start at the origin with the asset's
//! natural size, center it in the container when asked to, let an explicit
//! position win over centering, and finally let replace-in-place win over
//! both by inheriting the position of the object being replaced.
//!
//! A scale of exactly `0.0` skips the multiply when centering, so the rect is
//! centered at its unscaled size rather than collapsed to a point.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use tracing::info;

use crate::object::{ObjectKind, Position, Size};
use crate::surface::{ActiveSelection, RenderSurface};

/// Where and how large a new object is inserted. Call-local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl InsertionRect {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    /// Whether the object will be selectable (background images are not).
    pub selectable: bool,
    /// Center the object in the container when no position is given.
    pub autocenter: bool,
    /// Explicit top-left corner; overrides centering.
    pub position: Option<Position>,
    /// Scale the object will be shown at.
    pub scale: f64,
    /// Remove the current selection and take over its position.
    pub remove_current_selected: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self { selectable: false, autocenter: true, position: None, scale: 1.0, remove_current_selected: true }
    }
}

/// Rect from the asset size, centering and explicit position alone.
#[must_use]
pub fn centered_rect(asset: Size, container: Size, options: &PlacementOptions) -> InsertionRect {
    let mut rect = InsertionRect { left: 0.0, top: 0.0, width: asset.width, height: asset.height };

    match options.position {
        Some(pos) => {
            rect.left = pos.left;
            rect.top = pos.top;
        }
        None if options.autocenter && options.selectable => {
            let (mut w, mut h) = (asset.width, asset.height);
            if options.scale != 0.0 {
                w *= options.scale;
                h *= options.scale;
            }
            rect.left = (container.width - w) / 2.0;
            rect.top = (container.height - h) / 2.0;
        }
        None => {}
    }

    rect
}

/// Compute the insertion rect for a new image.
///
/// With `remove_current_selected`, a selected single non-group object is
/// removed from `surface` and the new rect takes over its `left`/`top`.
pub fn compute_insertion_rect<S: RenderSurface + ?Sized>(
    surface: &mut S,
    asset: Size,
    container: Size,
    options: &PlacementOptions,
) -> InsertionRect {
    let mut rect = centered_rect(asset, container, options);

    if options.remove_current_selected {
        if let Some(ActiveSelection::Object(id)) = surface.active() {
            let replaceable = surface.object(&id).is_some_and(|o| o.kind != ObjectKind::Group);
            if replaceable {
                if let Some(prior) = surface.remove_object(&id) {
                    rect.left = prior.position.left;
                    rect.top = prior.position.top;
                    info!(replaced = %prior.id, "replacing selection in place");
                }
            }
        }
    }

    rect
}
