//! Stacking-order moves for the active object.

#[cfg(test)]
#[path = "zorder_test.rs"]
mod zorder_test;

use std::str::FromStr;

use tracing::debug;

use crate::editor::Editor;
use crate::error::UnknownToken;
use crate::surface::RenderSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZDirection {
    StepForward,
    StepBackward,
    ToFront,
    ToBack,
}

/// Parses the layer panel's tokens: `+1`, `-1`, `top`, `bottom`.
impl FromStr for ZDirection {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+1" => Ok(Self::StepForward),
            "-1" => Ok(Self::StepBackward),
            "top" => Ok(Self::ToFront),
            "bottom" => Ok(Self::ToBack),
            other => Err(UnknownToken { kind: "z-order", token: other.to_string() }),
        }
    }
}

impl<S: RenderSurface> Editor<S> {
    /// Move the selected objects along the stack. No-op without a selection.
    pub fn move_along(&mut self, direction: ZDirection) {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return;
        }

        // Visit members so they keep their relative stacking after the move.
        let mut ordered: Vec<(usize, String)> = ids
            .into_iter()
            .filter_map(|id| self.surface.objects().iter().position(|o| o.id == id).map(|idx| (idx, id)))
            .collect();
        ordered.sort_by_key(|(idx, _)| *idx);
        if matches!(direction, ZDirection::StepForward | ZDirection::ToBack) {
            ordered.reverse();
        }
        for (_, id) in &ordered {
            match direction {
                ZDirection::StepForward => self.surface.bring_forward(id),
                ZDirection::StepBackward => self.surface.send_backwards(id),
                ZDirection::ToFront => self.surface.bring_to_front(id),
                ZDirection::ToBack => self.surface.send_to_back(id),
            }
        }
        self.surface.render_all();
        debug!(?direction, count = ordered.len(), "z-order changed");
    }
}
