//! Object-manipulation core for the sticker editor.
//!
//! The editor sits on top of a 2D scene-graph render surface. This crate owns
//! the decisions that surface cannot make on its own: where a new sticker
//! lands and how big it is, which object mutations apply to, how the panel's
//! style vocabulary maps onto renderer attributes, and how vector stickers are
//! recolored in place. The host UI calls [`editor::Editor`] methods and listens
//! on the [`events::EventBus`] for modifications.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | The [`editor::Editor`] context handle, canvas sizing and backgrounds |
//! | [`surface`] | The [`surface::RenderSurface`] seam and the in-memory [`surface::Canvas`] |
//! | [`object`] | Render objects, geometry value types and object styles |
//! | [`selection`] | Single-slot selection state machine gating every mutation |
//! | [`placement`] | Insertion geometry: centering, explicit position, replace-in-place |
//! | [`image`] | Image insertion from a URL and background images |
//! | [`text`] | Text insertion with layered default attributes |
//! | [`recolor`] | Recolorable-asset detection and SVG color-token rewriting |
//! | [`style`] | Semantic style → renderer attribute translation |
//! | [`zorder`] | Stacking-order moves for the active object |
//! | [`events`] | `object:modified` publication |
//! | [`assets`] | Asset loader / text fetcher seams and the HTTP fetcher |
//! | [`config`] | Editor configuration from defaults and environment |
//! | [`error`] | Error types and stable error codes |
//! | [`consts`] | Shared numeric and string constants |

pub mod assets;
pub mod config;
pub mod consts;
pub mod editor;
pub mod error;
pub mod events;
pub mod image;
pub mod object;
pub mod placement;
pub mod recolor;
pub mod selection;
pub mod style;
pub mod surface;
pub mod text;
pub mod zorder;

#[cfg(test)]
#[path = "helpers_test.rs"]
pub(crate) mod test_helpers;

pub use editor::Editor;
pub use error::EditorError;
pub use object::{ObjectId, ObjectKind, RenderObject};
pub use surface::{Canvas, RenderSurface};
