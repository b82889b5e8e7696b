//! Image insertion from a URL, background images, and plain shapes.
//!
//! DESIGN
//! ======
//! Inserting an image is the one flow that suspends: the natural size is
//! only known after the loader settles. Everything that can reject the call
//! (a text selection, a failed load) is checked before the surface is
//! touched. The selection is read once, before the load, and that is the
//! object replaced in place.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use tracing::{info, warn};

use crate::assets::FetchError;
use crate::consts::{
    DEFAULT_RECT_HEIGHT, DEFAULT_RECT_LEFT, DEFAULT_RECT_STROKE, DEFAULT_RECT_STROKE_WIDTH, DEFAULT_RECT_TOP,
    DEFAULT_RECT_WIDTH,
};
use crate::editor::Editor;
use crate::error::EditorError;
use crate::object::{ImageAsset, ObjectId, ObjectKind, Position, RenderObject, Scale, Size, new_object_id};
use crate::placement::{PlacementOptions, compute_insertion_rect};
use crate::style::{SemanticStyle, translate};
use crate::surface::{Background, RenderSurface};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageInsertOptions {
    pub url: String,
    /// `false` installs the image as the canvas background.
    pub selectable: bool,
    /// Requested scale; exactly `1.0` lets the editor pick one.
    pub scale: f64,
    pub position: Option<Position>,
    /// Select the new image after insertion.
    pub auto_focus: bool,
}

impl ImageInsertOptions {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), selectable: true, scale: 1.0, position: None, auto_focus: true }
    }
}

/// Scale for a newly loaded image.
///
/// Only a requested scale of exactly `1.0` is adjusted: images covering more
/// than `ratio` of the container on either axis shrink to fit within `ratio`
/// of it, and a replaced object's non-zero horizontal scale wins over that.
#[must_use]
pub fn effective_scale(requested: f64, natural: Size, container: Size, ratio: f64, prior_scale_x: Option<f64>) -> f64 {
    #[allow(clippy::float_cmp)]
    let keep_requested = requested != 1.0;
    if keep_requested {
        return requested;
    }

    let mut zoom = requested;
    if natural.width > container.width * ratio || natural.height > container.height * ratio {
        zoom = (container.width / natural.width).min(container.height / natural.height) * ratio;
    }
    if let Some(prior) = prior_scale_x.filter(|s| *s != 0.0) {
        zoom = prior;
    }
    zoom
}

/// Image object stretched over the whole container, not selectable.
fn background_image(url: &str, natural: Size, container: Size) -> RenderObject {
    let mut img = RenderObject::image(new_object_id(), ImageAsset::new(url, natural));
    img.selectable = false;
    img.scale = Scale { x: container.width / natural.width, y: container.height / natural.height };
    img
}

impl<S: RenderSurface> Editor<S> {
    async fn load_natural_size(&self, url: &str) -> Result<Size, EditorError> {
        let natural = self.loader.load(url).await.map_err(|e| {
            warn!(%url, error = %e, "image load failed");
            EditorError::asset_load(url, e)
        })?;
        if natural.width <= 0.0 || natural.height <= 0.0 {
            warn!(%url, width = natural.width, height = natural.height, "image has no area");
            return Err(EditorError::asset_load(url, FetchError::Decode("image has no area".into())));
        }
        Ok(natural)
    }

    /// Load an image and insert it, replacing the current selection in place.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::IncompatibleSelectionType`] if a text object is
    /// selected, or [`EditorError::AssetLoad`] if the image fails to load. In
    /// both cases the canvas is unchanged.
    pub async fn insert_from_url(&mut self, options: ImageInsertOptions) -> Result<ObjectId, EditorError> {
        let prior = self
            .get_selected()
            .and_then(|sel| sel.single().map(|obj| (obj.kind, obj.scale.x)));
        if let Some((ObjectKind::Text, _)) = prior {
            return Err(EditorError::IncompatibleSelectionType { selected: ObjectKind::Text.as_str() });
        }

        let natural = self.load_natural_size(&options.url).await?;

        let container = self.canvas_rect();
        let prior_scale_x = prior.filter(|(kind, _)| *kind != ObjectKind::Group).map(|(_, sx)| sx);
        let zoom = effective_scale(options.scale, natural, container, self.config.auto_scale_ratio, prior_scale_x);

        let placement = PlacementOptions {
            selectable: options.selectable,
            autocenter: true,
            position: options.position,
            scale: zoom,
            remove_current_selected: true,
        };
        let rect = compute_insertion_rect(&mut self.surface, natural, container, &placement);

        let id = if options.selectable {
            let mut img = RenderObject::image(new_object_id(), ImageAsset::new(&options.url, natural));
            img.position = rect.position();
            #[allow(clippy::float_cmp)]
            let rescale = zoom != 1.0 && zoom != 0.0;
            if rescale {
                img.scale = Scale::uniform(zoom);
            }
            let id = img.id.clone();
            self.surface.add_object(img);
            if options.auto_focus {
                self.surface.set_active_object(&id);
            }
            id
        } else {
            let img = background_image(&options.url, natural, container);
            let id = img.id.clone();
            self.surface.set_background(Some(Background::Image(Box::new(img))));
            id
        };

        self.surface.render_all();
        info!(%id, url = %options.url, scale = zoom, selectable = options.selectable, "image inserted");
        Ok(id)
    }

    /// Load an image and install it as the stretched canvas background.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::AssetLoad`] if the image fails to load; the
    /// current background is kept.
    pub async fn change_canvas_background_image(&mut self, url: &str) -> Result<(), EditorError> {
        let natural = self.load_natural_size(url).await?;
        let img = background_image(url, natural, self.surface.size());
        self.surface.set_background(Some(Background::Image(Box::new(img))));
        self.surface.render_all();
        info!(%url, "background image changed");
        Ok(())
    }

    /// Insert a plain rectangle with the editor's default geometry and
    /// stroke, overridden by `style`, and select it.
    pub fn insert_rect(&mut self, style: &SemanticStyle) -> ObjectId {
        let mut rect = RenderObject::new(
            new_object_id(),
            ObjectKind::Shape,
            Size::new(DEFAULT_RECT_WIDTH, DEFAULT_RECT_HEIGHT),
        );
        rect.position = Position::new(DEFAULT_RECT_LEFT, DEFAULT_RECT_TOP);
        rect.style.stroke = Some(DEFAULT_RECT_STROKE.to_string());
        rect.style.stroke_width = DEFAULT_RECT_STROKE_WIDTH;
        translate(style).apply_to(&mut rect);

        let id = rect.id.clone();
        self.surface.add_object(rect);
        self.surface.set_active_object(&id);
        self.surface.render_all();
        info!(%id, "rect inserted");
        id
    }
}
