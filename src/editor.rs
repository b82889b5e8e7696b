//! The editor context handle.
//!
//! DESIGN
//! ======
//! [`Editor`] is constructed once per canvas and owns everything the core
//! operations touch: the render surface, the event bus, the asset loader and
//! text fetcher, and the configuration. Operations are methods on the handle,
//! grouped by concern across modules (`selection`, `zorder`, `image`, `text`,
//! `recolor`). Async flows borrow the handle mutably for their whole duration,
//! so nothing else can mutate the surface while a load is pending.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use crate::assets::{AssetLoader, TextFetcher};
use crate::config::EditorConfig;
use crate::events::{EditorEvent, EventBus};
use crate::object::{RenderObject, Size};
use crate::surface::{Background, LinearGradient, RenderSurface};

pub struct Editor<S: RenderSurface> {
    pub(crate) surface: S,
    pub(crate) bus: EventBus,
    pub(crate) loader: Arc<dyn AssetLoader>,
    pub(crate) fetcher: Arc<dyn TextFetcher>,
    pub(crate) config: EditorConfig,
}

impl<S: RenderSurface> Editor<S> {
    #[must_use]
    pub fn new(surface: S, loader: Arc<dyn AssetLoader>, fetcher: Arc<dyn TextFetcher>) -> Self {
        Self::with_config(surface, loader, fetcher, EditorConfig::default())
    }

    #[must_use]
    pub fn with_config(
        surface: S,
        loader: Arc<dyn AssetLoader>,
        fetcher: Arc<dyn TextFetcher>,
        config: EditorConfig,
    ) -> Self {
        Self { surface, bus: EventBus::default(), loader, fetcher, config }
    }

    // --- Accessors ---

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    /// Listen for `object:modified` events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.bus.subscribe()
    }

    pub(crate) fn publish_modified(&self, obj: &RenderObject) {
        self.bus.publish(EditorEvent::ObjectModified(obj.clone()));
    }

    // --- Canvas size ---

    /// Resize the canvas from physical pixel dimensions. The logical size is
    /// the physical size divided by the device pixel ratio, truncated.
    pub fn resize(&mut self, width: f64, height: f64) {
        let dpr = self.surface.dpr();
        let size = Size::new((width / dpr).trunc(), (height / dpr).trunc());
        debug!(width = size.width, height = size.height, dpr, "canvas resized");
        self.surface.set_size(size);
    }

    /// Logical canvas size in whole pixels; the container for placement.
    #[must_use]
    pub fn canvas_rect(&self) -> Size {
        let size = self.surface.size();
        Size::new(size.width.floor(), size.height.floor())
    }

    // --- Background ---

    /// Paint the background with a flat color, replacing any image or gradient.
    pub fn set_background_color(&mut self, color: &str) {
        self.surface.set_background(Some(Background::Color(color.to_string())));
        self.surface.render_all();
    }

    /// Paint the background with a left-to-right gradient along the bottom edge.
    pub fn set_background_gradient(&mut self, start_color: &str, end_color: &str) {
        let size = self.surface.size();
        let gradient = LinearGradient {
            start_color: start_color.to_string(),
            end_color: end_color.to_string(),
            x1: 0.0,
            y1: size.height,
            x2: size.width,
            y2: size.height,
        };
        self.surface.set_background(Some(Background::Gradient(gradient)));
        self.surface.render_all();
    }

    /// Drop the background image and color.
    pub fn remove_background(&mut self) {
        self.surface.set_background(None);
        self.surface.render_all();
    }

    /// Remove every object and the background.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.surface.render_all();
    }
}
