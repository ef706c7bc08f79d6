/// Camera: passive data container read by the pipeline builders.
///
/// The caller (game engine) owns cameras and sets every field. The
/// builders never mutate a camera; they read its viewport, window,
/// clear state and scene once per frame.

use std::sync::Arc;
use glam::Vec4;
use crate::render_graph::ClearFlags;
use crate::scene::Scene;

/// Engine-side identity of a camera
///
/// Chosen by the caller (entity id, slot index...). The pipeline maps
/// it to a small stable index through `CameraIdAllocator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub u64);

/// Axis-aligned rectangle
///
/// Normalized ([0, 1]) for camera viewports, pixels for render areas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Window surface a camera presents to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderWindow {
    handle: u64,
    width: u32,
    height: u32,
}

impl RenderWindow {
    pub fn new(handle: u64, width: u32, height: u32) -> Self {
        Self { handle, width, height }
    }

    /// External surface handle (swapchain, canvas...)
    pub fn handle(&self) -> u64 {
        self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    id: CameraId,
    viewport: Rect,
    window: RenderWindow,
    clear_flags: ClearFlags,
    clear_color: Vec4,
    clear_depth: f32,
    clear_stencil: u32,
    scene: Option<Arc<Scene>>,
}

impl Camera {
    /// Create a camera covering the whole window, clearing everything
    pub fn new(id: CameraId, window: RenderWindow) -> Self {
        Self {
            id,
            viewport: Rect::new(0.0, 0.0, 1.0, 1.0),
            window,
            clear_flags: ClearFlags::ALL,
            clear_color: Vec4::new(0.2, 0.2, 0.2, 1.0),
            clear_depth: 1.0,
            clear_stencil: 0,
            scene: None,
        }
    }

    // ===== GETTERS =====

    pub fn id(&self) -> CameraId {
        self.id
    }

    /// Normalized viewport
    pub fn viewport(&self) -> &Rect {
        &self.viewport
    }

    pub fn window(&self) -> &RenderWindow {
        &self.window
    }

    pub fn clear_flags(&self) -> ClearFlags {
        self.clear_flags
    }

    pub fn clear_color(&self) -> Vec4 {
        self.clear_color
    }

    pub fn clear_depth(&self) -> f32 {
        self.clear_depth
    }

    pub fn clear_stencil(&self) -> u32 {
        self.clear_stencil
    }

    /// Scene rendered by this camera. `None` disables the camera.
    pub fn scene(&self) -> Option<&Arc<Scene>> {
        self.scene.as_ref()
    }

    // ===== SETTERS =====

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn set_window(&mut self, window: RenderWindow) {
        self.window = window;
    }

    pub fn set_clear_flags(&mut self, clear_flags: ClearFlags) {
        self.clear_flags = clear_flags;
    }

    pub fn set_clear_color(&mut self, color: Vec4) {
        self.clear_color = color;
    }

    pub fn set_clear_depth(&mut self, depth: f32) {
        self.clear_depth = depth;
    }

    pub fn set_clear_stencil(&mut self, stencil: u32) {
        self.clear_stencil = stencil;
    }

    pub fn set_scene(&mut self, scene: Option<Arc<Scene>>) {
        self.scene = scene;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
