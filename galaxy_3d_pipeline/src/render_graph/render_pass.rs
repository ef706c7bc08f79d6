/// Raster pass node in a render graph.
///
/// One GPU render pass of the frame: the resources it reads through
/// compute views (inputs), the attachments it writes through raster
/// views (outputs), and the queues that draw into it.

use std::sync::Arc;
use crate::camera::CameraId;
use crate::scene::Scene;
use super::pipeline::{PassKey, QueueKey};
use super::types::{ComputeView, LightInfo, QueueHint, RasterView, SceneFlags};

#[derive(Debug, Clone)]
pub struct RasterPass {
    name: String,
    width: u32,
    height: u32,
    /// Layout tag selecting the pass's pipeline layout
    layout: String,
    /// Resources read by this pass, in binding order
    compute_views: Vec<(String, ComputeView)>,
    /// Attachments written by this pass, in binding order
    raster_views: Vec<(String, RasterView)>,
    queues: Vec<QueueKey>,
}

impl RasterPass {
    pub(crate) fn new(name: &str, width: u32, height: u32, layout: &str) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            layout: layout.to_string(),
            compute_views: Vec::new(),
            raster_views: Vec::new(),
            queues: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn compute_views(&self) -> &[(String, ComputeView)] {
        &self.compute_views
    }

    pub fn raster_views(&self) -> &[(String, RasterView)] {
        &self.raster_views
    }

    /// Raster view bound to resource `name`
    pub fn raster_view(&self, name: &str) -> Option<&RasterView> {
        self.raster_views.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn queues(&self) -> &[QueueKey] {
        &self.queues
    }

    /// Bind a compute view, replacing a previous binding of the same resource
    pub(crate) fn set_compute_view(&mut self, name: &str, view: ComputeView) {
        match self.compute_views.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = view,
            None => self.compute_views.push((name.to_string(), view)),
        }
    }

    /// Bind a raster view, replacing a previous binding of the same resource
    pub(crate) fn set_raster_view(&mut self, name: &str, view: RasterView) {
        match self.raster_views.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = view,
            None => self.raster_views.push((name.to_string(), view)),
        }
    }

    pub(crate) fn push_queue(&mut self, queue: QueueKey) {
        self.queues.push(queue);
    }
}

/// What a queue draws: one camera's scene, filtered by flags
#[derive(Debug, Clone)]
pub struct SceneBinding {
    pub camera: CameraId,
    pub scene: Option<Arc<Scene>>,
    pub light_info: LightInfo,
    pub flags: SceneFlags,
}

#[derive(Debug, Clone)]
pub struct RenderQueue {
    pass: PassKey,
    hint: QueueHint,
    scenes: Vec<SceneBinding>,
}

impl RenderQueue {
    pub(crate) fn new(pass: PassKey, hint: QueueHint) -> Self {
        Self {
            pass,
            hint,
            scenes: Vec::new(),
        }
    }

    /// Pass this queue belongs to
    pub fn pass(&self) -> PassKey {
        self.pass
    }

    pub fn hint(&self) -> QueueHint {
        self.hint
    }

    pub fn scenes(&self) -> &[SceneBinding] {
        &self.scenes
    }

    pub(crate) fn push_scene(&mut self, binding: SceneBinding) {
        self.scenes.push(binding);
    }
}
