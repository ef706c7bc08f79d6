/// Render graph: the in-memory frame graph built by pipeline builders.
///
/// Holds two tables with different lifetimes:
///
/// - resources, declared by name, kept across frames
/// - raster passes and their queues, rebuilt every frame
///   (`begin_frame()` drops them)
///
/// The graph validates the contract of `Pipeline`: unique pass names,
/// views over declared resources only, and keys from the current frame.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::camera::{Camera, RenderWindow};
use crate::error::Result;
use crate::{engine_bail, engine_debug, engine_err, engine_trace};
use crate::scene::PipelineSceneData;
use super::pipeline::{PassKey, Pipeline, QueueKey};
use super::render_pass::{RasterPass, RenderQueue, SceneBinding};
use super::render_target::{ResourceDesc, ResourceKind};
use super::types::{
    ComputeView, Format, LightInfo, QueueHint, RasterView, ResourceResidency, SceneFlags,
};

const SOURCE: &str = "galaxy3d::RenderGraph";

pub struct RenderGraph {
    resources: FxHashMap<String, ResourceDesc>,
    /// Resource names in declaration order
    resource_order: Vec<String>,
    passes: SlotMap<PassKey, RasterPass>,
    /// Pass keys in declaration order (execution order)
    pass_order: Vec<PassKey>,
    pass_names: FxHashMap<String, PassKey>,
    queues: SlotMap<QueueKey, RenderQueue>,
    scene_data: PipelineSceneData,
}

impl RenderGraph {
    /// Create an empty graph
    pub fn new(scene_data: PipelineSceneData) -> Self {
        Self {
            resources: FxHashMap::default(),
            resource_order: Vec::new(),
            passes: SlotMap::with_key(),
            pass_order: Vec::new(),
            pass_names: FxHashMap::default(),
            queues: SlotMap::with_key(),
            scene_data,
        }
    }

    /// Drop all passes and queues of the previous frame
    ///
    /// Resource declarations are kept. Pass and queue keys handed out
    /// before this call become invalid.
    pub fn begin_frame(&mut self) {
        self.passes.clear();
        self.pass_order.clear();
        self.pass_names.clear();
        self.queues.clear();
    }

    // ===== RESOURCES =====

    pub fn resource(&self, name: &str) -> Option<&ResourceDesc> {
        self.resources.get(name)
    }

    /// Declared resources, in declaration order
    pub fn resources(&self) -> impl Iterator<Item = &ResourceDesc> {
        self.resource_order.iter().filter_map(|name| self.resources.get(name))
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Forget a resource declaration (e.g. before re-declaring it at a new size)
    ///
    /// Returns the removed declaration, or None if not found.
    pub fn remove_resource(&mut self, name: &str) -> Option<ResourceDesc> {
        let removed = self.resources.remove(name)?;
        self.resource_order.retain(|n| n != name);
        engine_debug!(SOURCE, "Resource '{}' removed", name);
        Some(removed)
    }

    fn declare(&mut self, desc: ResourceDesc) {
        if self.resources.contains_key(desc.name()) {
            engine_trace!(SOURCE, "Resource '{}' already declared", desc.name());
            return;
        }
        engine_debug!(SOURCE, "Resource '{}' declared ({:?} {:?} {}x{}, {:?})",
            desc.name(), desc.kind(), desc.format(), desc.width(), desc.height(), desc.residency());
        self.resource_order.push(desc.name().to_string());
        self.resources.insert(desc.name().to_string(), desc);
    }

    // ===== PASSES AND QUEUES =====

    pub fn pass(&self, key: PassKey) -> Option<&RasterPass> {
        self.passes.get(key)
    }

    pub fn pass_by_name(&self, name: &str) -> Option<&RasterPass> {
        self.pass_names.get(name).and_then(|&key| self.passes.get(key))
    }

    /// Passes of the current frame, in declaration order
    pub fn passes(&self) -> impl Iterator<Item = &RasterPass> {
        self.pass_order.iter().filter_map(|&key| self.passes.get(key))
    }

    pub fn pass_count(&self) -> usize {
        self.pass_order.len()
    }

    pub fn queue(&self, key: QueueKey) -> Option<&RenderQueue> {
        self.queues.get(key)
    }

    /// Queues of a pass, in declaration order
    pub fn queues_of<'a>(&'a self, pass: &'a RasterPass) -> impl Iterator<Item = &'a RenderQueue> + 'a {
        pass.queues().iter().filter_map(|&key| self.queues.get(key))
    }

    pub fn pipeline_scene_data_mut(&mut self) -> &mut PipelineSceneData {
        &mut self.scene_data
    }

    fn pass_mut(&mut self, key: PassKey) -> Result<&mut RasterPass> {
        match self.passes.get_mut(key) {
            Some(pass) => Ok(pass),
            None => Err(engine_err!(SOURCE, InvalidHandle,
                "Raster pass {:?} does not belong to the current frame", key)),
        }
    }
}

impl Default for RenderGraph {
    fn default() -> Self {
        Self::new(PipelineSceneData::default())
    }
}

impl Pipeline for RenderGraph {
    fn contains_resource(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    fn add_render_texture(
        &mut self,
        name: &str,
        format: Format,
        width: u32,
        height: u32,
        window: &RenderWindow,
    ) -> Result<()> {
        self.declare(ResourceDesc::new(
            name,
            ResourceKind::RenderTexture,
            format,
            width,
            height,
            ResourceResidency::External,
            Some(window.handle()),
        ));
        Ok(())
    }

    fn add_render_target(
        &mut self,
        name: &str,
        format: Format,
        width: u32,
        height: u32,
        residency: ResourceResidency,
    ) -> Result<()> {
        self.declare(ResourceDesc::new(
            name, ResourceKind::RenderTarget, format, width, height, residency, None,
        ));
        Ok(())
    }

    fn add_depth_stencil(
        &mut self,
        name: &str,
        format: Format,
        width: u32,
        height: u32,
        residency: ResourceResidency,
    ) -> Result<()> {
        self.declare(ResourceDesc::new(
            name, ResourceKind::DepthStencil, format, width, height, residency, None,
        ));
        Ok(())
    }

    fn add_raster_pass(&mut self, width: u32, height: u32, layout: &str, name: &str) -> Result<PassKey> {
        if self.pass_names.contains_key(name) {
            engine_bail!(SOURCE, DuplicateName,
                "Raster pass '{}' already exists in this frame", name);
        }

        let key = self.passes.insert(RasterPass::new(name, width, height, layout));
        self.pass_order.push(key);
        self.pass_names.insert(name.to_string(), key);
        engine_trace!(SOURCE, "Raster pass '{}' added ({}x{}, layout '{}')", name, width, height, layout);
        Ok(key)
    }

    fn add_compute_view(&mut self, pass: PassKey, name: &str, view: ComputeView) -> Result<()> {
        if !self.resources.contains_key(name) {
            engine_bail!(SOURCE, InvalidResource,
                "Compute view references undeclared resource '{}'", name);
        }
        self.pass_mut(pass)?.set_compute_view(name, view);
        Ok(())
    }

    fn add_raster_view(&mut self, pass: PassKey, name: &str, view: RasterView) -> Result<()> {
        let attachment = match self.resources.get(name) {
            Some(desc) => desc.kind().attachment_type(),
            None => engine_bail!(SOURCE, InvalidResource,
                "Raster view references undeclared resource '{}'", name),
        };
        if attachment != view.attachment {
            engine_bail!(SOURCE, InvalidResource,
                "Resource '{}' is a {:?} attachment, bound as {:?}", name, attachment, view.attachment);
        }
        self.pass_mut(pass)?.set_raster_view(name, view);
        Ok(())
    }

    fn add_queue(&mut self, pass: PassKey, hint: QueueHint) -> Result<QueueKey> {
        let Some(raster_pass) = self.passes.get_mut(pass) else {
            engine_bail!(SOURCE, InvalidHandle,
                "Raster pass {:?} does not belong to the current frame", pass);
        };
        let key = self.queues.insert(RenderQueue::new(pass, hint));
        raster_pass.push_queue(key);
        Ok(key)
    }

    fn add_scene_of_camera(
        &mut self,
        queue: QueueKey,
        camera: &Camera,
        light_info: LightInfo,
        flags: SceneFlags,
    ) -> Result<()> {
        let Some(render_queue) = self.queues.get_mut(queue) else {
            engine_bail!(SOURCE, InvalidHandle,
                "Render queue {:?} does not belong to the current frame", queue);
        };
        render_queue.push_scene(SceneBinding {
            camera: camera.id(),
            scene: camera.scene().map(Arc::clone),
            light_info,
            flags,
        });
        Ok(())
    }

    fn pipeline_scene_data(&self) -> &PipelineSceneData {
        &self.scene_data
    }
}

#[cfg(test)]
#[path = "render_graph_tests.rs"]
mod tests;
