/// Forward pipeline builder.
///
/// One raster pass per camera, rendering straight into the camera's
/// window texture: an opaque queue (with planar shadows and default
/// lighting) followed by a transparent queue (with UI and overlays).
/// Shadow maps planned for the camera are sampled when they exist.

use rustc_hash::FxHashSet;
use crate::camera::{Camera, CameraIdAllocator};
use crate::error::Result;
use crate::render_graph::{
    AccessType, AttachmentType, ClearValue, ComputeView, Format, LightInfo, Pipeline, QueueHint,
    RasterView, ResourceResidency, SceneFlags, StoreOp,
};
use crate::{engine_debug, engine_trace, engine_warn};
use super::clear_flag::get_load_op_of_clear_flag;
use super::pipeline_builder::PipelineBuilder;
use super::shadow_planner::build_shadow_passes;

const SOURCE: &str = "galaxy3d::ForwardPipelineBuilder";

/// Layout tag of forward passes
pub const FORWARD_PASS_LAYOUT: &str = "default";

/// Draw categories of the opaque queue
pub const OPAQUE_SCENE_FLAGS: SceneFlags = SceneFlags::OPAQUE_OBJECT
    .union(SceneFlags::PLANAR_SHADOW)
    .union(SceneFlags::CUTOUT_OBJECT)
    .union(SceneFlags::DEFAULT_LIGHTING);

/// Draw categories of the transparent queue
pub const TRANSPARENT_SCENE_FLAGS: SceneFlags = SceneFlags::TRANSPARENT_OBJECT
    .union(SceneFlags::UI)
    .union(SceneFlags::GEOMETRY)
    .union(SceneFlags::PROFILER);

pub fn camera_name(camera_id: u32) -> String {
    format!("Camera{}", camera_id)
}

pub fn forward_color_name(camera_name: &str) -> String {
    format!("dsForwardPassColor{}", camera_name)
}

pub fn forward_depth_stencil_name(camera_name: &str) -> String {
    format!("dsForwardPassDS{}", camera_name)
}

pub fn forward_pass_name(camera_id: u32) -> String {
    format!("CameraForwardPass{}", camera_id)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardPipelineBuilder;

impl ForwardPipelineBuilder {
    pub fn new() -> Self {
        Self
    }

    fn build_camera(
        &self,
        camera: &Camera,
        pipeline: &mut dyn Pipeline,
        camera_ids: &mut CameraIdAllocator,
    ) -> Result<()> {
        let camera_id = camera_ids.get_or_assign(camera.id());
        let camera_name = camera_name(camera_id);
        let camera_info = build_shadow_passes(&camera_name, camera, pipeline);
        let width = camera.window().width();
        let height = camera.window().height();

        let color_name = forward_color_name(&camera_name);
        let depth_stencil_name = forward_depth_stencil_name(&camera_name);
        if !pipeline.contains_resource(&color_name) {
            pipeline.add_render_texture(&color_name, Format::Rgba8, width, height, camera.window())?;
        }
        if !pipeline.contains_resource(&depth_stencil_name) {
            pipeline.add_depth_stencil(
                &depth_stencil_name,
                Format::DepthStencil,
                width,
                height,
                ResourceResidency::Managed,
            )?;
        }

        let pass = pipeline.add_raster_pass(width, height, FORWARD_PASS_LAYOUT, &forward_pass_name(camera_id))?;

        let shadow_names = camera_info
            .main_light_shadow_names()
            .iter()
            .chain(camera_info.spot_light_shadow_names());
        for shadow_name in shadow_names {
            if pipeline.contains_resource(shadow_name) {
                pipeline.add_compute_view(pass, shadow_name, ComputeView::default())?;
            } else {
                engine_trace!(SOURCE, "{}: shadow map '{}' not declared, skipped", camera_name, shadow_name);
            }
        }

        let clear_flags = camera.clear_flags();
        let color_view = RasterView::new(
            "_",
            AccessType::Write,
            AttachmentType::RenderTarget,
            get_load_op_of_clear_flag(clear_flags, AttachmentType::RenderTarget),
            StoreOp::Store,
            clear_flags,
            ClearValue::Color(camera.clear_color()),
        );
        let depth_stencil_view = RasterView::new(
            "_",
            AccessType::Write,
            AttachmentType::DepthStencil,
            get_load_op_of_clear_flag(clear_flags, AttachmentType::DepthStencil),
            StoreOp::Store,
            clear_flags,
            ClearValue::DepthStencil {
                depth: camera.clear_depth(),
                stencil: camera.clear_stencil(),
            },
        );
        pipeline.add_raster_view(pass, &color_name, color_view)?;
        pipeline.add_raster_view(pass, &depth_stencil_name, depth_stencil_view)?;

        let opaque = pipeline.add_queue(pass, QueueHint::Opaque)?;
        pipeline.add_scene_of_camera(opaque, camera, LightInfo::default(), OPAQUE_SCENE_FLAGS)?;
        let transparent = pipeline.add_queue(pass, QueueHint::Transparent)?;
        pipeline.add_scene_of_camera(transparent, camera, LightInfo::default(), TRANSPARENT_SCENE_FLAGS)?;

        engine_trace!(SOURCE, "{}: forward pass {}x{} built", camera_name, width, height);
        Ok(())
    }
}

impl PipelineBuilder for ForwardPipelineBuilder {
    fn name(&self) -> &'static str {
        "forward"
    }

    fn setup(
        &self,
        cameras: &[&Camera],
        pipeline: &mut dyn Pipeline,
        camera_ids: &mut CameraIdAllocator,
    ) -> Result<()> {
        let mut built = FxHashSet::default();
        for &camera in cameras {
            if camera.scene().is_none() {
                engine_trace!(SOURCE, "Camera {:?} has no scene, skipped", camera.id());
                continue;
            }
            if !built.insert(camera.id()) {
                engine_warn!(SOURCE, "Camera {:?} listed twice in this frame, skipped", camera.id());
                continue;
            }
            self.build_camera(camera, pipeline, camera_ids)?;
        }
        engine_debug!(SOURCE, "{} of {} cameras built", built.len(), cameras.len());
        Ok(())
    }
}

#[cfg(test)]
#[path = "forward_builder_tests.rs"]
mod tests;
