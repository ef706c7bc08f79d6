/// Deferred pipeline builder: placeholder strategy.
///
/// Honors the builder contract and declares nothing. Selecting it in
/// `PipelineConfig` swaps the strategy without touching the driver.

use crate::camera::{Camera, CameraIdAllocator};
use crate::engine_trace;
use crate::error::Result;
use crate::render_graph::Pipeline;
use super::pipeline_builder::PipelineBuilder;

#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredPipelineBuilder;

impl DeferredPipelineBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineBuilder for DeferredPipelineBuilder {
    fn name(&self) -> &'static str {
        "deferred"
    }

    fn setup(
        &self,
        cameras: &[&Camera],
        _pipeline: &mut dyn Pipeline,
        _camera_ids: &mut CameraIdAllocator,
    ) -> Result<()> {
        // TODO: G-buffer and lighting passes once deferred shading lands
        engine_trace!("galaxy3d::DeferredPipelineBuilder", "{} cameras, nothing to build", cameras.len());
        Ok(())
    }
}
