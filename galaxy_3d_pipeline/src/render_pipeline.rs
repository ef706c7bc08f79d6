/// Render pipeline driver: runs the configured builder every frame.
///
/// The driver owns what must outlive a single `setup` call on the
/// builder side: the selected strategy and the camera id allocator.
/// The render graph itself is owned by the caller.

use crate::builder::{DeferredPipelineBuilder, ForwardPipelineBuilder, PipelineBuilder};
use crate::camera::{Camera, CameraIdAllocator};
use crate::error::Result;
use crate::render_graph::RenderGraph;
use crate::engine_info;

/// Rendering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PipelineKind {
    #[default]
    Forward,
    Deferred,
}

/// Anti-aliasing mode
///
/// Carried as configuration; no builder adds a post-process pass for it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AntiAliasing {
    #[default]
    None,
    Fxaa,
}

/// Render pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    pub kind: PipelineKind,
    pub anti_aliasing: AntiAliasing,
}

pub struct RenderPipeline {
    config: PipelineConfig,
    builder: Box<dyn PipelineBuilder>,
    camera_ids: CameraIdAllocator,
}

impl RenderPipeline {
    /// Create a driver for the strategy selected in `config`
    pub fn new(config: PipelineConfig) -> Self {
        let builder: Box<dyn PipelineBuilder> = match config.kind {
            PipelineKind::Forward => Box::new(ForwardPipelineBuilder::new()),
            PipelineKind::Deferred => Box::new(DeferredPipelineBuilder::new()),
        };
        engine_info!("galaxy3d::RenderPipeline", "Using {} pipeline (anti-aliasing: {:?})",
            builder.name(), config.anti_aliasing);
        Self {
            config,
            builder,
            camera_ids: CameraIdAllocator::new(),
        }
    }

    /// Rebuild `graph`'s passes for this frame's cameras
    ///
    /// Passes of the previous frame are dropped; resource declarations
    /// are kept.
    pub fn build_frame(&mut self, cameras: &[&Camera], graph: &mut RenderGraph) -> Result<()> {
        graph.begin_frame();
        self.builder.setup(cameras, graph, &mut self.camera_ids)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn builder(&self) -> &dyn PipelineBuilder {
        self.builder.as_ref()
    }

    pub fn camera_ids(&self) -> &CameraIdAllocator {
        &self.camera_ids
    }

    /// Forget all camera ids (new session). Per-camera resources
    /// declared under the old ids stay in the graph.
    pub fn reset_camera_ids(&mut self) {
        self.camera_ids.reset();
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

#[cfg(test)]
#[path = "render_pipeline_tests.rs"]
mod tests;
