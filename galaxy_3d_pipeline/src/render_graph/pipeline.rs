/// Pipeline: resource and pass registration primitives.
///
/// Pipeline builders talk to the frame graph only through this trait.
/// `RenderGraph` is the in-memory implementation; a GPU backend can
/// provide its own as long as it keeps the same contract:
///
/// - declaring a resource under an existing name is a no-op
/// - pass names are unique within a frame
/// - a view may only reference a resource declared before it

use slotmap::new_key_type;
use crate::camera::{Camera, RenderWindow};
use crate::error::Result;
use crate::scene::PipelineSceneData;
use super::types::{
    ComputeView, Format, LightInfo, QueueHint, RasterView, ResourceResidency, SceneFlags,
};

new_key_type! {
    /// Handle to a raster pass of the current frame.
    ///
    /// Becomes invalid when the frame is reset.
    pub struct PassKey;

    /// Handle to a render queue of the current frame.
    pub struct QueueKey;
}

pub trait Pipeline {
    /// Whether a resource is declared under `name`
    fn contains_resource(&self, name: &str) -> bool;

    /// Declare a color texture backed by an external window surface
    fn add_render_texture(
        &mut self,
        name: &str,
        format: Format,
        width: u32,
        height: u32,
        window: &RenderWindow,
    ) -> Result<()>;

    /// Declare a pipeline-owned color target
    fn add_render_target(
        &mut self,
        name: &str,
        format: Format,
        width: u32,
        height: u32,
        residency: ResourceResidency,
    ) -> Result<()>;

    /// Declare a depth-stencil target
    fn add_depth_stencil(
        &mut self,
        name: &str,
        format: Format,
        width: u32,
        height: u32,
        residency: ResourceResidency,
    ) -> Result<()>;

    /// Open a raster pass
    ///
    /// # Errors
    ///
    /// Returns an error if a pass with the same name exists in this frame.
    fn add_raster_pass(&mut self, width: u32, height: u32, layout: &str, name: &str) -> Result<PassKey>;

    /// Bind a declared resource read-only into a pass
    fn add_compute_view(&mut self, pass: PassKey, name: &str, view: ComputeView) -> Result<()>;

    /// Bind a declared resource as a raster attachment of a pass
    fn add_raster_view(&mut self, pass: PassKey, name: &str, view: RasterView) -> Result<()>;

    /// Append a render queue to a pass
    fn add_queue(&mut self, pass: PassKey, hint: QueueHint) -> Result<QueueKey>;

    /// Make a queue draw `camera`'s scene, restricted to `flags`
    fn add_scene_of_camera(
        &mut self,
        queue: QueueKey,
        camera: &Camera,
        light_info: LightInfo,
        flags: SceneFlags,
    ) -> Result<()>;

    /// Frame-wide scene state (shadow settings, visible punctual lights)
    fn pipeline_scene_data(&self) -> &PipelineSceneData;
}
