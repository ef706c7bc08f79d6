/// PipelineBuilder trait: one rendering strategy.
///
/// A builder turns the frame's active cameras into passes on a
/// `Pipeline`. Builders keep no state between calls: everything that
/// must survive a frame lives in the pipeline's resource table or in
/// the camera id allocator owned by the driver.

use crate::camera::{Camera, CameraIdAllocator};
use crate::error::Result;
use crate::render_graph::Pipeline;

pub trait PipelineBuilder: Send + Sync {
    /// Strategy name (for logs)
    fn name(&self) -> &'static str;

    /// Declare this frame's passes for `cameras`
    ///
    /// Cameras without a scene are skipped.
    ///
    /// # Errors
    ///
    /// Only errors reported by the pipeline are propagated.
    fn setup(
        &self,
        cameras: &[&Camera],
        pipeline: &mut dyn Pipeline,
        camera_ids: &mut CameraIdAllocator,
    ) -> Result<()>;
}
