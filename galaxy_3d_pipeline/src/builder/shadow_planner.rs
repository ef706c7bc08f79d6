/// Shadow-map planning for one camera.
///
/// Decides which lights cast shadow maps for a camera and names the
/// shadow-map resources the forward pass will sample. Declaring and
/// rendering the shadow maps themselves is left to whoever owns those
/// resources; the forward pass only binds the ones that exist.

use crate::camera::Camera;
use crate::engine_trace;
use crate::render_graph::Pipeline;
use crate::scene::{Light, ShadowType, SpotLight};

const SOURCE: &str = "galaxy3d::ShadowPlanner";

/// Per-camera shadow state for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraInfo {
    shadow_enabled: bool,
    main_light_shadow_names: Vec<String>,
    spot_light_shadow_names: Vec<String>,
}

impl CameraInfo {
    pub fn shadow_enabled(&self) -> bool {
        self.shadow_enabled
    }

    /// Directional shadow-map resource names, in binding order
    pub fn main_light_shadow_names(&self) -> &[String] {
        &self.main_light_shadow_names
    }

    /// Spot shadow-map resource names, in selection order
    pub fn spot_light_shadow_names(&self) -> &[String] {
        &self.spot_light_shadow_names
    }
}

/// Resource name of a camera's main light shadow map
pub fn main_light_shadow_name(camera_name: &str) -> String {
    format!("MainLightShadow{}", camera_name)
}

/// Resource name of the `index`-th spot shadow map of a camera
pub fn spot_light_shadow_name(index: usize, camera_name: &str) -> String {
    format!("SpotLightShadow{}{}", index, camera_name)
}

/// Pick at most `max_received` shadow-casting spot lights, in list order
pub fn select_spot_shadow_lights(lights: &[Light], max_received: u32) -> Vec<&SpotLight> {
    lights
        .iter()
        .filter_map(Light::as_spot)
        .filter(|spot| spot.shadow_enabled)
        .take(max_received as usize)
        .collect()
}

/// Plan the shadow maps of one camera
///
/// Returns a disabled, empty `CameraInfo` when shadows are off or the
/// shadow technique is not shadow mapping. Does not touch the pipeline.
pub fn build_shadow_passes(camera_name: &str, camera: &Camera, pipeline: &dyn Pipeline) -> CameraInfo {
    let scene_data = pipeline.pipeline_scene_data();
    let shadows = &scene_data.shadows;
    let mut camera_info = CameraInfo::default();
    if !shadows.enabled || shadows.shadow_type != ShadowType::ShadowMap {
        return camera_info;
    }
    camera_info.shadow_enabled = true;

    let main_light = camera.scene().and_then(|scene| scene.main_light());
    if main_light.is_some_and(|light| light.shadow_enabled) {
        camera_info.main_light_shadow_names.push(main_light_shadow_name(camera_name));
    }

    let spot_lights = select_spot_shadow_lights(&scene_data.valid_punctual_lights, shadows.max_received);
    camera_info.spot_light_shadow_names = (0..spot_lights.len())
        .map(|index| spot_light_shadow_name(index, camera_name))
        .collect();

    engine_trace!(SOURCE, "{}: {} main light / {} spot shadow maps",
        camera_name,
        camera_info.main_light_shadow_names.len(),
        camera_info.spot_light_shadow_names.len());
    camera_info
}

#[cfg(test)]
#[path = "shadow_planner_tests.rs"]
mod tests;
