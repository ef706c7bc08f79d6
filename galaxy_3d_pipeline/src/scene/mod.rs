//! Scene module: read-only scene and light state.
//!
//! Passive data containers. The engine's scene system owns and updates
//! them; the pipeline builders only read them.

mod light;
mod pipeline_scene_data;
mod scene;

pub use light::{CsmLevel, DirectionalLight, Light, SphereLight, SpotLight};
pub use pipeline_scene_data::{PipelineSceneData, ShadowSettings, ShadowType};
pub use scene::Scene;
