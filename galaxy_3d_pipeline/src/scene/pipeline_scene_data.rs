/// Pipeline-wide scene state shared by every camera of a frame.
///
/// Holds the global shadow configuration and the punctual lights that
/// survived the engine's per-frame light culling.

use super::light::Light;

/// Shadow technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowType {
    /// Projected planar shadows (no shadow maps)
    Planar,
    ShadowMap,
}

/// Global shadow settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    pub enabled: bool,
    pub shadow_type: ShadowType,
    /// Maximum number of punctual lights casting shadows
    pub max_received: u32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            shadow_type: ShadowType::Planar,
            max_received: 4,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineSceneData {
    pub shadows: ShadowSettings,
    /// Punctual lights visible this frame, in priority order
    pub valid_punctual_lights: Vec<Light>,
}
