/// Lights consumed by the pipeline builders.
///
/// Passive, read-only data. The scene system owns the real light
/// objects; builders only look at the shadow-related attributes.

/// Cascade count of a directional light's shadow map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsmLevel {
    Level1,
    Level2,
    Level3,
    Level4,
}

/// Main (directional) light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub shadow_enabled: bool,
    /// Shadow map covers a fixed world area instead of cascades
    pub shadow_fixed_area: bool,
    pub csm_level: CsmLevel,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            shadow_enabled: false,
            shadow_fixed_area: false,
            csm_level: CsmLevel::Level4,
        }
    }
}

/// Spot light
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpotLight {
    pub shadow_enabled: bool,
}

/// Point light
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphereLight;

/// A light, polymorphic over its type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Sphere(SphereLight),
    Spot(SpotLight),
}

impl Light {
    pub fn as_spot(&self) -> Option<&SpotLight> {
        match self {
            Light::Spot(spot) => Some(spot),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
