/// Scene: the light state a camera renders.
///
/// The real scene graph lives outside the pipeline. This is the
/// read-only view of it the builders need: an optional main
/// (directional) light. Punctual lights reach the builders already
/// culled, through `PipelineSceneData`.

use super::light::DirectionalLight;

#[derive(Debug, Clone, Default)]
pub struct Scene {
    name: String,
    main_light: Option<DirectionalLight>,
}

impl Scene {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            main_light: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Main directional light, if any
    pub fn main_light(&self) -> Option<&DirectionalLight> {
        self.main_light.as_ref()
    }

    pub fn set_main_light(&mut self, light: Option<DirectionalLight>) {
        self.main_light = light;
    }
}
