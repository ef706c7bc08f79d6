//! Pipeline builder module
//!
//! Rendering strategies that declare a frame's render graph, and the
//! pure helpers they are made of (render areas, clear-flag load ops,
//! shadow-map planning).

mod clear_flag;
mod deferred_builder;
mod forward_builder;
mod pipeline_builder;
mod render_area;
mod shadow_planner;

pub use clear_flag::get_load_op_of_clear_flag;
pub use deferred_builder::DeferredPipelineBuilder;
pub use forward_builder::{
    camera_name, forward_color_name, forward_depth_stencil_name, forward_pass_name,
    ForwardPipelineBuilder, FORWARD_PASS_LAYOUT, OPAQUE_SCENE_FLAGS, TRANSPARENT_SCENE_FLAGS,
};
pub use pipeline_builder::PipelineBuilder;
pub use render_area::get_render_area;
pub use shadow_planner::{
    build_shadow_passes, main_light_shadow_name, select_spot_shadow_lights, spot_light_shadow_name,
    CameraInfo,
};
