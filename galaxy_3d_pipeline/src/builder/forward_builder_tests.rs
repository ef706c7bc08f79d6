use std::sync::Arc;
use glam::Vec4;
use crate::camera::{Camera, CameraId, CameraIdAllocator, RenderWindow};
use crate::render_graph::{
    AccessType, AttachmentType, ClearFlags, ClearValue, Format, LoadOp, Pipeline, QueueHint,
    RenderGraph, ResourceKind, ResourceResidency, SceneFlags, StoreOp,
};
use crate::scene::{
    DirectionalLight, Light, PipelineSceneData, Scene, ShadowSettings, ShadowType, SpotLight,
};
use super::*;

fn scene() -> Arc<Scene> {
    let mut scene = Scene::new("level");
    scene.set_main_light(Some(DirectionalLight {
        shadow_enabled: true,
        ..DirectionalLight::default()
    }));
    Arc::new(scene)
}

fn camera(id: u64, width: u32, height: u32) -> Camera {
    let mut camera = Camera::new(CameraId(id), RenderWindow::new(id, width, height));
    camera.set_scene(Some(scene()));
    camera
}

fn shadow_graph() -> RenderGraph {
    RenderGraph::new(PipelineSceneData {
        shadows: ShadowSettings {
            enabled: true,
            shadow_type: ShadowType::ShadowMap,
            max_received: 4,
        },
        valid_punctual_lights: vec![
            Light::Spot(SpotLight { shadow_enabled: true }),
            Light::Spot(SpotLight { shadow_enabled: true }),
        ],
    })
}

// ============================================================================
// Skipped cameras
// ============================================================================

#[test]
fn test_camera_without_scene_builds_nothing() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let no_scene = Camera::new(CameraId(1), RenderWindow::new(1, 640, 480));

    ForwardPipelineBuilder::new().setup(&[&no_scene], &mut graph, &mut ids).unwrap();

    assert_eq!(graph.pass_count(), 0);
    assert_eq!(graph.resource_count(), 0);
    assert!(ids.is_empty());
}

#[test]
fn test_skipped_camera_does_not_consume_an_id() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let no_scene = Camera::new(CameraId(1), RenderWindow::new(1, 640, 480));
    let main = camera(2, 640, 480);

    ForwardPipelineBuilder::new().setup(&[&no_scene, &main], &mut graph, &mut ids).unwrap();

    assert_eq!(ids.get(CameraId(2)), Some(0));
    assert!(graph.pass_by_name("CameraForwardPass0").is_some());
}

// ============================================================================
// Resources and pass
// ============================================================================

#[test]
fn test_forward_pass_declares_camera_resources() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let cam = camera(5, 1280, 720);

    ForwardPipelineBuilder::new().setup(&[&cam], &mut graph, &mut ids).unwrap();

    let color = graph.resource("dsForwardPassColorCamera0").unwrap();
    assert_eq!(color.kind(), ResourceKind::RenderTexture);
    assert_eq!(color.format(), Format::Rgba8);
    assert_eq!(color.residency(), ResourceResidency::External);
    assert_eq!(color.window_handle(), Some(5));
    assert_eq!((color.width(), color.height()), (1280, 720));

    let ds = graph.resource("dsForwardPassDSCamera0").unwrap();
    assert_eq!(ds.kind(), ResourceKind::DepthStencil);
    assert_eq!(ds.format(), Format::DepthStencil);
    assert_eq!(ds.residency(), ResourceResidency::Managed);

    let pass = graph.pass_by_name("CameraForwardPass0").unwrap();
    assert_eq!((pass.width(), pass.height()), (1280, 720));
    assert_eq!(pass.layout(), FORWARD_PASS_LAYOUT);
}

#[test]
fn test_forward_pass_views_follow_camera_clear_state() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let mut cam = camera(0, 64, 64);
    cam.set_clear_flags(ClearFlags::DEPTH | ClearFlags::SKYBOX);
    cam.set_clear_color(Vec4::new(0.1, 0.2, 0.3, 1.0));
    cam.set_clear_depth(0.5);
    cam.set_clear_stencil(2);

    ForwardPipelineBuilder::new().setup(&[&cam], &mut graph, &mut ids).unwrap();

    let pass = graph.pass_by_name("CameraForwardPass0").unwrap();
    let names: Vec<&str> = pass.raster_views().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["dsForwardPassColorCamera0", "dsForwardPassDSCamera0"]);

    let color = pass.raster_view("dsForwardPassColorCamera0").unwrap();
    assert_eq!(color.access, AccessType::Write);
    assert_eq!(color.attachment, AttachmentType::RenderTarget);
    assert_eq!(color.load_op, LoadOp::Discard);
    assert_eq!(color.store_op, StoreOp::Store);
    assert_eq!(color.clear_flags, ClearFlags::DEPTH | ClearFlags::SKYBOX);
    assert_eq!(color.clear_value, ClearValue::Color(Vec4::new(0.1, 0.2, 0.3, 1.0)));

    let ds = pass.raster_view("dsForwardPassDSCamera0").unwrap();
    assert_eq!(ds.attachment, AttachmentType::DepthStencil);
    assert_eq!(ds.load_op, LoadOp::Load);
    assert_eq!(ds.store_op, StoreOp::Store);
    assert_eq!(ds.clear_value, ClearValue::DepthStencil { depth: 0.5, stencil: 2 });
}

#[test]
fn test_forward_pass_clears_everything_by_default() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let cam = camera(0, 64, 64);

    ForwardPipelineBuilder::new().setup(&[&cam], &mut graph, &mut ids).unwrap();

    let pass = graph.pass_by_name("CameraForwardPass0").unwrap();
    assert!(pass.raster_views().iter().all(|(_, v)| v.load_op == LoadOp::Clear));
}

// ============================================================================
// Queues
// ============================================================================

#[test]
fn test_forward_pass_queues() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let cam = camera(3, 64, 64);

    ForwardPipelineBuilder::new().setup(&[&cam], &mut graph, &mut ids).unwrap();

    let pass = graph.pass_by_name("CameraForwardPass0").unwrap();
    let queues: Vec<_> = graph.queues_of(pass).collect();
    assert_eq!(queues.len(), 2);

    assert_eq!(queues[0].hint(), QueueHint::Opaque);
    assert_eq!(queues[0].scenes().len(), 1);
    assert_eq!(queues[0].scenes()[0].camera, CameraId(3));
    assert_eq!(
        queues[0].scenes()[0].flags,
        SceneFlags::OPAQUE_OBJECT | SceneFlags::PLANAR_SHADOW | SceneFlags::CUTOUT_OBJECT | SceneFlags::DEFAULT_LIGHTING
    );
    assert!(queues[0].scenes()[0].light_info.light.is_none());

    assert_eq!(queues[1].hint(), QueueHint::Transparent);
    assert_eq!(
        queues[1].scenes()[0].flags,
        SceneFlags::TRANSPARENT_OBJECT | SceneFlags::UI | SceneFlags::GEOMETRY | SceneFlags::PROFILER
    );
}

// ============================================================================
// Shadow maps
// ============================================================================

#[test]
fn test_declared_shadow_maps_are_bound() {
    let mut graph = shadow_graph();
    graph.add_render_target("MainLightShadowCamera0", Format::R32F, 2048, 2048, ResourceResidency::Managed).unwrap();
    graph.add_render_target("SpotLightShadow1Camera0", Format::R32F, 1024, 1024, ResourceResidency::Managed).unwrap();
    let mut ids = CameraIdAllocator::new();
    let cam = camera(0, 64, 64);

    ForwardPipelineBuilder::new().setup(&[&cam], &mut graph, &mut ids).unwrap();

    let pass = graph.pass_by_name("CameraForwardPass0").unwrap();
    let names: Vec<&str> = pass.compute_views().iter().map(|(n, _)| n.as_str()).collect();
    // SpotLightShadow0Camera0 is planned but not declared
    assert_eq!(names, vec!["MainLightShadowCamera0", "SpotLightShadow1Camera0"]);
    assert!(pass.compute_views().iter().all(|(_, v)| v.access == AccessType::Read));
}

#[test]
fn test_missing_shadow_maps_are_skipped() {
    let mut graph = shadow_graph();
    let mut ids = CameraIdAllocator::new();
    let cam = camera(0, 64, 64);

    let result = ForwardPipelineBuilder::new().setup(&[&cam], &mut graph, &mut ids);

    assert!(result.is_ok());
    assert!(graph.pass_by_name("CameraForwardPass0").unwrap().compute_views().is_empty());
}

// ============================================================================
// Multiple cameras and frames
// ============================================================================

#[test]
fn test_each_camera_gets_own_pass_and_resources() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let a = camera(10, 64, 64);
    let b = camera(20, 32, 32);

    ForwardPipelineBuilder::new().setup(&[&a, &b], &mut graph, &mut ids).unwrap();

    let names: Vec<&str> = graph.passes().map(|p| p.name()).collect();
    assert_eq!(names, vec!["CameraForwardPass0", "CameraForwardPass1"]);
    assert_eq!(graph.resource_count(), 4);
    assert_eq!(graph.resource("dsForwardPassDSCamera1").unwrap().width(), 32);
}

#[test]
fn test_second_frame_does_not_redeclare_resources() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let builder = ForwardPipelineBuilder::new();
    let mut cam = camera(0, 64, 64);

    builder.setup(&[&cam], &mut graph, &mut ids).unwrap();
    graph.begin_frame();
    cam.set_window(RenderWindow::new(0, 128, 128));
    builder.setup(&[&cam], &mut graph, &mut ids).unwrap();

    assert_eq!(graph.resource_count(), 2);
    // Existing declaration wins until it is removed
    assert_eq!(graph.resource("dsForwardPassColorCamera0").unwrap().width(), 64);
    assert_eq!(graph.pass_count(), 1);
}

#[test]
fn test_camera_ids_are_stable_across_frames() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let builder = ForwardPipelineBuilder::new();
    let a = camera(10, 64, 64);
    let b = camera(20, 64, 64);

    builder.setup(&[&a, &b], &mut graph, &mut ids).unwrap();
    graph.begin_frame();
    builder.setup(&[&b], &mut graph, &mut ids).unwrap();

    assert!(graph.pass_by_name("CameraForwardPass1").is_some());
    assert!(graph.pass_by_name("CameraForwardPass0").is_none());
}

#[test]
fn test_same_camera_twice_in_one_frame_is_built_once() {
    let mut graph = RenderGraph::default();
    let mut ids = CameraIdAllocator::new();
    let a = camera(0, 64, 64);
    let b = camera(1, 64, 64);

    let result = ForwardPipelineBuilder::new().setup(&[&a, &a, &b], &mut graph, &mut ids);

    assert!(result.is_ok());
    let names: Vec<&str> = graph.passes().map(|p| p.name()).collect();
    assert_eq!(names, vec!["CameraForwardPass0", "CameraForwardPass1"]);
    assert_eq!(graph.resource_count(), 4);
    assert_eq!(ids.len(), 2);
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_resource_naming() {
    assert_eq!(camera_name(3), "Camera3");
    assert_eq!(forward_color_name("Camera3"), "dsForwardPassColorCamera3");
    assert_eq!(forward_depth_stencil_name("Camera3"), "dsForwardPassDSCamera3");
    assert_eq!(forward_pass_name(3), "CameraForwardPass3");
    assert_eq!(ForwardPipelineBuilder::new().name(), "forward");
}
