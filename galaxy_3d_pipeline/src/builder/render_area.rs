/// Render area of a camera, or of a light's shadow map, in pixels.

use crate::camera::{Camera, Rect};
use crate::scene::{CsmLevel, Light};

/// Compute the pixel rectangle a pass renders into
///
/// Without a light this is the camera viewport scaled to `width` x `height`.
///
/// Directional shadow maps with several cascades are a 2x2 atlas:
/// cascade `level` gets the quadrant at
/// `((level % 2) * w/2, (1 - level / 2) * h/2)`: levels 0 and 1 start
/// at `y = h/2`, levels 2 and 3 at `y = 0`.
/// A fixed-area or single-cascade directional shadow map, and any spot
/// shadow map, covers the whole target.
pub fn get_render_area(
    camera: &Camera,
    width: u32,
    height: u32,
    light: Option<&Light>,
    level: u32,
) -> Rect {
    let w = width as f32;
    let h = height as f32;
    let vp = camera.viewport();
    let camera_area = Rect::new(vp.x * w, vp.y * h, vp.width * w, vp.height * h);

    match light {
        Some(Light::Directional(main_light)) => {
            if main_light.shadow_fixed_area || main_light.csm_level == CsmLevel::Level1 {
                Rect::new(0.0, 0.0, w, h)
            } else {
                Rect::new(
                    (level % 2) as f32 * 0.5 * w,
                    (1.0 - (level / 2) as f32) * 0.5 * h,
                    0.5 * w,
                    0.5 * h,
                )
            }
        }
        Some(Light::Spot(_)) => Rect::new(0.0, 0.0, w, h),
        _ => camera_area,
    }
}

#[cfg(test)]
#[path = "render_area_tests.rs"]
mod tests;
