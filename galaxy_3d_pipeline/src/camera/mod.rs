//! Camera module: camera data and per-camera identity.
//!
//! Cameras are passive data containers owned and driven by the caller.
//! The pipeline only reads them, and maps their identity to small
//! stable indices used to name per-camera resources.

mod camera;
mod camera_id_allocator;

pub use camera::{Camera, CameraId, Rect, RenderWindow};
pub use camera_id_allocator::CameraIdAllocator;
