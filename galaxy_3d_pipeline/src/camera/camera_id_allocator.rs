/// Assigns stable `u32` indices to camera identities.
///
/// Indices are handed out in first-seen order and never recycled, so a
/// camera keeps the same per-camera resource names across frames. The
/// allocator is owned by the render pipeline driver and passed into
/// every `PipelineBuilder::setup` call.
///
/// # Example
///
/// ```ignore
/// let mut ids = CameraIdAllocator::new();
/// ids.get_or_assign(CameraId(40));  // 0
/// ids.get_or_assign(CameraId(12));  // 1
/// ids.get_or_assign(CameraId(40));  // 0 (already known)
/// ```

use rustc_hash::FxHashMap;
use super::camera::CameraId;

pub struct CameraIdAllocator {
    /// Camera identities in first-seen order (index == assigned id)
    cameras: Vec<CameraId>,
    indices: FxHashMap<CameraId, u32>,
}

impl CameraIdAllocator {
    pub fn new() -> Self {
        Self {
            cameras: Vec::new(),
            indices: FxHashMap::default(),
        }
    }

    /// Index of `camera`, assigning the next one if it was never seen
    pub fn get_or_assign(&mut self, camera: CameraId) -> u32 {
        if let Some(&index) = self.indices.get(&camera) {
            return index;
        }
        let index = self.cameras.len() as u32;
        self.cameras.push(camera);
        self.indices.insert(camera, index);
        index
    }

    /// Index of `camera` without assigning one
    pub fn get(&self, camera: CameraId) -> Option<u32> {
        self.indices.get(&camera).copied()
    }

    pub fn contains(&self, camera: CameraId) -> bool {
        self.indices.contains_key(&camera)
    }

    /// Known cameras, ordered by assigned index
    pub fn cameras(&self) -> &[CameraId] {
        &self.cameras
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Forget every camera (end of session); indices restart at 0
    pub fn reset(&mut self) {
        self.cameras.clear();
        self.indices.clear();
    }
}

impl Default for CameraIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "camera_id_allocator_tests.rs"]
mod tests;
