/// Clear flags to attachment load operation.

use crate::render_graph::{AttachmentType, ClearFlags, LoadOp};

/// Load operation of an attachment given the camera's clear flags
///
/// Clear by default. A color target that is not cleared is discarded
/// when the skybox repaints every pixel, loaded otherwise. A
/// depth-stencil target is loaded unless both depth and stencil are
/// cleared.
pub fn get_load_op_of_clear_flag(clear_flags: ClearFlags, attachment: AttachmentType) -> LoadOp {
    let mut load_op = LoadOp::Clear;
    match attachment {
        AttachmentType::RenderTarget => {
            if !clear_flags.contains(ClearFlags::COLOR) {
                load_op = if clear_flags.contains(ClearFlags::SKYBOX) {
                    LoadOp::Discard
                } else {
                    LoadOp::Load
                };
            }
        }
        AttachmentType::DepthStencil => {
            if !clear_flags.contains(ClearFlags::DEPTH_STENCIL) {
                if !clear_flags.contains(ClearFlags::DEPTH) {
                    load_op = LoadOp::Load;
                }
                if !clear_flags.contains(ClearFlags::STENCIL) {
                    load_op = LoadOp::Load;
                }
            }
        }
    }
    load_op
}

#[cfg(test)]
#[path = "clear_flag_tests.rs"]
mod tests;
