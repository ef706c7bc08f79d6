use crate::render_graph::{AttachmentType, ClearFlags, LoadOp};
use super::*;

/// Every combination of the four clear bits
fn all_flag_combinations() -> impl Iterator<Item = ClearFlags> {
    (0u32..16).map(ClearFlags::from_bits_truncate)
}

// ============================================================================
// Render target
// ============================================================================

#[test]
fn test_color_bit_set_clears_render_target() {
    for flags in all_flag_combinations().filter(|f| f.contains(ClearFlags::COLOR)) {
        assert_eq!(get_load_op_of_clear_flag(flags, AttachmentType::RenderTarget), LoadOp::Clear, "{:?}", flags);
    }
}

#[test]
fn test_no_color_with_skybox_discards_render_target() {
    for flags in all_flag_combinations()
        .filter(|f| !f.contains(ClearFlags::COLOR) && f.contains(ClearFlags::SKYBOX))
    {
        assert_eq!(get_load_op_of_clear_flag(flags, AttachmentType::RenderTarget), LoadOp::Discard, "{:?}", flags);
    }
}

#[test]
fn test_no_color_without_skybox_loads_render_target() {
    for flags in all_flag_combinations()
        .filter(|f| !f.contains(ClearFlags::COLOR) && !f.contains(ClearFlags::SKYBOX))
    {
        assert_eq!(get_load_op_of_clear_flag(flags, AttachmentType::RenderTarget), LoadOp::Load, "{:?}", flags);
    }
}

#[test]
fn test_depth_bits_do_not_affect_render_target() {
    assert_eq!(
        get_load_op_of_clear_flag(ClearFlags::COLOR, AttachmentType::RenderTarget),
        get_load_op_of_clear_flag(ClearFlags::ALL, AttachmentType::RenderTarget),
    );
}

// ============================================================================
// Depth-stencil
// ============================================================================

#[test]
fn test_depth_and_stencil_clear_depth_stencil() {
    for flags in all_flag_combinations().filter(|f| f.contains(ClearFlags::DEPTH_STENCIL)) {
        assert_eq!(get_load_op_of_clear_flag(flags, AttachmentType::DepthStencil), LoadOp::Clear, "{:?}", flags);
    }
}

#[test]
fn test_missing_depth_or_stencil_loads_depth_stencil() {
    for flags in all_flag_combinations().filter(|f| !f.contains(ClearFlags::DEPTH_STENCIL)) {
        assert_eq!(get_load_op_of_clear_flag(flags, AttachmentType::DepthStencil), LoadOp::Load, "{:?}", flags);
    }
}

#[test]
fn test_depth_only_and_stencil_only() {
    assert_eq!(get_load_op_of_clear_flag(ClearFlags::DEPTH, AttachmentType::DepthStencil), LoadOp::Load);
    assert_eq!(get_load_op_of_clear_flag(ClearFlags::STENCIL, AttachmentType::DepthStencil), LoadOp::Load);
}

#[test]
fn test_skybox_never_discards_depth_stencil() {
    let flags = ClearFlags::SKYBOX;
    assert_eq!(get_load_op_of_clear_flag(flags, AttachmentType::DepthStencil), LoadOp::Load);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_resolver_is_deterministic() {
    for flags in all_flag_combinations() {
        for attachment in [AttachmentType::RenderTarget, AttachmentType::DepthStencil] {
            assert_eq!(
                get_load_op_of_clear_flag(flags, attachment),
                get_load_op_of_clear_flag(flags, attachment),
            );
        }
    }
}
