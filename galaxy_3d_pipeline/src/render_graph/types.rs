/// Render graph vocabulary: attachment semantics, flags and views.
///
/// These are the values a pipeline builder hands to the `Pipeline`
/// collaborator. They describe what a pass does with its attachments,
/// not how the GPU backend encodes it.

use bitflags::bitflags;
use glam::Vec4;
use crate::scene::Light;

/// Load operation for an attachment at pass start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOp {
    /// Preserve previous content
    Load,
    /// Clear to the view's clear value
    Clear,
    /// Previous content is undefined (every pixel gets overwritten)
    Discard,
}

/// Store operation for an attachment at pass end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Store,
    Discard,
}

/// How a pass accesses a bound resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    Read,
    ReadWrite,
    Write,
}

/// Kind of raster attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentType {
    RenderTarget,
    DepthStencil,
}

/// Render queue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueHint {
    Opaque,
    Cutout,
    Transparent,
}

/// Ownership policy of a declared resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceResidency {
    /// Owned by the pipeline, may be reclaimed
    Managed,
    /// Owned by the pipeline, kept alive across frames
    Persistent,
    /// Supplied from outside (e.g. a window surface)
    External,
}

/// Pixel format of a declared resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Rgba8,
    R32F,
    DepthStencil,
}

bitflags! {
    /// Per-camera clear flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
        /// The skybox covers every pixel of the color target
        const SKYBOX = 1 << 3;
        const DEPTH_STENCIL = Self::DEPTH.bits() | Self::STENCIL.bits();
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits() | Self::STENCIL.bits();
    }
}

bitflags! {
    /// Draw categories a queue renders from a camera's scene
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SceneFlags: u32 {
        const OPAQUE_OBJECT = 0x1;
        const CUTOUT_OBJECT = 0x2;
        const TRANSPARENT_OBJECT = 0x4;
        const SHADOW_CASTER = 0x8;
        const UI = 0x10;
        const DEFAULT_LIGHTING = 0x20;
        const VOLUMETRIC_LIGHTING = 0x40;
        const CLUSTERED_LIGHTING = 0x80;
        const PLANAR_SHADOW = 0x100;
        const GEOMETRY = 0x200;
        const PROFILER = 0x400;
    }
}

/// Clear value of a raster view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearValue {
    Color(Vec4),
    DepthStencil { depth: f32, stencil: u32 },
}

/// Writable attachment binding of a raster pass
#[derive(Debug, Clone, PartialEq)]
pub struct RasterView {
    pub slot_name: String,
    pub access: AccessType,
    pub attachment: AttachmentType,
    pub load_op: LoadOp,
    pub store_op: StoreOp,
    pub clear_flags: ClearFlags,
    pub clear_value: ClearValue,
}

impl RasterView {
    pub fn new(
        slot_name: &str,
        access: AccessType,
        attachment: AttachmentType,
        load_op: LoadOp,
        store_op: StoreOp,
        clear_flags: ClearFlags,
        clear_value: ClearValue,
    ) -> Self {
        Self {
            slot_name: slot_name.to_string(),
            access,
            attachment,
            load_op,
            store_op,
            clear_flags,
            clear_value,
        }
    }
}

/// Read-only resource binding into a pass (no load/store)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeView {
    pub access: AccessType,
}

impl Default for ComputeView {
    fn default() -> Self {
        Self { access: AccessType::Read }
    }
}

/// Light a scene binding is rendered for
///
/// `light == None` means the camera's regular lighting.
/// `level` selects a cascade for directional shadow maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightInfo {
    pub light: Option<Light>,
    pub level: u32,
}
