/// Resource declaration in a render graph.
///
/// A named GPU surface (color texture, color target or depth-stencil)
/// that passes bind through views. Declarations outlive frames: passes
/// are rebuilt every frame, resources are looked up by name.

use super::types::{AttachmentType, Format, ResourceResidency};

/// Kind of declared resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Color texture presented to a window
    RenderTexture,
    /// Pipeline-owned color target (e.g. a shadow map)
    RenderTarget,
    DepthStencil,
}

impl ResourceKind {
    /// Attachment type this resource can be bound as
    pub fn attachment_type(&self) -> AttachmentType {
        match self {
            ResourceKind::RenderTexture | ResourceKind::RenderTarget => AttachmentType::RenderTarget,
            ResourceKind::DepthStencil => AttachmentType::DepthStencil,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDesc {
    name: String,
    kind: ResourceKind,
    format: Format,
    width: u32,
    height: u32,
    residency: ResourceResidency,
    /// External surface handle (window-backed textures only)
    window_handle: Option<u64>,
}

impl ResourceDesc {
    pub(crate) fn new(
        name: &str,
        kind: ResourceKind,
        format: Format,
        width: u32,
        height: u32,
        residency: ResourceResidency,
        window_handle: Option<u64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            format,
            width,
            height,
            residency,
            window_handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn residency(&self) -> ResourceResidency {
        self.residency
    }

    pub fn window_handle(&self) -> Option<u64> {
        self.window_handle
    }
}
