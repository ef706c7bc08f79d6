//! Render graph module
//!
//! A render graph is the per-frame description of how a frame is
//! rendered: which raster passes execute, which named resources they
//! read and write, with which load/store semantics, and which scene
//! queues draw into them.
//!
//! Pipeline builders declare the graph through the `Pipeline` trait;
//! `RenderGraph` is the in-memory implementation.

mod pipeline;
mod render_graph;
mod render_pass;
mod render_target;
mod types;

pub use pipeline::{PassKey, Pipeline, QueueKey};
pub use render_graph::RenderGraph;
pub use render_pass::{RasterPass, RenderQueue, SceneBinding};
pub use render_target::{ResourceDesc, ResourceKind};
pub use types::{
    AccessType, AttachmentType, ClearFlags, ClearValue, ComputeView, Format, LightInfo, LoadOp,
    QueueHint, RasterView, ResourceResidency, SceneFlags, StoreOp,
};
