/*!
# Galaxy 3D Pipeline

Render-graph builders for the Galaxy 3D engine.

Given the frame's active cameras, a pipeline builder declares the
frame's render graph: named GPU resources (window textures,
depth-stencil buffers, shadow maps), raster passes with load/store
operations derived from each camera's clear flags, and the scene
queues that draw into them.

## Architecture

- **Pipeline**: resource and pass registration primitives (trait)
- **RenderGraph**: in-memory `Pipeline` implementation
- **PipelineBuilder**: rendering strategy (forward, deferred)
- **RenderPipeline**: per-frame driver selecting a strategy from `PipelineConfig`

GPU command encoding is the job of a backend consuming the built graph.
*/

// Internal modules
mod error;
mod engine;
mod render_pipeline;
pub mod log;
pub mod builder;
pub mod camera;
pub mod render_graph;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging host
    pub use crate::engine::Engine;

    // Per-frame driver
    pub use crate::render_pipeline::{AntiAliasing, PipelineConfig, PipelineKind, RenderPipeline};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Builder sub-module
    pub mod builder {
        pub use crate::builder::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render graph sub-module
    pub mod render_graph {
        pub use crate::render_graph::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
