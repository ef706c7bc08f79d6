//! Error types for the Galaxy3D render pipeline
//!
//! Builders themselves never fail: missing scenes and missing shadow
//! resources are skipped. These errors are raised by the pipeline
//! collaborator when a caller breaks one of the graph invariants.

use std::fmt;

/// Result type for Galaxy3D pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D pipeline errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A view references a resource that was never declared
    InvalidResource(String),

    /// A pass or queue key does not belong to the current frame
    InvalidHandle(String),

    /// A pass name is already used in the current frame
    DuplicateName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidHandle(msg) => write!(f, "Invalid handle: {}", msg),
            Error::DuplicateName(msg) => write!(f, "Duplicate name: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build the matching `Error` variant
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("galaxy3d::RenderGraph", InvalidResource,
///     "Resource '{}' not declared", name);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::$variant(message)
    }};
}

/// Log an ERROR message and return early with the matching `Error` variant
///
/// # Example
///
/// ```ignore
/// engine_bail!("galaxy3d::RenderGraph", DuplicateName,
///     "Raster pass '{}' already exists", name);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($($arg:tt)*) => {
        return Err($crate::engine_err!($($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
