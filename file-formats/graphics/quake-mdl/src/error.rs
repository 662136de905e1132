//! Error handling for MDL parsing and conversion

use std::io;
use thiserror::Error;

/// Errors that can occur when working with MDL files
#[derive(Debug, Error)]
pub enum MdlError {
    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic value in the file header
    #[error("Invalid magic value: expected '{expected}', found '{found}'")]
    InvalidMagic {
        /// The expected magic value
        expected: String,
        /// The actual magic value found
        found: String,
    },

    /// Unsupported MDL version
    #[error("Unsupported MDL version: {0} (only version 6 is supported)")]
    UnsupportedVersion(u32),

    /// Grouped animation frames are not supported
    #[error("Unsupported frame type: {0} (only simple frames are supported)")]
    UnsupportedFrameType(u32),

    /// A triangle references a vertex outside the model's vertex array
    #[error("Triangle vertex index {index} out of range (model has {count} vertices)")]
    VertexIndexOutOfRange {
        /// The offending vertex index
        index: u32,
        /// Number of vertices in the model
        count: u32,
    },

    /// A vertex references a normal outside the precomputed normal table
    #[error("Normal index {index} out of range (table has {table_len} entries)")]
    NormalIndexOutOfRange {
        /// The offending normal index
        index: u8,
        /// Number of entries in the normal table
        table_len: usize,
    },
}

/// Type alias for Results from MDL operations
pub type Result<T> = std::result::Result<T, MdlError>;
