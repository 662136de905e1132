//! Parser and Wavefront OBJ converter for Quake MDL model files.
//!
//! MDL (`"IDPO"`, version 6) is a fixed-layout, little-endian triangle
//! mesh format with embedded texture coordinates and per-frame quantized
//! vertex data. This crate decodes the format and remaps its geometry
//! into OBJ's per-corner attribute addressing, including seam-aware
//! texture coordinate duplication, winding reversal and 1-based index
//! conversion.
//!
//! Only the first animation frame is converted; grouped frames and skin
//! pixel decoding are out of scope.
//!
//! # Examples
//!
//! ```no_run
//! use quake_mdl::{MdlModel, ObjMesh, NORMAL_TABLE};
//!
//! let model = MdlModel::load("player.mdl").unwrap();
//! let mesh = ObjMesh::from_model(&model, "player").unwrap();
//!
//! let mut obj = Vec::new();
//! mesh.write_obj(&mut obj, &NORMAL_TABLE).unwrap();
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod convert;
pub mod error;
pub mod normals;
pub mod parser;
pub mod types;

pub use convert::{Face, FaceCorner, ObjMesh};
pub use error::{MdlError, Result};
pub use normals::NORMAL_TABLE;
pub use parser::MdlModel;
pub use types::{Frame, MdlHeader, PackedVertex, TextureVertex, Triangle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
