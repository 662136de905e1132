//! On-disk structures of the MDL format
//!
//! All fields are stored little-endian. Every structure is read
//! field-by-field with declared byte widths; the wire layout never relies
//! on in-memory struct padding.

use std::fmt;
use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};
use glam::Vec3;

use crate::error::{MdlError, Result};

/// Magic tag at the start of every MDL file (`"IDPO"`)
pub const MDL_MAGIC: [u8; 4] = *b"IDPO";

/// The only MDL format version this crate supports
pub const MDL_VERSION: u32 = 6;

/// Frame type tag for a single simple frame
pub const FRAME_TYPE_SIMPLE: u32 = 0;

/// Length of the fixed-size frame name field in bytes
pub const FRAME_NAME_LEN: usize = 16;

fn read_vec3<R: Read>(reader: &mut R) -> std::io::Result<Vec3> {
    let x = reader.read_f32::<LittleEndian>()?;
    let y = reader.read_f32::<LittleEndian>()?;
    let z = reader.read_f32::<LittleEndian>()?;
    Ok(Vec3::new(x, y, z))
}

/// Fixed-size MDL file header
///
/// The header drives the sizes of every array that follows it. It is
/// immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct MdlHeader {
    /// Format version (always [`MDL_VERSION`] after a successful parse)
    pub version: u32,
    /// Per-axis scale applied to packed vertex coordinates
    pub scale: Vec3,
    /// Per-axis offset applied to packed vertex coordinates
    pub origin: Vec3,
    /// Bounding sphere radius
    pub radius: f32,
    /// Eye position offsets
    pub offsets: Vec3,
    /// Number of texture skins
    pub num_skins: u32,
    /// Skin width in pixels
    pub skin_width: u32,
    /// Skin height in pixels
    pub skin_height: u32,
    /// Number of vertices per frame
    pub num_verts: u32,
    /// Number of triangles
    pub num_triangles: u32,
    /// Number of animation frames
    pub num_frames: u32,
    /// Animation sync type
    pub sync_type: u32,
    /// Model flags
    pub flags: u32,
    /// Average triangle size
    pub size: f32,
}

impl MdlHeader {
    /// Parses the header from a reader positioned at the start of the file
    ///
    /// Fails with [`MdlError::InvalidMagic`] if the 4-byte magic is not
    /// `"IDPO"`, and [`MdlError::UnsupportedVersion`] if the version is
    /// not 6. The diagnostic carries the offending value.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MDL_MAGIC {
            return Err(MdlError::InvalidMagic {
                expected: String::from_utf8_lossy(&MDL_MAGIC).into_owned(),
                found: String::from_utf8_lossy(&magic).into_owned(),
            });
        }

        let version = reader.read_u32::<LittleEndian>()?;
        if version != MDL_VERSION {
            return Err(MdlError::UnsupportedVersion(version));
        }

        Ok(Self {
            version,
            scale: read_vec3(reader)?,
            origin: read_vec3(reader)?,
            radius: reader.read_f32::<LittleEndian>()?,
            offsets: read_vec3(reader)?,
            num_skins: reader.read_u32::<LittleEndian>()?,
            skin_width: reader.read_u32::<LittleEndian>()?,
            skin_height: reader.read_u32::<LittleEndian>()?,
            num_verts: reader.read_u32::<LittleEndian>()?,
            num_triangles: reader.read_u32::<LittleEndian>()?,
            num_frames: reader.read_u32::<LittleEndian>()?,
            sync_type: reader.read_u32::<LittleEndian>()?,
            flags: reader.read_u32::<LittleEndian>()?,
            size: reader.read_f32::<LittleEndian>()?,
        })
    }
}

impl fmt::Display for MdlHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MDL v{} ({} vertices, {} triangles, {} frames, {} skins {}x{})",
            self.version,
            self.num_verts,
            self.num_triangles,
            self.num_frames,
            self.num_skins,
            self.skin_width,
            self.skin_height
        )
    }
}

/// Texture-space vertex, one per model vertex
///
/// `s` and `t` are texel coordinates into the skin, not yet normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureVertex {
    /// Nonzero if the vertex lies on the texture seam
    pub on_seam: u32,
    /// Horizontal texel coordinate
    pub s: u32,
    /// Vertical texel coordinate
    pub t: u32,
}

impl TextureVertex {
    /// Reads a single texture vertex record
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            on_seam: reader.read_u32::<LittleEndian>()?,
            s: reader.read_u32::<LittleEndian>()?,
            t: reader.read_u32::<LittleEndian>()?,
        })
    }

    /// Whether the vertex lies on the texture seam
    pub fn is_on_seam(&self) -> bool {
        self.on_seam != 0
    }
}

/// Triangle definition referencing the vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Nonzero if the triangle faces the front half of the skin
    pub front: u32,
    /// The three vertex indices, 0-based
    pub vertices: [u32; 3],
}

impl Triangle {
    /// Reads a single triangle record
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let front = reader.read_u32::<LittleEndian>()?;
        let mut vertices = [0u32; 3];
        for v in &mut vertices {
            *v = reader.read_u32::<LittleEndian>()?;
        }
        Ok(Self { front, vertices })
    }

    /// Whether the triangle faces the front half of the skin
    pub fn is_front_facing(&self) -> bool {
        self.front != 0
    }
}

/// Compressed per-frame vertex
///
/// Positions are quantized to one byte per axis; the header's scale and
/// origin reconstruct the original float range. The normal is an index
/// into the shared 162-entry unit-normal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedVertex {
    /// Quantized position, one byte per axis
    pub position: [u8; 3],
    /// Index into [`crate::normals::NORMAL_TABLE`]
    pub normal_index: u8,
}

impl PackedVertex {
    /// Reads a single packed vertex record
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf)?;
        Ok(Self {
            position: [buf[0], buf[1], buf[2]],
            normal_index: buf[3],
        })
    }
}

/// A single simple animation frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Frame name, trimmed at the first NUL
    pub name: String,
    /// Bounding box minimum, packed
    pub min: PackedVertex,
    /// Bounding box maximum, packed
    pub max: PackedVertex,
    /// One packed vertex per model vertex
    pub vertices: Vec<PackedVertex>,
}

impl Frame {
    /// Reads one frame record with `num_verts` packed vertices
    ///
    /// Fails with [`MdlError::UnsupportedFrameType`] if the type tag does
    /// not denote a single simple frame. The format also defines grouped
    /// frames carrying several sub-frames with interpolation timing;
    /// decoding those is a known gap, not a silent default.
    pub fn parse<R: Read>(reader: &mut R, num_verts: u32) -> Result<Self> {
        let frame_type = reader.read_u32::<LittleEndian>()?;
        if frame_type != FRAME_TYPE_SIMPLE {
            return Err(MdlError::UnsupportedFrameType(frame_type));
        }

        let min = PackedVertex::parse(reader)?;
        let max = PackedVertex::parse(reader)?;

        let mut name_buf = [0u8; FRAME_NAME_LEN];
        reader.read_exact(&mut name_buf)?;
        let name_len = memchr::memchr(0, &name_buf).unwrap_or(FRAME_NAME_LEN);
        let name = String::from_utf8_lossy(&name_buf[..name_len]).into_owned();

        let mut vertices = Vec::with_capacity(num_verts as usize);
        for _ in 0..num_verts {
            vertices.push(PackedVertex::parse(reader)?);
        }

        Ok(Self {
            name,
            min,
            max,
            vertices,
        })
    }
}
