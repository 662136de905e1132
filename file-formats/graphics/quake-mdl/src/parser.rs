//! Parser implementation for MDL files
//!
//! The [`MdlModel`] struct is the primary entry point. Parsing is one
//! sequential pass over the input: header, skin blocks, texture vertex
//! and triangle tables, then the first animation frame. Later frames are
//! deliberately left unread.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{MdlError, Result};
use crate::types::{Frame, MdlHeader, TextureVertex, Triangle};

/// A parsed MDL model
///
/// Holds the header, the geometry tables and the first animation frame.
///
/// # Examples
///
/// ```rust,no_run
/// use quake_mdl::MdlModel;
///
/// let model = MdlModel::load("player.mdl").unwrap();
/// println!("{}", model.header);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MdlModel {
    /// The file header
    pub header: MdlHeader,
    /// Texture-space vertices, one per model vertex
    pub texture_vertices: Vec<TextureVertex>,
    /// Triangle definitions
    pub triangles: Vec<Triangle>,
    /// The first animation frame
    pub frame: Frame,
}

impl MdlModel {
    /// Parses an MDL model from a reader positioned at the start of the file
    ///
    /// Reads the header, skips skin payloads, reads the geometry tables and
    /// the first frame. When the model has more than one frame the
    /// remaining frame bytes are not consumed.
    pub fn parse<R: Read>(reader: &mut R) -> Result<Self> {
        let header = MdlHeader::parse(reader)?;
        log::debug!("parsed header: {header}");

        skip_skins(reader, &header)?;

        let mut texture_vertices = Vec::with_capacity(header.num_verts as usize);
        for _ in 0..header.num_verts {
            texture_vertices.push(TextureVertex::parse(reader)?);
        }

        let mut triangles = Vec::with_capacity(header.num_triangles as usize);
        for _ in 0..header.num_triangles {
            triangles.push(Triangle::parse(reader)?);
        }

        let frame = Frame::parse(reader, header.num_verts)?;
        log::debug!(
            "parsed frame '{}' (first of {} in file)",
            frame.name,
            header.num_frames
        );

        Ok(Self {
            header,
            texture_vertices,
            triangles,
            frame,
        })
    }

    /// Loads and parses an MDL model from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::parse(&mut reader)
    }
}

/// Advances the reader past all skin payloads without decoding pixels
///
/// A skin starts with a type tag. A nonzero tag marks a grouped skin and
/// is followed by a frame count and a display duration; a zero tag is a
/// single skin. Either way, `frame_count * skin_width * skin_height`
/// pixel bytes follow and are skipped.
fn skip_skins<R: Read>(reader: &mut R, header: &MdlHeader) -> Result<()> {
    for i in 0..header.num_skins {
        let skin_type = reader.read_u32::<LittleEndian>()?;
        let frame_count = if skin_type == 0 {
            1
        } else {
            let count = reader.read_u32::<LittleEndian>()?;
            let _duration = reader.read_f32::<LittleEndian>()?;
            count
        };

        let len = u64::from(frame_count)
            * u64::from(header.skin_width)
            * u64::from(header.skin_height);
        let skipped = io::copy(&mut reader.by_ref().take(len), &mut io::sink())?;
        if skipped != len {
            return Err(MdlError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("skin {i} truncated: expected {len} pixel bytes, found {skipped}"),
            )));
        }
        log::debug!("skipped skin {i}: {frame_count} frame(s), {len} bytes");
    }
    Ok(())
}
