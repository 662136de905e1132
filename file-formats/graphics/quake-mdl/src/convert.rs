//! Conversion of parsed MDL data into Wavefront OBJ geometry
//!
//! This is where the source format's compact encoding is reconciled with
//! OBJ's explicit per-corner attribute addressing: packed positions are
//! scaled into model space with the axes remapped to Y-up, the texture
//! coordinate table is doubled so back-facing seam vertices can sample
//! the shifted half of the skin atlas, triangle winding is reversed, and
//! all position/texcoord indices are converted to 1-based form.

use std::io::Write;

use glam::{Vec2, Vec3};

use crate::error::{MdlError, Result};
use crate::normals::NORMAL_TABLE;
use crate::parser::MdlModel;

/// One corner of an OBJ face
///
/// `position` and `texcoord` are 1-based per OBJ convention. `normal` is
/// the raw 0-based index into the normal table, deliberately left
/// unshifted: consumers of these files depend on that numbering, so the
/// off-by-one is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    /// 1-based index into the position list
    pub position: u32,
    /// 1-based index into the texture coordinate list
    pub texcoord: u32,
    /// 0-based index into the normal table
    pub normal: u32,
}

/// A triangular OBJ face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// The three corners in emission order
    pub corners: [FaceCorner; 3],
}

/// Geometry remapped for OBJ output
#[derive(Debug, Clone, PartialEq)]
pub struct ObjMesh {
    /// Object and material name, typically the input file stem
    pub name: String,
    /// One model-space position per vertex
    pub positions: Vec<Vec3>,
    /// `2 * num_verts` texture coordinates: the plain set followed by the
    /// seam-duplicated set shifted by half the skin width
    pub texcoords: Vec<Vec2>,
    /// One face per source triangle
    pub faces: Vec<Face>,
}

impl ObjMesh {
    /// Remaps a parsed model's first frame into OBJ geometry
    ///
    /// Fails with [`MdlError::VertexIndexOutOfRange`] if a triangle
    /// references a vertex beyond the model's vertex count, and with
    /// [`MdlError::NormalIndexOutOfRange`] if a packed vertex indexes past
    /// the 162-entry normal table.
    pub fn from_model(model: &MdlModel, name: &str) -> Result<Self> {
        let header = &model.header;
        let num_verts = header.num_verts;

        let mut positions = Vec::with_capacity(num_verts as usize);
        for vertex in &model.frame.vertices {
            if usize::from(vertex.normal_index) >= NORMAL_TABLE.len() {
                return Err(MdlError::NormalIndexOutOfRange {
                    index: vertex.normal_index,
                    table_len: NORMAL_TABLE.len(),
                });
            }
            let p = vertex.position;
            // Dequantize and remap Quake's Z-up axes to OBJ's Y-up
            // convention with X mirrored.
            positions.push(Vec3::new(
                -header.scale.x * f32::from(p[0]) - header.origin.x,
                header.scale.z * f32::from(p[2]) + header.origin.z,
                header.scale.y * f32::from(p[1]) + header.origin.y,
            ));
        }

        let skin_width = header.skin_width as f32;
        let skin_height = header.skin_height as f32;
        let mut texcoords = Vec::with_capacity(2 * num_verts as usize);
        for st in &model.texture_vertices {
            texcoords.push(Vec2::new(
                st.s as f32 / skin_width,
                1.0 - st.t as f32 / skin_height,
            ));
        }
        for st in &model.texture_vertices {
            // Seam copy: shifted right by half the skin width. The
            // halving is integer division.
            texcoords.push(Vec2::new(
                (st.s + header.skin_width / 2) as f32 / skin_width,
                1.0 - st.t as f32 / skin_height,
            ));
        }

        let mut faces = Vec::with_capacity(model.triangles.len());
        for triangle in &model.triangles {
            let mut uv = [0u32; 3];
            for (slot, &v) in uv.iter_mut().zip(&triangle.vertices) {
                if v >= num_verts {
                    return Err(MdlError::VertexIndexOutOfRange {
                        index: v,
                        count: num_verts,
                    });
                }
                *slot = v;
                if !triangle.is_front_facing() && model.texture_vertices[v as usize].is_on_seam() {
                    *slot = v + num_verts;
                }
            }

            let normal = |k: usize| {
                u32::from(model.frame.vertices[triangle.vertices[k] as usize].normal_index)
            };
            // OBJ expects the opposite winding, so corners go out in
            // (0, 2, 1) order. The normal column keeps the source
            // (0, 1, 2) order; emitted files have always been laid out
            // this way and it stays the contract.
            faces.push(Face {
                corners: [
                    FaceCorner {
                        position: triangle.vertices[0] + 1,
                        texcoord: uv[0] + 1,
                        normal: normal(0),
                    },
                    FaceCorner {
                        position: triangle.vertices[2] + 1,
                        texcoord: uv[2] + 1,
                        normal: normal(1),
                    },
                    FaceCorner {
                        position: triangle.vertices[1] + 1,
                        texcoord: uv[1] + 1,
                        normal: normal(2),
                    },
                ],
            });
        }

        log::debug!(
            "remapped '{}': {} positions, {} texcoords, {} faces",
            name,
            positions.len(),
            texcoords.len(),
            faces.len()
        );

        Ok(Self {
            name: name.to_string(),
            positions,
            texcoords,
            faces,
        })
    }

    /// Renders the OBJ document
    ///
    /// `normals` is the static unit-normal table to embed; every model
    /// emits the same 162 `vn` lines. Field order: object name, material
    /// references, positions, normals, texture coordinates, faces.
    pub fn write_obj<W: Write>(&self, writer: &mut W, normals: &[[f32; 3]]) -> Result<()> {
        writeln!(writer, "o {}", self.name)?;
        writeln!(writer, "mtllib {}.mtl", self.name)?;
        writeln!(writer, "usemtl {}", self.name)?;
        for p in &self.positions {
            writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
        }
        for n in normals {
            writeln!(writer, "vn {:9.6} {:9.6} {:9.6}", n[0], n[1], n[2])?;
        }
        for t in &self.texcoords {
            writeln!(writer, "vt {} {}", t.x, t.y)?;
        }
        for face in &self.faces {
            let [a, b, c] = face.corners;
            writeln!(
                writer,
                "f {}/{}/{} {}/{}/{} {}/{}/{}",
                a.position,
                a.texcoord,
                a.normal,
                b.position,
                b.texcoord,
                b.normal,
                c.position,
                c.texcoord,
                c.normal
            )?;
        }
        Ok(())
    }

    /// Renders the companion MTL document
    ///
    /// A single material block with fixed lighting constants and a diffuse
    /// map reference to `<name>.jpg`.
    pub fn write_mtl<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "newmtl {}", self.name)?;
        writeln!(writer, "Ka 1.000000 1.000000 1.000000")?;
        writeln!(writer, "Kd 1.000000 1.000000 1.000000")?;
        writeln!(writer, "Ks 0.000000 0.000000 0.000000")?;
        writeln!(writer, "Tr 1.000000")?;
        writeln!(writer, "illum 1")?;
        writeln!(writer, "Ns 0.000000")?;
        writeln!(writer, "map_Kd {}.jpg", self.name)?;
        Ok(())
    }
}
