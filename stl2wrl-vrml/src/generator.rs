//! Indexed geometry building and VRML text output

use crate::config::VrmlConfig;
use crate::constants::{FACE_TERMINATOR, LIST_SEPARATOR, MATERIAL_DEF_NAME, VRML_SIGNATURE};
use crate::registry::PointRegistry;
use std::fmt;
use std::io::{self, Write as _};
use stl2wrl_data::Mesh;
use tracing::debug;

/// Deduplicated geometry for one `IndexedFaceSet` node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedFaceSet {
    /// Three point indices per face followed by [`FACE_TERMINATOR`].
    pub coord_index: Vec<i64>,
    /// `"x y z"` entries in first-seen order.
    pub points: Vec<String>,
}

impl IndexedFaceSet {
    pub fn face_count(&self) -> usize {
        self.coord_index
            .iter()
            .filter(|&&index| index == FACE_TERMINATOR)
            .count()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// Renders meshes as VRML 2.0 text.
#[derive(Debug, Clone, Default)]
pub struct VrmlGenerator {
    config: VrmlConfig,
}

impl VrmlGenerator {
    pub fn new(config: VrmlConfig) -> Self {
        Self { config }
    }

    /// Walk facets in order and assign every distinct point an index.
    #[tracing::instrument(skip_all, fields(facets = mesh.facet_count()))]
    pub fn build(&self, mesh: &Mesh) -> IndexedFaceSet {
        let mut registry = PointRegistry::new();
        let mut coord_index = Vec::with_capacity(mesh.facet_count() * 4);

        for facet in mesh.facets() {
            for vertex in facet.triangle.vertices() {
                let index = registry.insert(vertex.point_key());
                coord_index.push(index as i64);
            }
            coord_index.push(FACE_TERMINATOR);
        }

        let faces = IndexedFaceSet {
            coord_index,
            points: registry.into_points(),
        };
        debug!(
            "Indexed {} faces ({} corners) into {} unique points",
            faces.face_count(),
            mesh.vertex_count(),
            faces.point_count()
        );
        faces
    }

    /// Produce the complete VRML document for `mesh`.
    pub fn generate(&self, mesh: &Mesh) -> String {
        self.render(&self.build(mesh))
    }

    /// Render already built geometry.
    pub fn render(&self, faces: &IndexedFaceSet) -> String {
        self.document(faces).to_string()
    }

    /// Write the document for already built geometry to `writer`.
    pub fn write_faces<W: io::Write>(
        &self,
        faces: &IndexedFaceSet,
        mut writer: W,
    ) -> io::Result<()> {
        write!(writer, "{}", self.document(faces))?;
        writer.flush()
    }

    /// Generate the document for `mesh` and write it to `writer`.
    pub fn write_to<W: io::Write>(&self, mesh: &Mesh, writer: W) -> io::Result<()> {
        self.write_faces(&self.build(mesh), writer)
    }

    fn document<'a>(&'a self, faces: &'a IndexedFaceSet) -> VrmlDocument<'a> {
        VrmlDocument {
            config: &self.config,
            faces,
        }
    }
}

/// One complete scene: header, material and the indexed geometry.
struct VrmlDocument<'a> {
    config: &'a VrmlConfig,
    faces: &'a IndexedFaceSet,
}

impl fmt::Display for VrmlDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n#{}\n\n", VRML_SIGNATURE, self.config.header_comment)?;
        self.config.material.write_shape(f)?;

        let coord_index = self
            .faces
            .coord_index
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        let points = self.faces.points.join(LIST_SEPARATOR);

        write!(
            f,
            "\nShape {{\n\tgeometry IndexedFaceSet {{\n\t\tcreaseAngle {:.2} coordIndex [{}]\n",
            self.config.crease_angle, coord_index
        )?;
        write!(
            f,
            "\t\tcoord Coordinate {{\n\t\t\tpoint [\n{}\n\t\t\t]\n\t\t}}\n\t}}\n",
            points
        )?;
        write!(
            f,
            "\tappearance Appearance{{material USE {}}}\n}}",
            MATERIAL_DEF_NAME
        )
    }
}
