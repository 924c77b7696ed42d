//! Core mesh types produced by the STL parser.
//!
//! Coordinates are kept as formatted decimal text rather than floats. Two
//! vertices are the same point exactly when their text matches, which is what
//! the VRML generator deduplicates on.

use crate::scaling::ScalingFactor;
use glam::DVec3;

/// Number of fractional digits written for every scaled coordinate.
pub const COORDINATE_PRECISION: usize = 7;

/// A point in 3D space, stored as its formatted components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    /// X component text.
    pub x: String,
    /// Y component text.
    pub y: String,
    /// Z component text.
    pub z: String,
}

impl Vertex {
    /// Create a vertex from already formatted components.
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Keep the source tokens verbatim. Used for facet normals, which are never scaled.
    pub fn from_raw(tokens: [&str; 3]) -> Self {
        Self::new(tokens[0], tokens[1], tokens[2])
    }

    /// Divide every component by the scaling divisor and format the quotient
    /// to [`COORDINATE_PRECISION`] decimals.
    pub fn from_scaled(position: DVec3, scaling: ScalingFactor) -> Self {
        let scaled = position / scaling.divisor();
        Self::new(
            format_coordinate(scaled.x),
            format_coordinate(scaled.y),
            format_coordinate(scaled.z),
        )
    }

    /// The `"x y z"` text used both as the VRML point entry and as the dedup key.
    pub fn point_key(&self) -> String {
        format!("{} {} {}", self.x, self.y, self.z)
    }
}

fn format_coordinate(value: f64) -> String {
    format!("{:.*}", COORDINATE_PRECISION, value)
}

/// Three vertices in winding order.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Vertex; 3],
}

impl Triangle {
    /// Create a triangle, preserving the given vertex order.
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }
}

/// One STL facet: a triangle and the surface normal declared for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    /// Triangle corners in parse order.
    pub triangle: Triangle,
    /// Normal as written in the file (unscaled, not used for output).
    pub normal: Vertex,
}

impl Facet {
    pub fn new(triangle: Triangle, normal: Vertex) -> Self {
        Self { triangle, normal }
    }
}

/// An ordered list of facets plus the solid's name, if one was declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    name: Option<String>,
    facets: Vec<Facet>,
}

impl Mesh {
    /// Create an empty, unnamed mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the solid name. The last declaration in a file wins.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Append a facet. Facet order is the emission order of the output.
    pub fn add_facet(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Number of triangle corners, counting shared corners once per facet.
    pub fn vertex_count(&self) -> usize {
        self.facets.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}
