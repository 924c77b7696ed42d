//! stl2wrl
//!
//! Converts ASCII STL meshes into VRML 2.0 scenes with a single deduplicated
//! `IndexedFaceSet`.
//!
//! The pipeline runs in one direction only: the input stream is parsed to
//! completion into a [`Mesh`], then the whole mesh is handed to the
//! [`VrmlGenerator`]. Nothing is written to the output unless parsing
//! succeeded.
//!
//! ```
//! use stl2wrl::{ScalingFactor, convert_str};
//!
//! let stl = "solid tri\nfacet normal 0 0 1\nouter loop\n\
//!            vertex 0 0 0\nvertex 2 0 0\nvertex 0 2 0\nendloop\nendfacet\nendsolid tri\n";
//! let wrl = convert_str(stl, ScalingFactor::new(2.0).unwrap()).unwrap();
//! assert!(wrl.contains("coordIndex [0, 1, 2, -1]"));
//! ```

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::info;

pub use stl2wrl_data::{Mesh, ScalingFactor, StlError, parse_into};
pub use stl2wrl_vrml::{IndexedFaceSet, Material, VrmlConfig, VrmlGenerator};

/// Errors that can abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("STL error: {0}")]
    Parse(#[from] StlError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Solid name declared in the input, if any.
    pub name: Option<String>,
    pub facets: usize,
    /// Distinct points written to the coordinate list.
    pub points: usize,
    /// `coordIndex` tokens, terminators included.
    pub indices: usize,
}

/// Parse `input` completely, then write the VRML scene to `output`.
pub fn convert<R: BufRead, W: Write>(
    input: R,
    output: W,
    scaling: ScalingFactor,
) -> Result<ConversionSummary, ConvertError> {
    convert_with(input, output, scaling, &VrmlGenerator::default())
}

/// [`convert`] with a caller supplied generator.
#[tracing::instrument(skip_all, fields(divisor = %scaling))]
pub fn convert_with<R: BufRead, W: Write>(
    input: R,
    output: W,
    scaling: ScalingFactor,
    generator: &VrmlGenerator,
) -> Result<ConversionSummary, ConvertError> {
    let mut mesh = Mesh::new();
    parse_into(input, &mut mesh, scaling)?;

    let faces = generator.build(&mesh);
    generator.write_faces(&faces, output)?;

    let summary = ConversionSummary {
        name: mesh.name().map(str::to_string),
        facets: mesh.facet_count(),
        points: faces.point_count(),
        indices: faces.coord_index.len(),
    };
    info!(
        "Converted {} facets into {} points",
        summary.facets, summary.points
    );
    Ok(summary)
}

/// Convert STL text held in memory and return the VRML text.
pub fn convert_str(stl: &str, scaling: ScalingFactor) -> Result<String, ConvertError> {
    let mut output = Vec::new();
    convert(stl.as_bytes(), &mut output, scaling)?;
    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
