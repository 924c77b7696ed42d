//! Streaming STL entry points

use crate::error::StlError;
use crate::scaling::ScalingFactor;
use crate::stl::StlParser;
use crate::types::Mesh;
use std::io::BufRead;
use tracing::{debug, info, warn};

/// Stream every line of `reader` into `mesh`, scaling vertex coordinates by `scaling`.
///
/// Stops at the first malformed line. Facets parsed before the failure stay in
/// `mesh`, so callers that need all-or-nothing behaviour should parse into a
/// fresh mesh and drop it on error.
#[tracing::instrument(skip_all, fields(divisor = %scaling))]
pub fn parse_into<R: BufRead>(
    reader: R,
    mesh: &mut Mesh,
    scaling: ScalingFactor,
) -> Result<(), StlError> {
    let mut parser = StlParser::new(scaling);
    for line in reader.lines() {
        if let Err(e) = parser.feed_line(mesh, &line?) {
            warn!("STL parsing stopped after {} facets", parser.facets_parsed());
            return Err(e);
        }
    }
    let facets = parser.finish()?;

    info!(
        "STL parsed: {} facets, solid '{}'",
        facets,
        mesh.name().unwrap_or("")
    );
    Ok(())
}

/// Parse a complete STL stream into a new mesh.
pub fn parse_stl<R: BufRead>(reader: R, scaling: ScalingFactor) -> Result<Mesh, StlError> {
    let mut mesh = Mesh::new();
    parse_into(reader, &mut mesh, scaling)?;
    debug!("Mesh holds {} triangle corners", mesh.vertex_count());
    Ok(mesh)
}

/// Parse STL text already held in memory.
pub fn parse_stl_str(text: &str, scaling: ScalingFactor) -> Result<Mesh, StlError> {
    parse_stl(text.as_bytes(), scaling)
}
