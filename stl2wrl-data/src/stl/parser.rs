//! Line-at-a-time ASCII STL state machine

use crate::error::StlError;
use crate::scaling::ScalingFactor;
use crate::types::{Facet, Mesh, Triangle, Vertex};
use glam::DVec3;
use tracing::{debug, warn};

const SOLID_MARKER: &str = "solid";
const FACET_MARKER: &str = "facet normal";
const LOOP_OPENER: &str = "outer loop";
const VERTEX_MARKER: &str = "vertex";

/// Where the parser is inside a facet block.
#[derive(Debug, Clone, PartialEq)]
enum ParseState {
    /// Between facets; only `solid` and `facet normal` lines matter here.
    Idle,
    ExpectLoopOpener {
        normal: Vertex,
    },
    ExpectFirstVertex {
        normal: Vertex,
    },
    ExpectSecondVertex {
        normal: Vertex,
        v0: Vertex,
    },
    ExpectThirdVertex {
        normal: Vertex,
        v0: Vertex,
        v1: Vertex,
    },
}

/// Three numeric tokens following a marker, both as written and as parsed.
struct Triple<'a> {
    tokens: [&'a str; 3],
    values: DVec3,
}

/// Incremental STL parser. Feed it lines in order, then call [`StlParser::finish`].
///
/// Inside a facet block the parser is strict: after `facet normal` it requires
/// an `outer loop` line followed by exactly three `vertex` lines. Anything else
/// in that window is reported as malformed input.
#[derive(Debug)]
pub struct StlParser {
    scaling: ScalingFactor,
    state: ParseState,
    line_number: usize,
    facet_line: usize,
    facets: usize,
}

impl StlParser {
    pub fn new(scaling: ScalingFactor) -> Self {
        Self {
            scaling,
            state: ParseState::Idle,
            line_number: 0,
            facet_line: 0,
            facets: 0,
        }
    }

    /// Number of facets appended so far.
    pub fn facets_parsed(&self) -> usize {
        self.facets
    }

    /// Consume one input line, appending to `mesh` when a facet completes.
    pub fn feed_line(&mut self, mesh: &mut Mesh, line: &str) -> Result<(), StlError> {
        self.line_number += 1;
        let line = line.trim();

        let state = std::mem::replace(&mut self.state, ParseState::Idle);
        self.state = match state {
            ParseState::Idle => self.idle_line(mesh, line)?,
            ParseState::ExpectLoopOpener { normal } => {
                if !line.contains(LOOP_OPENER) {
                    return Err(self.malformed(format!(
                        "expected '{}' after facet at line {}, found '{}'",
                        LOOP_OPENER, self.facet_line, line
                    )));
                }
                ParseState::ExpectFirstVertex { normal }
            }
            ParseState::ExpectFirstVertex { normal } => ParseState::ExpectSecondVertex {
                normal,
                v0: self.vertex_line(line)?,
            },
            ParseState::ExpectSecondVertex { normal, v0 } => ParseState::ExpectThirdVertex {
                normal,
                v0,
                v1: self.vertex_line(line)?,
            },
            ParseState::ExpectThirdVertex { normal, v0, v1 } => {
                let v2 = self.vertex_line(line)?;
                mesh.add_facet(Facet::new(Triangle::new(v0, v1, v2), normal));
                self.facets += 1;
                ParseState::Idle
            }
        };
        Ok(())
    }

    /// Check that the input did not stop in the middle of a facet and return
    /// the number of facets parsed.
    pub fn finish(self) -> Result<usize, StlError> {
        if self.state != ParseState::Idle {
            return Err(self.malformed(format!(
                "input ended inside the facet started at line {}",
                self.facet_line
            )));
        }
        Ok(self.facets)
    }

    fn idle_line(&mut self, mesh: &mut Mesh, line: &str) -> Result<ParseState, StlError> {
        if let Some(name) = solid_name(line) {
            match mesh.name() {
                Some(previous) if previous != name => {
                    warn!("Solid name '{}' replaced by '{}'", previous, name)
                }
                _ => debug!("Solid name: {}", name),
            }
            mesh.set_name(name);
        }

        if line.contains(FACET_MARKER) {
            let normal = self.marked_triple(line, FACET_MARKER)?;
            self.facet_line = self.line_number;
            return Ok(ParseState::ExpectLoopOpener {
                normal: Vertex::from_raw(normal.tokens),
            });
        }

        Ok(ParseState::Idle)
    }

    fn vertex_line(&self, line: &str) -> Result<Vertex, StlError> {
        if !line.contains(VERTEX_MARKER) {
            return Err(self.malformed(format!(
                "expected '{}' inside facet at line {}, found '{}'",
                VERTEX_MARKER, self.facet_line, line
            )));
        }
        let position = self.marked_triple(line, VERTEX_MARKER)?;
        Ok(Vertex::from_scaled(position.values, self.scaling))
    }

    fn marked_triple<'a>(&self, line: &'a str, marker: &str) -> Result<Triple<'a>, StlError> {
        let start = line
            .find(marker)
            .map(|pos| pos + marker.len())
            .ok_or_else(|| self.malformed(format!("missing '{}'", marker)))?;

        let mut rest = line[start..].split_whitespace();
        let mut tokens = [""; 3];
        let mut values = [0.0f64; 3];
        for i in 0..3 {
            let token = rest.next().ok_or_else(|| {
                self.malformed(format!(
                    "'{}' needs 3 numeric values, found {}",
                    marker, i
                ))
            })?;
            values[i] = token.parse().map_err(|_| {
                self.malformed(format!("'{}' after '{}' is not a number", token, marker))
            })?;
            tokens[i] = token;
        }

        Ok(Triple {
            tokens,
            values: DVec3::from_array(values),
        })
    }

    fn malformed(&self, reason: String) -> StlError {
        StlError::MalformedInput {
            line: self.line_number,
            reason,
        }
    }
}

/// The token after the first `solid` that is followed by whitespace, if any.
/// `endsolid <name>` matches as well.
fn solid_name(line: &str) -> Option<&str> {
    line.match_indices(SOLID_MARKER)
        .map(|(pos, _)| &line[pos + SOLID_MARKER.len()..])
        .find(|rest| rest.starts_with(char::is_whitespace))?
        .split_whitespace()
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(parser: &mut StlParser, mesh: &mut Mesh, lines: &[&str]) -> Result<(), StlError> {
        for line in lines {
            parser.feed_line(mesh, line)?;
        }
        Ok(())
    }

    fn facet_lines() -> Vec<&'static str> {
        vec![
            "  facet normal 0 0 1",
            "    outer loop",
            "      vertex 0 0 0",
            "      vertex 10 0 0",
            "      vertex 0 10 0",
            "    endloop",
            "  endfacet",
        ]
    }

    #[test]
    fn test_single_facet() {
        let mut parser = StlParser::new(ScalingFactor::new(10.0).unwrap());
        let mut mesh = Mesh::new();
        feed_all(&mut parser, &mut mesh, &facet_lines()).unwrap();
        assert_eq!(parser.finish().unwrap(), 1);

        let facet = &mesh.facets()[0];
        assert_eq!(facet.normal, Vertex::new("0", "0", "1"));
        let [v0, v1, v2] = facet.triangle.vertices();
        assert_eq!(v0.point_key(), "0.0000000 0.0000000 0.0000000");
        assert_eq!(v1.point_key(), "1.0000000 0.0000000 0.0000000");
        assert_eq!(v2.point_key(), "0.0000000 1.0000000 0.0000000");
    }

    #[test]
    fn test_normal_is_not_scaled() {
        let mut parser = StlParser::new(ScalingFactor::new(100.0).unwrap());
        let mut mesh = Mesh::new();
        let mut lines = facet_lines();
        lines[0] = "facet normal -1.5e0 2 3";
        feed_all(&mut parser, &mut mesh, &lines).unwrap();
        assert_eq!(mesh.facets()[0].normal, Vertex::new("-1.5e0", "2", "3"));
    }

    #[test]
    fn test_signed_and_exponent_vertex_tokens() {
        let mut parser = StlParser::new(ScalingFactor::new(-10.0).unwrap());
        let mut mesh = Mesh::new();
        let mut lines = facet_lines();
        lines[2] = "vertex -2.5e1 +3 1E-3";
        lines[3] = "vertex 0 1e-9 -4e-8";
        feed_all(&mut parser, &mut mesh, &lines).unwrap();

        let [v0, v1, _] = mesh.facets()[0].triangle.vertices();
        assert_eq!(v0.point_key(), "2.5000000 -0.3000000 -0.0001000");
        // Zero and sub-precision values divided by a negative keep their sign.
        assert_eq!(v1.point_key(), "-0.0000000 -0.0000000 0.0000000");
    }

    #[test]
    fn test_solid_name_last_wins() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        feed_all(&mut parser, &mut mesh, &["solid Cube", "endsolid Block"]).unwrap();
        assert_eq!(mesh.name(), Some("Block"));
    }

    #[test]
    fn test_solid_name_detection() {
        assert_eq!(solid_name("solid Cube"), Some("Cube"));
        assert_eq!(solid_name("solid\tpart_01 extra"), Some("part_01"));
        assert_eq!(solid_name("endsolid Cube"), Some("Cube"));
        assert_eq!(solid_name("solid"), None);
        assert_eq!(solid_name("solidworks"), None);
        assert_eq!(solid_name("xsolidy solid Cube"), Some("Cube"));
        assert_eq!(solid_name("solidworks export solid\tBracket"), Some("Bracket"));
        assert_eq!(solid_name("facet normal 0 0 1"), None);
    }

    #[test]
    fn test_structural_lines_ignored_when_idle() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        feed_all(&mut parser, &mut mesh, &["", "endloop", "endfacet", "vertex 1 2 3"]).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(parser.finish().unwrap(), 0);
    }

    #[test]
    fn test_missing_loop_opener_is_malformed() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        let err = feed_all(
            &mut parser,
            &mut mesh,
            &["facet normal 0 0 1", "vertex 0 0 0"],
        )
        .unwrap_err();
        assert!(matches!(err, StlError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_non_vertex_line_in_window_is_malformed() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        let err = feed_all(
            &mut parser,
            &mut mesh,
            &[
                "facet normal 0 0 1",
                "outer loop",
                "vertex 0 0 0",
                "endloop",
            ],
        )
        .unwrap_err();
        assert!(matches!(err, StlError::MalformedInput { line: 4, .. }));
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_too_few_tokens_is_malformed() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        let err = feed_all(&mut parser, &mut mesh, &["facet normal 0 1"]).unwrap_err();
        match err {
            StlError::MalformedInput { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_token_is_malformed() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        let err = feed_all(
            &mut parser,
            &mut mesh,
            &["facet normal 0 0 1", "outer loop", "vertex 0 zero 0"],
        )
        .unwrap_err();
        assert!(matches!(err, StlError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn test_truncated_facet_fails_on_finish() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        feed_all(
            &mut parser,
            &mut mesh,
            &["solid t", "facet normal 0 0 1", "outer loop", "vertex 0 0 0"],
        )
        .unwrap();
        let err = parser.finish().unwrap_err();
        match err {
            StlError::MalformedInput { reason, .. } => assert!(reason.contains("line 2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_facets_parsed_counter() {
        let mut parser = StlParser::new(ScalingFactor::default());
        let mut mesh = Mesh::new();
        let mut lines = facet_lines();
        lines.extend(facet_lines());
        feed_all(&mut parser, &mut mesh, &lines).unwrap();
        assert_eq!(parser.facets_parsed(), 2);
        assert_eq!(mesh.facet_count(), 2);
    }
}
