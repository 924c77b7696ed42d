//! stl2wrl Data Crate
//!
//! ASCII STL parsing and the CPU-side mesh model it produces.
//! This crate knows nothing about the output format; the VRML generator
//! lives in `stl2wrl-vrml`.

pub mod error;
pub mod scaling;
pub mod stl;
pub mod types;

pub use error::StlError;
pub use glam::DVec3;
pub use scaling::ScalingFactor;
pub use stl::{StlParser, parse_into, parse_stl, parse_stl_str};
pub use types::{COORDINATE_PRECISION, Facet, Mesh, Triangle, Vertex};
