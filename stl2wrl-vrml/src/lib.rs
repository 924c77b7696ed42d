//! stl2wrl VRML Crate
//!
//! Turns a parsed [`stl2wrl_data::Mesh`] into a VRML 2.0 scene with a single
//! deduplicated `IndexedFaceSet` and a default gray material.
//!
//! ## Modules
//!
//! - [`registry`]: point deduplication and index assignment
//! - [`generator`]: geometry building and text output
//! - [`config`]: header, crease angle and material settings
//! - [`constants`]: fixed defaults and format tokens

pub mod config;
pub mod constants;
pub mod generator;
pub mod registry;

pub use config::{Material, VrmlConfig};
pub use generator::{IndexedFaceSet, VrmlGenerator};
pub use registry::PointRegistry;
