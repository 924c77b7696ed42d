//! Constants used by the VRML generator.

/// First line of every VRML 2.0 file.
pub const VRML_SIGNATURE: &str = "#VRML V2.0 utf8";

/// Comment written on the second line.
pub const DEFAULT_HEADER_COMMENT: &str = "Generated with stl2wrl - Bradley Boccuzzi 2020-2025";

/// Crease angle (radians) handed to the viewer for smoothing decisions.
pub const DEFAULT_CREASE_ANGLE: f32 = 0.5;

/// Index value closing each face run in `coordIndex`.
pub const FACE_TERMINATOR: i64 = -1;

/// Separator between `coordIndex` tokens and between `point` entries.
pub const LIST_SEPARATOR: &str = ", ";

/// Name the material is `DEF`ined under and later `USE`d by the geometry shape.
pub const MATERIAL_DEF_NAME: &str = "MAT";

// Default gray material.
pub const DEFAULT_AMBIENT_INTENSITY: f32 = 0.45;
pub const DEFAULT_DIFFUSE_COLOR: [f32; 3] = [0.8, 0.8, 0.7];
pub const DEFAULT_SPECULAR_COLOR: [f32; 3] = [0.19, 0.28, 0.3];
pub const DEFAULT_EMISSIVE_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
pub const DEFAULT_SHININESS: f32 = 0.85;
pub const DEFAULT_TRANSPARENCY: f32 = 0.0;
