//! Generator configuration: header text, crease angle and the shared material.

use crate::constants::*;
use std::fmt::{self, Write};

/// VRML `Material` node fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient_intensity: f32,
    /// RGB, 0-1 range.
    pub diffuse_color: [f32; 3],
    /// RGB, 0-1 range.
    pub specular_color: [f32; 3],
    /// RGB, 0-1 range.
    pub emissive_color: [f32; 3],
    pub shininess: f32,
    pub transparency: f32,
}

impl Material {
    /// Write the appearance-only `Shape` that `DEF`ines this material.
    pub(crate) fn write_shape(&self, out: &mut impl Write) -> fmt::Result {
        write!(
            out,
            "Shape {{\n\tappearance Appearance {{material DEF {} Material {{\n",
            MATERIAL_DEF_NAME
        )?;
        writeln!(out, "\t\tambientIntensity {}", scalar(self.ambient_intensity))?;
        writeln!(out, "\t\tdiffuseColor {}", color(self.diffuse_color))?;
        writeln!(out, "\t\tspecularColor {}", color(self.specular_color))?;
        writeln!(out, "\t\temissiveColor {}", color(self.emissive_color))?;
        writeln!(out, "\t\tshininess {}", scalar(self.shininess))?;
        writeln!(out, "\t\ttransparency {}", scalar(self.transparency))?;
        out.write_str("\t\t}\n\t}\n}")
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient_intensity: DEFAULT_AMBIENT_INTENSITY,
            diffuse_color: DEFAULT_DIFFUSE_COLOR,
            specular_color: DEFAULT_SPECULAR_COLOR,
            emissive_color: DEFAULT_EMISSIVE_COLOR,
            shininess: DEFAULT_SHININESS,
            transparency: DEFAULT_TRANSPARENCY,
        }
    }
}

/// Shortest round-trip text that always carries a decimal point (`0.0`, `0.45`).
fn scalar(value: f32) -> String {
    format!("{:?}", value)
}

fn color(rgb: [f32; 3]) -> String {
    format!("{} {} {}", scalar(rgb[0]), scalar(rgb[1]), scalar(rgb[2]))
}

/// Everything in the output besides the geometry itself.
#[derive(Debug, Clone, PartialEq)]
pub struct VrmlConfig {
    /// Comment on the line after the VRML signature, without the leading `#`.
    pub header_comment: String,
    /// Written with two decimals.
    pub crease_angle: f32,
    pub material: Material,
}

impl Default for VrmlConfig {
    fn default() -> Self {
        Self {
            header_comment: DEFAULT_HEADER_COMMENT.to_string(),
            crease_angle: DEFAULT_CREASE_ANGLE,
            material: Material::default(),
        }
    }
}
