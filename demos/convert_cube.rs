//! Convert an in-memory unit cube (in millimetres) to inches and print the scene.
//!
//! The cube has 12 facets and 36 triangle corners but only 8 distinct points.

use stl2wrl::{ScalingFactor, convert};
use tracing::info;

/// Corner positions of a 25.4 mm cube.
const CORNERS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [25.4, 0.0, 0.0],
    [25.4, 25.4, 0.0],
    [0.0, 25.4, 0.0],
    [0.0, 0.0, 25.4],
    [25.4, 0.0, 25.4],
    [25.4, 25.4, 25.4],
    [0.0, 25.4, 25.4],
];

/// Two triangles per side, counter-clockwise seen from outside, with the side normal.
const FACES: [([usize; 3], [i32; 3]); 12] = [
    ([0, 3, 2], [0, 0, -1]),
    ([0, 2, 1], [0, 0, -1]),
    ([4, 5, 6], [0, 0, 1]),
    ([4, 6, 7], [0, 0, 1]),
    ([0, 1, 5], [0, -1, 0]),
    ([0, 5, 4], [0, -1, 0]),
    ([3, 7, 6], [0, 1, 0]),
    ([3, 6, 2], [0, 1, 0]),
    ([0, 4, 7], [-1, 0, 0]),
    ([0, 7, 3], [-1, 0, 0]),
    ([1, 2, 6], [1, 0, 0]),
    ([1, 6, 5], [1, 0, 0]),
];

fn cube_stl() -> String {
    let mut stl = String::from("solid cube\n");
    for (corners, normal) in FACES {
        stl.push_str(&format!(
            "  facet normal {} {} {}\n    outer loop\n",
            normal[0], normal[1], normal[2]
        ));
        for corner in corners {
            let [x, y, z] = CORNERS[corner];
            stl.push_str(&format!("      vertex {} {} {}\n", x, y, z));
        }
        stl.push_str("    endloop\n  endfacet\n");
    }
    stl.push_str("endsolid cube\n");
    stl
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let stl = cube_stl();
    let mut wrl = Vec::new();
    let summary = convert(stl.as_bytes(), &mut wrl, ScalingFactor::new(25.4)?)?;

    info!(
        "{:?}: {} facets, {} points, {} index tokens",
        summary.name, summary.facets, summary.points, summary.indices
    );
    println!("{}", String::from_utf8(wrl)?);
    Ok(())
}
