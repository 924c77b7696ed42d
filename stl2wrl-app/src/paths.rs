//! Output path derivation.

use std::path::{Path, PathBuf};

/// Extension given to generated scene files.
pub const WRL_EXTENSION: &str = "wrl";

/// Place the `.wrl` next to the input, named after the input file up to its first `.`.
///
/// `parts/bracket.v2.stl` becomes `parts/bracket.wrl`.
pub fn wrl_path_for(stl_path: &Path) -> PathBuf {
    let file_name = stl_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();
    let wrl_name = format!("{}.{}", base, WRL_EXTENSION);

    match stl_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(wrl_name),
        _ => PathBuf::from(wrl_name),
    }
}
