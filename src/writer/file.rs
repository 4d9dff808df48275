//! Write `{name}.lua` into an output directory; the "download" sink.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXTENSION: &str = "lua";

/// File name for a given output name. The name is used unchanged.
pub fn file_name(output_name: &str) -> String {
    format!("{output_name}.{EXTENSION}")
}

/// Writes `script` to `out_dir/{output_name}.lua` and returns the path.
///
/// Names that cannot denote a single file inside `out_dir` are refused,
/// never rewritten.
pub fn emit(script: &str, output_name: &str, out_dir: &Path) -> Result<PathBuf> {
    if output_name.is_empty() || output_name == "." || output_name == ".." {
        bail!("output name `{output_name}` cannot be used as a file name");
    }
    if output_name.contains(['/', '\\', '\0']) {
        bail!("output name `{output_name}` contains a path separator");
    }

    fs::create_dir_all(out_dir).with_context(|| format!("Creating {}", out_dir.display()))?;
    let path = out_dir.join(file_name(output_name));
    fs::write(&path, script).with_context(|| format!("Writing {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), script.len());
    Ok(path)
}
