//! Reading user-supplied files from disk.

use std::path::Path;

use anyhow::Context;
use lumen_core::media::MediaAsset;

/// Display name recorded in history: the file name without its directory.
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Read an upload into a [`MediaAsset`], inferring its content type from the extension.
pub fn load_asset(path: &Path) -> anyhow::Result<MediaAsset> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = display_name(path);
    let content_type = MediaAsset::content_type_for(&name).map(str::to_string);
    Ok(MediaAsset::new(name, content_type, bytes))
}

/// Read a document's text. Invalid UTF-8 is replaced rather than rejected.
pub fn load_text(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
