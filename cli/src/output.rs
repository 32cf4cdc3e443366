//! Files written after a successful run.

use std::path::{Path, PathBuf};

use session::{Preview, Slot};

use crate::controller::CliSession;
use crate::error::CliError;

/// Save the backend previews as `<slot>_preview.png` and the GeoJSON panel's
/// download under its offered name. Returns the paths written.
///
/// # Errors
///
/// Fails if `dir` cannot be created, a file cannot be written, or a preview
/// is not valid base64.
pub fn write_outputs(session: &CliSession, dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::WriteFile {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for slot in Slot::ALL {
        if let Some(Preview::Backend(image)) = session.slot(slot).preview() {
            let path = dir.join(format!("{}_preview.png", slot.field_name()));
            write(&path, &image.decode()?)?;
            written.push(path);
        }
    }
    if let Some(panel) = session.geojson() {
        let download = panel.download();
        let path = dir.join(download.file_name);
        write(&path, download.body.as_bytes())?;
        written.push(path);
    }
    Ok(written)
}

fn write(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "output written");
    Ok(())
}
