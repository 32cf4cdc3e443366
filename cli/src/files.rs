//! Local image selection.
//!
//! A picked path becomes a `SelectedFile<PathBuf>` with its media type
//! guessed from the extension. Previewable files get a `file://` URL so the
//! terminal can point at them before the backend answers.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use std::path::{Path, PathBuf};

use session::{PreviewHandle, SelectedFile};

use crate::error::CliError;

/// `file://` reference to a selected image on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalPreview {
    url: String,
}

impl LocalPreview {
    /// Build a preview for `file`, or `None` if its path cannot be resolved.
    #[must_use]
    pub fn for_file(file: &SelectedFile<PathBuf>) -> Option<Self> {
        let absolute = std::fs::canonicalize(&file.file).ok()?;
        Some(Self {
            url: format!("file://{}", absolute.display()),
        })
    }
}

impl PreviewHandle for LocalPreview {
    fn url(&self) -> &str {
        &self.url
    }
}

/// Stat `path` and describe it the way a browser file picker would.
///
/// # Errors
///
/// Returns [`CliError::ReadFile`] if `path` does not name a readable file.
pub fn pick(path: &Path) -> Result<SelectedFile<PathBuf>, CliError> {
    let metadata = std::fs::metadata(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(CliError::ReadFile {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    let display_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    let media_type = mime_guess::from_path(path).first_or_octet_stream().essence_str().to_owned();
    Ok(SelectedFile::new(path.to_path_buf(), display_name, media_type))
}
