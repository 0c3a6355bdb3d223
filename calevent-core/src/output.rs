//! Destination selection and writing of rendered documents.

use std::path::{Component, Path, PathBuf};

use crate::constants::{DEFAULT_FILENAME, ICS_EXTENSION};
use crate::error::{CalEventError, CalEventResult};

/// Compute where a document should be written.
///
/// - directory and filename: `<directory>/<filename>`, joined as given
/// - filename only: `<temp_root>/<filename>`, with `.ics` appended if missing
/// - neither: `<temp_root>/calendar-event.ics`
///
/// A directory without a filename is rejected, as is a filename with a root
/// or prefix component, which would replace the base when joined.
pub fn destination_path(
    filename: Option<&str>,
    directory: Option<&Path>,
    temp_root: &Path,
) -> CalEventResult<PathBuf> {
    let filename = filename.filter(|f| !f.is_empty());

    if let Some(name) = filename {
        check_relative(name)?;
    }

    match (directory, filename) {
        (Some(dir), Some(name)) => Ok(dir.join(name)),
        (Some(dir), None) => Err(CalEventError::Validation(format!(
            "A filename is required when writing to directory {}",
            dir.display()
        ))),
        (None, Some(name)) => Ok(temp_root.join(with_ics_extension(name))),
        (None, None) => Ok(temp_root.join(DEFAULT_FILENAME)),
    }
}

fn check_relative(name: &str) -> CalEventResult<()> {
    let rooted = Path::new(name)
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));

    if rooted {
        return Err(CalEventError::Validation(format!(
            "Filename must be relative, got {}",
            name
        )));
    }

    Ok(())
}

/// Append `.ics` unless the name already ends with it.
pub fn with_ics_extension(name: &str) -> String {
    if name.ends_with(ICS_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, ICS_EXTENSION)
    }
}

/// Write the document to `dest` with a single filesystem call.
pub fn write_document(dest: &Path, content: &str) -> CalEventResult<PathBuf> {
    std::fs::write(dest, content)?;
    tracing::debug!(path = %dest.display(), bytes = content.len(), "Wrote event file");
    Ok(dest.to_path_buf())
}

/// Async counterpart of [`write_document`].
pub async fn write_document_async(dest: &Path, content: &str) -> CalEventResult<PathBuf> {
    tokio::fs::write(dest, content).await?;
    tracing::debug!(path = %dest.display(), bytes = content.len(), "Wrote event file");
    Ok(dest.to_path_buf())
}
