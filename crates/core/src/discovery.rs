use crate::error::SummaryError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

fn has_pdf_extension(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Collects regular `.pdf` files under `folder`, sorted by path.
///
/// A missing or non-directory `folder` is an error. Entries below it that
/// cannot be read are logged and left out.
pub fn discover_pdf_files(folder: &Path) -> Result<Vec<PathBuf>, SummaryError> {
    if !folder.is_dir() {
        return Err(SummaryError::NotADirectory(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for item in WalkDir::new(folder) {
        let entry = match item {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 => return Err(error.into()),
            Err(error) => {
                let path = error.path().map(|path| path.display().to_string()).unwrap_or_default();
                warn!(path = %path, error = %error, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && has_pdf_extension(&entry) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(folder = %folder.display(), found = files.len(), "pdf discovery finished");
    Ok(files)
}
