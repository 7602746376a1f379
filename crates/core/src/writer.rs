use crate::error::SummaryError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::info;

pub const SUMMARY_SUFFIX: &str = "_summary.txt";

/// `<dir>/<stem>_summary.txt`, where `<stem>` drops only the final extension.
/// The stem is kept as raw OS bytes, so non-UTF-8 names map one-to-one.
pub fn summary_output_path(output_dir: &Path, source: &Path) -> Result<PathBuf, SummaryError> {
    let stem = source
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| SummaryError::InvalidPath(source.display().to_string()))?;

    let mut name = stem.to_os_string();
    name.push(SUMMARY_SUFFIX);
    Ok(output_dir.join(name))
}

/// Creates or truncates `path` and writes `summary` as UTF-8.
pub async fn write_summary(summary: &str, path: &Path) -> Result<(), SummaryError> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(summary.as_bytes()).await?;
    file.flush().await?;
    info!(path = %path.display(), "summary saved");
    Ok(())
}
