use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Write a transcript as a plain-text file for download/sharing.
///
/// The file lands in `dir` (created if missing) under an epoch-stamped
/// name so successive exports don't clobber each other.
pub fn write_transcript(dir: &Path, transcript: &str) -> Result<PathBuf, std::io::Error> {
    fs::create_dir_all(dir)?;
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    // Avoid collisions when exporting more than once per second
    let mut path = dir.join(format!("transcript-{stamp}.txt"));
    let mut suffix = 1;
    while path.exists() {
        path = dir.join(format!("transcript-{stamp}-{suffix}.txt"));
        suffix += 1;
    }

    fs::write(&path, transcript)?;
    log::info!("Transcript exported to {}", path.display());
    Ok(path)
}
