use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::MODEL_CACHE_APP_DIR;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("failed to create cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write archive to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to extract model archive: {0}")]
    Extract(#[source] zip::result::ZipError),
    #[error("archive did not contain expected bundle directory '{0}'")]
    MissingBundle(String),
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Resolve a model bundle directory by name, checking local locations
/// before downloading.
///
/// Resolution order:
/// 1. User cache directory (platform-specific)
/// 2. Bundled path (for development / pre-fetched models)
/// 3. Download the zip archive and unpack it into the cache
pub fn resolve(
    name: &str,
    url: &str,
    bundled_dir: Option<&Path>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, ModelResolveError> {
    // 1. Check user cache
    let cache_dir = model_cache_dir()?;
    let cached_path = cache_dir.join(name);
    if cached_path.is_dir() {
        return Ok(cached_path);
    }

    // 2. Check bundled path
    if let Some(dir) = bundled_dir {
        let bundled_path = dir.join(name);
        if bundled_path.is_dir() {
            return Ok(bundled_path);
        }
    }

    // 3. Download and unpack into cache
    fs::create_dir_all(&cache_dir).map_err(ModelResolveError::CacheDir)?;
    download_and_unpack(url, name, &cache_dir, progress)?;
    Ok(cached_path)
}

/// Platform-specific model cache directory.
///
/// - macOS: `~/Library/Application Support/talknotes/models/`
/// - Linux: `$XDG_CACHE_HOME/talknotes/models/` or `~/.cache/talknotes/models/`
/// - Windows: `%LOCALAPPDATA%/talknotes/models/`
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .map(|d| d.join(MODEL_CACHE_APP_DIR).join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|d| d.join(MODEL_CACHE_APP_DIR).join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
}

fn download_and_unpack(
    url: &str,
    name: &str,
    cache_dir: &Path,
    progress: Option<ProgressFn>,
) -> Result<(), ModelResolveError> {
    let response = reqwest::blocking::get(url).map_err(|e| ModelResolveError::Download {
        url: url.to_string(),
        source: e,
    })?;

    let total = response.content_length().unwrap_or(0);
    let bytes = response.bytes().map_err(|e| ModelResolveError::Download {
        url: url.to_string(),
        source: e,
    })?;

    // Spool to a temp archive first so a failed download leaves no debris
    let archive_path = cache_dir.join(name).with_extension("zip.part");
    let mut file = fs::File::create(&archive_path).map_err(|e| ModelResolveError::Write {
        path: archive_path.clone(),
        source: e,
    })?;

    let mut downloaded: u64 = 0;
    let chunk_size = 1024 * 1024; // 1MB
    for chunk in bytes.chunks(chunk_size) {
        file.write_all(chunk).map_err(|e| ModelResolveError::Write {
            path: archive_path.clone(),
            source: e,
        })?;
        downloaded += chunk.len() as u64;
        if let Some(ref cb) = progress {
            cb(downloaded, total);
        }
    }
    file.flush().map_err(|e| ModelResolveError::Write {
        path: archive_path.clone(),
        source: e,
    })?;
    drop(file);

    // A failed extraction must not leave the archive behind either
    let result = unpack(&archive_path, name, cache_dir);
    let _ = fs::remove_file(&archive_path);
    result
}

/// Extract into a staging directory and rename the bundle into place, so
/// a corrupt archive leaves the cache untouched.
fn unpack(archive_path: &Path, name: &str, cache_dir: &Path) -> Result<(), ModelResolveError> {
    let staging = cache_dir.join(format!("{name}.extract"));
    let _ = fs::remove_dir_all(&staging);
    fs::create_dir_all(&staging).map_err(ModelResolveError::CacheDir)?;

    let result = extract_into(archive_path, name, &staging, cache_dir);
    let _ = fs::remove_dir_all(&staging);
    result
}

fn extract_into(
    archive_path: &Path,
    name: &str,
    staging: &Path,
    cache_dir: &Path,
) -> Result<(), ModelResolveError> {
    let file = fs::File::open(archive_path).map_err(|e| ModelResolveError::Write {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(ModelResolveError::Extract)?;
    archive
        .extract(staging)
        .map_err(ModelResolveError::Extract)?;

    // Vosk archives unpack to a directory matching the bundle name
    let bundle = staging.join(name);
    if !bundle.is_dir() {
        return Err(ModelResolveError::MissingBundle(name.to_string()));
    }

    let dest = cache_dir.join(name);
    fs::rename(&bundle, &dest).map_err(|e| ModelResolveError::Write {
        path: dest,
        source: e,
    })?;
    Ok(())
}
