use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use vosk::Model;

use crate::recognition::domain::language::Language;

use super::model_resolver::{self, ProgressFn};

/// Explicit per-language cache of loaded acoustic models.
///
/// Models are resolved and loaded on first request, reused afterwards, and
/// can be evicted explicitly. This replaces ambient module-level model
/// state: the cache is owned by whoever drives the transcription pipeline.
pub struct ModelCache {
    bundled_dir: Option<PathBuf>,
    download_progress: Option<Arc<dyn Fn(u64, u64) + Send + Sync>>,
    models: HashMap<Language, Arc<Model>>,
}

impl ModelCache {
    pub fn new(bundled_dir: Option<PathBuf>) -> Self {
        Self {
            bundled_dir,
            download_progress: None,
            models: HashMap::new(),
        }
    }

    /// Forward model download progress to `callback` (e.g. a CLI spinner).
    pub fn with_download_progress(
        mut self,
        callback: Arc<dyn Fn(u64, u64) + Send + Sync>,
    ) -> Self {
        self.download_progress = Some(callback);
        self
    }

    /// Return the cached model for `language`, loading it first if needed.
    pub fn get_or_load(
        &mut self,
        language: Language,
    ) -> Result<Arc<Model>, Box<dyn std::error::Error>> {
        if let Some(model) = self.models.get(&language) {
            return Ok(model.clone());
        }

        log::info!("Resolving model bundle: {}", language.model_name());
        let progress: Option<ProgressFn> = self.download_progress.clone().map(|cb| {
            Box::new(move |downloaded, total| cb(downloaded, total)) as ProgressFn
        });
        let path = model_resolver::resolve(
            language.model_name(),
            language.model_url(),
            self.bundled_dir.as_deref(),
            progress,
        )?;

        log::info!("Loading {language} model from {}", path.display());
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Model path is not valid UTF-8: {}", path.display()))?;
        let model = Model::new(path_str)
            .ok_or_else(|| format!("Failed to load model bundle at {}", path.display()))?;

        let model = Arc::new(model);
        self.models.insert(language, model.clone());
        Ok(model)
    }

    /// Drop the cached model for `language`. Returns true if one was loaded.
    pub fn evict(&mut self, language: Language) -> bool {
        self.models.remove(&language).is_some()
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.models.contains_key(&language)
    }

    pub fn loaded_count(&self) -> usize {
        self.models.len()
    }
}
