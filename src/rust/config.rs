use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds the artifacts
pub const MODELS_DIR_ENV: &str = "SYMPTOM_PREDICTOR_MODELS";
/// File name of the serialized classifier inside the models directory
pub const MODEL_FILE_NAME: &str = "naive_bayes.json";
/// File name of the vocabulary inside the models directory
pub const VOCABULARY_FILE_NAME: &str = "symptoms.json";

/// Locations of the two artifacts the predictor reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    pub model_path: PathBuf,
    pub vocabulary_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::from_dir(Self::default_models_dir())
    }
}

impl ArtifactConfig {
    pub fn new(model_path: impl Into<PathBuf>, vocabulary_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            vocabulary_path: vocabulary_path.into(),
        }
    }

    /// Uses the default file names inside `dir`
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(MODEL_FILE_NAME), dir.join(VOCABULARY_FILE_NAME))
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_vocabulary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary_path = path.into();
        self
    }

    /// Returns the default models directory path
    pub fn default_models_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var(MODELS_DIR_ENV) {
            return PathBuf::from(path);
        }

        // 2. A models directory shipped beside the executable
        if let Some(dir) = Self::executable_models_dir() {
            return dir;
        }

        // 3. Platform-specific data directory
        if let Some(data_dir) = dirs::data_dir() {
            return data_dir.join("symptom-predictor").join("models");
        }

        // 4. Relative to the working directory
        PathBuf::from("models")
    }

    fn executable_models_dir() -> Option<PathBuf> {
        let exe = env::current_exe().ok()?;
        let dir = exe.parent()?.join("models");
        dir.is_dir().then_some(dir)
    }
}
