use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::classifier::{Classifier, ClassifierError, ModelArtifact, NaiveBayesModel};
use crate::config::ArtifactConfig;
use crate::vocabulary::Vocabulary;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid model in {}: {source}", .path.display())]
    InvalidModel {
        path: PathBuf,
        #[source]
        source: ClassifierError,
    },
}

/// Reads the classifier and vocabulary from the locations in an [`ArtifactConfig`].
///
/// Nothing is cached: every call to [`ArtifactLoader::load`] reads both files again.
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    config: ArtifactConfig,
}

impl ArtifactLoader {
    pub fn new(config: ArtifactConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArtifactConfig {
        &self.config
    }

    /// Loads the model and the vocabulary, failing on the first problem.
    pub fn load(&self) -> Result<(NaiveBayesModel, Vocabulary), ArtifactError> {
        debug!("Loading artifacts:");
        debug!("  Model path: {:?}", self.config.model_path);
        debug!("  Vocabulary path: {:?}", self.config.vocabulary_path);
        let model = self.load_model()?;
        let vocabulary = self.load_vocabulary()?;

        if model.n_features() != vocabulary.len() {
            warn!(
                "Model expects {} features but the vocabulary has {} symptoms",
                model.n_features(),
                vocabulary.len()
            );
        }
        Ok((model, vocabulary))
    }

    pub fn load_model(&self) -> Result<NaiveBayesModel, ArtifactError> {
        let path = &self.config.model_path;
        let artifact: ModelArtifact = read_json(path)?;
        let model = NaiveBayesModel::try_from(artifact).map_err(|source| ArtifactError::InvalidModel {
            path: path.clone(),
            source,
        })?;

        let info = model.info();
        info!(
            "Loaded {} model from {:?}: {} classes, {} features",
            info.kind, path, info.num_classes, info.num_features
        );
        Ok(model)
    }

    pub fn load_vocabulary(&self) -> Result<Vocabulary, ArtifactError> {
        let path = &self.config.vocabulary_path;
        let vocabulary: Vocabulary = read_json(path)?;
        info!("Loaded {} symptoms from {:?}", vocabulary.len(), path);
        Ok(vocabulary)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", bytes.len(), path);
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}
