mod error;
mod model;
pub mod builder;
mod utils;

pub use builder::NaiveBayesBuilder;
pub use error::ClassifierError;
pub use model::{ClassLabel, ModelArtifact, NaiveBayesKind, NaiveBayesModel};

use crate::encoder::FeatureVector;

/// A pre-trained classifier that maps a single-row feature vector to a label.
///
/// Implementations are loaded read-only and never mutated by prediction.
pub trait Classifier: Send + Sync {
    /// Width of the feature vector the model was fitted on
    fn n_features(&self) -> usize;

    /// Class labels in the order the model scores them
    fn classes(&self) -> &[String];

    /// Predicts the label for a single-row feature vector
    fn predict(&self, features: &FeatureVector) -> Result<String, ClassifierError>;

    /// Returns information about the classifier
    fn info(&self) -> ClassifierInfo;
}

/// Information about a loaded classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Event model name, e.g. `bernoulli_nb`
    pub kind: String,
    /// Number of classes the classifier was trained on
    pub num_classes: usize,
    /// Width of the expected feature vector
    pub num_features: usize,
}
