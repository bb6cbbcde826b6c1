//! Disease prediction from a set of symptom names.
//!
//! A pre-trained naive Bayes model and the vocabulary it was trained on are
//! read from disk. Caller-supplied symptom names are one-hot encoded against
//! the vocabulary and the model's label is returned.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use symptom_predictor::{NaiveBayesKind, NaiveBayesModel, SymptomClassifier, SymptomRequest, Vocabulary};
//!
//! let vocabulary: Vocabulary = ["fever", "cough", "itching"].into_iter().collect();
//! let model = NaiveBayesModel::builder(NaiveBayesKind::Bernoulli)
//!     .add_class("Flu", 0.5f64.ln(), vec![0.9f64.ln(), 0.8f64.ln(), 0.05f64.ln()])?
//!     .add_class("Allergy", 0.5f64.ln(), vec![0.1f64.ln(), 0.2f64.ln(), 0.9f64.ln()])?
//!     .build()?;
//!
//! let classifier = SymptomClassifier::new(model, vocabulary);
//! let request = SymptomRequest::parse(br#"{"symptoms": ["fever", " cough "]}"#)?;
//! assert_eq!(classifier.classify(&request)?, "Flu");
//! # Ok(())
//! # }
//! ```
//!
//! # Artifacts
//!
//! The [`Predictor`] reads both artifacts on every call from the paths in an
//! [`ArtifactConfig`]:
//! - the model, a JSON [`ModelArtifact`]
//! - the vocabulary, a JSON array of symptom names

pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod encoder;
pub mod predictor;
pub mod request;
pub mod response;
pub mod vocabulary;

pub use artifacts::{ArtifactError, ArtifactLoader};
pub use classifier::{
    ClassLabel, Classifier, ClassifierError, ClassifierInfo, ModelArtifact, NaiveBayesBuilder,
    NaiveBayesKind, NaiveBayesModel,
};
pub use config::ArtifactConfig;
pub use encoder::{FeatureVector, SymptomEncoding};
pub use predictor::{Predictor, PredictorError, SymptomClassifier};
pub use request::{RequestError, SymptomRequest};
pub use response::{ErrorResponse, PredictionResponse, SymptomListResponse};
pub use vocabulary::Vocabulary;

/// Initialises `env_logger`. Output goes to standard error, leaving standard
/// output for the JSON result.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
