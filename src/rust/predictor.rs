use log::{debug, info};

use crate::artifacts::{ArtifactError, ArtifactLoader};
use crate::classifier::{Classifier, ClassifierError, NaiveBayesModel};
use crate::config::ArtifactConfig;
use crate::encoder::SymptomEncoding;
use crate::request::{RequestError, SymptomRequest};
use crate::response::{ErrorResponse, PredictionResponse, SymptomListResponse};
use crate::vocabulary::Vocabulary;

/// The single error surfaced by both entrypoints. Its `Display` text is the
/// message reported to callers.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("Failed to load model artifacts: {0}")]
    Artifacts(#[from] ArtifactError),
    #[error("No input data provided")]
    EmptyInput,
    #[error("Prediction error: {0}")]
    Request(RequestError),
    #[error("Prediction error: {0}")]
    Inference(#[from] ClassifierError),
}

impl From<RequestError> for PredictorError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Empty => Self::EmptyInput,
            other => Self::Request(other),
        }
    }
}

impl PredictorError {
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse { error: self.to_string() }
    }
}

/// A loaded model paired with the vocabulary that defines its input features.
#[derive(Debug, Clone)]
pub struct SymptomClassifier<C: Classifier = NaiveBayesModel> {
    model: C,
    vocabulary: Vocabulary,
}

impl<C: Classifier> SymptomEncoding for SymptomClassifier<C> {
    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl<C: Classifier> SymptomClassifier<C> {
    pub fn new(model: C, vocabulary: Vocabulary) -> Self {
        Self { model, vocabulary }
    }

    /// Encodes the request's symptoms and returns the model's label
    pub fn classify(&self, request: &SymptomRequest) -> Result<String, ClassifierError> {
        let features = self.encode(request.symptoms());
        let label = self.model.predict(&features)?;
        debug!(
            "Predicted '{}' from {} active features",
            label,
            features.active_count()
        );
        Ok(label)
    }
}

/// Entry points of the program: list the vocabulary, or predict from a request.
///
/// Artifacts are read fresh on each call.
///
/// # Example
/// ```no_run
/// use symptom_predictor::{ArtifactConfig, Predictor};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let predictor = Predictor::new(ArtifactConfig::from_dir("models"));
/// let response = predictor.predict(br#"{"symptoms": ["itching", "skin_rash"]}"#)?;
/// println!("{}", response.predicted_disease);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    loader: ArtifactLoader,
}

impl Predictor {
    pub fn new(config: ArtifactConfig) -> Self {
        Self {
            loader: ArtifactLoader::new(config),
        }
    }

    pub fn loader(&self) -> &ArtifactLoader {
        &self.loader
    }

    fn load(&self) -> Result<SymptomClassifier, PredictorError> {
        let (model, vocabulary) = self.loader.load()?;
        Ok(SymptomClassifier::new(model, vocabulary))
    }

    /// Loads the artifacts and returns the vocabulary
    pub fn list_symptoms(&self) -> Result<SymptomListResponse, PredictorError> {
        let classifier = self.load()?;
        Ok(SymptomListResponse {
            symptoms: classifier.vocabulary.into(),
        })
    }

    /// Runs a prediction for raw standard-input bytes.
    ///
    /// The request is parsed before the artifacts are read, so malformed input
    /// is reported even when the artifacts are unavailable.
    pub fn predict(&self, raw_input: &[u8]) -> Result<PredictionResponse, PredictorError> {
        let request = SymptomRequest::parse(raw_input)?;
        info!(
            "Received {} request with {} symptoms",
            request.shape(),
            request.symptoms().len()
        );

        let classifier = self.load()?;
        let label = classifier.classify(&request)?;
        Ok(PredictionResponse::new(label))
    }
}
