/// Errors raised while validating or running a naive Bayes model.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The model parameters do not describe a usable classifier
    #[error("Invalid model: {0}")]
    InvalidModel(String),
    /// The feature vector does not match the width the model was fitted on
    #[error("X has {actual} features, but the model is expecting {expected} features")]
    FeatureMismatch { expected: usize, actual: usize },
    /// The joint log likelihood could not pick a class (NaN scores)
    #[error("Prediction failed: {0}")]
    PredictionError(String),
}
