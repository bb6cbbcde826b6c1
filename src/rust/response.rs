use serde::{Deserialize, Serialize};

/// Successful prediction. The label is repeated under both keys because
/// consumers read either one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_disease: String,
    pub prediction: String,
}

impl PredictionResponse {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            predicted_disease: label.clone(),
            prediction: label,
        }
    }
}

/// The full vocabulary, in on-disk order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomListResponse {
    pub symptoms: Vec<String>,
}

/// Any handled failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
