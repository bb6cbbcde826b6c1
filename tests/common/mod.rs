#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::json;
use symptom_predictor::ArtifactConfig;

pub const VOCABULARY: [&str; 3] = ["fever", "cough", "fatigue"];

/// Writes a bernoulli model over `VOCABULARY` that predicts "Flu" for
/// fever + cough and "Healthy" for the all-zero vector.
pub fn write_flu_artifacts(dir: &Path) -> ArtifactConfig {
    let model = json!({
        "kind": "bernoulli_nb",
        "classes": ["Flu", "Healthy"],
        "class_log_prior": [0.4f64.ln(), 0.6f64.ln()],
        "feature_log_prob": [
            [0.9f64.ln(), 0.9f64.ln(), 0.3f64.ln()],
            [0.05f64.ln(), 0.05f64.ln(), 0.05f64.ln()]
        ]
    });
    let config = ArtifactConfig::from_dir(dir);
    fs::write(&config.model_path, model.to_string()).expect("Failed to write model");
    fs::write(&config.vocabulary_path, json!(VOCABULARY).to_string()).expect("Failed to write vocabulary");
    config
}
