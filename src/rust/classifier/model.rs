use std::fmt;

use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use super::builder::NaiveBayesBuilder;
use super::error::ClassifierError;
use super::utils::{argmax, log_complement};
use super::{Classifier, ClassifierInfo};
use crate::encoder::FeatureVector;

/// The event model a naive Bayes classifier was fitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaiveBayesKind {
    /// Binary features; absent features contribute `ln(1 - p)`
    #[serde(rename = "bernoulli_nb")]
    Bernoulli,
    /// Count features; absent features contribute nothing
    #[serde(rename = "multinomial_nb")]
    Multinomial,
}

impl fmt::Display for NaiveBayesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bernoulli => write!(f, "bernoulli_nb"),
            Self::Multinomial => write!(f, "multinomial_nb"),
        }
    }
}

/// A class label as stored in the model artifact. Training pipelines emit
/// either names or integer codes; both are reported as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// On-disk representation of a fitted naive Bayes classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub kind: NaiveBayesKind,
    pub classes: Vec<ClassLabel>,
    pub class_log_prior: Vec<f64>,
    pub feature_log_prob: Vec<Vec<f64>>,
}

/// A fitted naive Bayes classifier over binary symptom features.
///
/// The decision function is linear in the features, so the per-class weights
/// and bias are folded together once at construction:
/// - multinomial: `jll = X · log_prob^T + log_prior`
/// - bernoulli: `jll = X · (log_prob - neg)^T + log_prior + Σ neg`,
///   where `neg = ln(1 - exp(log_prob))`
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    kind: NaiveBayesKind,
    classes: Vec<String>,
    feature_log_prob: Array2<f64>,
    weights: Array2<f64>,
    bias: Array1<f64>,
}

impl NaiveBayesModel {
    /// Creates a builder for assembling a model class by class
    pub fn builder(kind: NaiveBayesKind) -> NaiveBayesBuilder {
        NaiveBayesBuilder::new(kind)
    }

    /// Assembles a model from already-validated parameters.
    pub(crate) fn from_parts(
        kind: NaiveBayesKind,
        classes: Vec<String>,
        class_log_prior: Array1<f64>,
        feature_log_prob: Array2<f64>,
    ) -> Self {
        let (weights, bias) = match kind {
            NaiveBayesKind::Multinomial => (feature_log_prob.clone(), class_log_prior),
            NaiveBayesKind::Bernoulli => {
                let neg = log_complement(&feature_log_prob);
                let weights = &feature_log_prob - &neg;
                let bias = class_log_prior + neg.sum_axis(Axis(1));
                (weights, bias)
            }
        };

        Self {
            kind,
            classes,
            feature_log_prob,
            weights,
            bias,
        }
    }

    pub fn kind(&self) -> NaiveBayesKind {
        self.kind
    }

    /// Per-class joint log likelihood for each row of `x`, shape `(rows, classes)`
    pub fn joint_log_likelihood(&self, x: ArrayView2<'_, u8>) -> Result<Array2<f64>, ClassifierError> {
        if x.ncols() != self.n_features() {
            return Err(ClassifierError::FeatureMismatch {
                expected: self.n_features(),
                actual: x.ncols(),
            });
        }
        let x = x.mapv(f64::from);
        Ok(x.dot(&self.weights.t()) + &self.bias)
    }

    /// Serializable form of this model
    pub fn to_artifact(&self) -> ModelArtifact {
        let class_log_prior = match self.kind {
            NaiveBayesKind::Multinomial => self.bias.to_vec(),
            NaiveBayesKind::Bernoulli => {
                let neg = log_complement(&self.feature_log_prob).sum_axis(Axis(1));
                (&self.bias - &neg).to_vec()
            }
        };

        ModelArtifact {
            kind: self.kind,
            classes: self.classes.iter().cloned().map(ClassLabel::Text).collect(),
            class_log_prior,
            feature_log_prob: self.feature_log_prob.rows().into_iter().map(|r| r.to_vec()).collect(),
        }
    }
}

impl TryFrom<ModelArtifact> for NaiveBayesModel {
    type Error = ClassifierError;

    fn try_from(artifact: ModelArtifact) -> Result<Self, Self::Error> {
        if artifact.classes.len() != artifact.class_log_prior.len() {
            return Err(ClassifierError::InvalidModel(format!(
                "{} classes but {} class log priors",
                artifact.classes.len(),
                artifact.class_log_prior.len()
            )));
        }
        if artifact.classes.len() != artifact.feature_log_prob.len() {
            return Err(ClassifierError::InvalidModel(format!(
                "{} classes but {} rows of feature log probabilities",
                artifact.classes.len(),
                artifact.feature_log_prob.len()
            )));
        }

        let mut builder = NaiveBayesBuilder::new(artifact.kind);
        let rows = artifact
            .classes
            .into_iter()
            .zip(artifact.class_log_prior)
            .zip(artifact.feature_log_prob);

        for ((label, prior), probs) in rows {
            builder = builder.add_class(label.to_string(), prior, probs)?;
        }
        builder.build()
    }
}

impl Classifier for NaiveBayesModel {
    fn n_features(&self) -> usize {
        self.weights.ncols()
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, features: &FeatureVector) -> Result<String, ClassifierError> {
        let jll = self.joint_log_likelihood(features.as_array().view())?;
        let scores = jll.row(0).to_owned();
        let best = argmax(&scores).ok_or_else(|| {
            ClassifierError::PredictionError("no class produced a finite score".into())
        })?;

        Ok(self.classes[best].clone())
    }

    fn info(&self) -> ClassifierInfo {
        ClassifierInfo {
            kind: self.kind.to_string(),
            num_classes: self.classes.len(),
            num_features: self.n_features(),
        }
    }
}
