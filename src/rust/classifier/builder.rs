use std::collections::HashSet;

use log::debug;
use ndarray::{Array1, Array2};

use super::error::ClassifierError;
use super::model::{NaiveBayesKind, NaiveBayesModel};
use super::utils::log1mexp;

/// A builder for assembling a [`NaiveBayesModel`] one class at a time.
///
/// Every class must carry the same number of feature log probabilities; the
/// first class added fixes the width.
///
/// # Example
/// ```
/// use symptom_predictor::{Classifier, FeatureVector, NaiveBayesKind, NaiveBayesModel};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let model = NaiveBayesModel::builder(NaiveBayesKind::Bernoulli)
///     .add_class("Flu", 0.5f64.ln(), vec![0.9f64.ln(), 0.8f64.ln()])?
///     .add_class("Allergy", 0.5f64.ln(), vec![0.1f64.ln(), 0.2f64.ln()])?
///     .build()?;
///
/// assert_eq!(model.predict(&FeatureVector::from_indices(2, [0, 1]))?, "Flu");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NaiveBayesBuilder {
    kind: NaiveBayesKind,
    classes: Vec<String>,
    seen: HashSet<String>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<f64>,
    n_features: Option<usize>,
}

impl NaiveBayesBuilder {
    pub fn new(kind: NaiveBayesKind) -> Self {
        Self {
            kind,
            classes: Vec::new(),
            seen: HashSet::new(),
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
            n_features: None,
        }
    }

    /// Validates a single class row:
    /// - The label must be unique within the model
    /// - The log prior must be `<= 0` and not NaN
    /// - Every feature log probability must be finite and `<= 0`; bernoulli
    ///   models additionally need `ln(1 - exp(p))` to be finite, which rules out
    ///   `0` and values so close to it that `exp(p)` rounds to 1
    /// - The row width must match previously added classes
    fn validate_class_data(
        &self,
        label: &str,
        log_prior: f64,
        feature_log_prob: &[f64],
    ) -> Result<(), ClassifierError> {
        if self.seen.contains(label) {
            return Err(ClassifierError::InvalidModel(format!("Duplicate class label '{}'", label)));
        }
        if log_prior.is_nan() || log_prior > 0.0 {
            return Err(ClassifierError::InvalidModel(format!(
                "Class '{}' has an invalid log prior ({})",
                label, log_prior
            )));
        }
        let bernoulli = self.kind == NaiveBayesKind::Bernoulli;
        let invalid = |p: f64| !p.is_finite() || p > 0.0 || (bernoulli && !log1mexp(p).is_finite());
        if let Some(pos) = feature_log_prob.iter().position(|&p| invalid(p)) {
            return Err(ClassifierError::InvalidModel(format!(
                "Class '{}' has an invalid log probability at feature {}",
                label, pos
            )));
        }
        if let Some(width) = self.n_features {
            if feature_log_prob.len() != width {
                return Err(ClassifierError::InvalidModel(format!(
                    "Class '{}' has {} features, expected {}",
                    label,
                    feature_log_prob.len(),
                    width
                )));
            }
        }
        Ok(())
    }

    /// Adds a class with its log prior and per-feature log probabilities
    pub fn add_class(
        mut self,
        label: impl Into<String>,
        log_prior: f64,
        feature_log_prob: Vec<f64>,
    ) -> Result<Self, ClassifierError> {
        let label = label.into();
        self.validate_class_data(&label, log_prior, &feature_log_prob)?;

        self.n_features.get_or_insert(feature_log_prob.len());
        self.seen.insert(label.clone());
        self.classes.push(label);
        self.class_log_prior.push(log_prior);
        self.feature_log_prob.extend(feature_log_prob);
        Ok(self)
    }

    /// Builds the model
    ///
    /// # Returns
    /// An error if no classes were added
    pub fn build(self) -> Result<NaiveBayesModel, ClassifierError> {
        let n_features = self
            .n_features
            .ok_or_else(|| ClassifierError::InvalidModel("At least one class must be added".into()))?;
        let n_classes = self.classes.len();

        let feature_log_prob = Array2::from_shape_vec((n_classes, n_features), self.feature_log_prob)
            .map_err(|e| ClassifierError::InvalidModel(e.to_string()))?;
        debug!(
            "Built {} model with {} classes over {} features",
            self.kind, n_classes, n_features
        );

        Ok(NaiveBayesModel::from_parts(
            self.kind,
            self.classes,
            Array1::from(self.class_log_prior),
            feature_log_prob,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;
    use crate::FeatureVector;

    #[test]
    fn test_empty_builder_fails() {
        let result = NaiveBayesBuilder::new(NaiveBayesKind::Multinomial).build();
        assert!(matches!(result, Err(ClassifierError::InvalidModel(_))));
    }

    #[test]
    fn test_class_validation() {
        let base = || NaiveBayesBuilder::new(NaiveBayesKind::Bernoulli);

        // Positive log probability
        assert!(base().add_class("a", -0.1, vec![0.5]).is_err());
        // NaN prior
        assert!(base().add_class("a", f64::NAN, vec![-0.5]).is_err());
        // Width mismatch
        assert!(base()
            .add_class("a", -0.1, vec![-0.5, -0.5])
            .and_then(|b| b.add_class("b", -0.1, vec![-0.5]))
            .is_err());
        // Duplicate label
        assert!(base()
            .add_class("a", -0.1, vec![-0.5])
            .and_then(|b| b.add_class("a", -0.1, vec![-0.5]))
            .is_err());
    }

    #[test]
    fn test_certain_feature_rules() -> Result<(), ClassifierError> {
        // p = 1 is fine for multinomial but leaves ln(1 - p) undefined for bernoulli
        let model = NaiveBayesBuilder::new(NaiveBayesKind::Multinomial)
            .add_class("a", -0.1, vec![0.0, -0.1])?
            .build()?;
        assert_eq!(model.n_features(), 2);
        assert!(NaiveBayesBuilder::new(NaiveBayesKind::Bernoulli)
            .add_class("a", -0.1, vec![0.0, -0.1])
            .is_err());
        assert!(NaiveBayesBuilder::new(NaiveBayesKind::Multinomial)
            .add_class("a", -0.1, vec![f64::NEG_INFINITY])
            .is_err());
        Ok(())
    }

    #[test]
    fn test_bernoulli_rejects_probabilities_rounding_to_one() -> Result<(), ClassifierError> {
        assert!(NaiveBayesBuilder::new(NaiveBayesKind::Bernoulli)
            .add_class("a", -0.1, vec![-0.1, -1e-17])
            .is_err());

        // Small but representable: the absent-feature term stays finite
        let model = NaiveBayesBuilder::new(NaiveBayesKind::Bernoulli)
            .add_class("a", -0.1, vec![-1e-10, -0.1])?
            .build()?;
        assert!(model
            .joint_log_likelihood(FeatureVector::zeros(2).as_array().view())?
            .iter()
            .all(|v| v.is_finite()));
        Ok(())
    }
}
