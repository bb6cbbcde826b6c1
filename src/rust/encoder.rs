use log::debug;
use ndarray::Array2;

use crate::vocabulary::Vocabulary;

/// A single-row binary feature vector, shape `(1, vocabulary size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector(Array2<u8>);

impl FeatureVector {
    /// The all-zero vector of the given width
    pub fn zeros(width: usize) -> Self {
        Self(Array2::zeros((1, width)))
    }

    /// A vector with ones at `indices`. Indices past `width` are ignored.
    pub fn from_indices(width: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut vector = Self::zeros(width);
        for i in indices {
            vector.set(i);
        }
        vector
    }

    fn set(&mut self, index: usize) {
        if let Some(cell) = self.0.get_mut((0, index)) {
            *cell = 1;
        }
    }

    pub fn width(&self) -> usize {
        self.0.ncols()
    }

    /// Number of features set to 1
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&v| v == 1).count()
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.iter().copied().collect()
    }
}

/// One-hot encoding of symptom names against a fixed vocabulary.
///
/// Names are trimmed before lookup. Names outside the vocabulary are ignored,
/// and repeating a name has no further effect.
pub trait SymptomEncoding {
    fn vocabulary(&self) -> &Vocabulary;

    fn encode<I, S>(&self, symptoms: I) -> FeatureVector
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary = self.vocabulary();
        let mut vector = FeatureVector::zeros(vocabulary.len());
        let mut unknown = 0usize;

        for symptom in symptoms {
            match vocabulary.index_of(symptom.as_ref().trim()) {
                Some(i) => vector.set(i),
                None => unknown += 1,
            }
        }

        debug!(
            "Encoded {} known symptoms ({} unrecognised) into width {}",
            vector.active_count(),
            unknown,
            vector.width()
        );
        vector
    }
}

impl SymptomEncoding for Vocabulary {
    fn vocabulary(&self) -> &Vocabulary {
        self
    }
}
