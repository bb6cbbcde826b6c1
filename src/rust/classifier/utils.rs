use ndarray::{Array1, Array2};

/// Index of the largest score; ties go to the lowest index. NaN scores never win.
pub(crate) fn argmax(scores: &Array1<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if score <= current => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// `ln(1 - exp(x))`, the log probability of a feature being absent.
pub(crate) fn log1mexp(x: f64) -> f64 {
    (-x.exp()).ln_1p()
}

/// [`log1mexp`] element-wise
pub(crate) fn log_complement(log_prob: &Array2<f64>) -> Array2<f64> {
    log_prob.mapv(log1mexp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_argmax_prefers_first_on_tie() {
        assert_eq!(argmax(&array![1.0, 3.0, 3.0]), Some(1));
        assert_eq!(argmax(&array![-2.0, -5.0]), Some(0));
    }

    #[test]
    fn test_argmax_skips_nan() {
        assert_eq!(argmax(&array![f64::NAN, -1.0]), Some(1));
        assert_eq!(argmax(&array![f64::NAN]), None);
        assert_eq!(argmax(&Array1::<f64>::zeros(0)), None);
    }

    #[test]
    fn test_log_complement() {
        let probs = array![[0.5f64.ln(), 0.25f64.ln()]];
        let neg = log_complement(&probs);
        assert!((neg[[0, 0]] - 0.5f64.ln()).abs() < 1e-12);
        assert!((neg[[0, 1]] - 0.75f64.ln()).abs() < 1e-12);
    }
}
