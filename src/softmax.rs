//! Softmax normalization over a 1-D sequence.

use crate::math::element::Element;

/// Computes `output[i] = exp(x[i]) / sum(exp(x))`.
///
/// The maximum is not subtracted before exponentiation, so inputs around
/// `709` (`f64`) or `88` (`f32`) overflow and the result fills with `NaN`.
/// Use [`softmax_stable`] when inputs can be large.
///
/// An empty input gives an empty output.
pub fn softmax<T: Element>(values: &[T]) -> Vec<T> {
    let exps: Vec<T> = values.iter().map(|&x| x.exp()).collect();
    let sum = exps.iter().fold(T::zero(), |acc, &e| acc + e);
    exps.into_iter().map(|e| e / sum).collect()
}

/// Softmax with the maximum subtracted first: `exp(x[i] - max) / sum(exp(x - max))`.
///
/// Equal to [`softmax`] up to rounding for moderate inputs, finite for any
/// finite input.
pub fn softmax_stable<T: Element>(values: &[T]) -> Vec<T> {
    let max_val = values.iter().copied().fold(T::neg_infinity(), T::max);
    let exps: Vec<T> = values.iter().map(|&x| (x - max_val).exp()).collect();
    let sum = exps.iter().fold(T::zero(), |acc, &e| acc + e);
    exps.into_iter().map(|e| e / sum).collect()
}
