use crate::error::KernelError;
use crate::math::element::Element;
use crate::math::reduce::zip_fold;

/// Binary cross-entropy.
pub struct BceLoss;

impl BceLoss {
    /// `-sum(g·ln(p) + (g − 1)·ln(1 − p)) / N`
    ///
    /// Expanding the sum gives `-g·ln(p)/N + (1 − g)·ln(1 − p)/N`: the second
    /// term carries the opposite sign from textbook BCE
    /// (`-[g·ln p + (1 − g)·ln(1 − p)]/N`). Kept literally; see DESIGN.md.
    ///
    /// No epsilon is added inside the logarithms, so `p` outside `(0, 1)`
    /// yields `NaN`/`±Inf`. An empty input divides by zero and yields `NaN`.
    pub fn loss<T: Element>(ground: &[T], predicted: &[T]) -> Result<T, KernelError> {
        let sum = zip_fold("bce", ground, predicted, |g, p| {
            g * p.ln() + (g - T::one()) * (T::one() - p).ln()
        })?;
        Ok(-sum / T::from_len(ground.len()))
    }
}

/// Categorical cross-entropy against a one-hot or soft target distribution.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// `-sum(g·ln(p)) / N`
    pub fn loss<T: Element>(ground: &[T], predicted: &[T]) -> Result<T, KernelError> {
        let sum = zip_fold("ce", ground, predicted, |g, p| g * p.ln())?;
        Ok(-sum / T::from_len(ground.len()))
    }
}
