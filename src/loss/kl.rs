use crate::error::KernelError;
use crate::math::element::Element;
use crate::math::reduce::zip_fold;

/// Kullback-Leibler divergence of `predicted` from `ground`.
pub struct KlDivergence;

impl KlDivergence {
    /// `sum(g·ln(g / p))`
    ///
    /// Asymmetric. A zero in either sequence produces `NaN` or `±Inf`.
    pub fn loss<T: Element>(ground: &[T], predicted: &[T]) -> Result<T, KernelError> {
        zip_fold("kl", ground, predicted, |g, p| g * (g / p).ln())
    }
}
