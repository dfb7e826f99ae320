use crate::error::KernelError;
use crate::math::element::Element;
use crate::math::reduce::zip_fold;

pub struct HuberLoss;

impl HuberLoss {
    /// Scalar Huber: `sum(h(ground - predicted))`
    /// where h(d) = d²/2                       if d ≤ threshold
    ///              threshold·|d| − threshold/2  otherwise
    ///
    /// The branch compares the signed difference, not `|d|`, so every
    /// negative difference takes the quadratic branch no matter how large it
    /// is. The linear branch also subtracts `threshold/2` rather than
    /// `threshold²/2`, so for `threshold < 1/2` a term can dip below zero.
    /// Both quirks are kept as-is; see DESIGN.md.
    pub fn loss<T: Element>(ground: &[T], predicted: &[T], threshold: T) -> Result<T, KernelError> {
        zip_fold("huber", ground, predicted, |g, p| {
            let diff = g - p;
            if diff <= threshold {
                diff.powi(2) / T::two()
            } else {
                threshold * diff.abs() - threshold / T::two()
            }
        })
    }
}
