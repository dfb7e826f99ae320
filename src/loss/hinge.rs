use crate::error::KernelError;
use crate::math::element::Element;
use crate::math::reduce::zip_fold;

pub struct HingeLoss;

impl HingeLoss {
    /// `sum(max(0, 1 − g·p))`
    pub fn loss<T: Element>(ground: &[T], predicted: &[T]) -> Result<T, KernelError> {
        zip_fold("hinge", ground, predicted, |g, p| T::zero().max(T::one() - g * p))
    }
}
