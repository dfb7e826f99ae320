use crate::error::KernelError;
use crate::math::element::Element;
use crate::math::reduce::zip_fold;

/// Manhattan distance.
pub struct L1Loss;

impl L1Loss {
    /// `sum(|ground - predicted|)`
    pub fn loss<T: Element>(ground: &[T], predicted: &[T]) -> Result<T, KernelError> {
        zip_fold("l1", ground, predicted, |g, p| (g - p).abs())
    }
}

/// Euclidean distance.
pub struct L2Loss;

impl L2Loss {
    /// `sqrt(sum((ground - predicted)²))`
    pub fn loss<T: Element>(ground: &[T], predicted: &[T]) -> Result<T, KernelError> {
        let squared = zip_fold("l2", ground, predicted, |g, p| (g - p).powi(2))?;
        Ok(squared.sqrt())
    }
}
