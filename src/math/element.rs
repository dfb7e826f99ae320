use std::fmt::Debug;
use std::iter::Sum;

use num_traits::{Float, NumCast};

/// Floating-point element type every kernel is generic over.
///
/// Implemented for `f32` and `f64`.
pub trait Element: Float + Sum + Debug + Send + Sync + 'static {
    /// `2`, used by huber.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Sequence length as an element value, for the mean-style losses.
    fn from_len(n: usize) -> Self {
        // usize -> f32/f64 never fails, it only rounds.
        <Self as NumCast>::from(n).unwrap_or_else(Self::nan)
    }
}

impl Element for f32 {}
impl Element for f64 {}
