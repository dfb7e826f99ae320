//! Margin-based losses over raw feature vectors.
//!
//! Both are composed from [`L2Loss`] rather than reducing directly.

use crate::error::KernelError;
use crate::loss::distance::L2Loss;
use crate::math::element::Element;
use crate::math::reduce::ensure_same_len;

pub struct ContrastiveLoss;

impl ContrastiveLoss {
    /// With `d = L2(features_a, features_b)`: `d²` for a similar pair,
    /// otherwise `max(margin − d, 0)²`.
    pub fn loss<T: Element>(
        similar: bool,
        features_a: &[T],
        features_b: &[T],
        margin: T,
    ) -> Result<T, KernelError> {
        let dist = L2Loss::loss(features_a, features_b)?;
        if similar {
            Ok(dist.powi(2))
        } else {
            Ok((margin - dist).max(T::zero()).powi(2))
        }
    }
}

pub struct TripletRankingLoss;

impl TripletRankingLoss {
    /// `max(L2(anchor, positive) − L2(anchor, negative) + margin, 0)`
    ///
    /// All three sequences must share one length.
    pub fn loss<T: Element>(
        anchor: &[T],
        positive: &[T],
        negative: &[T],
        margin: T,
    ) -> Result<T, KernelError> {
        ensure_same_len("triplet_ranking", anchor, positive)?;
        ensure_same_len("triplet_ranking", anchor, negative)?;
        let dist_pos = L2Loss::loss(anchor, positive)?;
        let dist_neg = L2Loss::loss(anchor, negative)?;
        Ok((dist_pos - dist_neg + margin).max(T::zero()))
    }
}
