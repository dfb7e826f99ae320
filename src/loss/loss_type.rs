use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::loss::cross_entropy::{BceLoss, CrossEntropyLoss};
use crate::loss::distance::{L1Loss, L2Loss};
use crate::loss::hinge::HingeLoss;
use crate::loss::huber::HuberLoss;
use crate::loss::kl::KlDivergence;
use crate::math::element::Element;

/// Selects one of the paired `(ground, predicted)` losses.
///
/// - `L1`, `L2`  — Manhattan and Euclidean distance.
/// - `Huber`     — carries its `threshold`.
/// - `Bce`, `Ce` — binary and categorical cross-entropy, averaged over `N`.
/// - `Kl`        — KL divergence of `predicted` from `ground`.
/// - `Hinge`     — summed hinge loss.
///
/// The margin losses take feature vectors rather than a ground/predicted
/// pair and are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LossType<T> {
    L1,
    L2,
    Huber { threshold: T },
    Bce,
    Ce,
    Kl,
    Hinge,
}

impl<T: Element> LossType<T> {
    pub fn evaluate(&self, ground: &[T], predicted: &[T]) -> Result<T, KernelError> {
        match *self {
            LossType::L1 => L1Loss::loss(ground, predicted),
            LossType::L2 => L2Loss::loss(ground, predicted),
            LossType::Huber { threshold } => HuberLoss::loss(ground, predicted, threshold),
            LossType::Bce => BceLoss::loss(ground, predicted),
            LossType::Ce => CrossEntropyLoss::loss(ground, predicted),
            LossType::Kl => KlDivergence::loss(ground, predicted),
            LossType::Hinge => HingeLoss::loss(ground, predicted),
        }
    }
}

impl<T> LossType<T> {
    pub fn name(&self) -> &'static str {
        match self {
            LossType::L1 => "l1",
            LossType::L2 => "l2",
            LossType::Huber { .. } => "huber",
            LossType::Bce => "bce",
            LossType::Ce => "ce",
            LossType::Kl => "kl",
            LossType::Hinge => "hinge",
        }
    }
}
