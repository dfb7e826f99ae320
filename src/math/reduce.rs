//! Pairwise reduction engine.
//!
//! Every reducible loss in this crate is `fold(+, 0, zip_with(f, ground, predicted))`.
//! The zip-and-fold loop lives here once; the losses only supply `f`.
//!
//! Accumulation is strictly left to right in index order starting from `0`,
//! so a given input always produces the same bits. No parallel or tree
//! reduction is performed.

use crate::error::KernelError;
use crate::math::element::Element;

/// Fails with [`KernelError::LengthMismatch`] unless `lhs` and `rhs` have the same length.
pub(crate) fn ensure_same_len<T>(op: &'static str, lhs: &[T], rhs: &[T]) -> Result<(), KernelError> {
    if lhs.len() != rhs.len() {
        tracing::debug!(op, lhs = lhs.len(), rhs = rhs.len(), "rejected sequences of unequal length");
        return Err(KernelError::LengthMismatch {
            op,
            lhs: lhs.len(),
            rhs: rhs.len(),
        });
    }
    Ok(())
}

/// Applies `f` to each `(lhs[i], rhs[i])` pair and sums the results.
///
/// `op` names the calling kernel in the error.
pub(crate) fn zip_fold<T, F>(op: &'static str, lhs: &[T], rhs: &[T], f: F) -> Result<T, KernelError>
where
    T: Element,
    F: Fn(T, T) -> T,
{
    ensure_same_len(op, lhs, rhs)?;
    Ok(lhs
        .iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + f(a, b)))
}
