//! Error types for the kernels and the demo configuration.

/// Errors surfaced by the kernels.
///
/// Only sequence length is validated. Out-of-domain inputs (`ln(0)`, `beta = 0`,
/// overflowing exponentials) come back as `NaN`/`±Inf`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Two sequences handed to a paired kernel have different lengths.
    #[error("length mismatch in {op}: {lhs} vs {rhs}")]
    LengthMismatch {
        op: &'static str,
        lhs: usize,
        rhs: usize,
    },

    /// A demo configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}
