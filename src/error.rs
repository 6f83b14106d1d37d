//! Error types for reading classification.
//!
//! Only the divisions in efficiency banding and fail-safe status can fail.
//! Everything else is infallible.

/// Errors returned by classifiers that divide by a caller-supplied value.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("theoretical max power is zero (voltage={voltage}, current={current})")]
    ZeroTheoreticalMaxPower { voltage: f64, current: f64 },

    #[error("fail-safe threshold is zero (product={product})")]
    ZeroThreshold { product: f64 },
}

pub type ClassifyResult<T> = std::result::Result<T, ClassifyError>;
