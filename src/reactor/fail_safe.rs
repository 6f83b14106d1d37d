//! Fail-Safe Status
//!
//! Compares `temperature × neutrons per second` against a threshold:
//! 1. LOW    -> product is below 90% of threshold
//! 2. NORMAL -> product exceeds threshold by less than 10% of threshold
//! 3. DANGER -> anything else
//!
//! The NORMAL test is one-sided: `(product - threshold) < threshold × 0.1`.
//! It has no lower bound of its own and relies on LOW having been ruled out
//! first. With a negative threshold the percentage flips sign and readings
//! classify accordingly; this is kept as-is.

use crate::error::{ClassifyError, ClassifyResult};
use crate::thresholds::FailSafeBands;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reactor alert level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FailSafeStatus {
    Low,
    Normal,
    Danger,
}

impl FailSafeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailSafeStatus::Low => "LOW",
            FailSafeStatus::Normal => "NORMAL",
            FailSafeStatus::Danger => "DANGER",
        }
    }
}

impl fmt::Display for FailSafeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assess the fail-safe status using the default bands.
///
/// # Arguments
/// * `temperature` - Temperature in kelvin
/// * `neutrons_produced_per_second` - Neutron flux
/// * `threshold` - Threshold the product is compared against
///
/// # Returns
/// LOW below 90% of threshold, NORMAL while the product exceeds the
/// threshold by less than 10% of it, otherwise DANGER.
/// `ClassifyError::ZeroThreshold` when the threshold is zero.
pub fn fail_safe(
    temperature: f64,
    neutrons_produced_per_second: f64,
    threshold: f64,
) -> ClassifyResult<FailSafeStatus> {
    fail_safe_with(
        &FailSafeBands::default(),
        temperature,
        neutrons_produced_per_second,
        threshold,
    )
}

/// Assess the fail-safe status against the given bands.
pub fn fail_safe_with(
    bands: &FailSafeBands,
    temperature: f64,
    neutrons_produced_per_second: f64,
    threshold: f64,
) -> ClassifyResult<FailSafeStatus> {
    let product = temperature * neutrons_produced_per_second;

    if threshold == 0.0 {
        tracing::warn!(product, "Rejecting zero fail-safe threshold");
        return Err(ClassifyError::ZeroThreshold { product });
    }

    let percent_of_threshold = (product / threshold) * 100.0;
    let is_nominal = (product - threshold) < (threshold * bands.nominal_margin);

    let status = if percent_of_threshold < bands.low_percent {
        FailSafeStatus::Low
    } else if is_nominal {
        FailSafeStatus::Normal
    } else {
        FailSafeStatus::Danger
    };

    Ok(status)
}
