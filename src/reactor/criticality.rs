//! Criticality Check
//!
//! A reactor is balanced when all three hold:
//! - temperature < 800 K
//! - neutrons emitted per second > 500
//! - temperature × neutrons emitted < 500000

use crate::thresholds::CriticalityLimits;

/// Verify criticality is balanced using the default limits.
pub fn is_criticality_balanced(temperature: f64, neutrons_emitted: f64) -> bool {
    is_criticality_balanced_with(
        &CriticalityLimits::default(),
        temperature,
        neutrons_emitted,
    )
}

/// Verify criticality is balanced against the given limits.
///
/// Stops at the first failing bound. NaN inputs fail every comparison and
/// are never balanced.
pub fn is_criticality_balanced_with(
    limits: &CriticalityLimits,
    temperature: f64,
    neutrons_emitted: f64,
) -> bool {
    if !(temperature < limits.max_temperature) {
        return false;
    }
    if !(neutrons_emitted > limits.min_neutrons_emitted) {
        return false;
    }
    temperature * neutrons_emitted < limits.max_product
}
