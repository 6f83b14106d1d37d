//! Efficiency Banding
//!
//! efficiency % = (voltage × current) / theoretical max power × 100
//!
//! | Band   | Efficiency       |
//! |--------|------------------|
//! | green  | ≥ 80%            |
//! | orange | 60% to < 80%     |
//! | red    | 30% to < 60%     |
//! | black  | < 30%            |

use crate::error::{ClassifyError, ClassifyResult};
use crate::thresholds::EfficiencyCutoffs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Efficiency band, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyBand {
    Black,
    Red,
    Orange,
    Green,
}

impl EfficiencyBand {
    /// Band for an efficiency percentage.
    /// A NaN percentage matches no cutoff and lands in black.
    pub fn from_percentage(percentage: f64, cutoffs: &EfficiencyCutoffs) -> Self {
        if percentage >= cutoffs.green {
            EfficiencyBand::Green
        } else if percentage >= cutoffs.orange {
            EfficiencyBand::Orange
        } else if percentage >= cutoffs.red {
            EfficiencyBand::Red
        } else {
            EfficiencyBand::Black
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyBand::Green => "green",
            EfficiencyBand::Orange => "orange",
            EfficiencyBand::Red => "red",
            EfficiencyBand::Black => "black",
        }
    }

    /// 0 (black) to 3 (green)
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for EfficiencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generated power as a percentage of the theoretical maximum.
pub fn efficiency_percentage(
    voltage: f64,
    current: f64,
    theoretical_max_power: f64,
) -> ClassifyResult<f64> {
    if theoretical_max_power == 0.0 {
        tracing::warn!(voltage, current, "Rejecting zero theoretical max power");
        return Err(ClassifyError::ZeroTheoreticalMaxPower { voltage, current });
    }

    let generated_power = voltage * current;
    Ok((generated_power / theoretical_max_power) * 100.0)
}

/// Assess the reactor efficiency band using the default cutoffs.
///
/// # Arguments
/// * `voltage` - Voltage reading
/// * `current` - Current reading
/// * `theoretical_max_power` - Power that corresponds to 100% efficiency
///
/// # Returns
/// The band for `voltage × current / theoretical_max_power × 100`, or
/// `ClassifyError::ZeroTheoreticalMaxPower` when the maximum is zero.
/// Other non-finite inputs are not rejected: a NaN percentage is black,
/// +infinity is green and -infinity is black.
pub fn reactor_efficiency(
    voltage: f64,
    current: f64,
    theoretical_max_power: f64,
) -> ClassifyResult<EfficiencyBand> {
    let cutoffs = EfficiencyCutoffs::default();
    reactor_efficiency_with(&cutoffs, voltage, current, theoretical_max_power)
}

/// Assess the reactor efficiency band against the given cutoffs.
pub fn reactor_efficiency_with(
    cutoffs: &EfficiencyCutoffs,
    voltage: f64,
    current: f64,
    theoretical_max_power: f64,
) -> ClassifyResult<EfficiencyBand> {
    let percentage = efficiency_percentage(voltage, current, theoretical_max_power)?;
    Ok(EfficiencyBand::from_percentage(percentage, cutoffs))
}
