//! Threshold Configuration
//!
//! Cutoffs used by the reactor classifiers. The defaults reproduce the fixed
//! constants (800 K, 500 neutrons/s, 500000, 80/60/30 %, 90 %, 10 %), so the
//! plain classifier functions and `*_with(&Thresholds::default(), ..)` agree.
//!
//! A JSON file may override any subset of values:
//!
//! ```json
//! { "efficiency": { "green": 85.0 }, "fail_safe": { "nominal_margin": 0.05 } }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_TEMPERATURE: f64 = 800.0;
pub const DEFAULT_MIN_NEUTRONS_EMITTED: f64 = 500.0;
pub const DEFAULT_MAX_PRODUCT: f64 = 500_000.0;

pub const DEFAULT_GREEN_PERCENT: f64 = 80.0;
pub const DEFAULT_ORANGE_PERCENT: f64 = 60.0;
pub const DEFAULT_RED_PERCENT: f64 = 30.0;

pub const DEFAULT_LOW_PERCENT: f64 = 90.0;
pub const DEFAULT_NOMINAL_MARGIN: f64 = 0.1;

/// All cutoffs for the reactor checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Thresholds {
    pub criticality: CriticalityLimits,
    pub efficiency: EfficiencyCutoffs,
    pub fail_safe: FailSafeBands,
}

/// Bounds for a balanced reactor (all exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CriticalityLimits {
    /// Temperature must be strictly below this (kelvin)
    pub max_temperature: f64,
    /// Neutrons emitted per second must be strictly above this
    pub min_neutrons_emitted: f64,
    /// temperature × neutrons must be strictly below this
    pub max_product: f64,
}

impl Default for CriticalityLimits {
    fn default() -> Self {
        Self {
            max_temperature: DEFAULT_MAX_TEMPERATURE,
            min_neutrons_emitted: DEFAULT_MIN_NEUTRONS_EMITTED,
            max_product: DEFAULT_MAX_PRODUCT,
        }
    }
}

/// Lower bounds (inclusive, in percent) of the efficiency bands.
/// Anything below `red` is black.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EfficiencyCutoffs {
    pub green: f64,
    pub orange: f64,
    pub red: f64,
}

impl Default for EfficiencyCutoffs {
    fn default() -> Self {
        Self {
            green: DEFAULT_GREEN_PERCENT,
            orange: DEFAULT_ORANGE_PERCENT,
            red: DEFAULT_RED_PERCENT,
        }
    }
}

/// Fail-safe parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FailSafeBands {
    /// Percent of threshold below which the status is LOW
    pub low_percent: f64,
    /// Fraction of threshold the product may exceed it by and stay NORMAL
    pub nominal_margin: f64,
}

impl Default for FailSafeBands {
    fn default() -> Self {
        Self {
            low_percent: DEFAULT_LOW_PERCENT,
            nominal_margin: DEFAULT_NOMINAL_MARGIN,
        }
    }
}

impl Thresholds {
    /// Load thresholds from a JSON file, falling back to defaults for
    /// anything the file leaves out
    ///
    /// # Arguments
    /// * `path` - JSON file with any subset of `criticality`, `efficiency`
    ///   and `fail_safe` sections
    ///
    /// # Returns
    /// Validated thresholds, or an error naming the file when it cannot be
    /// read, is not valid JSON, or fails `validate()`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read thresholds file: {:?}", path))?;

        let thresholds = Self::from_json(&contents)
            .with_context(|| format!("Invalid thresholds in {:?}", path))?;

        tracing::debug!(?path, ?thresholds, "Loaded thresholds");
        Ok(thresholds)
    }

    /// Parse and validate thresholds from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let thresholds: Thresholds = serde_json::from_str(json)
            .with_context(|| "Failed to parse thresholds JSON")?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Reject cutoffs that would make a band unreachable or a comparison
    /// meaningless
    pub fn validate(&self) -> Result<()> {
        let c = &self.criticality;
        for (name, value) in [
            ("criticality.max_temperature", c.max_temperature),
            ("criticality.min_neutrons_emitted", c.min_neutrons_emitted),
            ("criticality.max_product", c.max_product),
        ] {
            if value.is_nan() {
                anyhow::bail!("{} must be a number", name);
            }
        }

        let e = &self.efficiency;
        if ![e.green, e.orange, e.red].iter().all(|v| v.is_finite()) {
            anyhow::bail!("Efficiency cutoffs must be finite: {:?}", e);
        }
        if !(e.green > e.orange && e.orange > e.red) {
            anyhow::bail!(
                "Efficiency cutoffs must be strictly descending, got green={} orange={} red={}",
                e.green,
                e.orange,
                e.red
            );
        }

        let f = &self.fail_safe;
        if !f.low_percent.is_finite() || !f.nominal_margin.is_finite() {
            anyhow::bail!("Fail-safe parameters must be finite: {:?}", f);
        }

        Ok(())
    }
}
