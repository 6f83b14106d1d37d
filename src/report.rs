//! Batch evaluation of readings into a JSON-serializable report.
//!
//! Every entry is evaluated in input order. A division-by-zero on one entry is
//! recorded on that entry and does not stop the rest of the batch.

use crate::error::ClassifyResult;
use crate::reactor::{
    efficiency_percentage, fail_safe_with, is_criticality_balanced_with, EfficiencyBand,
    FailSafeStatus,
};
use crate::thresholds::Thresholds;
use crate::triangle::{classify_triangle, equilateral, isosceles, scalene, Sides, TriangleKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Input readings, grouped by check. Missing groups are treated as empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadingBatch {
    pub criticality: Vec<CriticalityReading>,
    pub efficiency: Vec<EfficiencyReading>,
    pub fail_safe: Vec<FailSafeReading>,
    pub triangles: Vec<Sides>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CriticalityReading {
    pub temperature: f64,
    pub neutrons_emitted: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct EfficiencyReading {
    pub voltage: f64,
    pub current: f64,
    pub theoretical_max_power: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct FailSafeReading {
    pub temperature: f64,
    pub neutrons_produced_per_second: f64,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriticalityResult {
    #[serde(flatten)]
    pub reading: CriticalityReading,
    pub balanced: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyResult {
    #[serde(flatten)]
    pub reading: EfficiencyReading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<EfficiencyBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailSafeResult {
    #[serde(flatten)]
    pub reading: FailSafeReading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FailSafeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TriangleResult {
    pub sides: Sides,
    pub kind: TriangleKind,
    pub equilateral: bool,
    pub isosceles: bool,
    pub scalene: bool,
}

/// Per-entry results plus a summary
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub criticality: Vec<CriticalityResult>,
    pub efficiency: Vec<EfficiencyResult>,
    pub fail_safe: Vec<FailSafeResult>,
    pub triangles: Vec<TriangleResult>,
    pub summary: BatchSummary,
}

/// Counts across the whole batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub balanced: usize,
    pub unbalanced: usize,
    pub green: usize,
    pub orange: usize,
    pub red: usize,
    pub black: usize,
    pub low: usize,
    pub normal: usize,
    pub danger: usize,
    pub equilateral: usize,
    pub isosceles: usize,
    pub scalene: usize,
    pub errors: usize,
}

impl BatchSummary {
    fn record_band(&mut self, band: EfficiencyBand) {
        match band {
            EfficiencyBand::Green => self.green += 1,
            EfficiencyBand::Orange => self.orange += 1,
            EfficiencyBand::Red => self.red += 1,
            EfficiencyBand::Black => self.black += 1,
        }
    }

    fn record_status(&mut self, status: FailSafeStatus) {
        match status {
            FailSafeStatus::Low => self.low += 1,
            FailSafeStatus::Normal => self.normal += 1,
            FailSafeStatus::Danger => self.danger += 1,
        }
    }

    fn record_kind(&mut self, kind: TriangleKind) {
        match kind {
            TriangleKind::Equilateral => self.equilateral += 1,
            TriangleKind::Isosceles => self.isosceles += 1,
            TriangleKind::Scalene => self.scalene += 1,
        }
    }
}

/// Split a classifier result into (value, error message)
fn split<T>(result: ClassifyResult<T>) -> (Option<T>, Option<String>) {
    match result {
        Ok(value) => (Some(value), None),
        Err(e) => (None, Some(e.to_string())),
    }
}

/// Evaluate every reading in the batch against the given thresholds
pub fn evaluate_batch(batch: &ReadingBatch, thresholds: &Thresholds) -> BatchReport {
    let mut summary = BatchSummary::default();

    let criticality: Vec<CriticalityResult> = batch
        .criticality
        .iter()
        .map(|&reading| {
            let balanced = is_criticality_balanced_with(
                &thresholds.criticality,
                reading.temperature,
                reading.neutrons_emitted,
            );
            if balanced {
                summary.balanced += 1;
            } else {
                summary.unbalanced += 1;
            }
            CriticalityResult { reading, balanced }
        })
        .collect();

    let efficiency: Vec<EfficiencyResult> = batch
        .efficiency
        .iter()
        .map(|&reading| {
            let (percentage, error) = split(efficiency_percentage(
                reading.voltage,
                reading.current,
                reading.theoretical_max_power,
            ));
            let band =
                percentage.map(|p| EfficiencyBand::from_percentage(p, &thresholds.efficiency));
            match band {
                Some(band) => summary.record_band(band),
                None => summary.errors += 1,
            }
            EfficiencyResult {
                reading,
                percentage,
                band,
                error,
            }
        })
        .collect();

    let fail_safe: Vec<FailSafeResult> = batch
        .fail_safe
        .iter()
        .map(|&reading| {
            let (status, error) = split(fail_safe_with(
                &thresholds.fail_safe,
                reading.temperature,
                reading.neutrons_produced_per_second,
                reading.threshold,
            ));
            match status {
                Some(status) => summary.record_status(status),
                None => summary.errors += 1,
            }
            FailSafeResult {
                reading,
                status,
                error,
            }
        })
        .collect();

    let triangles: Vec<TriangleResult> = batch
        .triangles
        .iter()
        .map(|&sides| {
            let kind = classify_triangle(sides);
            summary.record_kind(kind);
            TriangleResult {
                sides,
                kind,
                equilateral: equilateral(sides),
                isosceles: isosceles(sides),
                scalene: scalene(sides),
            }
        })
        .collect();

    tracing::debug!(?summary, "Evaluated reading batch");

    BatchReport {
        criticality,
        efficiency,
        fail_safe,
        triangles,
        summary,
    }
}

/// Read a batch file and evaluate it
///
/// # Arguments
/// * `batch_path` - JSON file holding a `ReadingBatch`
/// * `thresholds_path` - Optional thresholds JSON; defaults are used when `None`
///
/// # Returns
/// The evaluated report, or an error naming the file that could not be
/// read or parsed. Per-entry classification errors stay inside the report.
pub fn run(batch_path: &Path, thresholds_path: Option<&Path>) -> Result<BatchReport> {
    let thresholds = match thresholds_path {
        Some(path) => Thresholds::load(path)?,
        None => Thresholds::default(),
    };

    let contents = fs::read_to_string(batch_path)
        .with_context(|| format!("Failed to read batch file: {:?}", batch_path))?;
    let batch: ReadingBatch = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse batch file: {:?}", batch_path))?;

    Ok(evaluate_batch(&batch, &thresholds))
}
