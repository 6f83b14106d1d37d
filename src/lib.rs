//! Reading Checks
//!
//! Pure classifiers over transient numeric inputs.
//!
//! - `reactor/`: criticality, efficiency band and fail-safe checks on reactor readings
//! - `triangle`: equilateral / isosceles / scalene predicates on three side lengths
//! - `thresholds`: configurable cutoffs (defaults reproduce the fixed constants)
//! - `report`: evaluate a whole batch of readings into a serializable report
//!
//! Nothing here holds state; every function is safe to call from any thread.

pub mod error;
pub mod reactor;
pub mod report;
pub mod thresholds;
pub mod triangle;

// Re-export commonly used types
pub use error::{ClassifyError, ClassifyResult};
pub use reactor::{
    efficiency_percentage, fail_safe, fail_safe_with, is_criticality_balanced,
    is_criticality_balanced_with, reactor_efficiency, reactor_efficiency_with, EfficiencyBand,
    FailSafeStatus,
};
pub use report::{evaluate_batch, BatchReport, BatchSummary, ReadingBatch};
pub use thresholds::{CriticalityLimits, EfficiencyCutoffs, FailSafeBands, Thresholds};
pub use triangle::{classify_triangle, equilateral, isosceles, scalene, Sides, TriangleKind};
