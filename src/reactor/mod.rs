//! Reactor reading checks
//!
//! Three independent classifiers over transient numeric readings:
//! - `criticality`: is the reactor balanced?
//! - `efficiency`: which efficiency band is it in?
//! - `fail_safe`: LOW / NORMAL / DANGER status against a threshold

pub mod criticality;
pub mod efficiency;
pub mod fail_safe;

// Re-export public API
pub use criticality::{is_criticality_balanced, is_criticality_balanced_with};
pub use efficiency::{
    efficiency_percentage, reactor_efficiency, reactor_efficiency_with, EfficiencyBand,
};
pub use fail_safe::{fail_safe, fail_safe_with, FailSafeStatus};
