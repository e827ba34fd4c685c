//! Risk aggregation over evaluation metrics.
//!
//! [`compute_risk`] folds an [`EvaluationResult`](crate::evaluation::EvaluationResult)
//! and the summary's length into a fixed set of six flags, a score equal to the
//! number of raised flags, a [`RiskLevel`] and an escalation verdict.
//!
//! # Thresholds
//!
//! Two pairs of thresholds are applied independently:
//!
//! | Metric | Flag threshold | Escalation threshold |
//! |--------|----------------|----------------------|
//! | Entity coverage | below 0.6 (evaluation) | below 0.5 |
//! | FKGL | above 10 | above 12 |
//!
//! A summary can therefore escalate with a `Low` level (coverage 0.45 is not
//! flagged twice) and carry a flag without escalating (FKGL 11).

pub mod policy;
pub mod types;


pub use policy::{RiskPolicy, compute_risk};
pub use types::{RiskAssessment, RiskFlags, RiskLevel};
