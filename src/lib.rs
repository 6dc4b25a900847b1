// ABOUTME: Library entry point for the trekplan hike-training scheduler
// ABOUTME: Exposes the plan builder, segment synthesizer, and shared data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # trekplan
//!
//! A periodized training-plan scheduler for hike preparation. Given a target
//! hike's geometry (distance, elevation gain, an elevation-vs-distance
//! profile) and a user's constraints (fitness level, date window, weekly
//! availability, equipment limits), it produces a concrete day-by-day
//! workout calendar with per-workout treadmill incline/speed segments.
//!
//! ## Design
//!
//! - **Segment synthesizer** ([`segments`]): pure function turning an
//!   elevation profile plus treadmill ceilings into a warm-up/main/cool-down
//!   sequence of timed incline+speed segments.
//! - **Plan scheduler** ([`scheduler`]): computes hike demand targets,
//!   builds a progressive-overload weekly volume curve with deload and taper
//!   weeks, maps day slots onto calendar dates, assigns workout types under
//!   a capacity invariant, and invokes the synthesizer for treadmill days.
//!
//! The scheduler is pure and deterministic: no clock, no I/O, no shared
//! state. Identical inputs produce byte-identical output trees, and every
//! degraded situation surfaces as a warning on the returned plan rather
//! than an error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use trekplan::{build_training_plan, validate_inputs, TrainingPlanInputs};
//!
//! # fn example(inputs: TrainingPlanInputs) -> trekplan::PlanResult<()> {
//! validate_inputs(&inputs)?;
//! let plan = build_training_plan(&inputs);
//! println!("{} weeks, {} warnings", plan.total_weeks, plan.warnings.len());
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod demands;
pub mod errors;
pub mod models;
pub mod scheduler;
pub mod segments;
pub mod validation;

pub use demands::{build_peak_targets, derive_hike_demands, HikeDemands, PeakTargets};
pub use errors::{PlanError, PlanResult};
pub use models::{
    Constraints, FitnessLevel, Hike, PlanSummary, ProfilePoint, StrengthSettings, TrainingDay,
    TrainingPlanInputs, TrainingPlanOutput, TrainingSegment, TrainingWeek, TrainingWorkout,
    WorkoutType,
};
pub use scheduler::build_training_plan;
pub use segments::{
    synthesize, SegmentSettings, SynthesizedWorkout, TargetDuration, TreadmillBounds,
};
pub use validation::validate_inputs;
