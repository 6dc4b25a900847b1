// ABOUTME: Caller-contract validation run before the scheduler sees the inputs
// ABOUTME: Rejects inverted date windows and out-of-range or non-finite fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{PlanError, PlanResult};
use crate::models::TrainingPlanInputs;

/// Validate scheduling inputs against the caller contract.
///
/// The scheduler itself assumes validated input and never re-checks these;
/// any violation here is a programming error on the caller's side, not a
/// plan-quality problem (those degrade to warnings instead).
///
/// # Errors
///
/// Returns [`PlanError`] when the date window is inverted, `days_per_week`
/// is outside 1-7, `max_speed_mph` is not positive, or any float field is
/// non-finite.
pub fn validate_inputs(inputs: &TrainingPlanInputs) -> PlanResult<()> {
    if inputs.training_start_date > inputs.target_date {
        return Err(PlanError::InvalidDateWindow {
            start: inputs.training_start_date,
            target: inputs.target_date,
        });
    }

    if !(1..=7).contains(&inputs.days_per_week) {
        return Err(PlanError::ValueOutOfRange {
            field: "days_per_week",
            value: f64::from(inputs.days_per_week),
            range: "1-7",
        });
    }

    check_finite("hike.distance_miles", inputs.hike.distance_miles)?;
    check_finite("hike.elevation_gain_ft", inputs.hike.elevation_gain_ft)?;
    for point in &inputs.hike.profile_points {
        check_finite("profile_points.distance_miles", point.distance_miles)?;
        check_finite("profile_points.elevation_ft", point.elevation_ft)?;
    }
    check_finite(
        "constraints.treadmill_max_incline_percent",
        inputs.constraints.treadmill_max_incline_percent,
    )?;
    check_finite("constraints.max_speed_mph", inputs.constraints.max_speed_mph)?;

    if inputs.hike.distance_miles < 0.0 {
        return Err(PlanError::ValueOutOfRange {
            field: "hike.distance_miles",
            value: inputs.hike.distance_miles,
            range: ">= 0",
        });
    }

    if inputs.constraints.treadmill_max_incline_percent < 0.0 {
        return Err(PlanError::ValueOutOfRange {
            field: "constraints.treadmill_max_incline_percent",
            value: inputs.constraints.treadmill_max_incline_percent,
            range: ">= 0",
        });
    }

    if inputs.constraints.max_speed_mph <= 0.0 {
        return Err(PlanError::ValueOutOfRange {
            field: "constraints.max_speed_mph",
            value: inputs.constraints.max_speed_mph,
            range: "> 0",
        });
    }

    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> PlanResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlanError::NonFiniteValue { field })
    }
}
