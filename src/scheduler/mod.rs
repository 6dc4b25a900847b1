// ABOUTME: Plan scheduler orchestration: demand targets, weekly loop, diagnostics
// ABOUTME: Produces the full TrainingPlanOutput calendar from validated inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The periodized plan scheduler.
//!
//! Pure, synchronous, and deterministic: identical inputs always produce a
//! byte-identical output tree. All degraded situations (short windows,
//! over-requested sessions, missing preferred days) surface as warnings on
//! the returned plan, never as errors.

pub mod calendar;
pub mod sessions;
pub mod volume;
pub mod workouts;

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::constants::{adaptation, adequacy, composition, volume as vc};
use crate::demands::{build_peak_targets, derive_hike_demands, min_prep_weeks};
use crate::models::{
    day_name, PlanSummary, TrainingDay, TrainingPlanInputs, TrainingPlanOutput, TrainingWeek,
    WorkoutType,
};
use crate::segments::clamp;

use calendar::{pick_training_days, schedule_week_days};
use sessions::{build_week_slots, enforce_capacity};
use workouts::{
    attach_strength_addons, build_workout, has_consecutive_high_intensity_days, StrengthPhase,
    WorkoutContext,
};

/// Phase flags for one plan week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct WeekFlags {
    /// Every 4th week: reduced volume for recovery
    pub is_deload: bool,
    /// Final week: reduced volume before the event
    pub is_taper: bool,
    /// One of the first two weeks
    pub is_early: bool,
    /// Conservative early week for detrained users
    pub is_adaptation: bool,
    /// One of the final two weeks before the event
    pub is_event_prep: bool,
}

/// Build a complete multi-week training plan.
///
/// Inputs are assumed validated (see [`crate::validation::validate_inputs`]).
/// The scheduler never fails: extreme inputs degrade to entries in
/// `warnings` while still returning a structurally valid plan.
#[must_use]
#[allow(clippy::too_many_lines)] // Orchestration mirrors the plan's week-by-week shape
pub fn build_training_plan(inputs: &TrainingPlanInputs) -> TrainingPlanOutput {
    let start = inputs.training_start_date;
    let target = inputs.target_date;
    let window_days = (target - start).num_days() + 1;
    let total_weeks = (((window_days + 6) / 7).max(1)) as u32;
    let mut warnings: Vec<String> = Vec::new();

    if total_weeks < 2 {
        warnings.push(
            "Less than two weeks to your target date. Keep sessions short and stay fresh."
                .to_owned(),
        );
    }

    let demands = derive_hike_demands(&inputs.hike);
    let required_weeks = min_prep_weeks(inputs.hike.distance_miles, inputs.hike.elevation_gain_ft);
    if total_weeks < required_weeks {
        warn!(total_weeks, required_weeks, "plan window below minimum preparation bracket");
        warnings.push(format!(
            "This hike typically requires at least {required_weeks} weeks of preparation. \
             Your plan may not fully prepare you."
        ));
    }

    let low_baseline = inputs.baseline_minutes <= vc::LOW_BASELINE_MINUTES;
    if low_baseline
        && inputs.constraints.treadmill_sessions_per_week
            + inputs.constraints.outdoor_hikes_per_week
            >= inputs.days_per_week
    {
        warnings.push("Ambitious plan: recommended only if you already train consistently.".to_owned());
    }

    let peak_targets = build_peak_targets(&demands, total_weeks);
    let week_volumes = volume::build_weekly_volumes(
        inputs.baseline_minutes,
        total_weeks,
        peak_targets.weekly_volume_target,
    );
    let picked_days = pick_training_days(
        inputs.days_per_week,
        &inputs.preferred_days,
        inputs.any_days,
    );
    let average_weekly_minutes = (week_volumes.iter().map(|&v| f64::from(v)).sum::<f64>()
        / week_volumes.len().max(1) as f64)
        .round() as u32;

    let requested_strength = if inputs.strength.include {
        inputs.strength.sessions_per_week
    } else {
        0
    };
    let (mix, reduced) = enforce_capacity(
        inputs.days_per_week,
        inputs.constraints.treadmill_sessions_per_week,
        inputs.constraints.outdoor_hikes_per_week,
        requested_strength,
        inputs.strength.on_cardio_days,
    );
    if reduced {
        warn!(
            days_per_week = inputs.days_per_week,
            treadmill = mix.treadmill,
            outdoor = mix.outdoor,
            strength = mix.strength,
            "session counts reduced to fit training days"
        );
        warnings.push("Cardio + strength sessions cannot exceed training days.".to_owned());
    }

    let mut last_long_hike_minutes =
        (f64::from(inputs.baseline_minutes) * composition::LONG_SESSION_BASELINE_FRACTION).round()
            as u32;
    let peak_week_index = if total_weeks > 1 {
        (total_weeks - 2) as usize
    } else {
        0
    };

    let mut weeks: Vec<TrainingWeek> = Vec::with_capacity(week_volumes.len());
    for (index, &week_volume) in week_volumes.iter().enumerate() {
        let week_number = index as u32 + 1;
        let week_start = start + Days::new(index as u64 * 7);
        let week_end = (week_start + Days::new(6)).min(target.max(week_start));
        let flags = WeekFlags {
            is_deload: week_number % vc::DELOAD_INTERVAL_WEEKS == 0,
            is_taper: week_number == total_weeks,
            is_early: week_number <= 2,
            is_adaptation: low_baseline && week_number <= adaptation::WEEK_COUNT,
            is_event_prep: total_weeks - week_number <= 1,
        };
        let strength_phase = StrengthPhase::for_week(flags.is_adaptation, week_number, total_weeks);
        let slots = build_week_slots(
            &mix,
            inputs.days_per_week,
            inputs.strength.include,
            inputs.strength.on_cardio_days,
            &flags,
        );

        let long_session_minutes = long_session_target(
            inputs.baseline_minutes,
            peak_targets.long_session_target,
            week_number,
            total_weeks,
            flags.is_adaptation,
        );
        let incline_cap = week_incline_cap(
            peak_targets.sustained_incline_target,
            week_number,
            total_weeks,
            flags.is_adaptation,
            inputs.constraints.treadmill_max_incline_percent,
        );

        let scheduled = schedule_week_days(
            week_start,
            week_end,
            inputs.days_per_week,
            &inputs.preferred_days,
            inputs.any_days,
        );
        if let Some(warning) = scheduled.warning {
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }

        let mut days: Vec<TrainingDay> = Vec::with_capacity(scheduled.days.len());
        for (position, date) in scheduled.days.iter().enumerate() {
            let workout_type = slots
                .get(position)
                .copied()
                .unwrap_or(WorkoutType::RestDay);
            let is_long_session = workout_type == WorkoutType::OutdoorLongHike
                || (workout_type == WorkoutType::Zone2InclineWalk
                    && mix.outdoor == 0
                    && position == 0);
            let workout = build_workout(
                &WorkoutContext {
                    week_number,
                    week_volume,
                    fitness_level: inputs.fitness_level,
                    hike: &inputs.hike,
                    constraints: &inputs.constraints,
                    last_long_hike_minutes,
                    flags,
                    strength_phase,
                    long_session_minutes,
                    incline_cap,
                    is_long_session,
                },
                workout_type,
            );
            if workout.workout_type == WorkoutType::OutdoorLongHike {
                last_long_hike_minutes = workout.duration_minutes;
            }
            days.push(TrainingDay {
                date: *date,
                day_name: day_name(*date),
                workouts: vec![workout],
            });
        }

        if inputs.strength.include && inputs.strength.on_cardio_days && mix.strength > 0 {
            let cardio_count = mix.treadmill + mix.outdoor;
            if cardio_count > 0 {
                attach_strength_addons(
                    &mut days,
                    mix.strength.min(cardio_count),
                    strength_phase,
                    week_volume,
                    flags.is_event_prep,
                );
                if has_consecutive_high_intensity_days(&days) {
                    let warning = "Stacked sessions create consecutive high-intensity days. \
                                   Consider reducing sessions or extending your timeline."
                        .to_owned();
                    if !warnings.contains(&warning) {
                        warnings.push(warning);
                    }
                }
            }
        }

        let total_minutes: u32 = days
            .iter()
            .flat_map(|day| day.workouts.iter())
            .map(|w| w.duration_minutes)
            .sum();

        let mut notes = week_notes(flags.is_adaptation, week_number, total_weeks).to_owned();
        if index == peak_week_index {
            let peak_long_session = days
                .iter()
                .flat_map(|day| day.workouts.iter())
                .map(|w| w.duration_minutes)
                .max()
                .unwrap_or(0);
            let hike_minutes = f64::from(demands.estimated_duration_minutes);
            let meets_long = f64::from(peak_long_session)
                >= (hike_minutes * adequacy::LONG_SESSION_FRACTION).round();
            let meets_volume = f64::from(total_minutes)
                >= (hike_minutes * adequacy::WEEKLY_VOLUME_FACTOR).round();
            let meets_incline =
                incline_cap >= demands.average_grade_pct * adequacy::INCLINE_FRACTION;
            if !meets_long || !meets_volume || !meets_incline {
                notes.push_str(
                    " This plan does not fully reach hike-specific demands \
                     due to limited time or availability.",
                );
            }
        }

        if index > 0 {
            let prev = week_volumes[index - 1];
            let delta = if prev > 0 {
                ((f64::from(week_volume) - f64::from(prev)) / f64::from(prev) * 100.0).round()
                    as i64
            } else {
                0
            };
            if delta > 0 {
                notes.push_str(&format!(" Progression: +{delta}% volume vs last week."));
            } else if delta < 0 {
                notes.push_str(&format!(" Volume {delta}% vs last week."));
            }
        }

        if inputs.strength.include {
            notes.push_str(&format!(" Strength focus: {}.", strength_phase.label()));
        }

        weeks.push(TrainingWeek {
            week_number,
            start_date: week_start,
            end_date: week_end,
            total_minutes,
            notes,
            focus: week_focus(flags.is_adaptation, week_number, total_weeks).to_owned(),
            days,
        });
    }

    debug!(
        total_weeks,
        warnings = warnings.len(),
        average_weekly_minutes,
        "built training plan"
    );

    TrainingPlanOutput {
        total_weeks,
        warnings,
        summary: PlanSummary {
            days_per_week: inputs.days_per_week,
            preferred_days: picked_days,
            average_weekly_minutes,
        },
        weeks,
    }
}

/// Ramped long-session target for one week: grows linearly from 40% of
/// baseline toward the peak target by the penultimate week. Adaptation
/// weeks stay at a quarter of the peak, clamped to 15-30 minutes.
fn long_session_target(
    baseline_minutes: u32,
    peak_long_target: u32,
    week_number: u32,
    total_weeks: u32,
    is_adaptation: bool,
) -> u32 {
    if is_adaptation {
        return clamp(
            f64::from(peak_long_target) * adaptation::LONG_TARGET_FRACTION,
            f64::from(adaptation::MIN_WORKOUT_MINUTES),
            30.0,
        )
        .round() as u32;
    }
    let peak_week = (total_weeks - 1).max(1);
    let progress = (f64::from(week_number) / f64::from(peak_week)).min(1.0);
    let baseline_long = (f64::from(baseline_minutes)
        * composition::LONG_SESSION_BASELINE_FRACTION)
        .max(composition::LONG_SESSION_TARGET_FLOOR_MINUTES);
    (baseline_long + (f64::from(peak_long_target) - baseline_long) * progress).round() as u32
}

/// Weekly treadmill incline ceiling: ramps linearly from 3% toward the peak
/// sustained-incline target, never exceeding the machine's ceiling.
fn week_incline_cap(
    peak_incline_target: f64,
    week_number: u32,
    total_weeks: u32,
    is_adaptation: bool,
    max_incline: f64,
) -> f64 {
    if is_adaptation {
        return max_incline.min(adaptation::INCLINE_CAP_PCT);
    }
    let peak_week = (total_weeks - 1).max(1);
    let progress = (f64::from(week_number) / f64::from(peak_week)).min(1.0);
    let ramped = composition::INCLINE_RAMP_BASE_PCT
        + (peak_incline_target - composition::INCLINE_RAMP_BASE_PCT) * progress;
    clamp(
        max_incline.min(ramped.max(composition::INCLINE_RAMP_BASE_PCT)),
        0.0,
        max_incline,
    )
}

/// Coaching note for the week's phase.
const fn week_notes(is_adaptation: bool, week_number: u32, total_weeks: u32) -> &'static str {
    if is_adaptation && week_number <= 2 {
        "Adaptation week: focus on consistency and easy effort."
    } else if week_number == total_weeks {
        "Taper week: reduce volume, keep a little intensity."
    } else if week_number % vc::DELOAD_INTERVAL_WEEKS == 0 {
        "Deload week: reduce volume and focus on recovery."
    } else {
        "Build week: small volume increase."
    }
}

/// Short focus label for the week's phase.
const fn week_focus(is_adaptation: bool, week_number: u32, total_weeks: u32) -> &'static str {
    if is_adaptation && week_number <= 2 {
        "Adaptation: building consistency"
    } else if week_number == total_weeks {
        "Taper: reduce volume, stay sharp"
    } else if week_number % vc::DELOAD_INTERVAL_WEEKS == 0 {
        "Deload: emphasize recovery"
    } else if week_number + 1 == total_weeks {
        "Peak: hike-specific endurance"
    } else {
        "Build: increasing time-on-feet"
    }
}
