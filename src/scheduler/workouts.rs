// ABOUTME: Per-day workout composition: durations, treadmill synthesis, strength blocks
// ABOUTME: Applies interval repeat shaping, long-hike growth caps, and stacked add-ons
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::{
    adaptation, composition, intervals, segments as seg, session_weights, strength,
};
use crate::demands::clamped_average_grade;
use crate::models::{
    Constraints, FitnessLevel, Hike, TrainingDay, TrainingSegment, TrainingWorkout, WorkoutType,
};
use crate::segments::{
    clamp, round_to_step, smooth_segment_inclines, synthesize, SegmentSettings, TargetDuration,
    TreadmillBounds,
};

use super::WeekFlags;

/// Strength-training phase across the plan's periodization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthPhase {
    /// Adaptation weeks: easy movement quality work
    MovementPrep,
    /// Build weeks: climbing-specific leg and core strength
    LegStrengthCore,
    /// Penultimate week: hold strength without adding fatigue
    Maintenance,
    /// Taper week: light mobility only
    LightMobility,
}

impl StrengthPhase {
    /// Phase for a given week.
    #[must_use]
    pub const fn for_week(is_adaptation: bool, week_number: u32, total_weeks: u32) -> Self {
        if week_number == total_weeks {
            Self::LightMobility
        } else if is_adaptation && week_number <= adaptation::WEEK_COUNT {
            Self::MovementPrep
        } else if week_number + 1 == total_weeks {
            Self::Maintenance
        } else {
            Self::LegStrengthCore
        }
    }

    /// Label used in week-note suffixes ("Strength focus: ...")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MovementPrep => "movement prep & injury prevention",
            Self::LegStrengthCore => "leg strength + core",
            Self::Maintenance => "maintenance strength",
            Self::LightMobility => "light mobility for recovery",
        }
    }

    /// Coaching note for a strength workout in this phase
    #[must_use]
    pub const fn note(self) -> &'static str {
        match self {
            Self::MovementPrep => "Movement prep & injury prevention. Intensity: light.",
            Self::LegStrengthCore => {
                "Strength to support climbing endurance. Intensity: moderate."
            }
            Self::Maintenance => "Maintain strength, avoid fatigue. Intensity: moderate.",
            Self::LightMobility => "Strength reduced for recovery. Intensity: light.",
        }
    }

    /// Duration multiplier applied to the strength allocation
    #[must_use]
    pub const fn duration_factor(self) -> f64 {
        match self {
            Self::MovementPrep | Self::LegStrengthCore => 1.0,
            Self::Maintenance => strength::MAINTENANCE_PHASE_FACTOR,
            Self::LightMobility => strength::MOBILITY_PHASE_FACTOR,
        }
    }
}

/// Everything `build_workout` needs about the surrounding week.
#[derive(Debug, Clone, Copy)]
pub struct WorkoutContext<'a> {
    /// 1-based week number
    pub week_number: u32,
    /// Weekly volume allocation, minutes
    pub week_volume: u32,
    /// User fitness level
    pub fitness_level: FitnessLevel,
    /// Target hike geometry
    pub hike: &'a Hike,
    /// Equipment ceilings
    pub constraints: &'a Constraints,
    /// Minutes of the most recent outdoor long hike
    pub last_long_hike_minutes: u32,
    /// Weekly phase flags
    pub flags: WeekFlags,
    /// Strength phase for this week
    pub strength_phase: StrengthPhase,
    /// Ramped long-session target, minutes
    pub long_session_minutes: u32,
    /// Ramped incline ceiling for this week, percent
    pub incline_cap: f64,
    /// Whether this slot carries the week's long session
    pub is_long_session: bool,
}

/// Build the primary workout for one scheduled day slot.
#[must_use]
pub fn build_workout(ctx: &WorkoutContext<'_>, workout_type: WorkoutType) -> TrainingWorkout {
    let allocation = allocate_duration(ctx.week_volume, workout_type);
    let duration = if ctx.flags.is_adaptation {
        allocation.clamp(
            adaptation::MIN_WORKOUT_MINUTES,
            adaptation::MAX_WORKOUT_MINUTES,
        )
    } else {
        allocation
    };
    let incline_cap = if ctx.flags.is_adaptation {
        ctx.constraints
            .treadmill_max_incline_percent
            .min(adaptation::INCLINE_CAP_PCT)
    } else {
        ctx.incline_cap
    };

    match workout_type {
        WorkoutType::TreadmillIntervals => build_intervals(ctx, duration, incline_cap),
        WorkoutType::Zone2InclineWalk => build_zone2(ctx, duration, incline_cap),
        WorkoutType::Strength => TrainingWorkout {
            id: workout_id(ctx.week_number, workout_type),
            workout_type,
            duration_minutes: strength_duration(
                ctx.week_volume,
                ctx.strength_phase,
                ctx.flags.is_event_prep,
            ),
            incline_target: None,
            notes: if ctx.flags.is_event_prep {
                "Reduced strength load; focus on mobility and activation. Intensity: light."
                    .to_owned()
            } else {
                "Bodyweight squats, lunges, step-ups, core. Intensity: moderate.".to_owned()
            },
            segments: None,
        },
        WorkoutType::OutdoorLongHike => build_outdoor_long_hike(ctx),
        WorkoutType::RecoveryMobility => TrainingWorkout {
            id: workout_id(ctx.week_number, workout_type),
            workout_type,
            duration_minutes: composition::RECOVERY_MINUTES,
            incline_target: None,
            notes: "Active recovery: 30-60% max HR. Mobility, stretching, easy walk.".to_owned(),
            segments: None,
        },
        WorkoutType::RestDay => TrainingWorkout {
            id: workout_id(ctx.week_number, workout_type),
            workout_type,
            duration_minutes: 0,
            incline_target: None,
            notes: "Rest day.".to_owned(),
            segments: None,
        },
    }
}

fn build_intervals(ctx: &WorkoutContext<'_>, duration: u32, incline_cap: f64) -> TrainingWorkout {
    let target = if ctx.flags.is_adaptation {
        duration
    } else {
        clamp_session_duration(duration, ctx.fitness_level)
    };
    let plan = synthesize(
        &ctx.hike.profile_points,
        ctx.hike.distance_miles,
        ctx.hike.elevation_gain_ft,
        &SegmentSettings {
            fitness_level: ctx.fitness_level,
            target_duration: TargetDuration::Minutes(target),
            pack_weight_lbs: 0.0,
            treadmill: TreadmillBounds {
                min_incline_percent: 0.0,
                max_incline_percent: incline_cap,
                max_speed_mph: ctx.constraints.max_speed_mph,
            },
        },
    );
    let segments = apply_interval_pattern(&plan.segments, ctx.constraints, incline_cap);
    TrainingWorkout {
        id: workout_id(ctx.week_number, WorkoutType::TreadmillIntervals),
        workout_type: WorkoutType::TreadmillIntervals,
        duration_minutes: plan.total_minutes,
        incline_target: None,
        notes: if ctx.flags.is_deload || ctx.flags.is_taper {
            "Shorter intervals, keep effort smooth.".to_owned()
        } else {
            "Incline intervals based on hike profile.".to_owned()
        },
        segments: Some(segments),
    }
}

fn build_zone2(ctx: &WorkoutContext<'_>, duration: u32, incline_cap: f64) -> TrainingWorkout {
    let incline_target = clamped_average_grade(
        &ctx.hike.profile_points,
        composition::ZONE2_INCLINE_TARGET_FLOOR_PCT,
        incline_cap,
    );
    let target = if ctx.flags.is_adaptation {
        // Adaptation overrides the long-session targeting and level clamps
        duration
    } else {
        let minutes = if ctx.is_long_session {
            duration.max(ctx.long_session_minutes)
        } else {
            (f64::from(duration) * composition::ZONE2_SHORT_SESSION_FRACTION).round() as u32
        };
        clamp_session_duration(minutes, ctx.fitness_level)
    };
    let plan = synthesize(
        &ctx.hike.profile_points,
        ctx.hike.distance_miles,
        ctx.hike.elevation_gain_ft,
        &SegmentSettings {
            fitness_level: ctx.fitness_level,
            target_duration: TargetDuration::Minutes(target),
            pack_weight_lbs: 0.0,
            treadmill: TreadmillBounds {
                min_incline_percent: 0.0,
                max_incline_percent: incline_cap,
                max_speed_mph: ctx.constraints.max_speed_mph,
            },
        },
    );
    let segments = smooth_segment_inclines(&plan.segments, seg::ZONE2_SMOOTHING_WINDOW);
    TrainingWorkout {
        id: workout_id(ctx.week_number, WorkoutType::Zone2InclineWalk),
        workout_type: WorkoutType::Zone2InclineWalk,
        duration_minutes: plan.total_minutes,
        incline_target: Some(incline_target),
        notes: "Steady state, nose-breathing effort.".to_owned(),
        segments: Some(segments),
    }
}

fn build_outdoor_long_hike(ctx: &WorkoutContext<'_>) -> TrainingWorkout {
    let target = ctx.long_session_minutes.max(ctx.last_long_hike_minutes);
    // Week-over-week growth cap controls runaway long-hike duration
    let capped = target.min(
        ctx.last_long_hike_minutes + composition::LONG_HIKE_MAX_WEEKLY_GROWTH_MINUTES,
    );
    let minutes = if ctx.flags.is_event_prep {
        capped.max(composition::EVENT_PREP_LONG_HIKE_FLOOR_MINUTES)
    } else if ctx.flags.is_adaptation {
        capped.clamp(
            adaptation::MIN_WORKOUT_MINUTES,
            adaptation::MAX_WORKOUT_MINUTES,
        )
    } else {
        capped
    };
    TrainingWorkout {
        id: workout_id(ctx.week_number, WorkoutType::OutdoorLongHike),
        workout_type: WorkoutType::OutdoorLongHike,
        duration_minutes: minutes,
        incline_target: None,
        notes: if ctx.flags.is_event_prep {
            "Long outdoor hike with a light weighted pack. Keep effort steady.".to_owned()
        } else {
            format!(
                "Focus on time-on-feet with {} ft of climbing.",
                (ctx.hike.elevation_gain_ft * 0.3).round()
            )
        },
        segments: None,
    }
}

/// Allocate a duration from the weekly volume using the fixed per-type
/// weights, floored at 20 minutes for anything that moves.
#[must_use]
pub fn allocate_duration(week_volume: u32, workout_type: WorkoutType) -> u32 {
    let weight = match workout_type {
        WorkoutType::OutdoorLongHike => session_weights::OUTDOOR_LONG_HIKE,
        WorkoutType::TreadmillIntervals => session_weights::TREADMILL_INTERVALS,
        WorkoutType::Zone2InclineWalk => session_weights::ZONE2_INCLINE_WALK,
        WorkoutType::Strength => session_weights::STRENGTH,
        WorkoutType::RecoveryMobility => session_weights::RECOVERY_MOBILITY,
        WorkoutType::RestDay => return 0,
    };
    ((f64::from(week_volume) * weight).round() as u32).max(session_weights::ALLOCATION_FLOOR_MINUTES)
}

/// Clamp a synthesized session into the per-level duration band.
#[must_use]
pub fn clamp_session_duration(duration: u32, fitness_level: FitnessLevel) -> u32 {
    duration.clamp(
        session_weights::SESSION_FLOOR_MINUTES,
        fitness_level.max_session_minutes(),
    )
}

/// Strength block duration for the week: allocation scaled by phase,
/// clamped into the 15-28 minute band, capped at 15 during event prep.
#[must_use]
pub fn strength_duration(
    week_volume: u32,
    phase: StrengthPhase,
    is_event_prep: bool,
) -> u32 {
    let base = allocate_duration(week_volume, WorkoutType::Strength);
    let mut factor = phase.duration_factor();
    if is_event_prep {
        factor = factor.min(strength::MOBILITY_PHASE_FACTOR);
    }
    let duration = ((f64::from(base) * factor).round() as u32)
        .clamp(strength::MIN_BLOCK_MINUTES, strength::MAX_BLOCK_MINUTES);
    if is_event_prep {
        duration.min(strength::EVENT_PREP_CAP_MINUTES)
    } else {
        duration
    }
}

/// Reshape a synthesized workout's main segments into alternating hard and
/// easy repeats: incline up 15% / speed down 8% on hard segments, the
/// inverse on easy ones. Warm-up and cool-down segments pass through.
#[must_use]
pub fn apply_interval_pattern(
    segments: &[TrainingSegment],
    constraints: &Constraints,
    incline_cap: f64,
) -> Vec<TrainingSegment> {
    if segments.len() <= 2 {
        return segments.to_vec();
    }
    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            if segment.index == 0 || idx == last {
                return segment.clone();
            }
            let is_hard = idx % 2 == 1;
            let (incline_factor, speed_factor) = if is_hard {
                (intervals::HARD_INCLINE_FACTOR, intervals::HARD_SPEED_FACTOR)
            } else {
                (intervals::EASY_INCLINE_FACTOR, intervals::EASY_SPEED_FACTOR)
            };
            let incline = clamp(
                round_to_step(
                    clamp(segment.incline_pct * incline_factor, 0.0, incline_cap),
                    seg::INCLINE_STEP,
                ),
                0.0,
                incline_cap,
            );
            let speed = clamp(
                round_to_step(
                    clamp(
                        segment.speed_mph * speed_factor,
                        intervals::MIN_INTERVAL_SPEED_MPH,
                        constraints.max_speed_mph,
                    ),
                    seg::SPEED_STEP,
                ),
                0.0,
                constraints.max_speed_mph,
            );
            TrainingSegment {
                index: segment.index,
                minutes: segment.minutes,
                incline_pct: incline,
                speed_mph: speed,
                note: segment.note.clone().or_else(|| {
                    Some(if is_hard { "Hard interval" } else { "Recovery" }.to_owned())
                }),
            }
        })
        .collect()
}

/// Append stacked strength add-ons to cardio days, at most two per week and
/// never more than the cardio-day count.
pub fn attach_strength_addons(
    days: &mut [TrainingDay],
    requested: u32,
    phase: StrengthPhase,
    week_volume: u32,
    is_event_prep: bool,
) {
    let cardio_indices: Vec<usize> = days
        .iter()
        .enumerate()
        .filter(|(_, day)| day.workouts.iter().any(|w| w.workout_type.is_cardio()))
        .map(|(idx, _)| idx)
        .collect();
    let count = (requested as usize)
        .min(strength::MAX_STACKED_ADDONS_PER_WEEK)
        .min(cardio_indices.len());

    for &idx in cardio_indices.iter().take(count) {
        let day = &mut days[idx];
        day.workouts.push(TrainingWorkout {
            id: format!("{}-strength-addon", day.date),
            workout_type: WorkoutType::Strength,
            duration_minutes: strength_duration(week_volume, phase, is_event_prep),
            incline_target: None,
            notes: format!(
                "{} Do strength first, then cardio 6+ hours later.",
                phase.note()
            ),
            segments: None,
        });
    }
}

/// Whether any two consecutive scheduled days both carry high-volume cardio.
#[must_use]
pub fn has_consecutive_high_intensity_days(days: &[TrainingDay]) -> bool {
    days.windows(2).any(|pair| {
        pair.iter().all(|day| {
            day.workouts
                .iter()
                .any(|w| w.workout_type.is_high_volume_cardio())
        })
    })
}

/// Deterministic workout id: week number plus the type slug.
#[must_use]
pub fn workout_id(week_number: u32, workout_type: WorkoutType) -> String {
    format!("{week_number}-{}", workout_type.slug())
}
