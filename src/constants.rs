// ABOUTME: Named training constants grouped by concern for the plan scheduler
// ABOUTME: Centralizes pacing heuristics, periodization factors, and rounding steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Training constants used throughout the scheduler.
//!
//! Values follow widely used hiking and endurance-training heuristics;
//! references are noted where a constant traces to a published rule.

/// Hike demand estimation
pub mod demands {
    /// Assumed flat hiking pace for duration estimates, mph.
    /// Naismith's rule: 3 mph on flat ground.
    pub const FLAT_HIKING_PACE_MPH: f64 = 3.0;

    /// Extra hours per 1000 ft of climbing.
    /// Naismith's rule: roughly 30 minutes per 1000 ft of ascent.
    pub const CLIMB_HOURS_PER_1000_FT: f64 = 0.5;

    /// Window (in profile segments) for the sustained-grade peak
    pub const SUSTAINED_GRADE_WINDOW: usize = 3;
}

/// Grade geometry
pub mod grade {
    /// Feet per mile, for grade-percent computation
    pub const FEET_PER_MILE: f64 = 5280.0;

    /// Minimum segment distance to avoid division blow-ups on dense
    /// or duplicated profile samples, miles
    pub const MIN_SEGMENT_DISTANCE_MILES: f64 = 0.01;
}

/// Peak-week targets derived from hike demands
pub mod peak_targets {
    /// Long-session fraction of estimated hike duration for plans under 4 weeks
    pub const LONG_SESSION_FACTOR_SHORT_PLAN: f64 = 0.7;
    /// Long-session fraction for 4-7 week plans
    pub const LONG_SESSION_FACTOR_MEDIUM_PLAN: f64 = 0.78;
    /// Long-session fraction for plans of 8 weeks or more
    pub const LONG_SESSION_FACTOR_LONG_PLAN: f64 = 0.85;

    /// Sustained-incline fraction of average hike grade for shorter plans
    pub const INCLINE_FACTOR_SHORT_PLAN: f64 = 0.7;
    /// Sustained-incline fraction for plans of 8 weeks or more
    pub const INCLINE_FACTOR_LONG_PLAN: f64 = 0.8;
    /// Sustained-incline target floor, percent
    pub const INCLINE_TARGET_MIN_PCT: f64 = 2.0;
    /// Sustained-incline target ceiling, percent
    pub const INCLINE_TARGET_MAX_PCT: f64 = 12.0;

    /// Weekly-volume multiple of estimated hike duration for shorter plans
    pub const WEEKLY_VOLUME_FACTOR_SHORT_PLAN: f64 = 1.5;
    /// Weekly-volume multiple for plans of 8 weeks or more
    pub const WEEKLY_VOLUME_FACTOR_LONG_PLAN: f64 = 1.8;

    /// Week-count threshold separating short from medium plans
    pub const MEDIUM_PLAN_WEEKS: u32 = 4;
    /// Week-count threshold separating medium from long plans
    pub const LONG_PLAN_WEEKS: u32 = 8;
}

/// Weekly volume curve (progressive overload with deload and taper)
pub mod volume {
    /// Minimum weekly growth factor on build weeks
    pub const MIN_GROWTH_FACTOR: f64 = 1.07;
    /// Maximum weekly growth factor on build weeks.
    /// The 10% rule for progressive overload.
    pub const MAX_GROWTH_FACTOR: f64 = 1.10;

    /// Deload volume as a fraction of the prior build week
    pub const DELOAD_FACTOR: f64 = 0.78;
    /// Deload cadence: every Nth week (1-indexed)
    pub const DELOAD_INTERVAL_WEEKS: u32 = 4;

    /// Taper volume as a fraction of the plan's maximum week
    pub const TAPER_FACTOR: f64 = 0.55;

    /// Baseline at or below which the user is treated as detrained, minutes/week
    pub const LOW_BASELINE_MINUTES: u32 = 30;
    /// Starting volume for detrained users, minutes
    pub const LOW_BASELINE_START_MINUTES: u32 = 45;
    /// Floor for the multi-week starting volume, minutes
    pub const START_FLOOR_MINUTES: u32 = 30;
    /// Hard cap on week 1 for detrained users, minutes
    pub const ADAPTATION_WEEK1_CAP_MINUTES: u32 = 60;
    /// Hard cap on week 2 for detrained users, minutes
    pub const ADAPTATION_WEEK2_CAP_MINUTES: u32 = 75;

    /// Single-week plans run at this fraction of baseline
    pub const SINGLE_WEEK_BASELINE_FACTOR: f64 = 0.85;
    /// Floor for single-week plan volume, minutes
    pub const SINGLE_WEEK_FLOOR_MINUTES: u32 = 20;
}

/// Per-workout shares of the weekly volume
pub mod session_weights {
    /// Outdoor long hike share
    pub const OUTDOOR_LONG_HIKE: f64 = 0.35;
    /// Treadmill interval share
    pub const TREADMILL_INTERVALS: f64 = 0.25;
    /// Zone 2 incline walk share
    pub const ZONE2_INCLINE_WALK: f64 = 0.25;
    /// Strength share
    pub const STRENGTH: f64 = 0.15;
    /// Recovery/mobility share
    pub const RECOVERY_MOBILITY: f64 = 0.10;

    /// Floor on any allocated cardio duration, minutes
    pub const ALLOCATION_FLOOR_MINUTES: u32 = 20;
    /// Floor on a synthesized treadmill session after level clamping, minutes
    pub const SESSION_FLOOR_MINUTES: u32 = 25;
}

/// Segment synthesis
pub mod segments {
    /// Fewest main-phase segments a workout may carry
    pub const MIN_SEGMENTS: usize = 10;
    /// Most main-phase segments a workout may carry
    pub const MAX_SEGMENTS: usize = 30;

    /// Centered smoothing window over raw grades
    pub const GRADE_SMOOTHING_WINDOW: usize = 3;
    /// Wider smoothing window applied to Zone 2 segment inclines
    pub const ZONE2_SMOOTHING_WINDOW: usize = 5;

    /// Elevation weight in the effort score, per 1000 ft of gain
    pub const EFFORT_ELEVATION_WEIGHT: f64 = 1.4;

    /// Uphill speed penalty per percent of incline, mph
    pub const GRADE_SPEED_PENALTY_MPH: f64 = 0.08;
    /// Downhill speed boost per percent of (negative) incline, mph
    pub const DOWNHILL_BOOST_MPH: f64 = 0.03;
    /// Downhill boost ceiling as a fraction of the level's speed bracket
    pub const DOWNHILL_BOOST_CAP_FRACTION: f64 = 0.3;
    /// Speed reduction per pound of pack weight, mph
    pub const PACK_WEIGHT_PENALTY_MPH_PER_LB: f64 = 0.01;

    /// Warm-up length, minutes
    pub const WARM_UP_MINUTES: f64 = 5.0;
    /// Cool-down length, minutes
    pub const COOL_DOWN_MINUTES: f64 = 5.0;
    /// Warm-up incline before clamping, percent
    pub const WARM_UP_INCLINE_PCT: f64 = 1.0;
    /// Cool-down incline before clamping, percent
    pub const COOL_DOWN_INCLINE_PCT: f64 = 0.5;
    /// Warm-up speed floor, mph
    pub const WARM_UP_SPEED_FLOOR_MPH: f64 = 1.8;
    /// Cool-down speed floor, mph
    pub const COOL_DOWN_SPEED_FLOOR_MPH: f64 = 1.6;
    /// Cool-down speed drop below warm-up speed, mph
    pub const COOL_DOWN_SPEED_DROP_MPH: f64 = 0.2;

    /// Floor on total synthesized duration, minutes
    pub const TOTAL_DURATION_FLOOR_MINUTES: u32 = 20;
    /// Floor on the main phase, minutes
    pub const MAIN_PHASE_FLOOR_MINUTES: u32 = 5;

    /// Rounding step for segment minutes
    pub const MINUTES_STEP: f64 = 0.5;
    /// Rounding step for incline percent
    pub const INCLINE_STEP: f64 = 0.5;
    /// Rounding step for speed mph
    pub const SPEED_STEP: f64 = 0.1;
}

/// Interval hard/easy repeat shaping
pub mod intervals {
    /// Incline multiplier on hard repeats
    pub const HARD_INCLINE_FACTOR: f64 = 1.15;
    /// Incline multiplier on easy repeats
    pub const EASY_INCLINE_FACTOR: f64 = 0.85;
    /// Speed multiplier on hard repeats (slower: incline carries the effort)
    pub const HARD_SPEED_FACTOR: f64 = 0.92;
    /// Speed multiplier on easy repeats
    pub const EASY_SPEED_FACTOR: f64 = 1.08;
    /// Lowest interval speed before final clamping, mph
    pub const MIN_INTERVAL_SPEED_MPH: f64 = 1.8;
}

/// Strength block sizing
pub mod strength {
    /// Shortest strength block, minutes
    pub const MIN_BLOCK_MINUTES: u32 = 15;
    /// Longest strength block, minutes
    pub const MAX_BLOCK_MINUTES: u32 = 28;
    /// Block ceiling during the final event-prep weeks, minutes
    pub const EVENT_PREP_CAP_MINUTES: u32 = 15;

    /// Duration multiplier for mobility/recovery phases
    pub const MOBILITY_PHASE_FACTOR: f64 = 0.7;
    /// Duration multiplier for the maintenance phase
    pub const MAINTENANCE_PHASE_FACTOR: f64 = 0.85;

    /// Most strength add-ons stacked onto cardio days in one week
    pub const MAX_STACKED_ADDONS_PER_WEEK: usize = 2;
}

/// Adaptation-week safety ceilings for detrained users
pub mod adaptation {
    /// Adaptation applies to the first N weeks
    pub const WEEK_COUNT: u32 = 2;
    /// Shortest adaptation workout, minutes
    pub const MIN_WORKOUT_MINUTES: u32 = 15;
    /// Longest adaptation workout, minutes
    pub const MAX_WORKOUT_MINUTES: u32 = 25;
    /// Incline ceiling during adaptation, percent
    pub const INCLINE_CAP_PCT: f64 = 3.0;
    /// Long-session target fraction of the peak target during adaptation
    pub const LONG_TARGET_FRACTION: f64 = 0.25;
}

/// Workout composition knobs outside the synthesizer
pub mod composition {
    /// Baseline incline the weekly cap ramps up from, percent
    pub const INCLINE_RAMP_BASE_PCT: f64 = 3.0;
    /// Week-over-week growth cap on the outdoor long hike, minutes
    pub const LONG_HIKE_MAX_WEEKLY_GROWTH_MINUTES: u32 = 20;
    /// Outdoor long hike floor during event-prep weeks, minutes
    pub const EVENT_PREP_LONG_HIKE_FLOOR_MINUTES: u32 = 60;
    /// Fixed recovery/mobility session length, minutes
    pub const RECOVERY_MINUTES: u32 = 25;
    /// Long-session baseline as a fraction of weekly baseline minutes
    pub const LONG_SESSION_BASELINE_FRACTION: f64 = 0.4;
    /// Floor on the ramped long-session target, minutes
    pub const LONG_SESSION_TARGET_FLOOR_MINUTES: f64 = 20.0;
    /// Zone 2 sessions other than the weekly long one run at this share
    /// of their allocation
    pub const ZONE2_SHORT_SESSION_FRACTION: f64 = 0.9;
    /// Zone 2 incline-target floor, percent
    pub const ZONE2_INCLINE_TARGET_FLOOR_PCT: f64 = 2.0;
}

/// Peak-week hike-readiness adequacy thresholds
pub mod adequacy {
    /// Long session must reach this fraction of estimated hike duration
    pub const LONG_SESSION_FRACTION: f64 = 0.7;
    /// Weekly volume must reach this multiple of estimated hike duration
    pub const WEEKLY_VOLUME_FACTOR: f64 = 1.5;
    /// Incline cap must reach this fraction of average hike grade
    pub const INCLINE_FRACTION: f64 = 0.6;
}

/// Fitness speed brackets per level, (min, max) mph
pub mod speed_brackets {
    /// Beginner treadmill speed bracket
    pub const BEGINNER_MPH: (f64, f64) = (2.0, 3.2);
    /// Intermediate treadmill speed bracket
    pub const INTERMEDIATE_MPH: (f64, f64) = (2.8, 4.2);
    /// Advanced treadmill speed bracket
    pub const ADVANCED_MPH: (f64, f64) = (3.2, 5.0);
}
