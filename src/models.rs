// ABOUTME: Core data model for hike geometry, scheduling inputs, and the plan output tree
// ABOUTME: All types are serde-derived with camelCase JSON to round-trip through persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::speed_brackets;

/// One sample of a hike's elevation-vs-distance profile.
///
/// Points are assumed pre-sorted by `distance_miles`, ascending and unique.
/// The scheduler performs no unit conversion or monotonicity validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePoint {
    /// Distance from the trailhead, miles
    pub distance_miles: f64,
    /// Elevation at that distance, feet
    pub elevation_ft: f64,
}

/// Read-only geometry of the target hike.
///
/// `elevation_gain_ft` may be precomputed independently of `profile_points`;
/// no cross-validation is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hike {
    /// Total distance, miles
    pub distance_miles: f64,
    /// Total elevation gain, feet
    pub elevation_gain_ft: f64,
    /// Ordered elevation profile samples
    #[serde(default)]
    pub profile_points: Vec<ProfilePoint>,
}

/// Caller-supplied equipment and availability ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Maximum treadmill incline the user's machine supports, percent
    pub treadmill_max_incline_percent: f64,
    /// Requested treadmill sessions per week
    pub treadmill_sessions_per_week: u32,
    /// Requested outdoor hikes per week
    pub outdoor_hikes_per_week: u32,
    /// Maximum comfortable treadmill speed, mph
    pub max_speed_mph: f64,
}

/// Self-reported fitness level driving pace and duration heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Trains occasionally
    Intermediate,
    /// Trains consistently
    Advanced,
}

impl FitnessLevel {
    /// Flat-ground walking pace used for auto-duration estimates, mph
    #[must_use]
    pub const fn flat_pace_mph(self) -> f64 {
        match self {
            Self::Beginner => 2.4,
            Self::Intermediate => 3.2,
            Self::Advanced => 4.0,
        }
    }

    /// Elevation penalty for auto-duration estimates, minutes per 1000 ft of gain
    #[must_use]
    pub const fn elevation_penalty_minutes(self) -> f64 {
        match self {
            Self::Beginner => 12.0,
            Self::Intermediate => 9.0,
            Self::Advanced => 7.0,
        }
    }

    /// Treadmill speed bracket (min, max) for segment speed derivation, mph
    #[must_use]
    pub const fn speed_bracket_mph(self) -> (f64, f64) {
        match self {
            Self::Beginner => speed_brackets::BEGINNER_MPH,
            Self::Intermediate => speed_brackets::INTERMEDIATE_MPH,
            Self::Advanced => speed_brackets::ADVANCED_MPH,
        }
    }

    /// Warm-up walking speed, mph
    #[must_use]
    pub const fn warm_up_speed_mph(self) -> f64 {
        match self {
            Self::Beginner => 2.0,
            Self::Intermediate => 2.6,
            Self::Advanced => 3.0,
        }
    }

    /// Ceiling for a single synthesized treadmill session, minutes
    #[must_use]
    pub const fn max_session_minutes(self) -> u32 {
        match self {
            Self::Beginner => 60,
            Self::Intermediate => 75,
            Self::Advanced => 90,
        }
    }
}

/// The six workout types a scheduled day can carry.
///
/// Serialized with the human-readable labels the mobile and web clients
/// display verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Hard/easy incline repeats synthesized from the hike profile
    #[serde(rename = "Treadmill intervals")]
    TreadmillIntervals,
    /// Steady low-intensity incline walk
    #[serde(rename = "Zone 2 incline walk")]
    Zone2InclineWalk,
    /// Strength block supporting climbing endurance
    #[serde(rename = "Strength")]
    Strength,
    /// Long outdoor time-on-feet session
    #[serde(rename = "Outdoor long hike")]
    OutdoorLongHike,
    /// Active recovery, mobility, easy walking
    #[serde(rename = "Recovery / mobility")]
    RecoveryMobility,
    /// Full rest
    #[serde(rename = "Rest day")]
    RestDay,
}

impl WorkoutType {
    /// Stable kebab-case slug used in deterministic workout ids
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TreadmillIntervals => "treadmill-intervals",
            Self::Zone2InclineWalk => "zone-2-incline-walk",
            Self::Strength => "strength",
            Self::OutdoorLongHike => "outdoor-long-hike",
            Self::RecoveryMobility => "recovery-mobility",
            Self::RestDay => "rest-day",
        }
    }

    /// Whether this workout type counts as a high-volume cardio session
    /// for slot-spreading and back-to-back intensity checks
    #[must_use]
    pub const fn is_high_volume_cardio(self) -> bool {
        matches!(self, Self::OutdoorLongHike | Self::TreadmillIntervals)
    }

    /// Whether this workout type is a cardio session eligible for a
    /// stacked strength add-on
    #[must_use]
    pub const fn is_cardio(self) -> bool {
        matches!(
            self,
            Self::OutdoorLongHike | Self::TreadmillIntervals | Self::Zone2InclineWalk
        )
    }
}

/// Strength-training preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthSettings {
    /// Whether strength sessions are scheduled at all
    pub include: bool,
    /// Requested strength sessions per week
    pub sessions_per_week: u32,
    /// Stack strength onto existing cardio days instead of dedicated days
    pub on_cardio_days: bool,
}

/// Everything the scheduler needs to produce a plan.
///
/// Inputs are assumed validated (see [`crate::validation::validate_inputs`]);
/// the scheduler does not re-validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanInputs {
    /// Target hike geometry
    pub hike: Hike,
    /// Self-reported fitness level
    pub fitness_level: FitnessLevel,
    /// First day of training
    pub training_start_date: NaiveDate,
    /// Day of the target hike
    pub target_date: NaiveDate,
    /// Training days available per week (1-7)
    pub days_per_week: u32,
    /// Preferred training weekdays; ignored when `any_days` is set
    #[serde(default)]
    pub preferred_days: Vec<Weekday>,
    /// Schedule on any weekday, evenly spread
    pub any_days: bool,
    /// Current weekly training minutes, a fitness proxy
    pub baseline_minutes: u32,
    /// Equipment and session-count ceilings
    pub constraints: Constraints,
    /// Strength-training preferences
    pub strength: StrengthSettings,
}

/// Plan-level summary surfaced alongside the weekly calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Training days per week the plan was built around
    pub days_per_week: u32,
    /// Weekdays the plan favors
    pub preferred_days: Vec<Weekday>,
    /// Mean weekly training volume, minutes
    pub average_weekly_minutes: u32,
}

/// A single timed treadmill segment within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSegment {
    /// Position within the workout; 0 is the warm-up
    pub index: u32,
    /// Segment length, minutes (multiples of 0.5)
    pub minutes: f64,
    /// Treadmill incline, percent (multiples of 0.5)
    pub incline_pct: f64,
    /// Treadmill speed, mph (multiples of 0.1)
    pub speed_mph: f64,
    /// Optional coaching note ("Warm-up", "Hard interval", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One scheduled workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingWorkout {
    /// Deterministic id: `"{week}-{type-slug}"`, add-ons `"{date}-strength-addon"`
    pub id: String,
    /// Workout type
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Total duration including warm-up/cool-down, minutes
    pub duration_minutes: u32,
    /// Steady incline target for Zone 2 sessions, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incline_target: Option<f64>,
    /// Coaching notes
    pub notes: String,
    /// Treadmill segments; present only for treadmill-based types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<TrainingSegment>>,
}

/// One scheduled training date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Short weekday name ("Mon" .. "Sun")
    pub day_name: String,
    /// Ordered workouts; usually one, plus an optional strength add-on
    pub workouts: Vec<TrainingWorkout>,
}

/// One week of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingWeek {
    /// 1-based, contiguous week number
    pub week_number: u32,
    /// First calendar day of the week window
    pub start_date: NaiveDate,
    /// Last calendar day of the week window; the final week may be shorter
    pub end_date: NaiveDate,
    /// Sum of all child workout durations, minutes
    pub total_minutes: u32,
    /// Coaching notes for the week
    pub notes: String,
    /// Short focus label ("Build: increasing time-on-feet", ...)
    pub focus: String,
    /// Scheduled training days, never all 7 calendar days
    pub days: Vec<TrainingDay>,
}

/// The complete plan returned by the scheduler.
///
/// The tree is created fresh per call, never mutated afterwards, and
/// round-trips through JSON without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanOutput {
    /// Number of weeks in the plan, >= 1
    pub total_weeks: u32,
    /// Ordered human-readable diagnostics; never authoritative
    pub warnings: Vec<String>,
    /// Plan-level summary
    pub summary: PlanSummary,
    /// Ordered weeks
    pub weeks: Vec<TrainingWeek>,
}

/// Short weekday name matching the client display convention.
#[must_use]
pub fn day_name(date: NaiveDate) -> String {
    use chrono::Datelike;
    let names = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    names[date.weekday().num_days_from_monday() as usize].to_owned()
}
