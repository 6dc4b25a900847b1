// ABOUTME: Segment synthesizer turning an elevation profile into timed treadmill segments
// ABOUTME: Handles grade derivation, resampling, smoothing, speed modeling, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure synthesis of warm-up/main/cool-down treadmill segments from a hike's
//! elevation profile. No calendar awareness; the scheduler layers weekly
//! context on top.

use serde::{Deserialize, Serialize};

use crate::constants::{grade, segments as seg};
use crate::models::{FitnessLevel, ProfilePoint, TrainingSegment};

/// Requested workout length: explicit, or estimated from the hike geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetDuration {
    /// Estimate from distance, elevation gain, and fitness pace
    Auto,
    /// Explicit total duration, minutes
    Minutes(u32),
}

/// Treadmill incline and speed ceilings for one synthesized workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreadmillBounds {
    /// Lowest incline the workout may prescribe, percent
    pub min_incline_percent: f64,
    /// Highest incline the workout may prescribe, percent
    pub max_incline_percent: f64,
    /// Highest speed the workout may prescribe, mph
    pub max_speed_mph: f64,
}

/// Full settings for one synthesis call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSettings {
    /// Fitness level driving pace and speed brackets
    pub fitness_level: FitnessLevel,
    /// Requested or auto-estimated duration
    pub target_duration: TargetDuration,
    /// Pack weight carried, pounds; slows prescribed speeds
    pub pack_weight_lbs: f64,
    /// Machine ceilings
    pub treadmill: TreadmillBounds,
}

/// Result of one synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedWorkout {
    /// Total prescribed duration, minutes
    pub total_minutes: u32,
    /// Warm-up, main-phase, and cool-down segments in order
    pub segments: Vec<TrainingSegment>,
}

/// One main-phase draft segment before time allocation.
#[derive(Debug, Clone, Copy)]
struct GradeSegment {
    distance_miles: f64,
    elevation_delta_ft: f64,
    grade_percent: f64,
}

/// Round `value` to the nearest multiple of `step`.
#[must_use]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Clamp with the low bound applied first, so an inverted range resolves to
/// the high bound rather than panicking. Rounding is always followed by a
/// re-clamp through this helper so no prescribed value escapes its ceiling.
#[must_use]
#[allow(clippy::manual_clamp)] // f64::clamp panics on inverted bounds
pub fn clamp(value: f64, min_value: f64, max_value: f64) -> f64 {
    value.max(min_value).min(max_value)
}

/// Synthesize a complete treadmill workout from an elevation profile.
///
/// Always succeeds: a profile with fewer than two points yields only the
/// warm-up and cool-down segments.
#[must_use]
pub fn synthesize(
    profile: &[ProfilePoint],
    distance_miles: f64,
    elevation_gain_ft: f64,
    settings: &SegmentSettings,
) -> SynthesizedWorkout {
    let base_duration = match settings.target_duration {
        TargetDuration::Auto => {
            estimate_duration_minutes(distance_miles, elevation_gain_ft, settings.fitness_level)
        }
        TargetDuration::Minutes(minutes) => minutes,
    };
    let total_minutes = base_duration.max(seg::TOTAL_DURATION_FLOOR_MINUTES);
    let main_minutes = f64::from(
        total_minutes
            .saturating_sub(seg::WARM_UP_MINUTES as u32 + seg::COOL_DOWN_MINUTES as u32)
            .max(seg::MAIN_PHASE_FLOOR_MINUTES),
    );

    let normalized = normalize_segment_count(&grade_segments(profile));
    let grades: Vec<f64> = normalized.iter().map(|s| s.grade_percent).collect();
    let smoothed = smooth_grades(&grades, seg::GRADE_SMOOTHING_WINDOW);

    let effort_scores: Vec<f64> = normalized
        .iter()
        .map(|s| {
            s.distance_miles
                + s.elevation_delta_ft.max(0.0) / 1000.0 * seg::EFFORT_ELEVATION_WEIGHT
        })
        .collect();
    let total_effort: f64 = {
        let sum: f64 = effort_scores.iter().sum();
        if sum > 0.0 {
            sum
        } else {
            1.0
        }
    };

    let pack_note = if settings.pack_weight_lbs > 0.0 {
        Some(format!("Pack weight {} lbs", settings.pack_weight_lbs))
    } else {
        None
    };

    let bounds = settings.treadmill;
    let mut segments = Vec::with_capacity(normalized.len() + 2);
    let mut raw_cumulative = 0.0_f64;
    let mut rounded_cumulative = 0.0_f64;
    for idx in 0..normalized.len() {
        // Allocate from rounded cumulative targets so per-segment rounding
        // never accumulates; the final target is the exact main-phase
        // duration, so the minutes sum to it
        raw_cumulative = if idx == normalized.len() - 1 {
            main_minutes
        } else {
            raw_cumulative + main_minutes * effort_scores[idx] / total_effort
        };
        let next_rounded = round_to_step(raw_cumulative, seg::MINUTES_STEP);
        let minutes = (next_rounded - rounded_cumulative).max(0.0);
        rounded_cumulative = rounded_cumulative.max(next_rounded);

        let incline = clamp(
            smoothed[idx],
            bounds.min_incline_percent,
            bounds.max_incline_percent,
        );
        let speed = compute_speed(
            incline,
            settings.fitness_level,
            bounds.max_speed_mph,
            settings.pack_weight_lbs,
        );
        segments.push(TrainingSegment {
            index: idx as u32 + 1,
            minutes,
            incline_pct: clamp(
                round_to_step(incline, seg::INCLINE_STEP),
                bounds.min_incline_percent,
                bounds.max_incline_percent,
            ),
            speed_mph: clamp(round_to_step(speed, seg::SPEED_STEP), 0.0, bounds.max_speed_mph),
            note: pack_note.clone(),
        });
    }

    let (warm_up, cool_down) = bracket_segments(settings, segments.len() as u32 + 1);
    let mut all = Vec::with_capacity(segments.len() + 2);
    all.push(warm_up);
    all.append(&mut segments);
    all.push(cool_down);

    SynthesizedWorkout {
        total_minutes,
        segments: all,
    }
}

/// Estimate a workout duration from the hike geometry and fitness pace:
/// flat-pace minutes plus a per-1000-ft elevation penalty.
#[must_use]
pub fn estimate_duration_minutes(
    distance_miles: f64,
    elevation_gain_ft: f64,
    fitness_level: FitnessLevel,
) -> u32 {
    let flat_minutes = distance_miles / fitness_level.flat_pace_mph() * 60.0;
    let elevation_penalty =
        elevation_gain_ft / 1000.0 * fitness_level.elevation_penalty_minutes();
    (flat_minutes + elevation_penalty).round().max(0.0) as u32
}

/// Grade percent between two profile points, with the distance delta floored
/// to keep dense samples from producing absurd grades.
#[must_use]
pub fn grade_between(previous: ProfilePoint, current: ProfilePoint) -> f64 {
    let distance =
        (current.distance_miles - previous.distance_miles).max(grade::MIN_SEGMENT_DISTANCE_MILES);
    let delta = current.elevation_ft - previous.elevation_ft;
    delta / (distance * grade::FEET_PER_MILE) * 100.0
}

/// Reduce the profile to per-segment grades. Fewer than two points yields
/// an empty draft.
fn grade_segments(points: &[ProfilePoint]) -> Vec<GradeSegment> {
    points
        .windows(2)
        .map(|pair| {
            let distance = (pair[1].distance_miles - pair[0].distance_miles)
                .max(grade::MIN_SEGMENT_DISTANCE_MILES);
            let delta = pair[1].elevation_ft - pair[0].elevation_ft;
            GradeSegment {
                distance_miles: distance,
                elevation_delta_ft: delta,
                grade_percent: delta / (distance * grade::FEET_PER_MILE) * 100.0,
            }
        })
        .collect()
}

/// Resample the draft list into the 10-30 segment band so workout
/// granularity is independent of raw profile density: binary-split when too
/// few, grouped-merge when too many.
fn normalize_segment_count(segments: &[GradeSegment]) -> Vec<GradeSegment> {
    if segments.is_empty() {
        return Vec::new();
    }
    let mut normalized = segments.to_vec();

    while normalized.len() < seg::MIN_SEGMENTS {
        let mut expanded = Vec::with_capacity(normalized.len() * 2);
        for s in &normalized {
            let half = GradeSegment {
                distance_miles: s.distance_miles / 2.0,
                elevation_delta_ft: s.elevation_delta_ft / 2.0,
                grade_percent: s.grade_percent,
            };
            expanded.push(half);
            expanded.push(half);
        }
        normalized = expanded;
    }

    while normalized.len() > seg::MAX_SEGMENTS {
        let group_size = normalized.len().div_ceil(seg::MAX_SEGMENTS);
        normalized = normalized
            .chunks(group_size)
            .map(|group| {
                let distance: f64 = group.iter().map(|s| s.distance_miles).sum();
                let elevation: f64 = group.iter().map(|s| s.elevation_delta_ft).sum();
                let grade_percent = if distance > 0.0 {
                    elevation / (distance * grade::FEET_PER_MILE) * 100.0
                } else {
                    0.0
                };
                GradeSegment {
                    distance_miles: distance,
                    elevation_delta_ft: elevation,
                    grade_percent,
                }
            })
            .collect();
    }
    normalized
}

/// Centered moving-average smoothing over raw grades.
fn smooth_grades(grades: &[f64], window: usize) -> Vec<f64> {
    if grades.is_empty() {
        return Vec::new();
    }
    let half_before = window / 2;
    let half_after = window - half_before;
    (0..grades.len())
        .map(|idx| {
            let start = idx.saturating_sub(half_before);
            let end = (idx + half_after).min(grades.len());
            let slice = &grades[start..end];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Smooth the inclines of already-synthesized segments with a wider window.
/// Used for Zone 2 workouts where incline swings should stay gentle.
#[must_use]
pub fn smooth_segment_inclines(segments: &[TrainingSegment], window: usize) -> Vec<TrainingSegment> {
    let grades: Vec<f64> = segments.iter().map(|s| s.incline_pct).collect();
    let smoothed = smooth_grades(&grades, window);
    segments
        .iter()
        .zip(smoothed)
        .map(|(segment, incline)| TrainingSegment {
            // Averaging stays within the already-clamped inputs; keep a
            // finer 0.1 step so the smoothing is visible on the display
            incline_pct: round_to_step(incline, 0.1),
            ..segment.clone()
        })
        .collect()
}

/// Derive the prescribed speed for a segment from the fitness bracket, the
/// grade penalty, any downhill boost, and pack weight.
fn compute_speed(
    incline: f64,
    fitness_level: FitnessLevel,
    max_speed_mph: f64,
    pack_weight_lbs: f64,
) -> f64 {
    let (bracket_min, bracket_max) = fitness_level.speed_bracket_mph();
    let range = bracket_max - bracket_min;
    let grade_penalty = incline.max(0.0) * seg::GRADE_SPEED_PENALTY_MPH;
    let downhill_boost = if incline < 0.0 {
        (incline.abs() * seg::DOWNHILL_BOOST_MPH).min(range * seg::DOWNHILL_BOOST_CAP_FRACTION)
    } else {
        0.0
    };
    let mut speed = bracket_max - grade_penalty + downhill_boost;
    if pack_weight_lbs > 0.0 {
        speed -= pack_weight_lbs * seg::PACK_WEIGHT_PENALTY_MPH_PER_LB;
    }
    clamp(speed, bracket_min, max_speed_mph.min(bracket_max))
}

/// Build the fixed warm-up and cool-down segments.
fn bracket_segments(settings: &SegmentSettings, cool_index: u32) -> (TrainingSegment, TrainingSegment) {
    let bounds = settings.treadmill;
    let (bracket_min, _) = settings.fitness_level.speed_bracket_mph();
    let warm_speed_raw = settings.fitness_level.warm_up_speed_mph();
    let cool_speed_raw = (warm_speed_raw - seg::COOL_DOWN_SPEED_DROP_MPH).max(bracket_min);

    let warm_up = TrainingSegment {
        index: 0,
        minutes: seg::WARM_UP_MINUTES,
        incline_pct: clamp(
            round_to_step(
                clamp(
                    seg::WARM_UP_INCLINE_PCT,
                    bounds.min_incline_percent,
                    bounds.max_incline_percent,
                ),
                seg::INCLINE_STEP,
            ),
            bounds.min_incline_percent,
            bounds.max_incline_percent,
        ),
        speed_mph: clamp(
            round_to_step(
                clamp(warm_speed_raw, seg::WARM_UP_SPEED_FLOOR_MPH, bounds.max_speed_mph),
                seg::SPEED_STEP,
            ),
            0.0,
            bounds.max_speed_mph,
        ),
        note: Some("Warm-up".to_owned()),
    };

    let cool_down = TrainingSegment {
        index: cool_index,
        minutes: seg::COOL_DOWN_MINUTES,
        incline_pct: clamp(
            round_to_step(
                clamp(
                    seg::COOL_DOWN_INCLINE_PCT,
                    bounds.min_incline_percent,
                    bounds.max_incline_percent,
                ),
                seg::INCLINE_STEP,
            ),
            bounds.min_incline_percent,
            bounds.max_incline_percent,
        ),
        speed_mph: clamp(
            round_to_step(
                clamp(cool_speed_raw, seg::COOL_DOWN_SPEED_FLOOR_MPH, bounds.max_speed_mph),
                seg::SPEED_STEP,
            ),
            0.0,
            bounds.max_speed_mph,
        ),
        note: Some("Cool-down".to_owned()),
    };

    (warm_up, cool_down)
}
