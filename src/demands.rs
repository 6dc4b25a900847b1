// ABOUTME: Hike demand model deriving duration, grade stats, and peak-week targets
// ABOUTME: Feeds the scheduler's volume curve, long-session ramp, and incline ramp
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{demands as dc, peak_targets as pt};
use crate::models::{Hike, ProfilePoint};
use crate::segments::{clamp, grade_between};

/// Physical demands estimated from the hike geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HikeDemands {
    /// Estimated time to complete the hike, minutes (Naismith-style)
    pub estimated_duration_minutes: u32,
    /// Total elevation gain, feet
    pub total_elevation_gain_ft: f64,
    /// Mean grade across the profile, percent
    pub average_grade_pct: f64,
    /// Steepest 3-segment sustained grade, percent
    pub max_sustained_grade_pct: f64,
}

/// Peak-week training targets the plan ramps toward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakTargets {
    /// Longest single session the peak week should reach, minutes
    pub long_session_target: u32,
    /// Sustained incline the peak week should reach, percent
    pub sustained_incline_target: f64,
    /// Weekly volume the peak week should reach, minutes
    pub weekly_volume_target: u32,
}

/// Estimate the hike's demands from its geometry.
///
/// Duration follows Naismith's rule: one hour per 3 miles plus half an hour
/// per 1000 ft of ascent.
#[must_use]
pub fn derive_hike_demands(hike: &Hike) -> HikeDemands {
    let estimated_hours = hike.distance_miles / dc::FLAT_HIKING_PACE_MPH
        + hike.elevation_gain_ft / 1000.0 * dc::CLIMB_HOURS_PER_1000_FT;
    let (average_grade_pct, max_sustained_grade_pct) = grade_stats(&hike.profile_points);
    let demands = HikeDemands {
        estimated_duration_minutes: (estimated_hours * 60.0).round().max(0.0) as u32,
        total_elevation_gain_ft: hike.elevation_gain_ft,
        average_grade_pct,
        max_sustained_grade_pct,
    };
    debug!(
        duration_minutes = demands.estimated_duration_minutes,
        average_grade_pct,
        max_sustained_grade_pct,
        "derived hike demands"
    );
    demands
}

/// Build the peak-week targets from the demands and plan length.
///
/// Longer plans earn more ambitious factors: with 8+ weeks of runway the
/// long session covers 85% of the estimated hike and weekly volume reaches
/// 1.8x its duration.
#[must_use]
pub fn build_peak_targets(demands: &HikeDemands, total_weeks: u32) -> PeakTargets {
    let duration = f64::from(demands.estimated_duration_minutes);
    let long_factor = if total_weeks >= pt::LONG_PLAN_WEEKS {
        pt::LONG_SESSION_FACTOR_LONG_PLAN
    } else if total_weeks >= pt::MEDIUM_PLAN_WEEKS {
        pt::LONG_SESSION_FACTOR_MEDIUM_PLAN
    } else {
        pt::LONG_SESSION_FACTOR_SHORT_PLAN
    };
    let incline_factor = if total_weeks >= pt::LONG_PLAN_WEEKS {
        pt::INCLINE_FACTOR_LONG_PLAN
    } else {
        pt::INCLINE_FACTOR_SHORT_PLAN
    };
    let volume_factor = if total_weeks >= pt::LONG_PLAN_WEEKS {
        pt::WEEKLY_VOLUME_FACTOR_LONG_PLAN
    } else {
        pt::WEEKLY_VOLUME_FACTOR_SHORT_PLAN
    };
    PeakTargets {
        long_session_target: (duration * long_factor).round() as u32,
        sustained_incline_target: clamp(
            demands.average_grade_pct * incline_factor,
            pt::INCLINE_TARGET_MIN_PCT,
            pt::INCLINE_TARGET_MAX_PCT,
        ),
        weekly_volume_target: (duration * volume_factor).round() as u32,
    }
}

/// Minimum preparation weeks for a hike of this size.
///
/// The brackets are evaluated in order: small day hikes need 4 weeks,
/// moderate ones 6, big days 12, everything between 8.
#[must_use]
pub fn min_prep_weeks(distance_miles: f64, elevation_gain_ft: f64) -> u32 {
    if distance_miles <= 5.0 && elevation_gain_ft <= 1000.0 {
        4
    } else if distance_miles <= 8.0 || elevation_gain_ft <= 3000.0 {
        6
    } else if distance_miles >= 12.0 || elevation_gain_ft >= 4500.0 {
        12
    } else {
        8
    }
}

/// Mean grade and the steepest sustained (3-segment window) grade of the
/// profile. Fewer than two points yields zeros.
#[must_use]
pub fn grade_stats(points: &[ProfilePoint]) -> (f64, f64) {
    if points.len() < 2 {
        return (0.0, 0.0);
    }
    let grades: Vec<f64> = points
        .windows(2)
        .map(|pair| grade_between(pair[0], pair[1]))
        .collect();
    let average = grades.iter().sum::<f64>() / grades.len() as f64;

    let mut max_sustained = average;
    for start in 0..grades.len() {
        let window = &grades[start..(start + dc::SUSTAINED_GRADE_WINDOW).min(grades.len())];
        let avg = window.iter().sum::<f64>() / window.len() as f64;
        max_sustained = max_sustained.max(avg);
    }
    (average, max_sustained)
}

/// Average profile grade clamped into a display range; used for Zone 2
/// incline targets.
#[must_use]
pub fn clamped_average_grade(points: &[ProfilePoint], min_grade: f64, max_grade: f64) -> f64 {
    if points.len() < 2 {
        return min_grade;
    }
    let (average, _) = grade_stats(points);
    clamp(average, min_grade, max_grade)
}
