// ABOUTME: Unit tests for the treadmill segment synthesizer
// ABOUTME: Validates duration estimation, segment bounds, rounding, and edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use trekplan::segments::estimate_duration_minutes;
use trekplan::{
    synthesize, FitnessLevel, ProfilePoint, SegmentSettings, TargetDuration, TreadmillBounds,
};

/// Steady 5-mile climb gaining 1500 ft, sampled every half mile
fn steady_climb_profile() -> Vec<ProfilePoint> {
    (0..=10)
        .map(|i| ProfilePoint {
            distance_miles: f64::from(i) * 0.5,
            elevation_ft: f64::from(i) * 150.0,
        })
        .collect()
}

fn default_settings(target: TargetDuration) -> SegmentSettings {
    SegmentSettings {
        fitness_level: FitnessLevel::Intermediate,
        target_duration: target,
        pack_weight_lbs: 0.0,
        treadmill: TreadmillBounds {
            min_incline_percent: 0.0,
            max_incline_percent: 12.0,
            max_speed_mph: 4.0,
        },
    }
}

#[test]
fn auto_duration_follows_pace_and_elevation_penalty() {
    // 5 mi at 3.2 mph = 93.75 min, plus 1.5 x 9 min elevation penalty
    assert_eq!(
        estimate_duration_minutes(5.0, 1500.0, FitnessLevel::Intermediate),
        107
    );
    assert_eq!(
        estimate_duration_minutes(5.0, 1500.0, FitnessLevel::Beginner),
        143
    );
    assert_eq!(estimate_duration_minutes(0.0, 0.0, FitnessLevel::Advanced), 0);
}

#[test]
fn auto_duration_drives_total_minutes() {
    let profile = steady_climb_profile();
    let workout = synthesize(
        &profile,
        5.0,
        1500.0,
        &default_settings(TargetDuration::Auto),
    );
    assert_eq!(workout.total_minutes, 107);
}

#[test]
fn explicit_duration_is_respected_and_floored() {
    let profile = steady_climb_profile();
    let workout = synthesize(
        &profile,
        5.0,
        1500.0,
        &default_settings(TargetDuration::Minutes(40)),
    );
    assert_eq!(workout.total_minutes, 40);

    let floored = synthesize(
        &profile,
        5.0,
        1500.0,
        &default_settings(TargetDuration::Minutes(5)),
    );
    assert_eq!(floored.total_minutes, 20);
}

#[test]
fn main_phase_segment_count_stays_in_band() {
    // 2 raw segments binary-split up into the band
    let sparse: Vec<ProfilePoint> = vec![
        ProfilePoint {
            distance_miles: 0.0,
            elevation_ft: 0.0,
        },
        ProfilePoint {
            distance_miles: 2.0,
            elevation_ft: 400.0,
        },
        ProfilePoint {
            distance_miles: 4.0,
            elevation_ft: 900.0,
        },
    ];
    let workout = synthesize(&sparse, 4.0, 900.0, &default_settings(TargetDuration::Auto));
    let main_count = workout.segments.len() - 2;
    assert!((10..=30).contains(&main_count), "got {main_count}");

    // 200 raw segments grouped-merge down into the band
    let dense: Vec<ProfilePoint> = (0..=200)
        .map(|i| ProfilePoint {
            distance_miles: f64::from(i) * 0.05,
            elevation_ft: f64::from(i % 40) * 25.0,
        })
        .collect();
    let workout = synthesize(&dense, 10.0, 2500.0, &default_settings(TargetDuration::Auto));
    let main_count = workout.segments.len() - 2;
    assert!((10..=30).contains(&main_count), "got {main_count}");
}

#[test]
fn segment_minutes_sum_to_workout_duration() {
    let profile = steady_climb_profile();
    for minutes in [20, 45, 60, 107] {
        let workout = synthesize(
            &profile,
            5.0,
            1500.0,
            &default_settings(TargetDuration::Minutes(minutes)),
        );
        let sum: f64 = workout.segments.iter().map(|s| s.minutes).sum();
        assert!(
            (sum - f64::from(workout.total_minutes)).abs() <= 1.0,
            "sum {sum} vs total {}",
            workout.total_minutes
        );
    }
}

#[test]
fn equal_share_segments_sum_to_workout_duration() {
    // A flat evenly-sampled profile gives every segment an identical share,
    // landing the allocations on exact quarter-minute ties
    let flat: Vec<ProfilePoint> = (0..=20)
        .map(|i| ProfilePoint {
            distance_miles: f64::from(i) * 0.25,
            elevation_ft: 500.0,
        })
        .collect();
    for minutes in [22, 35, 47, 90] {
        let workout = synthesize(
            &flat,
            5.0,
            0.0,
            &default_settings(TargetDuration::Minutes(minutes)),
        );
        let sum: f64 = workout.segments.iter().map(|s| s.minutes).sum();
        assert!(
            (sum - f64::from(workout.total_minutes)).abs() <= 1.0,
            "sum {sum} vs total {} for {minutes}-minute target",
            workout.total_minutes
        );
        assert!(workout.segments.iter().all(|s| s.minutes >= 0.0));
    }
}

#[test]
fn all_segments_respect_treadmill_ceilings() {
    let profile = steady_climb_profile();
    let settings = SegmentSettings {
        fitness_level: FitnessLevel::Advanced,
        target_duration: TargetDuration::Auto,
        pack_weight_lbs: 0.0,
        treadmill: TreadmillBounds {
            min_incline_percent: 0.0,
            max_incline_percent: 4.0,
            max_speed_mph: 3.5,
        },
    };
    let workout = synthesize(&profile, 5.0, 1500.0, &settings);
    for segment in &workout.segments {
        assert!(segment.incline_pct >= 0.0);
        assert!(segment.incline_pct <= 4.0, "incline {}", segment.incline_pct);
        assert!(segment.speed_mph <= 3.5, "speed {}", segment.speed_mph);
        assert!(segment.minutes >= 0.0);
    }
}

#[test]
fn values_are_rounded_to_display_steps() {
    let profile = steady_climb_profile();
    let workout = synthesize(
        &profile,
        5.0,
        1500.0,
        &default_settings(TargetDuration::Auto),
    );
    for segment in &workout.segments {
        let half_minutes = segment.minutes * 2.0;
        assert!((half_minutes - half_minutes.round()).abs() < 1e-9);
        let half_incline = segment.incline_pct * 2.0;
        assert!((half_incline - half_incline.round()).abs() < 1e-9);
        let tenth_speed = segment.speed_mph * 10.0;
        assert!((tenth_speed - tenth_speed.round()).abs() < 1e-9);
    }
}

#[test]
fn sparse_profile_yields_only_warm_up_and_cool_down() {
    for profile in [
        Vec::new(),
        vec![ProfilePoint {
            distance_miles: 0.0,
            elevation_ft: 100.0,
        }],
    ] {
        let workout = synthesize(
            &profile,
            3.0,
            500.0,
            &default_settings(TargetDuration::Minutes(30)),
        );
        assert_eq!(workout.segments.len(), 2);
        assert_eq!(workout.segments[0].note.as_deref(), Some("Warm-up"));
        assert_eq!(workout.segments[1].note.as_deref(), Some("Cool-down"));
        assert_eq!(workout.total_minutes, 30);
    }
}

#[test]
fn segment_indices_are_contiguous_from_warm_up() {
    let profile = steady_climb_profile();
    let workout = synthesize(
        &profile,
        5.0,
        1500.0,
        &default_settings(TargetDuration::Auto),
    );
    for (position, segment) in workout.segments.iter().enumerate() {
        assert_eq!(segment.index as usize, position);
    }
}

#[test]
fn pack_weight_slows_prescribed_speeds() {
    let profile = steady_climb_profile();
    let unloaded = synthesize(
        &profile,
        5.0,
        1500.0,
        &default_settings(TargetDuration::Minutes(60)),
    );
    let mut loaded_settings = default_settings(TargetDuration::Minutes(60));
    loaded_settings.pack_weight_lbs = 20.0;
    let loaded = synthesize(&profile, 5.0, 1500.0, &loaded_settings);

    // Main-phase segments slow down and carry the pack note
    let main = 1..loaded.segments.len() - 1;
    for idx in main {
        assert!(loaded.segments[idx].speed_mph <= unloaded.segments[idx].speed_mph);
        assert_eq!(loaded.segments[idx].note.as_deref(), Some("Pack weight 20 lbs"));
    }
}

#[test]
fn synthesis_is_deterministic() {
    let profile = steady_climb_profile();
    let settings = default_settings(TargetDuration::Auto);
    let first = synthesize(&profile, 5.0, 1500.0, &settings);
    let second = synthesize(&profile, 5.0, 1500.0, &settings);
    assert_eq!(first, second);
}

#[test]
fn downhill_segments_never_exceed_speed_ceiling() {
    let rolling: Vec<ProfilePoint> = (0..=20)
        .map(|i| ProfilePoint {
            distance_miles: f64::from(i) * 0.25,
            elevation_ft: if i % 2 == 0 { 0.0 } else { 300.0 },
        })
        .collect();
    let workout = synthesize(
        &rolling,
        5.0,
        3000.0,
        &default_settings(TargetDuration::Auto),
    );
    for segment in &workout.segments {
        assert!(segment.speed_mph <= 4.0);
    }
}
