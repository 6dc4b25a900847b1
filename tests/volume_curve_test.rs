// ABOUTME: Unit tests for the weekly volume curve
// ABOUTME: Validates growth banding, deload, taper, and adaptation ceilings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use trekplan::scheduler::volume::build_weekly_volumes;

#[test]
fn single_week_uses_baseline_fraction() {
    assert_eq!(build_weekly_volumes(100, 1, 500), vec![85]);
    assert_eq!(build_weekly_volumes(200, 1, 500), vec![170]);
    // Detrained users start at the fixed conservative volume
    assert_eq!(build_weekly_volumes(20, 1, 500), vec![45]);
    assert_eq!(build_weekly_volumes(0, 1, 500), vec![45]);
}

#[test]
fn single_week_volume_never_drops_below_floor() {
    assert_eq!(build_weekly_volumes(40, 1, 500), vec![34]);
    assert_eq!(build_weekly_volumes(35, 1, 500), vec![30]);
}

#[test]
fn build_weeks_grow_within_the_ten_percent_band() {
    let volumes = build_weekly_volumes(100, 10, 400);
    assert_eq!(volumes.len(), 10);
    for week in 1..volumes.len() - 1 {
        let is_deload = (week + 1) % 4 == 0;
        if is_deload {
            continue;
        }
        let prev = f64::from(volumes[week - 1]);
        let current = f64::from(volumes[week]);
        if (week % 4) == 0 {
            // Week after a deload resumes from the build track, not the dip
            continue;
        }
        assert!(current >= prev, "week {} regressed: {prev} -> {current}", week + 1);
        assert!(
            current <= (prev * 1.10).round() + 1.0,
            "week {} grew too fast: {prev} -> {current}",
            week + 1
        );
    }
}

#[test]
fn build_weeks_never_regress() {
    let volumes = build_weekly_volumes(180, 8, 261);
    // Weeks 1-3 and 5-7 are build weeks; each must be >= its predecessor
    assert!(volumes[1] >= volumes[0]);
    assert!(volumes[2] >= volumes[1]);
    assert!(volumes[5] >= volumes[4]);
    assert!(volumes[6] >= volumes[5]);
}

#[test]
fn build_weeks_cap_at_the_weekly_target() {
    let volumes = build_weekly_volumes(180, 8, 200);
    for (week, &volume) in volumes.iter().enumerate() {
        assert!(volume <= 200, "week {} exceeds target: {volume}", week + 1);
    }
}

#[test]
fn every_fourth_week_deloads() {
    let volumes = build_weekly_volumes(180, 8, 261);
    assert!(
        volumes[3] < volumes[2],
        "week 4 {} should dip below week 3 {}",
        volumes[3],
        volumes[2]
    );
    // Deload is 78% of the prior build week
    let expected = (f64::from(volumes[2]) * 0.78).round() as u32;
    assert_eq!(volumes[3], expected);
    // The build track resumes above the dip
    assert!(volumes[4] > volumes[3]);
}

#[test]
fn final_week_tapers_below_the_peak() {
    let volumes = build_weekly_volumes(180, 8, 261);
    let taper = *volumes.last().unwrap();
    let peak = volumes[..volumes.len() - 1].iter().copied().max().unwrap();
    assert!(taper < peak);
    assert_eq!(taper, (f64::from(peak) * 0.55).round() as u32);
}

#[test]
fn detrained_baseline_caps_the_first_two_weeks() {
    let volumes = build_weekly_volumes(0, 8, 800);
    assert!(volumes[0] <= 60, "week 1 {} exceeds adaptation cap", volumes[0]);
    assert!(volumes[1] <= 75, "week 2 {} exceeds adaptation cap", volumes[1]);

    let volumes = build_weekly_volumes(30, 6, 800);
    assert!(volumes[0] <= 60);
    assert!(volumes[1] <= 75);
}

#[test]
fn trained_baseline_is_not_capped() {
    let volumes = build_weekly_volumes(180, 8, 800);
    assert!(volumes[0] > 75);
}

#[test]
fn curve_is_deterministic() {
    assert_eq!(
        build_weekly_volumes(120, 12, 300),
        build_weekly_volumes(120, 12, 300)
    );
}
