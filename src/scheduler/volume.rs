// ABOUTME: Periodized weekly volume curve with progressive overload, deload, and taper
// ABOUTME: Produces one target minute count per plan week from baseline and peak target
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::volume as vc;
use crate::segments::clamp;

/// Build the weekly training-volume curve, one minute count per week.
///
/// Build weeks grow by the linear step toward `weekly_target` clamped into
/// the [x1.07, x1.10] band of the prior build week, capped at the target and
/// never regressing. Every 4th week deloads to 78% of the prior build week
/// (the build track continues from its pre-deload value). The final week
/// tapers to 55% of the highest week seen. Detrained users (baseline <= 30)
/// get weeks 1 and 2 hard-capped at 60 and 75 minutes.
#[must_use]
pub fn build_weekly_volumes(
    baseline_minutes: u32,
    total_weeks: u32,
    weekly_target: u32,
) -> Vec<u32> {
    let low_baseline = baseline_minutes <= vc::LOW_BASELINE_MINUTES;

    if total_weeks <= 1 {
        let initial = if low_baseline {
            vc::LOW_BASELINE_START_MINUTES
        } else {
            let scaled =
                (f64::from(baseline_minutes) * vc::SINGLE_WEEK_BASELINE_FACTOR).round() as u32;
            scaled.max(vc::SINGLE_WEEK_FLOOR_MINUTES)
        };
        return vec![initial];
    }

    let mut volumes: Vec<u32> = Vec::with_capacity(total_weeks as usize);
    let mut last_build: f64 = if low_baseline {
        f64::from(vc::LOW_BASELINE_START_MINUTES)
    } else {
        f64::from(baseline_minutes.max(vc::START_FLOOR_MINUTES))
    };
    let peak_week = (total_weeks - 1).max(1);
    let target = f64::from(weekly_target);

    for week in 1..=total_weeks {
        if week == total_weeks {
            let peak = volumes
                .iter()
                .copied()
                .max()
                .unwrap_or(0)
                .max(last_build.round() as u32);
            volumes.push((f64::from(peak) * vc::TAPER_FACTOR).round() as u32);
            continue;
        }
        if week % vc::DELOAD_INTERVAL_WEEKS == 0 {
            volumes.push((last_build * vc::DELOAD_FACTOR).round() as u32);
            continue;
        }
        let remaining = f64::from(peak_week.saturating_sub(week) + 1);
        let step_target = last_build + (target - last_build) / remaining;
        let growth = clamp(
            step_target,
            last_build * vc::MIN_GROWTH_FACTOR,
            last_build * vc::MAX_GROWTH_FACTOR,
        );
        // Cap at the peak target but never shrink a build week
        last_build = growth.min(target).max(last_build).round();
        volumes.push(last_build as u32);
    }

    if low_baseline {
        volumes[0] = volumes[0].min(vc::ADAPTATION_WEEK1_CAP_MINUTES);
        if volumes.len() > 1 {
            volumes[1] = volumes[1].min(vc::ADAPTATION_WEEK2_CAP_MINUTES);
        }
    }

    volumes
}
