// ABOUTME: Weekly session mix under the capacity invariant and day-slot assignment
// ABOUTME: Reduces over-requested sessions (strength, outdoor, treadmill) and spreads slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::WorkoutType;

use super::WeekFlags;

/// Per-week session counts after capacity enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionMix {
    /// Treadmill sessions this week
    pub treadmill: u32,
    /// Outdoor hikes this week
    pub outdoor: u32,
    /// Strength sessions this week (own-day or stacked add-ons)
    pub strength: u32,
}

/// Enforce the capacity invariant: sessions that occupy a day slot may not
/// exceed `days_per_week`. Over-requests reduce strength first, then
/// outdoor, then treadmill; counts are never increased. Strength stacked on
/// cardio days consumes no slot and is never reduced here.
///
/// Returns the adjusted mix and whether anything was reduced.
#[must_use]
pub fn enforce_capacity(
    days_per_week: u32,
    treadmill: u32,
    outdoor: u32,
    strength: u32,
    strength_on_cardio_days: bool,
) -> (SessionMix, bool) {
    let slot_strength = if strength_on_cardio_days { 0 } else { strength };
    let total = treadmill + outdoor + slot_strength;
    if total <= days_per_week {
        return (
            SessionMix {
                treadmill,
                outdoor,
                strength,
            },
            false,
        );
    }

    let mut overage = total - days_per_week;
    let mut reduced_strength = slot_strength;
    let mut reduced_outdoor = outdoor;
    let mut reduced_treadmill = treadmill;

    let cut = reduced_strength.min(overage);
    reduced_strength -= cut;
    overage -= cut;

    let cut = reduced_outdoor.min(overage);
    reduced_outdoor -= cut;
    overage -= cut;

    reduced_treadmill = reduced_treadmill.saturating_sub(overage);

    (
        SessionMix {
            treadmill: reduced_treadmill,
            outdoor: reduced_outdoor,
            strength: if strength_on_cardio_days {
                strength
            } else {
                reduced_strength
            },
        },
        true,
    )
}

/// Assign a workout type to each of the week's abstract day slots.
///
/// Cardio sub-types follow the weekly phase: deload, taper, and the first
/// two weeks keep every treadmill session at Zone 2; a week without an
/// outdoor hike promotes its first treadmill session to the long Zone 2
/// session; otherwise the first treadmill session runs intervals. The final
/// two event-prep weeks convert treadmill work to outdoor hikes for
/// specificity. Unfilled slots fall back to recovery/mobility, or rest
/// during adaptation weeks to protect the weekly load ceiling.
#[must_use]
pub fn build_week_slots(
    mix: &SessionMix,
    days_per_week: u32,
    include_strength: bool,
    strength_on_cardio_days: bool,
    flags: &WeekFlags,
) -> Vec<WorkoutType> {
    let day_count = days_per_week.max(1) as usize;
    let outdoor_count = mix.outdoor.min(day_count as u32) as usize;
    let treadmill_count = mix.treadmill.min(day_count as u32) as usize;
    let strength_count = if include_strength && !strength_on_cardio_days {
        mix.strength.min(day_count as u32) as usize
    } else {
        0
    };

    let requires_treadmill_long = outdoor_count == 0 && treadmill_count > 0;
    let all_zone2 = flags.is_deload || flags.is_taper || flags.is_early;

    let mut cardio: Vec<WorkoutType> = Vec::with_capacity(outdoor_count + treadmill_count + 1);
    cardio.extend(std::iter::repeat(WorkoutType::OutdoorLongHike).take(outdoor_count));
    for i in 0..treadmill_count {
        let workout = if flags.is_event_prep {
            WorkoutType::OutdoorLongHike
        } else if requires_treadmill_long && i == 0 {
            WorkoutType::Zone2InclineWalk
        } else if all_zone2 {
            WorkoutType::Zone2InclineWalk
        } else if i == 0 {
            WorkoutType::TreadmillIntervals
        } else {
            WorkoutType::Zone2InclineWalk
        };
        cardio.push(workout);
    }
    if flags.is_event_prep && outdoor_count == 0 && treadmill_count > 0 {
        cardio.insert(0, WorkoutType::OutdoorLongHike);
    }

    let mut slots: Vec<Option<WorkoutType>> = vec![None; day_count];
    let strength_slots = vec![WorkoutType::Strength; strength_count];
    place_workouts(&mut slots, &strength_slots, |t| t == WorkoutType::Strength);

    let (high, low): (Vec<WorkoutType>, Vec<WorkoutType>) = cardio
        .into_iter()
        .partition(|t| t.is_high_volume_cardio());
    place_workouts(&mut slots, &high, WorkoutType::is_high_volume_cardio);
    place_workouts(&mut slots, &low, |_| false);

    let fallback = if flags.is_adaptation {
        WorkoutType::RestDay
    } else {
        WorkoutType::RecoveryMobility
    };
    slots.into_iter().map(|s| s.unwrap_or(fallback)).collect()
}

/// Visit even slot indices first, then odd, so repeated placements spread
/// across the week instead of clustering.
fn alternating_order(length: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..length).step_by(2).collect();
    order.extend((1..length).step_by(2));
    order
}

fn has_adjacent_match(
    index: usize,
    slots: &[Option<WorkoutType>],
    should_avoid: impl Fn(WorkoutType) -> bool,
) -> bool {
    let prev = index.checked_sub(1).and_then(|i| slots[i]);
    let next = slots.get(index + 1).copied().flatten();
    prev.is_some_and(&should_avoid) || next.is_some_and(&should_avoid)
}

/// Place workouts into empty slots, preferring positions without an
/// adjacent workout the avoidance predicate matches; overflow drops.
fn place_workouts(
    slots: &mut [Option<WorkoutType>],
    workouts: &[WorkoutType],
    should_avoid: impl Fn(WorkoutType) -> bool,
) {
    let order = alternating_order(slots.len());
    for workout in workouts {
        let spread = order.iter().copied().find(|&idx| {
            slots[idx].is_none() && !has_adjacent_match(idx, slots, &should_avoid)
        });
        let target = spread.or_else(|| order.iter().copied().find(|&idx| slots[idx].is_none()));
        if let Some(idx) = target {
            slots[idx] = Some(*workout);
        }
    }
}
