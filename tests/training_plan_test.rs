// ABOUTME: End-to-end tests for the plan scheduler
// ABOUTME: Validates periodization, calendar placement, warnings, and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate, Weekday};
use trekplan::{
    build_training_plan, validate_inputs, Constraints, FitnessLevel, Hike, PlanError,
    ProfilePoint, StrengthSettings, TrainingPlanInputs, TrainingPlanOutput, WorkoutType,
};

fn moderate_hike() -> Hike {
    Hike {
        distance_miles: 5.0,
        elevation_gain_ft: 1500.0,
        profile_points: (0..=10)
            .map(|i| ProfilePoint {
                distance_miles: f64::from(i) * 0.5,
                elevation_ft: f64::from(i) * 150.0,
            })
            .collect(),
    }
}

/// Eight full weeks starting Monday 2025-03-03
fn eight_week_inputs() -> TrainingPlanInputs {
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    TrainingPlanInputs {
        hike: moderate_hike(),
        fitness_level: FitnessLevel::Intermediate,
        training_start_date: start,
        target_date: start + Days::new(55),
        days_per_week: 3,
        preferred_days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
        any_days: false,
        baseline_minutes: 180,
        constraints: Constraints {
            treadmill_max_incline_percent: 12.0,
            treadmill_sessions_per_week: 2,
            outdoor_hikes_per_week: 1,
            max_speed_mph: 4.0,
        },
        strength: StrengthSettings {
            include: false,
            sessions_per_week: 0,
            on_cardio_days: false,
        },
    }
}

#[test]
fn eight_week_plan_has_periodized_structure() {
    let plan = build_training_plan(&eight_week_inputs());
    assert_eq!(plan.total_weeks, 8);
    assert_eq!(plan.weeks.len(), 8);

    // The deload week dips below its predecessor
    assert!(plan.weeks[3].total_minutes < plan.weeks[2].total_minutes);
    assert!(plan.weeks[3].focus.starts_with("Deload"));
    assert!(plan.weeks[7].focus.starts_with("Taper"));

    // The final two weeks shift to outdoor hike-specific sessions
    for week in &plan.weeks[6..] {
        assert!(week
            .days
            .iter()
            .all(|d| d.workouts[0].workout_type == WorkoutType::OutdoorLongHike));
    }

    // Week numbers are 1-based and contiguous
    for (index, week) in plan.weeks.iter().enumerate() {
        assert_eq!(week.week_number as usize, index + 1);
    }

    let total: u32 = plan.weeks.iter().map(|w| w.total_minutes).sum();
    assert!(total > 0);
}

#[test]
fn week_one_lands_on_the_preferred_weekdays() {
    let inputs = eight_week_inputs();
    let plan = build_training_plan(&inputs);
    let week = &plan.weeks[0];
    assert_eq!(week.days.len(), 3);

    let start = inputs.training_start_date;
    let expected = [start, start + Days::new(2), start + Days::new(4)];
    for (day, expected_date) in week.days.iter().zip(expected) {
        assert_eq!(day.date, expected_date);
    }
    assert_eq!(week.days[0].day_name, "Mon");
    assert_eq!(week.days[1].day_name, "Wed");
    assert_eq!(week.days[2].day_name, "Fri");
}

#[test]
fn week_windows_are_anchored_to_the_start_date() {
    let inputs = eight_week_inputs();
    let plan = build_training_plan(&inputs);
    for (index, week) in plan.weeks.iter().enumerate() {
        let expected_start = inputs.training_start_date + Days::new(index as u64 * 7);
        assert_eq!(week.start_date, expected_start);
        assert!(week.end_date <= inputs.target_date);
        assert!(week.end_date >= week.start_date);
    }
    assert_eq!(plan.weeks[7].end_date, inputs.target_date);
}

#[test]
fn detrained_user_gets_a_gentle_first_week() {
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let inputs = TrainingPlanInputs {
        hike: moderate_hike(),
        fitness_level: FitnessLevel::Intermediate,
        training_start_date: start,
        target_date: start + Days::new(41),
        days_per_week: 5,
        preferred_days: Vec::new(),
        any_days: true,
        baseline_minutes: 0,
        constraints: Constraints {
            treadmill_max_incline_percent: 12.0,
            treadmill_sessions_per_week: 4,
            outdoor_hikes_per_week: 0,
            max_speed_mph: 4.0,
        },
        strength: StrengthSettings {
            include: false,
            sessions_per_week: 0,
            on_cardio_days: false,
        },
    };
    let plan = build_training_plan(&inputs);
    let week = &plan.weeks[0];
    assert!(
        week.total_minutes <= 90,
        "adaptation week too heavy: {}",
        week.total_minutes
    );

    // Adaptation caps incline: average segment incline stays low
    let mut incline_sum = 0.0;
    let mut segment_count = 0_u32;
    for day in &week.days {
        for workout in &day.workouts {
            if let Some(segments) = &workout.segments {
                for segment in segments {
                    incline_sum += segment.incline_pct;
                    segment_count += 1;
                }
            }
        }
    }
    assert!(segment_count > 0);
    assert!(incline_sum / f64::from(segment_count) <= 6.0);
}

#[test]
fn over_requested_sessions_are_reduced_with_a_warning() {
    let mut inputs = eight_week_inputs();
    inputs.constraints.treadmill_sessions_per_week = 3;
    inputs.constraints.outdoor_hikes_per_week = 2;
    let plan = build_training_plan(&inputs);

    assert!(plan
        .warnings
        .iter()
        .any(|w| w == "Cardio + strength sessions cannot exceed training days."));
    for week in &plan.weeks {
        let slot_count = week
            .days
            .iter()
            .map(|day| day.workouts.first().map_or(0, |_| 1))
            .sum::<u32>();
        assert!(slot_count <= inputs.days_per_week);
    }
}

#[test]
fn short_window_warns_about_preparation_time() {
    let mut inputs = eight_week_inputs();
    inputs.hike = Hike {
        distance_miles: 14.0,
        elevation_gain_ft: 5000.0,
        profile_points: Vec::new(),
    };
    inputs.target_date = inputs.training_start_date + Days::new(27);
    let plan = build_training_plan(&inputs);
    assert_eq!(plan.total_weeks, 4);
    assert!(plan
        .warnings
        .iter()
        .any(|w| w.contains("at least 12 weeks of preparation")));
}

#[test]
fn one_day_window_still_produces_a_valid_plan() {
    let mut inputs = eight_week_inputs();
    inputs.target_date = inputs.training_start_date;
    let plan = build_training_plan(&inputs);
    assert_eq!(plan.total_weeks, 1);
    assert_eq!(plan.weeks.len(), 1);
    assert!(plan
        .warnings
        .iter()
        .any(|w| w.contains("Less than two weeks")));
}

#[test]
fn stacked_strength_appends_addons_to_cardio_days() {
    let mut inputs = eight_week_inputs();
    inputs.strength = StrengthSettings {
        include: true,
        sessions_per_week: 2,
        on_cardio_days: true,
    };
    let plan = build_training_plan(&inputs);

    for week in &plan.weeks {
        let addons: Vec<_> = week
            .days
            .iter()
            .flat_map(|day| day.workouts.iter().skip(1))
            .collect();
        assert!(addons.len() <= 2, "week {} has {} add-ons", week.week_number, addons.len());
        for addon in &addons {
            assert_eq!(addon.workout_type, WorkoutType::Strength);
            assert!(addon.id.ends_with("-strength-addon"));
            assert!((15..=28).contains(&addon.duration_minutes));
        }
        // Add-ons land only on days whose primary workout is cardio
        for day in &week.days {
            if day.workouts.len() > 1 {
                assert!(day.workouts[0].workout_type.is_cardio());
            }
        }
        assert!(week.notes.contains("Strength focus:"));
    }
}

#[test]
fn interval_workouts_alternate_hard_and_easy_repeats() {
    let plan = build_training_plan(&eight_week_inputs());
    let intervals = plan
        .weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .flat_map(|d| d.workouts.iter())
        .find(|w| w.workout_type == WorkoutType::TreadmillIntervals)
        .expect("build weeks schedule an interval session");

    let segments = intervals.segments.as_ref().unwrap();
    let notes: Vec<&str> = segments
        .iter()
        .filter_map(|s| s.note.as_deref())
        .collect();
    assert!(notes.contains(&"Hard interval"));
    assert!(notes.contains(&"Recovery"));
    let sum: f64 = segments.iter().map(|s| s.minutes).sum();
    assert!((sum - f64::from(intervals.duration_minutes)).abs() <= 1.0);
}

#[test]
fn outdoor_long_hike_growth_is_capped_week_over_week() {
    let plan = build_training_plan(&eight_week_inputs());
    let mut previous: Option<u32> = None;
    for week in &plan.weeks {
        for day in &week.days {
            for workout in &day.workouts {
                if workout.workout_type == WorkoutType::OutdoorLongHike {
                    if let Some(prev) = previous {
                        assert!(
                            workout.duration_minutes <= prev + 20,
                            "week {} long hike jumped {prev} -> {}",
                            week.week_number,
                            workout.duration_minutes
                        );
                    }
                    previous = Some(workout.duration_minutes);
                }
            }
        }
    }
    assert!(previous.is_some());
}

#[test]
fn week_totals_match_their_workouts() {
    let plan = build_training_plan(&eight_week_inputs());
    for week in &plan.weeks {
        let sum: u32 = week
            .days
            .iter()
            .flat_map(|d| d.workouts.iter())
            .map(|w| w.duration_minutes)
            .sum();
        assert_eq!(week.total_minutes, sum);
    }
}

#[test]
fn workout_ids_embed_week_number_and_type_slug() {
    let plan = build_training_plan(&eight_week_inputs());
    for week in &plan.weeks {
        for day in &week.days {
            let workout = &day.workouts[0];
            assert_eq!(
                workout.id,
                format!("{}-{}", week.week_number, workout.workout_type.slug())
            );
        }
    }
}

#[test]
fn scheduler_is_deterministic() {
    let inputs = eight_week_inputs();
    let first = build_training_plan(&inputs);
    let second = build_training_plan(&inputs);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn plan_round_trips_through_json() {
    let plan = build_training_plan(&eight_week_inputs());
    let json = serde_json::to_string(&plan).unwrap();
    let restored: TrainingPlanOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, restored);

    // Workout types serialize with their display labels
    assert!(json.contains("\"Zone 2 incline walk\""));
    assert!(json.contains("\"totalWeeks\":8"));
}

#[test]
fn validation_rejects_inverted_date_windows() {
    let mut inputs = eight_week_inputs();
    inputs.target_date = inputs.training_start_date - Days::new(1);
    assert!(matches!(
        validate_inputs(&inputs),
        Err(PlanError::InvalidDateWindow { .. })
    ));
}

#[test]
fn validation_rejects_out_of_range_fields() {
    let mut inputs = eight_week_inputs();
    inputs.days_per_week = 0;
    assert!(matches!(
        validate_inputs(&inputs),
        Err(PlanError::ValueOutOfRange {
            field: "days_per_week",
            ..
        })
    ));

    let mut inputs = eight_week_inputs();
    inputs.constraints.max_speed_mph = 0.0;
    assert!(validate_inputs(&inputs).is_err());

    let mut inputs = eight_week_inputs();
    inputs.hike.elevation_gain_ft = f64::NAN;
    assert!(matches!(
        validate_inputs(&inputs),
        Err(PlanError::NonFiniteValue { .. })
    ));
}

#[test]
fn valid_inputs_pass_validation() {
    assert!(validate_inputs(&eight_week_inputs()).is_ok());
}
