// ABOUTME: Progress trend analysis over logged weight and body measurements
// ABOUTME: Computes total and recent weight change, trend direction, current BMI, and waist change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calculator::{calculate_bmi, round_to};
use crate::classifier::classify_bmi;
use chrono::Duration;
use pulse_core::constants::progress::{RECENT_WINDOW_DAYS, TREND_THRESHOLD_KG};
use pulse_core::models::{ProgressEntry, ProgressSummary, WeightTrend};

/// Trend direction for a weight change over the recent window
#[must_use]
pub fn weight_trend(change_kg: f64) -> WeightTrend {
    if change_kg <= -TREND_THRESHOLD_KG {
        WeightTrend::Losing
    } else if change_kg >= TREND_THRESHOLD_KG {
        WeightTrend::Gaining
    } else {
        WeightTrend::Maintaining
    }
}

/// Summarize a user's progress entries
///
/// Entries may arrive in any order; they are analyzed by `recorded_at`.
/// The recent window covers the last 30 days before the latest entry and
/// needs two entries inside it to report a change and trend. BMI is only
/// reported when `height_cm` is known and positive.
#[must_use]
pub fn summarize_progress(entries: &[ProgressEntry], height_cm: Option<f64>) -> ProgressSummary {
    let mut sorted: Vec<&ProgressEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.recorded_at);

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return ProgressSummary {
            entry_count: 0,
            starting_weight_kg: None,
            current_weight_kg: None,
            total_change_kg: None,
            recent_change_kg: None,
            trend: None,
            current_bmi: None,
            bmi_category: None,
            waist_change_cm: None,
            last_recorded_at: None,
        };
    };

    let window_start = last.recorded_at - Duration::days(RECENT_WINDOW_DAYS);
    let recent: Vec<&&ProgressEntry> = sorted
        .iter()
        .filter(|e| e.recorded_at >= window_start)
        .collect();
    let recent_change_kg = match (recent.first(), recent.len()) {
        (Some(start), n) if n >= 2 => Some(round_to(last.weight_kg - start.weight_kg, 1)),
        _ => None,
    };

    let current_bmi = height_cm
        .filter(|h| h.is_finite() && *h > 0.0)
        .map(|h| round_to(calculate_bmi(last.weight_kg, h), 1));

    let waists: Vec<f64> = sorted
        .iter()
        .filter_map(|e| e.measurements.waist_cm)
        .collect();
    let waist_change_cm = match (waists.first(), waists.last(), waists.len()) {
        (Some(start), Some(end), n) if n >= 2 => Some(round_to(end - start, 1)),
        _ => None,
    };

    ProgressSummary {
        entry_count: sorted.len(),
        starting_weight_kg: Some(first.weight_kg),
        current_weight_kg: Some(last.weight_kg),
        total_change_kg: Some(round_to(last.weight_kg - first.weight_kg, 1)),
        recent_change_kg,
        trend: recent_change_kg.map(weight_trend),
        current_bmi,
        bmi_category: current_bmi.map(classify_bmi),
        waist_change_cm,
        last_recorded_at: Some(last.recorded_at),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pulse_core::models::BodyMeasurements;
    use uuid::Uuid;

    fn entry(day: u32, weight_kg: f64, waist_cm: Option<f64>) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            recorded_at: Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).unwrap(),
            weight_kg,
            body_fat_percent: None,
            measurements: BodyMeasurements {
                waist_cm,
                ..BodyMeasurements::default()
            },
            photo_url: None,
            notes: None,
        }
    }

    #[test]
    fn trend_threshold_is_inclusive() {
        assert_eq!(weight_trend(-0.5), WeightTrend::Losing);
        assert_eq!(weight_trend(0.5), WeightTrend::Gaining);
        assert_eq!(weight_trend(0.4), WeightTrend::Maintaining);
        assert_eq!(weight_trend(-0.4), WeightTrend::Maintaining);
    }

    #[test]
    fn empty_history_has_no_figures() {
        let summary = summarize_progress(&[], Some(175.0));
        assert_eq!(summary.entry_count, 0);
        assert!(summary.current_weight_kg.is_none());
        assert!(summary.trend.is_none());
    }

    #[test]
    fn unordered_entries_are_sorted_by_date() {
        let entries = vec![
            entry(20, 78.0, Some(88.0)),
            entry(1, 80.0, Some(90.0)),
            entry(10, 79.2, None),
        ];
        let summary = summarize_progress(&entries, Some(175.0));

        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.starting_weight_kg, Some(80.0));
        assert_eq!(summary.current_weight_kg, Some(78.0));
        assert_eq!(summary.total_change_kg, Some(-2.0));
        assert_eq!(summary.trend, Some(WeightTrend::Losing));
        assert_eq!(summary.current_bmi, Some(25.5));
        assert_eq!(summary.waist_change_cm, Some(-2.0));
    }

    #[test]
    fn single_entry_has_no_trend() {
        let summary = summarize_progress(&[entry(5, 70.0, None)], None);
        assert_eq!(summary.total_change_kg, Some(0.0));
        assert!(summary.recent_change_kg.is_none());
        assert!(summary.current_bmi.is_none());
    }
}
