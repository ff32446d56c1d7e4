//! Naive weekly forecast
//!
//! A deliberate baseline, not a model: the projection repeats the historical
//! weekly average for every future week, ignoring trend and seasonality.

use chrono::{Duration, Utc, Weekday};

use crate::aggregate::weekly_totals;
use crate::models::{ForecastPoint, SeriesKind, Transaction, WeeklyPoint};

/// Project future weekly spend from the historical weekly average.
///
/// Returns exactly `horizon_weeks` points, one week apart, each carrying the
/// arithmetic mean of all historical weekly totals (no minimum sample size).
/// The first point lands one week after the most recent observed week end,
/// or after today in the defensive case where transactions exist but none of
/// their dates parsed (which also makes the mean 0). Empty transactions yield
/// an empty projection regardless of the requested horizon.
pub fn project_weekly(
    transactions: &[Transaction],
    boundary: Weekday,
    horizon_weeks: u32,
) -> Vec<ForecastPoint> {
    if transactions.is_empty() {
        return Vec::new();
    }

    let weekly = weekly_totals(transactions, boundary);
    let mean = if weekly.is_empty() {
        0.0
    } else {
        weekly.iter().map(|w| w.amount).sum::<f64>() / weekly.len() as f64
    };
    let anchor = weekly
        .last()
        .map(|w| w.week_end)
        .unwrap_or_else(|| Utc::now().date_naive());

    (1..=i64::from(horizon_weeks))
        .map(|i| ForecastPoint {
            week_end: anchor + Duration::weeks(i),
            projected: mean,
        })
        .collect()
}

/// The historical weekly series and the projection as one labeled sequence,
/// for rendering both in a single table or chart
pub fn history_with_forecast(
    transactions: &[Transaction],
    boundary: Weekday,
    horizon_weeks: u32,
) -> Vec<WeeklyPoint> {
    let mut series: Vec<WeeklyPoint> = weekly_totals(transactions, boundary)
        .into_iter()
        .map(|w| WeeklyPoint {
            week_end: w.week_end,
            amount: w.amount,
            series: SeriesKind::Actual,
        })
        .collect();

    series.extend(
        project_weekly(transactions, boundary, horizon_weeks)
            .into_iter()
            .map(|p| WeeklyPoint {
                week_end: p.week_end,
                amount: p.projected,
                series: SeriesKind::Projected,
            }),
    );

    series
}
