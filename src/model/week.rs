use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::day::Day;

/// Seven consecutive days, Monday through Sunday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Week {
    /// The Monday this week starts on.
    pub start: NaiveDate,
    /// Exactly seven days, `start` through `start + 6`.
    pub days: Vec<Day>,
}

impl Week {
    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// Resolve the Monday of the week containing `anchor`.
///
/// Any date within a week yields the same Monday, so navigation can shift
/// an arbitrary anchor by plus or minus seven days.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64)
}

/// The seven dates of the week containing `anchor`, Monday first.
pub fn week_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(anchor);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn wednesday_anchor_resolves_to_monday() {
        // 2025-06-11 is a Wednesday; its week starts Monday 2025-06-09.
        assert_eq!(week_start(d(2025, 6, 11)), d(2025, 6, 9));
    }

    #[test]
    fn every_anchor_in_week_yields_same_start() {
        let monday = d(2025, 6, 9);
        for offset in 0..7 {
            let anchor = monday + Duration::days(offset);
            assert_eq!(week_start(anchor), monday, "offset {offset}");
        }
    }

    #[test]
    fn monday_is_its_own_start() {
        assert_eq!(week_start(d(2025, 6, 9)), d(2025, 6, 9));
    }

    #[test]
    fn week_dates_are_monday_through_sunday() {
        let dates = week_dates(d(2025, 6, 11));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], d(2025, 6, 9));
        assert_eq!(dates[6], d(2025, 6, 15));
    }

    #[test]
    fn week_spans_month_boundary() {
        // 2025-07-01 is a Tuesday; the week starts Monday 2025-06-30.
        assert_eq!(week_start(d(2025, 7, 1)), d(2025, 6, 30));
    }
}
