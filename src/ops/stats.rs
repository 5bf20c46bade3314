//! Per-day and per-week progress numbers, computed from a loaded week.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::day::Day;
use crate::model::week::Week;

#[derive(Debug, Clone, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub total: usize,
    pub done: usize,
    /// Sum of estimates over tasks that have one.
    pub est_min: u32,
    /// Sum of actuals over tasks that have one.
    pub act_min: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekStats {
    pub start: NaiveDate,
    pub days: Vec<DayStats>,
    pub total: usize,
    pub done: usize,
    pub est_min: u32,
    pub act_min: u32,
}

pub fn day_stats(day: &Day) -> DayStats {
    DayStats {
        date: day.date,
        total: day.tasks.len(),
        done: day.tasks.iter().filter(|t| t.done).count(),
        est_min: day.tasks.iter().filter_map(|t| t.est_min).sum(),
        act_min: day.tasks.iter().filter_map(|t| t.act_min).sum(),
    }
}

pub fn week_stats(week: &Week) -> WeekStats {
    let days: Vec<DayStats> = week.days.iter().map(day_stats).collect();
    WeekStats {
        start: week.start,
        total: days.iter().map(|d| d.total).sum(),
        done: days.iter().map(|d| d.done).sum(),
        est_min: days.iter().map(|d| d.est_min).sum(),
        act_min: days.iter().map(|d| d.act_min).sum(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use std::path::PathBuf;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn task(done: bool, est: Option<u32>, act: Option<u32>) -> Task {
        let mut t = Task::new("ab12cd34".into(), "x".into());
        t.done = done;
        t.est_min = est;
        t.act_min = act;
        t
    }

    #[test]
    fn sums_skip_unset_values() {
        let day = Day {
            date: d(9),
            path: PathBuf::new(),
            tasks: vec![
                task(true, Some(30), Some(45)),
                task(false, None, None),
                task(false, Some(10), None),
            ],
            missing: false,
            hash: None,
        };
        let stats = day_stats(&day);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.est_min, 40);
        assert_eq!(stats.act_min, 45);
    }

    #[test]
    fn week_totals_aggregate_days() {
        let mk = |date: NaiveDate, tasks: Vec<Task>| Day {
            date,
            path: PathBuf::new(),
            tasks,
            missing: false,
            hash: None,
        };
        let week = Week {
            start: d(9),
            days: vec![
                mk(d(9), vec![task(true, Some(5), Some(5))]),
                mk(d(10), vec![task(false, Some(20), None)]),
            ],
        };
        let stats = week_stats(&week);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.est_min, 25);
        assert_eq!(stats.act_min, 5);
        assert_eq!(stats.days.len(), 2);
    }
}
