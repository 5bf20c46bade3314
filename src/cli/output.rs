use serde::Serialize;

use crate::model::day::Day;
use crate::model::task::Task;
use crate::model::week::Week;
use crate::ops::stats::{DayStats, WeekStats};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: String,
    pub text: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub act_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct DayJson {
    pub date: String,
    pub missing: bool,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct WeekJson {
    pub start: String,
    pub days: Vec<DayJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id.clone(),
        text: task.text.clone(),
        done: task.done,
        est_min: task.est_min,
        act_min: task.act_min,
        reason: if task.reason.is_empty() {
            None
        } else {
            Some(task.reason.clone())
        },
    }
}

pub fn day_to_json(day: &Day) -> DayJson {
    DayJson {
        date: day.date.to_string(),
        missing: day.missing,
        tasks: day.tasks.iter().map(task_to_json).collect(),
    }
}

pub fn week_to_json(week: &Week) -> WeekJson {
    WeekJson {
        start: week.start.to_string(),
        days: week.days.iter().map(day_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable rendering
// ---------------------------------------------------------------------------

pub fn render_task(task: &Task) -> String {
    let mark = if task.done { 'x' } else { ' ' };
    let mut line = format!("[{}] {}  {}", mark, task.id, task.text);
    match (task.est_min, task.act_min) {
        (Some(est), Some(act)) => line.push_str(&format!("  (est {est}m, act {act}m)")),
        (Some(est), None) => line.push_str(&format!("  (est {est}m)")),
        (None, Some(act)) => line.push_str(&format!("  (act {act}m)")),
        (None, None) => {}
    }
    if !task.reason.is_empty() {
        line.push_str(&format!("  reason: {}", task.reason));
    }
    line
}

pub fn print_day(day: &Day) {
    if day.missing {
        println!("{}  (no file)", day.date);
        return;
    }
    println!("{}", day.date);
    if day.tasks.is_empty() {
        println!("  (no tasks)");
    }
    for task in &day.tasks {
        println!("  {}", render_task(task));
    }
}

pub fn print_week(week: &Week) {
    for day in &week.days {
        print_day(day);
    }
}

pub fn print_stats(stats: &WeekStats) {
    println!("week of {}", stats.start);
    for day in &stats.days {
        println!("  {}", render_day_stats(day));
    }
    println!(
        "total: {}/{} done, est {}m, act {}m",
        stats.done, stats.total, stats.est_min, stats.act_min
    );
}

fn render_day_stats(day: &DayStats) -> String {
    format!(
        "{}  {}/{} done, est {}m, act {}m",
        day.date, day.done, day.total, day.est_min, day.act_min
    )
}
