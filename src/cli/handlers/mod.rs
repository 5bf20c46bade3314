mod init;
pub use init::cmd_init;

use chrono::{Duration, Local, NaiveDate};

use crate::cli::commands::*;
use crate::cli::output;
use crate::io::config_io;
use crate::io::watcher::ChangeWatcher;
use crate::model::config::Config;
use crate::ops::week_ops::{StoreError, WeekStore};
use crate::ops::{stats, week_stats};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let root_override = cli.root_dir.clone();

    match cli.command {
        Commands::Init(args) => cmd_init(args, json),
        Commands::Week(args) => cmd_week(args, root_override, json),
        Commands::List(args) => cmd_list(args, root_override, json),
        Commands::Add(args) => cmd_add(args, root_override, json),
        Commands::Toggle(args) => cmd_toggle(args, root_override, json),
        Commands::Edit(args) => cmd_edit(args, root_override, json),
        Commands::Delete(args) => cmd_delete(args, root_override, json),
        Commands::Touch(args) => cmd_touch(args, root_override, json),
        Commands::Stats(args) => cmd_stats(args, root_override, json),
        Commands::Watch(args) => cmd_watch(args, root_override),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the store from the persisted config, or from a `-C` override
/// (which bypasses the config file and the home-directory policy; it is a
/// development escape hatch, not a persisted choice).
fn load_store(root_override: Option<String>) -> Result<WeekStore, Box<dyn std::error::Error>> {
    let config = match root_override {
        Some(dir) => {
            let abs = std::fs::canonicalize(&dir)
                .map_err(|e| format!("cannot resolve -C path '{dir}': {e}"))?;
            Config::new(abs)
        }
        None => config_io::read_config()?,
    };
    Ok(WeekStore::new(config))
}

fn parse_date(arg: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match arg {
        Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{text}', expected YYYY-MM-DD").into()),
        None => Ok(Local::now().date_naive()),
    }
}

/// A mutation followed by the mandatory full reload of the day's week.
/// Reconciliation failures (the file drifted under us) are surfaced as a
/// warning and resolved by the reload itself.
fn after_mutation(
    store: &WeekStore,
    date: NaiveDate,
    result: Result<(), StoreError>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(()) => {}
        Err(err @ (StoreError::TaskNotFound { .. } | StoreError::LineNotTask { .. })) => {
            eprintln!("warning: {err}; reloading from disk");
        }
        Err(err) => return Err(err.into()),
    }
    let week = store.load_week(date)?;
    let day = week.day(date).expect("mutated date is within its own week");
    if json {
        println!("{}", serde_json::to_string_pretty(&output::day_to_json(day))?);
    } else {
        output::print_day(day);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_week(
    args: WeekArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let mut anchor = parse_date(args.date)?;
    if args.prev {
        anchor -= Duration::days(7);
    } else if args.next {
        anchor += Duration::days(7);
    }
    let week = store.load_week(anchor)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::week_to_json(&week))?
        );
    } else {
        output::print_week(&week);
    }
    Ok(())
}

fn cmd_list(
    args: DayArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let date = parse_date(args.date)?;
    let day = store.load_day(date)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::day_to_json(&day))?
        );
    } else {
        output::print_day(&day);
    }
    Ok(())
}

fn cmd_stats(
    args: DayArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let date = parse_date(args.date)?;
    let week = store.load_week(date)?;
    let stats = week_stats(&week);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        output::print_stats(&stats);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(
    args: AddArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let date = parse_date(args.date)?;
    let id = store.add(date, &args.text)?;
    if !json {
        println!("added {id}");
    }
    after_mutation(&store, date, Ok(()), json)
}

fn cmd_toggle(
    args: TaskArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let date = parse_date(args.date)?;
    let result = store.toggle(date, &args.id);
    after_mutation(&store, date, result, json)
}

fn cmd_edit(
    args: EditArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let date = parse_date(args.date)?;
    let result = store.save_meta(
        date,
        &args.id,
        args.est.as_deref(),
        args.act.as_deref(),
        args.reason.as_deref(),
    );
    after_mutation(&store, date, result, json)
}

fn cmd_delete(
    args: TaskArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let date = parse_date(args.date)?;
    let result = store.delete(date, &args.id);
    after_mutation(&store, date, result, json)
}

fn cmd_touch(
    args: DayArgs,
    root_override: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let date = parse_date(args.date)?;
    let created = store.create_day(date)?;
    if !json && !created {
        println!("{date} already exists");
    }
    after_mutation(&store, date, Ok(()), json)
}

// ---------------------------------------------------------------------------
// Watch loop
// ---------------------------------------------------------------------------

fn cmd_watch(
    args: WatchArgs,
    root_override: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(root_override)?;
    let anchor = parse_date(args.date)?;
    let interval = std::time::Duration::from_secs(
        args.interval.unwrap_or(store.config().poll_secs).max(1),
    );

    let mut week = store.load_week(anchor)?;
    let mut watcher = ChangeWatcher::new();
    watcher.rebuild(&week);
    println!(
        "watching week of {} in {} (every {}s, ctrl-c to stop)",
        week.start,
        store.config().root_dir.display(),
        interval.as_secs()
    );

    loop {
        std::thread::sleep(interval);
        match watcher.poll(&store, &week) {
            Ok(true) => match store.load_week(anchor) {
                Ok(reloaded) => {
                    week = reloaded;
                    watcher.rebuild(&week);
                    println!("change detected, reloaded week of {}", week.start);
                    for day in &week.days {
                        let s = stats::day_stats(day);
                        if s.total > 0 {
                            println!("  {}: {}/{} done", day.date, s.done, s.total);
                        }
                    }
                }
                // The recorded hashes are untouched, so the mismatch fires
                // again on the next tick once the file is readable.
                Err(err) => eprintln!("warning: {err}"),
            },
            Ok(false) => {}
            // Keep polling: the next tick retries implicitly.
            Err(err) => eprintln!("warning: {err}"),
        }
    }
}
