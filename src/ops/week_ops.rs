//! The week store: anchor date to ordered day list, and single-task
//! mutations applied against the correct on-disk file.
//!
//! Every mutation re-reads its file fresh, locates the target line by
//! identifier token (never by a cached line index), patches only that line,
//! and writes the whole file back. The caller is expected to follow any
//! mutation with a full `load_week`, so displayed state is always derived
//! from disk rather than from an optimistic in-memory patch. External edits
//! surface as `TaskNotFound` here or as a hash mismatch in the watcher, and
//! are resolved by discarding memory and reloading.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::io::day_io::{self, DayIoError};
use crate::model::config::Config;
use crate::model::day::Day;
use crate::model::task::Task;
use crate::model::week::{Week, week_dates, week_start};
use crate::parse::ident::{self, IdGenError};
use crate::parse::line_parser::{ParsedLine, is_task_line, parse_line, split_checkbox};
use crate::parse::line_serializer::serialize_line;

/// Error type for week store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input rejected before any write. No state change.
    #[error("{0}")]
    Validation(String),
    /// The file no longer contains a line with this identifier; it was
    /// edited externally since the task was last displayed. Recoverable:
    /// warn and reload the week.
    #[error("task {id} not found in {}; the file changed on disk", path.display())]
    TaskNotFound { id: String, path: PathBuf },
    /// The line carrying this identifier no longer matches the checkbox
    /// pattern. Also recoverable by a reload.
    #[error("line for task {id} in {} is no longer a checklist item", path.display())]
    LineNotTask { id: String, path: PathBuf },
    /// A mutation is already in flight.
    #[error("another operation is in progress")]
    Busy,
    #[error(transparent)]
    Io(#[from] DayIoError),
    #[error(transparent)]
    IdGen(#[from] IdGenError),
}

/// RAII holder for the store's busy flag. Mutations acquire it for their
/// whole read-modify-write span; dropping it releases the flag on every
/// exit path, success or failure.
struct BusyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

pub struct WeekStore {
    config: Config,
    busy: Cell<bool>,
}

impl WeekStore {
    pub fn new(config: Config) -> Self {
        WeekStore {
            config,
            busy: Cell::new(false),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True while a mutation holds the busy flag. The change watcher's poll
    /// is gated on this, so a poll-triggered reload never interleaves with
    /// a write.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn begin_mutation(&self) -> Result<BusyGuard<'_>, StoreError> {
        if self.busy.get() {
            return Err(StoreError::Busy);
        }
        self.busy.set(true);
        Ok(BusyGuard { flag: &self.busy })
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Load the week containing `anchor`: seven days from its Monday.
    pub fn load_week(&self, anchor: NaiveDate) -> Result<Week, StoreError> {
        let days = week_dates(anchor)
            .into_iter()
            .map(|date| self.load_day(date))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Week {
            start: week_start(anchor),
            days,
        })
    }

    /// Load one day: read, parse, and run the identifier migration pass.
    ///
    /// Any task lacking a canonical id gets its line rewritten in place and
    /// the file is saved before the tasks are returned, so every task handed
    /// to the caller carries an id that is literally embedded on disk. The
    /// recorded content hash covers the post-migration file.
    pub fn load_day(&self, date: NaiveDate) -> Result<Day, StoreError> {
        let path = self.config.day_path(date);
        if !day_io::exists(&path) {
            return Ok(Day::missing(date, path));
        }

        let text = day_io::read(&path)?;
        let mut lines = day_io::split_lines(&text);
        let mut tasks = Vec::new();
        let mut rewrote = false;

        for idx in 0..lines.len() {
            let Some(parsed) = parse_line(&lines[idx]) else {
                continue;
            };
            let (hex, canonical) = match &parsed.id {
                Some(tok) => (tok.hex.clone(), tok.canonical),
                None => (ident::generate_id()?, false),
            };
            if !canonical && is_task_line(&lines[idx]) {
                // One-time migration: rewrite in canonical form, stripping
                // any legacy token. The pattern re-check guards against the
                // line changing between parse and rewrite.
                lines[idx] = serialize_line(
                    parsed.done,
                    &parsed.text,
                    parsed.est_min,
                    parsed.act_min,
                    &parsed.reason,
                    &hex,
                );
                rewrote = true;
            }
            tasks.push(task_from_parsed(&parsed, hex, idx));
        }

        let content = if rewrote {
            let joined = day_io::join_lines(&lines);
            day_io::write(&path, &joined)?;
            joined
        } else {
            text
        };

        Ok(Day {
            date,
            path,
            tasks,
            missing: false,
            hash: Some(day_io::content_hash(&content)),
        })
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Flip the checkbox character on the located line, leaving every other
    /// byte of the line untouched.
    pub fn toggle(&self, date: NaiveDate, id: &str) -> Result<(), StoreError> {
        let _busy = self.begin_mutation()?;
        let (path, mut lines) = self.read_day_lines(date, id)?;
        let idx = self.locate(&lines, id, &path)?;
        let flipped = flip_checkbox(&lines[idx]).ok_or_else(|| StoreError::LineNotTask {
            id: id.to_string(),
            path: path.clone(),
        })?;
        lines[idx] = flipped;
        day_io::write(&path, &day_io::join_lines(&lines))?;
        Ok(())
    }

    /// Add a new task with a fresh identifier. Insertion goes immediately
    /// after a literal `## Todo` heading (skipping blank lines that follow
    /// it) when one exists, otherwise at end of file. A missing day file is
    /// created first.
    pub fn add(&self, date: NaiveDate, text: &str) -> Result<String, StoreError> {
        let _busy = self.begin_mutation()?;
        let path = self.config.day_path(date);
        if !day_io::exists(&path) {
            day_io::write(&path, &day_template(date))?;
        }
        let mut lines = day_io::split_lines(&day_io::read(&path)?);
        let id = ident::generate_id()?;
        let line = serialize_line(false, text, None, None, "", &id);
        let idx = insertion_index(&lines);
        lines.insert(idx, line);
        day_io::write(&path, &day_io::join_lines(&lines))?;
        Ok(id)
    }

    /// Save estimate/actual/reason metadata on the located line.
    ///
    /// `est`/`act`/`reason` of `None` keep the current value; `Some("")`
    /// clears it. Validation happens before any write: estimate and actual
    /// text must be non-negative integers, and when actual exceeds estimate
    /// a non-empty reason is required.
    pub fn save_meta(
        &self,
        date: NaiveDate,
        id: &str,
        est: Option<&str>,
        act: Option<&str>,
        reason: Option<&str>,
    ) -> Result<(), StoreError> {
        let _busy = self.begin_mutation()?;
        let (path, mut lines) = self.read_day_lines(date, id)?;
        let idx = self.locate(&lines, id, &path)?;
        let parsed = parse_line(&lines[idx]).ok_or_else(|| StoreError::LineNotTask {
            id: id.to_string(),
            path: path.clone(),
        })?;

        let est_min = match est {
            Some(text) => parse_minutes_field("estimate", text)?,
            None => parsed.est_min,
        };
        let act_min = match act {
            Some(text) => parse_minutes_field("actual", text)?,
            None => parsed.act_min,
        };
        let reason = match reason {
            Some(text) => text.trim().to_string(),
            None => parsed.reason.clone(),
        };

        if let (Some(est_min), Some(act_min)) = (est_min, act_min)
            && act_min > est_min
            && reason.is_empty()
        {
            return Err(StoreError::Validation(
                "a reason is required when actual minutes exceed the estimate".to_string(),
            ));
        }

        lines[idx] = serialize_line(parsed.done, &parsed.text, est_min, act_min, &reason, id);
        day_io::write(&path, &day_io::join_lines(&lines))?;
        Ok(())
    }

    /// Remove the located line entirely.
    pub fn delete(&self, date: NaiveDate, id: &str) -> Result<(), StoreError> {
        let _busy = self.begin_mutation()?;
        let (path, mut lines) = self.read_day_lines(date, id)?;
        let idx = self.locate(&lines, id, &path)?;
        lines.remove(idx);
        day_io::write(&path, &day_io::join_lines(&lines))?;
        Ok(())
    }

    /// Create the file for a missing day. Returns false when it already
    /// existed (no-op).
    pub fn create_day(&self, date: NaiveDate) -> Result<bool, StoreError> {
        let _busy = self.begin_mutation()?;
        let path = self.config.day_path(date);
        if day_io::exists(&path) {
            return Ok(false);
        }
        day_io::write(&path, &day_template(date))?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Fresh read for a mutation. A file that vanished since display is the
    /// same reconciliation case as a missing line.
    fn read_day_lines(
        &self,
        date: NaiveDate,
        id: &str,
    ) -> Result<(PathBuf, Vec<String>), StoreError> {
        let path = self.config.day_path(date);
        if !day_io::exists(&path) {
            return Err(StoreError::TaskNotFound {
                id: id.to_string(),
                path,
            });
        }
        let text = day_io::read(&path)?;
        Ok((path, day_io::split_lines(&text)))
    }

    /// Scan for the line whose identifier token matches `id`. Line indices
    /// from earlier loads are never trusted here.
    fn locate(&self, lines: &[String], id: &str, path: &Path) -> Result<usize, StoreError> {
        lines
            .iter()
            .position(|line| {
                ident::extract_id(line)
                    .1
                    .is_some_and(|tok| tok.hex == id)
            })
            .ok_or_else(|| StoreError::TaskNotFound {
                id: id.to_string(),
                path: path.to_path_buf(),
            })
    }
}

fn task_from_parsed(parsed: &ParsedLine, id: String, line_index: usize) -> Task {
    Task {
        id,
        text: parsed.text.clone(),
        done: parsed.done,
        est_min: parsed.est_min,
        act_min: parsed.act_min,
        reason: parsed.reason.clone(),
        line_index,
    }
}

/// Initial content for a newly created day file.
fn day_template(date: NaiveDate) -> String {
    format!("# {}\n\n## Todo\n", date.format("%Y-%m-%d"))
}

/// Where a new task line goes: right after a literal `## Todo` heading,
/// past any blank lines that immediately follow it, else end of file.
fn insertion_index(lines: &[String]) -> usize {
    match lines.iter().position(|l| l.trim() == "## Todo") {
        Some(heading) => {
            let mut idx = heading + 1;
            while idx < lines.len() && lines[idx].trim().is_empty() {
                idx += 1;
            }
            idx
        }
        None => lines.len(),
    }
}

/// Flip only the checkbox mark, preserving the rest of the line verbatim.
/// Lines that no longer match the full checkbox-task pattern (bad bracket,
/// missing separator) are rejected, not patched.
fn flip_checkbox(line: &str) -> Option<String> {
    let (done, _) = split_checkbox(line)?;
    let new_mark = if done { ' ' } else { 'x' };
    let indent = line.len() - line.trim_start().len();
    let mark_at = indent + 3;
    let mark = line[mark_at..].chars().next()?;
    let mut out = String::with_capacity(line.len());
    out.push_str(&line[..mark_at]);
    out.push(new_mark);
    out.push_str(&line[mark_at + mark.len_utf8()..]);
    Some(out)
}

/// Edit-boundary validation for estimate/actual input text. Empty clears
/// the value; anything else must be a non-negative integer.
fn parse_minutes_field(label: &str, text: &str) -> Result<Option<u32>, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StoreError::Validation(format!(
            "{label} must be a non-negative integer, got '{text}'"
        )));
    }
    trimmed.parse().map(Some).map_err(|_| {
        StoreError::Validation(format!("{label} value '{text}' is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> WeekStore {
        WeekStore::new(Config::new(tmp.path().to_path_buf()))
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn write_day(tmp: &TempDir, date: NaiveDate, content: &str) {
        fs::write(tmp.path().join(format!("{date}.md")), content).unwrap();
    }

    fn read_day(tmp: &TempDir, date: NaiveDate) -> String {
        fs::read_to_string(tmp.path().join(format!("{date}.md"))).unwrap()
    }

    #[test]
    fn load_week_materializes_missing_days() {
        let tmp = TempDir::new().unwrap();
        let week = store(&tmp).load_week(d(2025, 6, 11)).unwrap();
        assert_eq!(week.start, d(2025, 6, 9));
        assert_eq!(week.days.len(), 7);
        assert!(week.days.iter().all(|day| day.missing));
    }

    #[test]
    fn load_day_parses_tasks_in_order() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "# 2025-06-09\n\n## Todo\n\n- [ ] First <!-- tid:aaaa1111 -->\n- [x] Second est:10 <!-- tid:bbbb2222 -->\n",
        );
        let day = store(&tmp).load_day(date).unwrap();
        assert!(!day.missing);
        assert_eq!(day.tasks.len(), 2);
        assert_eq!(day.tasks[0].text, "First");
        assert_eq!(day.tasks[1].id, "bbbb2222");
        assert!(day.tasks[1].done);
        assert_eq!(day.tasks[1].est_min, Some(10));
        assert!(day.hash.is_some());
    }

    #[test]
    fn load_day_migrates_legacy_and_missing_ids() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "- [ ] Legacy task [id:cafe0123]\n- [ ] No id yet\n- [x] Canonical <!-- tid:dddd4444 -->\n",
        );
        let day = store(&tmp).load_day(date).unwrap();
        assert_eq!(day.tasks[0].id, "cafe0123");
        assert_eq!(day.tasks[2].id, "dddd4444");
        assert_eq!(day.tasks[1].id.len(), 8);

        let text = read_day(&tmp, date);
        assert!(!text.contains("[id:"));
        assert!(text.contains("- [ ] Legacy task <!-- tid:cafe0123 -->"));
        assert!(text.contains(&format!("<!-- tid:{} -->", day.tasks[1].id)));
    }

    #[test]
    fn migration_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "- [ ] Legacy [id:cafe0123]\n- [ ] Fresh\n- [x] Done <!-- tid:dddd4444 -->\n",
        );
        let s = store(&tmp);
        let first = s.load_day(date).unwrap();
        let after_first = read_day(&tmp, date);
        let second = s.load_day(date).unwrap();
        let after_second = read_day(&tmp, date);

        assert_eq!(after_first, after_second);
        let first_ids: Vec<_> = first.tasks.iter().map(|t| t.id.clone()).collect();
        let second_ids: Vec<_> = second.tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(first.hash, second.hash);
    }

    #[test]
    fn toggle_flips_only_the_mark() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "- [ ] Task est:30 act:45 reason:ran late <!-- tid:aaaa1111 -->\n",
        );
        let s = store(&tmp);
        s.toggle(date, "aaaa1111").unwrap();
        assert_eq!(
            read_day(&tmp, date),
            "- [x] Task est:30 act:45 reason:ran late <!-- tid:aaaa1111 -->\n"
        );
        s.toggle(date, "aaaa1111").unwrap();
        assert_eq!(
            read_day(&tmp, date),
            "- [ ] Task est:30 act:45 reason:ran late <!-- tid:aaaa1111 -->\n"
        );
    }

    #[test]
    fn toggle_locates_by_id_after_reorder() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "- [ ] A <!-- tid:aaaa1111 -->\n- [ ] B <!-- tid:bbbb2222 -->\n",
        );
        let s = store(&tmp);
        // External edit moves B above A between display and mutation.
        write_day(
            &tmp,
            date,
            "- [ ] B <!-- tid:bbbb2222 -->\n- [ ] A <!-- tid:aaaa1111 -->\n",
        );
        s.toggle(date, "aaaa1111").unwrap();
        let text = read_day(&tmp, date);
        assert!(text.contains("- [x] A <!-- tid:aaaa1111 -->"));
        assert!(text.contains("- [ ] B <!-- tid:bbbb2222 -->"));
    }

    #[test]
    fn toggle_missing_id_is_task_not_found() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(&tmp, date, "- [ ] A <!-- tid:aaaa1111 -->\n");
        let err = store(&tmp).toggle(date, "ffff9999").unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound { .. }));
    }

    #[test]
    fn toggle_on_degraded_line_is_line_not_task() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        let degraded = [
            // The id token survives but the checkbox was mangled externally.
            "some prose <!-- tid:aaaa1111 -->\n",
            // Separator lost between bracket and text.
            "- [x]glued text <!-- tid:aaaa1111 -->\n",
            // Closing bracket lost.
            "- [x broken text <!-- tid:aaaa1111 -->\n",
        ];
        for content in degraded {
            write_day(&tmp, date, content);
            let err = store(&tmp).toggle(date, "aaaa1111").unwrap_err();
            assert!(
                matches!(err, StoreError::LineNotTask { .. }),
                "content: {content:?}"
            );
            // Degraded lines are never patched in place.
            assert_eq!(read_day(&tmp, date), content);
        }
    }

    #[test]
    fn add_inserts_after_todo_heading() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "# 2025-06-09\n\n## Todo\n\n- [ ] Existing <!-- tid:aaaa1111 -->\n\n## Notes\nprose\n",
        );
        let s = store(&tmp);
        let id = s.add(date, "New task").unwrap();
        let text = read_day(&tmp, date);
        let lines: Vec<&str> = text.lines().collect();
        // Heading, blank line, then the new task above the existing one.
        assert_eq!(lines[2], "## Todo");
        assert_eq!(lines[4], format!("- [ ] New task <!-- tid:{id} -->"));
        assert_eq!(lines[5], "- [ ] Existing <!-- tid:aaaa1111 -->");
    }

    #[test]
    fn add_without_heading_appends_at_end() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(&tmp, date, "- [ ] Existing <!-- tid:aaaa1111 -->\n");
        let id = store(&tmp).add(date, "Appended").unwrap();
        let text = read_day(&tmp, date);
        assert!(text.ends_with(&format!("- [ ] Appended <!-- tid:{id} -->\n")));
    }

    #[test]
    fn add_creates_missing_day_file() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        let id = store(&tmp).add(date, "First of the day").unwrap();
        let text = read_day(&tmp, date);
        assert!(text.starts_with("# 2025-06-09"));
        assert!(text.contains("## Todo"));
        assert!(text.contains(&format!("- [ ] First of the day <!-- tid:{id} -->")));
    }

    #[test]
    fn save_meta_rewrites_located_line() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(&tmp, date, "- [ ] Task <!-- tid:aaaa1111 -->\n");
        let s = store(&tmp);
        s.save_meta(date, "aaaa1111", Some("30"), Some("25"), None)
            .unwrap();
        assert_eq!(
            read_day(&tmp, date),
            "- [ ] Task est:30 act:25 <!-- tid:aaaa1111 -->\n"
        );
    }

    #[test]
    fn save_meta_rejects_non_integer_input() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(&tmp, date, "- [ ] Task <!-- tid:aaaa1111 -->\n");
        let before = read_day(&tmp, date);
        let err = store(&tmp)
            .save_meta(date, "aaaa1111", Some("30m"), None, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        // Rejected before any write.
        assert_eq!(read_day(&tmp, date), before);
    }

    #[test]
    fn save_meta_requires_reason_when_over_estimate() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(&tmp, date, "- [ ] Task <!-- tid:aaaa1111 -->\n");
        let s = store(&tmp);

        let err = s
            .save_meta(date, "aaaa1111", Some("30"), Some("45"), None)
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        s.save_meta(date, "aaaa1111", Some("30"), Some("45"), Some("ran late"))
            .unwrap();
        assert_eq!(
            read_day(&tmp, date),
            "- [ ] Task est:30 act:45 reason:ran late <!-- tid:aaaa1111 -->\n"
        );
    }

    #[test]
    fn save_meta_keeps_unspecified_fields_and_clears_empty_ones() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "- [ ] Task est:30 act:20 reason:old <!-- tid:aaaa1111 -->\n",
        );
        let s = store(&tmp);
        s.save_meta(date, "aaaa1111", None, Some(""), Some(""))
            .unwrap();
        assert_eq!(read_day(&tmp, date), "- [ ] Task est:30 <!-- tid:aaaa1111 -->\n");
    }

    #[test]
    fn delete_removes_only_the_located_line() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        write_day(
            &tmp,
            date,
            "- [ ] A <!-- tid:aaaa1111 -->\n- [ ] B <!-- tid:bbbb2222 -->\n",
        );
        store(&tmp).delete(date, "aaaa1111").unwrap();
        assert_eq!(read_day(&tmp, date), "- [ ] B <!-- tid:bbbb2222 -->\n");
    }

    #[test]
    fn create_day_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        let s = store(&tmp);
        assert!(s.create_day(date).unwrap());
        assert!(!s.create_day(date).unwrap());
        assert!(read_day(&tmp, date).contains("## Todo"));
    }

    #[test]
    fn busy_flag_is_released_after_failed_mutation() {
        let tmp = TempDir::new().unwrap();
        let date = d(2025, 6, 9);
        let s = store(&tmp);
        // No file at all: TaskNotFound, but the flag must be released.
        assert!(s.toggle(date, "aaaa1111").is_err());
        assert!(!s.is_busy());
        // And the next mutation can proceed.
        s.add(date, "works").unwrap();
        assert!(!s.is_busy());
    }

    #[test]
    fn parse_minutes_field_accepts_digits_only() {
        assert_eq!(parse_minutes_field("estimate", "30").unwrap(), Some(30));
        assert_eq!(parse_minutes_field("estimate", "  7 ").unwrap(), Some(7));
        assert_eq!(parse_minutes_field("estimate", "").unwrap(), None);
        assert!(parse_minutes_field("estimate", "-5").is_err());
        assert!(parse_minutes_field("estimate", "5.5").is_err());
        assert!(parse_minutes_field("estimate", "abc").is_err());
    }
}
