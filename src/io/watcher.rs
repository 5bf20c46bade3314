//! Polling-based external-change detection.
//!
//! On each tick the watcher re-reads every non-missing day of the current
//! week, compares a content hash against the hash recorded at last load,
//! and asks for a full week reload on the first mismatch. The hash map is
//! owned here and rebuilt from every successful load. Polling is suppressed
//! while a mutation is in flight or while an input field holds focus;
//! focus loss re-arms after a short debounce so focus hopping between
//! adjacent fields does not discard keystrokes.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::io::day_io;
use crate::model::week::Week;
use crate::ops::week_ops::{StoreError, WeekStore};

const FOCUS_DEBOUNCE: Duration = Duration::from_millis(400);

pub struct ChangeWatcher {
    /// Hash recorded at last load, per day. Days absent here (missing file,
    /// or never loaded) are skipped by the poll.
    hashes: IndexMap<NaiveDate, String>,
    /// True while a metadata input field holds focus.
    focus_held: bool,
    /// After focus loss, polling stays suppressed until this instant.
    rearm_at: Option<Instant>,
}

impl ChangeWatcher {
    pub fn new() -> Self {
        ChangeWatcher {
            hashes: IndexMap::new(),
            focus_held: false,
            rearm_at: None,
        }
    }

    /// Rebuild the hash map from a freshly loaded week, replacing whatever
    /// was recorded before.
    pub fn rebuild(&mut self, week: &Week) {
        self.hashes.clear();
        for day in &week.days {
            if let Some(hash) = &day.hash {
                self.hashes.insert(day.date, hash.clone());
            }
        }
    }

    pub fn focus_gained(&mut self) {
        self.focus_held = true;
        self.rearm_at = None;
    }

    pub fn focus_lost(&mut self) {
        self.focus_held = false;
        self.rearm_at = Some(Instant::now() + FOCUS_DEBOUNCE);
    }

    /// True while polling must not run: a field has focus, the debounce
    /// window after focus loss is still open, or a mutation is in flight.
    pub fn is_suppressed(&self, store: &WeekStore, now: Instant) -> bool {
        if self.focus_held || store.is_busy() {
            return true;
        }
        matches!(self.rearm_at, Some(at) if now < at)
    }

    /// One poll tick. Returns true when an external change was detected and
    /// the caller should reload the whole week (one reload covers every
    /// day, so checking stops at the first mismatch).
    pub fn poll(&self, store: &WeekStore, week: &Week) -> Result<bool, StoreError> {
        if self.is_suppressed(store, Instant::now()) {
            return Ok(false);
        }
        for day in &week.days {
            // First-run condition: nothing recorded for this day yet.
            let Some(recorded) = self.hashes.get(&day.date) else {
                continue;
            };
            if !day_io::exists(&day.path) {
                // The file vanished since last load; that is a change too.
                return Ok(true);
            }
            let current = day_io::content_hash(&day_io::read(&day.path)?);
            if &current != recorded {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for ChangeWatcher {
    fn default() -> Self {
        Self::new()
    }
}
