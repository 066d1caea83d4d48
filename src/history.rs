use crate::config::HistoryConfig;
use crate::equality::{self, Equality};
use crate::snapshot::Snapshot;
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace};

/// Undo/redo container holding past, present and future states.
/// Stores full values; nothing is diffed.
///
/// Values are moved in and never cloned on the way in. If `T` shares
/// mutable data (e.g. `Rc<RefCell<_>>`), cloning before `assign` is the
/// caller's job.
///
/// Dedup is decided entirely by the equality predicate. [`History::new`] and
/// [`History::with_config`] use `PartialEq`; use [`History::with_equality`]
/// for anything else (see [`crate::equality`]).
pub struct History<T> {
    baseline: T,
    /// Oldest first.
    past: VecDeque<T>,
    present: T,
    /// Nearest first.
    future: VecDeque<T>,
    max_size: Option<usize>,
    equals: Equality<T>,
}

impl<T: fmt::Debug> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("present", &self.present)
            .field("past_depth", &self.past.len())
            .field("future_depth", &self.future.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> History<T> {
    /// Unbounded history using `PartialEq` for dedup.
    pub fn new(initial: T) -> Self {
        Self::with_config(initial, HistoryConfig::default())
    }

    pub fn with_config(initial: T, config: HistoryConfig) -> Self {
        Self::with_equality(initial, config, equality::structural())
    }
}

impl<T: Clone> History<T> {
    /// Build a history with a caller-supplied equality predicate. `initial`
    /// becomes both the present and the baseline `clear` returns to.
    pub fn with_equality<F>(initial: T, config: HistoryConfig, equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            baseline: initial.clone(),
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            max_size: config.max_size,
            equals: Box::new(equals),
        }
    }

    /// Set a new present. Clears the redo stack.
    ///
    /// Returns `false` (and changes nothing) when the predicate considers
    /// `value` equal to the current present.
    pub fn assign(&mut self, value: T) -> bool {
        if (self.equals)(&self.present, &value) {
            trace!("assign skipped, value equals present");
            return false;
        }
        self.advance(value);
        self.future.clear();
        trace!(past = self.past.len(), "assign");
        true
    }

    /// Compute the next value from the present and record it as a single
    /// step, however many parts of the value `update` touched.
    pub fn batch_update<F>(&mut self, update: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let candidate = update(&self.present);
        self.assign(candidate)
    }

    /// Undo: move present to the front of future, pop previous state.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        trace!(past = self.past.len(), future = self.future.len(), "undo");
        true
    }

    /// Redo: move present to past (subject to the bound), pop next state.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        self.advance(next);
        trace!(past = self.past.len(), future = self.future.len(), "redo");
        true
    }

    /// Drop all history and return to the baseline.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.present = self.baseline.clone();
        trace!("clear");
    }

    pub fn take_snapshot(&self) -> Snapshot<T> {
        Snapshot::new(
            self.past.iter().cloned().collect(),
            self.present.clone(),
            self.future.iter().cloned().collect(),
        )
    }

    /// Replace past, present and future with copies of `snapshot`.
    ///
    /// Neither the equality predicate nor `max_size` is applied, so the
    /// restored past may be longer than the current bound.
    pub fn restore_snapshot(&mut self, snapshot: &Snapshot<T>) {
        self.past = snapshot.past().iter().cloned().collect();
        self.present = snapshot.present().clone();
        self.future = snapshot.future().iter().cloned().collect();

        if let Some(max) = self.max_size {
            if self.past.len() > max {
                debug!(past = self.past.len(), max_size = max, "restored past exceeds max_size");
            }
        }
        trace!(past = self.past.len(), future = self.future.len(), "restore_snapshot");
    }

    /// Change the bound. Past entries beyond the new bound are dropped
    /// immediately, oldest first.
    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
        self.trim_past();
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn past(&self) -> &VecDeque<T> {
        &self.past
    }

    pub fn future(&self) -> &VecDeque<T> {
        &self.future
    }

    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    fn advance(&mut self, next: T) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        self.trim_past();
    }

    // Trim oldest entries if we exceed max size
    fn trim_past(&mut self) {
        let Some(max) = self.max_size else {
            return;
        };
        while self.past.len() > max {
            self.past.pop_front();
            debug!(max_size = max, "evicted oldest history entry");
        }
    }
}
