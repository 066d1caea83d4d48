use crate::config::HistoryConfig;
use crate::history::History;
use crate::shortcut::HistoryShortcut;
use crate::snapshot::Snapshot;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

/// Reactive handle over a [`History`].
///
/// The container lives in a local `StoredValue`; `state`, `can_undo` and
/// `can_redo` are mirrored into signals after every call so views that read
/// them re-render. The handle is `Copy` and can be moved into any number of
/// event closures.
pub struct UseHistory<T: 'static> {
    history: StoredValue<History<T>, LocalStorage>,
    state: RwSignal<T>,
    can_undo: RwSignal<bool>,
    can_redo: RwSignal<bool>,
    depth: RwSignal<(usize, usize)>,
}

impl<T: 'static> Clone for UseHistory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UseHistory<T> {}

/// Bind an unbounded `PartialEq`-deduplicated history to the reactive graph.
pub fn use_history<T>(initial: T) -> UseHistory<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    UseHistory::from_history(History::new(initial))
}

pub fn use_history_with<T, F>(initial: T, config: HistoryConfig, equals: F) -> UseHistory<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    UseHistory::from_history(History::with_equality(initial, config, equals))
}

impl<T> UseHistory<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn from_history(history: History<T>) -> Self {
        let state = RwSignal::new(history.present().clone());
        let can_undo = RwSignal::new(history.can_undo());
        let can_redo = RwSignal::new(history.can_redo());
        let depth = RwSignal::new((history.past().len(), history.future().len()));
        Self {
            history: StoredValue::new_local(history),
            state,
            can_undo,
            can_redo,
            depth,
        }
    }

    pub fn state(&self) -> ReadSignal<T> {
        self.state.read_only()
    }

    pub fn can_undo(&self) -> ReadSignal<bool> {
        self.can_undo.read_only()
    }

    pub fn can_redo(&self) -> ReadSignal<bool> {
        self.can_redo.read_only()
    }

    /// `(past, future)` lengths.
    pub fn depth(&self) -> ReadSignal<(usize, usize)> {
        self.depth.read_only()
    }

    pub fn set(&self, value: T) {
        self.mutate(|h| {
            h.assign(value);
        });
    }

    /// Apply `update` to the present as one undoable step.
    pub fn update(&self, update: impl FnOnce(&T) -> T) {
        self.mutate(|h| {
            h.batch_update(update);
        });
    }

    pub fn undo(&self) {
        self.mutate(|h| {
            h.undo();
        });
    }

    pub fn redo(&self) {
        self.mutate(|h| {
            h.redo();
        });
    }

    pub fn clear(&self) {
        self.mutate(History::clear);
    }

    pub fn snapshot(&self) -> Option<Snapshot<T>> {
        self.history.try_with_value(History::take_snapshot)
    }

    pub fn restore(&self, snapshot: &Snapshot<T>) {
        self.mutate(|h| h.restore_snapshot(snapshot));
    }

    /// Run undo/redo for a matching shortcut. Returns `true` when the event
    /// was consumed.
    pub fn handle_keydown(&self, ev: &KeyboardEvent) -> bool {
        match HistoryShortcut::from_event(ev) {
            Some(shortcut) => {
                ev.prevent_default();
                self.apply_shortcut(shortcut);
                true
            }
            None => false,
        }
    }

    pub fn apply_shortcut(&self, shortcut: HistoryShortcut) {
        match shortcut {
            HistoryShortcut::Undo => self.undo(),
            HistoryShortcut::Redo => self.redo(),
        }
    }

    fn mutate(&self, op: impl FnOnce(&mut History<T>)) {
        let published = self.history.try_update_value(|h| {
            op(h);
            (
                h.present().clone(),
                h.can_undo(),
                h.can_redo(),
                (h.past().len(), h.future().len()),
            )
        });

        // Disposed owner: nothing left to re-render
        let Some((present, can_undo, can_redo, depth)) = published else {
            return;
        };
        self.state.set(present);
        self.can_undo.set(can_undo);
        self.can_redo.set(can_redo);
        self.depth.set(depth);
    }
}
