use serde::{Deserialize, Serialize};

/// Point-in-time copy of a history's past, present and future.
///
/// A snapshot owns its values and has no connection to the container that
/// produced it. Restoring one applies it exactly as given: no dedup, no
/// trimming to the container's current bound.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<T> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
}

impl<T> Snapshot<T> {
    /// `past` is oldest first, `future` is nearest first.
    pub fn new(past: Vec<T>, present: T, future: Vec<T>) -> Self {
        Self {
            past,
            present,
            future,
        }
    }

    pub fn past(&self) -> &[T] {
        &self.past
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn future(&self) -> &[T] {
        &self.future
    }

    pub fn into_parts(self) -> (Vec<T>, T, Vec<T>) {
        (self.past, self.present, self.future)
    }
}
