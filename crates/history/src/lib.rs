//! Linear undo/redo history of full document snapshots.
//!
//! The stack is append-only until a commit after undo truncates the redo
//! branch. Entries are deep copies: committing clones the live document, and
//! undo/redo hand back fresh clones, so later edits can never corrupt an
//! archived state.

mod debounce;

pub use debounce::{Debounce, DEBOUNCE_WINDOW};

/// Entries kept before the oldest is dropped.
pub const MAX_ENTRIES: usize = 100;

/// A linear, truncating snapshot stack.
///
/// Invariants: `entries` is never empty (it is seeded with the initial
/// state), `index < entries.len()`, and entries are never mutated in place.
#[derive(Clone, Debug)]
pub struct History<T: Clone + PartialEq> {
    entries: Vec<T>,
    index: usize,
}

impl<T: Clone + PartialEq> History<T> {
    /// Start a history whose baseline is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Number of stored snapshots. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Index of the current snapshot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The snapshot the document currently corresponds to.
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Archive `state`, discarding any redo branch past the current index.
    ///
    /// A state equal to the current snapshot is skipped entirely, which is
    /// what collapses a gesture that ended where it started into no entry
    /// at all. Returns whether an entry was added.
    pub fn commit(&mut self, state: &T) -> bool {
        if *state == self.entries[self.index] {
            return false;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(state.clone());
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
        log::debug!("history: commit, {} entries", self.entries.len());
        true
    }

    /// Step back one snapshot. Returns a copy of it, or `None` at the start.
    pub fn undo(&mut self) -> Option<T> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        log::debug!("history: undo to {}", self.index);
        Some(self.entries[self.index].clone())
    }

    /// Step forward one snapshot. Returns a copy of it, or `None` at the end.
    pub fn redo(&mut self) -> Option<T> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        log::debug!("history: redo to {}", self.index);
        Some(self.entries[self.index].clone())
    }
}
