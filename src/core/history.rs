//! Steppable history of accepted states.
//!
//! `HistoryStack` only moves entries and the index pointer. Whatever
//! "applying" a state means is supplied by the consumer through
//! [`HistoryHooks`], which the `*_with` methods invoke after each move.

use serde::{Deserialize, Serialize};

use crate::core::keys::{KeyPress, KeySpec};

/// Consumer callbacks fired after the history pointer moves.
pub trait HistoryHooks<S> {
    /// Called after a push or a prev/next step; the state to apply is
    /// `history.current()`. The hook may `pop` the entry to reject it.
    fn on_navigate(&mut self, history: &mut HistoryStack<S>);

    /// Called after the index was rewound to the origin entry.
    fn on_reset(&mut self, history: &mut HistoryStack<S>);
}

/// History navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryNavigation {
    Reset,
    Prev,
    Next,
}

/// Key bindings for history navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryKeys {
    pub reset: KeySpec,
    pub prev: KeySpec,
    pub next: KeySpec,
}

impl Default for HistoryKeys {
    fn default() -> Self {
        Self {
            reset: KeySpec::new("Esc"),
            prev: KeySpec::with_control("Left"),
            next: KeySpec::with_control("Right"),
        }
    }
}

impl HistoryKeys {
    #[must_use]
    pub fn navigation_for(&self, press: &KeyPress) -> Option<HistoryNavigation> {
        if self.reset.matches(press) {
            Some(HistoryNavigation::Reset)
        } else if self.prev.matches(press) {
            Some(HistoryNavigation::Prev)
        } else if self.next.matches(press) {
            Some(HistoryNavigation::Next)
        } else {
            None
        }
    }
}

/// Ordered, never-empty sequence of states with a current-position pointer.
///
/// Entry 0 is the origin: the state captured at the last reset.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStack<S> {
    entries: Vec<S>,
    index: usize,
}

impl<S> HistoryStack<S> {
    #[must_use]
    pub fn new(origin: S) -> Self {
        Self {
            entries: vec![origin],
            index: 0,
        }
    }

    /// Clears every entry and makes `origin` the only one.
    pub fn reset_to(&mut self, origin: S) {
        self.entries.clear();
        self.entries.push(origin);
        self.index = 0;
    }

    /// Drops entries after the current index, appends `state` and moves the
    /// index onto it.
    pub fn push(&mut self, state: S) {
        self.entries.truncate(self.index + 1);
        self.entries.push(state);
        self.index = self.entries.len() - 1;
    }

    /// Removes the current entry without notifying anyone.
    ///
    /// Entries after the current index are dropped first, so the index ends
    /// on the entry before the removed one. The origin entry is never
    /// removed; returns `None` when the index is at the origin.
    pub fn pop(&mut self) -> Option<S> {
        if self.index == 0 {
            return None;
        }
        self.entries.truncate(self.index + 1);
        let state = self.entries.pop()?;
        self.index -= 1;
        Some(state)
    }

    /// Moves one entry back. Returns `false` when already at the origin.
    pub fn step_prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves one entry forward. Returns `false` when already at the newest entry.
    pub fn step_next(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn rewind(&mut self) {
        self.index = 0;
    }

    /// Pushes `state` and lets `hooks` apply (or reject) it.
    pub fn push_with<H: HistoryHooks<S>>(&mut self, state: S, hooks: &mut H) {
        self.push(state);
        hooks.on_navigate(self);
    }

    /// Performs `navigation` and notifies `hooks` when the pointer moved.
    ///
    /// Prev/next at either end leave the stack untouched and skip the hook.
    /// Reset always notifies.
    pub fn navigate_with<H: HistoryHooks<S>>(
        &mut self,
        navigation: HistoryNavigation,
        hooks: &mut H,
    ) -> bool {
        match navigation {
            HistoryNavigation::Reset => {
                self.rewind();
                hooks.on_reset(self);
                true
            }
            HistoryNavigation::Prev => {
                let moved = self.step_prev();
                if moved {
                    hooks.on_navigate(self);
                }
                moved
            }
            HistoryNavigation::Next => {
                let moved = self.step_next();
                if moved {
                    hooks.on_navigate(self);
                }
                moved
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> &S {
        &self.entries[self.index]
    }

    #[must_use]
    pub fn origin(&self) -> &S {
        &self.entries[0]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_at_origin(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn entries(&self) -> &[S] {
        &self.entries
    }
}
