//! Back/forward location history.

use crate::model::Route;

/// Linear history of visited locations with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHistory {
    entries: Vec<Route>,
    cursor: usize,
}

impl NavHistory {
    /// History holding only `initial`.
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Location under the cursor.
    pub fn current(&self) -> Route {
        self.entries[self.cursor]
    }

    /// Visit `route`. Drops forward entries. Visiting the current location
    /// is a no-op; returns whether an entry was added.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current() {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        self.cursor += 1;
        true
    }

    /// Step back, returning the new current location.
    pub fn back(&mut self) -> Option<Route> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward, returning the new current location.
    pub fn forward(&mut self) -> Option<Route> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Whether `back` would move.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether `forward` would move.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl Default for NavHistory {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
