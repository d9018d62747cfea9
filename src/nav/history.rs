use tracing::debug;

use crate::nav::location::Location;

/// Browser-style history stack. Replace navigation swaps the current entry
/// and never grows the stack; push truncates any forward entries first.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(start: Location) -> Self {
        Self {
            entries: vec![start],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn replace(&mut self, location: Location) {
        debug!(target: "nav", %location, "replace");
        self.entries[self.index] = location;
    }

    pub fn push(&mut self, location: Location) {
        debug!(target: "nav", %location, "push");
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
