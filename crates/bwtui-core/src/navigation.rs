//! Selection within the filtered view.

/// Selected position in a list of `len` items. Moves wrap around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    selected: usize,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected position, or `None` when the list is empty.
    pub fn selected(&self, len: usize) -> Option<usize> {
        (self.selected < len).then_some(self.selected)
    }

    /// Move up one item, wrapping from the first to the last.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + len - 1) % len;
    }

    /// Move down one item, wrapping from the last to the first.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Go back to the first item if the current one no longer exists.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = 0;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}
