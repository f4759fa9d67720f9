// Tab Selection Model
// Tracks the active tab through a host-owned selection binding
//
// The host owns the selected index. The widget only reads and writes it
// through `SelectionBinding`, so the value never moves into the widget.

use tracing::{debug, warn};

use super::error::TabBarError;

/// Read/write accessor for a host-owned selection index
pub trait SelectionBinding {
    fn selected(&self) -> usize;
    fn set_selected(&mut self, index: usize);
}

impl SelectionBinding for usize {
    fn selected(&self) -> usize {
        *self
    }

    fn set_selected(&mut self, index: usize) {
        *self = index;
    }
}

/// Read-only binding: writes are ignored (useful for previews)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub usize);

impl SelectionBinding for Constant {
    fn selected(&self) -> usize {
        self.0
    }

    fn set_selected(&mut self, _index: usize) {}
}

/// Binding that notifies a handler whenever the selection changes
pub struct OnChange<F: FnMut(usize)> {
    value: usize,
    on_change: F,
}

impl<F: FnMut(usize)> OnChange<F> {
    pub fn new(initial: usize, on_change: F) -> Self {
        Self { value: initial, on_change }
    }
}

impl<F: FnMut(usize)> SelectionBinding for OnChange<F> {
    fn selected(&self) -> usize {
        self.value
    }

    fn set_selected(&mut self, index: usize) {
        if self.value != index {
            self.value = index;
            (self.on_change)(index);
        }
    }
}

/// Selection operations over a borrowed binding and a tab count
pub struct TabSelectionModel<'a, B: SelectionBinding + ?Sized> {
    binding: &'a mut B,
    tab_count: usize,
}

impl<'a, B: SelectionBinding + ?Sized> TabSelectionModel<'a, B> {
    pub fn new(binding: &'a mut B, tab_count: usize) -> Self {
        Self { binding, tab_count }
    }

    /// Currently selected index as reported by the binding
    pub fn selected(&self) -> usize {
        self.binding.selected()
    }

    /// Select the tab at `index`
    pub fn select(&mut self, index: usize) -> Result<(), TabBarError> {
        if index >= self.tab_count {
            warn!(index, len = self.tab_count, "rejected out-of-range tab selection");
            return Err(TabBarError::IndexOutOfRange {
                index,
                len: self.tab_count,
            });
        }
        debug!(from = self.binding.selected(), to = index, "tab selected");
        self.binding.set_selected(index);
        Ok(())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index < self.tab_count && index == self.binding.selected()
    }

    /// Select the next tab, wrapping to the first
    pub fn select_next(&mut self) -> Option<usize> {
        self.navigate(1)
    }

    /// Select the previous tab, wrapping to the last
    pub fn select_previous(&mut self) -> Option<usize> {
        self.navigate(-1)
    }

    fn navigate(&mut self, direction: isize) -> Option<usize> {
        if self.tab_count == 0 {
            return None;
        }
        let count = self.tab_count as isize;
        // An out-of-range host value is clamped before stepping
        let current = self.binding.selected().min(self.tab_count - 1) as isize;
        let next = (current + direction).rem_euclid(count) as usize;
        self.binding.set_selected(next);
        debug!(to = next, "tab navigated");
        Some(next)
    }
}
