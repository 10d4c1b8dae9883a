//! Paginator state and navigation

use crate::paging::range::{compute_range, PageRange, DEFAULT_WINDOW_SIZE};
use crate::paging::window::WindowPolicy;
use crate::viewport::{Breakpoints, DeviceClass};

/// Inputs to a single range computation.
///
/// Constructors and setters clamp so that `current ∈ [1, total]` always
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current: usize,
    total: usize,
    window_size: usize,
    show_first_last: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 1, DEFAULT_WINDOW_SIZE, false)
    }
}

impl PaginationState {
    pub fn new(current: usize, total: usize, window_size: usize, show_first_last: bool) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
            window_size: window_size.max(1),
            show_first_last,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn show_first_last(&self) -> bool {
        self.show_first_last
    }

    /// Whether the paginator should be rendered at all
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Jump to a page, clamped to `[1, total]`. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.total);
        let changed = page != self.current;
        self.current = page;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Update the page count, pulling `current` back into range if needed
    pub fn set_total(&mut self, total: usize) {
        self.total = total.max(1);
        self.current = self.current.min(self.total);
    }

    pub fn set_window_size(&mut self, window_size: usize) {
        self.window_size = window_size.max(1);
    }

    pub fn set_show_first_last(&mut self, show_first_last: bool) {
        self.show_first_last = show_first_last;
    }

    /// Markers for the current state
    pub fn range(&self) -> PageRange {
        compute_range(
            self.current,
            self.total,
            self.window_size,
            self.show_first_last,
        )
    }
}

/// Pagination state that tracks the viewport.
///
/// The host forwards resize events through [`Paginator::on_viewport_resize`];
/// the window size follows the device class chosen by the breakpoints.
#[derive(Debug, Clone)]
pub struct Paginator {
    state: PaginationState,
    breakpoints: Breakpoints,
    policy: WindowPolicy,
    device: DeviceClass,
}

impl Paginator {
    /// Create a paginator for a desktop viewport until told otherwise
    pub fn new(total: usize, show_first_last: bool) -> Self {
        Self::with_config(
            total,
            show_first_last,
            Breakpoints::default(),
            WindowPolicy::default(),
        )
    }

    pub fn with_config(
        total: usize,
        show_first_last: bool,
        breakpoints: Breakpoints,
        policy: WindowPolicy,
    ) -> Self {
        let device = DeviceClass::default();
        Self {
            state: PaginationState::new(1, total, policy.window_for(device), show_first_last),
            breakpoints,
            policy,
            device,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Reclassify the viewport. Returns `true` if the window size changed.
    pub fn on_viewport_resize(&mut self, width: f64) -> bool {
        let device = self.breakpoints.classify(width);
        if device == self.device {
            return false;
        }

        log::debug!(
            "paginator viewport {} -> {} ({}px)",
            self.device.as_str(),
            device.as_str(),
            width
        );
        self.device = device;

        let window_size = self.policy.window_for(device);
        if window_size == self.state.window_size() {
            return false;
        }
        self.state.set_window_size(window_size);
        true
    }

    pub fn go_to(&mut self, page: usize) -> bool {
        let changed = self.state.go_to(page);
        if changed {
            log::debug!("paginator page -> {}/{}", self.state.current(), self.state.total());
        }
        changed
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.state.current().saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.state.current().saturating_sub(1))
    }

    pub fn set_total(&mut self, total: usize) {
        self.state.set_total(total);
    }

    pub fn range(&self) -> PageRange {
        self.state.range()
    }
}
