//! Collapsible sidebar for the admin dashboard shell
//!
//! On desktop and tablet the sidebar is docked and can be collapsed to an
//! icon rail. On mobile it is an overlay drawer that is either open or
//! hidden; the docked `collapsed` preference is left alone while on mobile
//! so it is restored when the viewport widens again.

use crate::ui::{Disclosure, UiEvent};
use crate::viewport::{Breakpoints, DeviceClass};

#[derive(Debug, Clone)]
pub struct Sidebar {
    breakpoints: Breakpoints,
    device: DeviceClass,
    collapsed: bool,
    overlay: Disclosure,
}

impl Sidebar {
    pub fn new(viewport_width: f64) -> Self {
        Self::with_breakpoints(Breakpoints::default(), viewport_width)
    }

    pub fn with_breakpoints(breakpoints: Breakpoints, viewport_width: f64) -> Self {
        Self {
            breakpoints,
            device: breakpoints.classify(viewport_width),
            collapsed: false,
            overlay: Disclosure::new(),
        }
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_mobile_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Whether the full sidebar (labels and all) should be rendered
    pub fn is_expanded(&self) -> bool {
        if self.is_mobile() {
            self.overlay.is_open()
        } else {
            !self.collapsed
        }
    }

    /// The hamburger / collapse button
    pub fn toggle(&mut self) -> bool {
        if self.is_mobile() {
            self.overlay.toggle()
        } else {
            self.collapsed = !self.collapsed;
            true
        }
    }

    /// Returns whether anything the view renders changed
    pub fn on_viewport_resize(&mut self, width: f64) -> bool {
        let device = self.breakpoints.classify(width);
        if device == self.device {
            return false;
        }

        log::debug!(
            "sidebar viewport {} -> {} ({}px)",
            self.device.as_str(),
            device.as_str(),
            width
        );
        let was_expanded = self.is_expanded();
        let was_mobile = self.is_mobile();
        self.device = device;
        let overlay_closed = self.overlay.close();

        overlay_closed || was_mobile != self.is_mobile() || was_expanded != self.is_expanded()
    }

    /// Dismissals only apply to the mobile overlay
    pub fn handle(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Toggle => self.toggle(),
            _ if self.is_mobile() => self.overlay.handle(event),
            _ => false,
        }
    }
}
