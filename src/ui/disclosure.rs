//! Open/closed primitive for dropdowns and overlay menus

use crate::ui::UiEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns whether the state changed
    pub fn open(&mut self) -> bool {
        self.set(true)
    }

    pub fn close(&mut self) -> bool {
        self.set(false)
    }

    pub fn toggle(&mut self) -> bool {
        self.set(!self.open)
    }

    /// Apply an event. Returns whether the state changed.
    pub fn handle(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Toggle => self.toggle(),
            UiEvent::Open => self.open(),
            e if e.is_dismissal() => self.close(),
            _ => false,
        }
    }

    fn set(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut d = Disclosure::new();
        assert!(!d.is_open());
        assert!(d.handle(UiEvent::Toggle));
        assert!(d.is_open());
        assert!(d.handle(UiEvent::Toggle));
        assert!(!d.is_open());
    }

    #[test]
    fn test_dismissals_close() {
        for event in [UiEvent::EscapeKey, UiEvent::ClickOutside, UiEvent::Navigate, UiEvent::Close] {
            let mut d = Disclosure::new();
            d.open();
            assert!(d.handle(event), "{:?} should close", event);
            assert!(!d.is_open());
        }
    }

    #[test]
    fn test_dismissal_when_closed_is_noop() {
        let mut d = Disclosure::new();
        assert!(!d.handle(UiEvent::EscapeKey));
        assert!(!d.handle(UiEvent::ClickOutside));
    }

    #[test]
    fn test_open_twice() {
        let mut d = Disclosure::new();
        assert!(d.handle(UiEvent::Open));
        assert!(!d.handle(UiEvent::Open));
    }
}
