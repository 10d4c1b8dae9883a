//! Local UI state for the site chrome: menus, tabs, sidebar, preview modal
//!
//! Each primitive consumes events the host has already translated from the
//! DOM and reports whether the view must re-render.

mod disclosure;
mod modal;
mod nav;
mod sidebar;
mod tabs;

pub use disclosure::Disclosure;
pub use modal::{HistoryAction, PreviewModal};
pub use nav::{NavBar, NavConfig, NavItem};
pub use sidebar::Sidebar;
pub use tabs::{TabKey, Tabs};

/// DOM-level events relevant to open/closed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Toggle,
    Open,
    Close,
    /// `keydown` with `key == "Escape"`
    EscapeKey,
    /// Pointer down outside the component's root element
    ClickOutside,
    /// A link inside the component was followed
    Navigate,
}

impl UiEvent {
    /// Parse the event names used by the JS bindings
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "toggle" => Some(UiEvent::Toggle),
            "open" => Some(UiEvent::Open),
            "close" => Some(UiEvent::Close),
            "escape" | "Escape" => Some(UiEvent::EscapeKey),
            "click-outside" => Some(UiEvent::ClickOutside),
            "navigate" => Some(UiEvent::Navigate),
            _ => None,
        }
    }

    /// Events that dismiss an open overlay
    pub fn is_dismissal(&self) -> bool {
        matches!(
            self,
            UiEvent::Close | UiEvent::EscapeKey | UiEvent::ClickOutside | UiEvent::Navigate
        )
    }
}
