//! Salon UI: interactive state for the salon website, compiled to WASM
//!
//! This crate provides the logic behind the site's UI primitives:
//! - Paginator page ranges with anchors and ellipses, sized to the viewport
//! - Tab strips, dropdown menus and the collapsible dashboard sidebar
//! - The promotional preview modal with browser-history dismissal
//! - Shuffled, seamless marquee ordering
//!
//! The browser owns the DOM and event listeners; it forwards events here and
//! re-renders from the returned state.

pub mod error;
pub mod marquee;
pub mod paging;
pub mod ui;
pub mod viewport;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{WasmNavBar, WasmPaginator, WasmPreviewModal, WasmSidebar, WasmTabs};

// Re-export primary types
pub use error::UiError;
pub use marquee::{marquee_indices, marquee_order, marquee_sequence};
pub use paging::{
    compute_range, PageMarker, PageRange, PaginationState, Paginator, WindowPolicy,
    DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE,
};
pub use ui::{
    Disclosure, HistoryAction, NavBar, NavConfig, NavItem, PreviewModal, Sidebar, TabKey, Tabs,
    UiEvent,
};
pub use viewport::{Breakpoints, DeviceClass};

/// Render markers as the text a paginator shows, e.g. `1 … 8 9 10`
pub fn format_range(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(|m| match m {
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(&compute_range(10, 10, 5, true)), "1 … 7 8 9 10");
        assert_eq!(format_range(&compute_range(1, 1, 5, true)), "");
    }

    #[test]
    fn test_dashboard_flow() {
        // Admin dashboard on a phone: open the drawer, pick a tab, page through
        let mut sidebar = Sidebar::new(390.0);
        let mut tabs = Tabs::new(["appointments", "clients", "services"]).unwrap();
        let mut paginator = Paginator::new(12, true);
        paginator.on_viewport_resize(390.0);

        assert!(sidebar.toggle());
        assert!(sidebar.handle(UiEvent::Navigate));
        assert!(tabs.select("clients").unwrap());
        assert!(paginator.go_to(6));
        assert_eq!(format_range(&paginator.range()), "1 … 5 6 7 … 12");
    }
}
