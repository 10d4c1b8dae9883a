//! WASM bindings for the site's UI state

mod flat_buffer;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use flat_buffer::{
    decode_marker, encode_marker, MarkerBuffer, ELLIPSIS, FLAG_HAS_NEXT, FLAG_HAS_PREV,
    FLAG_VISIBLE, HEADER_SIZE, MAGIC, SCHEMA_VERSION,
};

use crate::marquee::marquee_indices;
use crate::paging::{compute_range, PageMarker, PaginationState, Paginator, WindowPolicy};
use crate::ui::{NavBar, PreviewModal, Sidebar, TabKey, Tabs, UiEvent};
use crate::viewport::Breakpoints;
use log::LevelFilter;
use serde::Serialize;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    logger::install(logger::DEFAULT_LEVEL);
}

/// Change the console log level ("off", "error", "warn", "info", "debug", "trace")
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter = LevelFilter::from_str(level)
        .map_err(|_| JsError::new(&format!("unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}

/// Markers as a flat array: 0 = ellipsis, n = page n
#[wasm_bindgen(js_name = computeRange)]
pub fn compute_range_flat(
    current: u32,
    total: u32,
    window_size: u32,
    show_first_last: bool,
) -> Vec<u32> {
    compute_range(
        current as usize,
        total as usize,
        window_size as usize,
        show_first_last,
    )
    .iter()
    .map(encode_marker)
    .collect()
}

/// Markers as JSON: `[{"kind":"page","page":1,"current":true}, {"kind":"ellipsis"}, ...]`
#[wasm_bindgen(js_name = computeRangeJson)]
pub fn compute_range_json(
    current: u32,
    total: u32,
    window_size: u32,
    show_first_last: bool,
) -> Result<String, JsError> {
    let state = PaginationState::new(
        current as usize,
        total as usize,
        window_size as usize,
        show_first_last,
    );
    Ok(markers_json(&state)?)
}

/// Doubled, shuffled index order for the marquee strip.
///
/// Without a seed a fresh one is drawn, so every page load looks different.
#[wasm_bindgen(js_name = marqueeIndices)]
pub fn marquee_indices_js(len: u32, seed: Option<f64>) -> Vec<u32> {
    let seed = seed.map(|s| s as u64).unwrap_or_else(random_seed);
    marquee_indices(len as usize, seed)
        .into_iter()
        .map(|i| i as u32)
        .collect()
}

/// Get a seed from the host
fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

fn parse_event(name: &str) -> Option<UiEvent> {
    let event = UiEvent::from_name(name);
    if event.is_none() {
        log::warn!("ignoring unknown ui event {:?}", name);
    }
    event
}

/// Serializable page marker for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerData {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,
}

impl MarkerData {
    fn new(marker: &PageMarker, current: usize) -> Self {
        match marker {
            PageMarker::Page(n) => Self {
                kind: "page",
                page: Some(*n),
                current: *n == current,
            },
            PageMarker::Ellipsis => Self {
                kind: "ellipsis",
                page: None,
                current: false,
            },
        }
    }
}

fn markers_json(state: &PaginationState) -> serde_json::Result<String> {
    let markers: Vec<MarkerData> = state
        .range()
        .iter()
        .map(|m| MarkerData::new(m, state.current()))
        .collect();
    serde_json::to_string(&markers)
}

/// WASM-exposed paginator
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
    buffer: MarkerBuffer,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator with the default breakpoints and window policy
    #[wasm_bindgen(constructor)]
    pub fn new(total: u32, show_first_last: bool) -> Self {
        Self {
            paginator: Paginator::new(total as usize, show_first_last),
            buffer: MarkerBuffer::new(),
        }
    }

    /// Create paginator with custom breakpoints and window sizes
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        total: u32,
        show_first_last: bool,
        mobile_max: f64,
        tablet_max: f64,
        mobile_window: u32,
        tablet_window: u32,
        desktop_window: u32,
    ) -> Self {
        let policy = WindowPolicy {
            mobile: mobile_window as usize,
            tablet: tablet_window as usize,
            desktop: desktop_window as usize,
        };
        Self {
            paginator: Paginator::with_config(
                total as usize,
                show_first_last,
                Breakpoints::new(mobile_max, tablet_max),
                policy,
            ),
            buffer: MarkerBuffer::new(),
        }
    }

    /// Returns true if the paginator must re-render
    #[wasm_bindgen(js_name = onViewportResize)]
    pub fn on_viewport_resize(&mut self, width: f64) -> bool {
        self.paginator.on_viewport_resize(width)
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&mut self, page: u32) -> bool {
        self.paginator.go_to(page as usize)
    }

    pub fn next(&mut self) -> bool {
        self.paginator.next()
    }

    pub fn prev(&mut self) -> bool {
        self.paginator.prev()
    }

    #[wasm_bindgen(js_name = setTotal)]
    pub fn set_total(&mut self, total: u32) {
        self.paginator.set_total(total as usize);
    }

    #[wasm_bindgen(getter)]
    pub fn current(&self) -> u32 {
        self.paginator.state().current() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u32 {
        self.paginator.state().total() as u32
    }

    #[wasm_bindgen(getter, js_name = windowSize)]
    pub fn window_size(&self) -> u32 {
        self.paginator.state().window_size() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn device(&self) -> String {
        self.paginator.device().as_str().to_string()
    }

    #[wasm_bindgen(js_name = hasPrev)]
    pub fn has_prev(&self) -> bool {
        self.paginator.state().has_prev()
    }

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.paginator.state().has_next()
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.paginator.state().is_visible()
    }

    /// Current markers as JSON
    #[wasm_bindgen(js_name = rangeJson)]
    pub fn range_json(&self) -> Result<String, JsError> {
        Ok(markers_json(self.paginator.state())?)
    }

    /// Re-encode the current frame into the flat buffer
    #[wasm_bindgen(js_name = updateBuffer)]
    pub fn update_buffer(&mut self) {
        let range = self.paginator.range();
        self.buffer.write(self.paginator.state(), &range);
    }

    #[wasm_bindgen(js_name = bufferPtr)]
    pub fn buffer_ptr(&self) -> u32 {
        self.buffer.ptr()
    }

    #[wasm_bindgen(js_name = bufferLen)]
    pub fn buffer_len(&self) -> u32 {
        self.buffer.len()
    }
}

/// WASM-exposed tab strip
#[wasm_bindgen]
pub struct WasmTabs {
    tabs: Tabs,
}

#[wasm_bindgen]
impl WasmTabs {
    /// Create from an array of tab keys (non-string entries are skipped)
    #[wasm_bindgen(constructor)]
    pub fn new(keys: &js_sys::Array) -> Result<WasmTabs, JsError> {
        let keys: Vec<String> = keys.iter().filter_map(|v| v.as_string()).collect();
        Ok(Self {
            tabs: Tabs::new(keys)?,
        })
    }

    #[wasm_bindgen(getter, js_name = activeKey)]
    pub fn active_key(&self) -> String {
        self.tabs.active_key().to_string()
    }

    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> u32 {
        self.tabs.active_index() as u32
    }

    pub fn select(&mut self, key: &str) -> Result<bool, JsError> {
        Ok(self.tabs.select(key)?)
    }

    #[wasm_bindgen(js_name = selectIndex)]
    pub fn select_index(&mut self, index: u32) -> bool {
        self.tabs.select_index(index as usize)
    }

    /// Handle a `keydown` key name; unrelated keys are ignored
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        TabKey::from_key(key)
            .map(|k| self.tabs.handle_key(k))
            .unwrap_or(false)
    }

    pub fn keys(&self) -> js_sys::Array {
        self.tabs
            .keys()
            .iter()
            .map(|k| JsValue::from_str(k))
            .collect()
    }
}

/// WASM-exposed dashboard sidebar
#[wasm_bindgen]
pub struct WasmSidebar {
    sidebar: Sidebar,
}

#[wasm_bindgen]
impl WasmSidebar {
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f64) -> Self {
        Self {
            sidebar: Sidebar::new(viewport_width),
        }
    }

    #[wasm_bindgen(js_name = withBreakpoints)]
    pub fn with_breakpoints(viewport_width: f64, mobile_max: f64, tablet_max: f64) -> Self {
        Self {
            sidebar: Sidebar::with_breakpoints(
                Breakpoints::new(mobile_max, tablet_max),
                viewport_width,
            ),
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.sidebar.toggle()
    }

    #[wasm_bindgen(js_name = onViewportResize)]
    pub fn on_viewport_resize(&mut self, width: f64) -> bool {
        self.sidebar.on_viewport_resize(width)
    }

    /// Handle "escape", "click-outside", "navigate", ...
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, name: &str) -> bool {
        parse_event(name)
            .map(|e| self.sidebar.handle(e))
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = isExpanded)]
    pub fn is_expanded(&self) -> bool {
        self.sidebar.is_expanded()
    }

    #[wasm_bindgen(js_name = isCollapsed)]
    pub fn is_collapsed(&self) -> bool {
        self.sidebar.is_collapsed()
    }

    #[wasm_bindgen(js_name = isMobile)]
    pub fn is_mobile(&self) -> bool {
        self.sidebar.is_mobile()
    }

    #[wasm_bindgen(js_name = isMobileOpen)]
    pub fn is_mobile_open(&self) -> bool {
        self.sidebar.is_mobile_open()
    }
}

/// WASM-exposed promotional preview modal.
///
/// Transitions return the history action the caller must perform:
/// "push", "back" or "none".
#[wasm_bindgen]
pub struct WasmPreviewModal {
    modal: PreviewModal,
}

#[wasm_bindgen]
impl WasmPreviewModal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            modal: PreviewModal::new(),
        }
    }

    pub fn open(&mut self) -> String {
        self.modal.open().as_str().to_string()
    }

    pub fn close(&mut self) -> String {
        self.modal.close().as_str().to_string()
    }

    /// Call from the `popstate` listener; true if the modal closed
    #[wasm_bindgen(js_name = onPopState)]
    pub fn on_pop_state(&mut self) -> bool {
        self.modal.on_pop_state()
    }

    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, name: &str) -> String {
        parse_event(name)
            .map(|e| self.modal.handle(e))
            .unwrap_or(crate::ui::HistoryAction::None)
            .as_str()
            .to_string()
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }
}

impl Default for WasmPreviewModal {
    fn default() -> Self {
        Self::new()
    }
}

/// WASM-exposed navigation bar
#[wasm_bindgen]
pub struct WasmNavBar {
    nav: NavBar,
}

#[wasm_bindgen]
impl WasmNavBar {
    /// Create from the JSON navigation config; throws on invalid config
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmNavBar, JsError> {
        Ok(Self {
            nav: NavBar::from_json(config_json)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.nav.config().brand.clone()
    }

    /// Visible items in display order as JSON
    #[wasm_bindgen(js_name = visibleItemsJson)]
    pub fn visible_items_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.nav.config().visible_items())?)
    }

    #[wasm_bindgen(js_name = activeHref)]
    pub fn active_href(&self, pathname: &str) -> Option<String> {
        self.nav.config().active_href(pathname).map(str::to_string)
    }

    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, name: &str) -> bool {
        parse_event(name)
            .map(|e| self.nav.handle(e))
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = isMenuOpen)]
    pub fn is_menu_open(&self) -> bool {
        self.nav.is_menu_open()
    }
}
