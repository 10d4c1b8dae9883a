//! Configurable navigation bar
//!
//! The link list comes from the site's business configuration as JSON:
//!
//! ```json
//! {
//!   "brand": "Polished",
//!   "items": [
//!     { "label": "Home", "href": "/" },
//!     { "label": "Services", "href": "/services", "order": 1 },
//!     { "label": "Admin", "href": "/admin", "visible": false }
//!   ]
//! }
//! ```

use crate::error::{Result, UiError};
use crate::ui::{Disclosure, UiEvent};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub order: i32,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavConfig {
    /// Parse and validate a navigation config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(json).map_err(|e| {
            log::warn!("rejected navigation config: {}", e);
            UiError::from(e)
        })?;
        config.validate()?;
        log::debug!("loaded navigation config with {} items", config.items.len());
        Ok(config)
    }

    /// Every item needs a non-empty, unique `href`
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for item in &self.items {
            let href = item.href.trim();
            if href.is_empty() {
                log::warn!("navigation item {:?} has no href", item.label);
                return Err(UiError::InvalidNavItem(format!(
                    "item {:?} has an empty href",
                    item.label
                )));
            }
            // `/gallery` and `/gallery/` route to the same page
            let key = match href.trim_end_matches('/') {
                "" => "/",
                path => path,
            };
            if !seen.insert(key) {
                log::warn!("duplicate navigation href {}", href);
                return Err(UiError::InvalidNavItem(format!("duplicate href {}", href)));
            }
        }
        Ok(())
    }

    /// Visible items in display order (stable for equal `order`)
    pub fn visible_items(&self) -> Vec<&NavItem> {
        let mut items: Vec<&NavItem> = self.items.iter().filter(|i| i.visible).collect();
        items.sort_by_key(|i| i.order);
        items
    }

    /// The visible item the current path belongs to.
    ///
    /// Longest `href` prefix wins, matched on path-segment boundaries; the
    /// root `/` only matches itself.
    pub fn active_href(&self, pathname: &str) -> Option<&str> {
        self.items
            .iter()
            .filter(|i| i.visible && path_matches(&i.href, pathname))
            .max_by_key(|i| i.href.len())
            .map(|i| i.href.as_str())
    }
}

fn path_matches(href: &str, pathname: &str) -> bool {
    let href = href.trim_end_matches('/');
    let pathname = pathname.trim_end_matches('/');
    if href.is_empty() {
        return pathname.is_empty();
    }
    match pathname.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Navigation bar state: config plus the mobile menu
#[derive(Debug, Clone, Default)]
pub struct NavBar {
    config: NavConfig,
    menu: Disclosure,
}

impl NavBar {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            menu: Disclosure::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(NavConfig::from_json(json)?))
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn handle(&mut self, event: UiEvent) -> bool {
        self.menu.handle(event)
    }
}
