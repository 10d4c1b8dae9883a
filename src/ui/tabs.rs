//! Tab strip selection state

use crate::error::{Result, UiError};
use rustc_hash::FxHashMap;

/// Keyboard keys handled by the tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl TabKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(TabKey::ArrowLeft),
            "ArrowRight" => Some(TabKey::ArrowRight),
            "Home" => Some(TabKey::Home),
            "End" => Some(TabKey::End),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tabs {
    keys: Vec<String>,
    index: FxHashMap<String, usize>,
    active: usize,
}

impl Tabs {
    /// Create a tab strip; the first tab starts active
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(UiError::EmptyTabs);
        }

        let mut index = FxHashMap::default();
        for (i, key) in keys.iter().enumerate() {
            if index.insert(key.clone(), i).is_some() {
                return Err(UiError::DuplicateTab(key.clone()));
            }
        }

        Ok(Self {
            keys,
            index,
            active: 0,
        })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_key(&self) -> &str {
        &self.keys[self.active]
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active_key() == key
    }

    /// Select a tab by key. Returns whether the active tab changed.
    pub fn select(&mut self, key: &str) -> Result<bool> {
        let i = *self
            .index
            .get(key)
            .ok_or_else(|| UiError::UnknownTab(key.to_string()))?;
        Ok(self.select_index(i))
    }

    /// Select by position, clamped to the last tab
    pub fn select_index(&mut self, i: usize) -> bool {
        let i = i.min(self.keys.len() - 1);
        let changed = i != self.active;
        self.active = i;
        changed
    }

    /// Activate the following tab, wrapping to the first
    pub fn next(&mut self) -> bool {
        self.select_index((self.active + 1) % self.keys.len())
    }

    /// Activate the preceding tab, wrapping to the last
    pub fn prev(&mut self) -> bool {
        let len = self.keys.len();
        self.select_index((self.active + len - 1) % len)
    }

    pub fn handle_key(&mut self, key: TabKey) -> bool {
        match key {
            TabKey::ArrowRight => self.next(),
            TabKey::ArrowLeft => self.prev(),
            TabKey::Home => self.select_index(0),
            TabKey::End => self.select_index(self.keys.len() - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services() -> Tabs {
        Tabs::new(["manicure", "pedicure", "extensions"]).unwrap()
    }

    #[test]
    fn test_first_tab_active() {
        let tabs = services();
        assert_eq!(tabs.active_key(), "manicure");
        assert_eq!(tabs.len(), 3);
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!(matches!(Tabs::new(Vec::<String>::new()), Err(UiError::EmptyTabs)));
        assert!(matches!(
            Tabs::new(["a", "b", "a"]),
            Err(UiError::DuplicateTab(k)) if k == "a"
        ));
    }

    #[test]
    fn test_select_by_key() {
        let mut tabs = services();
        assert!(tabs.select("extensions").unwrap());
        assert!(!tabs.select("extensions").unwrap());
        assert_eq!(tabs.active_index(), 2);
        assert!(matches!(tabs.select("waxing"), Err(UiError::UnknownTab(_))));
        assert!(tabs.is_active("extensions"));
    }

    #[test]
    fn test_wraparound() {
        let mut tabs = services();
        assert!(tabs.prev());
        assert_eq!(tabs.active_key(), "extensions");
        assert!(tabs.next());
        assert_eq!(tabs.active_key(), "manicure");
    }

    #[test]
    fn test_keyboard() {
        let mut tabs = services();
        assert!(tabs.handle_key(TabKey::End));
        assert_eq!(tabs.active_index(), 2);
        assert!(tabs.handle_key(TabKey::Home));
        assert_eq!(tabs.active_index(), 0);
        assert!(tabs.handle_key(TabKey::ArrowRight));
        assert_eq!(tabs.active_key(), "pedicure");
        assert_eq!(TabKey::from_key("Tab"), None);
    }

    #[test]
    fn test_single_tab_never_changes() {
        let mut tabs = Tabs::new(["only"]).unwrap();
        assert!(!tabs.next());
        assert!(!tabs.prev());
        assert!(!tabs.select_index(5));
    }
}
