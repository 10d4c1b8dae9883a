//! Promotional preview modal with browser-history dismissal
//!
//! Opening the modal pushes a history entry so the browser back button
//! closes it instead of leaving the page. Closing it any other way pops
//! that entry again; the resulting `popstate` must not be treated as a
//! second back press.

use crate::ui::UiEvent;

/// What the host must do with `window.history` after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    None,
    /// `history.pushState(...)`
    Push,
    /// `history.back()`
    Back,
}

impl HistoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::None => "none",
            HistoryAction::Push => "push",
            HistoryAction::Back => "back",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PreviewModal {
    open: bool,
    /// The open state owns the top history entry
    owns_entry: bool,
    /// A `history.back()` we requested has not produced its `popstate` yet
    pending_pop: bool,
}

impl PreviewModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> HistoryAction {
        if self.open {
            return HistoryAction::None;
        }
        // A pending pop stays pending: its popstate is still swallowed
        self.open = true;
        self.owns_entry = true;
        log::debug!("preview modal opened, pushing history entry");
        HistoryAction::Push
    }

    /// Close from the UI (button, escape, backdrop)
    pub fn close(&mut self) -> HistoryAction {
        if !self.open {
            return HistoryAction::None;
        }
        self.open = false;
        if self.owns_entry {
            self.owns_entry = false;
            self.pending_pop = true;
            log::debug!("preview modal closed, popping history entry");
            HistoryAction::Back
        } else {
            HistoryAction::None
        }
    }

    /// Handle a `popstate` event. Returns whether the modal closed.
    pub fn on_pop_state(&mut self) -> bool {
        if self.pending_pop {
            self.pending_pop = false;
            return false;
        }
        if !self.open {
            return false;
        }
        log::debug!("preview modal closed by browser back");
        self.open = false;
        self.owns_entry = false;
        true
    }

    pub fn handle(&mut self, event: UiEvent) -> HistoryAction {
        match event {
            UiEvent::Open => self.open(),
            UiEvent::Toggle if self.open => self.close(),
            UiEvent::Toggle => self.open(),
            // Following a link from the preview leaves the entry in place
            UiEvent::Navigate => {
                self.open = false;
                self.owns_entry = false;
                HistoryAction::None
            }
            UiEvent::Close | UiEvent::EscapeKey | UiEvent::ClickOutside => self.close(),
        }
    }
}
