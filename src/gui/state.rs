use egui::Key;
use log::{debug, info};

use crate::gui::keyboard::{ArrowNavigation, KeyBindings, NavAction};
use crate::models::view::{SlideId, ViewMode, LAST_SLIDE, SLIDE_CATALOG, SLIDE_COUNT};

/// View mode and slide position for the deck.
///
/// Arrow-key bindings are attached while the mode is [`ViewMode::Slides`] and
/// detached when the mode changes away or the state is dropped.
pub struct DeckState {
    mode: ViewMode,
    current_slide_index: usize,
    bindings: KeyBindings,
    arrow_nav: Option<ArrowNavigation>,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new(ViewMode::Scroll, 0)
    }
}

impl DeckState {
    pub fn new(mode: ViewMode, start_index: usize) -> Self {
        let mut state = Self {
            mode,
            current_slide_index: start_index.min(LAST_SLIDE),
            bindings: KeyBindings::new(),
            arrow_nav: None,
        };
        state.sync_key_listeners();
        state
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn current_slide_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn current_slide(&self) -> SlideId {
        SlideId::at(self.current_slide_index)
    }

    pub fn total_slide_count(&self) -> usize {
        SLIDE_COUNT
    }

    /// Switches the layout. The slide index is kept as-is.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode != mode {
            info!("View mode changed: {} -> {}", self.mode, mode);
            self.mode = mode;
        }
        self.sync_key_listeners();
    }

    /// Returns true if the index moved.
    pub fn next(&mut self) -> bool {
        if self.mode != ViewMode::Slides || self.current_slide_index >= LAST_SLIDE {
            return false;
        }
        self.current_slide_index += 1;
        debug!("Slide changed to {}", self.current_slide_index);
        true
    }

    /// Returns true if the index moved.
    pub fn prev(&mut self) -> bool {
        if self.mode != ViewMode::Slides || self.current_slide_index == 0 {
            return false;
        }
        self.current_slide_index -= 1;
        debug!("Slide changed to {}", self.current_slide_index);
        true
    }

    /// Runs the action bound to `key`. Unbound keys do nothing.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match self.bindings.dispatch(key) {
            Some(NavAction::Next) => self.next(),
            Some(NavAction::Prev) => self.prev(),
            None => false,
        }
    }

    #[cfg(test)]
    pub fn bound_keys(&self) -> Vec<Key> {
        self.bindings.bound_keys()
    }

    #[cfg(test)]
    pub fn key_bindings(&self) -> KeyBindings {
        self.bindings.clone()
    }

    pub fn can_go_next(&self) -> bool {
        self.current_slide_index < LAST_SLIDE
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_slide_index > 0
    }

    /// Blocks that should be on screen for the current mode and index.
    pub fn mounted_slides(&self) -> &'static [SlideId] {
        match self.mode {
            ViewMode::Scroll => &SLIDE_CATALOG,
            ViewMode::Slides => std::slice::from_ref(&SLIDE_CATALOG[self.current_slide_index]),
        }
    }

    fn sync_key_listeners(&mut self) {
        match self.mode {
            ViewMode::Slides => {
                if self.arrow_nav.is_none() {
                    self.arrow_nav = Some(ArrowNavigation::attach(&self.bindings));
                }
            }
            ViewMode::Scroll => {
                self.arrow_nav = None;
            }
        }
    }
}
