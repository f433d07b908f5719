//! Key binding registry for deck navigation.
//!
//! Bindings are registered with [`KeyBindings::on_key`], which hands back a
//! [`KeyListener`]. The binding lives exactly as long as the listener: dropping
//! it removes the binding from the registry.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use egui::Key;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
}

struct Binding {
    id: usize,
    key: Key,
    action: NavAction,
}

#[derive(Default)]
struct Registry {
    bindings: Vec<Binding>,
    next_id: usize,
}

/// Shared handle to the binding registry.
#[derive(Clone, Default)]
pub struct KeyBindings {
    registry: Rc<RefCell<Registry>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&self, key: Key, action: NavAction) -> KeyListener {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.bindings.push(Binding { id, key, action });
        debug!("Key listener {} attached: {:?} -> {:?}", id, key, action);

        KeyListener {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Action bound to `key`, if any. The first registered binding wins.
    pub fn dispatch(&self, key: Key) -> Option<NavAction> {
        self.registry
            .borrow()
            .bindings
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.action)
    }

    #[cfg(test)]
    pub fn bound_keys(&self) -> Vec<Key> {
        let registry = self.registry.borrow();
        let mut keys: Vec<Key> = Vec::with_capacity(registry.bindings.len());
        for binding in &registry.bindings {
            if !keys.contains(&binding.key) {
                keys.push(binding.key);
            }
        }
        keys
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.registry.borrow().bindings.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration guard. Dropping it detaches the binding.
#[must_use = "the binding is removed as soon as the listener is dropped"]
pub struct KeyListener {
    id: usize,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .bindings
                .retain(|binding| binding.id != self.id);
            debug!("Key listener {} detached", self.id);
        }
    }
}

/// Right arrow -> next, left arrow -> prev. Held while slide mode is active.
pub struct ArrowNavigation {
    _next: KeyListener,
    _prev: KeyListener,
}

impl ArrowNavigation {
    pub fn attach(bindings: &KeyBindings) -> Self {
        Self {
            _next: bindings.on_key(Key::ArrowRight, NavAction::Next),
            _prev: bindings.on_key(Key::ArrowLeft, NavAction::Prev),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_listener_removes_binding() {
        let bindings = KeyBindings::new();
        let listener = bindings.on_key(Key::ArrowRight, NavAction::Next);
        assert_eq!(bindings.dispatch(Key::ArrowRight), Some(NavAction::Next));

        drop(listener);
        assert!(bindings.is_empty());
        assert_eq!(bindings.dispatch(Key::ArrowRight), None);
    }

    #[test]
    fn arrow_navigation_binds_both_arrows() {
        let bindings = KeyBindings::new();
        let nav = ArrowNavigation::attach(&bindings);

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.dispatch(Key::ArrowRight), Some(NavAction::Next));
        assert_eq!(bindings.dispatch(Key::ArrowLeft), Some(NavAction::Prev));
        assert_eq!(bindings.dispatch(Key::ArrowUp), None);
        assert_eq!(bindings.bound_keys(), vec![Key::ArrowRight, Key::ArrowLeft]);

        drop(nav);
        assert!(bindings.is_empty());
    }

    #[test]
    fn listener_outliving_registry_drops_quietly() {
        let bindings = KeyBindings::new();
        let listener = bindings.on_key(Key::ArrowLeft, NavAction::Prev);
        drop(bindings);
        drop(listener);
    }

    #[test]
    fn only_the_dropped_listener_is_removed() {
        let bindings = KeyBindings::new();
        let first = bindings.on_key(Key::ArrowRight, NavAction::Next);
        let _second = bindings.on_key(Key::ArrowLeft, NavAction::Prev);

        drop(first);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.dispatch(Key::ArrowLeft), Some(NavAction::Prev));
    }
}
