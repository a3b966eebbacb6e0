#![forbid(unsafe_code)]

//! Keyed ownership of active focus traps.
//!
//! Independent call sites — login modal, signup modal, nav drawer, cart
//! sidebar, search overlay — each activate and deactivate traps by string
//! key without seeing each other. The registry guarantees at most one trap
//! per key (activating over an existing key deactivates and evicts the old
//! trap first) and routes key events to the most recently activated trap.
//!
//! The registry is an explicit value constructed by the caller, one per
//! application root — not a process-wide singleton — so its lifecycle is
//! visible and testable in isolation.
//!
//! # Invariants
//!
//! 1. At most one trap per key; eviction restores the old trap's focus
//!    before the new trap records its own restore target.
//! 2. Traps under distinct keys stack: key events go to the most recently
//!    activated trap, and each trap restores its own saved focus on
//!    deactivation, so closing an inner modal lands back in the outer one.
//! 3. Only traps that actually engaged are stored; a refused activation
//!    (no container, nothing focusable) leaves the registry unchanged.

use ahash::AHashMap;

use tabtrap_core::event::KeyEvent;
use tabtrap_core::surface::FocusSurface;

use crate::trap::{Activation, FocusTrap, KeyDisposition, TrapOptions};

/// Owns named active traps; at most one per string key.
pub struct TrapRegistry<S: FocusSurface> {
    traps: AHashMap<String, FocusTrap<S>>,
    /// Keys in activation order; the last entry is the routing target.
    order: Vec<String>,
}

impl<S: FocusSurface> Default for TrapRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FocusSurface> core::fmt::Debug for TrapRegistry<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrapRegistry")
            .field("order", &self.order)
            .finish()
    }
}

impl<S: FocusSurface> TrapRegistry<S> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            traps: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Activate a trap for `container` under `key`.
    ///
    /// An existing trap under the same key is deactivated (restoring its
    /// saved focus) and discarded first. `None` for `container` — typically
    /// a failed element lookup forwarded straight through — is reported and
    /// ignored. The trap is stored only when activation actually engages,
    /// so a refused activation can simply be retried later.
    pub fn activate(
        &mut self,
        surface: &mut S,
        container: Option<S::Node>,
        key: &str,
        options: TrapOptions,
    ) -> Activation {
        let Some(container) = container else {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, "focus trap activation skipped: no container");
            return Activation::NoContainer;
        };

        self.deactivate(surface, key);

        let mut trap = FocusTrap::with_options(container, options);
        let outcome = trap.activate(surface);
        if outcome == Activation::Engaged {
            self.traps.insert(key.to_owned(), trap);
            self.order.push(key.to_owned());
        }
        outcome
    }

    /// Deactivate and remove the trap under `key`, if any.
    pub fn deactivate(&mut self, surface: &mut S, key: &str) {
        if let Some(mut trap) = self.traps.remove(key) {
            trap.deactivate(surface);
            self.order.retain(|k| k != key);
        }
    }

    /// Deactivate every trap, most recently activated first.
    pub fn deactivate_all(&mut self, surface: &mut S) {
        while let Some(key) = self.order.pop() {
            if let Some(mut trap) = self.traps.remove(&key) {
                trap.deactivate(surface);
            }
        }
    }

    /// Recompute the focusable sequence of the trap under `key`, if any.
    pub fn refresh(&mut self, surface: &S, key: &str) {
        if let Some(trap) = self.traps.get_mut(key) {
            trap.refresh(surface);
        }
    }

    /// Route a key event to the most recently activated trap.
    pub fn handle_key(&mut self, surface: &mut S, event: &KeyEvent) -> KeyDisposition {
        let Some(key) = self.order.last() else {
            return KeyDisposition::Pass;
        };
        match self.traps.get_mut(key.as_str()) {
            Some(trap) => trap.handle_key(surface, event),
            None => KeyDisposition::Pass,
        }
    }

    /// Forward a focus-in notification to the most recently activated trap.
    ///
    /// Returns `true` when focus was recaptured into that trap's container.
    pub fn contain_focus(&mut self, surface: &mut S, target: &S::Node) -> bool {
        let Some(key) = self.order.last() else {
            return false;
        };
        match self.traps.get_mut(key.as_str()) {
            Some(trap) => trap.contain_focus(surface, target),
            None => false,
        }
    }

    /// Whether an engaged trap exists under `key`.
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.traps.get(key).is_some_and(FocusTrap::is_active)
    }

    /// The trap stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FocusTrap<S>> {
        self.traps.get(key)
    }

    /// Number of stored traps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traps.len()
    }

    /// Whether no trap is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }
}
