#![forbid(unsafe_code)]

//! The focus trap: cyclic Tab containment with focus restoration.
//!
//! A trap constrains keyboard navigation to a container's focusable
//! descendants. The algorithm is a closed cyclic traversal over an ordered
//! sequence with exactly two special-cased wrap transitions (tail→head on
//! Tab, head→tail on Shift+Tab); every interior move is left to the
//! platform's native Tab handling, so correctness depends only on knowing
//! the head and tail of the sequence.
//!
//! The focusable sequence is recomputed from a live query on `activate` and
//! `refresh` rather than maintained incrementally — containers here are
//! modal-sized (tens of nodes), and the simplicity is worth more than the
//! saved query.
//!
//! # Failure Modes
//!
//! - A container with no focusable descendant refuses activation: trapping
//!   focus where nothing can hold it would strand the keyboard user.
//! - A restore target detached during the trap's lifetime is skipped.
//! - A wrap target that went stale still consumes the key; focus is never
//!   handed back to the platform while the trap is active.

use tabtrap_core::event::{KeyCode, KeyEvent, KeyEventKind};
use tabtrap_core::surface::FocusSurface;

/// Callback invoked when Escape is pressed while a trap is active.
pub type EscapeCallback = Box<dyn FnMut(&KeyEvent)>;

/// Outcome of a trap (or registry) activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The trap engaged and focus moved into the container.
    Engaged,
    /// The trap was already active; nothing changed.
    AlreadyActive,
    /// No focusable descendant; the trap stayed inactive.
    NoFocusable,
    /// No container was supplied (registry-level outcome).
    NoContainer,
}

/// What the caller must do with the key event after the trap saw it.
///
/// The platform analog of `preventDefault`: on [`Consumed`] the native key
/// behavior must be suppressed; on [`Pass`] it proceeds untouched.
///
/// [`Consumed`]: KeyDisposition::Consumed
/// [`Pass`]: KeyDisposition::Pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Not handled; native key behavior proceeds.
    Pass,
    /// Handled; native key behavior must be suppressed.
    Consumed,
}

/// Configuration accepted at trap construction.
#[derive(Default)]
pub struct TrapOptions {
    pub(crate) on_escape: Option<EscapeCallback>,
}

impl TrapOptions {
    /// Empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke `callback` on every Escape press while the trap is active.
    ///
    /// The trap only reports the key; deciding to close (and deactivating)
    /// stays with the caller.
    #[must_use]
    pub fn on_escape(mut self, callback: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_escape = Some(Box::new(callback));
        self
    }
}

impl core::fmt::Debug for TrapOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrapOptions")
            .field("on_escape", &self.on_escape.is_some())
            .finish()
    }
}

/// Constrains keyboard focus to a container's subtree while active.
///
/// The container node is referenced, not owned; the trap tolerates its
/// contents (and its saved restore target) disappearing at any time.
pub struct FocusTrap<S: FocusSurface> {
    container: S::Node,
    focusable: Vec<S::Node>,
    previous_active: Option<S::Node>,
    active: bool,
    on_escape: Option<EscapeCallback>,
}

impl<S: FocusSurface> core::fmt::Debug for FocusTrap<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusTrap")
            .field("container", &self.container)
            .field("focusable", &self.focusable)
            .field("previous_active", &self.previous_active)
            .field("active", &self.active)
            .field("on_escape", &self.on_escape.is_some())
            .finish()
    }
}

impl<S: FocusSurface> FocusTrap<S> {
    /// Create an inactive trap for `container`.
    #[must_use]
    pub fn new(container: S::Node) -> Self {
        Self::with_options(container, TrapOptions::new())
    }

    /// Create an inactive trap for `container` with options.
    #[must_use]
    pub fn with_options(container: S::Node, options: TrapOptions) -> Self {
        Self {
            container,
            focusable: Vec::new(),
            previous_active: None,
            active: false,
            on_escape: options.on_escape,
        }
    }

    /// Engage the trap.
    ///
    /// Records the currently focused node as the restore target, recomputes
    /// the focusable sequence, and moves focus to its head. Refuses (and
    /// stays inactive) when the container has no focusable descendant.
    /// Calling on an already-active trap is a no-op.
    pub fn activate(&mut self, surface: &mut S) -> Activation {
        if self.active {
            return Activation::AlreadyActive;
        }
        self.previous_active = surface.focused();
        self.update_focusable(surface);
        if self.focusable.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                container = ?self.container,
                "focus trap refused: no focusable descendants"
            );
            return Activation::NoFocusable;
        }
        self.active = true;
        if let Some(first) = self.focusable.first() {
            let _ = surface.focus(first);
        }
        Activation::Engaged
    }

    /// Release the trap and restore focus.
    ///
    /// Focus returns to the node focused just before activation, unless it
    /// can no longer receive focus (detached while the trap was up), in
    /// which case restoration is silently skipped. No-op when inactive.
    pub fn deactivate(&mut self, surface: &mut S) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(previous) = self.previous_active.take() {
            if surface.can_receive_focus(&previous) {
                let _ = surface.focus(&previous);
            } else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    restore = ?previous,
                    "restore target gone, leaving focus where it is"
                );
            }
        }
    }

    /// Recompute the focusable sequence without touching activation state
    /// or current focus.
    ///
    /// Call after the container's contents change while the trap is active
    /// (search results populating, list items rendering) so the wrap
    /// transitions reflect the new head and tail.
    pub fn refresh(&mut self, surface: &S) {
        self.update_focusable(surface);
    }

    /// Route a key event through the trap.
    ///
    /// Only meaningful while active; an inactive trap passes everything.
    /// Escape is reported to the `on_escape` callback and passed through —
    /// the trap never closes anything itself. Tab presses at the sequence
    /// edges are consumed and wrapped; interior Tab presses pass through for
    /// native movement.
    pub fn handle_key(&mut self, surface: &mut S, event: &KeyEvent) -> KeyDisposition {
        if !self.active || event.kind == KeyEventKind::Release {
            return KeyDisposition::Pass;
        }

        if event.code == KeyCode::Escape {
            if let Some(callback) = self.on_escape.as_mut() {
                callback(event);
            }
            return KeyDisposition::Pass;
        }

        let backward = match event.code {
            KeyCode::Tab => event.shift(),
            KeyCode::BackTab => true,
            _ => return KeyDisposition::Pass,
        };

        // Defensive: activation refuses an empty container, but the
        // container may have emptied since the last refresh.
        if self.focusable.is_empty() {
            return KeyDisposition::Pass;
        }

        // A single tab stop: focus can't leave it, and no native movement
        // may happen inside the container either.
        let [first, .., last] = self.focusable.as_slice() else {
            return KeyDisposition::Consumed;
        };

        let current = surface.focused();
        if backward && current.as_ref() == Some(first) {
            let _ = surface.focus(last);
            return KeyDisposition::Consumed;
        }
        if !backward && current.as_ref() == Some(last) {
            let _ = surface.focus(first);
            return KeyDisposition::Consumed;
        }

        KeyDisposition::Pass
    }

    /// Pull focus back inside after it escaped the container.
    ///
    /// `target` is the node that just received focus (the platform's
    /// focus-in notification). If the trap is active and `target` is outside
    /// the container's subtree, focus is recaptured to the head of the
    /// focusable sequence (falling back to the container itself) and `true`
    /// is returned. Catches programmatic and pointer-driven focus moves the
    /// keydown path never sees.
    pub fn contain_focus(&mut self, surface: &mut S, target: &S::Node) -> bool {
        if !self.active {
            return false;
        }
        if *target == self.container || surface.contains(&self.container, target) {
            return false;
        }
        let recaptured = match self.focusable.first() {
            Some(first) => surface.focus(first),
            None => surface.focus(&self.container),
        };
        if !recaptured {
            #[cfg(feature = "tracing")]
            tracing::debug!(container = ?self.container, "focus recapture found no landing spot");
        }
        true
    }

    /// Whether the trap is currently engaged.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The container this trap guards.
    #[must_use]
    pub fn container(&self) -> &S::Node {
        &self.container
    }

    /// Head of the focusable sequence, as of the last recomputation.
    #[must_use]
    pub fn first_focusable(&self) -> Option<&S::Node> {
        self.focusable.first()
    }

    /// Tail of the focusable sequence, as of the last recomputation.
    #[must_use]
    pub fn last_focusable(&self) -> Option<&S::Node> {
        self.focusable.last()
    }

    /// Length of the focusable sequence, as of the last recomputation.
    #[must_use]
    pub fn focusable_len(&self) -> usize {
        self.focusable.len()
    }

    /// Re-query the surface, keeping only genuine descendants.
    ///
    /// The containment retain is defensive against surface implementations
    /// whose query leaks nodes from outside the subtree.
    fn update_focusable(&mut self, surface: &S) {
        let mut nodes = surface.focusable_descendants(&self.container);
        nodes.retain(|node| surface.contains(&self.container, node));
        self.focusable = nodes;
    }
}
