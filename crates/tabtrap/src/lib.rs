#![forbid(unsafe_code)]

//! Keyboard focus containment for modal UI surfaces.
//!
//! While a modal, drawer, or overlay is the active interactive surface,
//! Tab/Shift+Tab must cycle inside it, and closing the surface must return
//! focus to wherever the user was before. [`FocusTrap`] implements that
//! behavior over any [`FocusSurface`]; [`TrapRegistry`] owns named traps so
//! independent call sites (login modal, nav drawer, search overlay) don't
//! fight over listeners or keys.
//!
//! # Invariants
//!
//! 1. **Containment**: while a trap is active, the surface's focused node
//!    stays inside the trap's container (or nothing is focused at all when
//!    the container offers no tab stop — activation refuses that case).
//! 2. **Restoration**: deactivating returns focus to the node focused just
//!    before activation, if it still exists.
//! 3. **Idempotence**: double activate and double deactivate are no-ops.
//! 4. **No panics**: every anomaly degrades to a no-op plus a diagnostic;
//!    a failure here must never take down the surface it protects.
//!
//! # Example
//!
//! ```
//! use tabtrap::{FocusTrap, KeyDisposition};
//! use tabtrap_core::FocusSurface;
//! use tabtrap_core::event::{KeyCode, KeyEvent};
//! use tabtrap_tree::{Element, ElementTree};
//!
//! let mut tree = ElementTree::new();
//! let root = tree.root();
//! let dialog = tree.insert(root, Element::block());
//! let ok = tree.insert(dialog, Element::button());
//! let cancel = tree.insert(dialog, Element::button());
//!
//! let mut trap = FocusTrap::new(dialog);
//! trap.activate(&mut tree);
//! assert_eq!(tree.focused(), Some(ok));
//!
//! // Tab from the last tab stop wraps to the first.
//! tree.focus(&cancel);
//! let disposition = trap.handle_key(&mut tree, &KeyEvent::new(KeyCode::Tab));
//! assert_eq!(disposition, KeyDisposition::Consumed);
//! assert_eq!(tree.focused(), Some(ok));
//! ```
//!
//! [`FocusSurface`]: tabtrap_core::FocusSurface

pub mod registry;
pub mod trap;

pub use registry::TrapRegistry;
pub use trap::{Activation, EscapeCallback, FocusTrap, KeyDisposition, TrapOptions};
