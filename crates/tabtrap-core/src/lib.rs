#![forbid(unsafe_code)]

//! Core: keyboard event types and the focus-surface capability trait.
//!
//! # Role in tabtrap
//! `tabtrap-core` is the vocabulary layer. It owns the normalized key-event
//! types that trap logic consumes and the [`FocusSurface`] trait that
//! abstracts the host UI tree.
//!
//! # Primary responsibilities
//! - **KeyEvent**: canonical keyboard events (code, modifiers, kind).
//! - **FocusSurface**: what a platform must provide — current focus, focus
//!   moves, and a visibility-filtered focusable query.
//!
//! # How it fits in the system
//! The `tabtrap` crate drives [`FocusSurface`] implementations with the
//! containment algorithm; `tabtrap-tree` provides an in-memory surface so
//! the algorithm is testable without a rendering engine.

pub mod event;
pub mod surface;

pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use surface::FocusSurface;
