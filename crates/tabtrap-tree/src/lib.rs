#![forbid(unsafe_code)]

//! In-memory element tree implementing [`FocusSurface`].
//!
//! # Role in tabtrap
//! `tabtrap-tree` is the reference surface and test harness. It models just
//! enough of a real UI tree — element kinds, enablement, explicit tab
//! indices, computed style, layout presence — to exercise every branch of
//! the focusable-query contract and the containment algorithm, without a
//! rendering engine.
//!
//! # Primary responsibilities
//! - **Element**: builder-style description of a node (kind + style flags).
//! - **ElementTree**: arena-backed tree with focus state, mutation helpers,
//!   and a native-Tab simulation for integration tests.
//!
//! [`FocusSurface`]: tabtrap_core::FocusSurface

pub mod element;
pub mod tree;

pub use element::{Display, Element, ElementKind, Visibility};
pub use tree::{ElementTree, NodeId};
