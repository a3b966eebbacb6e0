#![forbid(unsafe_code)]

//! The focus-surface capability trait.
//!
//! "Focusable element" and "currently focused element" are platform concepts.
//! [`FocusSurface`] is the seam between the containment algorithm and a host
//! UI tree: a browser DOM adapter, a widget hierarchy, or the in-memory tree
//! in `tabtrap-tree`. The trap only ever identifies the head and tail of the
//! focusable sequence and moves focus between them, so correctness rests
//! entirely on this trait's query semantics.
//!
//! # Invariants
//!
//! - Node handles are cheap to clone and compare; holding one keeps nothing
//!   alive. A handle may refer to a node that has since been detached, and
//!   every method must tolerate that.
//! - No method panics. Operations on dead handles degrade to `false`/empty.

/// Capabilities the containment algorithm needs from a host UI tree.
pub trait FocusSurface {
    /// Handle to a node in the tree. Cheap to clone; identity-comparable.
    type Node: Clone + PartialEq + core::fmt::Debug;

    /// The node that currently holds input focus, if any.
    fn focused(&self) -> Option<Self::Node>;

    /// Move input focus to `node`.
    ///
    /// Returns `false` (without side effects) when the node can no longer
    /// receive focus — detached or not rendered. This is programmatic focus:
    /// it may land on nodes that are not in the Tab order.
    fn focus(&mut self, node: &Self::Node) -> bool;

    /// Focusable strict descendants of `container`, in tree order.
    ///
    /// A node qualifies when it is *eligible* — a link with a hyperlink
    /// target, a non-disabled form control (button, text input, text area,
    /// select), media with visible controls, an enabled editable region, or
    /// any node carrying an explicit non-negative tab index — and *not*
    /// excluded by an explicit negative tab index, and *rendered*: no
    /// display-none anywhere on its ancestor chain, visibility not hidden,
    /// opacity nonzero, and either a nonzero layout box or fixed positioning.
    ///
    /// Ordering is tree (document) order; explicit tab-index values do not
    /// reorder the sequence.
    fn focusable_descendants(&self, container: &Self::Node) -> Vec<Self::Node>;

    /// Whether `node` lies strictly inside `container`'s subtree.
    fn contains(&self, container: &Self::Node, node: &Self::Node) -> bool;

    /// Whether `node` is still attached and able to take programmatic focus.
    ///
    /// Guards focus restoration: a restore target removed from the tree while
    /// a trap was active must be skipped, not focused.
    fn can_receive_focus(&self, node: &Self::Node) -> bool;
}
