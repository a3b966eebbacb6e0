#![forbid(unsafe_code)]

//! Arena-backed element tree with focus state.
//!
//! Node handles are plain ids; detaching a subtree invalidates nothing, it
//! just makes the affected handles dead (every query on them degrades to
//! `false`/empty). This mirrors how a trap must treat references into a live
//! UI tree: tolerate nodes disappearing underneath it.
//!
//! # Invariants
//!
//! - Ids are never reused; `detach` leaves the node in the arena, unparented.
//! - The focusable query walks in preorder, so results are in tree order.
//! - If the focused node leaves the attached tree, focus falls back to none
//!   (the platform's "focus went to the document body" state).

use crate::element::{Display, Element, Visibility};
use tabtrap_core::surface::FocusSurface;

/// Handle to a node in an [`ElementTree`].
pub type NodeId = u64;

#[derive(Debug)]
struct ElementNode {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory UI tree implementing [`FocusSurface`].
#[derive(Debug)]
pub struct ElementTree {
    nodes: Vec<ElementNode>,
    root: NodeId,
    focused: Option<NodeId>,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    /// Create a tree with an implicit root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![ElementNode {
                element: Element::block().size(800, 600),
                parent: None,
                children: Vec::new(),
            }],
            root: 0,
            focused: None,
        }
    }

    /// The implicit root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Insert `element` as the last child of `parent`.
    ///
    /// An unknown parent falls back to the root.
    pub fn insert(&mut self, parent: NodeId, element: Element) -> NodeId {
        let parent = if self.node(parent).is_some() {
            parent
        } else {
            self.root
        };
        let id = self.nodes.len() as NodeId;
        self.nodes.push(ElementNode {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(node) = self.node_mut(parent) {
            node.children.push(id);
        }
        id
    }

    /// Detach `node` (and with it, its subtree) from the tree.
    ///
    /// The root cannot be detached. If the focused node leaves the attached
    /// tree, focus is cleared.
    pub fn detach(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != node);
        }
        if let Some(n) = self.node_mut(node) {
            n.parent = None;
        }
        if let Some(focused) = self.focused {
            if !self.is_attached(focused) {
                self.focused = None;
            }
        }
    }

    /// The element description for `node`, if it exists.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.node(node).map(|n| &n.element)
    }

    /// Set the disabled state of `node`.
    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if let Some(n) = self.node_mut(node) {
            n.element.disabled = disabled;
        }
    }

    /// Set the computed display of `node`.
    pub fn set_display(&mut self, node: NodeId, display: Display) {
        if let Some(n) = self.node_mut(node) {
            n.element.display = display;
        }
    }

    /// Set the computed visibility of `node`.
    pub fn set_visibility(&mut self, node: NodeId, visibility: Visibility) {
        if let Some(n) = self.node_mut(node) {
            n.element.visibility = visibility;
        }
    }

    /// Set or clear the explicit tab index of `node`.
    pub fn set_tab_index(&mut self, node: NodeId, tab_index: Option<i32>) {
        if let Some(n) = self.node_mut(node) {
            n.element.tab_index = tab_index;
        }
    }

    /// Set the computed opacity of `node`.
    pub fn set_opacity(&mut self, node: NodeId, opacity: f32) {
        if let Some(n) = self.node_mut(node) {
            n.element.opacity = opacity;
        }
    }

    /// Clear input focus (the "focus went to the body" state).
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Whether `node` is reachable from the root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut cur = node;
        loop {
            let Some(n) = self.node(cur) else {
                return false;
            };
            match n.parent {
                Some(p) => cur = p,
                None => return cur == self.root,
            }
        }
    }

    /// Simulate the platform's native Tab movement over the whole tree.
    ///
    /// Moves focus to the next (or previous) tab stop in tree order, wrapping
    /// at the ends. Integration tests call this when a trap returns `Pass`
    /// for a Tab press, standing in for what a real platform would do.
    pub fn advance_focus(&mut self, forward: bool) -> Option<NodeId> {
        let root = self.root;
        let stops = self.focusable_descendants(&root);
        if stops.is_empty() {
            return None;
        }
        let pos = self
            .focused
            .and_then(|f| stops.iter().position(|&n| n == f));
        let next = match (pos, forward) {
            (Some(i), true) => stops[(i + 1) % stops.len()],
            (Some(i), false) => stops[(i + stops.len() - 1) % stops.len()],
            (None, true) => stops[0],
            (None, false) => stops[stops.len() - 1],
        };
        self.focused = Some(next);
        Some(next)
    }

    fn node(&self, id: NodeId) -> Option<&ElementNode> {
        self.nodes.get(id as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut ElementNode> {
        self.nodes.get_mut(id as usize)
    }

    /// Rendered means attached with no display-none anywhere on the chain.
    fn is_rendered(&self, id: NodeId) -> bool {
        let mut cur = id;
        loop {
            let Some(node) = self.node(cur) else {
                return false;
            };
            if node.element.display == Display::None {
                return false;
            }
            match node.parent {
                Some(p) => cur = p,
                None => return cur == self.root,
            }
        }
    }

    /// Full tab-stop test: attribute eligibility plus the visibility filter.
    fn is_tab_stop(&self, id: NodeId) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        let el = &node.element;
        if !el.is_focus_eligible() || !self.is_rendered(id) {
            return false;
        }
        if el.visibility == Visibility::Hidden || el.opacity <= 0.0 {
            return false;
        }
        el.size.0 > 0 || el.size.1 > 0 || el.fixed
    }
}

impl FocusSurface for ElementTree {
    type Node = NodeId;

    fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: &NodeId) -> bool {
        if self.can_receive_focus(node) {
            self.focused = Some(*node);
            true
        } else {
            false
        }
    }

    fn focusable_descendants(&self, container: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(node) = self.node(*container) else {
            return out;
        };
        // Preorder: push children right-to-left so the leftmost pops first.
        let mut stack: Vec<NodeId> = node.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.is_tab_stop(id) {
                out.push(id);
            }
            if let Some(n) = self.node(id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    fn contains(&self, container: &NodeId, node: &NodeId) -> bool {
        let mut cur = self.node(*node).and_then(|n| n.parent);
        while let Some(p) = cur {
            if p == *container {
                return true;
            }
            cur = self.node(p).and_then(|n| n.parent);
        }
        false
    }

    fn can_receive_focus(&self, node: &NodeId) -> bool {
        self.is_rendered(*node)
    }
}
