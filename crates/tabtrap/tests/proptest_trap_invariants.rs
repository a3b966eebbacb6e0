#![forbid(unsafe_code)]

//! Property tests for the containment invariants over arbitrary trees.
//!
//! For any generated dialog content — mixed element kinds, enablement,
//! explicit tab indices, style flags, and one level of nesting — an engaged
//! trap must keep focus inside its container, its wrap transitions must land
//! on the computed head and tail, and its focusable sequence must never
//! include a node the visibility filter excludes.

use proptest::prelude::*;
use tabtrap::{Activation, FocusTrap, KeyDisposition};
use tabtrap_core::FocusSurface;
use tabtrap_core::event::{KeyCode, KeyEvent, Modifiers};
use tabtrap_tree::{Display, Element, ElementTree, NodeId, Visibility};

/// One generated element: kind selector, disabled flag, tab-index selector
/// (-2 = unset), style-defect selector, nest-under-previous flag.
type Case = (u8, bool, i8, u8, bool);

fn arb_case() -> impl Strategy<Value = Case> {
    (0u8..8, any::<bool>(), -2i8..4, 0u8..8, any::<bool>())
}

fn build_element(kind: u8, disabled: bool, tab: i8, style: u8) -> Element {
    let mut el = match kind {
        0 => Element::block(),
        1 => Element::link(),
        2 => Element::anchor(),
        3 => Element::button(),
        4 => Element::text_input(),
        5 => Element::select(),
        6 => Element::media().with_controls(),
        _ => Element::editable(),
    };
    if disabled {
        el = el.disabled();
    }
    if tab >= -1 {
        el = el.tab_index(i32::from(tab));
    }
    match style {
        0 => el = el.display(Display::None),
        1 => el = el.visibility(Visibility::Hidden),
        2 => el = el.opacity(0.0),
        3 => el = el.size(0, 0),
        4 => el = el.size(0, 0).fixed(),
        _ => {}
    }
    el
}

/// Build a page: a focusable trigger outside the dialog, then the generated
/// content inside it (nesting each flagged element under its predecessor).
fn build_page(cases: &[Case]) -> (ElementTree, NodeId, NodeId) {
    let mut tree = ElementTree::new();
    let root = tree.root();
    let trigger = tree.insert(root, Element::button());
    let dialog = tree.insert(root, Element::block());
    let mut previous = dialog;
    for &(kind, disabled, tab, style, nest) in cases {
        let parent = if nest { previous } else { dialog };
        previous = tree.insert(parent, build_element(kind, disabled, tab, style));
    }
    (tree, trigger, dialog)
}

fn tab() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab)
}

fn shift_tab() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT)
}

proptest! {
    #[test]
    fn engaged_trap_keeps_focus_inside(cases in prop::collection::vec(arb_case(), 0..24)) {
        let (mut tree, trigger, dialog) = build_page(&cases);
        prop_assert!(tree.focus(&trigger));

        let mut trap = FocusTrap::new(dialog);
        match trap.activate(&mut tree) {
            Activation::Engaged => {
                let focused = tree.focused();
                prop_assert!(focused.is_some());
                if let Some(node) = focused {
                    prop_assert!(tree.contains(&dialog, &node));
                }
            }
            Activation::NoFocusable => {
                // Refusal leaves the world untouched.
                prop_assert!(!trap.is_active());
                prop_assert_eq!(tree.focused(), Some(trigger));
            }
            outcome => prop_assert!(false, "unexpected outcome {:?}", outcome),
        }
    }

    #[test]
    fn wrap_transitions_land_on_head_and_tail(cases in prop::collection::vec(arb_case(), 1..24)) {
        let (mut tree, _trigger, dialog) = build_page(&cases);
        let mut trap = FocusTrap::new(dialog);
        if trap.activate(&mut tree) != Activation::Engaged {
            return Ok(());
        }

        let head = trap.first_focusable().copied();
        let tail = trap.last_focusable().copied();
        prop_assert!(head.is_some() && tail.is_some());
        let (head, tail) = match (head, tail) {
            (Some(h), Some(t)) => (h, t),
            _ => return Ok(()),
        };

        if trap.focusable_len() == 1 {
            // A lone tab stop absorbs every Tab without moving.
            prop_assert_eq!(trap.handle_key(&mut tree, &tab()), KeyDisposition::Consumed);
            prop_assert_eq!(tree.focused(), Some(head));
            prop_assert_eq!(trap.handle_key(&mut tree, &shift_tab()), KeyDisposition::Consumed);
            prop_assert_eq!(tree.focused(), Some(head));
        } else {
            // Backward from the head lands on the tail.
            prop_assert!(tree.focus(&head));
            prop_assert_eq!(trap.handle_key(&mut tree, &shift_tab()), KeyDisposition::Consumed);
            prop_assert_eq!(tree.focused(), Some(tail));

            // Forward from the tail lands on the head.
            prop_assert_eq!(trap.handle_key(&mut tree, &tab()), KeyDisposition::Consumed);
            prop_assert_eq!(tree.focused(), Some(head));
        }
    }

    #[test]
    fn focusable_sequence_respects_the_filter(cases in prop::collection::vec(arb_case(), 0..24)) {
        let (mut tree, _trigger, dialog) = build_page(&cases);
        let mut trap = FocusTrap::new(dialog);
        trap.activate(&mut tree);
        trap.refresh(&tree);

        let sequence: Vec<NodeId> = tree.focusable_descendants(&dialog);
        prop_assert_eq!(trap.focusable_len(), sequence.len());

        for node in sequence {
            prop_assert!(tree.contains(&dialog, &node));
            // Rendered: the platform will accept programmatic focus.
            prop_assert!(tree.can_receive_focus(&node));
            let el = tree.element(node).cloned();
            prop_assert!(el.is_some());
            if let Some(el) = el {
                prop_assert!(!el.disabled);
                prop_assert!(!matches!(el.tab_index, Some(t) if t < 0));
                prop_assert!(el.display != Display::None);
                prop_assert!(el.visibility != Visibility::Hidden);
                prop_assert!(el.opacity > 0.0);
                prop_assert!(el.size.0 > 0 || el.size.1 > 0 || el.fixed);
            }
        }
    }

    #[test]
    fn double_activate_is_idempotent(cases in prop::collection::vec(arb_case(), 1..16)) {
        let (mut tree, trigger, dialog) = build_page(&cases);
        prop_assert!(tree.focus(&trigger));

        let mut trap = FocusTrap::new(dialog);
        if trap.activate(&mut tree) != Activation::Engaged {
            return Ok(());
        }
        let focused_after_first = tree.focused();
        prop_assert_eq!(trap.activate(&mut tree), Activation::AlreadyActive);
        prop_assert_eq!(tree.focused(), focused_after_first);

        // And deactivation still restores to the original trigger.
        trap.deactivate(&mut tree);
        prop_assert_eq!(tree.focused(), Some(trigger));
    }
}
