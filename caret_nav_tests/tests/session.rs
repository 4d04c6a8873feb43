// Copyright 2026 the Caret Nav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use caret_nav::{ArrowKey, CaretHost, CaretNavigator, ErrorKind, NavSession, Selection};

use crate::util::{BoxTree, NodeId, rect};

/// A box on top and two boxes side by side below it.
fn layout() -> (BoxTree, [NodeId; 4]) {
    let mut tree = BoxTree::new(rect(0.0, 0.0, 200.0, 100.0));
    let root = tree.root();
    let top = tree.add(root, rect(0.0, 0.0, 60.0, 50.0));
    let left = tree.add(root, rect(0.0, 50.0, 100.0, 100.0));
    let right = tree.add(root, rect(100.0, 50.0, 200.0, 100.0));
    (tree, [root, top, left, right])
}

#[test]
fn session_moves_focus() {
    let (mut tree, [root, _, left, right]) = layout();
    let nav = CaretNavigator::default();
    let mut session = NavSession::new(left);

    assert_eq!(session.handle_key(&mut tree, &nav, "ArrowRight", false), Ok(true));
    assert_eq!(session.focus(), right);
    assert_eq!(session.handle_key(&mut tree, &nav, "ArrowRight", false), Ok(true));
    assert_eq!(session.focus(), root);
    assert_eq!(
        session.handle_key(&mut tree, &nav, "ArrowRight", false),
        Ok(false),
        "the root has nowhere to go"
    );
    assert_eq!(session.focus(), root);
    assert_eq!(session.selection(), None);
}

#[test]
fn session_unknown_key() {
    let (mut tree, [_, top, _, _]) = layout();
    let nav = CaretNavigator::default();
    let mut session = NavSession::new(top);

    let err = session
        .handle_key(&mut tree, &nav, "Enter", false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownKey);
    assert_eq!(err.direction(), None);
    assert_eq!(
        err.to_string(),
        "unknown key: not one of `ArrowUp`, `ArrowRight`, `ArrowDown` or `ArrowLeft`"
    );
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(session.focus(), top);

    let err = session
        .handle_key(&mut tree, &nav, "arrowdown", false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownKey, "names are case sensitive");
}

#[test]
fn session_clears_carry_of_previous_focus() {
    let (mut tree, [root, top, left, right]) = layout();
    let nav = CaretNavigator::default();
    let mut session = NavSession::new(top);

    assert_eq!(session.handle_arrow(&mut tree, &nav, ArrowKey::Down, false), Ok(true));
    assert_eq!(session.focus(), left);
    assert_eq!(tree.carry_x(left), Some(60.0));
    assert_eq!(tree.carry_x(root), Some(60.0));

    assert_eq!(session.handle_arrow(&mut tree, &nav, ArrowKey::Right, false), Ok(true));
    assert_eq!(session.focus(), right);
    assert_eq!(tree.carry_x(left), None, "unfocused nodes forget their column");

    assert_eq!(session.handle_arrow(&mut tree, &nav, ArrowKey::Up, false), Ok(true));
    assert_eq!(session.focus(), top);
    assert_eq!(tree.carry_x(right), None);
    assert_eq!(tree.carry_x(top), Some(200.0));
}

#[test]
fn session_extends_selection() {
    let (mut tree, [_, top, left, right]) = layout();
    let nav = CaretNavigator::default();
    let mut session = NavSession::new(top);

    session
        .handle_arrow(&mut tree, &nav, ArrowKey::Down, true)
        .unwrap();
    session
        .handle_arrow(&mut tree, &nav, ArrowKey::Right, true)
        .unwrap();
    assert_eq!(
        session.selection(),
        Some(Selection {
            anchor: top,
            focus: right,
        })
    );

    session
        .handle_arrow(&mut tree, &nav, ArrowKey::Left, false)
        .unwrap();
    assert_eq!(session.focus(), left);
    assert_eq!(session.selection(), None, "plain moves collapse the selection");

    session
        .handle_arrow(&mut tree, &nav, ArrowKey::Right, true)
        .unwrap();
    session.collapse();
    assert_eq!(session.selection(), None);
    assert_eq!(session.focus(), right);
}

#[test]
fn session_set_focus() {
    let (mut tree, [_, top, left, _]) = layout();
    let nav = CaretNavigator::default();
    let mut session = NavSession::new(top);

    session
        .handle_arrow(&mut tree, &nav, ArrowKey::Down, true)
        .unwrap();
    assert!(session.selection().is_some());

    session.set_focus(&mut tree, top);
    assert_eq!(session.focus(), top);
    assert_eq!(session.selection(), None);
    assert_eq!(tree.carry_x(left), None);
}
