// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for hover expansion: drop zones, alerts, the state snapshot, the expand signal,
//! and the collaborator traits.
//!
//! ## Overview
//!
//! These types describe the inputs and outputs of the engine.
//! They are read by the [`policy`](crate::policy) evaluator, the
//! [`debounce`](crate::debounce) controller and the [`driver`](crate::driver).

use alloc::vec::Vec;

use crate::path::{equal_path, is_strict_descendant_path, parent_of};

/// What kind of drop target the drag pointer is currently over.
///
/// Only [`DropZone::Node`] participates in hover expansion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DropZone {
    /// Drop onto a node.
    Node,
    /// Drop between siblings, or after the last child of a context.
    Between,
}

bitflags::bitflags! {
    /// Kinds of alert the editor may be showing.
    ///
    /// A snapshot normally carries a single kind. Sets of kinds (such as
    /// [`AlertKind::QUICK_DROP`]) are used for suppression checks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "config", serde(transparent))]
    pub struct AlertKind: u16 {
        /// Hint shown while the pointer is over the quick delete drop target.
        const DELETE_DROP_HINT   = 0b0000_0001;
        /// Hint shown while the pointer is over the quick copy drop target.
        const COPY_ONE_DROP_HINT = 0b0000_0010;
        /// Clipboard progress or result.
        const CLIPBOARD          = 0b0000_0100;
        /// Help for the scroll zone.
        const SCROLL_ZONE_HELP   = 0b0000_1000;
    }
}

impl AlertKind {
    /// Alerts raised by the quick drop affordances; auto-expansion would disrupt them.
    pub const QUICK_DROP: Self = Self::DELETE_DROP_HINT.union(Self::COPY_ONE_DROP_HINT);
}

/// The signal that sets or clears the active auto-expansion target.
///
/// `path: None` collapses the current expansion.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ExpandHoverTop<K> {
    /// New expansion target, or `None` to collapse.
    pub path: Option<Vec<K>>,
}

impl<K> ExpandHoverTop<K> {
    /// Expand the given context.
    pub fn expand(path: Vec<K>) -> Self {
        Self { path: Some(path) }
    }

    /// Clear the active expansion.
    pub fn collapse() -> Self {
        Self { path: None }
    }
}

/// Read-only slice of application state consumed by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverSnapshot<K> {
    /// The user's current selection.
    pub cursor: Option<Vec<K>>,
    /// Path of the node under the drag pointer.
    pub hovering_path: Option<Vec<K>>,
    /// Kind of drop target under the drag pointer.
    pub hover_zone: Option<DropZone>,
    /// Currently active expansion target.
    pub expand_hover_top_path: Option<Vec<K>>,
    /// Whether a drag is in progress.
    pub drag_in_progress: bool,
    /// Alert currently shown, if any.
    pub alert: Option<AlertKind>,
}

impl<K> Default for HoverSnapshot<K> {
    fn default() -> Self {
        Self {
            cursor: None,
            hovering_path: None,
            hover_zone: None,
            expand_hover_top_path: None,
            drag_in_progress: false,
            alert: None,
        }
    }
}

impl<K> HoverSnapshot<K> {
    /// Apply an expand signal: set or clear [`HoverSnapshot::expand_hover_top_path`].
    pub fn apply(&mut self, signal: ExpandHoverTop<K>) {
        self.expand_hover_top_path = signal.path;
    }
}

/// Document queries the engine needs, answered relative to the current snapshot.
///
/// Implemented by the host's document model. See [`RootedView`] for a minimal implementation.
pub trait DocumentView<K> {
    /// Parent of `path`, renormalized relative to the displayed root context.
    ///
    /// Returns `None` when the parent cannot be expressed relative to that root.
    fn rooted_parent_of(&self, snapshot: &HoverSnapshot<K>, path: &[K]) -> Option<Vec<K>>;

    /// Number of collapsed ancestor levels currently hidden above the cursor.
    fn visible_distance_above_cursor(&self, snapshot: &HoverSnapshot<K>) -> usize;
}

/// Access to the live application state and its dispatcher.
///
/// [`state`](ExpandStore::state) must always return the current state, never a cached copy:
/// the debounce controller relies on it to observe changes made during the delay window.
pub trait ExpandStore<K> {
    /// The current state.
    fn state(&self) -> &HoverSnapshot<K>;
    /// Deliver an expand signal.
    fn dispatch(&mut self, signal: ExpandHoverTop<K>);
}

/// A [`DocumentView`] over a displayed root prefix.
///
/// - Paths outside the displayed root cannot be rooted.
/// - The parent of the displayed root is the displayed root itself.
/// - The hidden level count is maintained by the host (for example from its autofocus logic).
///
/// With an empty root (the default) this is the plain parent, and a root-level path
/// yields the empty path (the whole document).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootedView<K> {
    root: Vec<K>,
    hidden_above_cursor: usize,
}

impl<K> Default for RootedView<K> {
    fn default() -> Self {
        Self {
            root: Vec::new(),
            hidden_above_cursor: 0,
        }
    }
}

impl<K> RootedView<K> {
    /// Create a view rooted at the whole document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view rooted at `root`.
    pub fn with_root(root: Vec<K>) -> Self {
        Self {
            root,
            hidden_above_cursor: 0,
        }
    }

    /// The displayed root.
    pub fn root(&self) -> &[K] {
        &self.root
    }

    /// Change the displayed root.
    pub fn set_root(&mut self, root: Vec<K>) {
        self.root = root;
    }

    /// Set the number of collapsed levels hidden above the cursor.
    pub fn set_hidden_above_cursor(&mut self, levels: usize) {
        self.hidden_above_cursor = levels;
    }
}

impl<K: Clone + PartialEq> DocumentView<K> for RootedView<K> {
    fn rooted_parent_of(&self, _snapshot: &HoverSnapshot<K>, path: &[K]) -> Option<Vec<K>> {
        if is_strict_descendant_path(path, &self.root) {
            Some(parent_of(path).to_vec())
        } else if equal_path(path, &self.root) {
            Some(self.root.clone())
        } else {
            None
        }
    }

    fn visible_distance_above_cursor(&self, _snapshot: &HoverSnapshot<K>) -> usize {
        self.hidden_above_cursor
    }
}

/// An [`ExpandStore`] that owns its snapshot, applies every signal to it, and keeps a log.
///
/// Handy for hosts without a store of their own, and for tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotStore<K> {
    /// The live state.
    pub state: HoverSnapshot<K>,
    /// Every signal dispatched so far, oldest first.
    pub dispatched: Vec<ExpandHoverTop<K>>,
}

impl<K> Default for SnapshotStore<K> {
    fn default() -> Self {
        Self::new(HoverSnapshot::default())
    }
}

impl<K> SnapshotStore<K> {
    /// Wrap an initial state.
    pub fn new(state: HoverSnapshot<K>) -> Self {
        Self {
            state,
            dispatched: Vec::new(),
        }
    }
}

impl<K: Clone> ExpandStore<K> for SnapshotStore<K> {
    fn state(&self) -> &HoverSnapshot<K> {
        &self.state
    }

    fn dispatch(&mut self, signal: ExpandHoverTop<K>) {
        self.dispatched.push(signal.clone());
        self.state.apply(signal);
    }
}
