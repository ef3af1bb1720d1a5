// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover policy: decide whether the hovered node's parent context should auto-expand.
//!
//! ## Overview
//!
//! [`evaluate`] is a pure function of a [`HoverSnapshot`] and a [`DocumentView`].
//! It runs an ordered sequence of guards and returns either [`Decision::Expand`] with the
//! rooted target, or [`Decision::Reject`] naming the guard that failed.
//!
//! ## Guards
//!
//! 1. A node must be hovered, over a [`DropZone::Node`] target.
//! 2. When an expansion is already active, the hovered parent must be strictly shallower than it.
//!    Only depth is compared; a sibling branch at the same depth is rejected as well.
//! 3. The rooted parent of the hovered node must exist and differ from the active expansion.
//! 4. The hovered parent must either be the nearest ancestor whose expansion reveals the first
//!    hidden ancestor of the cursor, or the hovered node must be the active expansion itself.
//!
//! ```
//! use understory_expand::policy::{evaluate, Decision};
//! use understory_expand::types::{DropZone, HoverSnapshot, RootedView};
//!
//! let mut doc = RootedView::new();
//! doc.set_hidden_above_cursor(1);
//! let snapshot = HoverSnapshot {
//!     cursor: Some(vec!['a', 'b', 'c']),
//!     hovering_path: Some(vec!['a', 'b']),
//!     hover_zone: Some(DropZone::Node),
//!     ..HoverSnapshot::default()
//! };
//! assert_eq!(evaluate(&snapshot, &doc), Decision::Expand { target: vec!['a'] });
//! ```

use alloc::vec::Vec;

use crate::path::{is_descendant_path, parent_of};
use crate::types::{DocumentView, DropZone, HoverSnapshot};

/// Why the policy declined to expand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Rejection {
    /// Nothing is hovered.
    NotHovering,
    /// The hovered target is not a node drop zone.
    NotNodeDrop,
    /// The hovered parent is at least as deep as the active expansion.
    DeeperThanActive,
    /// The hovered parent cannot be expressed relative to the displayed root.
    Unrooted,
    /// The target is already the active expansion.
    AlreadyActive,
    /// The hovered parent is neither next to the cursor's first hidden ancestor
    /// nor the parent of the active expansion.
    NotAdjacent,
}

/// Outcome of [`evaluate`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Decision<K> {
    /// Expand the given rooted context.
    Expand {
        /// Rooted parent of the hovered node.
        target: Vec<K>,
    },
    /// Do not expand.
    Reject(Rejection),
}

impl<K> Decision<K> {
    /// Returns `true` for [`Decision::Expand`].
    pub fn is_expand(&self) -> bool {
        matches!(self, Self::Expand { .. })
    }

    /// The expansion target, if any.
    pub fn target(&self) -> Option<&[K]> {
        match self {
            Self::Expand { target } => Some(target),
            Self::Reject(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Expand { .. } => None,
            Self::Reject(r) => Some(*r),
        }
    }
}

/// Decide whether the parent of the hovered node should become the expansion target.
pub fn evaluate<K, D>(snapshot: &HoverSnapshot<K>, doc: &D) -> Decision<K>
where
    K: PartialEq,
    D: DocumentView<K> + ?Sized,
{
    let Some(hovering) = snapshot.hovering_path.as_deref() else {
        return Decision::Reject(Rejection::NotHovering);
    };
    if snapshot.hover_zone != Some(DropZone::Node) {
        return Decision::Reject(Rejection::NotNodeDrop);
    }

    let parent = parent_of(hovering);
    let active = snapshot.expand_hover_top_path.as_deref();

    // Never move the expansion deeper than the committed one.
    if let Some(active) = active
        && parent.len() >= active.len()
    {
        return Decision::Reject(Rejection::DeeperThanActive);
    }

    // distance_from_cursor - 1 == hidden, rearranged to stay in unsigned arithmetic.
    // The hidden count comes from the host, so an overflowing sum can never match.
    let nearest_to_first_visible = snapshot.cursor.as_deref().is_some_and(|cursor| {
        parent
            .len()
            .checked_add(doc.visible_distance_above_cursor(snapshot))
            .and_then(|n| n.checked_add(1))
            == Some(cursor.len())
            && is_descendant_path(cursor, parent)
    });
    let parent_of_active = active.is_some_and(|active| hovering == active);

    let Some(target) = doc.rooted_parent_of(snapshot, hovering) else {
        return Decision::Reject(Rejection::Unrooted);
    };
    if active.is_some_and(|active| active == target.as_slice()) {
        return Decision::Reject(Rejection::AlreadyActive);
    }
    if !(nearest_to_first_visible || parent_of_active) {
        return Decision::Reject(Rejection::NotAdjacent);
    }

    Decision::Expand { target }
}

/// Shorthand for `evaluate(snapshot, doc).is_expand()`.
pub fn should_expand<K, D>(snapshot: &HoverSnapshot<K>, doc: &D) -> bool
where
    K: PartialEq,
    D: DocumentView<K> + ?Sized,
{
    evaluate(snapshot, doc).is_expand()
}
