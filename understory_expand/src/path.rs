// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path primitives: parent, ancestry, and structural equality over root→target paths.
//!
//! ## Overview
//!
//! A path is an ordered slice of node keys from a root to a target node.
//! Its length is the target's depth. Paths are compared structurally, element by element.
//!
//! ```
//! use understory_expand::path::{is_descendant_path, parent_of};
//!
//! let path = [1_u32, 2, 3];
//! assert_eq!(parent_of(&path), &[1, 2]);
//! assert!(is_descendant_path(&path, &[1, 2]));
//! assert!(!is_descendant_path(&[1, 2], &path));
//! ```

/// Return the parent of `path` (the path with its last element removed).
///
/// A root-level path (or the empty path) yields the empty path, which denotes the whole document.
#[inline]
pub fn parent_of<K>(path: &[K]) -> &[K] {
    match path.split_last() {
        Some((_, parent)) => parent,
        None => path,
    }
}

/// Structural equality of two paths.
#[inline]
pub fn equal_path<K: PartialEq>(a: &[K], b: &[K]) -> bool {
    a == b
}

/// Returns `true` if `path` is a descendant of `ancestor`, or equal to it.
///
/// `ancestor` must be a prefix of `path`.
#[inline]
pub fn is_descendant_path<K: PartialEq>(path: &[K], ancestor: &[K]) -> bool {
    path.starts_with(ancestor)
}

/// Returns `true` if `ancestor` is a strict prefix of `path`.
#[inline]
pub fn is_strict_descendant_path<K: PartialEq>(path: &[K], ancestor: &[K]) -> bool {
    ancestor.len() < path.len() && path.starts_with(ancestor)
}
