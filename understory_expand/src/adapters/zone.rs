// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-zone classification from row geometry.
//!
//! ## Feature
//!
//! Enable with `kurbo_adapter`.
//!
//! ## Notes
//!
//! A row's drop targets are its own bounds (a [`DropZone::Node`] drop) and a band of height
//! `gap` directly under it, spanning the same horizontal extent (a [`DropZone::Between`] drop).
//! Bounds are half-open like [`Rect::contains`]: the bottom edge of a row belongs to its gap band.
//! These helpers do not perform hit testing; feed them the row a hit test already picked.

use kurbo::{Point, Rect};

use crate::types::DropZone;

/// Classify `pt` against a row's drop targets.
///
/// Returns `None` when the point is outside both the row and its gap band, or when `gap` is
/// not positive and the point is outside the row.
pub fn drop_zone_at(row: Rect, pt: Point, gap: f64) -> Option<DropZone> {
    let row = row.abs();
    if row.contains(pt) {
        return Some(DropZone::Node);
    }
    if gap > 0.0 {
        let band = Rect::new(row.x0, row.y1, row.x1, row.y1 + gap);
        if band.contains(pt) {
            return Some(DropZone::Between);
        }
    }
    None
}
