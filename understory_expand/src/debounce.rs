// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce controller: defer the expand signal and keep at most one pending action.
//!
//! ## Overview
//!
//! [`DebounceController`] owns a single timer slot. [`schedule`](DebounceController::schedule)
//! replaces whatever is pending with a new action due after the configured delay, and
//! [`cancel`](DebounceController::cancel) empties the slot.
//!
//! The controller does not own a clock. Time is a [`Duration`] since an arbitrary epoch chosen
//! by the host, passed to [`schedule`](DebounceController::schedule) and
//! [`poll`](DebounceController::poll). Hosts with a real event loop arm a wakeup at
//! [`deadline`](DebounceController::deadline) and poll when it fires; tests simply advance a number.
//!
//! ## Fire-time checks
//!
//! When a due action is polled, the controller reads the store's *current* alert, not the one
//! at schedule time. If it is in the suppression set (by default [`AlertKind::QUICK_DROP`])
//! the action is dropped without dispatching. Either way the slot is cleared.
//!
//! ```
//! use core::time::Duration;
//! use understory_expand::debounce::{DebounceController, Fired};
//! use understory_expand::types::{ExpandHoverTop, SnapshotStore};
//!
//! let mut store: SnapshotStore<u32> = SnapshotStore::default();
//! let mut debounce = DebounceController::new(Duration::from_millis(100));
//!
//! let id = debounce.schedule(vec![1], Duration::ZERO);
//! assert_eq!(debounce.poll(Duration::from_millis(99), &mut store), None);
//! assert_eq!(debounce.poll(Duration::from_millis(100), &mut store), Some(Fired::Dispatched(id)));
//! assert_eq!(store.dispatched, vec![ExpandHoverTop::expand(vec![1])]);
//! ```

use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

use crate::config::ExpandConfig;
use crate::types::{AlertKind, ExpandHoverTop, ExpandStore};

/// Default delay between the last qualifying hover change and the expansion.
pub const EXPAND_HOVER_DELAY: Duration = Duration::from_millis(crate::config::DEFAULT_DELAY_MS);

/// Identifies one scheduled action.
///
/// Ids increase monotonically per controller and are never reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Result of polling a due action.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Fired {
    /// The expand signal was dispatched.
    Dispatched(TimerId),
    /// A suppressing alert was showing; nothing was dispatched.
    Suppressed(TimerId),
}

#[derive(Clone, Debug)]
struct Pending<K> {
    id: TimerId,
    path: Vec<K>,
    deadline: Duration,
}

/// Owner of the single hover-expand timer slot.
#[derive(Clone, Debug)]
pub struct DebounceController<K> {
    delay: Duration,
    suppress: AlertKind,
    pending: Option<Pending<K>>,
    next_id: u64,
}

impl<K> DebounceController<K> {
    /// Create a controller with the given delay, suppressing on [`AlertKind::QUICK_DROP`].
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            suppress: AlertKind::QUICK_DROP,
            pending: None,
            next_id: 0,
        }
    }

    /// Create a controller from a configuration.
    pub fn from_config(config: &ExpandConfig) -> Self {
        Self::new(config.delay()).with_suppressed(config.suppress_alerts)
    }

    /// Replace the set of alerts that suppress a due action.
    #[must_use]
    pub fn with_suppressed(mut self, alerts: AlertKind) -> Self {
        self.suppress = alerts;
        self
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The alerts that suppress a due action.
    pub fn suppressed(&self) -> AlertKind {
        self.suppress
    }

    /// Whether an action is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Target path of the pending action.
    pub fn pending_path(&self) -> Option<&[K]> {
        self.pending.as_ref().map(|p| p.path.as_slice())
    }

    /// Id of the pending action.
    pub fn pending_id(&self) -> Option<TimerId> {
        self.pending.as_ref().map(|p| p.id)
    }

    /// When the pending action becomes due.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Drop the pending action, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(p) => {
                tracing::trace!(timer = p.id.0, "hover expand timer cancelled");
                true
            }
            None => false,
        }
    }
}

impl<K: Debug> DebounceController<K> {
    /// Cancel any pending action and schedule `path` to be expanded at `now + delay`.
    pub fn schedule(&mut self, path: Vec<K>, now: Duration) -> TimerId {
        self.cancel();
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let deadline = now.saturating_add(self.delay);
        tracing::trace!(timer = id.0, ?path, ?deadline, "hover expand timer scheduled");
        self.pending = Some(Pending { id, path, deadline });
        id
    }

    /// Fire the pending action if it is due at `now`.
    ///
    /// Returns `None` when nothing is pending or the deadline has not been reached.
    pub fn poll<S>(&mut self, now: Duration, store: &mut S) -> Option<Fired>
    where
        S: ExpandStore<K> + ?Sized,
    {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        let Pending { id, path, .. } = self.pending.take()?;

        if let Some(alert) = store.state().alert
            && alert.intersects(self.suppress)
        {
            tracing::debug!(timer = id.0, ?alert, "hover expand suppressed by alert");
            return Some(Fired::Suppressed(id));
        }

        tracing::debug!(timer = id.0, ?path, "hover expand fired");
        store.dispatch(ExpandHoverTop::expand(path));
        Some(Fired::Dispatched(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HoverSnapshot, SnapshotStore};
    use alloc::vec;

    const DELAY: Duration = Duration::from_millis(100);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_after_delay() {
        let mut store: SnapshotStore<u32> = SnapshotStore::default();
        let mut d = DebounceController::new(DELAY);
        let id = d.schedule(vec![1, 2], ms(10));
        assert_eq!(d.deadline(), Some(ms(110)));
        assert_eq!(d.poll(ms(109), &mut store), None);
        assert!(store.dispatched.is_empty());
        assert_eq!(d.poll(ms(110), &mut store), Some(Fired::Dispatched(id)));
        assert_eq!(store.dispatched, vec![ExpandHoverTop::expand(vec![1, 2])]);
        assert_eq!(store.state.expand_hover_top_path, Some(vec![1, 2]));
        assert!(!d.is_pending());
        assert_eq!(d.poll(ms(500), &mut store), None);
        assert_eq!(store.dispatched.len(), 1);
    }

    #[test]
    fn reschedule_replaces_pending_and_restarts_delay() {
        let mut store: SnapshotStore<u32> = SnapshotStore::default();
        let mut d = DebounceController::new(DELAY);
        let first = d.schedule(vec![1], ms(0));
        let second = d.schedule(vec![2], ms(50));
        assert!(second > first);
        assert_eq!(d.pending_id(), Some(second));
        assert_eq!(d.pending_path(), Some(&[2_u32][..]));
        assert_eq!(d.poll(ms(100), &mut store), None);
        assert_eq!(d.poll(ms(150), &mut store), Some(Fired::Dispatched(second)));
        assert_eq!(store.dispatched, vec![ExpandHoverTop::expand(vec![2])]);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut store: SnapshotStore<u32> = SnapshotStore::default();
        let mut d: DebounceController<u32> = DebounceController::new(DELAY);
        assert!(!d.cancel());
        d.schedule(vec![1], ms(0));
        assert!(d.cancel());
        assert!(!d.cancel());
        assert_eq!(d.poll(ms(1_000), &mut store), None);
        assert!(store.dispatched.is_empty());
    }

    #[test]
    fn cancel_after_deadline_but_before_poll_never_fires() {
        let mut store: SnapshotStore<u32> = SnapshotStore::default();
        let mut d = DebounceController::new(DELAY);
        d.schedule(vec![1], ms(0));
        // Wall clock is past the deadline, but the loop has not polled yet.
        d.cancel();
        assert_eq!(d.poll(ms(300), &mut store), None);
        assert!(store.dispatched.is_empty());
    }

    #[test]
    fn quick_drop_alert_at_fire_time_suppresses() {
        let mut store: SnapshotStore<u32> = SnapshotStore::default();
        let mut d = DebounceController::new(DELAY);
        let id = d.schedule(vec![1], ms(0));
        // The alert appears during the delay window.
        store.state.alert = Some(AlertKind::DELETE_DROP_HINT);
        assert_eq!(d.poll(ms(100), &mut store), Some(Fired::Suppressed(id)));
        assert!(store.dispatched.is_empty());
        assert!(!d.is_pending());

        let id = d.schedule(vec![1], ms(200));
        store.state.alert = Some(AlertKind::COPY_ONE_DROP_HINT);
        assert_eq!(d.poll(ms(300), &mut store), Some(Fired::Suppressed(id)));
        assert!(store.dispatched.is_empty());
    }

    #[test]
    fn alert_present_at_schedule_but_gone_at_fire_dispatches() {
        let mut store = SnapshotStore::new(HoverSnapshot {
            alert: Some(AlertKind::DELETE_DROP_HINT),
            ..HoverSnapshot::default()
        });
        let mut d = DebounceController::new(DELAY);
        let id = d.schedule(vec![3_u32], ms(0));
        store.state.alert = None;
        assert_eq!(d.poll(ms(100), &mut store), Some(Fired::Dispatched(id)));
        assert_eq!(store.dispatched.len(), 1);
    }

    #[test]
    fn other_alerts_do_not_suppress() {
        let mut store: SnapshotStore<u32> = SnapshotStore::default();
        store.state.alert = Some(AlertKind::CLIPBOARD);
        let mut d = DebounceController::new(DELAY);
        let id = d.schedule(vec![1], ms(0));
        assert_eq!(d.poll(ms(100), &mut store), Some(Fired::Dispatched(id)));
    }

    #[test]
    fn custom_suppression_set() {
        let mut store: SnapshotStore<u32> = SnapshotStore::default();
        store.state.alert = Some(AlertKind::CLIPBOARD);
        let mut d = DebounceController::new(DELAY).with_suppressed(AlertKind::CLIPBOARD);
        assert_eq!(d.suppressed(), AlertKind::CLIPBOARD);
        let id = d.schedule(vec![1], ms(0));
        assert_eq!(d.poll(ms(100), &mut store), Some(Fired::Suppressed(id)));
    }

    #[test]
    fn from_config_uses_delay_and_suppression() {
        let config = ExpandConfig {
            delay_ms: 250,
            suppress_alerts: AlertKind::SCROLL_ZONE_HELP,
        };
        let d: DebounceController<u32> = DebounceController::from_config(&config);
        assert_eq!(d.delay(), ms(250));
        assert_eq!(d.suppressed(), AlertKind::SCROLL_ZONE_HELP);
    }

    #[test]
    fn deadline_saturates() {
        let mut d = DebounceController::new(Duration::MAX);
        d.schedule(vec![1_u32], ms(5));
        assert_eq!(d.deadline(), Some(Duration::MAX));
    }
}
