// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driver implementation.
//!
//! ## Overview
//!
//! [`HoverExpand`] runs once per relevant state transition (hover target change, drag start or
//! end, state tick) and coordinates the [`policy`](crate::policy) evaluator with the
//! [`debounce`](crate::debounce) controller it owns.
//!
//! ## Order of checks
//!
//! 1. Drag ended while an expansion is active: cancel the timer and dispatch a collapse.
//!    This wins over any expansion decision, so expansions never outlive the drag.
//! 2. Policy rejects: cancel the timer. Nothing is dispatched; an expansion that never fired
//!    is simply dropped.
//! 3. Policy accepts: (re)schedule the rooted target.
//!
//! ## Time
//!
//! Call [`HoverExpand::tick`] from the host loop, at least when
//! [`HoverExpand::next_deadline`] is reached, to fire due expansions.
//!
//! ## See Also
//!
//! [`trigger`](crate::trigger) for the change filter behind [`HoverExpand::update`].

use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

use crate::config::ExpandConfig;
use crate::debounce::{DebounceController, Fired, TimerId};
use crate::policy::{Decision, Rejection, evaluate};
use crate::trigger::ChangeFilter;
use crate::types::{DocumentView, ExpandHoverTop, ExpandStore};

/// What a driver run did.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    /// The drag ended with an active expansion; a collapse was dispatched.
    Collapsed,
    /// The policy rejected; any pending expansion was cancelled.
    Idle(Rejection),
    /// An expansion was (re)scheduled.
    Scheduled(TimerId),
}

/// Hover-to-expand orchestration.
///
/// ## Usage
///
/// - Construct with [`HoverExpand::new`] (default delay and suppression) or
///   [`HoverExpand::with_config`].
/// - Call [`HoverExpand::update`] on every state change notification, or
///   [`HoverExpand::run`] when the caller already knows an input changed (for example the
///   document's hidden level count, which the change filter cannot see).
/// - Call [`HoverExpand::tick`] to fire due expansions.
pub struct HoverExpand<K, D: DocumentView<K>> {
    doc: D,
    debounce: DebounceController<K>,
    filter: ChangeFilter<K>,
}

impl<K: Debug, D: DocumentView<K>> Debug for HoverExpand<K, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HoverExpand")
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl<K, D> HoverExpand<K, D>
where
    K: Clone + PartialEq + Debug,
    D: DocumentView<K>,
{
    /// Create a driver with the default configuration.
    pub fn new(doc: D) -> Self {
        Self::with_config(doc, &ExpandConfig::default())
    }

    /// Create a driver with an explicit configuration.
    pub fn with_config(doc: D, config: &ExpandConfig) -> Self {
        Self {
            doc,
            debounce: DebounceController::from_config(config),
            filter: ChangeFilter::new(),
        }
    }

    /// The document view.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Mutable access to the document view.
    ///
    /// Follow changes that affect the policy with [`HoverExpand::run`].
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    /// The owned debounce controller.
    pub fn debounce(&self) -> &DebounceController<K> {
        &self.debounce
    }

    /// When the pending expansion becomes due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debounce.deadline()
    }

    /// Cancel any pending expansion. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.debounce.cancel()
    }

    /// Evaluate the current state and act on it, unconditionally.
    ///
    /// The state is recorded in the change filter, so a following [`HoverExpand::update`]
    /// with the same inputs is a no-op.
    pub fn run<S>(&mut self, store: &mut S, now: Duration) -> Step
    where
        S: ExpandStore<K> + ?Sized,
    {
        self.filter.observe(store.state());
        self.step(store, now)
    }

    /// Like [`HoverExpand::run`], but only when a policy input changed since the last update.
    ///
    /// Returns `None` for no-op state changes, leaving any pending expansion untouched.
    pub fn update<S>(&mut self, store: &mut S, now: Duration) -> Option<Step>
    where
        S: ExpandStore<K> + ?Sized,
    {
        if !self.filter.observe(store.state()) {
            return None;
        }
        Some(self.step(store, now))
    }

    /// Fire the pending expansion if it is due at `now`.
    ///
    /// A suppressed fire forgets the recorded inputs: the alert is not a tracked input, so the
    /// next [`HoverExpand::update`] re-evaluates and can reschedule once the alert clears.
    pub fn tick<S>(&mut self, store: &mut S, now: Duration) -> Option<Fired>
    where
        S: ExpandStore<K> + ?Sized,
    {
        let fired = self.debounce.poll(now, store);
        if matches!(fired, Some(Fired::Suppressed(_))) {
            self.filter.reset();
        }
        fired
    }

    fn step<S>(&mut self, store: &mut S, now: Duration) -> Step
    where
        S: ExpandStore<K> + ?Sized,
    {
        let state = store.state();
        if !state.drag_in_progress && state.expand_hover_top_path.is_some() {
            self.debounce.cancel();
            tracing::debug!("drag ended, collapsing hover expansion");
            store.dispatch(ExpandHoverTop::collapse());
            return Step::Collapsed;
        }

        match evaluate(state, &self.doc) {
            Decision::Reject(reason) => {
                self.debounce.cancel();
                tracing::trace!(?reason, "hover expansion not warranted");
                Step::Idle(reason)
            }
            Decision::Expand { target } => {
                tracing::debug!(?target, "scheduling hover expansion");
                Step::Scheduled(self.debounce.schedule(target, now))
            }
        }
    }

    /// Target of the pending expansion, if any.
    pub fn pending_target(&self) -> Option<Vec<K>> {
        self.debounce.pending_path().map(<[K]>::to_vec)
    }
}
