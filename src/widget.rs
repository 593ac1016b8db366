use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, TimerCallback, TimerHandle};
use crate::engine::reference::ReferenceDates;
use crate::engine::{DerivedState, compute_derived};
use crate::feed::{Feed, SubscriptionId};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Owns the repeating timer and the snapshot feed. The timer is held only
/// while mounted; dropping the widget unmounts it.
pub struct CountdownWidget<C: Clock> {
    refs: ReferenceDates,
    clock: C,
    timer: Option<TimerHandle>,
    feed: Feed<DerivedState>,
}

impl<C: Clock> CountdownWidget<C> {
    pub fn new(refs: ReferenceDates, clock: C) -> Self {
        Self {
            refs,
            clock,
            timer: None,
            feed: Feed::new(),
        }
    }

    pub fn references(&self) -> &ReferenceDates {
        &self.refs
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    /// Publish a snapshot for `now` right away, then start the timer. The
    /// callback runs on the clock's thread and should only signal the owner
    /// to call `tick`. Mounting twice keeps the first timer.
    pub fn mount(&mut self, now: DateTime<Utc>, on_tick: TimerCallback) -> Rc<DerivedState> {
        if self.timer.is_none() {
            self.timer = Some(self.clock.start(TICK_INTERVAL, on_tick));
            tracing::info!(interval_ms = TICK_INTERVAL.as_millis() as u64, "countdown mounted");
        }
        self.recompute(now)
    }

    /// Recompute for `now`. Does nothing once unmounted, so ticks still queued
    /// behind an unmount are dropped.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Rc<DerivedState>> {
        if !self.is_mounted() {
            return None;
        }
        Some(self.recompute(now))
    }

    pub fn unmount(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.clock.stop(handle);
            self.feed.clear();
            tracing::info!(ticks = self.feed.published(), "countdown unmounted");
        }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Rc<DerivedState>) + 'static) -> SubscriptionId {
        self.feed.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.feed.unsubscribe(id)
    }

    pub fn latest(&self) -> Option<Rc<DerivedState>> {
        self.feed.latest()
    }

    /// Snapshots published over the widget's lifetime.
    pub fn recomputations(&self) -> u64 {
        self.feed.published()
    }

    fn recompute(&mut self, now: DateTime<Utc>) -> Rc<DerivedState> {
        let derived = compute_derived(now, &self.refs);
        tracing::debug!(
            days = derived.countdown.remaining.days,
            current_day = derived.progress.current_day_index,
            complete = derived.countdown.complete,
            "tick"
        );
        self.feed.publish(derived)
    }
}

impl<C: Clock> Drop for CountdownWidget<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
