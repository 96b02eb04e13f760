//! Cancellable-timer scheduler for the widget's cooperative deferrals.
//!
//! All timer work (scan retries, the debounced rebuild, the chart mount)
//! goes through one scheduler with one pending deadline per slot. Arming a
//! slot replaces any pending deadline for it, so there is never a queue of
//! duplicate passes. The host drives timers by calling the widget's `tick`.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Time source. Injected so timer behavior is testable without wall-clock
/// waits.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests. Clones share the same time.
#[derive(Clone)]
pub struct FakeClock {
    now: Rc<Cell<Instant>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// The widget's deferral timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Re-probe a preview that had no scorable content.
    ScanRetry,
    /// Debounced annotation rebuild.
    Rebuild,
    /// Deferred chart and summary mount.
    ChartMount,
}

pub struct Scheduler {
    clock: Box<dyn Clock>,
    pending: HashMap<TimerSlot, Instant>,
}

impl Scheduler {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            pending: HashMap::new(),
        }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemClock))
    }

    /// Arm a slot. Any pending deadline for the slot is cancelled first;
    /// last write wins.
    pub fn schedule(&mut self, slot: TimerSlot, delay: Duration) {
        let deadline = self.clock.now() + delay;
        self.pending.insert(slot, deadline);
    }

    pub fn cancel(&mut self, slot: TimerSlot) -> bool {
        self.pending.remove(&slot).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, slot: TimerSlot) -> bool {
        self.pending.contains_key(&slot)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drain and return the slots whose deadline has passed, earliest first.
    pub fn fire_due(&mut self) -> Vec<TimerSlot> {
        let now = self.clock.now();
        let mut due: Vec<(TimerSlot, Instant)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(slot, deadline)| (*slot, *deadline))
            .collect();
        due.sort_by_key(|(_, deadline)| *deadline);
        for (slot, _) in &due {
            self.pending.remove(slot);
        }
        due.into_iter().map(|(slot, _)| slot).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_scheduler() -> (Scheduler, FakeClock) {
        let clock = FakeClock::new();
        (Scheduler::new(Box::new(clock.clone())), clock)
    }

    #[test]
    fn test_timer_fires_only_after_its_delay() {
        let (mut scheduler, clock) = fake_scheduler();
        scheduler.schedule(TimerSlot::ScanRetry, Duration::from_millis(500));

        clock.advance(Duration::from_millis(499));
        assert!(scheduler.fire_due().is_empty());
        assert!(scheduler.is_pending(TimerSlot::ScanRetry));

        clock.advance(Duration::from_millis(1));
        assert_eq!(scheduler.fire_due(), vec![TimerSlot::ScanRetry]);
        assert!(!scheduler.is_pending(TimerSlot::ScanRetry));
    }

    #[test]
    fn test_reschedule_replaces_pending_deadline() {
        let (mut scheduler, clock) = fake_scheduler();
        scheduler.schedule(TimerSlot::Rebuild, Duration::from_millis(500));
        clock.advance(Duration::from_millis(400));
        // debounce: a second signal resets the window
        scheduler.schedule(TimerSlot::Rebuild, Duration::from_millis(500));

        clock.advance(Duration::from_millis(400));
        assert!(scheduler.fire_due().is_empty());

        clock.advance(Duration::from_millis(100));
        assert_eq!(scheduler.fire_due(), vec![TimerSlot::Rebuild]);
    }

    #[test]
    fn test_cancel() {
        let (mut scheduler, clock) = fake_scheduler();
        scheduler.schedule(TimerSlot::ChartMount, Duration::from_millis(200));
        assert!(scheduler.cancel(TimerSlot::ChartMount));
        assert!(!scheduler.cancel(TimerSlot::ChartMount));
        clock.advance(Duration::from_millis(500));
        assert!(scheduler.fire_due().is_empty());
    }

    #[test]
    fn test_due_timers_fire_earliest_first() {
        let (mut scheduler, clock) = fake_scheduler();
        scheduler.schedule(TimerSlot::ChartMount, Duration::from_millis(200));
        scheduler.schedule(TimerSlot::Rebuild, Duration::from_millis(100));
        clock.advance(Duration::from_millis(300));
        assert_eq!(
            scheduler.fire_due(),
            vec![TimerSlot::Rebuild, TimerSlot::ChartMount]
        );
    }

    #[test]
    fn test_cancel_all() {
        let (mut scheduler, _clock) = fake_scheduler();
        scheduler.schedule(TimerSlot::ScanRetry, Duration::from_millis(100));
        scheduler.schedule(TimerSlot::Rebuild, Duration::from_millis(100));
        assert_eq!(scheduler.pending_count(), 2);
        scheduler.cancel_all();
        assert_eq!(scheduler.pending_count(), 0);
    }
}
