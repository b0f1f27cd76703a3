//! Virtual-clock timer scheduler.
//!
//! Screens request one-shot and repeating timers through the controller.
//! Every timer belongs to a [`MountToken`]; when a screen is torn down the
//! controller cancels everything its token owns, so a timer can never fire
//! against a later screen.
//!
//! The scheduler never reads the wall clock. The caller moves time forward
//! with [`Scheduler::pop_due`], which makes the whole thing deterministic
//! under test.

use std::time::Duration;

/// Identifies a single scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Identifies one mount of a screen. Timers are grouped by the token of the
/// mount that scheduled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MountToken(u64);

impl MountToken {
    /// The token following this one.
    pub fn next(self) -> Self {
        MountToken(self.0.wrapping_add(1))
    }
}

#[derive(Debug)]
struct Entry<K> {
    id: TimerId,
    owner: MountToken,
    due: Duration,
    period: Option<Duration>,
    kind: K,
}

/// A timer that has reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K> {
    pub id: TimerId,
    pub owner: MountToken,
    pub kind: K,
}

/// Deterministic scheduler of one-shot and repeating timers.
#[derive(Debug)]
pub struct Scheduler<K> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<K>>,
}

impl<K: Clone> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current scheduler time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still pending.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Number of timers pending for one owner.
    pub fn pending_for(&self, owner: MountToken) -> usize {
        self.entries.iter().filter(|e| e.owner == owner).count()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Fire `kind` once, `delay` from now.
    pub fn schedule_once(&mut self, owner: MountToken, delay: Duration, kind: K) -> TimerId {
        self.insert(owner, delay, None, kind)
    }

    /// Fire `kind` every `period`, starting one period from now.
    ///
    /// A zero period is bumped to one millisecond so the timer cannot starve
    /// the rest of the queue.
    pub fn schedule_repeating(&mut self, owner: MountToken, period: Duration, kind: K) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(owner, period, Some(period), kind)
    }

    fn insert(
        &mut self,
        owner: MountToken,
        delay: Duration,
        period: Option<Duration>,
        kind: K,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            owner,
            due: self.now + delay,
            period,
            kind,
        });
        id
    }

    /// Cancel one timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every timer belonging to `owner`, returning how many were removed.
    pub fn cancel_owner(&mut self, owner: MountToken) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.owner != owner);
        before - self.entries.len()
    }

    /// Pop the next timer due at or before `until`.
    ///
    /// Timers come out in deadline order, ties broken by scheduling order.
    /// The scheduler clock moves to the fired timer's deadline so anything
    /// scheduled while handling it is positioned relative to that deadline.
    /// Repeating timers are re-armed one period after their own deadline.
    /// Once nothing else is due the clock settles at `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<K>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.id.0))
            .map(|(idx, _)| idx);

        let Some(idx) = idx else {
            self.now = self.now.max(until);
            return None;
        };

        let entry = &mut self.entries[idx];
        self.now = self.now.max(entry.due);
        let fired = Fired {
            id: entry.id,
            owner: entry.owner,
            kind: entry.kind.clone(),
        };

        match entry.period {
            Some(period) => entry.due += period,
            None => {
                self.entries.swap_remove(idx);
            }
        }

        Some(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(scheduler: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(f) = scheduler.pop_due(until) {
            fired.push(f.kind);
        }
        fired
    }

    #[test]
    fn test_default_is_empty_at_zero() {
        let scheduler: Scheduler<&'static str> = Scheduler::default();
        assert_eq!(scheduler.now(), Duration::ZERO);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        let owner = MountToken::default();
        scheduler.schedule_once(owner, ms(300), "late");
        scheduler.schedule_once(owner, ms(100), "early");
        scheduler.schedule_once(owner, ms(100), "early-second");

        assert_eq!(
            drain(&mut scheduler, ms(1000)),
            vec!["early", "early-second", "late"]
        );
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), ms(1000));
    }

    #[test]
    fn test_nothing_fires_before_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(MountToken::default(), ms(500), "once");

        assert!(drain(&mut scheduler, ms(499)).is_empty());
        assert_eq!(drain(&mut scheduler, ms(500)), vec!["once"]);
    }

    #[test]
    fn test_repeating_rearms_from_its_deadline() {
        let mut scheduler = Scheduler::new();
        let owner = MountToken::default();
        scheduler.schedule_repeating(owner, ms(500), "tick");

        assert_eq!(drain(&mut scheduler, ms(1750)), vec!["tick", "tick", "tick"]);
        assert_eq!(scheduler.next_deadline(), Some(ms(2000)));
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_interleaves_repeating_and_once() {
        let mut scheduler = Scheduler::new();
        let owner = MountToken::default();
        scheduler.schedule_repeating(owner, ms(500), "dots");
        scheduler.schedule_once(owner, ms(1200), "done");

        assert_eq!(
            drain(&mut scheduler, ms(1600)),
            vec!["dots", "dots", "done", "dots"]
        );
    }

    #[test]
    fn test_cancel_by_id() {
        let mut scheduler = Scheduler::new();
        let owner = MountToken::default();
        let id = scheduler.schedule_repeating(owner, ms(50), "tick");
        scheduler.schedule_once(owner, ms(100), "keep");

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(drain(&mut scheduler, ms(200)), vec!["keep"]);
    }

    #[test]
    fn test_cancel_owner_leaves_other_owners() {
        let mut scheduler = Scheduler::new();
        let first = MountToken::default();
        let second = first.next();
        scheduler.schedule_once(first, ms(100), "first-a");
        scheduler.schedule_repeating(first, ms(10), "first-b");
        scheduler.schedule_once(second, ms(100), "second");

        assert_eq!(scheduler.cancel_owner(first), 2);
        assert_eq!(scheduler.pending_for(first), 0);
        assert_eq!(scheduler.pending_for(second), 1);
        assert_eq!(drain(&mut scheduler, ms(1000)), vec!["second"]);
    }

    #[test]
    fn test_schedule_during_handling_is_relative_to_deadline() {
        let mut scheduler = Scheduler::new();
        let owner = MountToken::default();
        scheduler.schedule_once(owner, ms(100), "first");

        // Handler runs late (caller advanced straight to 1000ms) but the
        // follow-up is still positioned from the 100ms deadline.
        let fired = scheduler.pop_due(ms(1000)).unwrap();
        assert_eq!(fired.kind, "first");
        assert_eq!(scheduler.now(), ms(100));
        scheduler.schedule_once(owner, ms(300), "follow-up");
        assert_eq!(scheduler.next_deadline(), Some(ms(400)));

        assert_eq!(drain(&mut scheduler, ms(1000)), vec!["follow-up"]);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(MountToken::default(), Duration::ZERO, "spin");

        assert_eq!(drain(&mut scheduler, ms(3)).len(), 3);
    }
}
