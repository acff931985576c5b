use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Repeating timer capability owned by the engine.
///
/// A handle returned by `schedule_repeating` stays active until cancelled.
/// The host polls `take_fired` to learn how many whole periods elapsed for
/// that handle since the previous poll; each one is delivered as its own tick.
pub trait Scheduler {
    type Handle: Copy + Eq + Debug;

    /// Establish a repeating timer firing once per `period`
    fn schedule_repeating(&mut self, period: Duration) -> Self::Handle;

    /// Cancel a handle. Unknown handles are ignored.
    fn cancel(&mut self, handle: Self::Handle);

    /// Drain the number of periods elapsed for `handle` since the last call
    fn take_fired(&mut self, handle: Self::Handle) -> u32;
}

/// Identifier of a wall-clock interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalId(u64);

#[derive(Debug)]
struct Interval {
    id: IntervalId,
    period: Duration,
    next_due: Instant,
}

/// Wall-clock scheduler backed by `Instant`.
///
/// Deadlines advance by exactly one period per fire, so a slow host loop
/// catches up with individual ticks instead of drifting.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    next_id: u64,
    intervals: Vec<Interval>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn schedule_at(&mut self, period: Duration, now: Instant) -> IntervalId {
        let period = period.max(Duration::from_millis(1));
        let id = IntervalId(self.next_id);
        self.next_id += 1;
        self.intervals.push(Interval {
            id,
            period,
            next_due: now + period,
        });
        id
    }

    fn take_fired_at(&mut self, handle: IntervalId, now: Instant) -> u32 {
        let Some(interval) = self.intervals.iter_mut().find(|i| i.id == handle) else {
            return 0;
        };

        let mut fired = 0;
        while now >= interval.next_due {
            fired += 1;
            interval.next_due += interval.period;
        }
        fired
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalId;

    fn schedule_repeating(&mut self, period: Duration) -> IntervalId {
        self.schedule_at(period, Instant::now())
    }

    fn cancel(&mut self, handle: IntervalId) {
        self.intervals.retain(|i| i.id != handle);
    }

    fn take_fired(&mut self, handle: IntervalId) -> u32 {
        self.take_fired_at(handle, Instant::now())
    }
}

/// Virtual-time scheduler for tests: time only moves on `advance`.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    // (handle, period, accumulated virtual time, fires not yet taken)
    active: Vec<(u64, Duration, Duration, u32)>,
    scheduled: usize,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward; every active handle accrues its fires
    pub fn advance(&mut self, by: Duration) {
        for (_, period, elapsed, pending) in self.active.iter_mut() {
            *elapsed += by;
            while *elapsed >= *period {
                *elapsed -= *period;
                *pending += 1;
            }
        }
    }

    pub fn advance_secs(&mut self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }

    /// Handles scheduled and not yet cancelled
    pub fn active_handles(&self) -> usize {
        self.active.len()
    }

    /// Total `schedule_repeating` calls over the scheduler's lifetime
    pub fn schedule_count(&self) -> usize {
        self.scheduled
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule_repeating(&mut self, period: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.scheduled += 1;
        self.active
            .push((id, period.max(Duration::from_millis(1)), Duration::ZERO, 0));
        id
    }

    fn cancel(&mut self, handle: u64) {
        self.active.retain(|(id, ..)| *id != handle);
    }

    fn take_fired(&mut self, handle: u64) -> u32 {
        self.active
            .iter_mut()
            .find(|(id, ..)| *id == handle)
            .map(|(_, _, _, pending)| std::mem::take(pending))
            .unwrap_or(0)
    }
}
