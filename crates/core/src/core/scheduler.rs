//! Timer abstraction for the simulated delays.
//!
//! The storefront never sleeps. It hands a [`ScheduledTask`] and a delay to a
//! [`Scheduler`]; the host delivers the task back through
//! [`crate::storefront::Storefront::fire`] once the delay has elapsed.
//! Hosts: a tokio timer in the terminal shell, `setTimeout` in the browser,
//! and [`ManualScheduler`] for deterministic tests.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Simulated wallet handshake finished.
    CompleteWalletConnect,
    /// Simulated purchase processing finished.
    CompletePurchase,
    /// Notification `id` reached the end of its lifetime.
    ExpireNotification(u64),
    /// Follow-up notice after opening the collection.
    CollectionNotice,
    /// Periodic listing price refresh.
    PriceTick,
}

pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask);
}

/// Virtual-time scheduler. Tasks fire only when the clock is advanced.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, ScheduledTask)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_scheduled(&self, task: &ScheduledTask) -> bool {
        self.pending.iter().any(|(_, _, t)| t == task)
    }

    /// Pop the earliest task due at or before `until` (ties in scheduling
    /// order) and move the clock to its due time, so anything scheduled while
    /// it fires is timed from that instant.
    pub fn next_due(&mut self, until: Duration) -> Option<ScheduledTask> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (at, _, _))| *at <= until)
            .min_by_key(|(_, (at, seq, _))| (*at, *seq))
            .map(|(i, _)| i)?;
        let (at, _, task) = self.pending.swap_remove(idx);
        self.now = self.now.max(at);
        Some(task)
    }

    /// Move the clock forward to `until` once nothing more is due.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        self.seq += 1;
        self.pending.push((self.now + delay, self.seq, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut ManualScheduler, until: Duration) -> Vec<ScheduledTask> {
        let mut out = Vec::new();
        while let Some(task) = s.next_due(until) {
            out.push(task);
        }
        s.settle(until);
        out
    }

    #[test]
    fn tasks_fire_in_due_order() {
        let mut s = ManualScheduler::new();
        s.schedule(Duration::from_millis(3000), ScheduledTask::CompletePurchase);
        s.schedule(Duration::from_millis(1000), ScheduledTask::CompleteWalletConnect);
        s.schedule(Duration::from_millis(1000), ScheduledTask::CollectionNotice);

        assert!(drain(&mut s, Duration::from_millis(999)).is_empty());
        assert_eq!(
            drain(&mut s, Duration::from_millis(1000)),
            vec![
                ScheduledTask::CompleteWalletConnect,
                ScheduledTask::CollectionNotice
            ]
        );
        assert_eq!(s.pending(), 1);
        assert_eq!(
            drain(&mut s, Duration::from_secs(6)),
            vec![ScheduledTask::CompletePurchase]
        );
        assert_eq!(s.now(), Duration::from_millis(6000));
    }

    #[test]
    fn clock_stops_at_each_due_task() {
        let mut s = ManualScheduler::new();
        s.schedule(Duration::from_secs(10), ScheduledTask::PriceTick);

        let until = Duration::from_secs(25);
        assert_eq!(s.next_due(until), Some(ScheduledTask::PriceTick));
        assert_eq!(s.now(), Duration::from_secs(10));

        // Rescheduled from the firing instant, so it is still inside the window.
        s.schedule(Duration::from_secs(10), ScheduledTask::PriceTick);
        assert_eq!(s.next_due(until), Some(ScheduledTask::PriceTick));
        assert_eq!(s.now(), Duration::from_secs(20));

        s.schedule(Duration::from_secs(10), ScheduledTask::PriceTick);
        assert_eq!(s.next_due(until), None);
        s.settle(until);
        assert_eq!(s.now(), until);
    }
}
