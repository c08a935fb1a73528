//! Timers for the simulation's timed processes
//!
//! Each logical process owns exactly one timer slot. Arming a slot replaces
//! whatever was pending there, so a process can never have two timers in
//! flight (no stacked pursuit updates, no two movement repeaters).

use crate::Millis;
use crate::consts::MIN_TIMER_INTERVAL_MS;

/// A logical timed process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Process {
    /// Repeats a movement step while a direction is held
    Movement,
    /// Periodic enemy spawn
    Spawn,
    /// Debounced enemy pursuit step
    Pursuit,
    /// Puts the sword away after a swing
    AttackEnd,
}

impl Process {
    pub const ALL: [Process; 4] = [
        Process::Movement,
        Process::Spawn,
        Process::Pursuit,
        Process::AttackEnd,
    ];

    fn slot(self) -> usize {
        match self {
            Process::Movement => 0,
            Process::Spawn => 1,
            Process::Pursuit => 2,
            Process::AttackEnd => 3,
        }
    }
}

/// A pending timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    /// Virtual time at which it fires
    pub due: Millis,
    /// `Some` for repeating timers
    pub interval: Option<Millis>,
    /// Arming order, breaks ties between equal deadlines
    seq: u64,
}

/// One timer slot per process
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    slots: [Option<Timer>; 4],
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a repeating timer; first firing after one interval
    pub fn start_repeating(&mut self, process: Process, now: Millis, interval: Millis) {
        let interval = interval.max(MIN_TIMER_INTERVAL_MS);
        self.arm(process, now.saturating_add(interval), Some(interval));
    }

    /// Arm a one-shot timer, cancelling any pending one for the same process
    pub fn arm_once(&mut self, process: Process, now: Millis, delay: Millis) {
        let delay = delay.max(MIN_TIMER_INTERVAL_MS);
        self.arm(process, now.saturating_add(delay), None);
    }

    fn arm(&mut self, process: Process, due: Millis, interval: Option<Millis>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[process.slot()] = Some(Timer { due, interval, seq });
    }

    /// Cancel a process's timer. Returns whether one was pending.
    pub fn stop(&mut self, process: Process) -> bool {
        self.slots[process.slot()].take().is_some()
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        self.slots = [None; 4];
    }

    pub fn is_active(&self, process: Process) -> bool {
        self.slots[process.slot()].is_some()
    }

    pub fn timer(&self, process: Process) -> Option<Timer> {
        self.slots[process.slot()]
    }

    /// Earliest timer due at or before `until` (ties go to the earliest armed)
    pub fn next_due(&self, until: Millis) -> Option<(Process, Millis)> {
        Process::ALL
            .iter()
            .filter_map(|&p| self.timer(p).map(|t| (p, t)))
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(p, t)| (p, t.due))
    }

    /// Consume a due timer. Repeating timers are re-armed one interval later
    /// before the caller runs the process, so the process may still stop itself.
    /// A repeat that would land past the end of time is dropped.
    pub fn fire(&mut self, process: Process) -> Option<Timer> {
        let timer = self.slots[process.slot()].take()?;
        if let Some(interval) = timer.interval {
            match timer.due.checked_add(interval) {
                Some(due) => self.arm(process, due, Some(interval)),
                None => log::warn!("{:?} timer ran off the end of the clock", process),
            }
        }
        Some(timer)
    }
}
