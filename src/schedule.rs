//! Explicit timer queue. The core never reads a clock; callers pass `now`
//! into every entry point and drain due commands through `tick`, so pacing
//! timers become ordinary data. Starting a new minigame round cancels the
//! previous round's pending timeout, which keeps stale callbacks from firing
//! into the new round's state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// The minigame round identified by the token ran out of time.
    RoundTimeout,
}

struct Entry {
    at_ms: f64,
    token: TimerToken,
    command: Command,
}

#[derive(Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn schedule(&mut self, at_ms: f64, token: TimerToken, command: Command) {
        self.entries.push(Entry {
            at_ms,
            token,
            command,
        });
    }

    pub fn cancel(&mut self, token: TimerToken) {
        self.entries.retain(|e| e.token != token);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes and returns every command whose deadline has passed.
    pub fn due(&mut self, now_ms: f64) -> Vec<(TimerToken, Command)> {
        let mut fired = Vec::new();
        self.entries.retain(|e| {
            if e.at_ms <= now_ms {
                fired.push((e.token, e.command));
                false
            } else {
                true
            }
        });
        fired
    }

    /// Earliest pending deadline, so the embedder knows when to call `tick`.
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.at_ms).reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_fires_once_and_removes_entries() {
        let mut q = TimerQueue::new();
        q.schedule(100.0, TimerToken(1), Command::RoundTimeout);
        q.schedule(200.0, TimerToken(2), Command::RoundTimeout);
        assert_eq!(q.due(50.0).len(), 0);
        let fired = q.due(150.0);
        assert_eq!(fired, vec![(TimerToken(1), Command::RoundTimeout)]);
        assert_eq!(q.due(150.0).len(), 0);
        assert_eq!(q.next_deadline(), Some(200.0));
    }

    #[test]
    fn cancel_removes_pending_timer() {
        let mut q = TimerQueue::new();
        q.schedule(100.0, TimerToken(7), Command::RoundTimeout);
        q.cancel(TimerToken(7));
        assert!(q.due(1_000.0).is_empty());
        assert_eq!(q.next_deadline(), None);
    }
}
