/// Fixed-rate timer driven by an injected clock.
///
/// The timer never reads wall-clock time.  Owners advance their own clock
/// and ask the timer whether it is due, which keeps every game loop
/// deterministic under test.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedTimer {
    period_ms: u64,
    /// Absolute clock time of the next event.  `None` once disarmed.
    next_due_ms: Option<u64>,
}

impl FixedTimer {
    /// Armed timer whose first event lands one period after `now_ms`.
    /// A zero period is treated as 1 ms.
    pub fn armed(period_ms: u64, now_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: Some(now_ms + period_ms),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Time of the next event, if armed.
    pub fn next_due(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Whether an event is due at or before `now_ms`.
    pub fn is_due(&self, now_ms: u64) -> bool {
        matches!(self.next_due_ms, Some(due) if due <= now_ms)
    }

    /// Consume one due event and schedule the next one.
    pub fn advance(&mut self) {
        if let Some(due) = self.next_due_ms.as_mut() {
            *due += self.period_ms;
        }
    }

    /// Drop every event due at or before `now_ms` without firing it.
    /// Returns the number skipped.
    pub fn skip_to(&mut self, now_ms: u64) -> u64 {
        match self.next_due_ms {
            Some(due) if due <= now_ms => {
                let missed = (now_ms - due) / self.period_ms + 1;
                self.next_due_ms = Some(due + missed * self.period_ms);
                missed
            }
            _ => 0,
        }
    }

    pub fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    pub fn rearm(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }
}
