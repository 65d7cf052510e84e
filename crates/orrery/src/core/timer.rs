/// Deferred payloads for a single-threaded, frame-driven event loop.
///
/// Nothing blocks: the host advances the clock once per frame and collects
/// whatever came due. Entries are never cancelled; whoever consumes a payload
/// must check that it still applies.
pub struct TimerQueue<T> {
    /// Seconds since the queue was created.
    now: f64,
    /// Pending entries as (deadline, payload), unsorted.
    pending: Vec<(f64, T)>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            pending: Vec::new(),
        }
    }

    /// Queue `payload` to come due `delay_secs` from now.
    pub fn schedule(&mut self, delay_secs: f32, payload: T) {
        let deadline = self.now + f64::from(delay_secs.max(0.0));
        self.pending.push((deadline, payload));
    }

    /// Advance the clock by `dt` seconds. Returns due payloads, earliest first.
    pub fn advance(&mut self, dt: f32) -> Vec<T> {
        self.now += f64::from(dt.max(0.0));
        let now = self.now;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].0 <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, payload)| payload).collect()
    }

    /// Seconds elapsed on this queue's clock.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
