use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Timer signals delivered back to the room that started them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Countdown shows this many steps remaining.
    Tick(u32),
    /// Countdown reached zero.
    Elapsed,
    /// The result has been on display long enough.
    Dwelled,
}

/// Fixed-length countdown: shows `from`, `from - 1`, ..., 1, one `step`
/// apart, then elapses one step after showing 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    from: u32,
    step: Duration,
}

impl Countdown {
    pub fn new(from: u32, step: Duration) -> Self {
        Self { from, step }
    }
    /// Values shown, in order.
    pub fn steps(&self) -> impl Iterator<Item = u32> + use<> {
        (1..=self.from).rev()
    }
    pub fn duration(&self) -> Duration {
        self.step * self.from
    }
    /// Runs to completion on its own task; there is no way to cancel it.
    pub fn spawn(self, signals: UnboundedSender<Signal>) {
        tokio::spawn(async move {
            for remaining in self.steps() {
                if signals.send(Signal::Tick(remaining)).is_err() {
                    return;
                }
                tokio::time::sleep(self.step).await;
            }
            let _ = signals.send(Signal::Elapsed);
        });
    }
}

/// Sends `Dwelled` once `dwell` has passed.
pub fn dwell(dwell: Duration, signals: UnboundedSender<Signal>) {
    tokio::spawn(async move {
        tokio::time::sleep(dwell).await;
        let _ = signals.send(Signal::Dwelled);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_one() {
        let countdown = Countdown::new(3, Duration::from_secs(1));
        assert_eq!(countdown.steps().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(countdown.duration(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_then_elapses() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();
        Countdown::new(2, Duration::from_millis(500)).spawn(tx);
        assert_eq!(rx.recv().await, Some(Signal::Tick(2)));
        assert_eq!(rx.recv().await, Some(Signal::Tick(1)));
        assert_eq!(rx.recv().await, Some(Signal::Elapsed));
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert!(start.elapsed() < Duration::from_millis(1100));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_elapses_immediately() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        Countdown::new(0, Duration::from_secs(1)).spawn(tx);
        assert_eq!(rx.recv().await, Some(Signal::Elapsed));
    }
}
