//! Reminder timer implementation.
//!
//! One dedicated thread waits on a stop channel with a timeout equal to the
//! reminder period. A timeout means "fire"; a message or a disconnected
//! channel means "stop". Stopping is therefore observed immediately rather
//! than on the next polling tick.
//!
//! ```ignore
//! let handle = ReminderTimer::new("Ada", 20).spawn()?;
//! // ... interactive loop ...
//! handle.stop();
//! ```

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::Timelike;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use super::message::Reminder;
use crate::content;
use crate::error::Result;

/// Where rendered reminders go.
pub trait ReminderSink: Send + 'static {
    fn deliver(&self, text: &str);
}

/// Prints reminders to stdout, interleaved with the interactive prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReminderSink for StdoutSink {
    fn deliver(&self, text: &str) {
        println!("{text}");
    }
}

impl<F> ReminderSink for F
where
    F: Fn(&str) + Send + 'static,
{
    fn deliver(&self, text: &str) {
        self(text)
    }
}

/// Current local wall-clock hour (0-23).
pub fn local_hour() -> u32 {
    chrono::Local::now().hour()
}

pub struct ReminderTimer {
    user_name: String,
    period: Duration,
    clock: Box<dyn Fn() -> u32 + Send>,
    sink: Box<dyn ReminderSink>,
    seed: Option<u64>,
}

impl ReminderTimer {
    /// Fires every `interval_minutes`, reading the local clock and printing
    /// to stdout.
    pub fn new(user_name: impl Into<String>, interval_minutes: u32) -> Self {
        Self {
            user_name: user_name.into(),
            period: Duration::from_secs(u64::from(interval_minutes) * 60),
            clock: Box::new(local_hour),
            sink: Box::new(StdoutSink),
            seed: None,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> u32 + Send + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_sink(mut self, sink: impl ReminderSink) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start firing on a background thread.
    pub fn spawn(self) -> Result<ReminderHandle> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let ReminderTimer {
            user_name,
            period,
            clock,
            sink,
            seed,
        } = self;

        tracing::info!(period_secs = period.as_secs(), "starting reminder timer");
        let thread = std::thread::Builder::new()
            .name("reminder".into())
            .spawn(move || {
                let mut rng = match seed {
                    Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
                    None => Mcg128Xsl64::from_entropy(),
                };
                let mut fired = 0u64;
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => {
                            let hour = clock();
                            let reminder = Reminder::for_hour(hour, content::random_tip(&mut rng));
                            tracing::debug!(hour, ?reminder, "reminder fired");
                            sink.deliver(&reminder.render(&user_name));
                            fired += 1;
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::debug!(fired, "reminder timer stopped");
                fired
            })?;

        Ok(ReminderHandle {
            stop_tx: Some(stop_tx),
            thread: Some(thread),
        })
    }
}

/// Owner of a running reminder thread.
///
/// Dropping the handle signals the thread to stop without waiting for it.
#[derive(Debug)]
pub struct ReminderHandle {
    stop_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<u64>>,
}

impl ReminderHandle {
    /// Stop the timer and wait for the thread. Returns how many reminders fired.
    pub fn stop(mut self) -> u64 {
        self.stop_tx.take();
        self.thread
            .take()
            .and_then(|thread| thread.join().ok())
            .unwrap_or(0)
    }
}

impl Drop for ReminderHandle {
    fn drop(&mut self) {
        self.stop_tx.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Instant;

    fn collector() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        (seen, move |text: &str| sink_seen.lock().push(text.to_string()))
    }

    #[test]
    fn period_follows_interval_minutes() {
        assert_eq!(ReminderTimer::new("Ada", 5).period(), Duration::from_secs(300));
    }

    #[test]
    fn fires_repeatedly_until_stopped() {
        let (seen, sink) = collector();
        let handle = ReminderTimer::new("Ada", 1)
            .with_period(Duration::from_millis(20))
            .with_clock(|| 10)
            .with_sink(sink)
            .with_seed(1)
            .spawn()
            .unwrap();

        std::thread::sleep(Duration::from_millis(150));
        let fired = handle.stop();

        let seen = seen.lock();
        assert!(fired >= 2, "fired {fired}");
        assert_eq!(seen.len() as u64, fired);
        assert!(seen.iter().all(|m| m.contains("Ada, mindful moment alert!")));
    }

    #[test]
    fn night_hours_send_night_message() {
        let (seen, sink) = collector();
        let handle = ReminderTimer::new("Ada", 1)
            .with_period(Duration::from_millis(10))
            .with_clock(|| 23)
            .with_sink(sink)
            .spawn()
            .unwrap();

        std::thread::sleep(Duration::from_millis(60));
        handle.stop();
        let seen = seen.lock();
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|m| m.contains("time for digital sunset")));
    }

    #[test]
    fn stop_is_prompt_and_final() {
        let (seen, sink) = collector();
        let handle = ReminderTimer::new("Ada", 60)
            .with_sink(sink)
            .spawn()
            .unwrap();

        let started = Instant::now();
        assert_eq!(handle.stop(), 0);
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn dropping_handle_stops_timer() {
        let (seen, sink) = collector();
        let handle = ReminderTimer::new("Ada", 1)
            .with_period(Duration::from_millis(10))
            .with_sink(sink)
            .spawn()
            .unwrap();
        drop(handle);

        std::thread::sleep(Duration::from_millis(50));
        let count = seen.lock().len();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(seen.lock().len(), count);
    }
}
