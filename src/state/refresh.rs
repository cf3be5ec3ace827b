//! Countdown-driven auto-refresh.
//!
//! An [`AutoRefresh`] owns a background task that ticks once a second,
//! decrementing an observable countdown. At zero it awaits the configured
//! callback (typically a [`Query::refetch`](super::Query::refetch)) and
//! re-arms to the configured interval. The task is aborted when the handle
//! drops, so the timer can never outlive its owner.
//!
//! ```rust,ignore
//! let q = query.clone();
//! let refresh = AutoRefresh::start(60, move || {
//!     let q = q.clone();
//!     async move { q.refetch().await }
//! });
//! // selector changed: re-arm to the full configured interval
//! refresh.reset();
//! ```

use futures_util::future::BoxFuture;
use std::future::Future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

enum Command {
    Reset,
    SetInterval(Option<u64>),
}

type RefreshFn = Box<dyn FnMut() -> BoxFuture<'static, ()> + Send>;

/// Handle to a running auto-refresh timer.
pub struct AutoRefresh {
    cmd_tx: mpsc::Sender<Command>,
    countdown_rx: watch::Receiver<u64>,
    task_handle: JoinHandle<()>,
}

impl AutoRefresh {
    /// Start a timer firing `on_fire` every `interval_secs` seconds.
    ///
    /// An interval of `0` creates the timer suspended; arm it later with
    /// [`AutoRefresh::set_interval`]. Must be called within a Tokio runtime.
    pub fn start<F, Fut>(interval_secs: u64, mut on_fire: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let interval = (interval_secs > 0).then_some(interval_secs);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (countdown_tx, countdown_rx) = watch::channel(interval.unwrap_or(0));

        let state = TimerState {
            interval,
            countdown_tx,
            cmd_rx,
            on_fire: Box::new(move || Box::pin(on_fire())),
        };
        let task_handle = tokio::spawn(run_timer(state));

        Self {
            cmd_tx,
            countdown_rx,
            task_handle,
        }
    }

    /// Seconds until the next fire (`0` while suspended).
    pub fn countdown(&self) -> u64 {
        *self.countdown_rx.borrow()
    }

    /// Subscribe to countdown ticks.
    pub fn watch_countdown(&self) -> watch::Receiver<u64> {
        self.countdown_rx.clone()
    }

    /// Re-arm the countdown to the configured interval immediately,
    /// even mid-countdown.
    pub fn reset(&self) {
        let _ = self.cmd_tx.try_send(Command::Reset);
    }

    /// Change the interval. `None` or `Some(0)` suspends ticking; a
    /// positive value re-arms the countdown to the new interval.
    pub fn set_interval(&self, interval_secs: Option<u64>) {
        let _ = self.cmd_tx.try_send(Command::SetInterval(interval_secs));
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.task_handle.abort();
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

struct TimerState {
    interval: Option<u64>,
    countdown_tx: watch::Sender<u64>,
    cmd_rx: mpsc::Receiver<Command>,
    on_fire: RefreshFn,
}

async fn run_timer(state: TimerState) {
    let TimerState {
        mut interval,
        countdown_tx,
        mut cmd_rx,
        mut on_fire,
    } = state;

    let mut tick = tokio::time::interval(Duration::from_secs(1));
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tick.reset(); // skip the immediate first tick

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(Command::Reset) => {
                        countdown_tx.send_replace(interval.unwrap_or(0));
                    }
                    Some(Command::SetInterval(new)) => {
                        interval = new.filter(|i| *i > 0);
                        countdown_tx.send_replace(interval.unwrap_or(0));
                        tick.reset();
                    }
                    // All handles gone.
                    None => return,
                }
            }
            _ = tick.tick() => {
                let Some(secs) = interval else { continue };
                let remaining = *countdown_tx.borrow();
                if remaining <= 1 {
                    (on_fire)().await;
                    countdown_tx.send_replace(secs);
                } else {
                    countdown_tx.send_replace(remaining - 1);
                }
            }
        }
    }
}
