//! Self-expiring feedback line.
//!
//! The [`Notifier`] lives on the UI thread. Its timer runs elsewhere and
//! reports expiry as an [`Expired`] message which the UI thread hands back to
//! [`Notifier::expire`]. Every post bumps a generation counter, so an expiry
//! that was already in flight when a newer message was posted is ignored.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How long a message stays visible unless replaced.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Sent by a timer when the message of `generation` should be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub generation: u64,
}

/// A restartable one-shot timer.
pub trait FeedbackTimer {
    /// Arm the timer while idle.
    fn start(&mut self, after: Duration, generation: u64);

    /// Replace a pending deadline with a new one.
    fn reset(&mut self, after: Duration, generation: u64);

    /// Disarm without firing.
    fn cancel(&mut self);
}

/// Single-slot status message with automatic expiry.
pub struct Notifier {
    message: String,
    generation: u64,
    pending: bool,
    timeout: Duration,
    timer: Box<dyn FeedbackTimer>,
}

impl Notifier {
    pub fn new(timer: Box<dyn FeedbackTimer>, timeout: Duration) -> Self {
        Self {
            message: String::new(),
            generation: 0,
            pending: false,
            timeout,
            timer,
        }
    }

    /// Show `message` and restart the expiry countdown.
    pub fn post(&mut self, message: impl Into<String>) {
        self.generation += 1;
        self.message = message.into();
        if self.pending {
            self.timer.reset(self.timeout, self.generation);
        } else {
            self.timer.start(self.timeout, self.generation);
        }
        self.pending = true;
    }

    /// Clear the message if `expired` belongs to the latest post.
    ///
    /// Returns whether the message was cleared.
    pub fn expire(&mut self, expired: Expired) -> bool {
        if !self.pending || expired.generation != self.generation {
            tracing::trace!("Dropping stale feedback expiry {}", expired.generation);
            return false;
        }
        self.message.clear();
        self.pending = false;
        true
    }

    /// Drop the current message right away.
    pub fn dismiss(&mut self) {
        if self.pending {
            self.timer.cancel();
        }
        self.message.clear();
        self.pending = false;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

enum TimerCommand {
    Arm { after: Duration, generation: u64 },
    Cancel,
}

/// Timer backed by one worker thread.
///
/// The worker exits once the `ThreadTimer` is dropped. It is never joined.
pub struct ThreadTimer {
    commands: Sender<TimerCommand>,
}

impl ThreadTimer {
    /// Spawn the worker. Expiries are delivered on `expired`.
    pub fn spawn(expired: Sender<Expired>) -> std::io::Result<Self> {
        let (commands, rx) = mpsc::channel();
        thread::Builder::new()
            .name("feedback-timer".to_string())
            .spawn(move || run_timer(rx, expired))?;
        Ok(Self { commands })
    }

    fn send(&self, command: TimerCommand) {
        if self.commands.send(command).is_err() {
            tracing::warn!("Feedback timer thread is gone");
        }
    }
}

impl FeedbackTimer for ThreadTimer {
    fn start(&mut self, after: Duration, generation: u64) {
        self.send(TimerCommand::Arm { after, generation });
    }

    fn reset(&mut self, after: Duration, generation: u64) {
        self.send(TimerCommand::Arm { after, generation });
    }

    fn cancel(&mut self) {
        self.send(TimerCommand::Cancel);
    }
}

fn run_timer(commands: Receiver<TimerCommand>, expired: Sender<Expired>) {
    let mut pending: Option<(Instant, u64)> = None;
    loop {
        let command = match pending {
            Some((deadline, generation)) => {
                let now = Instant::now();
                if now >= deadline {
                    pending = None;
                    if expired.send(Expired { generation }).is_err() {
                        return;
                    }
                    continue;
                }
                match commands.recv_timeout(deadline - now) {
                    Ok(command) => command,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
            None => match commands.recv() {
                Ok(command) => command,
                Err(_) => return,
            },
        };

        pending = match command {
            TimerCommand::Arm { after, generation } => Some((Instant::now() + after, generation)),
            TimerCommand::Cancel => None,
        };
    }
}
