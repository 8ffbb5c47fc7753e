//! Cancellable retry scheduling.
//!
//! A scheduled retry is a [`RetryTicket`] delivered after a delay. Scheduling
//! again or cancelling drops the previous ticket. The session also stamps
//! tickets with a request epoch, so a ticket that was already delivered for a
//! superseded request is ignored.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one scheduled regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetryTicket {
    /// Request the retry belongs to.
    pub epoch: u64,
    /// Failed validations that led to it.
    pub attempt: u32,
}

/// Something that can deliver a ticket later.
pub trait RetryScheduler {
    /// Deliver `ticket` after `delay`, replacing any pending ticket.
    fn schedule(&mut self, ticket: RetryTicket, delay: Duration);

    /// Drop the pending ticket, if any.
    fn cancel(&mut self);
}

/// Tokio-backed scheduler.
///
/// Tickets arrive on the receiver returned by [`RetryTimer::new`]. Must be
/// used from within a tokio runtime.
#[derive(Debug)]
pub struct RetryTimer {
    tx: mpsc::UnboundedSender<RetryTicket>,
    pending: Option<JoinHandle<()>>,
}

impl RetryTimer {
    /// Create a timer and the receiver its tickets arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RetryTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, pending: None }, rx)
    }

    /// Whether a ticket is still waiting to be delivered.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl RetryScheduler for RetryTimer {
    fn schedule(&mut self, ticket: RetryTicket, delay: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means nobody is waiting any more
            let _ = tx.send(ticket);
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for RetryTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Scheduler that only records tickets.
///
/// The caller decides when a ticket is due and feeds it back to the session.
/// Useful for synchronous hosts and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Option<(RetryTicket, Duration)>,
    scheduled: usize,
    cancelled: usize,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending ticket, as if its delay elapsed.
    pub fn fire(&mut self) -> Option<RetryTicket> {
        self.pending.take().map(|(ticket, _)| ticket)
    }

    /// The pending ticket and its delay.
    #[must_use]
    pub fn pending(&self) -> Option<(RetryTicket, Duration)> {
        self.pending
    }

    /// Tickets scheduled so far.
    #[must_use]
    pub const fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Pending tickets dropped by a cancel.
    #[must_use]
    pub const fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl RetryScheduler for ManualScheduler {
    fn schedule(&mut self, ticket: RetryTicket, delay: Duration) {
        self.cancel();
        self.pending = Some((ticket, delay));
        self.scheduled += 1;
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancelled += 1;
        }
    }
}
