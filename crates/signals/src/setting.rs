//! Observable value cell (mechanics only).
//!
//! A [`Setting`] holds the current value and fans every change out to
//! subscribers over plain mpsc channels (broadcast semantics, one copy per
//! subscriber). Reads never block writers for long: `get` clones the value
//! out under a read lock.
//!
//! Each subscriber sees changes in the order they were applied, because the
//! cell serializes the value swap and the fan-out under the same write lock.
//! A subscriber only receives changes made after it subscribed; the starting
//! value comes from `get`.

use std::sync::mpsc::Receiver;
use std::sync::{mpsc, Mutex, PoisonError, RwLock};
use std::time::Duration;

/// A subscription to a setting's change stream.
///
/// Designed for single-threaded consumption: one subscription, one consumer.
/// Dropping it detaches the subscriber; the cell prunes it on the next
/// change.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: Receiver<T>,
}

impl<T> Subscription<T> {
    pub fn new(receiver: Receiver<T>) -> Self {
        Self { receiver }
    }

    /// Block until the next change is available.
    pub fn recv(&self) -> Result<T, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a change without blocking.
    pub fn try_recv(&self) -> Result<T, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a change.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Observable value cell.
///
/// Safe to share across threads behind an `Arc`. Lock poisoning is recovered
/// rather than surfaced: a setting must stay readable and writable for the
/// life of the process.
#[derive(Debug)]
pub struct Setting<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<mpsc::Sender<T>>>,
}

impl<T> Setting<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a watcher. It receives every change applied from now on.
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        Subscription::new(rx)
    }
}

impl<T: Clone> Setting<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&self, value: T) {
        let mut current = self.value.write().unwrap_or_else(PoisonError::into_inner);
        *current = value.clone();
        // Fan out while still holding the write lock so subscribers observe
        // changes in application order.
        self.notify(&value);
    }

    /// Derive the next value from the current one, store it, notify, and
    /// return it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> T {
        let mut current = self.value.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&current);
        *current = next.clone();
        self.notify(&next);
        next
    }

    fn notify(&self, value: &T) {
        let mut subs = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Drop any dead subscribers while notifying.
        subs.retain(|tx| tx.send(value.clone()).is_ok());
    }
}

impl<T: Default> Default for Setting<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
