//! Surface notifications (resize, density change) with explicit subscriptions.
//!
//! The host publishes events as the windowing system reports them; each
//! interested component holds a [`Subscription`] and drops it (or calls
//! [`Subscription::unsubscribe`]) when it goes away.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::types::PhysicalSize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// The drawable area changed; `size` is in physical pixels.
    Resized {
        size: PhysicalSize,
        scale_factor: f64,
    },
    /// The device pixel density changed without a size change yet.
    ScaleFactorChanged { scale_factor: f64 },
}

pub struct SurfaceEventBus {
    sender: broadcast::Sender<SurfaceEvent>,
}

impl SurfaceEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Publish an event; returns how many subscriptions will see it.
    pub fn publish(&self, event: SurfaceEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SurfaceEventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

/// A live registration on a [`SurfaceEventBus`].
pub struct Subscription {
    receiver: broadcast::Receiver<SurfaceEvent>,
}

impl Subscription {
    /// Next pending event without blocking, or `None` when drained.
    ///
    /// If this subscription fell behind, the oldest events are skipped and
    /// the newest ones are still delivered.
    pub fn try_next(&mut self) -> Option<SurfaceEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "surface subscription lagged, dropping stale events");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Drain every pending event in publish order.
    pub fn drain(&mut self) -> Vec<SurfaceEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    pub fn unsubscribe(self) {}
}
