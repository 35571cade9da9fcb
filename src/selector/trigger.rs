//! Open-request plumbing between the host and the selector.
//!
//! The host keeps an [`OpenTrigger`] (cheap to clone, hand it to any code that
//! should be able to pop the menu open) and mounts the matching
//! [`OpenSignal`] into the selector.

use tokio::sync::mpsc;

/// Create a connected trigger/signal pair.
pub fn open_channel() -> (OpenTrigger, OpenSignal) {
    let (tx, rx) = mpsc::unbounded_channel();
    (OpenTrigger { tx }, OpenSignal { rx })
}

/// Sending half, held by the host.
#[derive(Debug, Clone)]
pub struct OpenTrigger {
    tx: mpsc::UnboundedSender<()>,
}

impl OpenTrigger {
    /// Request that the selector open. Returns false once the selector is unmounted.
    pub fn fire(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

/// Receiving half, owned by the mounted selector.
#[derive(Debug)]
pub struct OpenSignal {
    rx: mpsc::UnboundedReceiver<()>,
}

impl OpenSignal {
    /// Drain queued requests without waiting. True if at least one was queued.
    pub fn take_pending(&mut self) -> bool {
        let mut requested = false;
        while self.rx.try_recv().is_ok() {
            requested = true;
        }
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_coalesce() {
        let (trigger, mut signal) = open_channel();
        assert!(!signal.take_pending());

        trigger.fire();
        trigger.clone().fire();
        assert!(signal.take_pending());
        assert!(!signal.take_pending());
    }

    #[test]
    fn test_fire_after_drop() {
        let (trigger, signal) = open_channel();
        drop(signal);
        assert!(!trigger.fire());
    }
}
