//! Single-writer, multi-reader value holder with change notification.
//!
//! There is always a last-known value: the one passed to [`channel`], then
//! whatever was published most recently. Readers get an `Arc` snapshot of a
//! whole value, so a reader never observes a half-written list.

use std::sync::Arc;
use tokio::sync::watch;

/// Create a publisher and a first subscriber around `initial`.
pub fn channel<T: Send + Sync + 'static>(initial: T) -> (Publisher<T>, Subscriber<T>) {
    let (tx, rx) = watch::channel(Arc::new(initial));
    (Publisher { tx }, Subscriber { rx })
}

/// The write half. Not `Clone`: exactly one writer per value.
pub struct Publisher<T> {
    tx: watch::Sender<Arc<T>>,
}

impl<T: Send + Sync + 'static> Publisher<T> {
    /// Replace the current value and wake every subscriber.
    ///
    /// Succeeds even when no subscriber is alive.
    pub fn publish(&self, value: T) {
        self.tx.send_replace(Arc::new(value));
    }

    pub fn current(&self) -> Arc<T> {
        Arc::clone(&self.tx.borrow())
    }

    pub fn subscribe(&self) -> Subscriber<T> {
        Subscriber {
            rx: self.tx.subscribe(),
        }
    }
}

/// A read handle. Cheap to clone; each clone tracks its own "seen" marker.
pub struct Subscriber<T> {
    rx: watch::Receiver<Arc<T>>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> Subscriber<T> {
    /// Snapshot of the last published value.
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.rx.borrow())
    }

    /// Snapshot of the last published value, marking it as seen.
    pub fn take(&mut self) -> Arc<T> {
        Arc::clone(&self.rx.borrow_and_update())
    }

    /// True when a value was published since the last [`take`](Self::take).
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next publish. Returns `false` once the publisher is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_value() {
        let (_publisher, subscriber) = channel(vec![1, 2]);
        assert_eq!(*subscriber.get(), vec![1, 2]);
        assert!(!subscriber.has_changed());
    }

    #[test]
    fn publish_replaces_value_for_all_subscribers() {
        let (publisher, first) = channel(Vec::<u32>::new());
        let second = publisher.subscribe();
        publisher.publish(vec![3]);
        assert_eq!(*first.get(), vec![3]);
        assert_eq!(*second.get(), vec![3]);
        assert_eq!(*publisher.current(), vec![3]);
    }

    #[test]
    fn take_clears_change_marker() {
        let (publisher, mut subscriber) = channel(0u8);
        publisher.publish(1);
        assert!(subscriber.has_changed());
        assert_eq!(*subscriber.take(), 1);
        assert!(!subscriber.has_changed());
    }

    #[test]
    fn publish_without_subscribers_keeps_value() {
        let (publisher, subscriber) = channel(0u8);
        drop(subscriber);
        publisher.publish(9);
        assert_eq!(*publisher.current(), 9);
        assert_eq!(*publisher.subscribe().get(), 9);
    }

    #[tokio::test]
    async fn changed_wakes_on_publish_and_ends_with_publisher() {
        let (publisher, mut subscriber) = channel(0u8);
        let waiter = tokio::spawn(async move {
            let woke = subscriber.changed().await;
            let value = *subscriber.get();
            let closed = !subscriber.changed().await;
            (woke, value, closed)
        });
        publisher.publish(5);
        drop(publisher);
        let (woke, value, closed) = waiter.await.unwrap();
        assert!(woke);
        assert_eq!(value, 5);
        assert!(closed);
    }
}
