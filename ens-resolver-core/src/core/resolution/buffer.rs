//! Single-slot sliding buffer
//!
//! Holds at most one pending item. Sending while an item is still unconsumed
//! replaces it, so the receiver only ever sees the newest request.

use std::sync::Arc;
use tokio::sync::watch;
use crate::shared::error::ResolverError;

/// Producer half. Cloneable; the buffer closes when the last clone drops.
pub struct RequestSender<T> {
    tx: Arc<watch::Sender<Option<T>>>,
}

impl<T> Clone for RequestSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

/// Consumer half, owned by a single worker
pub struct RequestReceiver<T> {
    rx: watch::Receiver<Option<T>>,
}

pub fn sliding_buffer<T>() -> (RequestSender<T>, RequestReceiver<T>) {
    let (tx, rx) = watch::channel(None);
    (RequestSender { tx: Arc::new(tx) }, RequestReceiver { rx })
}

impl<T> RequestSender<T> {
    /// Put `item` in the slot, dropping any item not yet taken
    pub fn send(&self, item: T) -> Result<(), ResolverError> {
        self.tx
            .send(Some(item))
            .map_err(|_| ResolverError::internal("Resolution worker has stopped"))
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T: Clone> RequestReceiver<T> {
    /// Wait for the next item. Returns `None` once every sender is gone and
    /// nothing is left to take.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            self.rx.changed().await.ok()?;
            if let Some(item) = self.rx.borrow_and_update().clone() {
                return Some(item);
            }
        }
    }
}
