//! Handle for sending actions to the store from other tasks

use tokio::sync::mpsc;

use super::Action;

/// Cloneable sender side of the action queue drained by the store owner
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiver the store owner drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue an action. Returns false once the receiver is gone.
    pub fn dispatch(&self, action: Action) -> bool {
        self.tx.send(action).is_ok()
    }
}
