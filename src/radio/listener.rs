use crate::radio::types::{ConnectionState, RadioEvent, RadioStatus};
use tokio::sync::mpsc::UnboundedSender;

/// Receiver of radio notifications
pub trait RadioEventHandler {
    fn on_status_changed(&mut self, status: RadioStatus, previous: RadioStatus);

    fn on_connection_state_changed(&mut self, state: ConnectionState);
}

impl RadioEvent {
    /// Route this event to the matching handler method
    pub fn dispatch<H: RadioEventHandler + ?Sized>(self, handler: &mut H) {
        match self {
            RadioEvent::StatusChanged { status, previous } => {
                handler.on_status_changed(status, previous)
            }
            RadioEvent::ConnectionStateChanged(state) => {
                handler.on_connection_state_changed(state)
            }
        }
    }
}

/// Registration with an event source; unregisters on drop
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Source of status and connection-state notifications
pub trait EventSource: Send + Sync {
    fn subscribe(&self, sender: UnboundedSender<RadioEvent>) -> Subscription;
}
