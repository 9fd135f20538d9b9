//! Typed event registry for client notifications.
//!
//! Handlers are kept per event in registration order. [`EventRegistry::emit`]
//! takes a snapshot of the handler list and calls each one synchronously
//! outside the lock, so a handler may subscribe or unsubscribe without
//! deadlocking.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use forte_domain::{AuthOutcome, EventName};
use parking_lot::RwLock;
use tracing::trace;

/// Callback invoked with the outcome of an authentication attempt.
pub type AuthHandler = Arc<dyn Fn(&AuthOutcome) + Send + Sync>;

/// Handle returned by [`EventRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscribers = HashMap<EventName, Vec<(SubscriptionId, AuthHandler)>>;

/// Per-client registry of event handlers.
pub struct EventRegistry {
    next_id: AtomicU64,
    subscribers: RwLock<Subscribers>,
}

impl EventRegistry {
    /// Registry with an empty handler list for every known event.
    pub fn new() -> Self {
        let subscribers = EventName::ALL.iter().map(|name| (*name, Vec::new())).collect();
        Self { next_id: AtomicU64::new(1), subscribers: RwLock::new(subscribers) }
    }

    /// Append `handler` to the handlers of `event`.
    pub fn subscribe(&self, event: EventName, handler: AuthHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().entry(event).or_default().push((id, handler));
        trace!(event = %event, subscription = id.0, "handler subscribed");
        id
    }

    /// Remove a handler. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        for handlers in subscribers.values_mut() {
            if let Some(index) = handlers.iter().position(|(existing, _)| *existing == id) {
                handlers.remove(index);
                return true;
            }
        }
        false
    }

    /// Call every handler of `event` with `outcome`, in registration order.
    pub fn emit(&self, event: EventName, outcome: &AuthOutcome) {
        let handlers: Vec<AuthHandler> = self
            .subscribers
            .read()
            .get(&event)
            .map(|list| list.iter().map(|(_, handler)| Arc::clone(handler)).collect())
            .unwrap_or_default();

        trace!(event = %event, handlers = handlers.len(), success = outcome.is_ok(), "emitting event");
        for handler in handlers {
            handler(outcome);
        }
    }

    /// Number of handlers currently registered for `event`.
    pub fn handler_count(&self, event: EventName) -> usize {
        self.subscribers.read().get(&event).map_or(0, Vec::len)
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("auth_handlers", &self.handler_count(EventName::Auth))
            .finish()
    }
}
