use crate::core::geo::LatLng;
use crate::traits::MarkerId;
use std::collections::{HashMap, VecDeque};

/// Discrete map events the embedder forwards to the control
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Mouse/touch click on the map, already projected to a coordinate
    Click { lat_lng: LatLng },
    /// A draggable marker created by the control was moved
    MarkerDragged { marker: MarkerId, to: LatLng },
    /// The renderer reloaded its style, wiping sources and layers
    StyleReload,
}

/// Event classes a control can subscribe to on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    StyleReload,
}

/// Opaque handle identifying one subscription, for scoped removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Signals the control fires on the host map object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerNotice {
    MeasureStart,
    MeasureEnd,
}

impl RulerNotice {
    /// Event name external listeners register under
    pub fn name(&self) -> &'static str {
        match self {
            RulerNotice::MeasureStart => "measure.start",
            RulerNotice::MeasureEnd => "measure.end",
        }
    }
}

/// Event listener callback type
pub type NoticeCallback = Box<dyn Fn(&RulerNotice) + Send + Sync>;

/// Subscription registry and notice dispatcher for host implementations.
///
/// Hosts embed one of these to back [`crate::MapHost::subscribe`] /
/// `unsubscribe`, and to fan the measuring started/stopped notices out to
/// external listeners. Notices are queued on `emit` and delivered on the
/// next `process_events` call, after the handler that raised them returns.
#[derive(Default)]
pub struct EventManager {
    next_subscription: u64,
    subscriptions: HashMap<SubscriptionId, EventKind>,
    listeners: HashMap<String, Vec<NoticeCallback>>,
    queue: VecDeque<RulerNotice>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in an event class and returns its handle
    pub fn subscribe(&mut self, event: EventKind) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscriptions.insert(id, event);
        id
    }

    /// Removes one subscription; unknown ids are a no-op
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }

    /// Whether any live subscription covers the given event class
    pub fn is_subscribed(&self, event: EventKind) -> bool {
        self.subscriptions.values().any(|kind| *kind == event)
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Register an external listener for a notice name (see
    /// [`RulerNotice::name`])
    pub fn on<F>(&mut self, notice_name: &str, callback: F)
    where
        F: Fn(&RulerNotice) + Send + Sync + 'static,
    {
        self.listeners
            .entry(notice_name.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Queue a notice for dispatch
    pub fn emit(&mut self, notice: RulerNotice) {
        self.queue.push_back(notice);
    }

    /// Dispatch all queued notices to their listeners
    pub fn process_events(&mut self) -> Vec<RulerNotice> {
        let notices: Vec<_> = self.queue.drain(..).collect();

        for notice in &notices {
            if let Some(callbacks) = self.listeners.get(notice.name()) {
                for callback in callbacks {
                    callback(notice);
                }
            }
        }

        notices
    }

    /// Get number of pending notices
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_unsubscribe() {
        let mut events = EventManager::new();
        let click = events.subscribe(EventKind::Click);
        let reload = events.subscribe(EventKind::StyleReload);

        assert_eq!(events.subscription_count(), 2);
        assert!(events.is_subscribed(EventKind::Click));

        events.unsubscribe(click);
        assert!(!events.is_subscribed(EventKind::Click));
        assert!(events.is_subscribed(EventKind::StyleReload));

        // removing twice is a no-op
        events.unsubscribe(click);
        events.unsubscribe(reload);
        assert_eq!(events.subscription_count(), 0);
    }

    #[test]
    fn test_notice_dispatch() {
        let mut events = EventManager::new();
        let starts = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&starts);
        events.on("measure.start", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        events.emit(RulerNotice::MeasureStart);
        events.emit(RulerNotice::MeasureEnd);
        assert_eq!(events.pending_events(), 2);

        let delivered = events.process_events();
        assert_eq!(delivered.len(), 2);
        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert_eq!(events.pending_events(), 0);
    }

    #[test]
    fn test_notice_names() {
        assert_eq!(RulerNotice::MeasureStart.name(), "measure.start");
        assert_eq!(RulerNotice::MeasureEnd.name(), "measure.end");
    }
}
