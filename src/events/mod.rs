//! Named menu events and the broadcast bus they travel on.
//!
//! The menu bar controller never talks to window presenters directly. It emits
//! a [`MenuEvent`] into an [`EventSink`]; presenters subscribe to the
//! [`EventBus`] and react to the events they care about.

use std::fmt;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, trace, warn};

/// Capacity of the broadcast channel.
///
/// Receivers that fall further behind than this get a `Lagged` error.
const CHANNEL_CAPACITY: usize = 32;

/// Events published when a menu item is selected. None carry a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    ShowAboutPage,
    ShowSettingsPage,
    ShowQuitPage,
}

impl MenuEvent {
    /// Every event, in menu order.
    #[cfg(test)]
    pub const ALL: [MenuEvent; 3] = [
        MenuEvent::ShowAboutPage,
        MenuEvent::ShowSettingsPage,
        MenuEvent::ShowQuitPage,
    ];

    /// Notification name presenters listen for.
    pub fn name(&self) -> &'static str {
        match self {
            MenuEvent::ShowAboutPage => "ShowAboutPage",
            MenuEvent::ShowSettingsPage => "ShowSettingsPage",
            MenuEvent::ShowQuitPage => "ShowQuitPage",
        }
    }
}

impl fmt::Display for MenuEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destination for menu events.
pub trait EventSink: Send + Sync {
    /// Publish an event. Must not block and has no failure mode.
    fn emit(&self, event: MenuEvent);
}

/// Process-wide broadcast channel for [`MenuEvent`]s.
pub struct EventBus {
    sender: broadcast::Sender<MenuEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a new event bus with no subscribers.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to all events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<MenuEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventSink for EventBus {
    fn emit(&self, event: MenuEvent) {
        trace!("Event emitted: {}", event);
        // No subscribers is fine; the event is simply dropped.
        let _ = self.sender.send(event);
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Log every event received on `rx` until the bus is dropped.
///
/// Window presenters live outside this crate; this listener is what runs
/// when none are attached, so menu activity still shows up in the logs.
pub async fn run_listener(mut rx: broadcast::Receiver<MenuEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => info!("Received {}", event),
            Err(RecvError::Lagged(skipped)) => {
                warn!("Event listener lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                debug!("Event bus closed, stopping listener");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(MenuEvent::ShowAboutPage.name(), "ShowAboutPage");
        assert_eq!(MenuEvent::ShowSettingsPage.name(), "ShowSettingsPage");
        assert_eq!(MenuEvent::ShowQuitPage.name(), "ShowQuitPage");
        assert_eq!(MenuEvent::ShowQuitPage.to_string(), "ShowQuitPage");
    }

    #[test]
    fn test_emit_without_subscribers() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        bus.emit(MenuEvent::ShowAboutPage);
    }

    #[test]
    fn test_every_subscriber_receives_event() {
        let bus = EventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        bus.emit(MenuEvent::ShowSettingsPage);

        assert_eq!(first.try_recv().unwrap(), MenuEvent::ShowSettingsPage);
        assert_eq!(second.try_recv().unwrap(), MenuEvent::ShowSettingsPage);
        assert!(first.try_recv().is_err());
    }

    #[test]
    fn test_late_subscriber_misses_earlier_events() {
        let bus = EventBus::new();
        bus.emit(MenuEvent::ShowAboutPage);

        let mut rx = bus.subscribe();
        bus.emit(MenuEvent::ShowQuitPage);

        assert_eq!(rx.try_recv().unwrap(), MenuEvent::ShowQuitPage);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_async_receive() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        for event in MenuEvent::ALL {
            bus.emit(event);
        }

        for expected in MenuEvent::ALL {
            assert_eq!(rx.recv().await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_listener_stops_when_bus_dropped() {
        let bus = EventBus::new();
        let listener = tokio::spawn(run_listener(bus.subscribe()));

        bus.emit(MenuEvent::ShowAboutPage);
        drop(bus);

        listener.await.unwrap();
    }

    #[tokio::test]
    async fn test_listener_survives_lag() {
        let bus = EventBus::new();
        let rx = bus.subscribe();

        // Overflow the channel before the listener starts reading.
        for _ in 0..CHANNEL_CAPACITY * 2 {
            bus.emit(MenuEvent::ShowSettingsPage);
        }
        drop(bus);

        run_listener(rx).await;
    }
}
