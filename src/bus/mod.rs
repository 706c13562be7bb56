//! Event surface between the console core and the embedding host.
//!
//! The core never addresses the host's widgets directly. It pushes typed
//! [`PanelEvent`]s into an injected mpsc sender; the host drains the
//! matching [`PanelEventStream`] and dispatches each event under its host
//! event name. Hosts that bridge to a string-keyed bus can serialize the
//! payload with [`PanelEvent::payload_json`].

use serde::Serialize;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::warn;

/// Host event name for transient user messages.
pub const NOTIFICATION_EVENT: &str = "setNotification";

/// Host event name for requests to display a named external panel.
pub const SHOW_INFO_PANEL_EVENT: &str = "showInfoPanel";

/// A transient user message surfaced by the host.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notification {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

/// Fixed descriptor of an external panel the host should display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InfoPanelDescriptor {
    pub component: &'static str,
    pub content: serde_json::Map<String, serde_json::Value>,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl InfoPanelDescriptor {
    /// Descriptor of the installed-circuits listing panel.
    pub fn circuit_list() -> Self {
        Self {
            component: "evc-console-circuit-list",
            content: serde_json::Map::new(),
            icon: "plug",
            title: "Installed circuits",
            subtitle: "Ethernet virtual circuits",
        }
    }
}

/// Events the console emits toward the embedding host.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Notification(Notification),
    ShowInfoPanel(InfoPanelDescriptor),
}

impl PanelEvent {
    /// The event name the host dispatches this event under.
    pub fn host_event_name(&self) -> &'static str {
        match self {
            Self::Notification(_) => NOTIFICATION_EVENT,
            Self::ShowInfoPanel(_) => SHOW_INFO_PANEL_EVENT,
        }
    }

    /// The event payload as a JSON value, for string-keyed host buses.
    pub fn payload_json(&self) -> serde_json::Value {
        match self {
            Self::Notification(notification) => {
                serde_json::to_value(notification).unwrap_or_default()
            }
            Self::ShowInfoPanel(descriptor) => serde_json::to_value(descriptor).unwrap_or_default(),
        }
    }
}

/// Sending half of the console's event surface.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: mpsc::UnboundedSender<PanelEvent>,
}

/// Receiving half handed to the embedding host.
pub type PanelEventStream = UnboundedReceiverStream<PanelEvent>;

impl EventBus {
    /// Create a bus and the stream the host drains.
    pub fn channel() -> (Self, PanelEventStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, UnboundedReceiverStream::new(rx))
    }

    /// Emit an event toward the host. Never fails the caller: when the
    /// host has dropped its stream the event is logged and discarded.
    pub fn emit(&self, event: PanelEvent) {
        if let Err(dropped) = self.tx.send(event) {
            warn!(
                event = dropped.0.host_event_name(),
                "host dropped the panel event stream; discarding event"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio_stream::StreamExt;

    use super::*;

    #[tokio::test]
    async fn emitted_events_arrive_in_order() {
        let (bus, mut stream) = EventBus::channel();
        bus.emit(PanelEvent::ShowInfoPanel(InfoPanelDescriptor::circuit_list()));
        bus.emit(PanelEvent::Notification(Notification {
            icon: "gear",
            title: "t".to_string(),
            description: "d".to_string(),
        }));

        assert_eq!(
            stream.next().await.unwrap().host_event_name(),
            SHOW_INFO_PANEL_EVENT
        );
        assert_eq!(
            stream.next().await.unwrap().host_event_name(),
            NOTIFICATION_EVENT
        );
    }

    #[tokio::test]
    async fn emit_after_host_drops_stream_is_discarded() {
        let (bus, stream) = EventBus::channel();
        drop(stream);
        bus.emit(PanelEvent::ShowInfoPanel(InfoPanelDescriptor::circuit_list()));
    }

    #[test]
    fn info_panel_payload_has_host_shape() {
        let event = PanelEvent::ShowInfoPanel(InfoPanelDescriptor::circuit_list());
        let payload = event.payload_json();
        assert_eq!(payload["component"], "evc-console-circuit-list");
        assert_eq!(payload["content"], serde_json::json!({}));
        assert_eq!(payload["icon"], "plug");
        assert_eq!(payload["title"], "Installed circuits");
        assert_eq!(payload["subtitle"], "Ethernet virtual circuits");
    }

    #[test]
    fn notification_payload_has_host_shape() {
        let event = PanelEvent::Notification(Notification {
            icon: "gear",
            title: "Circuit created".to_string(),
            description: "Circuit abc123 created.".to_string(),
        });
        let payload = event.payload_json();
        assert_eq!(
            payload,
            serde_json::json!({
                "icon": "gear",
                "title": "Circuit created",
                "description": "Circuit abc123 created.",
            })
        );
    }
}
