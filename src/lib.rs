//! Request-construction and result-notification core for provisioning
//! Ethernet Virtual Circuits (EVCs) on an SDN controller.
//!
//! An embedding host owns a [`CircuitPanel`] per operator session, forwards
//! input-change events into it via [`FormField`] keys, and drains the
//! [`PanelEventStream`] for the two host-facing events: transient
//! notifications and circuit-list panel launches. Submissions run as
//! detached tasks; each one resolves to exactly one notification.
//!
//! ```no_run
//! use evc_console::{CircuitPanel, Config, EventBus, FormField, ProvisioningClient};
//!
//! # async fn embed() -> Result<(), evc_console::Error> {
//! let config = Config::from_env()?;
//! let client = ProvisioningClient::new(&config.controller)?;
//! let (bus, events) = EventBus::channel();
//! let mut panel = CircuitPanel::new(client, bus);
//!
//! panel.set_field(FormField::CircuitName, "vlan100");
//! panel.set_field(FormField::EndpointA, "00:00:00:00:00:00:00:01:1");
//! panel.set_field(FormField::EndpointZ, "00:00:00:00:00:00:00:02:2");
//! let _in_flight = panel.request_circuit();
//! // ... drain `events` and render each PanelEvent.
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod bus;
pub mod client;
pub mod config;
pub mod error;
pub mod panel;

pub use bus::{
    EventBus, InfoPanelDescriptor, NOTIFICATION_EVENT, Notification, PanelEvent, PanelEventStream,
    SHOW_INFO_PANEL_EVENT,
};
pub use client::{FALLBACK_ERROR_DESCRIPTION, Outcome, ProvisioningClient};
pub use config::{API_ROOT_ENV, Config, ControllerConfig};
pub use error::{ConfigError, Error, RequestError, TransportError};
pub use panel::CircuitPanel;
pub use panel::form::{CircuitForm, FormField};
pub use panel::notify::{local_failure, notification_for};
pub use panel::request::{CircuitRequest, TagRequest, UniRequest, build_request};
