//! Console panel: composition root of the request pipeline.
//!
//! The embedding host owns one [`CircuitPanel`] per session, forwards
//! input-change events into it, and triggers submissions and the
//! circuit-list panel from its buttons. Everything the panel says back to
//! the host travels over the injected [`EventBus`].

pub mod form;
pub mod notify;
pub mod request;

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;

use crate::bus::{EventBus, InfoPanelDescriptor, PanelEvent};
use crate::client::ProvisioningClient;
use crate::panel::form::{CircuitForm, FormField};
use crate::panel::request::build_request;

/// One operator session: the live form plus the submission pipeline.
#[derive(Debug)]
pub struct CircuitPanel {
    form: CircuitForm,
    client: Arc<ProvisioningClient>,
    bus: EventBus,
}

impl CircuitPanel {
    /// Create a panel with an empty form.
    pub fn new(client: ProvisioningClient, bus: EventBus) -> Self {
        Self {
            form: CircuitForm::default(),
            client: Arc::new(client),
            bus,
        }
    }

    /// Current input state, for hosts rendering from it.
    pub fn form(&self) -> &CircuitForm {
        &self.form
    }

    /// Explicit input-change handler, keyed by field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Trigger one circuit-provisioning transaction.
    ///
    /// The form is snapshotted synchronously, so later edits never leak
    /// into an in-flight submission. Each call runs as an independent
    /// detached task resolving to exactly one notification; triggering
    /// again before completion provisions a second circuit, since nothing
    /// de-duplicates requests. The returned handle lets hosts and tests
    /// await completion; dropping it is fine (fire-and-forget).
    pub fn request_circuit(&self) -> JoinHandle<()> {
        let snapshot = self.form.clone();
        let client = Arc::clone(&self.client);
        let bus = self.bus.clone();

        tokio::spawn(async move {
            let request = match build_request(&snapshot) {
                Ok(request) => request,
                Err(e) => {
                    warn!(error = %e, "rejecting circuit request before submission");
                    bus.emit(PanelEvent::Notification(notify::local_failure(&e)));
                    return;
                }
            };
            match client.submit(&request).await {
                Ok(outcome) => {
                    bus.emit(PanelEvent::Notification(notify::notification_for(&outcome)));
                }
                Err(e) => {
                    warn!(error = %e, "circuit request did not resolve");
                    bus.emit(PanelEvent::Notification(notify::local_failure(&e)));
                }
            }
        })
    }

    /// Ask the host to display the installed-circuits panel.
    pub fn open_circuit_list(&self) {
        self.bus
            .emit(PanelEvent::ShowInfoPanel(InfoPanelDescriptor::circuit_list()));
    }
}
