//! Transport client for the provisioning controller.
//!
//! One `POST <api-root>/evc/` per submission: single attempt, no retry,
//! and no timeout override, so timeout policy is whatever the underlying
//! reqwest client defaults to. A non-2xx reply is not an error here; it
//! resolves to [`Outcome::Rejected`] and flows on to the notification
//! channel.

use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ControllerConfig;
use crate::error::{ConfigError, TransportError};
use crate::panel::request::CircuitRequest;

/// Description used when a rejection body is not JSON or has no
/// `description` field. The controller is known to answer some rejections
/// with a bare JSON string, so this path is reachable in practice.
pub const FALLBACK_ERROR_DESCRIPTION: &str = "the controller returned no error detail";

/// Result of one submission, consumed by one notification emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { circuit_id: String },
    Rejected { status: u16, description: String },
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    circuit_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct RejectedResponse {
    #[serde(default)]
    description: Option<String>,
}

/// HTTP client bound to one controller's provisioning endpoint.
#[derive(Debug, Clone)]
pub struct ProvisioningClient {
    http: reqwest::Client,
    evc_endpoint: Url,
}

impl ProvisioningClient {
    pub fn new(config: &ControllerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http: reqwest::Client::new(),
            evc_endpoint: config.evc_endpoint()?,
        })
    }

    /// Submit a provisioning request and resolve it to an [`Outcome`].
    ///
    /// `Err` covers connect/send failures and a 2xx reply whose body holds
    /// no readable `circuit_id`; both carry no controller status and are
    /// mapped to a local-failure notification by the caller.
    pub async fn submit(&self, request: &CircuitRequest) -> Result<Outcome, TransportError> {
        debug!(name = %request.name, endpoint = %self.evc_endpoint, "submitting circuit request");
        let response = self
            .http
            .post(self.evc_endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: CreatedResponse = response.json().await.map_err(|e| {
                TransportError::MalformedResponse(format!(
                    "2xx reply without readable circuit_id: {e}"
                ))
            })?;
            info!(circuit_id = %body.circuit_id, "circuit created");
            return Ok(Outcome::Created {
                circuit_id: body.circuit_id,
            });
        }

        let description = response
            .json::<RejectedResponse>()
            .await
            .ok()
            .and_then(|body| body.description)
            .unwrap_or_else(|| FALLBACK_ERROR_DESCRIPTION.to_string());
        warn!(status = status.as_u16(), %description, "controller rejected circuit request");
        Ok(Outcome::Rejected {
            status: status.as_u16(),
            description,
        })
    }
}
