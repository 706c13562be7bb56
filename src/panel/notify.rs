//! Outcome-to-notification mapping.

use std::fmt::Display;

use crate::bus::Notification;
use crate::client::Outcome;

/// Icon carried by every console notification.
pub const NOTIFICATION_ICON: &str = "gear";

const CREATED_TITLE: &str = "Circuit created";
const NOT_SENT_TITLE: &str = "Request not sent";

/// Map one submission outcome to its notification.
pub fn notification_for(outcome: &Outcome) -> Notification {
    match outcome {
        Outcome::Created { circuit_id } => Notification {
            icon: NOTIFICATION_ICON,
            title: CREATED_TITLE.to_string(),
            description: format!("Circuit {circuit_id} created."),
        },
        Outcome::Rejected {
            status,
            description,
        } => Notification {
            icon: NOTIFICATION_ICON,
            title: format!("Request failed: {status}"),
            description: description.clone(),
        },
    }
}

/// Notification for failures that kept the request from resolving
/// remotely: build errors and transport faults.
pub fn local_failure(error: &impl Display) -> Notification {
    Notification {
        icon: NOTIFICATION_ICON,
        title: NOT_SENT_TITLE.to_string(),
        description: error.to_string(),
    }
}
