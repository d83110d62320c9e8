//! Externally imported assignments and the auth handshake payload.

use serde::{Deserialize, Serialize};

/// An assignment imported from the external classroom provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
}

/// Response of the external-auth start call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthStart {
    /// Where the user should be sent to grant access
    pub authorization_url: String,

    /// Opaque anti-forgery value echoed back by the provider
    #[serde(default)]
    pub state: Option<String>,
}
