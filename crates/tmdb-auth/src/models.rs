//! Authentication response models.

use serde::{Deserialize, Serialize};

/// An unapproved request token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestToken {
    /// Whether the call succeeded
    pub success: bool,
    /// Expiry as sent by the API (`2024-01-01 12:00:00 UTC`)
    pub expires_at: String,
    /// The token
    pub request_token: String,
}

/// A guest session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuestSession {
    /// Whether the call succeeded
    pub success: bool,
    /// Guest session id
    pub guest_session_id: String,
    /// Expiry as sent by the API
    pub expires_at: String,
}

/// A user session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Session {
    /// Whether the call succeeded
    pub success: bool,
    /// Session id
    pub session_id: String,
}

/// Result of `DELETE /authentication/session`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeleteSessionResponse {
    /// Whether the session was deleted
    pub success: bool,
}
