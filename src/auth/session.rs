use serde::{Deserialize, Serialize};

/// Session fields as returned by the sign-in endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "sessionToken")]
    pub session_token: String,
    pub username: String,
    pub authenticated: bool,
}

/// Current login state, shared by the whole client.
///
/// The three fields move as a unit: `establish` on a successful sign-in,
/// `reset` on sign-out or any failed attempt. The fields are private so a
/// partially updated session can never be observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    username: String,
    session_token: String,
}

impl Session {
    /// Create a session in the logged-out state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole session with the server-provided fields
    pub fn establish(&mut self, info: SessionInfo) {
        self.authenticated = info.authenticated;
        self.username = info.username;
        self.session_token = info.session_token;
    }

    /// Return to the logged-out defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }
}
