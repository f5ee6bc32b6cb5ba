use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the login flow (out of scope here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

/// Explicit auth context threaded into the API client.
///
/// The session is constructed once after login and passed by value; nothing
/// in the core consults ambient storage, which keeps the controller and its
/// tests independent of any storage backend.
#[derive(Debug, Clone)]
pub struct Session {
    access_token: String,
    user: UserProfile,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            access_token: access_token.into(),
            user,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }
}
