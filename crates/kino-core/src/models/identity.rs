//! Identity entity - a user account, local- or federated-sourced.

use crate::Provider;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account record.
///
/// Every identity carries at least one of {email, federated_id}. A local
/// account that later signs in through the external provider is *linked*:
/// the same record gains a `federated_id` rather than a duplicate row
/// being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    /// Unique when present, stored lowercased
    pub email: Option<String>,
    /// Present only for locally-registered accounts; never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Sparse unique identifier from the external OAuth provider
    pub federated_id: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: Provider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical form used for every email comparison and for storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Identity {
    /// Create a local (email + password) identity
    pub fn new_local(email: &str, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: Some(normalize_email(email)),
            password_hash: Some(password_hash),
            federated_id: None,
            display_name: None,
            avatar_url: None,
            provider: Provider::Local,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an identity from a first-time federated login
    pub fn new_federated(
        federated_id: String,
        email: Option<String>,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.map(|e| normalize_email(&e)),
            password_hash: None,
            federated_id: Some(federated_id),
            display_name,
            avatar_url,
            provider: Provider::Federated,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a federated identifier to a previously local-only identity.
    ///
    /// Profile fields are only overwritten by non-empty incoming values.
    pub fn link_federated(
        &mut self,
        federated_id: String,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) {
        self.federated_id = Some(federated_id);
        if let Some(name) = display_name.filter(|n| !n.is_empty()) {
            self.display_name = Some(name);
        }
        if let Some(url) = avatar_url.filter(|u| !u.is_empty()) {
            self.avatar_url = Some(url);
        }
        self.provider = Provider::Federated;
        self.updated_at = Utc::now();
    }

    /// Check if this identity has been linked to the external provider
    pub fn is_linked(&self) -> bool {
        self.federated_id.is_some()
    }
}
