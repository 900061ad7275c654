//! Federated login flow: code exchange, profile fetch, identity
//! resolution, token issuance.
//!
//! The callback is browser-driven, so nothing here surfaces as an HTTP
//! error; every path collapses into a `CallbackOutcome` that the handler
//! turns into a front-end redirect.

use crate::oauth::provider_client::{ProviderClient, ProviderUser};
use crate::state::AppState;

use kino_core::Identity;
use kino_db::{DbError, IdentityRepository};

#[derive(Debug)]
pub enum CallbackOutcome {
    Success {
        token: String,
        identity: Identity,
    },
    Failure {
        code: &'static str,
        message: Option<String>,
    },
}

impl CallbackOutcome {
    fn failure(code: &'static str) -> Self {
        Self::Failure {
            code,
            message: None,
        }
    }

    fn failure_with(code: &'static str, message: String) -> Self {
        Self::Failure {
            code,
            message: Some(message),
        }
    }
}

/// Run the whole callback leg of the flow.
///
/// `provider_error` is the error the provider itself put on the redirect
/// (the user denied access, for instance); it short-circuits before any
/// network call.
pub async fn handle_callback(
    state: &AppState,
    code: Option<String>,
    provider_error: Option<String>,
    error_description: Option<String>,
) -> CallbackOutcome {
    if let Some(err) = provider_error {
        log::warn!("Provider returned error on callback: {err}");
        return match error_description {
            Some(desc) => CallbackOutcome::failure_with("provider_auth_failed", desc),
            None => CallbackOutcome::failure("provider_auth_failed"),
        };
    }

    let Some(code) = code.filter(|c| !c.is_empty()) else {
        return CallbackOutcome::failure("no_auth_code");
    };

    let client = ProviderClient::new(&state.http, &state.oauth);

    let token_response = match client.exchange_code(&code).await {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("{e}");
            return CallbackOutcome::failure_with("provider_auth_error", e.to_string());
        }
    };

    let provider_user = match client.fetch_user(&token_response.access_token).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("{e}");
            return CallbackOutcome::failure_with("provider_auth_error", e.to_string());
        }
    };

    let repo = IdentityRepository::new(state.pool.clone());
    let identity = match resolve_identity(state, &repo, provider_user).await {
        Ok(identity) => identity,
        Err(e) => {
            log::error!("{e}");
            return CallbackOutcome::failure("provider_auth_error");
        }
    };

    match state.jwt_issuer.issue(&identity) {
        Ok(token) => CallbackOutcome::Success { token, identity },
        Err(e) => {
            log::error!("{e}");
            CallbackOutcome::failure("provider_auth_error")
        }
    }
}

/// Map a provider profile onto a stored identity.
///
/// Match by federated id first, then by email. An email match means a
/// local account logging in through the provider for the first time;
/// it gets linked rather than duplicated. No match creates a fresh
/// federated identity.
async fn resolve_identity(
    state: &AppState,
    repo: &IdentityRepository,
    user: ProviderUser,
) -> Result<Identity, DbError> {
    let email = user
        .default_email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from);

    let existing = repo
        .find_by_email_or_federated_id(email.as_deref(), &user.id)
        .await?;

    let display_name = user.best_display_name();
    let avatar_url = user.avatar_url(&state.oauth.avatar_url_template);

    match existing {
        Some(mut identity) => {
            if !identity.is_linked() {
                identity.link_federated(user.id, Some(display_name), avatar_url);
                repo.save(&identity).await?;
                log::info!("Linked identity {} to federated account", identity.id);
            }
            Ok(identity)
        }
        None => {
            // Providers can withhold the email; the placeholder keeps the
            // account addressable without claiming a real mailbox.
            let email = email.unwrap_or_else(|| placeholder_email(&user.id));
            let identity = Identity::new_federated(
                user.id,
                Some(email),
                Some(display_name),
                avatar_url,
            );
            repo.create(&identity).await?;
            log::info!("Created federated identity {}", identity.id);
            Ok(identity)
        }
    }
}

fn placeholder_email(federated_id: &str) -> String {
    format!("federated-{federated_id}@users.noreply.local")
}
