mod flow;
mod provider_client;

pub use flow::{CallbackOutcome, handle_callback};
pub use provider_client::{ProviderClient, ProviderError, ProviderUser};
