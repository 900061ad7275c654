mod authorize_url_response;
mod callback_query;
mod oauth;

pub use authorize_url_response::AuthorizeUrlResponse;
pub use callback_query::CallbackQuery;
pub use oauth::{federated_callback, federated_url};
