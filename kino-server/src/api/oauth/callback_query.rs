use serde::Deserialize;

/// Query string the provider redirects back with. Either `code` or
/// `error` is present, never reliably both.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
