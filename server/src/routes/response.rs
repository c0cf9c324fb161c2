use serde::Serialize;

/// The `{code, message}` payload returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub(crate) code: u16,
    pub(crate) message: String,
}

impl ErrorBody {
    pub fn new(code: u16, message: String) -> Self {
        ErrorBody { code, message }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuccessResponse<'a> {
    Healthz {
        revision: Option<&'a str>,
        timestamp: Option<&'a str>,
        version: &'a str,
    },
}
