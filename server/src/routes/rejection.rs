use warp::reject;

use crate::errors::BackendError;

/// A failed request, carrying the operation it arose from for the
/// error log.
#[derive(Debug)]
pub struct Rejection {
    pub(crate) context: Context,
    pub(crate) error: BackendError,
}

impl Rejection {
    pub fn new(context: Context, error: BackendError) -> Self {
        Rejection { context, error }
    }
}

impl reject::Reject for Rejection {}

#[derive(Clone, Debug)]
pub enum Context {
    Delete { id: String },
    Retrieve { id: String },
    Update { id: String },
}

impl Context {
    pub fn delete(id: String) -> Context {
        Context::Delete { id }
    }

    pub fn retrieve(id: String) -> Context {
        Context::Retrieve { id }
    }

    pub fn update(id: String) -> Context {
        Context::Update { id }
    }
}
