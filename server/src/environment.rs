use std::sync::Arc;

use log::Logger;

use crate::repository::Repository;
use crate::urls::Urls;

/// The shared dependencies of every route: cheap to clone, cloned into
/// each filter.
#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub repository: Arc<dyn Repository>,
    pub urls: Arc<Urls>,
}

impl Environment {
    pub fn new(logger: Arc<Logger>, repository: Arc<dyn Repository>, urls: Arc<Urls>) -> Self {
        Self {
            logger,
            repository,
            urls,
        }
    }
}
