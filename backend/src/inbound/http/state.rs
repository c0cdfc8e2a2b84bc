//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data`, so they depend
//! only on the driving ports and stay testable without real persistence.

use std::sync::Arc;

use crate::domain::ports::{DirectoryCommand, DirectoryQuery};

/// Dependency bundle for the employee endpoints.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the directory.
    pub directory_query: Arc<dyn DirectoryQuery>,
    /// Mutating side of the directory.
    pub directory: Arc<dyn DirectoryCommand>,
}

impl HttpState {
    /// Bundle the directory ports for handler injection.
    pub fn new(directory_query: Arc<dyn DirectoryQuery>, directory: Arc<dyn DirectoryCommand>) -> Self {
        Self {
            directory_query,
            directory,
        }
    }
}
