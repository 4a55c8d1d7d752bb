use crate::cli::CommandLineArgs;
use crate::error::AnalyticsError;
use crate::store::RecordStore;

use std::sync::Arc;

/// Shared application state passed to each request handler.
pub struct AppState {
    /// Command line arguments.
    pub args: CommandLineArgs,

    /// Record store holding the document collections.
    pub store: RecordStore,
}

impl AppState {
    /// Create and return an [AppState], opening the record store at the
    /// configured data directory.
    pub fn new(args: &CommandLineArgs) -> Result<Self, AnalyticsError> {
        let store = RecordStore::open(&args.data_dir)?;
        Ok(Self {
            args: args.clone(),
            store,
        })
    }
}

/// AppState wrapped in an Atomic Reference Count (Arc) to allow multiple references.
pub type SharedAppState = Arc<AppState>;
