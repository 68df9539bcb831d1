use std::sync::Arc;

use votes_engine::VoteEngine;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<VoteEngine>,
}
