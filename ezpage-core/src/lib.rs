use std::sync::Arc;

use twilight_http::Client;

use ezpage_utils::pagination::PaginationSessions;

/// Environment-driven runtime configuration.
pub mod config;

pub use config::Config;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub sessions: Arc<PaginationSessions>,
    pub config: Arc<Config>,
}

impl Context {
    /// Create a new application context with an empty session registry.
    pub fn new(http: Arc<Client>, config: Config) -> Self {
        Self {
            http,
            sessions: Arc::new(PaginationSessions::new()),
            config: Arc::new(config),
        }
    }

    /// Owner to bind a new pagination session to, honoring `owner_only`.
    pub fn session_owner(&self, author_id: u64) -> Option<u64> {
        self.config.owner_only.then_some(author_id)
    }
}
