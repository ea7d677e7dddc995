use crate::services::JikanClient;

/// Shared application state
///
/// Holds only the upstream client. No request mutates anything, so cloning
/// the state into handlers is the whole story; there are no locks.
#[derive(Clone)]
pub struct AppState {
    pub jikan: JikanClient,
}

impl AppState {
    pub fn new(jikan: JikanClient) -> Self {
        Self { jikan }
    }
}
