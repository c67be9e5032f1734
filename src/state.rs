use crate::services::store_service::LolStore;

/// Everything a request handler needs, built once in `main`.
pub struct AppContext {
    pub store: LolStore,
}

impl AppContext {
    pub fn new(store: LolStore) -> Self {
        Self { store }
    }
}
