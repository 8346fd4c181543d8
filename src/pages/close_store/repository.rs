use crate::api::{ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct CloseStoreRepository {
    client: Rc<ApiClient>,
}

impl Default for CloseStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CloseStoreRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn close(&self, franchise_id: i64, store_id: i64) -> Result<(), ApiError> {
        self.client.close_store(franchise_id, store_id).await
    }
}
