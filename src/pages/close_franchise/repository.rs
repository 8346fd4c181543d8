use crate::api::{ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct CloseFranchiseRepository {
    client: Rc<ApiClient>,
}

impl Default for CloseFranchiseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CloseFranchiseRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn close(&self, franchise_id: i64) -> Result<(), ApiError> {
        self.client.close_franchise(franchise_id).await
    }
}
