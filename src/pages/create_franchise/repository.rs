use crate::api::{ApiClient, ApiError, CreateFranchiseRequest, Franchise};
use std::rc::Rc;

#[derive(Clone)]
pub struct CreateFranchiseRepository {
    client: Rc<ApiClient>,
}

impl Default for CreateFranchiseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateFranchiseRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: CreateFranchiseRequest) -> Result<Franchise, ApiError> {
        self.client.create_franchise(&request).await
    }
}
