use super::list_state::FetchSpec;
use crate::api::{ApiClient, ApiError, FranchiseListResponse, UserListResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminDashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for AdminDashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminDashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_franchises(
        &self,
        spec: &FetchSpec,
    ) -> Result<FranchiseListResponse, ApiError> {
        self.client
            .get_franchises(spec.page, spec.limit, &spec.filter)
            .await
    }

    pub async fn fetch_users(&self, spec: &FetchSpec) -> Result<UserListResponse, ApiError> {
        self.client
            .list_users(spec.page, spec.limit, &spec.filter)
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.client.delete_user(user_id).await
    }
}
