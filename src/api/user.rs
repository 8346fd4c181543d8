use crate::api::{client::ApiClient, filter::NameFilter, types::*};

impl ApiClient {
    /// GET /user?page&limit&name — paginated user listing. Pages are
    /// 1-based on this endpoint.
    pub async fn list_users(
        &self,
        page: u32,
        limit: u32,
        filter: &NameFilter,
    ) -> Result<UserListResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/user", base_url))
            .query(&[
                ("page", page.to_string()),
                ("limit", limit.to_string()),
                ("name", filter.as_str().to_string()),
            ])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        Self::parse_response(response).await
    }

    /// DELETE /user/{id}. Deleting an already-deleted user yields NotFound.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/user/{}", base_url, user_id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        Self::parse_empty(response).await
    }
}
