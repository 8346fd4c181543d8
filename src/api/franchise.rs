use crate::api::{client::ApiClient, filter::NameFilter, types::*};

impl ApiClient {
    /// GET /franchise?page&limit&name — paginated franchise listing with
    /// nested stores. Pages are 0-based on this endpoint.
    pub async fn get_franchises(
        &self,
        page: u32,
        limit: u32,
        filter: &NameFilter,
    ) -> Result<FranchiseListResponse, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/franchise", base_url))
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

    /// POST /franchise — create a franchise for the given admin emails.
    pub async fn create_franchise(
        &self,
        request: &CreateFranchiseRequest,
    ) -> Result<Franchise, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/franchise", base_url))
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        Self::parse_response(response).await
    }

    /// DELETE /franchise/{id} — close a franchise and all of its stores.
    pub async fn close_franchise(&self, franchise_id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/franchise/{}", base_url, franchise_id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        Self::parse_empty(response).await
    }

    /// DELETE /franchise/{fid}/store/{sid} — close a single store.
    pub async fn close_store(&self, franchise_id: i64, store_id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!(
                "{}/franchise/{}/store/{}",
                base_url, franchise_id, store_id
            ))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        Self::parse_empty(response).await
    }
}
