use crate::api::{client::ApiClient, types::*};

impl ApiClient {
    /// GET /order/menu — the storefront menu.
    pub async fn get_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/order/menu", base_url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Self::parse_response(response).await
    }

    /// GET /order — the signed-in diner's order history.
    pub async fn get_orders(&self) -> Result<OrderHistory, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/order", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        Self::parse_response(response).await
    }

    /// POST /order — place an order; the receipt carries the signed JWT.
    pub async fn create_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/order", base_url))
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        Self::parse_response(response).await
    }
}
