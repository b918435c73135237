// api/client.rs - Typed client for the two product endpoints
//
// Both endpoints and the page window are compiled-in literals; the
// endpoints are independent services and share nothing but the client.

use crate::api::abort::AbortToken;
use crate::api::error::ApiError;
use crate::model::{NewProduct, ProductPage};

/// Collection resource accepting new product submissions.
pub const WRITE_ENDPOINT: &str = "http://localhost:8000/products/";

/// Collection resource serving the paginated product listing.
pub const READ_ENDPOINT: &str = "https://test-api.jsebastian.dev/products/";

/// Fixed page window for the listing request.
pub const LIST_SKIP: u32 = 0;
pub const LIST_LIMIT: u32 = 10;

/// HTTP client for the product endpoints.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    write_endpoint: String,
    read_endpoint: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client pointed at the compiled-in endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(WRITE_ENDPOINT, READ_ENDPOINT)
    }

    /// Client pointed at non-default endpoints. Used by tests.
    pub fn with_endpoints(write: impl Into<String>, read: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            write_endpoint: write.into(),
            read_endpoint: read.into(),
        }
    }

    /// Submits one product to the write endpoint.
    ///
    /// Any 2xx status counts as success; the response body is not
    /// inspected.
    pub async fn create_product(
        &self,
        product: &NewProduct,
        token: AbortToken,
    ) -> Result<(), ApiError> {
        let request = self.http.post(&self.write_endpoint).json(product).send();
        token
            .scope(async move {
                let response = request.await.map_err(ApiError::from_reqwest)?;
                response.error_for_status().map_err(ApiError::from_reqwest)?;
                Ok(())
            })
            .await
    }

    /// Fetches one page of products from the read endpoint.
    pub async fn fetch_products(&self, token: AbortToken) -> Result<ProductPage, ApiError> {
        let request = self
            .http
            .get(&self.read_endpoint)
            .query(&[("skip", LIST_SKIP), ("limit", LIST_LIMIT)])
            .send();
        token
            .scope(async move {
                let response = request.await.map_err(ApiError::from_reqwest)?;
                let response = response.error_for_status().map_err(ApiError::from_reqwest)?;
                response
                    .json::<ProductPage>()
                    .await
                    .map_err(ApiError::from_reqwest)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_uses_the_compiled_in_endpoints() {
        let client = ApiClient::new();
        assert_eq!(client.write_endpoint, WRITE_ENDPOINT);
        assert_eq!(client.read_endpoint, READ_ENDPOINT);
    }

    #[test]
    fn test_with_endpoints_overrides_both() {
        let client =
            ApiClient::with_endpoints("http://127.0.0.1:9/w/", "http://127.0.0.1:9/r/");
        assert_eq!(client.write_endpoint, "http://127.0.0.1:9/w/");
        assert_eq!(client.read_endpoint, "http://127.0.0.1:9/r/");
    }
}
