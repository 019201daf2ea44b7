use gloo::net::http::{Request, Response};
use shared::{
    Donation, DonationInput, DonationListResponse, SubmitDonationResponse, VisibilityUpdate,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Request(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo::net::Error> for ApiError {
    fn from(e: gloo::net::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

/// API client for the remote donation (contact) service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/contact", self.base_url)
    }

    fn delete_url(&self, id: &str) -> String {
        format!("{}/contact/{}", self.base_url, id)
    }

    // Updates go to the plural route
    fn update_url(&self, id: &str) -> String {
        format!("{}/contacts/{}", self.base_url, id)
    }

    /// Fetch every donation
    pub async fn get_donations(&self) -> Result<Vec<Donation>, ApiError> {
        let response = Request::get(&self.collection_url()).send().await?;
        let response = Self::ensure_ok(response).await?;
        let list = response
            .json::<DonationListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(list.data)
    }

    /// Create a donation, returning the server's confirmation message if any
    pub async fn submit_donation(&self, input: &DonationInput) -> Result<Option<String>, ApiError> {
        let response = Request::post(&self.collection_url())
            .json(input)?
            .send()
            .await?;
        let response = Self::ensure_ok(response).await?;

        // Some deployments answer with an empty body
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let parsed: SubmitDonationResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.message)
    }

    pub async fn update_donation(&self, id: &str, input: &DonationInput) -> Result<(), ApiError> {
        let response = Request::put(&self.update_url(id)).json(input)?.send().await?;
        Self::ensure_ok(response).await?;
        Ok(())
    }

    pub async fn set_visibility(&self, id: &str, is_show: bool) -> Result<(), ApiError> {
        let response = Request::put(&self.update_url(id))
            .json(&VisibilityUpdate { is_show })?
            .send()
            .await?;
        Self::ensure_ok(response).await?;
        Ok(())
    }

    pub async fn delete_donation(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.delete_url(id)).send().await?;
        Self::ensure_ok(response).await?;
        Ok(())
    }

    async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes() {
        let client = ApiClient::with_base_url("http://localhost:3000/api/");
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.collection_url(), "http://localhost:3000/api/contact");
        assert_eq!(client.delete_url("abc"), "http://localhost:3000/api/contact/abc");
        assert_eq!(client.update_url("abc"), "http://localhost:3000/api/contacts/abc");
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 404,
            body: "Not found".to_string(),
        };
        assert_eq!(err.to_string(), "Server error 404: Not found");
        assert_eq!(
            ApiError::Request("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }
}
