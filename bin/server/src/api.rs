//! Client for the upstream commerce API.
//!
//! The web server holds no data of its own; catalog, accounts, orders,
//! and consultations all live behind this REST API. Authentication is a
//! bearer token, the same signed token the session cookie carries.

use leptos::server_fn::error::ServerFnError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

use crate::types::{
    BlogPostDetail, BlogPostSummary, ConsultationSummary, NewOrder, OrderSummary, ProductDetail,
    ProductSummary, ProfileInfo, QuizAnswers, QuizRecommendation,
};
use lumera_core::{BlogPostId, ProductId};

/// Errors from the upstream API.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure reaching the API.
    Transport { details: String },
    /// The API rejected the credentials.
    Unauthorized,
    /// The API returned a non-success status.
    Http { status: u16 },
    /// The response body failed to deserialize.
    Decode { details: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { details } => write!(f, "upstream transport error: {}", details),
            Self::Unauthorized => write!(f, "upstream rejected credentials"),
            Self::Http { status } => write!(f, "upstream returned status {}", status),
            Self::Decode { details } => write!(f, "upstream response decode error: {}", details),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            ApiError::Unauthorized => ServerFnError::new("Not authenticated"),
            ApiError::Http { status } if *status == 404 => ServerFnError::new("Not found"),
            ApiError::Transport { .. } | ApiError::Http { .. } | ApiError::Decode { .. } => {
                ServerFnError::new("Service temporarily unavailable")
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                details: err.to_string(),
            }
        } else {
            Self::Transport {
                details: err.to_string(),
            }
        }
    }
}

/// Credentials for the login endpoint.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New account registration payload.
#[derive(Debug, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login response: a signed session token.
#[derive(Debug, Deserialize)]
pub struct LoginGrant {
    pub token: String,
}

/// HTTP client for the upstream commerce API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(format!("{}{}", self.base_url, path));
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.post(format!("{}{}", self.base_url, path));
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(|e| ApiError::Decode {
            details: e.to_string(),
        })
    }

    /// Exchanges credentials for a signed session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, ApiError> {
        self.post_json("/auth/login", credentials, None).await
    }

    /// Registers a new customer account and signs them in.
    pub async fn register(&self, registration: &Registration) -> Result<LoginGrant, ApiError> {
        self.post_json("/auth/register", registration, None).await
    }

    /// Lists the product catalog, optionally filtered by category.
    pub async fn list_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ProductSummary>, ApiError> {
        match category {
            Some(category) => {
                self.get_json(&format!("/products?category={}", category), None)
                    .await
            }
            None => self.get_json("/products", None).await,
        }
    }

    /// Fetches one product by ID.
    pub async fn get_product(&self, id: ProductId) -> Result<ProductDetail, ApiError> {
        self.get_json(&format!("/products/{}", id), None).await
    }

    /// Lists published blog posts.
    pub async fn list_posts(&self) -> Result<Vec<BlogPostSummary>, ApiError> {
        self.get_json("/posts", None).await
    }

    /// Fetches one blog post by ID.
    pub async fn get_post(&self, id: BlogPostId) -> Result<BlogPostDetail, ApiError> {
        self.get_json(&format!("/posts/{}", id), None).await
    }

    /// Fetches the authenticated user's profile.
    pub async fn profile(&self, token: &str) -> Result<ProfileInfo, ApiError> {
        self.get_json("/me", Some(token)).await
    }

    /// Lists the authenticated user's orders.
    pub async fn orders(&self, token: &str) -> Result<Vec<OrderSummary>, ApiError> {
        self.get_json("/orders", Some(token)).await
    }

    /// Lists all orders across customers (back-office only upstream).
    pub async fn all_orders(&self, token: &str) -> Result<Vec<OrderSummary>, ApiError> {
        self.get_json("/admin/orders", Some(token)).await
    }

    /// Places an order for the authenticated user.
    pub async fn place_order(&self, token: &str, order: &NewOrder) -> Result<OrderSummary, ApiError> {
        self.post_json("/orders", order, Some(token)).await
    }

    /// Submits skin quiz answers for product recommendations.
    pub async fn submit_quiz(&self, answers: &QuizAnswers) -> Result<QuizRecommendation, ApiError> {
        self.post_json("/quiz", answers, None).await
    }

    /// Lists consultation requests (doctor panel upstream).
    pub async fn consultations(&self, token: &str) -> Result<Vec<ConsultationSummary>, ApiError> {
        self.get_json("/consultations", Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("https://api.lumera.shop/".to_string());
        assert_eq!(client.base_url, "https://api.lumera.shop");
    }
}
