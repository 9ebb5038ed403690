//! Thin client for the ShareBite REST API (auth and food listings).

use crate::sdk::listings::{FoodListing, NearbyQuery, NewFood};
use crate::sdk::session::{Session, UserRole};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8081/ShareBite";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to ShareBite failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ShareBite rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Unexpected ShareBite response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Not logged in")]
    NotLoggedIn,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone_number: String,
    pub user_type: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingsBody {
    Bare(Vec<FoodListing>),
    Wrapped { data: Vec<FoodListing> },
    Other(serde_json::Value),
}

pub struct ShareBiteClient {
    client: Client,
    base_url: String,
}

impl ShareBiteClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(15)).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response = self
            .client
            .post(self.url("/public/login"))
            .json(request)
            .send()
            .await?;
        let text = ensure_success(response, "Invalid credentials").await?;
        let body: LoginResponse = serde_json::from_str(&text)?;
        Ok(Session::new(body.token, request.role, request.email.clone()))
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/public/signup"))
            .json(request)
            .send()
            .await?;
        ensure_success(response, "Signup failed").await?;
        Ok(())
    }

    pub async fn nearby_foods(
        &self,
        session: &Session,
        query: &NearbyQuery,
    ) -> Result<Vec<FoodListing>, ApiError> {
        let response = self
            .client
            .post(self.url("/api/foods/nearby"))
            .bearer_auth(&session.token)
            .json(query)
            .send()
            .await?;
        let text = ensure_success(response, "Failed to fetch nearby foods").await?;

        match serde_json::from_str::<ListingsBody>(&text)? {
            ListingsBody::Bare(listings) | ListingsBody::Wrapped { data: listings } => {
                log::debug!("Fetched {} nearby listings", listings.len());
                Ok(listings)
            }
            ListingsBody::Other(value) => {
                log::warn!("Unexpected nearby foods response format: {}", value);
                Ok(Vec::new())
            }
        }
    }

    /// Returns the server's reply, which carries the new listing's `id`.
    pub async fn add_food(
        &self,
        session: &Session,
        food: &NewFood,
    ) -> Result<serde_json::Value, ApiError> {
        let response = self
            .client
            .post(self.url("/api/foods/addFood"))
            .bearer_auth(&session.token)
            .json(food)
            .send()
            .await?;
        let text = ensure_success(response, "Failed to add food item").await?;
        Ok(serde_json::from_str(&text)?)
    }
}

async fn ensure_success(response: Response, default_message: &str) -> Result<String, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    if status.is_success() {
        return Ok(text);
    }
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| default_message.to_string());
    log::error!("ShareBite returned {}: {}", status, message);
    Err(ApiError::Rejected { status, message })
}
