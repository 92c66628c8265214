use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use shared::{ApiError, ApiSuccess, AuthResponse, CreateUserRequest, LoginRequest};
use web_sys::RequestCredentials;

/// Request host, set at build time; defaults to same-origin `/api`.
const API_BASE: &str = match option_env!("SAKHI_API_BASE") {
    Some(base) => base,
    None => "/api",
};

pub struct ApiClient;

impl ApiClient {
    fn builder(method: &str, path: &str) -> Result<RequestBuilder, String> {
        let url = format!("{}{}", API_BASE, path);

        let request = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err("Invalid method".to_string()),
        };

        // The session lives in a cookie, so every call carries credentials.
        Ok(request.credentials(RequestCredentials::Include))
    }

    async fn request<T: DeserializeOwned>(
        method: &str,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<T, String> {
        let request = Self::builder(method, path)?;

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?
        } else {
            request.send().await.map_err(|e| e.to_string())?
        };

        if response.ok() {
            let result: ApiSuccess<T> = response.json().await.map_err(|e| e.to_string())?;
            Ok(result.data)
        } else {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "unknown".to_string(),
                message: "An unknown error occurred".to_string(),
            });
            Err(error.message)
        }
    }

    // Auth endpoints
    pub async fn register(request: CreateUserRequest) -> Result<AuthResponse, String> {
        Self::request("POST", "/users/register", Some(request)).await
    }

    pub async fn login(request: LoginRequest) -> Result<AuthResponse, String> {
        Self::request("POST", "/users/login", Some(request)).await
    }

    /// Best-effort session invalidation. No body either way; on failure the
    /// server's message is all the caller gets.
    pub async fn logout() -> Result<(), String> {
        let response = Self::builder("POST", "/users/logout")?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.ok() {
            Ok(())
        } else {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "unknown".to_string(),
                message: "An unknown error occurred".to_string(),
            });
            Err(error.message)
        }
    }
}
