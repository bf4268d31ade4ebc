//! Collaborators backed by the EasyRide HTTP API.

use futures::future::LocalBoxFuture;
use reqwasm::http::{Request, RequestCredentials, Response};

use crate::{
    client::{
        config::ClientConfig,
        error::ClientError,
        service::{SessionProvider, UserRepository},
    },
    model::{
        api::ErrorDto,
        user::{Role, RoleUpdateDto, SessionUserDto},
    },
};

/// Session cookie based identity provider.
pub struct HttpSession {
    config: ClientConfig,
}

impl HttpSession {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl SessionProvider for HttpSession {
    fn current_user(&self) -> LocalBoxFuture<'_, Result<Option<SessionUserDto>, ClientError>> {
        Box::pin(async move {
            let response = Request::get(&self.config.endpoint("auth/user"))
                .credentials(RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ClientError::Request(e.to_string()))?;

            match response.status() {
                200 => {
                    let user = response
                        .json::<SessionUserDto>()
                        .await
                        .map_err(|e| ClientError::Parse(format!("user data: {}", e)))?;
                    Ok(Some(user))
                }
                401 | 404 => Ok(None),
                _ => Err(error_from_response(response).await),
            }
        })
    }

    fn sign_out(&self) -> LocalBoxFuture<'_, Result<(), ClientError>> {
        Box::pin(async move {
            let response = Request::post(&self.config.endpoint("auth/logout"))
                .credentials(RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ClientError::Request(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(error_from_response(response).await)
            }
        })
    }
}

/// `users` collection exposed as `/users/{id}` documents.
pub struct HttpUserRepository {
    config: ClientConfig,
}

impl HttpUserRepository {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl UserRepository for HttpUserRepository {
    fn update_role<'a>(
        &'a self,
        user_id: &'a str,
        role: Role,
    ) -> LocalBoxFuture<'a, Result<(), ClientError>> {
        Box::pin(async move {
            let body = serde_json::to_string(&RoleUpdateDto { role })
                .map_err(|e| ClientError::Parse(e.to_string()))?;

            let response = Request::patch(&self.config.endpoint(&format!("users/{}", user_id)))
                .credentials(RequestCredentials::Include)
                .header("Content-Type", "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| ClientError::Request(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(error_from_response(response).await)
            }
        })
    }
}

/// Builds a status error, preferring the backend's `ErrorDto` message over the raw body.
async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();

    let message = match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorDto>(&text) {
            Ok(error_dto) => error_dto.error,
            Err(_) if text.is_empty() => "Unknown error".to_string(),
            Err(_) => text,
        },
        Err(_) => "Unknown error".to_string(),
    };

    ClientError::Status { status, message }
}
