use reqwest::{Response, StatusCode};

use crate::{entities::envelope::ErrorBody, errors::AppError};

/// Passes 2xx responses through; maps everything else onto [`AppError`],
/// keeping the service's `message` when the body carries one.
pub async fn check_response(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = server_message(&body);
    tracing::debug!(status = status.as_u16(), ?message, "Profile service returned an error");

    if status == StatusCode::NOT_FOUND {
        Err(AppError::NotFound(message))
    } else {
        Err(AppError::Server { status: status.as_u16(), message })
    }
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
