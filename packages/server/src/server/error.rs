use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::common::AuthError;
use crate::domains::posts::data::MessageResponse;
use crate::domains::posts::PostError;

/// Error returned by every REST handler; renders as `{"message": ...}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Post(#[from] PostError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(e) => auth_status(e),
            ApiError::Post(e) => match e {
                PostError::PostNotFound | PostError::ClaimNotFound => StatusCode::NOT_FOUND,
                PostError::AlreadyRequested => StatusCode::BAD_REQUEST,
                PostError::NotClaimable | PostError::StatusConflict { .. } => StatusCode::CONFLICT,
                PostError::Auth(e) => auth_status(e),
                PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

fn auth_status(error: &AuthError) -> StatusCode {
    match error {
        AuthError::AuthenticationRequired | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthError::WrongRole(_) | AuthError::PermissionDenied(_) => StatusCode::FORBIDDEN,
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if let ApiError::Post(PostError::Internal(e)) = &self {
            tracing::error!(error = ?e, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::from(AuthError::AuthenticationRequired), 401),
            (ApiError::from(AuthError::WrongRole("NGO")), 403),
            (ApiError::from(PostError::Auth(AuthError::PermissionDenied("x".into()))), 403),
            (ApiError::from(PostError::PostNotFound), 404),
            (ApiError::from(PostError::ClaimNotFound), 404),
            (ApiError::from(PostError::AlreadyRequested), 400),
            (ApiError::from(PostError::NotClaimable), 409),
            (
                ApiError::from(PostError::StatusConflict {
                    current: "claimed".into(),
                }),
                409,
            ),
            (ApiError::from(PostError::Internal(anyhow::anyhow!("boom"))), 500),
            (ApiError::BadRequest("bad".into()), 400),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status().as_u16(), expected, "{error:?}");
        }
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_leaked() {
        let response =
            ApiError::from(PostError::Internal(anyhow::anyhow!("connection refused"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_duplicate_claim_message() {
        let response = ApiError::from(PostError::AlreadyRequested).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "You have already requested to claim this food."
        );
    }
}
