//! Caller identity supplied by the authentication layer in front of the API.
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;
use votes_shared::types::UserId;

use crate::errors::ApiError;

/// Header carrying the authenticated user's id.
pub const CALLER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Rejects with `ApiError::Unauthorized` when the
/// header is missing, is not a UUID, or is the nil UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CALLER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        match Uuid::parse_str(value.trim()) {
            Ok(id) if !id.is_nil() => Ok(CallerId(id)),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<CallerId, ApiError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(CALLER_ID_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        CallerId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_header() {
        let id = Uuid::new_v4();
        let caller = extract(Some(&id.to_string())).await.unwrap();
        assert_eq!(caller, CallerId(id));
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header() {
        assert!(matches!(extract(None).await, Err(ApiError::Unauthorized)));
        assert!(matches!(extract(Some("alice")).await, Err(ApiError::Unauthorized)));
        assert!(matches!(
            extract(Some(&Uuid::nil().to_string())).await,
            Err(ApiError::Unauthorized)
        ));
    }
}
