//! Custom Axum extractors
//!
//! Both reject with [`ApiError::BadRequest`] so every decode failure is a
//! plain-text 400 carrying the decoder's message.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::UserId;

/// JSON request body, decoded regardless of `Content-Type`.
///
/// Decodes the first value in the body; trailing data is not inspected.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        // Only the first JSON value is read; anything after it is ignored
        match serde_json::Deserializer::from_slice(&bytes).into_iter::<T>().next() {
            Some(Ok(value)) => Ok(Self(value)),
            Some(Err(e)) => Err(ApiError::BadRequest(e.to_string())),
            None => Err(ApiError::BadRequest("EOF".to_string())),
        }
    }
}

/// User id from the `id` query parameter.
///
/// The first `id` wins when repeated; missing or non-integer is a 400.
pub struct UserIdQuery(pub UserId);

impl<S> FromRequestParts<S> for UserIdQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> =
            Query::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let raw = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value))
            .unwrap_or_default();

        Ok(Self(UserId::parse(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    use crate::models::NewUser;

    async fn user_id(uri: &str) -> Result<UserId, ApiError> {
        let (mut parts, _) = HttpRequest::builder().uri(uri).body(()).unwrap().into_parts();
        UserIdQuery::from_request_parts(&mut parts, &())
            .await
            .map(|UserIdQuery(id)| id)
    }

    #[tokio::test]
    async fn first_id_wins() {
        assert_eq!(user_id("/users/delete?id=4&id=9").await.unwrap().get(), 4);
    }

    #[tokio::test]
    async fn missing_id_is_bad_request() {
        assert!(matches!(user_id("/users/delete").await, Err(ApiError::BadRequest(_))));
        assert!(matches!(
            user_id("/users/delete?other=1").await,
            Err(ApiError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        assert!(matches!(user_id("/users/delete?id=abc").await, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn body_decodes_without_content_type() {
        let req = HttpRequest::builder()
            .body(Body::from(r#"{"name":"Ana","email":"ana@x.com"}"#))
            .unwrap();
        let JsonBody(new) = JsonBody::<NewUser>::from_request(req, &()).await.unwrap();
        assert_eq!(new, NewUser::new("Ana", "ana@x.com"));
    }

    #[tokio::test]
    async fn trailing_data_after_first_value_is_ignored() {
        let req = HttpRequest::builder()
            .body(Body::from("{\"name\":\"Ana\",\"email\":\"a@x\"}\n{\"name\":\"second\"} junk"))
            .unwrap();
        let JsonBody(new) = JsonBody::<NewUser>::from_request(req, &()).await.unwrap();
        assert_eq!(new, NewUser::new("Ana", "a@x"));
    }

    #[tokio::test]
    async fn empty_body_is_bad_request() {
        let req = HttpRequest::builder().body(Body::empty()).unwrap();
        let result = JsonBody::<NewUser>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::BadRequest(m)) if m == "EOF"));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let req = HttpRequest::builder().body(Body::from("{not json")).unwrap();
        let result = JsonBody::<NewUser>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
