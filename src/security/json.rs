use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::Deserializer;

use crate::errors::AppError;

pub const MAX_BODY_SIZE_BYTES: usize = 64 * 1024; // 64 KiB upper bound for form bodies

/// Strict JSON extractor for form payloads: requires a JSON content type,
/// reports the path of the first bad field and refuses trailing data.
#[derive(Debug)]
pub struct FormJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        validate_content_type(req.headers())?;

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
                _ => AppError::InvalidJson(format!(
                    "failed to read request body: {}",
                    rejection.body_text()
                )),
            })?;

        parse_json(&body).map(FormJson)
    }
}

pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let mut deserializer = Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let error = err.into_inner();
        if path.is_empty() || path == "." {
            AppError::InvalidJson(error.to_string())
        } else {
            AppError::InvalidJson(format!("at {path}: {error}"))
        }
    })?;

    deserializer
        .end()
        .map_err(|err| AppError::InvalidJson(format!("unexpected trailing data: {err}")))?;

    Ok(value)
}

fn validate_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    if let Some(value) = headers.get(CONTENT_TYPE)
        && let Ok(value) = value.to_str()
        && (value.starts_with("application/json") || value.ends_with("+json"))
    {
        return Ok(());
    }

    Err(AppError::UnsupportedMediaType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::login::LoginInput;
    use axum::http::HeaderValue;

    #[test]
    fn test_accepts_json_content_types() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(validate_content_type(&headers).is_ok());

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/vnd.api+json"));
        assert!(validate_content_type(&headers).is_ok());
    }

    #[test]
    fn test_rejects_other_content_types() {
        let mut headers = HeaderMap::new();
        assert!(matches!(
            validate_content_type(&headers),
            Err(AppError::UnsupportedMediaType)
        ));

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        assert!(matches!(
            validate_content_type(&headers),
            Err(AppError::UnsupportedMediaType)
        ));
    }

    #[test]
    fn test_parse_error_names_the_field() {
        let err = parse_json::<LoginInput>(br#"{"email": 5}"#).unwrap_err();
        match err {
            AppError::InvalidJson(message) => assert!(message.contains("email"), "{message}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_trailing_data_rejected() {
        let err = parse_json::<LoginInput>(br#"{"email":"a@b.com"} {}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidJson(_)));
    }
}
