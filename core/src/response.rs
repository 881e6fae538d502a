//! Response parsing for the Pinterest v1 envelope.
//!
//! Successful bodies wrap the resource in `{"data": ...}`; collection
//! endpoints add a `"page"` block. Failures carry
//! `{"status": "failure", "code": N, "message": "...", "type": "api"}`.
//! Status is checked before anything is decoded, so a rejected request never
//! produces a model.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::models::{Page, Paginated};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct PageEnvelope<T> {
    data: Vec<T>,
    #[serde(default)]
    page: Option<Page>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<i64>,
}

/// Decodes `{"data": T}`.
pub fn parse_data<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    let envelope: Envelope<T> = serde_json::from_str(&response.body).map_err(ApiError::Decode)?;
    Ok(envelope.data)
}

/// Decodes `{"data": [T], "page": {...}}`.
pub fn parse_page<T: DeserializeOwned>(response: HttpResponse) -> Result<Paginated<T>, ApiError> {
    check_status(&response)?;
    let envelope: PageEnvelope<T> =
        serde_json::from_str(&response.body).map_err(ApiError::Decode)?;
    Ok(Paginated {
        items: envelope.data,
        page: envelope.page.unwrap_or_default(),
    })
}

/// Decodes a body that is not wrapped in an envelope (token exchange).
pub fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

/// Checks the status of a response whose body carries nothing useful.
pub fn parse_empty(response: HttpResponse) -> Result<(), ApiError> {
    check_status(&response)
}

/// Map non-2xx status codes to `ApiError::Api`, preferring the server's message.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }

    let parsed = serde_json::from_str::<ErrorBody>(&response.body).ok();
    let code = parsed.as_ref().and_then(|b| b.code);
    let message = parsed
        .and_then(|b| b.message)
        .or_else(|| {
            let body = response.body.trim();
            (!body.is_empty()).then(|| body.to_string())
        })
        .unwrap_or_else(|| reason_phrase(response.status).to_string());

    Err(ApiError::Api {
        status: response.status,
        code,
        message,
    })
}

fn reason_phrase(status: u16) -> &'static str {
    ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("unexpected status")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pin, User};

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn parse_data_unwraps_envelope() {
        let user: User =
            parse_data(response(200, r#"{"data": {"id": "1", "username": "alice"}}"#)).unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn parse_page_keeps_cursor_separate() {
        let page: Paginated<Pin> = parse_page(response(
            200,
            r#"{"data": [{"id": "1"}, {"id": "2"}], "page": {"cursor": "abc", "next": "https://api.pinterest.com/v1/me/pins/?cursor=abc"}}"#,
        ))
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor(), Some("abc"));
    }

    #[test]
    fn parse_page_without_page_block_has_no_cursor() {
        let page: Paginated<Pin> = parse_page(response(200, r#"{"data": []}"#)).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn api_error_uses_server_message() {
        let err = parse_data::<Pin>(response(
            401,
            r#"{"status": "failure", "code": 3, "message": "Authorization failed.", "type": "api"}"#,
        ))
        .unwrap_err();
        match err {
            ApiError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 401);
                assert_eq!(code, Some(3));
                assert_eq!(message, "Authorization failed.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_raw_body_then_reason() {
        let err = parse_empty(response(502, "bad gateway from proxy")).unwrap_err();
        assert!(matches!(err, ApiError::Api { ref message, .. } if message == "bad gateway from proxy"));

        let err = parse_empty(response(404, "")).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, ApiError::Api { ref message, .. } if message == "Not Found"));
    }

    #[test]
    fn malformed_body_on_2xx_is_decode_error() {
        let err = parse_data::<Pin>(response(200, "<html>oops</html>")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn null_data_is_decode_error() {
        let err = parse_data::<Pin>(response(200, r#"{"data": null}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn non_2xx_with_valid_model_body_is_still_api_error() {
        let err = parse_data::<Pin>(response(500, r#"{"data": {"id": "1"}}"#)).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
