//! Shared HTTP response helpers for the data API.

use serde::Deserialize;

use crate::error::DataError;

/// Error body returned by the data API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Return the response unchanged on success, else [`DataError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, DataError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(DataError::Api {
        status: status.as_u16(),
        message: api_message(&body),
    })
}

fn api_message(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
        return body.trim().to_string();
    };
    let mut message = parsed.message.unwrap_or_default();
    for extra in [parsed.details, parsed.hint].into_iter().flatten() {
        if !extra.is_empty() {
            message.push_str(" — ");
            message.push_str(&extra);
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn message_includes_hint() {
        let body = r#"{"code":"42P01","details":null,"hint":"Perhaps you meant the table 'public.grupos'","message":"relation \"public.grupo\" does not exist"}"#;
        assert_eq!(
            api_message(body),
            "relation \"public.grupo\" does not exist — Perhaps you meant the table 'public.grupos'"
        );
    }

    #[test]
    fn non_json_body_is_passed_through() {
        assert_eq!(api_message(" upstream timeout \n"), "upstream timeout");
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let resp = mock_response(401, r#"{"message":"JWT expired","code":"PGRST301"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, DataError::Api { status: 401, ref message } if message == "JWT expired"));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "[]")).await.is_ok());
    }
}
