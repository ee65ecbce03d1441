//! Response status checks for the lead endpoint.

use crate::error::LeadError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. A 429 becomes
/// [`LeadError::RateLimited`] (falling back to 60 s when `Retry-After` is
/// absent or not a number of seconds); any other non-success status becomes
/// [`LeadError::Api`] carrying the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LeadError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(LeadError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(LeadError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mock_response(status: u16, retry_after: Option<&str>, body: &str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    #[rstest]
    #[case(Some("120"), 120)]
    #[case(Some(" 5 "), 5)]
    #[case(None, 60)]
    #[case(Some("not-a-number"), 60)]
    #[case(Some("Wed, 21 Oct 2015 07:28:00 GMT"), 60)]
    fn retry_after_parsing(#[case] header: Option<&str>, #[case] expected: u64) {
        let resp = mock_response(429, header, "");
        assert_eq!(parse_retry_after(&resp), expected);
    }

    #[tokio::test]
    async fn rate_limited_carries_retry_after() {
        let err = check_response(mock_response(429, Some("30"), ""))
            .await
            .unwrap_err();
        assert!(matches!(err, LeadError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn server_error_keeps_body() {
        let err = check_response(mock_response(500, None, "boom"))
            .await
            .unwrap_err();
        match err {
            LeadError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(201, None, "")).await.is_ok());
    }
}
