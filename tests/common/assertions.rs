//! Response assertions
//!
//! Every error response carries `{"error": <message>, "status": <code>}`.

use axum::http::StatusCode;
use axum_test::TestResponse;
use pretty_assertions::assert_eq;

/// Assert the status code and error message of a failed response
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], message);
    assert_eq!(body["status"], status.as_u16());
}
