//! Property-based tests for register followed by login
//!
//! Drives the handlers directly over a fresh in-memory state per case.

use axum::extract::State;
use axum::response::Json;
use blogcore::backend::auth::handlers::{login, register, LoginRequest, RegisterRequest};
use blogcore::backend::server::AppState;
use proptest::prelude::*;

use crate::common::test_config;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_login_token_names_registered_user(
        local in "[a-z][a-z0-9]{0,15}",
        domain in "[a-z]{1,10}\\.(com|org|net)",
        password in "[ -~]{1,40}",
    ) {
        prop_assume!(!password.trim().is_empty());
        let email = format!("{}@{}", local, domain);
        let state = AppState::in_memory(&test_config());

        let (registered, token) = tokio_test::block_on(async {
            let (_, Json(registered)) = register(
                State(state.clone()),
                Ok(Json(RegisterRequest {
                    name: Some("Prop".to_string()),
                    email: Some(email.clone()),
                    password: Some(password.clone()),
                })),
            )
            .await
            .unwrap();

            let Json(auth) = login(
                State(state.clone()),
                Ok(Json(LoginRequest {
                    email: Some(email.clone()),
                    password: Some(password.clone()),
                })),
            )
            .await
            .unwrap();

            (registered, auth.token)
        });

        let identity = state.tokens.verify(&token).unwrap();
        prop_assert_eq!(identity.user_id(), registered.user.id);
    }
}
