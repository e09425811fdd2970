//! Property-based tests for token issuance and verification

use blogcore::backend::auth::{AuthError, TokenService};
use proptest::prelude::*;
use std::time::Duration;
use uuid::Uuid;

fn service(secret: &[u8], ttl: u64) -> TokenService {
    TokenService::new(secret, Duration::from_secs(ttl))
}

proptest! {
    #[test]
    fn test_valid_until_exactly_expiry(
        subject in any::<u128>(),
        issued_at in 1_000_000u64..4_000_000_000,
        ttl in 1u64..100_000,
        elapsed in 0u64..200_000,
    ) {
        let tokens = service(b"property-secret", ttl);
        let user_id = Uuid::from_u128(subject);
        let token = tokens.issue_at(user_id, issued_at).unwrap();
        let now = issued_at + elapsed;

        match tokens.verify_at(&token, now) {
            Ok(identity) => {
                prop_assert!(elapsed < ttl);
                prop_assert_eq!(identity.user_id(), user_id);
                prop_assert_eq!(identity.expires_at(), issued_at + ttl);
            }
            Err(err) => {
                prop_assert!(elapsed >= ttl);
                prop_assert_eq!(err, AuthError::TokenExpired);
            }
        }
    }

    #[test]
    fn test_foreign_secret_is_invalid(
        subject in any::<u128>(),
        ours in "[a-z0-9]{8,32}",
        theirs in "[a-z0-9]{8,32}",
    ) {
        prop_assume!(ours != theirs);
        let signer = service(theirs.as_bytes(), 3600);
        let verifier = service(ours.as_bytes(), 3600);

        let token = signer.issue(Uuid::from_u128(subject)).unwrap();

        prop_assert_eq!(verifier.verify(&token), Err(AuthError::TokenInvalid));
    }

    #[test]
    fn test_arbitrary_strings_never_verify(garbage in "\\PC{0,200}") {
        let tokens = service(b"property-secret", 3600);
        let result = tokens.verify(&garbage);
        prop_assert!(matches!(
            result,
            Err(AuthError::TokenInvalid) | Err(AuthError::TokenMissing)
        ));
    }
}
