//! Property-based tests for repo-from-path token construction.
//!
//! These tests use proptest to generate random locations and credentials
//! and verify that the token invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::command::RepoQueryParams;
    use crate::repo_url::RepositoryLocation;
    use percent_encoding::percent_decode_str;
    use proptest::prelude::*;

    // ============================================================================
    // token without credentials
    // ============================================================================

    proptest! {
        /// Property: without credentials the token is exactly "repoid,location"
        #[test]
        fn token_without_credentials_is_verbatim(
            repo_id in "[a-z0-9]{0,16}",
            location in ".*",
        ) {
            let params = RepoQueryParams::new(
                repo_id.clone(),
                RepositoryLocation::new(location.clone()),
                "spec",
            );
            prop_assert_eq!(params.repo_from_path(), format!("{},{}", repo_id, location));
        }

        /// Property: a single credential is never embedded
        #[test]
        fn token_with_one_credential_is_verbatim(
            location in "https?://[a-z]{1,10}(:[0-9]{1,4})?/[a-z/]{0,20}",
            user in "[a-z]{1,8}",
        ) {
            let only_user = RepositoryLocation::with_credentials(
                location.clone(),
                Some(user.clone()),
                None,
            );
            let only_password = RepositoryLocation::with_credentials(
                location.clone(),
                None,
                Some(user),
            );
            prop_assert_eq!(only_user.location_with_credentials(), location.clone());
            prop_assert_eq!(only_password.location_with_credentials(), location);
        }
    }

    // ============================================================================
    // token with credentials
    // ============================================================================

    proptest! {
        /// Property: credentials land between "scheme://" and the host, and
        /// the encoded password decodes back to the original
        #[test]
        fn token_with_credentials_embeds_userinfo(
            scheme in "https?",
            host_and_path in "[a-z]{1,10}(:[0-9]{1,4})?/[a-z/]{0,20}",
            user in "[a-z]{1,8}",
            password in "[ -~]{1,16}",
        ) {
            let location = format!("{}://{}", scheme, host_and_path);
            let params = RepoQueryParams::new(
                "repoid",
                RepositoryLocation::with_credentials(
                    location,
                    Some(user.clone()),
                    Some(password.clone()),
                ),
                "spec",
            );

            let token = params.repo_from_path();
            let prefix = format!("repoid,{}://{}:", scheme, user);
            let suffix = format!("@{}", host_and_path);
            prop_assert!(token.starts_with(&prefix), "token '{}' lacks prefix '{}'", token, prefix);
            prop_assert!(token.ends_with(&suffix), "token '{}' lacks suffix '{}'", token, suffix);

            let encoded = &token[prefix.len()..token.len() - suffix.len()];
            prop_assert!(!encoded.contains(['@', ':', '/', ' ']));
            let decoded = percent_decode_str(encoded).decode_utf8_lossy().into_owned();
            prop_assert_eq!(decoded, password);
        }

        /// Property: token construction is deterministic
        #[test]
        fn token_is_deterministic(location in ".*", password in ".*") {
            let params = RepoQueryParams::new(
                "repoid",
                RepositoryLocation::with_credentials(
                    location,
                    Some("user".to_string()),
                    Some(password),
                ),
                "spec",
            );
            prop_assert_eq!(params.repo_from_path(), params.repo_from_path());
        }
    }
}
