//! Credential format validation.
//!
//! Validation happens before any authenticated network call; a request is
//! never attempted with a token that cannot possibly be accepted.

use std::sync::LazyLock;

use regex::Regex;

use super::error::CredentialError;

/// Format shared by API keys and account ids.
#[allow(clippy::expect_used)]
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9A-F]{16}$").expect("failed to compile token regex"));

/// Checks that `api_key` is a 16-character uppercase hex token.
///
/// # Errors
///
/// Returns [`CredentialError::MalformedApiKey`] if the format does not match.
pub fn validate_api_key(api_key: &str) -> Result<(), CredentialError> {
    if TOKEN_RE.is_match(api_key) {
        Ok(())
    } else {
        Err(CredentialError::MalformedApiKey)
    }
}

/// Checks that `account_id` is a 16-character uppercase hex token.
///
/// # Errors
///
/// Returns [`CredentialError::MalformedAccountId`] if the format does not
/// match.
pub fn validate_account_id(account_id: &str) -> Result<(), CredentialError> {
    if TOKEN_RE.is_match(account_id) {
        Ok(())
    } else {
        Err(CredentialError::MalformedAccountId)
    }
}
