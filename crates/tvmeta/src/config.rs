//! Client configuration.

use std::path::PathBuf;

use tvmeta_api::tvdb::{CredentialError, validate_account_id, validate_api_key};

/// Configuration passed to [`crate::TvMeta`].
///
/// Both credentials are optional at construction time; operations that need
/// one validate it (format only) before any network call and fail fast when
/// it is missing or malformed.
#[derive(Debug, Clone, Default)]
pub struct Config {
    api_key: Option<String>,
    account_id: Option<String>,
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key used for by-id series lookups.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the account id used for favorites operations.
    #[must_use]
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Sets the directory holding the local cache database
    /// (default: `~/.local/share/tvmeta`).
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Directory holding the local cache database, if set.
    #[must_use]
    pub const fn data_dir(&self) -> Option<&PathBuf> {
        self.data_dir.as_ref()
    }

    /// Returns the API key after checking its format.
    pub(crate) fn api_key(&self) -> Result<&str, CredentialError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(CredentialError::MissingApiKey)?;
        validate_api_key(key)?;
        Ok(key)
    }

    /// Returns the account id after checking its format.
    pub(crate) fn account_id(&self) -> Result<&str, CredentialError> {
        let id = self
            .account_id
            .as_deref()
            .ok_or(CredentialError::MissingAccountId)?;
        validate_account_id(id)?;
        Ok(id)
    }
}
