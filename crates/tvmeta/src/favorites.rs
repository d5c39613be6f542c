//! User favorites flows.
//!
//! Every operation here needs a well-formed account id; the remote service
//! answers each request with the full updated favorites list, which is what
//! add/remove verify against rather than trusting the HTTP status alone.

use tracing::instrument;
use tvmeta_api::tvdb::LocalTvdbApi;
use tvmeta_db::remove_series;

use super::{Error, TvMeta};

impl<A: LocalTvdbApi> TvMeta<A> {
    /// Fetches the favorites list for the configured account, sorted
    /// ascending by series id.
    ///
    /// # Errors
    ///
    /// - [`Error::Credential`] if the account id is missing or malformed.
    /// - [`Error::Api`] if the remote request fails.
    #[instrument(skip_all)]
    pub async fn user_favorites(&self) -> Result<Vec<u32>, Error> {
        let account_id = self.config.account_id()?;
        Ok(self.api.user_favorites(account_id).await?)
    }

    /// Adds a series to the favorites list and verifies it is present in
    /// the list the service returns.
    ///
    /// # Errors
    ///
    /// - [`Error::Credential`] if the account id is missing or malformed.
    /// - [`Error::Api`] if the remote request fails.
    /// - [`Error::AddFavoriteRejected`] if the updated list does not
    ///   contain the series.
    #[instrument(skip_all)]
    pub async fn add_user_favorite(&self, series_id: u32) -> Result<(), Error> {
        let account_id = self.config.account_id()?;
        let ids = self.api.add_favorite(account_id, series_id).await?;

        if ids.binary_search(&series_id).is_err() {
            return Err(Error::AddFavoriteRejected { series_id });
        }

        Ok(())
    }

    /// Removes a series from the favorites list, verifies it is gone from
    /// the list the service returns, and evicts the local cache row.
    ///
    /// The local eviction is best-effort: a failure is logged and does not
    /// fail the removal, which already succeeded remotely.
    ///
    /// # Errors
    ///
    /// - [`Error::Credential`] if the account id is missing or malformed.
    /// - [`Error::Api`] if the remote request fails.
    /// - [`Error::RemoveFavoriteRejected`] if the updated list still
    ///   contains the series.
    #[instrument(skip_all)]
    pub async fn remove_user_favorite(&self, series_id: u32) -> Result<(), Error> {
        let account_id = self.config.account_id()?;
        let ids = self.api.remove_favorite(account_id, series_id).await?;

        if ids.binary_search(&series_id).is_ok() {
            return Err(Error::RemoveFavoriteRejected { series_id });
        }

        if let Err(e) = remove_series(&self.conn, series_id) {
            tracing::warn!(
                series_id,
                error = %e,
                "failed to evict removed favorite from local cache"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tvmeta_db::{NewSeries, insert_series, lookup_series, open_db};

    use crate::testutil::MockApi;
    use crate::{Config, Error, TvMeta};

    fn test_config() -> Config {
        Config::new()
            .with_api_key("0123456789ABCDEF")
            .with_account_id("FEDCBA9876543210")
    }

    fn client_with_tempdir(api: MockApi) -> (TvMeta<MockApi>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_db(Some(&dir.path().to_path_buf())).unwrap();
        let client = TvMeta::with_connection(test_config(), api, conn);
        (client, dir)
    }

    #[tokio::test]
    async fn test_user_favorites_returns_sorted_list() {
        // Arrange
        let (client, _dir) =
            client_with_tempdir(MockApi::returning_favorites(vec![73739, 79349, 82066]));

        // Act
        let ids = client.user_favorites().await.unwrap();

        // Assert
        assert_eq!(ids, vec![73739, 79349, 82066]);
        assert_eq!(client.api.favorites_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_missing_account_id_fails_before_any_request() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let conn = open_db(Some(&dir.path().to_path_buf())).unwrap();
        let config = Config::new().with_api_key("0123456789ABCDEF");
        let client = TvMeta::with_connection(config, MockApi::default(), conn);

        // Act
        let result = client.user_favorites().await;

        // Assert
        assert!(matches!(result, Err(Error::Credential(_))));
        assert_eq!(client.api.favorites_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_add_favorite_verifies_membership() {
        // Arrange: the returned list contains the added series
        let (client, _dir) =
            client_with_tempdir(MockApi::returning_favorites(vec![73739, 82066]));

        // Act & Assert
        client.add_user_favorite(82066).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_favorite_rejected_when_absent_from_list() {
        // Arrange: the service quietly dropped the add
        let (client, _dir) = client_with_tempdir(MockApi::returning_favorites(vec![73739]));

        // Act
        let result = client.add_user_favorite(82066).await;

        // Assert
        assert!(matches!(
            result,
            Err(Error::AddFavoriteRejected { series_id: 82066 })
        ));
    }

    #[tokio::test]
    async fn test_remove_favorite_evicts_local_cache_row() {
        // Arrange: series cached locally, remote list no longer contains it
        let (client, _dir) = client_with_tempdir(MockApi::returning_favorites(vec![73739]));
        insert_series(
            &client.conn,
            &NewSeries {
                id: 82066,
                name: "Fringe",
                genre: None,
                status: Some("Ended"),
            },
        )
        .unwrap();

        // Act
        client.remove_user_favorite(82066).await.unwrap();

        // Assert: local copy evicted
        assert!(lookup_series(&client.conn, 82066).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_favorite_rejected_when_still_listed() {
        // Arrange: the service still reports the series as a favorite
        let (client, _dir) =
            client_with_tempdir(MockApi::returning_favorites(vec![73739, 82066]));
        insert_series(
            &client.conn,
            &NewSeries {
                id: 82066,
                name: "Fringe",
                genre: None,
                status: Some("Ended"),
            },
        )
        .unwrap();

        // Act
        let result = client.remove_user_favorite(82066).await;

        // Assert: error surfaced, local copy kept
        assert!(matches!(
            result,
            Err(Error::RemoveFavoriteRejected { series_id: 82066 })
        ));
        assert!(lookup_series(&client.conn, 82066).unwrap().is_some());
    }
}
