//! Tracker API client.

use crate::models::{MatchHistory, Player, SteamInfo};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Request};
use serde::de::DeserializeOwned;
use std::{fmt, time::Duration};
use tracing::{debug, info, instrument, warn};
use url::Url;
use yamato_common::{YamatoError, YamatoResult};

/// Per-request timeout covering connect, send and body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "trn-api-key";

/// Source of player statistics.
///
/// Command handlers depend on this rather than on [`StatsClient`] so they can
/// be exercised without a network.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetches a profile. The filter arguments are passed through to the API.
    async fn get_player(
        &self,
        account_name: &str,
        region: &str,
        season: &str,
        mode: &str,
    ) -> YamatoResult<Player>;

    /// Fetches a player's matches, most recent first.
    async fn get_match_history(&self, player: &Player) -> YamatoResult<MatchHistory>;

    /// Looks up the tracker account linked to a Steam id.
    async fn get_steam_info(&self, steam_id: &str) -> YamatoResult<SteamInfo>;
}

/// HTTP client for the tracker API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct StatsClient {
    http: Client,
    api_key: String,
    base_url: Url,
}

impl fmt::Debug for StatsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl StatsClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// [`YamatoError::Config`] when `base_url` is not an absolute URL that
    /// endpoints can be joined onto, or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, base_url: &str) -> YamatoResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            YamatoError::config_with_source(format!("Invalid tracker base URL '{base_url}'"), e)
        })?;
        if base_url.cannot_be_a_base() {
            return Err(YamatoError::config(format!(
                "Tracker base URL '{base_url}' cannot be used as a base"
            )));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| YamatoError::config_with_source("Failed to create HTTP client", e))?;

        info!("Tracker client targeting {}", base_url);

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url,
        })
    }

    /// The base URL endpoints are resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a GET request for `endpoint` resolved against the base URL.
    ///
    /// `endpoint` is a relative reference such as `profile/pc/name?region=na`.
    /// An absolute reference replaces the base entirely.
    ///
    /// # Errors
    ///
    /// [`YamatoError::RequestBuild`] when the reference cannot be resolved or
    /// the API key is not a valid header value.
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    pub fn build_request(&self, endpoint: &str) -> YamatoResult<Request> {
        let url = self.base_url.join(endpoint).map_err(|e| {
            YamatoError::request_build_with_source(format!("Invalid endpoint '{endpoint}'"), e)
        })?;
        debug!("Resolved request URL: {}", url);

        self.http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, self.api_key.as_str())
            .build()
            .map_err(|e| YamatoError::request_build_with_source("Failed to build request", e))
    }

    /// Sends `request` and decodes a 2xx JSON body into `T`.
    ///
    /// The response body is always read to the end, so the connection goes
    /// back to the pool whatever the outcome.
    ///
    /// # Errors
    ///
    /// [`YamatoError::Network`] on transport failure, timeout or a non-2xx
    /// status; [`YamatoError::Decode`] when the body does not fit `T`.
    #[instrument(skip(self, request), fields(url = %request.url()))]
    pub async fn execute<T>(&self, request: Request) -> YamatoResult<T>
    where
        T: DeserializeOwned,
    {
        let url = request.url().clone();
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!("Tracker responded with {} for {}", status, url);
            return Err(YamatoError::network_with_status(
                format!("Tracker responded with {status}"),
                status.as_u16(),
            ));
        }

        debug!("Received {} bytes", body.len());
        serde_json::from_slice(&body).map_err(|e| {
            YamatoError::decode_with_source(format!("Unexpected response body from {url}"), e)
        })
    }

    async fn fetch<T>(&self, endpoint: &str) -> YamatoResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(endpoint)?;
        self.execute(request).await
    }

    /// Fetches a profile from `profile/pc/{account}`.
    #[instrument(skip(self))]
    pub async fn get_player(
        &self,
        account_name: &str,
        region: &str,
        season: &str,
        mode: &str,
    ) -> YamatoResult<Player> {
        info!("Fetching player profile");
        self.fetch(&player_endpoint(account_name, region, season, mode))
            .await
    }

    /// Fetches `matches/pc/{account_id}` and sorts it most recent first.
    #[instrument(skip(self, player), fields(account_id = %player.account_id))]
    pub async fn get_match_history(&self, player: &Player) -> YamatoResult<MatchHistory> {
        info!("Fetching match history");
        let mut history: MatchHistory = self
            .fetch(&match_history_endpoint(&player.account_id))
            .await?;
        history.sort_most_recent_first();
        debug!("Fetched {} matches", history.len());
        Ok(history)
    }

    /// Looks up `search?steamId={steam_id}`.
    #[instrument(skip(self))]
    pub async fn get_steam_info(&self, steam_id: &str) -> YamatoResult<SteamInfo> {
        info!("Looking up Steam account");
        self.fetch(&steam_info_endpoint(steam_id)).await
    }
}

#[async_trait]
impl StatsSource for StatsClient {
    async fn get_player(
        &self,
        account_name: &str,
        region: &str,
        season: &str,
        mode: &str,
    ) -> YamatoResult<Player> {
        Self::get_player(self, account_name, region, season, mode).await
    }

    async fn get_match_history(&self, player: &Player) -> YamatoResult<MatchHistory> {
        Self::get_match_history(self, player).await
    }

    async fn get_steam_info(&self, steam_id: &str) -> YamatoResult<SteamInfo> {
        Self::get_steam_info(self, steam_id).await
    }
}

/// Relative reference for a profile lookup. Arguments are inserted verbatim.
pub fn player_endpoint(account_name: &str, region: &str, season: &str, mode: &str) -> String {
    format!("profile/pc/{account_name}?region={region}&season={season}&mode={mode}")
}

/// Relative reference for a match history lookup.
pub fn match_history_endpoint(account_id: &str) -> String {
    format!("matches/pc/{account_id}")
}

/// Relative reference for a Steam id lookup.
pub fn steam_info_endpoint(steam_id: &str) -> String {
    format!("search?steamId={steam_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StatsClient {
        StatsClient::new("secret", "https://api.pubgtracker.com/v2/").unwrap()
    }

    #[test]
    fn test_new_rejects_bad_base_urls() {
        assert!(matches!(
            StatsClient::new("k", "not a url").unwrap_err(),
            YamatoError::Config { .. }
        ));
        assert!(StatsClient::new("k", "mailto:a@b.c").is_err());
    }

    #[test]
    fn test_build_request_resolves_relative_endpoint() {
        let request = client()
            .build_request(&player_endpoint("playerA", "na", "2017-pre1", "squad"))
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.pubgtracker.com/v2/profile/pc/playerA?region=na&season=2017-pre1&mode=squad"
        );
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert_eq!(request.headers()[API_KEY_HEADER], "secret");
    }

    #[test]
    fn test_build_request_without_trailing_slash_replaces_last_segment() {
        let client = StatsClient::new("k", "https://api.pubgtracker.com/v2").unwrap();
        let request = client.build_request("matches/pc/x").unwrap();
        assert_eq!(request.url().as_str(), "https://api.pubgtracker.com/matches/pc/x");
    }

    #[test]
    fn test_build_request_absolute_reference_replaces_base() {
        let request = client().build_request("http://other.example/x").unwrap();
        assert_eq!(request.url().as_str(), "http://other.example/x");
    }

    #[test]
    fn test_build_request_unresolvable_reference() {
        let err = client().build_request("http://[::1").unwrap_err();
        assert!(matches!(err, YamatoError::RequestBuild { .. }));
    }

    #[test]
    fn test_build_request_rejects_bad_header_value() {
        let client = StatsClient::new("bad\nkey", "https://api.pubgtracker.com/v2/").unwrap();
        assert!(matches!(
            client.build_request("search?steamId=1").unwrap_err(),
            YamatoError::RequestBuild { .. }
        ));
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(match_history_endpoint("account.1"), "matches/pc/account.1");
        assert_eq!(steam_info_endpoint("7656"), "search?steamId=7656");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("secret"));
    }
}
