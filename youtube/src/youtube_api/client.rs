//! Core YouTube API client functionality.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::youtube_api::{
    playlists::{PlaylistItemListResponse, PlaylistListResponse},
    types::Part,
    videos::VideoListResponse,
};
use http::Method;
use serde::de::DeserializeOwned;
use tracing::instrument;

/// The largest page size the API accepts for list calls.
pub const MAX_RESULTS: u32 = 50;

/// Client for the read-only endpoints of the YouTube Data API v3.
///
/// Requests are authorized with an API key passed as the `key` query parameter, so only
/// public data is reachable. Cloning is cheap and clones share one connection pool.
#[derive(Clone)]
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client from an explicit configuration.
    ///
    /// No request is made; an invalid key only surfaces on the first call.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Configuration(format!("build HTTP client: {e}")))?;

        Ok(Self {
            api_key: config.api_key().to_string(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Creates a client using the API key from the environment.
    ///
    /// See [`ApiConfig::from_env`] for where the key is looked up.
    pub fn from_env() -> Result<Self> {
        Self::new(&ApiConfig::from_env()?)
    }

    /// Makes a keyed `GET` request to `resource` and parses the JSON body as `T`.
    ///
    /// Non-success statuses become [`Error::Api`] carrying the response body, which is where
    /// the API explains quota and key problems.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .request(Method::GET, &url)
            .query(&[("key", self.api_key.as_str())])
            .query(query_params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::Api { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches the raw `channels.list` response for a single channel.
    ///
    /// The document is returned untouched so callers can show or store fields that the typed
    /// [`ChannelListResponse`](crate::youtube_api::ChannelListResponse) does not model.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn list_channels_raw(
        &self,
        channel_id: &str,
        parts: &[Part],
    ) -> Result<serde_json::Value> {
        let part = Part::join(parts);
        let query_params = [("part", part.as_str()), ("id", channel_id)];

        let channels: serde_json::Value = self.get("channels", &query_params).await?;

        tracing::debug!(
            channel_id,
            returned_items = channels["items"].as_array().map_or(0, Vec::len),
            "fetched channels"
        );

        Ok(channels)
    }

    /// Fetches any number of videos in one request.
    ///
    /// The IDs are sent comma-joined in a single `id` parameter. Videos that do not exist are
    /// left out of the response rather than reported as errors.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(requested = video_ids.len()))]
    pub async fn list_videos<S: AsRef<str>>(
        &self,
        video_ids: &[S],
        parts: &[Part],
    ) -> Result<VideoListResponse> {
        let part = Part::join(parts);
        let ids = video_ids
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");
        let query_params = [("part", part.as_str()), ("id", ids.as_str())];

        let videos: VideoListResponse = self.get("videos", &query_params).await?;

        tracing::debug!(returned_items = videos.items.len(), "fetched videos");

        Ok(videos)
    }

    /// Fetches a single playlist by ID.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlists/list>
    #[instrument(skip(self))]
    pub async fn list_playlists(
        &self,
        playlist_id: &str,
        parts: &[Part],
    ) -> Result<PlaylistListResponse> {
        let part = Part::join(parts);
        let query_params = [("part", part.as_str()), ("id", playlist_id)];

        let playlists: PlaylistListResponse = self.get("playlists", &query_params).await?;

        tracing::debug!(
            playlist_id,
            returned_items = playlists.items.len(),
            "fetched playlists"
        );

        Ok(playlists)
    }

    /// Fetches the first page of items in a playlist.
    ///
    /// `max_results` is clamped to `1..=`[`MAX_RESULTS`]. Later pages are never requested.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    pub async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<PlaylistItemListResponse> {
        let max_results_string = max_results.clamp(1, MAX_RESULTS).to_string();
        let part = Part::join(&[Part::ContentDetails]);
        let query_params = [
            ("part", part.as_str()),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];

        let items: PlaylistItemListResponse = self.get("playlistItems", &query_params).await?;

        if items.next_page_token.is_some() {
            tracing::debug!(
                playlist_id,
                total_results = items.page_info.total_results,
                "playlist has more items than one page, ignoring the rest"
            );
        }
        tracing::debug!(
            playlist_id,
            returned_items = items.items.len(),
            "fetched playlist items"
        );

        Ok(items)
    }
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
