//! YouTube Playlists and PlaylistItems API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlists.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#playlistListResponse`.
    pub kind: String,
    /// A list of playlists that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Playlist>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `playlist` resource represents a YouTube playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Playlist {
    /// The ID that YouTube uses to uniquely identify the playlist.
    pub id: String,
    pub snippet: Option<PlaylistSnippet>,
}

/// Basic details about the playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistSnippet {
    /// The playlist's title.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The title of the channel that owns the playlist.
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
}

/// Response structure for the `playlistItems.list` API call.
///
/// Items come back in playlist order. Only the first page is ever requested, so at most
/// [`MAX_RESULTS`](crate::youtube_api::client::MAX_RESULTS) items are present.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    /// The value will be `youtube#playlistItemListResponse`.
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<PlaylistItem>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token for the next page, which is never followed.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlistItem` identifies a resource, such as a video, that is part of a playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<PlaylistItemContentDetails>,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemContentDetails {
    /// The ID of the video that the playlist item refers to.
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(rename = "videoPublishedAt")]
    pub video_published_at: Option<Timestamp>,
}
