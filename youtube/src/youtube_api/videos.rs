//! YouTube Videos API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// Unknown video IDs are silently left out of `items`, so a batched lookup may return fewer
/// videos than were asked for.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `video` resource represents a YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Contains basic details about the video.
    pub snippet: Option<VideoSnippet>,
    /// Contains statistics about the video.
    pub statistics: Option<VideoStatistics>,
    /// Contains information about the video content, including its length.
    #[serde(rename = "contentDetails")]
    pub content_details: Option<VideoContentDetails>,
}

/// Basic details about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    /// The video's description.
    #[serde(default)]
    pub description: String,
    /// The ID of the channel that uploaded the video.
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    /// The date and time that the video was published.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
}

/// Statistics about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of users who have indicated that they liked the video.
    ///
    /// Absent when the owner hides the like count.
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    /// The number of comments for the video.
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

/// Information about the video content.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// The length of the video as an ISO 8601 duration, e.g. `PT15M33S`.
    pub duration: String,
}
