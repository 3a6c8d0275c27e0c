//! YouTube Channels API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// Contains a list of [`Channel`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    pub kind: String,
    /// A list of channels that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// Only the parts that were requested are present.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    /// Contains basic details about the channel.
    pub snippet: Option<ChannelSnippet>,
    /// Contains the channel's public counters.
    pub statistics: Option<ChannelStatistics>,
}

/// The snippet object contains basic details about the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    /// The channel's description.
    #[serde(default)]
    pub description: String,
    /// The date and time that the channel was created.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Timestamp>,
}

/// Counters for the channel.
///
/// All counts are decimal strings, as the API returns them.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelStatistics {
    /// The number of times the channel has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of subscribers that the channel has.
    ///
    /// Absent when the owner hides it.
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
    /// Indicates whether the channel's subscriber count is publicly visible.
    #[serde(rename = "hiddenSubscriberCount", default)]
    pub hidden_subscriber_count: bool,
    /// The number of public videos uploaded to the channel.
    #[serde(rename = "videoCount")]
    pub video_count: Option<String>,
}
