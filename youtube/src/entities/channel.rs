use super::{Entity, Resource, ResourceKind, parse_count};
use crate::error::{Error, Result};
use crate::youtube_api::{ChannelListResponse, Part, YouTubeClient};
use jiff::Timestamp;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use tracing::instrument;

/// A YouTube channel's metadata and public counters.
///
/// Counts are parsed to integers when the channel is fetched. A subscriber count hidden by the
/// owner counts as zero.
#[derive(Debug, Clone)]
pub struct Channel {
    id: String,
    title: String,
    description: String,
    published_at: Option<Timestamp>,
    subscriber_count: u64,
    video_count: u64,
    view_count: u64,
    /// The `channels.list` response exactly as received.
    raw: serde_json::Value,
}

/// The document written by [`Channel::to_json`].
///
/// Counts are written as decimal strings, the way the API represents them.
#[derive(Debug, Serialize)]
struct ChannelExport<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    url: String,
    subscriber_count: String,
    video_count: String,
    view_count: String,
}

impl Channel {
    /// Fetches the snippet and statistics of the channel `channel_id` in one call.
    ///
    /// Fails with [`Error::NotFound`] if no channel has that ID.
    #[instrument(skip(client))]
    pub async fn fetch(client: &YouTubeClient, channel_id: &str) -> Result<Self> {
        let raw = client
            .list_channels_raw(channel_id, &[Part::Snippet, Part::Statistics])
            .await?;
        Self::from_response(channel_id, raw)
    }

    pub(crate) fn from_response(channel_id: &str, raw: serde_json::Value) -> Result<Self> {
        let not_found = || Error::NotFound {
            kind: ResourceKind::Channel,
            id: channel_id.to_string(),
        };
        let missing = |part| Error::MissingPart {
            kind: ResourceKind::Channel,
            id: channel_id.to_string(),
            part,
        };

        let response: ChannelListResponse = serde_json::from_value(raw.clone())?;
        let item = response.items.into_iter().next().ok_or_else(not_found)?;
        let snippet = item.snippet.ok_or_else(|| missing(Part::Snippet))?;
        let statistics = item.statistics.ok_or_else(|| missing(Part::Statistics))?;

        if statistics.hidden_subscriber_count {
            tracing::debug!(channel_id, "subscriber count is hidden");
        }

        Ok(Self {
            id: channel_id.to_string(),
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            subscriber_count: parse_count(
                "subscriberCount",
                statistics.subscriber_count.as_deref(),
            )?
            .unwrap_or(0),
            video_count: parse_count("videoCount", statistics.video_count.as_deref())?
                .unwrap_or(0),
            view_count: parse_count("viewCount", statistics.view_count.as_deref())?.unwrap_or(0),
            raw,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the channel was created, if the API reported it.
    pub fn published_at(&self) -> Option<Timestamp> {
        self.published_at
    }

    pub fn subscriber_count(&self) -> u64 {
        self.subscriber_count
    }

    pub fn video_count(&self) -> u64 {
        self.video_count
    }

    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    /// The response document the channel was built from.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    fn export(&self) -> ChannelExport<'_> {
        ChannelExport {
            id: &self.id,
            title: &self.title,
            description: &self.description,
            url: self.url(),
            subscriber_count: self.subscriber_count.to_string(),
            video_count: self.video_count.to_string(),
            view_count: self.view_count.to_string(),
        }
    }

    /// Writes the channel's fields to `path` as pretty-printed UTF-8 JSON.
    ///
    /// The file is replaced if it exists. Non-ASCII text is written as-is, not escaped.
    pub async fn to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut json = serde_json::to_string_pretty(&self.export())?;
        json.push('\n');
        tokio::fs::write(path, json)
            .await
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(channel_id = %self.id, path = %path.display(), "wrote channel JSON");
        Ok(())
    }

    /// Prints the raw response document to stdout as pretty-printed JSON.
    pub fn print_info(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&self.raw)?);
        Ok(())
    }

    /// Orders this channel against `other` by subscriber count.
    ///
    /// Fails with [`Error::TypeMismatch`] unless `other` is also a channel.
    pub fn compare_to<'a>(&self, other: impl Into<Resource<'a>>) -> Result<Ordering> {
        let other = other.into().expect_channel()?;
        Ok(self.subscriber_count.cmp(&other.subscriber_count))
    }

    /// Adds this channel's subscriber count to `other`'s.
    ///
    /// The sum is widened to `u128` so that no pair of counts can overflow it. Fails with
    /// [`Error::TypeMismatch`] unless `other` is also a channel.
    pub fn sum_subscribers<'a>(&self, other: impl Into<Resource<'a>>) -> Result<u128> {
        let other = other.into().expect_channel()?;
        Ok(u128::from(self.subscriber_count) + u128::from(other.subscriber_count))
    }

    /// Sums the subscriber counts of any number of channels.
    pub fn total_subscribers<'a>(channels: impl IntoIterator<Item = &'a Channel>) -> u128 {
        channels
            .into_iter()
            .map(|channel| u128::from(channel.subscriber_count))
            .sum()
    }
}

impl Entity for Channel {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Channel
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn url(&self) -> String {
        format!("https://www.youtube.com/channel/{}", self.id)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YouTube-channel: {}", self.title)
    }
}
