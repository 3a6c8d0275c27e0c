use super::{Entity, ResourceKind, parse_count};
use crate::duration::parse_iso8601;
use crate::error::{Error, Result};
use crate::youtube_api::videos::Video as VideoResource;
use crate::youtube_api::{MAX_RESULTS, Part, YouTubeClient};
use jiff::SignedDuration;
use std::fmt;
use tracing::instrument;

/// A YouTube playlist and the IDs of its first [`MAX_RESULTS`] videos.
///
/// Aggregates over the member videos are computed on every call with a single batched
/// `videos.list` request; nothing is cached.
#[derive(Debug, Clone)]
pub struct Playlist {
    id: String,
    title: String,
    video_ids: Vec<String>,
    client: YouTubeClient,
}

/// Both playlist aggregates, computed from one batched lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    /// The sum of all member video lengths.
    pub total_duration: SignedDuration,
    /// Short link to the most-liked member video, `None` for an empty playlist.
    pub best_video_url: Option<String>,
}

impl Playlist {
    /// Fetches the playlist's title and its member video IDs.
    ///
    /// Only the first page of [`MAX_RESULTS`] items is read. Fails with [`Error::NotFound`] if
    /// no playlist has that ID, and with [`Error::MissingPart`] if an item lacks its video ID.
    #[instrument(skip(client))]
    pub async fn fetch(client: &YouTubeClient, playlist_id: &str) -> Result<Self> {
        let playlist = client
            .list_playlists(playlist_id, &[Part::Snippet])
            .await?
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound {
                kind: ResourceKind::Playlist,
                id: playlist_id.to_string(),
            })?;
        let snippet = playlist.snippet.ok_or_else(|| Error::MissingPart {
            kind: ResourceKind::Playlist,
            id: playlist_id.to_string(),
            part: Part::Snippet,
        })?;

        let items = client
            .list_playlist_items(playlist_id, MAX_RESULTS)
            .await?;
        let video_ids: Vec<String> = items
            .items
            .into_iter()
            .map(|item| {
                item.content_details
                    .map(|details| details.video_id)
                    .ok_or_else(|| Error::MissingPart {
                        kind: ResourceKind::Playlist,
                        id: playlist_id.to_string(),
                        part: Part::ContentDetails,
                    })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            id: playlist_id.to_string(),
            title: snippet.title,
            video_ids,
            client: client.clone(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Member video IDs in playlist order.
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Looks up every member video in one request.
    async fn member_videos(&self) -> Result<Vec<VideoResource>> {
        if self.video_ids.is_empty() {
            return Ok(Vec::new());
        }
        let response = self
            .client
            .list_videos(self.video_ids.as_slice(), &[Part::ContentDetails, Part::Statistics])
            .await?;
        Ok(response.items.into())
    }

    /// The combined length of all member videos.
    ///
    /// An empty playlist has zero length and makes no request. A member video returned without
    /// `contentDetails` fails with [`Error::MissingPart`].
    #[instrument(skip(self), fields(playlist_id = %self.id))]
    pub async fn total_duration(&self) -> Result<SignedDuration> {
        total_duration(&self.member_videos().await?)
    }

    /// A `https://youtu.be/` link to the member video with the most likes.
    ///
    /// Ties go to the video listed first. A hidden like count counts as zero, so if no video
    /// has any likes the first one wins. An empty playlist yields `None` and makes no request.
    #[instrument(skip(self), fields(playlist_id = %self.id))]
    pub async fn show_best_video(&self) -> Result<Option<String>> {
        let videos = self.member_videos().await?;
        Ok(most_liked(&videos)?.map(short_url))
    }

    /// Computes [`total_duration`](Self::total_duration) and
    /// [`show_best_video`](Self::show_best_video) from a single request.
    #[instrument(skip(self), fields(playlist_id = %self.id))]
    pub async fn summary(&self) -> Result<PlaylistSummary> {
        let videos = self.member_videos().await?;
        Ok(PlaylistSummary {
            total_duration: total_duration(&videos)?,
            best_video_url: most_liked(&videos)?.map(short_url),
        })
    }
}

fn short_url(video: &VideoResource) -> String {
    format!("https://youtu.be/{}", video.id)
}

fn total_duration(videos: &[VideoResource]) -> Result<SignedDuration> {
    let mut total = SignedDuration::ZERO;
    for video in videos {
        let details = video
            .content_details
            .as_ref()
            .ok_or_else(|| Error::MissingPart {
                kind: ResourceKind::Video,
                id: video.id.clone(),
                part: Part::ContentDetails,
            })?;
        total += parse_iso8601(&details.duration)?;
    }
    Ok(total)
}

/// Picks the video with the strictly greatest like count, keeping the first on ties.
fn most_liked(videos: &[VideoResource]) -> Result<Option<&VideoResource>> {
    let mut best: Option<(&VideoResource, u64)> = None;
    for video in videos {
        let likes = parse_count(
            "likeCount",
            video
                .statistics
                .as_ref()
                .and_then(|s| s.like_count.as_deref()),
        )?
        .unwrap_or(0);
        if best.is_none_or(|(_, max)| likes > max) {
            best = Some((video, likes));
        }
    }
    Ok(best.map(|(video, _)| video))
}

impl Entity for Playlist {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Playlist
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn url(&self) -> String {
        format!("https://www.youtube.com/playlist?list={}", self.id)
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn video(id: &str, duration: &str, likes: Option<&str>) -> VideoResource {
        let mut statistics = json!({ "viewCount": "100" });
        if let Some(likes) = likes {
            statistics["likeCount"] = json!(likes);
        }
        serde_json::from_value(json!({
            "id": id,
            "contentDetails": { "duration": duration },
            "statistics": statistics
        }))
        .unwrap()
    }

    #[test]
    fn durations_add_up() {
        let videos = [
            video("a", "PT1H", Some("1")),
            video("b", "PT30M", Some("1")),
            video("c", "PT10S", Some("1")),
        ];
        let total = total_duration(&videos).unwrap();
        assert_eq!(total, SignedDuration::from_secs(5410));
        assert_eq!(crate::duration::format_hms(total), "1:30:10");
    }

    #[test]
    fn no_videos_means_zero_duration_and_no_best() {
        assert_eq!(total_duration(&[]).unwrap(), SignedDuration::ZERO);
        assert!(most_liked(&[]).unwrap().is_none());
    }

    #[test]
    fn bad_duration_is_an_error() {
        let videos = [video("a", "forever", Some("1"))];
        assert!(matches!(
            total_duration(&videos),
            Err(Error::Duration { .. })
        ));
    }

    #[test]
    fn video_without_content_details_is_an_error() {
        let stats_only: VideoResource = serde_json::from_value(json!({
            "id": "b",
            "statistics": { "likeCount": "7" }
        }))
        .unwrap();
        let videos = [video("a", "PT1H", Some("1")), stats_only];

        let err = total_duration(&videos).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingPart {
                kind: ResourceKind::Video,
                ref id,
                part: Part::ContentDetails,
            } if id == "b"
        ));
    }

    #[test]
    fn first_of_tied_maximum_wins() {
        let videos = [
            video("five", "PT1M", Some("5")),
            video("twenty-first", "PT1M", Some("20")),
            video("twenty-second", "PT1M", Some("20")),
            video("three", "PT1M", Some("3")),
        ];
        let best = most_liked(&videos).unwrap().unwrap();
        assert_eq!(best.id, "twenty-first");
        assert_eq!(short_url(best), "https://youtu.be/twenty-first");
    }

    #[test]
    fn all_zero_likes_selects_first() {
        let videos = [
            video("hidden", "PT1M", None),
            video("zero", "PT1M", Some("0")),
        ];
        assert_eq!(most_liked(&videos).unwrap().unwrap().id, "hidden");
    }

    #[test]
    fn hidden_likes_lose_to_any_like() {
        let videos = [video("hidden", "PT1M", None), video("one", "PT1M", Some("1"))];
        assert_eq!(most_liked(&videos).unwrap().unwrap().id, "one");
    }
}
