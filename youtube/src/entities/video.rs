use super::{Entity, ResourceKind, parse_count};
use crate::error::{Error, Result};
use crate::youtube_api::{Part, VideoListResponse, YouTubeClient};
use std::fmt;
use std::ops::Deref;
use tracing::instrument;

/// A YouTube video's title and counters.
///
/// If the API knows no video with the requested ID, the video is still constructed, but
/// [`title`](Self::title), [`view_count`](Self::view_count) and
/// [`like_count`](Self::like_count) all return `None` and it displays as an empty string.
#[derive(Debug, Clone)]
pub struct Video {
    id: String,
    metadata: Option<VideoMetadata>,
}

#[derive(Debug, Clone)]
struct VideoMetadata {
    title: String,
    view_count: Option<u64>,
    like_count: Option<u64>,
}

impl Video {
    /// Fetches the snippet and statistics of the video `video_id`.
    ///
    /// An unknown ID is not an error; see the type-level docs. Request failures still are.
    #[instrument(skip(client))]
    pub async fn fetch(client: &YouTubeClient, video_id: &str) -> Result<Self> {
        let response = client
            .list_videos(&[video_id], &[Part::Snippet, Part::Statistics])
            .await?;
        Self::from_response(video_id, response)
    }

    pub(crate) fn from_response(video_id: &str, response: VideoListResponse) -> Result<Self> {
        let Some(item) = response.items.into_iter().next() else {
            tracing::warn!(video_id, "video not found, leaving its metadata empty");
            return Ok(Self {
                id: video_id.to_string(),
                metadata: None,
            });
        };

        let snippet = item.snippet.ok_or_else(|| Error::MissingPart {
            kind: ResourceKind::Video,
            id: video_id.to_string(),
            part: Part::Snippet,
        })?;
        let statistics = item.statistics.as_ref();

        Ok(Self {
            id: video_id.to_string(),
            metadata: Some(VideoMetadata {
                title: snippet.title,
                view_count: parse_count(
                    "viewCount",
                    statistics.and_then(|s| s.view_count.as_deref()),
                )?,
                like_count: parse_count(
                    "likeCount",
                    statistics.and_then(|s| s.like_count.as_deref()),
                )?,
            }),
        })
    }

    /// Whether the API returned this video.
    pub fn is_available(&self) -> bool {
        self.metadata.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.title.as_str())
    }

    pub fn view_count(&self) -> Option<u64> {
        self.metadata.as_ref().and_then(|m| m.view_count)
    }

    /// `None` when the video was not found or its owner hides likes.
    pub fn like_count(&self) -> Option<u64> {
        self.metadata.as_ref().and_then(|m| m.like_count)
    }
}

impl Entity for Video {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Video
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title().unwrap_or_default())
    }
}

/// A [`Video`] seen as a member of a particular playlist.
///
/// Dereferences to the underlying [`Video`].
#[derive(Debug, Clone)]
pub struct PlaylistVideo {
    video: Video,
    playlist_id: String,
    playlist_title: String,
}

impl PlaylistVideo {
    /// Fetches the video `video_id`, then the title of the playlist `playlist_id`.
    ///
    /// The video may end up in its degraded state, but an unknown playlist fails with
    /// [`Error::NotFound`].
    #[instrument(skip(client))]
    pub async fn fetch(client: &YouTubeClient, video_id: &str, playlist_id: &str) -> Result<Self> {
        let video = Video::fetch(client, video_id).await?;

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

        Ok(Self {
            video,
            playlist_id: playlist_id.to_string(),
            playlist_title: snippet.title,
        })
    }

    pub fn as_video(&self) -> &Video {
        &self.video
    }

    pub fn into_video(self) -> Video {
        self.video
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    pub fn playlist_title(&self) -> &str {
        &self.playlist_title
    }
}

impl Deref for PlaylistVideo {
    type Target = Video;

    fn deref(&self) -> &Video {
        &self.video
    }
}

impl Entity for PlaylistVideo {
    fn kind(&self) -> ResourceKind {
        ResourceKind::PlaylistVideo
    }

    fn id(&self) -> &str {
        &self.video.id
    }

    fn url(&self) -> String {
        format!(
            "https://www.youtube.com/watch?v={}&list={}",
            self.video.id, self.playlist_id
        )
    }
}

impl fmt::Display for PlaylistVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.video, self.playlist_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(value: serde_json::Value) -> VideoListResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn found_video_has_title_and_counts() {
        let video = Video::from_response(
            "9lO06Zxhu88",
            response(json!({
                "kind": "youtube#videoListResponse",
                "items": [{
                    "id": "9lO06Zxhu88",
                    "snippet": { "title": "Как устроена IT-столица мира" },
                    "statistics": { "viewCount": "48810", "likeCount": "1971" }
                }]
            })),
        )
        .unwrap();

        assert!(video.is_available());
        assert_eq!(video.title(), Some("Как устроена IT-столица мира"));
        assert_eq!(video.view_count(), Some(48810));
        assert_eq!(video.like_count(), Some(1971));
        assert_eq!(video.to_string(), "Как устроена IT-столица мира");
        assert_eq!(video.url(), "https://www.youtube.com/watch?v=9lO06Zxhu88");
    }

    #[test]
    fn hidden_likes_are_absent() {
        let video = Video::from_response(
            "v1",
            response(json!({
                "kind": "youtube#videoListResponse",
                "items": [{
                    "id": "v1",
                    "snippet": { "title": "no likes shown" },
                    "statistics": { "viewCount": "10" }
                }]
            })),
        )
        .unwrap();

        assert_eq!(video.view_count(), Some(10));
        assert_eq!(video.like_count(), None);
    }

    #[test]
    fn unknown_video_is_degraded() {
        let video = Video::from_response(
            "broken_video_id",
            response(json!({ "kind": "youtube#videoListResponse", "items": [] })),
        )
        .unwrap();

        assert!(!video.is_available());
        assert_eq!(video.id(), "broken_video_id");
        assert_eq!(video.title(), None);
        assert_eq!(video.view_count(), None);
        assert_eq!(video.like_count(), None);
        assert_eq!(video.to_string(), "");
    }

    #[test]
    fn playlist_video_display_includes_playlist() {
        let video = Video::from_response(
            "BBotskuyw_M",
            response(json!({
                "kind": "youtube#videoListResponse",
                "items": [{
                    "id": "BBotskuyw_M",
                    "snippet": { "title": "Пушкин: наше всё?" },
                    "statistics": { "viewCount": "1", "likeCount": "0" }
                }]
            })),
        )
        .unwrap();
        let pl_video = PlaylistVideo {
            video,
            playlist_id: "PL7Ntiz7eTKwrqmApjln9u4ItzhDLRtPuD".to_string(),
            playlist_title: "Литература".to_string(),
        };

        assert_eq!(pl_video.to_string(), "Пушкин: наше всё? (Литература)");
        assert_eq!(pl_video.kind(), ResourceKind::PlaylistVideo);
        assert_eq!(pl_video.like_count(), Some(0));
        assert_eq!(pl_video.as_video().title(), Some("Пушкин: наше всё?"));
    }
}
