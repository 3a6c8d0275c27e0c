//! Typed, fetch-once views of channels, videos and playlists.
//!
//! Each entity is populated by its `fetch` constructor and never changes afterwards. Only
//! [`Playlist`] talks to the API again, to compute its aggregates on demand.
//!
//! Not-found handling differs by entity and is the same every time:
//!
//! - [`Channel`] and [`Playlist`] fail with [`Error::NotFound`](crate::Error::NotFound).
//! - [`Video`] enters a degraded state where title and counts are all `None`.
//! - [`PlaylistVideo`] degrades like a [`Video`] for its video, but fails with
//!   [`Error::NotFound`](crate::Error::NotFound) if the playlist is unknown.

use crate::error::{Error, Result};
use std::fmt;

mod channel;
mod playlist;
mod video;

pub use channel::Channel;
pub use playlist::{Playlist, PlaylistSummary};
pub use video::{PlaylistVideo, Video};

/// The kinds of remote resource an entity can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Channel,
    Video,
    PlaylistVideo,
    Playlist,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Channel => "channel",
            ResourceKind::Video => "video",
            ResourceKind::PlaylistVideo => "playlist video",
            ResourceKind::Playlist => "playlist",
        })
    }
}

/// Common surface of every entity.
///
/// The [`Display`](fmt::Display) impl is the entity's one-line human description.
pub trait Entity: fmt::Display {
    fn kind(&self) -> ResourceKind;

    /// The identifier the entity was fetched with.
    fn id(&self) -> &str;

    /// A link to the resource on youtube.com.
    fn url(&self) -> String;
}

/// A borrowed entity of any kind.
///
/// Operations that only make sense between entities of one kind, such as
/// [`Channel::compare_to`], take a `Resource` and reject the wrong kind with
/// [`Error::TypeMismatch`].
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    Channel(&'a Channel),
    Video(&'a Video),
    PlaylistVideo(&'a PlaylistVideo),
    Playlist(&'a Playlist),
}

impl<'a> Resource<'a> {
    fn entity(&self) -> &'a dyn Entity {
        match *self {
            Resource::Channel(c) => c,
            Resource::Video(v) => v,
            Resource::PlaylistVideo(v) => v,
            Resource::Playlist(p) => p,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.entity().kind()
    }

    pub fn id(&self) -> &'a str {
        self.entity().id()
    }

    /// Returns the channel, or [`Error::TypeMismatch`] for any other kind.
    pub fn expect_channel(self) -> Result<&'a Channel> {
        match self {
            Resource::Channel(channel) => Ok(channel),
            other => Err(Error::TypeMismatch {
                expected: ResourceKind::Channel,
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.entity(), f)
    }
}

impl<'a> From<&'a Channel> for Resource<'a> {
    fn from(channel: &'a Channel) -> Self {
        Resource::Channel(channel)
    }
}

impl<'a> From<&'a Video> for Resource<'a> {
    fn from(video: &'a Video) -> Self {
        Resource::Video(video)
    }
}

impl<'a> From<&'a PlaylistVideo> for Resource<'a> {
    fn from(video: &'a PlaylistVideo) -> Self {
        Resource::PlaylistVideo(video)
    }
}

impl<'a> From<&'a Playlist> for Resource<'a> {
    fn from(playlist: &'a Playlist) -> Self {
        Resource::Playlist(playlist)
    }
}

/// Parses one of the API's decimal-string counters.
///
/// An absent counter (hidden by the owner) is `None`; anything that is present but not a
/// non-negative integer is an error.
pub(crate) fn parse_count(field: &'static str, value: Option<&str>) -> Result<Option<u64>> {
    value
        .map(|value| {
            value.trim().parse().map_err(|_| Error::InvalidCount {
                field,
                value: value.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_parse_as_integers() {
        assert_eq!(parse_count("viewCount", Some("1234")).unwrap(), Some(1234));
        assert_eq!(parse_count("viewCount", None).unwrap(), None);
    }

    #[test]
    fn non_numeric_counts_are_rejected() {
        let err = parse_count("likeCount", Some("12k")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCount { field: "likeCount", ref value } if value == "12k"
        ));
        assert!(parse_count("likeCount", Some("-1")).is_err());
    }

    #[test]
    fn kinds_render_in_lowercase() {
        assert_eq!(ResourceKind::PlaylistVideo.to_string(), "playlist video");
        assert_eq!(ResourceKind::Channel.to_string(), "channel");
    }
}
