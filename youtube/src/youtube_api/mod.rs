//! YouTube Data API v3 client library.
//!
//! This module provides a small read-only client for the public parts of the YouTube Data
//! API v3: channels, videos, playlists and playlist items. Requests are authorized with an API
//! key rather than OAuth, so only public data is visible.
//!
//! Every list call takes the [`Part`]s to fetch; resources only carry the parts that were
//! asked for, which is why most resource fields are `Option`s.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_data::youtube_api::{Part, YouTubeClient};
//!
//! # async fn example() -> youtube_data::Result<()> {
//! let client = YouTubeClient::from_env()?;
//! let videos = client
//!     .list_videos(&["dQw4w9WgXcQ"], &[Part::Snippet, Part::Statistics])
//!     .await?;
//! for video in &videos.items {
//!     println!("{}: {:?}", video.id, video.statistics);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod playlists;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::{MAX_RESULTS, YouTubeClient};
pub use types::{PageInfo, Part};

pub use channels::{ChannelListResponse, ChannelSnippet, ChannelStatistics};
pub use playlists::{
    PlaylistItem, PlaylistItemContentDetails, PlaylistItemListResponse, PlaylistListResponse,
    PlaylistSnippet,
};
pub use videos::{VideoContentDetails, VideoListResponse, VideoSnippet, VideoStatistics};
