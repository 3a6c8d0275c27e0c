//! Typed, read-only access to public YouTube channel, video and playlist metadata.
//!
//! Build a [`YouTubeClient`] from an [`ApiConfig`] (or straight from the `YT_API_KEY`
//! environment variable with [`YouTubeClient::from_env`]), then fetch entities with it:
//!
//! ```rust,no_run
//! use youtube_data::{Channel, Playlist, YouTubeClient, duration::format_hms};
//!
//! # async fn example() -> youtube_data::Result<()> {
//! let client = YouTubeClient::from_env()?;
//!
//! let channel = Channel::fetch(&client, "UC-OVMPlMA3-YCIeg4z5z23A").await?;
//! println!("{channel}: {} subscribers", channel.subscriber_count());
//! channel.to_json("moscowpython.json").await?;
//!
//! let playlist = Playlist::fetch(&client, "PLv_zOGKKxVpj-n2qLkEM2Hj96LO6uqgQw").await?;
//! println!("{}", format_hms(playlist.total_duration().await?));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod duration;
pub mod entities;
pub mod error;
pub mod youtube_api;

pub use config::{API_KEY_VAR, ApiConfig};
pub use entities::{
    Channel, Entity, Playlist, PlaylistSummary, PlaylistVideo, Resource, ResourceKind, Video,
};
pub use error::{Error, Result};
pub use youtube_api::YouTubeClient;
