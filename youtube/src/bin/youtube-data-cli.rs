use eyre::{Context, bail};
use std::cmp::Ordering;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_data::duration::format_hms;
use youtube_data::{Channel, Entity, Playlist, PlaylistVideo, Video, YouTubeClient};

const USAGE: &str = "\
usage: youtube-data-cli <command>

commands:
  channel <channel-id> [--json <path>]      show a channel, optionally export it to JSON
  compare <channel-id> <channel-id>         compare two channels by subscriber count
  video <video-id> [--playlist <id>]        show a video, optionally as part of a playlist
  playlist <playlist-id>                    show a playlist's length and most-liked video

The API key is read from YT_API_KEY (or a .env file).";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        bail!("unrecognized arguments: {args:?}");
    };

    let yt = YouTubeClient::from_env().context("set up YouTube API client")?;

    match command {
        Command::Channel { id, json_path } => show_channel(&yt, id, json_path).await,
        Command::Compare(a, b) => compare_channels(&yt, a, b).await,
        Command::Video { id, playlist_id: None } => {
            let video = Video::fetch(&yt, id).await.context("fetch video")?;
            if !video.is_available() {
                eprintln!("video {id} not found");
                return Ok(());
            }
            println!("{video}");
            println!("  url:   {}", video.url());
            println!("  views: {}", count_or_hidden(video.view_count()));
            println!("  likes: {}", count_or_hidden(video.like_count()));
            Ok(())
        }
        Command::Video {
            id,
            playlist_id: Some(playlist_id),
        } => {
            let video = PlaylistVideo::fetch(&yt, id, playlist_id)
                .await
                .context("fetch playlist video")?;
            println!("{video}");
            println!("  url:   {}", video.url());
            println!("  likes: {}", count_or_hidden(video.like_count()));
            Ok(())
        }
        Command::Playlist(id) => {
            let playlist = Playlist::fetch(&yt, id).await.context("fetch playlist")?;
            let summary = playlist
                .summary()
                .await
                .context("summarize playlist videos")?;
            println!("{playlist}");
            println!("  videos:         {}", playlist.video_ids().len());
            println!("  total duration: {}", format_hms(summary.total_duration));
            match summary.best_video_url {
                Some(url) => println!("  most liked:     {url}"),
                None => println!("  most liked:     (playlist is empty)"),
            }
            Ok(())
        }
    }
}

enum Command<'a> {
    Channel {
        id: &'a str,
        json_path: Option<&'a str>,
    },
    Compare(&'a str, &'a str),
    Video {
        id: &'a str,
        playlist_id: Option<&'a str>,
    },
    Playlist(&'a str),
}

impl<'a> Command<'a> {
    fn parse(args: &[&'a str]) -> Option<Self> {
        Some(match *args {
            ["channel", id] => Command::Channel { id, json_path: None },
            ["channel", id, "--json", path] => Command::Channel {
                id,
                json_path: Some(path),
            },
            ["compare", a, b] => Command::Compare(a, b),
            ["video", id] => Command::Video {
                id,
                playlist_id: None,
            },
            ["video", id, "--playlist", playlist_id] => Command::Video {
                id,
                playlist_id: Some(playlist_id),
            },
            ["playlist", id] => Command::Playlist(id),
            _ => return None,
        })
    }
}

async fn show_channel(yt: &YouTubeClient, id: &str, json_path: Option<&str>) -> eyre::Result<()> {
    let channel = Channel::fetch(yt, id).await.context("fetch channel")?;
    channel.print_info().context("print channel document")?;
    eprintln!("==> {channel} ({})", channel.url());

    if let Some(path) = json_path {
        channel
            .to_json(path)
            .await
            .with_context(|| format!("export channel to {path}"))?;
        eprintln!("==> wrote {path}");
    }
    Ok(())
}

async fn compare_channels(yt: &YouTubeClient, a: &str, b: &str) -> eyre::Result<()> {
    let a = Channel::fetch(yt, a).await.context("fetch first channel")?;
    let b = Channel::fetch(yt, b).await.context("fetch second channel")?;

    let relation = match a.compare_to(&b)? {
        Ordering::Greater => "more subscribers than",
        Ordering::Less => "fewer subscribers than",
        Ordering::Equal => "as many subscribers as",
    };
    println!(
        "{} has {relation} {} ({} vs {})",
        a.title(),
        b.title(),
        a.subscriber_count(),
        b.subscriber_count()
    );
    println!("combined: {}", a.sum_subscribers(&b)?);
    Ok(())
}

fn count_or_hidden(count: Option<u64>) -> String {
    count.map_or_else(|| "hidden".to_string(), |n| n.to_string())
}
