//! Types shared across the YouTube API resource modules.

use std::fmt;

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

/// A partial view of a resource, selected through the `part` query parameter.
///
/// Every list call must name at least one part; only the named parts are present in the
/// returned resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Basic details such as title and description.
    Snippet,
    /// Counters such as views, likes and subscribers.
    Statistics,
    /// Resource-specific details such as a video's duration or a playlist item's video ID.
    ContentDetails,
}

impl Part {
    pub fn as_str(self) -> &'static str {
        match self {
            Part::Snippet => "snippet",
            Part::Statistics => "statistics",
            Part::ContentDetails => "contentDetails",
        }
    }

    /// Renders `parts` as the comma-separated value of the `part` parameter.
    pub fn join(parts: &[Part]) -> String {
        parts
            .iter()
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
