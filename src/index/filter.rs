//! Pure search filters over the static catalog.
//!
//! Matching is a case-insensitive substring test with no ranking: results
//! always come back in the original collection order. The functions here
//! return indices into the input slice so that navigation state can refer to
//! catalog entries without copying them; the `filter_*` wrappers resolve the
//! indices back to references for callers that want the records.

use crate::domain::{Article, Platform};
use serde::{Deserialize, Serialize};

/// What the manual shows while the search box is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    /// Only the curated popular titles, in collection order.
    #[default]
    Popular,
    /// The whole manual, in collection order.
    Full,
}

impl DefaultView {
    /// Parses a configuration value (`popular`/`curated` or `full`/`all`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "popular" | "curated" => Some(Self::Popular),
            "full" | "all" => Some(Self::Full),
            _ => None,
        }
    }
}

/// Indices of the articles visible for `query`.
///
/// An empty query yields the default view: every index under
/// [`DefaultView::Full`], or the indices whose title appears in `popular`
/// under [`DefaultView::Popular`]. Any other query, whitespace included, is
/// lower-cased and matched as a substring of the title or of any tag.
#[must_use]
pub fn matching_articles(
    articles: &[Article],
    query: &str,
    default_view: DefaultView,
    popular: &[String],
) -> Vec<usize> {
    if query.is_empty() {
        return match default_view {
            DefaultView::Full => (0..articles.len()).collect(),
            DefaultView::Popular => articles
                .iter()
                .enumerate()
                .filter(|(_, article)| popular.iter().any(|title| *title == article.title))
                .map(|(idx, _)| idx)
                .collect(),
        };
    }

    let needle = query.to_lowercase();
    articles
        .iter()
        .enumerate()
        .filter(|(_, article)| article.matches_lowercase(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Indices of the platforms whose name contains `query`, ignoring case.
///
/// Platforms carry no tags, so only the name is searched. An empty query
/// keeps every platform.
#[must_use]
pub fn matching_platforms(platforms: &[Platform], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..platforms.len()).collect();
    }

    let needle = query.to_lowercase();
    platforms
        .iter()
        .enumerate()
        .filter(|(_, platform)| platform.name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Filters the manual for `query`, returning the matching articles.
///
/// # Examples
///
/// ```
/// use lekutao_hub::domain::Article;
/// use lekutao_hub::index::{filter_articles, DefaultView};
///
/// let articles = vec![
///     Article::new("售后服务", ["客服", "退款"]),
///     Article::new("国际物流", ["运费"]),
/// ];
/// let hits = filter_articles(&articles, "退款", DefaultView::Full, &[]);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title, "售后服务");
/// ```
#[must_use]
pub fn filter_articles<'a>(
    articles: &'a [Article],
    query: &str,
    default_view: DefaultView,
    popular: &[String],
) -> Vec<&'a Article> {
    matching_articles(articles, query, default_view, popular)
        .into_iter()
        .map(|idx| &articles[idx])
        .collect()
}

/// Filters platforms by name, returning the matching records.
#[must_use]
pub fn filter_platforms<'a>(platforms: &'a [Platform], query: &str) -> Vec<&'a Platform> {
    matching_platforms(platforms, query)
        .into_iter()
        .map(|idx| &platforms[idx])
        .collect()
}
