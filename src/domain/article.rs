//! Help manual article model.

use serde::{Deserialize, Serialize};

/// Opaque rich-content payload of an article.
///
/// The navigation core passes it through untouched and never branches on its
/// structure; only the presentation layer looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Body(String);

impl Body {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Returns the raw payload for rendering.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A help/FAQ entry of the manual.
///
/// `title` is the unique display key. `tags` keep their insertion order for
/// display; duplicates are allowed and order does not matter for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub body: Option<Body>,
}

impl Article {
    /// Creates an article without a body.
    ///
    /// # Examples
    ///
    /// ```
    /// use lekutao_hub::domain::Article;
    ///
    /// let article = Article::new("售后服务", ["客服", "退款"]);
    /// assert_eq!(article.tags.len(), 2);
    /// assert!(article.body.is_none());
    /// ```
    #[must_use]
    pub fn new<I, S>(title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Case-insensitive substring test against the title and every tag.
    ///
    /// `needle` must already be lower-cased; the filter lower-cases the query
    /// once per pass instead of once per article.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_title_ignoring_case() {
        let article = Article::new("Rakuten代购规则", ["规则"]);
        assert!(article.matches_lowercase("rakuten"));
        assert!(article.matches_lowercase("代购"));
        assert!(!article.matches_lowercase("zozo"));
    }

    #[test]
    fn matches_any_tag() {
        let article = Article::new("雅虎日拍代购规则", ["规则", "拍卖", "Yahoo"]);
        assert!(article.matches_lowercase("yahoo"));
        assert!(article.matches_lowercase("拍卖"));
    }

    #[test]
    fn body_is_carried_verbatim() {
        let article = Article::new("免责声明", ["法律"]).with_body(Body::new("<p>正文</p>"));
        assert_eq!(article.body.as_ref().map(Body::as_str), Some("<p>正文</p>"));
    }
}
