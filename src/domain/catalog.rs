//! Static content catalog fed into the hub at start-up.
//!
//! The catalog bundles every hardcoded table of the hub page: manual articles,
//! platforms, download and social links, contact mailboxes, the domain
//! blacklist and the curated list of popular article titles. It is parsed from
//! TOML once and is immutable for the rest of the session; navigation state
//! refers into it by index.
//!
//! # TOML Format
//!
//! ```toml
//! popular = ["售后服务"]
//! blacklist = ["flypixes.click"]
//!
//! [[articles]]
//! title = "售后服务"
//! tags = ["客服", "退款"]
//!
//! [[platforms]]
//! name = "メルカリ"
//! brand_label = "MERCARI"
//! kind = "marketplace"
//!
//! [[links]]
//! id = "ios"
//! title = "iOS 下载"
//! subtitle = "App Store"
//! url = "https://apps.apple.com/"
//! category = "download"
//!
//! [[contacts]]
//! label = "商务合作"
//! email = "work@lekutao.cn"
//! ```

use super::article::Article;
use super::error::{HubError, Result};
use super::platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Grouping of a link on the hub page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Social,
    Community,
    Download,
    Official,
}

/// An outbound link (app download, social channel, community group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub url: String,
    pub category: LinkCategory,
}

/// An app store listing the Android build is published on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStoreLink {
    pub platform: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A contact mailbox shown in the "联系我们" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub email: String,
}

/// The complete static data feed of the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub links: Vec<LinkItem>,
    #[serde(default)]
    pub app_stores: Vec<AppStoreLink>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub blacklist: Vec<String>,
    /// Titles shown when the search box is empty under the curated policy.
    #[serde(default)]
    pub popular: Vec<String>,
}

impl Catalog {
    /// Parses the catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Catalog`] if the embedded TOML is malformed, which
    /// only happens when the bundled file is edited incorrectly.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(include_str!("../../content/catalog.toml"))
    }

    /// Parses and validates a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Catalog`] on TOML syntax errors, missing fields or
    /// a failed [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut catalog: Self = toml::from_str(text)
            .map_err(|e| HubError::Catalog(format!("failed to parse catalog TOML: {e}")))?;
        catalog.validate()?;
        catalog.normalize_blacklist();

        tracing::debug!(
            articles = catalog.articles.len(),
            platforms = catalog.platforms.len(),
            links = catalog.links.len(),
            blacklist = catalog.blacklist.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Reads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Io`] if the file cannot be read and
    /// [`HubError::Catalog`] if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks that article titles are non-empty and unique.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Catalog`] naming the first offending title.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.articles.len());
        for article in &self.articles {
            if article.title.trim().is_empty() {
                return Err(HubError::Catalog("article with empty title".to_string()));
            }
            if !seen.insert(article.title.as_str()) {
                return Err(HubError::Catalog(format!(
                    "duplicate article title: {}",
                    article.title
                )));
            }
        }
        Ok(())
    }

    /// Trims and lower-cases blacklist entries and drops blank ones.
    ///
    /// The domain checker compares against lower-cased input, so entries must
    /// be stored lower-case to ever match.
    pub fn normalize_blacklist(&mut self) {
        self.blacklist = self
            .blacklist
            .iter()
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
    }

    /// Looks up an article index by its title.
    #[must_use]
    pub fn article_index(&self, title: &str) -> Option<usize> {
        self.articles.iter().position(|a| a.title == title)
    }

    /// Looks up a platform index by its name.
    #[must_use]
    pub fn platform_index(&self, name: &str) -> Option<usize> {
        self.platforms.iter().position(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlatformKind;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().expect("bundled catalog must parse");
        assert_eq!(catalog.articles.len(), 27);
        assert!(catalog.article_index("售后服务").is_some());
        assert!(catalog
            .platforms
            .iter()
            .any(|p| p.kind == PlatformKind::Carrier));
        assert_eq!(catalog.popular, vec!["APP新手指南", "售后服务", "费用构成"]);
    }

    #[test]
    fn rejects_duplicate_titles() {
        let text = r#"
            [[articles]]
            title = "免责声明"

            [[articles]]
            title = "免责声明"
        "#;
        let err = Catalog::from_toml_str(text).unwrap_err();
        assert!(err.to_string().contains("duplicate article title"));
    }

    #[test]
    fn rejects_blank_titles() {
        let text = r#"
            [[articles]]
            title = "  "
        "#;
        assert!(matches!(
            Catalog::from_toml_str(text),
            Err(HubError::Catalog(_))
        ));
    }

    #[test]
    fn reads_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            "blacklist = [\"bad.example\"]\n[[articles]]\ntitle = \"合单服务\"\ntags = [\"物流\"]\n",
        )
        .unwrap();

        let catalog = Catalog::from_file(&path).unwrap();
        assert_eq!(catalog.articles[0].tags, vec!["物流"]);
        assert_eq!(catalog.blacklist, vec!["bad.example"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(HubError::Io(_))));
    }

    #[test]
    fn blacklist_entries_are_normalized_on_load() {
        let text = r#"
            blacklist = ["FlyPixes.Click ", "   ", "mercari-jp.shop"]

            [[articles]]
            title = "防骗指南"
        "#;
        let catalog = Catalog::from_toml_str(text).unwrap();
        assert_eq!(catalog.blacklist, vec!["flypixes.click", "mercari-jp.shop"]);
        assert_eq!(
            crate::index::check_domain("www.flypixes.click", &catalog.blacklist),
            Some(crate::index::RiskVerdict::Flagged {
                matched_entry: "flypixes.click".into()
            })
        );
        assert_eq!(
            crate::index::check_domain("safe-site.jp", &catalog.blacklist),
            Some(crate::index::RiskVerdict::Safe)
        );
    }
}
