//! lekutao-hub: the help and information hub of a Japanese proxy-shopping
//! service, in the terminal.
//!
//! The hub shows one list page built from a static catalog:
//! - a searchable help manual (curated popular articles, or all of them)
//! - supported marketplaces and logistics carriers, some with their own page
//! - app download and community links
//! - contact mailboxes with copy and mail-to actions
//!
//! plus a domain blacklist checker against known phishing sites.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal shell (main.rs)                           │  ← stdin commands, host
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← navigation state machine
//! │  - Event handling                                   │
//! │  - Hub controller and host capabilities             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌────────────────────┐
//! │ UI Layer      │   │ Content Index      │
//! │ (ui/)         │   │ (index/)           │
//! │ - Rendering   │   │ - Manual search    │
//! │ - Theming     │   │ - Platform search  │
//! │ - Components  │   │ - Domain checker   │
//! └───────────────┘   └────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Catalog, articles, platforms (domain/)           │
//! │  - Error types (domain/error)                       │
//! │  - Paths, URL opener (infrastructure/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Values come from an optional TOML file and `key=value` arguments, the
//! latter taking precedence:
//!
//! ```toml
//! catalog_file = "~/lekutao/catalog.toml"
//! default_view = "popular"
//! theme = "amber"
//! trace_level = "debug"
//! page_url = "https://www.lekutao.cn/help"
//! copied_badge_ms = 2000
//! ```
//!
//! # Example
//!
//! ```rust
//! use lekutao_hub::{handle_event, initialize, Action, Config, Event, View};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! handle_event(&mut state, &Event::SetQuery("退款".into()));
//! let titles: Vec<_> = state.visible_articles().iter().map(|a| a.title.as_str()).collect();
//! assert_eq!(titles, ["售后服务"]);
//!
//! let (_, actions) = handle_event(&mut state, &Event::SelectArticle("售后服务".into()));
//! assert_eq!(actions, vec![Action::ScrollTo(0)]);
//! assert!(matches!(state.view, View::ArticleDetail(_)));
//! # Ok::<(), lekutao_hub::HubError>(())
//! ```

pub mod app;
pub mod domain;
pub mod index;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Hub, InputMode, View};
pub use domain::{Catalog, HubError, Result};
pub use index::DefaultView;
pub use ui::Theme;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Address copied by the "copy page link" action unless configured.
pub const DEFAULT_PAGE_URL: &str = "https://www.lekutao.cn/help";

/// Hub configuration.
///
/// Every field has a default, so an empty file or map is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// TOML catalog replacing the built-in content. `~` is expanded.
    pub catalog_file: Option<String>,

    /// What the manual shows while the query is empty.
    pub default_view: DefaultView,

    /// Built-in theme name: `amber` or `midnight`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Filter directive such as `debug` or `lekutao_hub=trace`. `RUST_LOG`
    /// overrides it.
    pub trace_level: Option<String>,

    pub page_url: String,

    /// How long the "copied" badge stays next to a mailbox.
    pub copied_badge_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            default_view: DefaultView::Popular,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            page_url: DEFAULT_PAGE_URL.to_string(),
            copied_badge_ms: 2000,
        }
    }
}

impl Config {
    /// Builds a config from `key=value` pairs on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Config`] for unknown keys and unparsable values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use lekutao_hub::{Config, DefaultView};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_view".to_string(), "full".to_string());
    /// map.insert("copied_badge_ms".to_string(), "500".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.default_view, DefaultView::Full);
    /// assert_eq!(config.copied_badge_ms, 500);
    /// # Ok::<(), lekutao_hub::HubError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        Self::default().merge_map(map)
    }

    /// Reads a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Io`] if the file cannot be read and
    /// [`HubError::Config`] if it is not valid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| HubError::Config(format!("{}: {e}", path.as_ref().display())))?;

        tracing::debug!(path = %path.as_ref().display(), "config file loaded");
        Ok(config)
    }

    /// Overrides fields with `key=value` pairs.
    ///
    /// Empty values clear optional settings.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Config`] for unknown keys and unparsable values.
    pub fn merge_map(mut self, map: &BTreeMap<String, String>) -> Result<Self> {
        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        for (key, value) in map {
            match key.as_str() {
                "catalog_file" => self.catalog_file = optional(value),
                "default_view" => {
                    self.default_view = DefaultView::from_name(value.trim()).ok_or_else(|| {
                        HubError::Config(format!("default_view must be popular or full, got {value:?}"))
                    })?;
                }
                "theme" => self.theme_name = optional(value),
                "theme_file" => self.theme_file = optional(value),
                "trace_level" => self.trace_level = optional(value),
                "page_url" => value.trim().clone_into(&mut self.page_url),
                "copied_badge_ms" => {
                    self.copied_badge_ms = value.trim().parse().map_err(|e| {
                        HubError::Config(format!("copied_badge_ms must be milliseconds: {e}"))
                    })?;
                }
                other => return Err(HubError::Config(format!("unknown config key {other:?}"))),
            }
        }

        Ok(self)
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path.display(), error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(%theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }

    fn load_catalog(&self) -> Result<Catalog> {
        self.catalog_file.as_ref().map_or_else(Catalog::builtin, |file| {
            Catalog::from_file(infrastructure::expand_tilde(file))
        })
    }
}

/// Builds the session state from a config.
///
/// A theme that fails to load falls back to the default; a catalog that fails
/// to load is an error, since there would be nothing to show.
///
/// # Errors
///
/// Returns the catalog loading error.
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = config.load_catalog()?;
    let theme = config.load_theme();

    tracing::info!(
        articles = catalog.articles.len(),
        platforms = catalog.platforms.len(),
        theme = %theme.name,
        default_view = ?config.default_view,
        "hub initialized"
    );

    let mut state = AppState::new(catalog, theme);
    state.default_view = config.default_view;
    state.page_url.clone_from(&config.page_url);
    state.copied_badge_ttl =
        Duration::milliseconds(i64::try_from(config.copied_badge_ms).unwrap_or(i64::MAX));
    state.apply_search_filter();

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()).unwrap(), Config::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Config::from_map(&map(&[("scan_depth", "4")])).unwrap_err();
        assert!(matches!(err, HubError::Config(_)));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Config::from_map(&map(&[("default_view", "newest")])).is_err());
        assert!(Config::from_map(&map(&[("copied_badge_ms", "soon")])).is_err());
    }

    #[test]
    fn empty_value_clears_optional_setting() {
        let config = Config {
            theme_name: Some("midnight".into()),
            ..Config::default()
        };
        let config = config.merge_map(&map(&[("theme", " ")])).unwrap();
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn file_then_map_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_view = \"full\"\ntheme = \"midnight\"\ncopied_badge_ms = 100").unwrap();

        let config = Config::from_file(file.path())
            .unwrap()
            .merge_map(&map(&[("theme", "amber")]))
            .unwrap();

        assert_eq!(config.default_view, DefaultView::Full);
        assert_eq!(config.theme_name.as_deref(), Some("amber"));
        assert_eq!(config.copied_badge_ms, 100);
        assert_eq!(config.page_url, DEFAULT_PAGE_URL);
    }

    #[test]
    fn invalid_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "copied_badge_ms = \"two seconds\"").unwrap();

        assert!(matches!(Config::from_file(file.path()), Err(HubError::Config(_))));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".into()),
            ..Config::default()
        };
        let state = initialize(&config).unwrap();
        assert_eq!(state.theme, Theme::default());
    }

    #[test]
    fn initialize_applies_view_and_badge_settings() {
        let config = Config {
            default_view: DefaultView::Full,
            copied_badge_ms: 250,
            ..Config::default()
        };
        let state = initialize(&config).unwrap();

        assert_eq!(state.visible_articles().len(), state.catalog.articles.len());
        assert_eq!(state.copied_badge_ttl, Duration::milliseconds(250));
    }

    #[test]
    fn missing_catalog_file_fails() {
        let config = Config {
            catalog_file: Some("/nonexistent/catalog.toml".into()),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(HubError::Io(_))));
    }
}
