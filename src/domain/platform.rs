//! Platform reference model: e-commerce marketplaces and logistics carriers.

use serde::{Deserialize, Serialize};

/// Section a platform belongs to on the hub page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// Japanese e-commerce site supported by the proxy service.
    #[default]
    Marketplace,
    /// Official logistics partner.
    Carrier,
}

/// A reference entry describing an external site or carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub brand_label: String,
    #[serde(default)]
    pub kind: PlatformKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tips: Option<String>,
    #[serde(default)]
    pub reference_url: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl Platform {
    #[must_use]
    pub fn new(name: impl Into<String>, brand_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand_label: brand_label.into(),
            kind: PlatformKind::Marketplace,
            description: None,
            tips: None,
            reference_url: None,
            features: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = Some(url.into());
        self
    }

    /// Whether the platform has a detail page.
    ///
    /// Platforms carrying neither a description nor a reference URL only show
    /// a "coming soon" notice when selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use lekutao_hub::domain::Platform;
    ///
    /// assert!(!Platform::new("メルカリ", "MERCARI").is_navigable());
    /// assert!(Platform::new("メルカリ", "MERCARI")
    ///     .with_reference_url("https://jp.mercari.com")
    ///     .is_navigable());
    /// ```
    #[must_use]
    pub const fn is_navigable(&self) -> bool {
        self.description.is_some() || self.reference_url.is_some()
    }

    /// Notice shown when a platform without a detail page is selected.
    #[must_use]
    pub fn coming_soon_notice(&self) -> String {
        format!("{} 功能即将上线，敬请期待！", self.name)
    }
}
