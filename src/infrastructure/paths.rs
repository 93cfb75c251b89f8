//! Filesystem locations.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "lekutao-hub";

/// Directory for trace files: `$XDG_DATA_HOME/lekutao-hub`, else
/// `~/.local/share/lekutao-hub`, else a directory under the system temp dir.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var("XDG_DATA_HOME").ok().as_deref(),
        std::env::var("HOME").ok().as_deref(),
    )
}

/// [`get_data_dir`] with explicit environment values.
///
/// ```
/// use lekutao_hub::infrastructure::paths::data_dir_from;
/// use std::path::PathBuf;
///
/// assert_eq!(data_dir_from(Some("/xdg"), Some("/home/u")), PathBuf::from("/xdg/lekutao-hub"));
/// assert_eq!(
///     data_dir_from(None, Some("/home/u")),
///     PathBuf::from("/home/u/.local/share/lekutao-hub")
/// );
/// ```
#[must_use]
pub fn data_dir_from(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    let non_empty = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(PathBuf::from);

    if let Some(xdg) = non_empty(xdg_data_home) {
        return xdg.join(APP_DIR);
    }
    if let Some(home) = non_empty(home) {
        return home.join(".local").join("share").join(APP_DIR);
    }
    std::env::temp_dir().join(APP_DIR)
}

/// Expands a leading `~` to `home`. Other paths are returned unchanged.
///
/// ```
/// use lekutao_hub::infrastructure::paths::expand_tilde_with;
/// use std::path::{Path, PathBuf};
///
/// let home = Some(Path::new("/home/u"));
/// assert_eq!(expand_tilde_with("~/hub.toml", home), PathBuf::from("/home/u/hub.toml"));
/// assert_eq!(expand_tilde_with("~", home), PathBuf::from("/home/u"));
/// assert_eq!(expand_tilde_with("/etc/hub.toml", home), PathBuf::from("/etc/hub.toml"));
/// assert_eq!(expand_tilde_with("~/x", None), PathBuf::from("~/x"));
/// ```
#[must_use]
pub fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Expands a leading `~` using `$HOME`.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_tilde_with(path, home.as_deref())
}
