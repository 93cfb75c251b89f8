//! Domain blacklist checker.
//!
//! A linear substring-containment scan against a static list of known-bad
//! domains. The only normalization is trimming and lower-casing the input;
//! blacklist entries are lower-cased when the catalog is loaded
//! (see [`Catalog::normalize_blacklist`](crate::domain::Catalog::normalize_blacklist)).

/// Terminal outcome of a domain check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskVerdict {
    /// No blacklist entry is contained in the input.
    Safe,
    /// The first blacklist entry contained in the input.
    Flagged { matched_entry: String },
}

/// Checks `input` against `blacklist`.
///
/// Returns `None` for blank input: the check is not performed and callers
/// keep their checker in its idle state.
///
/// # Examples
///
/// ```
/// use lekutao_hub::index::{check_domain, RiskVerdict};
///
/// let blacklist = vec!["flypixes.click".to_string()];
/// assert_eq!(
///     check_domain("FlyPixes.click", &blacklist),
///     Some(RiskVerdict::Flagged { matched_entry: "flypixes.click".into() })
/// );
/// assert_eq!(check_domain("safe-site.jp", &blacklist), Some(RiskVerdict::Safe));
/// assert_eq!(check_domain("   ", &blacklist), None);
/// ```
#[must_use]
pub fn check_domain(input: &str, blacklist: &[String]) -> Option<RiskVerdict> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let verdict = blacklist
        .iter()
        .find(|entry| normalized.contains(entry.as_str()))
        .map_or(RiskVerdict::Safe, |entry| RiskVerdict::Flagged {
            matched_entry: entry.clone(),
        });

    tracing::debug!(input = %normalized, verdict = ?verdict, "domain checked");
    Some(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blacklist() -> Vec<String> {
        vec!["mercari-jp.shop".into(), "flypixes.click".into(), "click".into()]
    }

    #[test]
    fn flags_subdomains_and_paths() {
        assert_eq!(
            check_domain("  https://www.Mercari-JP.shop/item/1 ", &blacklist()),
            Some(RiskVerdict::Flagged {
                matched_entry: "mercari-jp.shop".into()
            })
        );
    }

    #[test]
    fn first_entry_wins() {
        assert_eq!(
            check_domain("flypixes.click", &blacklist()),
            Some(RiskVerdict::Flagged {
                matched_entry: "flypixes.click".into()
            })
        );
    }

    #[test]
    fn empty_blacklist_is_always_safe() {
        assert_eq!(check_domain("anything.example", &[]), Some(RiskVerdict::Safe));
    }

    #[test]
    fn blank_input_is_not_checked() {
        assert_eq!(check_domain("", &blacklist()), None);
        assert_eq!(check_domain("\t \n", &blacklist()), None);
    }
}
