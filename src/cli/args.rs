use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lekutao-hub")]
#[command(about = "Help manual, platform guide and domain checker for Lekutao", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Terminal height.
    #[arg(long, default_value_t = 24)]
    pub rows: usize,

    /// Terminal width.
    #[arg(long, default_value_t = 80)]
    pub cols: usize,

    /// Config overrides as key=value, e.g. `default_view=full theme=midnight`.
    #[arg(value_parser = parse_setting)]
    pub settings: Vec<(String, String)>,
}

impl Cli {
    pub fn settings_map(&self) -> BTreeMap<String, String> {
        self.settings.iter().cloned().collect()
    }
}

fn parse_setting(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {arg:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in {arg:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_are_key_value_pairs() {
        let cli = Cli::try_parse_from(["lekutao-hub", "--rows", "40", "default_view=full", "page_url=https://a/b?c=d"])
            .unwrap();
        assert_eq!(cli.rows, 40);
        let map = cli.settings_map();
        assert_eq!(map["default_view"], "full");
        assert_eq!(map["page_url"], "https://a/b?c=d");
    }

    #[test]
    fn bare_word_is_rejected() {
        assert!(Cli::try_parse_from(["lekutao-hub", "full"]).is_err());
        assert!(Cli::try_parse_from(["lekutao-hub", "=full"]).is_err());
    }
}
