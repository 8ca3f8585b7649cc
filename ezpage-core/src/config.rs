use std::env;

use anyhow::{Context as _, bail};

use ezpage_utils::pagination::DEFAULT_TIMEOUT_SECS;

/// Runtime settings read from the process environment (and `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Bot token (`DISCORD_TOKEN`).
    pub token: String,
    /// Seconds of inactivity before a pagination expires (`EZPAGE_TIMEOUT_SECS`).
    pub timeout_secs: u64,
    /// Only the invoking user may turn pages (`EZPAGE_OWNER_ONLY`).
    pub owner_only: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .context("DISCORD_TOKEN is not set")?;

        let timeout_secs = match lookup("EZPAGE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("EZPAGE_TIMEOUT_SECS is not a number: `{raw}`"))?;
                if secs == 0 {
                    bail!("EZPAGE_TIMEOUT_SECS must be at least 1");
                }
                secs
            }
            None => DEFAULT_TIMEOUT_SECS,
        };

        let owner_only = match lookup("EZPAGE_OWNER_ONLY") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("EZPAGE_OWNER_ONLY is not a boolean: `{raw}`"))?,
            None => false,
        };

        Ok(Self {
            token,
            timeout_secs,
            owner_only,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = load(&[("DISCORD_TOKEN", "abc")]).expect("valid config");

        assert_eq!(
            config,
            Config {
                token: "abc".to_owned(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                owner_only: false,
            }
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("DISCORD_TOKEN", "abc"),
            ("EZPAGE_TIMEOUT_SECS", " 300 "),
            ("EZPAGE_OWNER_ONLY", "on"),
        ])
        .expect("valid config");

        assert_eq!(config.timeout_secs, 300);
        assert!(config.owner_only);
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(load(&[]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "  ")]).is_err());
    }

    #[test]
    fn bad_numbers_and_flags_are_errors() {
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("EZPAGE_TIMEOUT_SECS", "soon")]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("EZPAGE_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("EZPAGE_OWNER_ONLY", "maybe")]).is_err());
    }
}
