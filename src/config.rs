//! Server configuration from the environment

use crate::analysis::CaseLocale;

const DEFAULT_PORT: u16 = 8000;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Casing used for the role banner
    pub case_locale: CaseLocale,
    /// Base seed for reproducible content picks; entropy when unset
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("LEXICHAT_PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid LEXICHAT_PORT, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let case_locale = match lookup("LEXICHAT_CASE_LOCALE") {
            Some(raw) => CaseLocale::from_tag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unsupported LEXICHAT_CASE_LOCALE, using fr");
                CaseLocale::French
            }),
            None => CaseLocale::French,
        };

        let seed = lookup("LEXICHAT_SEED").and_then(|raw| match raw.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    "Invalid LEXICHAT_SEED, content will not be reproducible"
                );
                None
            }
        });

        Self {
            port,
            case_locale,
            seed,
        }
    }
}
