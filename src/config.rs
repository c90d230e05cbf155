//! The config module resolves the bot configuration from the process environment.
//!
//! Configuration is read exactly once at the entry point and then passed explicitly
//! to every stage of a dispatch.

use anyhow::{Context, Result, anyhow};
use url::Url;

use crate::constants::{
    ADDRESS_ENV_NAME, ANTHROPIC_API_KEY_ENV_NAME, ANTHROPIC_BASE_URL_ENV_NAME,
    ANTHROPIC_MODEL_ENV_NAME, CITY_ENV_NAME, DEFAULT_ADDRESS, DEFAULT_ANTHROPIC_BASE_URL,
    DEFAULT_ANTHROPIC_MODEL, DEFAULT_CITY, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
    DEFAULT_PHONE, DEFAULT_TELEGRAM_API_URL, OPENAI_API_KEY_ENV_NAME, OPENAI_BASE_URL_ENV_NAME,
    OPENAI_MODEL_ENV_NAME, PHONE_ENV_NAME, TELEGRAM_API_URL_ENV_NAME, TELEGRAM_BOT_TOKEN_ENV_NAME,
    TELEGRAM_CHAT_ID_ENV_NAME,
};

/// Immutable bot configuration.
///
/// Credentials default to empty strings, which downstream stages treat as "not configured".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_url: String,
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub anthropic_base_url: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    /// Business facts interpolated into the prompts.
    pub business: BusinessFacts,
}

/// Free-text facts about the shop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusinessFacts {
    pub address: String,
    pub phone: String,
    pub city: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// A variable that is present but empty stays empty; only absent variables
    /// fall back to their literal defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_owned());

        Self {
            telegram_bot_token: var(TELEGRAM_BOT_TOKEN_ENV_NAME, ""),
            telegram_chat_id: var(TELEGRAM_CHAT_ID_ENV_NAME, ""),
            telegram_api_url: var(TELEGRAM_API_URL_ENV_NAME, DEFAULT_TELEGRAM_API_URL),
            anthropic_api_key: var(ANTHROPIC_API_KEY_ENV_NAME, ""),
            anthropic_model: var(ANTHROPIC_MODEL_ENV_NAME, DEFAULT_ANTHROPIC_MODEL),
            anthropic_base_url: var(ANTHROPIC_BASE_URL_ENV_NAME, DEFAULT_ANTHROPIC_BASE_URL),
            openai_api_key: var(OPENAI_API_KEY_ENV_NAME, ""),
            openai_model: var(OPENAI_MODEL_ENV_NAME, DEFAULT_OPENAI_MODEL),
            openai_base_url: var(OPENAI_BASE_URL_ENV_NAME, DEFAULT_OPENAI_BASE_URL),
            business: BusinessFacts {
                address: var(ADDRESS_ENV_NAME, DEFAULT_ADDRESS),
                phone: var(PHONE_ENV_NAME, DEFAULT_PHONE),
                city: var(CITY_ENV_NAME, DEFAULT_CITY),
            },
        }
    }

    /// Returns `true` when both the Telegram token and chat id are set.
    pub fn has_telegram(&self) -> bool {
        !self.telegram_bot_token.is_empty() && !self.telegram_chat_id.is_empty()
    }
}

/// Appends `path` to the path of `base`, keeping any prefix the base already has.
///
/// # Errors
///
/// Returns an error if `base` is not an absolute URL that can carry a path.
pub(crate) fn endpoint(base: &str, path: &str) -> Result<Url> {
    let mut url = Url::parse(base).context(format!("Invalid base URL: {base}"))?;
    url.path_segments_mut()
        .map_err(|()| anyhow!("Base URL cannot have a path: {base}"))?
        .pop_if_empty()
        .extend(path.split('/'));
    Ok(url)
}
