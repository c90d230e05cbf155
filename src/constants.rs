pub const TELEGRAM_BOT_TOKEN_ENV_NAME: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID_ENV_NAME: &str = "TELEGRAM_CHAT_ID";
pub const TELEGRAM_API_URL_ENV_NAME: &str = "TELEGRAM_API_URL";

pub const ANTHROPIC_API_KEY_ENV_NAME: &str = "ANTHROPIC_API_KEY";
pub const ANTHROPIC_MODEL_ENV_NAME: &str = "ANTHROPIC_MODEL";
pub const ANTHROPIC_BASE_URL_ENV_NAME: &str = "ANTHROPIC_BASE_URL";

pub const OPENAI_API_KEY_ENV_NAME: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL_ENV_NAME: &str = "OPENAI_MODEL";
pub const OPENAI_BASE_URL_ENV_NAME: &str = "OPENAI_BASE_URL";

pub const ADDRESS_ENV_NAME: &str = "ASTROMAN_ADDRESS";
pub const PHONE_ENV_NAME: &str = "ASTROMAN_PHONE";
pub const CITY_ENV_NAME: &str = "ASTROMAN_CITY";

pub(crate) const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub(crate) const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub(crate) const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub(crate) const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20240620";
pub(crate) const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
pub(crate) const DEFAULT_ADDRESS: &str = "[ADDRESS]";
pub(crate) const DEFAULT_PHONE: &str = "[PHONE]";
pub(crate) const DEFAULT_CITY: &str = "Tbilisi";

pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "❌ Set ANTHROPIC_API_KEY (Claude) or OPENAI_API_KEY.";

pub const ALIBABA_SEARCH_URL: &str = "https://www.alibaba.com/trade/search";
pub const ALIBABA_LINKS_LABEL: &str = "🔎 Alibaba links:";
pub const ALIBABA_FALLBACK_LABEL: &str = "🔎 Alibaba search:";
pub(crate) const ALIBABA_FALLBACK_QUERY: &str = "astronomy telescope accessories";
pub(crate) const MAX_LINKS_PER_ITEM: usize = 3;
pub(crate) const KEYWORD_CANDIDATE_MAX_CHARS: usize = 60;
