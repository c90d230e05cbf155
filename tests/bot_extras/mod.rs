#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use proactive::Config;
use proactive::prompt::GenerationSettings;

/// Generates one test per mode asserting that every listed marker is in the prompt.
#[macro_export]
macro_rules! assert_prompt_markers {
    (
        $(
            $test_name:ident : $kind:expr, $mode:expr => [ $($marker:expr),+ $(,)? ]
        ),+ $(,)?
    ) => {
        $(
            #[test]
            fn $test_name() {
                let config = $crate::bot_extras::config_from(&[]);
                let playbook = $kind.bind(&config);
                let prompt = playbook.build_prompt($mode);

                assert_that(&prompt.is_empty()).is_false();
                $(
                    assert_that(&prompt).contains($marker);
                )+
            }
        )+
    }
}

/// Builds a configuration from the given variables only.
pub fn config_from(vars: &[(&str, &str)]) -> Config {
    Config::from_lookup(|name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
    })
}

/// Configuration whose endpoints all point at `server_uri`.
pub fn mock_config(server_uri: &str, vars: &[(&str, &str)]) -> Config {
    let mut config = config_from(vars);
    config.anthropic_base_url = server_uri.to_owned();
    config.openai_base_url = server_uri.to_owned();
    config.telegram_api_url = server_uri.to_owned();
    config
}

pub fn quick_settings() -> GenerationSettings {
    GenerationSettings {
        temperature: 0.7,
        anthropic_max_tokens: 900,
        openai_max_output_tokens: 700,
        generation_timeout: Duration::from_millis(500),
        telegram_timeout: Duration::from_millis(500),
    }
}

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}
