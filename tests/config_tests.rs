use spectral::prelude::*;

mod bot_extras;

use bot_extras::config_from;

#[test]
fn absent_variables_use_literal_defaults() {
    let config = config_from(&[]);

    assert_that(&config.business.address).is_equal_to("[ADDRESS]".to_owned());
    assert_that(&config.business.phone).is_equal_to("[PHONE]".to_owned());
    assert_that(&config.business.city).is_equal_to("Tbilisi".to_owned());
    assert_that(&config.anthropic_model).is_equal_to("claude-3-5-sonnet-20240620".to_owned());
    assert_that(&config.openai_model).is_equal_to("gpt-4.1-mini".to_owned());
    assert_that(&config.telegram_api_url).is_equal_to("https://api.telegram.org".to_owned());
    assert_that(&config.has_telegram()).is_false();
}

#[test]
fn empty_variables_stay_empty() {
    let config = config_from(&[("ASTROMAN_CITY", ""), ("TELEGRAM_BOT_TOKEN", "123:abc")]);

    assert_that(&config.business.city).is_equal_to(String::new());
    assert_that(&config.has_telegram()).is_false();
}

#[test]
fn telegram_needs_token_and_chat() {
    let config = config_from(&[("TELEGRAM_BOT_TOKEN", "123:abc"), ("TELEGRAM_CHAT_ID", "-100")]);

    assert_that(&config.has_telegram()).is_true();
}
