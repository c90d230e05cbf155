use proactive::PlaybookKind;
use proactive::prompt::{AssistantMode, CeoMode, normalize_mode};
use spectral::prelude::*;

mod bot_extras;

use bot_extras::{config_from, fixed_date};

assert_prompt_markers![
    tasks_markers: PlaybookKind::Assistant, "tasks" => ["Task (09:00):", "✅ 5 Tasks", "Rules:"],
    fb_posts_markers: PlaybookKind::Assistant, "fb_posts" => [
        "📌 Post 1", "📌 Post 2", "📌 Post 3", "📍 [ADDRESS]", "📞 [PHONE]", "🌐 astroman.ge",
    ],
    biz_tricks_markers: PlaybookKind::Assistant, "biz_tricks" => [
        "🧠 Trick 1", "🧠 Trick 2", "🧠 Trick 3",
    ],
    new_ideas_markers: PlaybookKind::Assistant, "new_ideas" => [
        "💡 Idea 1", "💡 Idea 2", "realistic in Tbilisi",
    ],
    new_products_markers: PlaybookKind::Assistant, "new_products" => [
        "3 search keywords (English) for Alibaba", "Return exactly 5 items, numbered 1–5.",
    ],
    motivation_markers: PlaybookKind::Assistant, "motivation" => [
        "🔥 Quote 1", "🔥 Quote 2", "🔥 Quote 3",
    ],
    good_night_markers: PlaybookKind::Assistant, "good_night" => [
        "🌙 Good night", "✅ Task check", "😴 Sleep tips", "🌌 Lucid dreaming",
    ],
    morning_markers: PlaybookKind::Ceo, "morning" => [
        "10:00", "I. ", "II. ", "III. ", "IV. ", "V. ",
    ],
    night_markers: PlaybookKind::Ceo, "night" => [
        "21:00", "I. ", "II. ", "III. ", "IV. ",
        "Inventory Turnover / Pricing Power / Unit Economics",
    ],
];

#[test]
fn every_assistant_mode_has_a_dedicated_prompt() {
    let config = config_from(&[]);
    let playbook = PlaybookKind::Assistant.bind(&config);
    let fallback = playbook.build_prompt("no_such_mode");

    for mode in playbook.modes() {
        assert_that(&AssistantMode::parse(mode)).is_some();
        assert_that(&(playbook.build_prompt(mode) == fallback)).is_false();
    }
}

#[test]
fn unknown_assistant_mode_falls_back_to_generic_prompt() {
    let config = config_from(&[]);
    let prompt = PlaybookKind::Assistant.bind(&config).build_prompt("lunch");

    assert_that(&prompt).contains("Write a short helpful message for Rezi about ASTROMAN.");
    assert_that(&prompt).contains("Rules:");
    assert_that(&prompt).starts_with("User: Rezi.");
}

#[test]
fn unknown_ceo_mode_falls_back_to_generic_prompt() {
    let config = config_from(&[]);
    let prompt = PlaybookKind::Ceo.bind(&config).build_prompt("");

    assert_that(&prompt).is_equal_to("CEO MODE".to_owned());
    assert_that(&CeoMode::parse("evening")).is_none();
}

#[test]
fn business_facts_are_interpolated() {
    let config = config_from(&[
        ("ASTROMAN_ADDRESS", "1 Rustaveli Ave"),
        ("ASTROMAN_PHONE", "+995 555 000"),
        ("ASTROMAN_CITY", "Batumi"),
    ]);
    let playbook = PlaybookKind::Assistant.bind(&config);
    let prompt = playbook.build_prompt("fb_posts");

    assert_that(&prompt).contains("(cosmic-themed shop) in Batumi.");
    assert_that(&prompt).contains("address=1 Rustaveli Ave, phone=+995 555 000");
    assert_that(&prompt).contains("  📍 1 Rustaveli Ave\n  📞 +995 555 000");
    assert_that(&prompt.contains("{address}")).is_false();
}

#[test]
fn substituted_values_are_not_rescanned() {
    let config = config_from(&[
        ("ASTROMAN_ADDRESS", "Suite {phone}"),
        ("ASTROMAN_PHONE", "555"),
        ("ASTROMAN_CITY", "{address}"),
    ]);
    let prompt = PlaybookKind::Assistant.bind(&config).build_prompt("fb_posts");

    assert_that(&prompt).contains("(cosmic-themed shop) in {address}.");
    assert_that(&prompt).contains("address=Suite {phone}, phone=555");
    assert_that(&prompt).contains("  📍 Suite {phone}\n  📞 555");
}

#[test]
fn assistant_header_uses_mode_title() {
    let config = config_from(&[]);
    let playbook = PlaybookKind::Assistant.bind(&config);

    assert_that(&playbook.header("new_products", fixed_date()))
        .is_equal_to("📩 ASTROMAN — 17:00 — Product Ideas — 2026-10-19".to_owned());
    assert_that(&playbook.header("lunch", fixed_date()))
        .is_equal_to("📩 ASTROMAN — lunch — 2026-10-19".to_owned());
}

#[test]
fn ceo_header_reports_night_audit_for_anything_but_morning() {
    let config = config_from(&[]);
    let playbook = PlaybookKind::Ceo.bind(&config);

    assert_that(&playbook.header("morning", fixed_date()))
        .is_equal_to("🚀 ASTROMAN CEO დილის ბრიფინგი — 2026-10-19".to_owned());
    assert_that(&playbook.header("whatever", fixed_date()))
        .is_equal_to("🌙 ASTROMAN CEO ღამის აუდიტი — 2026-10-19".to_owned());
}

#[test]
fn only_new_products_is_post_processed() {
    let config = config_from(&[]);
    let playbook = PlaybookKind::Assistant.bind(&config);
    let text = "1) Star Projector\nkeywords: star projector".to_owned();

    assert_that(&playbook.postprocess("tasks", text.clone())).is_equal_to(text.clone());
    assert_that(&playbook.postprocess("new_products", text)).contains("🔎 Alibaba links:");
}

#[test]
fn playbooks_parse_from_cli_values() {
    assert_that(&"CEO".parse::<PlaybookKind>()).is_equal_to(Ok::<_, String>(PlaybookKind::Ceo));
    assert_that(&" assistant ".parse::<PlaybookKind>())
        .is_equal_to(Ok::<_, String>(PlaybookKind::Assistant));
    assert_that(&"marketing".parse::<PlaybookKind>().is_err()).is_true();
}

#[test]
fn unknown_playbook_settings_fall_back_to_assistant() {
    assert_that(&PlaybookKind::from_setting("marketing")).is_equal_to(PlaybookKind::Assistant);
    assert_that(&PlaybookKind::from_setting("")).is_equal_to(PlaybookKind::Assistant);
    assert_that(&PlaybookKind::from_setting(" Ceo ")).is_equal_to(PlaybookKind::Ceo);
}

#[test]
fn modes_are_normalized() {
    assert_that(&normalize_mode("  New_Products\n")).is_equal_to("new_products".to_owned());
}
