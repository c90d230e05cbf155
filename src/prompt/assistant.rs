//! Seven-push daily assistant for the ASTROMAN shop owner.

use std::time::Duration;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::BusinessFacts;
use crate::postprocess::append_search_links;
use crate::prompt::{GenerationSettings, Playbook};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(city|address|phone)\}").expect("Failed to compile PLACEHOLDER regex")
});

const PROFILE: &str = r#"User: Rezi. Business: ASTROMAN (cosmic-themed shop) in {city}.
Core products: telescopes, binoculars, star projectors, moon lamps, educational optics, cosmic gifts.
Priorities: increase daily sales (especially low season); boost conversions via fast replies, bundles, demos, B2B (schools/hotels/tour companies).
Style: practical, high-ROI, specific steps; Georgian preferred for customer-facing content.
Contacts: address={address}, phone={phone}, website=astroman.ge."#;

const RULES: &str = r#"Rules:
- Prefer Georgian for customer-facing content.
- Be specific and actionable.
- Avoid made-up facts (prices/discounts) unless clearly marked as 'optional'.
- Keep output compact (Telegram-friendly)."#;

const TASKS: &str = r#"Task (09:00):
Create 5 daily tasks for Rezi TODAY that match ASTROMAN reality.
- Each task must be 10–30 minutes
- Include 1 sales task, 1 content task, 1 ops task, 1 B2B task, 1 learning task
Return:
✅ 5 Tasks (checkbox style)"#;

const FB_POSTS: &str = r#"Task (12:00):
Write 3 totally different, ready-to-paste Facebook posts for ASTROMAN in Georgian.
Each post:
- strong hook line
- 3–5 short lines (benefits)
- CTA (DM / visit / website)
- include contacts:
  📍 {address}
  📞 {phone}
  🌐 astroman.ge
- Keep emojis minimal (max 5 per post)

Topics must be different:
1) Telescopes / stargazing experience
2) Star projector / cozy home vibe
3) Gift idea (kids/couples)

Return exactly:
📌 Post 1
(text)
📌 Post 2
(text)
📌 Post 3
(text)"#;

const BIZ_TRICKS: &str = r#"Task (13:00):
Teach 3 useful business/economics tricks inspired by classic business/econ books.
Make them practical for ASTROMAN today.
For each trick:
- 1-sentence idea
- 1 example for ASTROMAN
- 1 micro-action Rezi can do today

Return exactly:
🧠 Trick 1
🧠 Trick 2
🧠 Trick 3"#;

const NEW_IDEAS: &str = r#"Task (15:00):
Generate 2 totally new growth ideas for ASTROMAN that are realistic in {city}.
Each idea must include:
- What it is (1 sentence)
- Why it works (1 sentence)
- How to test in 48 hours (3 steps)

Return exactly:
💡 Idea 1
💡 Idea 2"#;

const NEW_PRODUCTS: &str = r#"Task (17:00):
Propose 5 new product ideas to add for ASTROMAN (high demand, good margin, giftable).
For each product:
- Product name
- 1 key selling angle
- Target audience
- 3 search keywords (English) for Alibaba
Return exactly 5 items, numbered 1–5."#;

const MOTIVATION: &str = r#"Task (19:00):
Give 3 strong motivational quotes (English) + 1 Georgian line under each that feels personal for a business owner.
No clichés. Keep it punchy.

Return exactly:
🔥 Quote 1
🔥 Quote 2
🔥 Quote 3"#;

const GOOD_NIGHT: &str = r#"Task (21:00):
Write a warm good night message in Georgian.
Include:
- Quick checklist to review today's 5 tasks (ask Rezi to mark done/undone)
- 3 tips for better sleep tonight (safe, science-aligned)
- 3 lucid dreaming tactics (safe): dream journal, reality checks, MILD, etc.
Keep it calm, supportive, not too long.

Return exactly:
🌙 Good night
✅ Task check
😴 Sleep tips
🌌 Lucid dreaming"#;

const FALLBACK: &str = "Write a short helpful message for Rezi about ASTROMAN.";

const MODES: &[&str] = &[
    "tasks",
    "fb_posts",
    "biz_tricks",
    "new_ideas",
    "new_products",
    "motivation",
    "good_night",
];

/// Scheduled push kinds of the assistant playbook.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssistantMode {
    Tasks,
    FbPosts,
    BizTricks,
    NewIdeas,
    NewProducts,
    Motivation,
    GoodNight,
}

impl AssistantMode {
    /// Parses a normalized mode keyword; `None` for anything unknown.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "tasks" => Some(Self::Tasks),
            "fb_posts" => Some(Self::FbPosts),
            "biz_tricks" => Some(Self::BizTricks),
            "new_ideas" => Some(Self::NewIdeas),
            "new_products" => Some(Self::NewProducts),
            "motivation" => Some(Self::Motivation),
            "good_night" => Some(Self::GoodNight),
            _ => None,
        }
    }

    /// Schedule slot and name shown in the message header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Tasks => "09:00 — Daily Tasks",
            Self::FbPosts => "12:00 — Facebook Posts",
            Self::BizTricks => "13:00 — Business Tricks",
            Self::NewIdeas => "15:00 — New Ideas",
            Self::NewProducts => "17:00 — Product Ideas",
            Self::Motivation => "19:00 — Motivation",
            Self::GoodNight => "21:00 — Good Night",
        }
    }

    fn task(self) -> &'static str {
        match self {
            Self::Tasks => TASKS,
            Self::FbPosts => FB_POSTS,
            Self::BizTricks => BIZ_TRICKS,
            Self::NewIdeas => NEW_IDEAS,
            Self::NewProducts => NEW_PRODUCTS,
            Self::Motivation => MOTIVATION,
            Self::GoodNight => GOOD_NIGHT,
        }
    }
}

/// Assistant playbook bound to the shop's business facts.
pub struct AssistantPlaybook<'a> {
    business: &'a BusinessFacts,
}

impl<'a> AssistantPlaybook<'a> {
    pub fn new(business: &'a BusinessFacts) -> Self {
        Self { business }
    }

    /// Substitutes every placeholder in one pass; substituted values are never rescanned.
    fn fill(&self, template: &str) -> String {
        PLACEHOLDER_REGEX
            .replace_all(template, |caps: &Captures| match &caps[1] {
                "city" => self.business.city.clone(),
                "address" => self.business.address.clone(),
                _ => self.business.phone.clone(),
            })
            .into_owned()
    }
}

impl Playbook for AssistantPlaybook<'_> {
    fn default_mode(&self) -> &'static str {
        "tasks"
    }

    fn modes(&self) -> &'static [&'static str] {
        MODES
    }

    fn build_prompt(&self, mode: &str) -> String {
        let template = match AssistantMode::parse(mode) {
            Some(mode) => format!("{PROFILE}\n\n{}\n\n\n{RULES}", mode.task()),
            None => format!("{PROFILE}\n\n{FALLBACK}\n\n{RULES}"),
        };
        self.fill(&template)
    }

    fn header(&self, mode: &str, date: NaiveDate) -> String {
        let title = match AssistantMode::parse(mode) {
            Some(known) => known.title(),
            None => mode,
        };
        format!("📩 ASTROMAN — {title} — {}", date.format("%Y-%m-%d"))
    }

    fn postprocess(&self, mode: &str, text: String) -> String {
        match AssistantMode::parse(mode) {
            Some(AssistantMode::NewProducts) => append_search_links(&text),
            _ => text,
        }
    }

    fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            temperature: 0.7,
            anthropic_max_tokens: 900,
            openai_max_output_tokens: 700,
            generation_timeout: Duration::from_secs(45),
            telegram_timeout: Duration::from_secs(25),
        }
    }
}
