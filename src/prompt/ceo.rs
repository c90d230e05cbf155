//! Twice-daily CEO briefing built on the shop's 2025 numbers.

use std::time::Duration;

use chrono::NaiveDate;

use crate::prompt::{GenerationSettings, Playbook};

const PROFILE: &str = r#"ბიზნესი: ASTROMAN

რეალური 2025 შედეგები:
- წლიური შემოსავალი: 184,023 GEL
- საშუალო თვიური: ~15,300 GEL
- მთლიანი მარჟა: 59.4%
- მთავარი შემოსავალი: ტელესკოპები
- დაბალი მარჟის შეცდომა: ზოგი პრემიუმ ტელესკოპი 2%-იანი მარჟით
- ბევრი ნელი მარაგი

სტრატეგიული მიზანი:
- ტელესკოპების გარშემო ბრენდის გამაგრება
- საშუალო ჩეკის ზრდა
- მაღალი მარჟის ფოკუსი
- ნელი მარაგის ლიკვიდაცია
- ონლაინ გაყიდვების წილის ზრდა

იმსჯელე როგორც კაპიტალის ალოკატორი CEO.
არ იყოს ზოგადი რჩევები."#;

const MORNING: &str = r#"დრო: 10:00 — კაპიტალის განაწილების ბრიფინგი

I. სად არის ფული ჩაკეტილი მარაგში?
II. რომელი კატეგორია უნდა დავაწვეთ დღეს?
III. როგორ გავზარდოთ დღიური 15,300 → 20,000 თვიური საშუალო?
IV. რა ნაბიჯი გაზრდის საშუალო ჩეკს 20%-ით?
V. რომელი დაბალი მარჟის პროდუქტი უნდა გადაიხედოს?

მოიფიქრე კონკრეტული ქმედებები.
არ იყოს ზოგადი ტექსტი."#;

const NIGHT: &str = r#"დრო: 21:00 — სტრუქტურული აუდიტი

I. ტელესკოპებზე დამოკიდებულება — რისკია თუ ძალა?
II. მარაგის ბრუნვადობის პრობლემა სად არის?
III. რომელი პროდუქტი უნდა ამოვიღოთ?
IV. ერთი ღრმა კონცეფცია:
Inventory Turnover / Pricing Power / Unit Economics

აუხსენი ASTROMAN კონტექსტში.
ხვალ რა უნდა გაკეთდეს კონკრეტულად?

იმსჯელე როგორც გრძელვადიანი ბრენდის მშენებელი."#;

const FALLBACK: &str = "CEO MODE";

const MODES: &[&str] = &["morning", "night"];

pub const MORNING_TITLE: &str = "🚀 ASTROMAN CEO დილის ბრიფინგი";
pub const NIGHT_TITLE: &str = "🌙 ASTROMAN CEO ღამის აუდიტი";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CeoMode {
    Morning,
    Night,
}

impl CeoMode {
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "morning" => Some(Self::Morning),
            "night" => Some(Self::Night),
            _ => None,
        }
    }
}

/// The CEO profile is fixed text, so the playbook carries no configuration.
pub struct CeoPlaybook;

impl Playbook for CeoPlaybook {
    fn default_mode(&self) -> &'static str {
        "morning"
    }

    fn modes(&self) -> &'static [&'static str] {
        MODES
    }

    fn build_prompt(&self, mode: &str) -> String {
        match CeoMode::parse(mode) {
            Some(CeoMode::Morning) => format!("{PROFILE}\n\n{MORNING}\n"),
            Some(CeoMode::Night) => format!("{PROFILE}\n\n{NIGHT}\n"),
            None => FALLBACK.to_owned(),
        }
    }

    // Anything but the morning slot is reported as the night audit.
    fn header(&self, mode: &str, date: NaiveDate) -> String {
        let title = match CeoMode::parse(mode) {
            Some(CeoMode::Morning) => MORNING_TITLE,
            _ => NIGHT_TITLE,
        };
        format!("{title} — {}", date.format("%Y-%m-%d"))
    }

    fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            temperature: 0.6,
            anthropic_max_tokens: 1400,
            openai_max_output_tokens: 1400,
            generation_timeout: Duration::from_secs(60),
            telegram_timeout: Duration::from_secs(40),
        }
    }
}
