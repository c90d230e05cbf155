//! The prompt module holds the playbooks: a template set plus business profile plus the
//! generation settings the playbook runs with.
//!
//! Every playbook maps a mode keyword to a prompt. Unknown modes never fail, they fall
//! back to the playbook's generic prompt so a scheduled run always produces a message.

pub mod assistant;
pub mod ceo;

use std::time::Duration;

use chrono::NaiveDate;
use log::warn;

use crate::config::Config;

pub use assistant::{AssistantMode, AssistantPlaybook};
pub use ceo::{CeoMode, CeoPlaybook};

/// Request parameters shared by both generation providers, plus network timeouts.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f64,
    /// `max_tokens` sent to Anthropic.
    pub anthropic_max_tokens: u32,
    /// `max_output_tokens` sent to OpenAI.
    pub openai_max_output_tokens: u32,
    pub generation_timeout: Duration,
    pub telegram_timeout: Duration,
}

/// A template set bound to a business profile.
pub trait Playbook {
    /// Mode used when none is given.
    fn default_mode(&self) -> &'static str;

    /// All mode keywords with a dedicated template.
    fn modes(&self) -> &'static [&'static str];

    /// Builds the prompt for `mode`, falling back to the generic prompt for unknown modes.
    fn build_prompt(&self, mode: &str) -> String;

    /// First line of the delivered message.
    fn header(&self, mode: &str, date: NaiveDate) -> String;

    /// Post-processes generated text before delivery. Identity unless a mode needs more.
    fn postprocess(&self, _mode: &str, text: String) -> String {
        text
    }

    fn settings(&self) -> GenerationSettings;
}

/// Enum representing the available playbooks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlaybookKind {
    /// Seven daily pushes: tasks, posts, tricks, ideas, products, motivation, good night.
    #[default]
    Assistant,
    /// Two daily CEO briefings: morning allocation and night audit.
    Ceo,
}

impl std::str::FromStr for PlaybookKind {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "assistant" => Ok(PlaybookKind::Assistant),
            "ceo" => Ok(PlaybookKind::Ceo),
            _ => Err(format!("Invalid playbook: {}", input)),
        }
    }
}

impl PlaybookKind {
    /// Resolves a configured playbook name; unknown names log a warning and run the
    /// default playbook.
    pub fn from_setting(raw: &str) -> Self {
        raw.parse::<Self>().unwrap_or_else(|err| {
            let fallback = PlaybookKind::default();
            warn!("{err}, using {fallback:?}");
            fallback
        })
    }

    /// Binds the playbook to the business facts of `config`.
    pub fn bind(self, config: &Config) -> Box<dyn Playbook + '_> {
        match self {
            PlaybookKind::Assistant => Box::new(AssistantPlaybook::new(&config.business)),
            PlaybookKind::Ceo => Box::new(CeoPlaybook),
        }
    }
}

/// Trims and lowercases a raw mode keyword.
pub fn normalize_mode(raw: &str) -> String {
    raw.trim().to_lowercase()
}
