//! The proactive library builds scheduled business briefings with an LLM
//! and pushes them to a Telegram chat.

pub mod config;
pub mod constants;
pub mod dispatch;
pub mod generate;
pub mod notify;
pub mod postprocess;
pub mod prompt;

pub use config::Config;
pub use dispatch::{DispatchContext, DispatchReport, dispatch};
pub use generate::{Generation, Provider, generate};
pub use notify::{Delivery, notify};
pub use postprocess::append_search_links;
pub use prompt::{Playbook, PlaybookKind};
