//! The dispatch module runs one scheduled push from prompt to delivery.

use chrono::NaiveDate;
use log::{info, warn};
use reqwest::Client;

use crate::config::Config;
use crate::generate::{Provider, generate};
use crate::notify::{Delivery, notify};
use crate::prompt::{Playbook, normalize_mode};

/// Shared data for a dispatch.
pub struct DispatchContext<'a> {
    pub client: &'a Client,
    pub config: &'a Config,
    pub playbook: &'a dyn Playbook,
    /// Print the message instead of sending it.
    pub dry_run: bool,
}

/// What a dispatch produced.
#[derive(Debug)]
pub struct DispatchReport {
    pub mode: String,
    pub provider: &'static str,
    pub message: String,
    /// `None` on dry runs.
    pub delivery: Option<Delivery>,
}

/// Builds the prompt for `mode`, generates, post-processes and delivers the message.
///
/// Each stage degrades to text instead of failing, so the returned report always
/// carries the message that was (or would have been) sent.
///
/// # Arguments
///
/// * `ctx` - Client, configuration and playbook of the run
/// * `mode` - Raw mode keyword; trimmed and lowercased, empty means the playbook default
/// * `date` - Date shown in the message header
pub async fn dispatch(ctx: &DispatchContext<'_>, mode: &str, date: NaiveDate) -> DispatchReport {
    let mode = match normalize_mode(mode) {
        mode if mode.is_empty() => ctx.playbook.default_mode().to_owned(),
        mode => mode,
    };
    if !ctx.playbook.modes().contains(&mode.as_str()) {
        warn!("Unknown mode {mode:?}, using the generic prompt");
    }

    let prompt = ctx.playbook.build_prompt(&mode);
    let settings = ctx.playbook.settings();
    let provider = Provider::resolve(ctx.config);

    info!("Dispatching {mode} via {}", provider.name());
    let generation = generate(ctx.client, &provider, &settings, &prompt).await;
    let text = ctx.playbook.postprocess(&mode, generation.into_text());
    let message = format!("{}\n\n{text}", ctx.playbook.header(&mode, date));

    let delivery = if ctx.dry_run {
        println!("{message}");
        None
    } else {
        Some(notify(ctx.client, ctx.config, settings.telegram_timeout, &message).await)
    };

    DispatchReport {
        mode,
        provider: provider.name(),
        message,
        delivery,
    }
}
