//! proactive is a CLI bot run by an external scheduler a few times a day.
//!
//! Each invocation picks a playbook and a mode, asks an LLM for the matching content
//! and delivers it to Telegram. The process always exits successfully; problems are
//! reported through logs and through the delivered text.

use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, error, info};

use proactive::{Config, DispatchContext, PlaybookKind, dispatch};

/// Scheduled bot that pushes LLM-generated briefings to Telegram
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Playbook to run: "assistant" (default) or "ceo"; unknown names run the assistant
    #[arg(long, short, env = "BOT_PLAYBOOK", default_value = "assistant")]
    playbook: String,

    /// Mode keyword of the playbook, e.g. "tasks" or "morning"; unknown modes use a generic prompt
    #[arg(long, short, env = "MODE", default_value = "")]
    mode: String,

    /// Print the message to stdout instead of sending it
    #[arg(long)]
    dry_run: bool,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", default_value_t = 2)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let config = Config::from_env();
    let playbook = PlaybookKind::from_setting(&cli.playbook).bind(&config);

    let client = match reqwest::Client::builder().build() {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build HTTP client: {err}");
            return;
        }
    };

    let ctx = DispatchContext {
        client: &client,
        config: &config,
        playbook: playbook.as_ref(),
        dry_run: cli.dry_run,
    };

    let today = chrono::Local::now().date_naive();
    let report = dispatch(&ctx, &cli.mode, today).await;
    info!(
        "Finished {} via {} ({:?})",
        report.mode, report.provider, report.delivery
    );
}
