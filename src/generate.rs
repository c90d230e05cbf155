//! The generate module sends a prompt to exactly one text-generation provider and
//! turns whatever comes back into message text.
//!
//! Failures are not raised. Every outcome, including a rejected request, renders to a
//! human-readable string that is forwarded like a normal reply.

use std::fmt;

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::{Config, endpoint};
use crate::constants::{ANTHROPIC_VERSION, MISSING_CREDENTIAL_MESSAGE};
use crate::prompt::GenerationSettings;

const CLAUDE: &str = "Claude";
const OPENAI: &str = "OpenAI";

/// The provider selected for a run, resolved once from the configured credentials.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Provider {
    /// Anthropic Messages API. Preferred when both credentials are present.
    Anthropic {
        api_key: String,
        model: String,
        base_url: String,
    },
    /// OpenAI Responses API.
    OpenAi {
        api_key: String,
        model: String,
        base_url: String,
    },
    /// No credential configured; generation is skipped.
    Unconfigured,
}

impl Provider {
    /// Picks the provider whose credential is non-empty, Anthropic first.
    pub fn resolve(config: &Config) -> Self {
        if !config.anthropic_api_key.is_empty() {
            Provider::Anthropic {
                api_key: config.anthropic_api_key.clone(),
                model: config.anthropic_model.clone(),
                base_url: config.anthropic_base_url.clone(),
            }
        } else if !config.openai_api_key.is_empty() {
            Provider::OpenAi {
                api_key: config.openai_api_key.clone(),
                model: config.openai_model.clone(),
                base_url: config.openai_base_url.clone(),
            }
        } else {
            Provider::Unconfigured
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Anthropic { .. } => CLAUDE,
            Provider::OpenAi { .. } => OPENAI,
            Provider::Unconfigured => "none",
        }
    }
}

/// Outcome of a generation request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Generation {
    /// Trimmed, non-empty provider text.
    Text(String),
    /// The provider answered successfully but no text could be extracted.
    Empty { provider: &'static str },
    /// The provider answered with a non-success status.
    ProviderError {
        provider: &'static str,
        status: u16,
        body: String,
    },
    /// Neither credential is configured; no request was made.
    MissingCredential,
    /// The request never produced a usable answer: network error, timeout or malformed JSON.
    RequestFailed {
        provider: &'static str,
        reason: String,
    },
}

impl Generation {
    fn from_text(provider: &'static str, text: String) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Generation::Empty { provider }
        } else {
            Generation::Text(text.to_owned())
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Generation::Text(_))
    }

    /// Renders the outcome as message text.
    pub fn into_text(self) -> String {
        match self {
            Generation::Text(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::Text(text) => write!(formatter, "{text}"),
            Generation::Empty { provider } => {
                write!(formatter, "❌ Empty response from {provider}.")
            }
            Generation::ProviderError {
                provider,
                status,
                body,
            } => write!(formatter, "❌ {provider} API error: {status}\n{body}"),
            Generation::MissingCredential => write!(formatter, "{MISSING_CREDENTIAL_MESSAGE}"),
            Generation::RequestFailed { provider, reason } => {
                write!(formatter, "❌ {provider} request failed: {reason}")
            }
        }
    }
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    messages: [AnthropicMessage<'a>; 1],
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    input: &'a str,
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    output: Vec<OpenAiOutputItem>,
}

#[derive(Deserialize)]
struct OpenAiOutputItem {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Concatenates the text of all blocks of the given type.
fn collect_text(blocks: impl IntoIterator<Item = ContentBlock>, kind: &str) -> String {
    blocks
        .into_iter()
        .filter(|block| block.kind == kind)
        .filter_map(|block| block.text)
        .collect()
}

/// Sends a prepared request and returns its status and raw body.
async fn send(request: RequestBuilder) -> Result<(StatusCode, String)> {
    let response = request.send().await.context("Request failed")?;
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;
    Ok((status, body))
}

/// Generates text for `prompt` with the selected provider.
///
/// A single request is made with the timeout from `settings`; there is no retry.
///
/// # Arguments
///
/// * `client` - HTTP client shared by the run
/// * `provider` - The provider resolved from configuration
/// * `settings` - Temperature, output length and timeout of the playbook
/// * `prompt` - The complete prompt
///
/// # Returns
///
/// The generation outcome. Failures are returned as values, never as errors.
pub async fn generate(
    client: &Client,
    provider: &Provider,
    settings: &GenerationSettings,
    prompt: &str,
) -> Generation {
    let outcome = match provider {
        Provider::Unconfigured => {
            warn!("No generation provider configured, skipping request");
            return Generation::MissingCredential;
        }
        Provider::Anthropic {
            api_key,
            model,
            base_url,
        } => {
            info!("Requesting completion from {CLAUDE} ({model})");
            call_anthropic(client, api_key, model, base_url, settings, prompt).await
        }
        Provider::OpenAi {
            api_key,
            model,
            base_url,
        } => {
            info!("Requesting completion from {OPENAI} ({model})");
            call_openai(client, api_key, model, base_url, settings, prompt).await
        }
    };

    match outcome {
        Ok(generation) => {
            if let Generation::ProviderError { status, .. } = &generation {
                warn!("{} responded with status {status}", provider.name());
            }
            generation
        }
        Err(err) => {
            error!("{} request failed: {err:#}", provider.name());
            Generation::RequestFailed {
                provider: provider.name(),
                reason: format!("{err:#}"),
            }
        }
    }
}

async fn call_anthropic(
    client: &Client,
    api_key: &str,
    model: &str,
    base_url: &str,
    settings: &GenerationSettings,
    prompt: &str,
) -> Result<Generation> {
    let url = endpoint(base_url, "v1/messages")?;
    debug!("POST {url}");

    let payload = AnthropicRequest {
        model,
        max_tokens: settings.anthropic_max_tokens,
        temperature: settings.temperature,
        messages: [AnthropicMessage {
            role: "user",
            content: prompt,
        }],
    };

    let (status, body) = send(
        client
            .post(url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .timeout(settings.generation_timeout)
            .json(&payload),
    )
    .await?;

    if !status.is_success() {
        return Ok(Generation::ProviderError {
            provider: CLAUDE,
            status: status.as_u16(),
            body,
        });
    }

    let reply: AnthropicResponse =
        serde_json::from_str(&body).context(format!("Malformed {CLAUDE} response"))?;
    Ok(Generation::from_text(
        CLAUDE,
        collect_text(reply.content, "text"),
    ))
}

async fn call_openai(
    client: &Client,
    api_key: &str,
    model: &str,
    base_url: &str,
    settings: &GenerationSettings,
    prompt: &str,
) -> Result<Generation> {
    let url = endpoint(base_url, "v1/responses")?;
    debug!("POST {url}");

    let payload = OpenAiRequest {
        model,
        input: prompt,
        temperature: settings.temperature,
        max_output_tokens: settings.openai_max_output_tokens,
    };

    let (status, body) = send(
        client
            .post(url)
            .bearer_auth(api_key)
            .timeout(settings.generation_timeout)
            .json(&payload),
    )
    .await?;

    if !status.is_success() {
        return Ok(Generation::ProviderError {
            provider: OPENAI,
            status: status.as_u16(),
            body,
        });
    }

    let reply: OpenAiResponse =
        serde_json::from_str(&body).context(format!("Malformed {OPENAI} response"))?;
    let text = collect_text(
        reply.output.into_iter().flat_map(|item| item.content),
        "output_text",
    );
    Ok(Generation::from_text(OPENAI, text))
}
