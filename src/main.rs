use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use seomark::{
    highlight_escaped, highlight_with, score_breakdown, split_keywords, AppState,
    ChatCompletionsClient, CompletionProvider, Enhancer, Marker, Optimizer, ProductInput,
};

mod cli;
use cli::{display, server_config, Cli, Commands, LlmArgs};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            keywords,
            text,
            json,
        } => {
            let text = text_or_stdin(text)?;
            let breakdown = score_breakdown(&text, &split_keywords(&keywords));
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                display::print_breakdown(&breakdown);
            }
        }
        Commands::Highlight {
            keywords,
            text,
            html,
        } => {
            let text = text_or_stdin(text)?;
            let keywords = split_keywords(&keywords);
            let marked = if html {
                highlight_escaped(&text, &keywords, &Marker::default())
            } else {
                highlight_with(&text, &keywords, &display::terminal_marker())
            };
            println!("{}", marked);
        }
        Commands::Optimize {
            title,
            description,
            json,
            llm,
        } => {
            let marker = if json {
                Marker::default()
            } else {
                display::terminal_marker()
            };
            let optimizer = Optimizer::new(provider(llm)?).with_marker(marker);
            let report = optimizer
                .optimize(&ProductInput::new(title, description))
                .await
                .context("optimization failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                display::print_report(&report);
            }
        }
        Commands::Enhance { prompt, llm } => {
            let prompt = text_or_stdin(prompt)?;
            let enhanced = Enhancer::new(provider(llm)?)
                .enhance(&prompt)
                .await
                .context("prompt enhancement failed")?;
            println!("{}", enhanced);
        }
        Commands::Serve { host, port, llm } => {
            let state = AppState::new(provider(llm)?);
            seomark::serve(server_config(host, port), state)
                .await
                .context("server error")?;
        }
    }
    Ok(())
}

fn provider(args: LlmArgs) -> Result<Arc<dyn CompletionProvider>> {
    let config = args
        .into_config()
        .context("set --api-key or SEOMARK_API_KEY")?;
    tracing::debug!(?config, "completion client configured");
    let client = ChatCompletionsClient::new(config)?;
    Ok(Arc::new(client))
}

/// Use the positional argument when given, otherwise read all of stdin.
fn text_or_stdin(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if atty::is(atty::Stream::Stdin) {
        tracing::info!("reading text from stdin, end with Ctrl-D");
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim_end_matches(['\n', '\r']).to_string())
}
