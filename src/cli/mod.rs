// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seomark command-line interface.
//!
//! `score` and `highlight` run locally and never touch the network. `optimize`
//! and `enhance` make one completion call each, and `serve` starts the HTTP
//! front end. Every model setting can come from a flag or from the environment
//! (a `.env` file is loaded first), so the key never has to live in code.

pub mod display;

use clap::{Args, Parser, Subcommand};
use seomark::llm::{DEFAULT_API_URL, DEFAULT_MODEL};
use seomark::{LlmConfig, LlmError, ServerConfig};
use std::net::IpAddr;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "seomark",
    about = "SEO keyword scoring, highlighting and LLM-backed copy optimization",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score text against a keyword list
    Score {
        /// Comma separated keywords
        #[arg(short, long)]
        keywords: String,

        /// Text to score (read from stdin when omitted)
        text: Option<String>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Highlight keyword occurrences in text
    Highlight {
        /// Comma separated keywords, applied in order
        #[arg(short, long)]
        keywords: String,

        /// Text to highlight (read from stdin when omitted)
        text: Option<String>,

        /// Emit HTML-escaped text with <mark> tags instead of terminal colors
        #[arg(long)]
        html: bool,
    },

    /// Ask the model for SEO-optimized product copy and score it
    Optimize {
        /// Current product title
        #[arg(short, long)]
        title: String,

        /// Current product description
        #[arg(short, long)]
        description: String,

        /// Print the report as JSON (highlights as <mark> tags)
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Ask the model to rewrite a prompt so it is clearer and more detailed
    Enhance {
        /// Prompt to enhance (read from stdin when omitted)
        prompt: Option<String>,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Serve the HTTP endpoints and the web page
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to bind
        #[arg(short, long, env = "PORT", default_value = "5000")]
        port: u16,

        #[command(flatten)]
        llm: LlmArgs,
    },
}

/// Completion endpoint settings shared by the commands that call the model.
#[derive(Args)]
pub struct LlmArgs {
    /// Bearer credential for the completion endpoint
    #[arg(long, env = "SEOMARK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat-completions URL
    #[arg(long, env = "SEOMARK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Model identifier sent with each request
    #[arg(long, env = "SEOMARK_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Request timeout in seconds
    #[arg(long, env = "SEOMARK_TIMEOUT", default_value = "60")]
    pub timeout_secs: u64,
}

impl LlmArgs {
    pub fn into_config(self) -> Result<LlmConfig, LlmError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        Ok(LlmConfig {
            api_url: self.api_url,
            api_key,
            model: self.model,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

pub fn server_config(host: IpAddr, port: u16) -> ServerConfig {
    ServerConfig { host, port }
}
