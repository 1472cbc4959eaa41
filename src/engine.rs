// src/engine.rs
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use textcodec::charset::{self, CharEncoding};
use textcodec::config::{Config, CONFIG_FILE};
use textcodec::sanitize::{self, Platform};
use textcodec::utils;

#[derive(Debug, Parser)]
#[command(name = "textcodec", version, about = "Text encoding helpers for download tooling")]
pub struct Cli {
    /// Config file to read instead of ./textcodec.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON objects
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip characters that are invalid in file names and paths
    Sanitize {
        text: String,
        #[arg(long)]
        replacement: Option<String>,
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Print the `.ext` that precedes the query string of a URL
    Extension { url: String },
    /// Expand \uXXXX escapes
    Unescape { text: String },
    PercentEncode {
        text: String,
        #[arg(long)]
        encoding: Option<CharEncoding>,
    },
    /// Decode GB18030 double-byte percent triplets
    PercentDecode { text: String },
    Base64Encode { text: String },
    Base64Decode { text: String },
    /// MD5 fingerprint as lowercase hex
    Hash { text: String },
    Simplified { text: String },
    Traditional { text: String },
    Transcode {
        text: String,
        #[arg(long)]
        from: CharEncoding,
        #[arg(long)]
        to: CharEncoding,
    },
    /// List the registered encodings
    Encodings,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Sanitize { .. } => "sanitize",
            Command::Extension { .. } => "extension",
            Command::Unescape { .. } => "unescape",
            Command::PercentEncode { .. } => "percent-encode",
            Command::PercentDecode { .. } => "percent-decode",
            Command::Base64Encode { .. } => "base64-encode",
            Command::Base64Decode { .. } => "base64-decode",
            Command::Hash { .. } => "hash",
            Command::Simplified { .. } => "simplified",
            Command::Traditional { .. } => "traditional",
            Command::Transcode { .. } => "transcode",
            Command::Encodings => "encodings",
        }
    }

    fn input(&self) -> Option<&str> {
        match self {
            Command::Sanitize { text, .. }
            | Command::Unescape { text }
            | Command::PercentEncode { text, .. }
            | Command::PercentDecode { text }
            | Command::Base64Encode { text }
            | Command::Base64Decode { text }
            | Command::Hash { text }
            | Command::Simplified { text }
            | Command::Traditional { text }
            | Command::Transcode { text, .. } => Some(text.as_str()),
            Command::Extension { url } => Some(url.as_str()),
            Command::Encodings => None,
        }
    }
}

pub fn use_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .with_context(|| format!("loading {}", cli.config.as_deref().unwrap_or(Path::new(CONFIG_FILE)).display()))?;

    let output = run_command(&cli.command, &config)?;

    if cli.json || config.json {
        let value = serde_json::json!({
            "command": cli.command.name(),
            "input": cli.command.input(),
            "output": output,
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Runs one command against `config` and returns what should be printed.
pub fn run_command(command: &Command, config: &Config) -> anyhow::Result<String> {
    let output = match command {
        Command::Sanitize { text, replacement, platform } => {
            let platform = match platform {
                Some(p) => *p,
                None => config.platform()?,
            };
            let replacement = replacement.as_deref().unwrap_or(&config.replacement);
            sanitize::sanitize_for(platform, text, replacement)
        }
        Command::Extension { url } => sanitize::extract_extension(url),
        Command::Unescape { text } => utils::expand_unicode_escapes(text),
        Command::PercentEncode { text, encoding } => {
            let encoding = match encoding {
                Some(e) => *e,
                None => config.encoding()?,
            };
            utils::percent_encode(text, encoding)
        }
        Command::PercentDecode { text } => utils::percent_decode(text)?,
        Command::Base64Encode { text } => utils::base64_url_encode(text),
        Command::Base64Decode { text } => utils::base64_url_decode(text)?,
        Command::Hash { text } => utils::hash_hex(text),
        Command::Simplified { text } => charset::to_simplified_chinese(text),
        Command::Traditional { text } => charset::to_traditional_chinese(text),
        Command::Transcode { text, from, to } => charset::transcode(text, *from, *to),
        Command::Encodings => CharEncoding::ALL
            .iter()
            .map(|e| format!("{} ({})", e.name(), e.codec().name()))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(output)
}
