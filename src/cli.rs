use crate::engine::ResolutionResult;
use crate::expression::{ExpressionKind, Payload};
use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Op {
    Name,
    Link,
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "link-resolver")]
#[command(
    about = "Resolve link expressions (product:42, url:~/about, ...) into display names and urls",
    long_about = None
)]
pub struct Args {
    /// Link expressions to resolve
    #[arg(value_name = "EXPRESSION", required = true)]
    pub expressions: Vec<String>,

    /// Catalog file (YAML or JSON) providing entities, translations, slugs and routes
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Language id (0 uses the catalog's working language)
    #[arg(short, long, default_value_t = 0)]
    pub language: u32,

    /// What to resolve
    #[arg(long, default_value = "both")]
    pub op: Op,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_catalog_path(&self.catalog)
    }
}

pub fn validate_catalog_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Catalog file does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Catalog path is not a file: {}", path.display());
    }
    std::fs::metadata(path)
        .with_context(|| format!("Cannot read catalog: {}", path.display()))?;
    Ok(())
}

impl Op {
    pub fn includes_name(&self) -> bool {
        matches!(self, Op::Name | Op::Both)
    }

    pub fn includes_link(&self) -> bool {
        matches!(self, Op::Link | Op::Both)
    }
}

/// One output line: the requested operations for a single expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub expression: String,
    pub kind: ExpressionKind,
    pub value: Payload,
    pub name: Option<String>,
    pub link: Option<String>,
}

impl Record {
    /// Kind and value come from whichever result is present; `None` when
    /// neither operation ran.
    pub fn from_results(
        expression: &str,
        name: Option<ResolutionResult>,
        link: Option<ResolutionResult>,
    ) -> Option<Self> {
        let (kind, value) = name
            .as_ref()
            .or(link.as_ref())
            .map(|result| (result.kind, result.payload.clone()))?;
        Some(Self {
            expression: expression.to_string(),
            kind,
            value,
            name: name.map(|result| result.resolved),
            link: link.map(|result| result.resolved),
        })
    }

    pub fn to_text(&self) -> String {
        let mut line = format!("{} [{}]", self.expression, self.kind);
        if let Some(name) = &self.name {
            line.push_str(&format!(" name={name:?}"));
        }
        if let Some(link) = &self.link {
            line.push_str(&format!(" link={link:?}"));
        }
        line
    }
}
