use super::{emit, render_page};
use crate::config::DomkitConfig;
use anyhow::{bail, Context, Result};
use clap::Parser;
use domkit_core::ElementDescription;
use std::path::PathBuf;

/// Render a JSON element description
#[derive(Clone, Debug, Parser)]
pub(crate) struct Render {
    /// Input file
    #[clap(short, long)]
    pub(crate) file: Option<PathBuf>,

    /// Raw JSON passed on the command line
    #[clap(short, long)]
    pub(crate) raw: Option<String>,

    /// Output file, stdout if not present
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

impl Render {
    pub(crate) fn render(self, config: &DomkitConfig) -> Result<()> {
        let contents = determine_input(self.file, self.raw)?;
        let description = parse_description(&contents)?;
        let html = render_page(description, config)?;
        emit(&html, self.output.as_deref())
    }
}

fn parse_description(contents: &str) -> Result<ElementDescription> {
    serde_json::from_str(contents).context("input is not a valid element description")
}

fn determine_input(file: Option<PathBuf>, raw: Option<String>) -> Result<String> {
    use std::io::{IsTerminal as _, Read as _};

    if file.is_some() && raw.is_some() {
        bail!("Only one of --file or --raw should be specified.");
    }

    if let Some(raw) = raw {
        return Ok(raw);
    }

    if let Some(file) = file {
        return std::fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No input: pass --file, --raw, or pipe a description on stdin.");
    }

    let mut contents = String::new();
    stdin.read_to_string(&mut contents)?;
    Ok(contents)
}
