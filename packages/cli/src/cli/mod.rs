pub(crate) mod demo;
pub(crate) mod render;
pub(crate) mod verbosity;

use crate::config::DomkitConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use domkit_core::{render as render_description, ElementDescription};
use domkit_native_dom::Document;
use domkit_ssr::Renderer;
use std::path::{Path, PathBuf};

/// Render element descriptions to HTML.
#[derive(Parser)]
#[clap(name = "domkit", version)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub(crate) action: Commands,

    #[command(flatten)]
    pub(crate) verbosity: verbosity::Verbosity,

    /// Path to a Domkit.toml [default: ./Domkit.toml if present]
    #[clap(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Indent the HTML output
    #[clap(long, global = true)]
    pub(crate) pretty: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a JSON element description into a fresh page.
    Render(render::Render),

    /// Run one of the bundled exercises and print the page it renders.
    #[clap(subcommand)]
    Demo(demo::Demo),
}

impl Cli {
    pub(crate) fn run(self) -> Result<()> {
        let mut config = DomkitConfig::load(self.config.as_deref())?;
        if self.pretty {
            config.render.pretty = true;
        }

        match self.action {
            Commands::Render(opts) => opts.render(&config),
            Commands::Demo(demo) => demo.run(&config),
        }
    }
}

/// Render `description` into the mount point of a fresh page and return the mount point's HTML.
pub(crate) fn render_page(description: ElementDescription, config: &DomkitConfig) -> Result<String> {
    let mut doc = Document::with_mount(&config.render.mount_id);
    let mount = doc.mount();

    render_description(description, mount, &mut doc)
        .with_context(|| format!("failed to render into #{}", config.render.mount_id))?;
    doc.print_tree();

    let renderer = Renderer {
        pretty: config.render.pretty,
    };
    Ok(renderer.render_inner(&doc, mount))
}

/// Write `html` to `output`, or to stdout if there is none.
pub(crate) fn emit(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None if html.ends_with('\n') => print!("{html}"),
        None => println!("{html}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_uses_the_configured_mount() {
        let mut config = DomkitConfig::default();
        config.render.mount_id = "app".to_string();

        let html = render_page(ElementDescription::new("p").text("hi"), &config).unwrap();
        assert_eq!(html, "<p>hi</p>");
    }

    #[test]
    fn render_errors_carry_context() {
        let err = render_page(ElementDescription::new("<p>"), &DomkitConfig::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to render into #root");
        assert!(err.root_cause().to_string().contains("`<p>`"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
