//! Documentation generation command.

use std::path::Path;

use clap::{Args, ValueEnum};

use hookflow_core::config::AppConfig;
use hookflow_core::error::{AppError, ErrorKind};
use hookflow_plugin::docs::{self, GroupBy};

use crate::output;

/// Arguments for the document command
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Document format
    #[arg(long = "format", value_enum, default_value = "markdown")]
    pub doc_format: DocFormat,

    /// Group hooks by plugin or none (defaults to `docs.group_by`)
    #[arg(short, long)]
    pub group_by: Option<GroupBy>,

    /// Output file path (defaults to `docs.output`, then stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    Markdown,
    Html,
}

/// Execute the document command
pub async fn execute(args: &DocumentArgs, config: &AppConfig) -> Result<(), AppError> {
    let registry = super::load_registry(config)?;
    let hooks = registry.all();

    if hooks.is_empty() {
        println!("No hooks found to document.");
        return Ok(());
    }

    let group_by = match args.group_by {
        Some(g) => g,
        None => config
            .docs
            .group_by
            .parse::<GroupBy>()
            .map_err(AppError::configuration)?,
    };

    let document = match args.doc_format {
        DocFormat::Markdown => docs::render_markdown(&hooks, group_by),
        DocFormat::Html => docs::render_html(&hooks, group_by),
    };

    match args.output.as_ref().or(config.docs.output.as_ref()) {
        Some(path) => {
            write_output(Path::new(path), &document).await?;
            output::print_success(&format!("Documentation saved to {}", path));
        }
        None => println!("{}", document),
    }

    Ok(())
}

/// Write a document, creating missing parent directories
async fn write_output(path: &Path, contents: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Io, "Failed to create output directory", e)
            })?;
    }

    tokio::fs::write(path, contents).await?;
    Ok(())
}
