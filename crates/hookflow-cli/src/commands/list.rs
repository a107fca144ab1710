//! Hook listing command.

use std::sync::Arc;

use clap::{Args, ValueEnum};
use tabled::Tabled;

use hookflow_core::config::AppConfig;
use hookflow_core::error::AppError;
use hookflow_plugin::{Hook, HookKind, HookSummary};

use crate::output::{self, OutputFormat};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show hooks owned by this plugin
    #[arg(short, long)]
    pub plugin: Option<String>,

    /// Only show actions or filters
    #[arg(short, long, value_enum)]
    pub kind: Option<KindFilter>,
}

/// Hook kind selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Action,
    Filter,
}

impl KindFilter {
    fn matches(self, kind: HookKind) -> bool {
        match self {
            Self::Action => kind == HookKind::Action,
            Self::Filter => kind == HookKind::Filter,
        }
    }
}

/// Table row for a hook
#[derive(Debug, Tabled)]
struct HookRow {
    #[tabled(rename = "Identifier")]
    identifier: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Plugin")]
    plugin: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Priority")]
    priority: i32,
    #[tabled(rename = "Parameters")]
    parameters: String,
    #[tabled(rename = "Trigger Point")]
    trigger_point: String,
}

impl From<&HookSummary> for HookRow {
    fn from(s: &HookSummary) -> Self {
        Self {
            identifier: s.identifier.clone(),
            description: s.description.clone(),
            plugin: s.plugin.clone(),
            kind: s.kind.to_string(),
            priority: s.priority,
            parameters: s.parameter_list(),
            trigger_point: if s.trigger_point.is_empty() {
                "<none>".to_string()
            } else {
                s.trigger_point.clone()
            },
        }
    }
}

/// Execute the list command
pub async fn execute(args: &ListArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let registry = super::load_registry(config)?;
    let summaries = select(&registry.all(), args);

    match format {
        OutputFormat::Json => output::print_json(&summaries),
        OutputFormat::Table => {
            let rows: Vec<HookRow> = summaries.iter().map(HookRow::from).collect();
            output::print_table(&rows, "No hooks found.");
        }
    }

    Ok(())
}

fn select(hooks: &[Arc<dyn Hook>], args: &ListArgs) -> Vec<HookSummary> {
    hooks
        .iter()
        .filter(|h| args.plugin.as_deref().is_none_or(|p| h.plugin() == p))
        .filter(|h| args.kind.is_none_or(|k| k.matches(h.descriptor().kind)))
        .map(|h| HookSummary::of(h.as_ref()))
        .collect()
}
