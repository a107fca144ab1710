//! Markdown and HTML documentation for registered hooks.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::hooks::hook::Hook;

const TITLE: &str = "Hook Documentation";

const HTML_STYLE: &str = "\
body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
h1 { color: #333; }
h2 { color: #666; margin-top: 30px; }
code { background: #f5f5f5; padding: 2px 5px; border-radius: 3px; }
hr { margin: 30px 0; border: none; border-top: 1px solid #eee; }
";

/// How hooks are grouped in generated documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    None,
    Plugin,
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "plugin" => Ok(Self::Plugin),
            other => Err(format!("Unknown grouping '{other}', expected none or plugin")),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Plugin => f.write_str("plugin"),
        }
    }
}

/// Renders hooks as a Markdown document.
pub fn render_markdown(hooks: &[Arc<dyn Hook>], group_by: GroupBy) -> String {
    let mut out = format!("# {TITLE}\n\n");

    match group_by {
        GroupBy::None => {
            for hook in hooks {
                markdown_section(&mut out, hook.as_ref());
            }
        }
        GroupBy::Plugin => {
            for (plugin, group) in group_by_plugin(hooks) {
                out.push_str(&format!("## {plugin}\n\n"));
                for hook in group {
                    markdown_section(&mut out, hook.as_ref());
                }
            }
        }
    }

    out
}

/// Renders hooks as a standalone HTML page. All hook text is escaped.
pub fn render_html(hooks: &[Arc<dyn Hook>], group_by: GroupBy) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("<title>{TITLE}</title>\n"));
    out.push_str(&format!("<style>\n{HTML_STYLE}</style>\n</head>\n<body>\n"));
    out.push_str(&format!("<h1>{TITLE}</h1>\n"));

    match group_by {
        GroupBy::None => {
            for hook in hooks {
                html_section(&mut out, hook.as_ref());
            }
        }
        GroupBy::Plugin => {
            for (plugin, group) in group_by_plugin(hooks) {
                out.push_str(&format!("<h2>{}</h2>\n", escape_html(plugin)));
                for hook in group {
                    html_section(&mut out, hook.as_ref());
                }
            }
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn group_by_plugin(hooks: &[Arc<dyn Hook>]) -> IndexMap<&str, Vec<&Arc<dyn Hook>>> {
    let mut groups: IndexMap<&str, Vec<&Arc<dyn Hook>>> = IndexMap::new();
    for hook in hooks {
        groups.entry(hook.plugin()).or_default().push(hook);
    }
    groups
}

fn markdown_section(out: &mut String, hook: &dyn Hook) {
    let d = hook.descriptor();

    out.push_str(&format!("## {}\n\n", d.identifier));
    out.push_str(&format!("**Plugin:** {}\n\n", d.plugin));
    out.push_str(&format!("**Description:** {}\n\n", d.description));
    out.push_str(&format!("**Type:** {}\n\n", d.kind));
    out.push_str(&format!("**Priority:** {}\n\n", d.priority));
    out.push_str(&format!("**Trigger Point:** {}\n\n", d.trigger_point));

    if !d.parameters.is_empty() {
        out.push_str("### Parameters\n\n");
        for (name, ty) in &d.parameters {
            out.push_str(&format!("- `{name}`: {ty}\n"));
        }
        out.push('\n');
    }

    out.push_str("### Type Reference\n\n");
    out.push_str(&format!("```rust\n{}\n```\n\n", hook.type_name()));
    out.push_str("---\n\n");
}

fn html_section(out: &mut String, hook: &dyn Hook) {
    let d = hook.descriptor();

    out.push_str(&format!("<h2>{}</h2>\n", escape_html(&d.identifier)));
    out.push_str(&format!(
        "<p><strong>Plugin:</strong> {}</p>\n",
        escape_html(&d.plugin)
    ));
    out.push_str(&format!(
        "<p><strong>Description:</strong> {}</p>\n",
        escape_html(&d.description)
    ));
    out.push_str(&format!("<p><strong>Type:</strong> {}</p>\n", d.kind));
    out.push_str(&format!("<p><strong>Priority:</strong> {}</p>\n", d.priority));
    out.push_str(&format!(
        "<p><strong>Trigger Point:</strong> {}</p>\n",
        escape_html(&d.trigger_point)
    ));

    if !d.parameters.is_empty() {
        out.push_str("<h3>Parameters</h3>\n<ul>\n");
        for (name, ty) in &d.parameters {
            out.push_str(&format!(
                "<li><code>{}</code>: {}</li>\n",
                escape_html(name),
                escape_html(ty.as_str())
            ));
        }
        out.push_str("</ul>\n");
    }

    out.push_str("<h3>Type Reference</h3>\n");
    out.push_str(&format!(
        "<pre><code>{}</code></pre>\n",
        escape_html(hook.type_name())
    ));
    out.push_str("<hr>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
