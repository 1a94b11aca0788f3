use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }

    /// Build the full output without printing it.
    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();

        if let Some(badge) = &result.badge {
            out.push_str(&format!("{} {}\n\n", badge.icon(), badge.label.bold()));
        }

        out.push_str(&result.content.create_view(self.mode).to_string());

        if !result.suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", "💡 Tips:".yellow().bold()));
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    out.push_str(&format!(": {}", cmd.cyan()));
                }
                out.push('\n');
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.render_to_string(&result)?);
        Ok(())
    }
}
