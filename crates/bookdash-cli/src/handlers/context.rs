use crate::args::ViewModeArgs;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, OutputFormat, Renderer, ViewMode};
use crate::types;
use anyhow::Result;
use serde::Serialize;

/// Output settings shared by every handler
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
}

impl HandlerContext {
    pub fn new(format: types::OutputFormat, view_mode: &ViewModeArgs) -> Self {
        Self {
            format: format.into(),
            view_mode: view_mode.resolve(),
        }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format, self.view_mode);
        renderer.render(view_model)
    }
}
