use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use bookdash_runtime::Config;
use std::path::Path;

pub fn show(config_path: &Path, config: &Config, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_config(config_path, config))
}

pub fn init(config_path: &Path, config: &Config, force: bool, ctx: &HandlerContext) -> Result<()> {
    let exists = config_path.exists();
    if exists && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    config.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote config file");

    ctx.render(presenters::present_config_init(config_path, exists))
}
