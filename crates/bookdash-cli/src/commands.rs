use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use bookdash_runtime::{Config, Session, SessionOptions, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = HandlerContext::new(cli.format, &cli.view_mode);
    let options = SessionOptions {
        config_path: cli.config,
        data_path: cli.data,
        image_path: cli.image,
        skip_image_check: cli.no_image,
    };

    let Some(command) = cli.command else {
        return show_guidance(&options, &ctx);
    };

    match command {
        Commands::Home => {
            let session = open_session(options)?;
            handlers::home::handle(&session, &ctx)
        }

        Commands::Dashboard { countries, top } => {
            let session = open_session(options)?;
            handlers::dashboard::handle(&session, &countries, top, &ctx)
        }

        Commands::Dataframe { countries, limit } => {
            let session = open_session(options)?;
            handlers::dataframe::handle(&session, &countries, limit, &ctx)
        }

        Commands::Author { name, top } => {
            let session = open_session(options)?;
            handlers::author::handle(&session, &name, top, &ctx)
        }

        Commands::Tui => {
            let session = open_session(options)?;
            handlers::tui::handle(&session, &ctx)
        }

        Commands::Config { command } => {
            let config_path = resolve_config_path(options.config_path.as_deref())?;

            match command {
                ConfigCommand::Show => {
                    let config = Session::resolve_config(&options)?;
                    handlers::config::show(&config_path, &config, &ctx)
                }
                ConfigCommand::Init { force } => {
                    let mut config = Config::default();
                    options.apply_overrides(&mut config);
                    handlers::config::init(&config_path, &config, force, &ctx)
                }
            }
        }
    }
}

fn open_session(options: SessionOptions) -> Result<Session> {
    Session::open(options).map_err(|err| anyhow!("Startup failed: {}", err))
}

fn show_guidance(options: &SessionOptions, ctx: &HandlerContext) -> Result<()> {
    let config_path = resolve_config_path(options.config_path.as_deref())?;
    let config = Session::resolve_config(options)?;
    ctx.render(presenters::present_guidance(&config_path, &config.data_path))
}
