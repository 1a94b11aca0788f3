use super::HandlerContext;
use crate::args::CountryArgs;
use crate::presentation::presenters;
use crate::presentation::view_models::{DashboardViewModel, DataframeViewModel, HomeViewModel};
use crate::presentation::{DashboardSource, TuiRenderer};
use anyhow::Result;
use bookdash_runtime::Session;
use is_terminal::IsTerminal;

/// Feeds the TUI from the loaded session.
struct SessionSource<'a> {
    session: &'a Session,
}

impl<'a> DashboardSource for SessionSource<'a> {
    fn countries(&self) -> Vec<String> {
        self.session.records().distinct_countries()
    }

    fn home(&self) -> HomeViewModel {
        presenters::build_home(super::home::image_label(self.session), self.session.records().len())
    }

    fn dashboard(&self, countries: &[String]) -> DashboardViewModel {
        presenters::build_dashboard(
            &self.session.report(),
            &self.session.config().dashboard,
            countries,
        )
    }

    fn dataframe(&self, countries: &[String]) -> DataframeViewModel {
        presenters::build_dataframe(self.session.records(), countries, None)
    }
}

pub fn handle(session: &Session, ctx: &HandlerContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        tracing::warn!("stdout is not a terminal, printing the dashboard instead");
        return super::dashboard::handle(session, &CountryArgs::default(), None, ctx);
    }

    let source = SessionSource { session };
    TuiRenderer::new(&source).run()
}
