use super::HandlerContext;
use crate::args::CountryArgs;
use crate::presentation::presenters;
use anyhow::Result;
use bookdash_runtime::{DashboardConfig, Session};

pub fn handle(
    session: &Session,
    countries: &CountryArgs,
    top: Option<usize>,
    ctx: &HandlerContext,
) -> Result<()> {
    let settings = settings_with_top(&session.config().dashboard, top);
    let selection = countries.resolve(&session.records().distinct_countries());
    tracing::debug!(countries = ?selection, top_titles = settings.top_titles, "building dashboard");

    let result = presenters::present_dashboard(&session.report(), &settings, &selection);
    ctx.render(result)
}

pub(crate) fn settings_with_top(base: &DashboardConfig, top: Option<usize>) -> DashboardConfig {
    let mut settings = base.clone();
    if let Some(n) = top {
        settings.top_titles = n;
        settings.top_titles_per_country = n;
    }
    settings
}
