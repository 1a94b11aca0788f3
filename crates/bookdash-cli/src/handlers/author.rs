use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use bookdash_runtime::Session;

pub fn handle(session: &Session, name: &str, top: Option<usize>, ctx: &HandlerContext) -> Result<()> {
    let n = top.unwrap_or(session.config().dashboard.top_rated_per_author);
    let result = presenters::present_author(&session.report(), name, n);
    ctx.render(result)
}
