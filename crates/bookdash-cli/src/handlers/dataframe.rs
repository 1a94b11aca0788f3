use super::HandlerContext;
use crate::args::CountryArgs;
use crate::presentation::presenters;
use anyhow::Result;
use bookdash_runtime::Session;

pub fn handle(
    session: &Session,
    countries: &CountryArgs,
    limit: usize,
    ctx: &HandlerContext,
) -> Result<()> {
    let records = session.records();
    let selection = countries.resolve(&records.distinct_countries());
    let limit = (limit > 0).then_some(limit);

    let result = presenters::present_dataframe(records, &selection, limit);
    ctx.render(result)
}
