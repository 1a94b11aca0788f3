use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use bookdash_runtime::Session;

pub fn handle(session: &Session, ctx: &HandlerContext) -> Result<()> {
    let image = image_label(session);
    let result = presenters::present_home(image, session.records().len());
    ctx.render(result)
}

/// The image is only advertised when it was checked at startup.
pub(crate) fn image_label(session: &Session) -> Option<String> {
    let path = session.image_path();
    path.is_file().then(|| path.display().to_string())
}
