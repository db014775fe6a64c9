use axum::{
    Router,
    extract::{
        Extension,
        Path,
    },
    response::Html,
    routing::get,
};
use hearthcore::{
    ac::Agent,
    rid::Rid,
};

use crate::http::{
    AppContext,
    Result,
    page,
    require_user,
};

pub fn router() -> Router {
    Router::new()
        .route("/{id}", get(render_item))
}

async fn render_item(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    require_user(&agent)?;
    let detail = ctx.platform.item_detail(&Rid::from(id)).await?;
    Ok(Html(page::item_detail(&detail)))
}
