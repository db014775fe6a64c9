use axum::{
    Form,
    Router,
    extract::{
        Extension,
        Path,
    },
    response::{
        Html,
        IntoResponse,
        Redirect,
        Response,
    },
    routing::get,
};
use hearthcore::{
    ac::Agent,
    rid::Rid,
};

use crate::http::{
    AppContext,
    Result,
    form::{
        RoomForm,
        optional,
    },
    page,
    require_user,
};

pub fn router() -> Router {
    Router::new()
        .route("/", get(render_location_listing))
        .route("/{id}", get(render_location))
        .route("/{id}/rooms/add",
            get(render_room_add).post(submit_room_add))
}

async fn render_location_listing(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
) -> Result<Html<String>> {
    require_user(&agent)?;
    let locations = ctx.platform.list_locations(&agent).await?;
    Ok(Html(page::location_list(&locations)))
}

async fn render_location(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    require_user(&agent)?;
    let detail = ctx.platform
        .location_detail(&agent, &Rid::from(id))
        .await?;
    Ok(Html(page::location_detail(&detail)))
}

async fn render_room_add(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    require_user(&agent)?;
    let location = ctx.platform
        .get_location(&agent, &Rid::from(id))
        .await?;
    Ok(Html(page::room_add_form(
        &location,
        &RoomForm::default(),
        &Vec::new(),
    )))
}

async fn submit_room_add(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
    Path(id): Path<String>,
    Form(form): Form<RoomForm>,
) -> Result<Response> {
    require_user(&agent)?;
    let location_id = Rid::from(id);
    let location = ctx.platform
        .get_location(&agent, &location_id)
        .await?;
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(Html(
            page::room_add_form(&location, &form, &errors)
        ).into_response());
    }
    // validate() vouched for the coercion
    let size = form.size_value().unwrap_or(None);
    ctx.platform
        .create_room(
            &agent,
            &location_id,
            form.name.trim(),
            optional(&form.description),
            size,
        )
        .await?;
    Ok(Redirect::to(&format!("/locations/{location_id}")).into_response())
}
