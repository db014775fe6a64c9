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
    item::ItemFields,
    rid::Rid,
};

use crate::http::{
    AppContext,
    Result,
    form::{
        ItemForm,
        optional,
    },
    page,
    require_user,
};

pub fn router() -> Router {
    Router::new()
        .route("/{id}", get(render_room))
        .route("/{id}/items/add",
            get(render_item_add).post(submit_item_add))
}

async fn render_room(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    require_user(&agent)?;
    let detail = ctx.platform
        .room_detail(&agent, &Rid::from(id))
        .await?;
    Ok(Html(page::room_detail(&detail)))
}

async fn render_item_add(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    require_user(&agent)?;
    let room = ctx.platform.get_room(&agent, &Rid::from(id)).await?;
    Ok(Html(page::item_add_form(
        &room,
        &ItemForm::default(),
        &Vec::new(),
    )))
}

async fn submit_item_add(
    ctx: Extension<AppContext>,
    agent: Extension<Agent>,
    Path(id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Result<Response> {
    require_user(&agent)?;
    let room_id = Rid::from(id);
    let room = ctx.platform.get_room(&agent, &room_id).await?;
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(Html(
            page::item_add_form(&room, &form, &errors)
        ).into_response());
    }
    let fields = ItemFields {
        name: form.name.trim(),
        description: optional(&form.description),
        purchased_on: optional(&form.purchased_on),
        brand: optional(&form.brand),
        model: optional(&form.model),
        serial: optional(&form.serial),
        notes: optional(&form.notes),
    };
    ctx.platform
        .create_item(&agent, &room.location_id, Some(&room_id), fields)
        .await?;
    Ok(Redirect::to(&format!("/rooms/{room_id}")).into_response())
}
