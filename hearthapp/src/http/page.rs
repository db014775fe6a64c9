//! Server-rendered pages.  All interpolated values pass through the
//! escaping helpers; raw strings below are trusted markup only.

use hearthcore::{
    ac::Agent,
    item::Items,
    location::{
        Location,
        Locations,
    },
    room::Room,
    task::Tasks,
};
use hearthctrl::detail::{
    Dashboard,
    ItemDetail,
    LocationDetail,
    RoomDetail,
};
use html_escape::{
    encode_double_quoted_attribute as attr,
    encode_text as text,
};

use super::form::{
    FieldErrors,
    ItemForm,
    RoomForm,
};

fn layout(title: &str, body: &str) -> String {
    format!("\
<!DOCTYPE html>
<html>
<head><meta charset=\"utf-8\"><title>{title} - Hearth</title></head>
<body>
<header>
<nav><a href=\"/\">Dashboard</a> | <a href=\"/locations/\">Locations</a></nav>
<h1>{title}</h1>
</header>
<main>
{body}</main>
</body>
</html>
", title = text(title), body = body)
}

pub(crate) fn error_page(title: &str) -> String {
    layout(title, "<p>Sorry, that didn't work out.</p>\n")
}

pub(crate) fn login() -> String {
    layout("Sign in", "\
<p>Sign-in is handled in front of this application; once your identity
is forwarded here you will see your inventory.</p>
")
}

fn location_list_fragment(locations: &Locations) -> String {
    if locations.is_empty() {
        return "<p>No locations yet.</p>\n".to_string();
    }
    let mut out = String::from("<ul class=\"locations\">\n");
    for location in locations.iter() {
        out.push_str(&format!(
            "<li><a href=\"/locations/{id}\">{name}</a> {address}</li>\n",
            id = attr(location.id.as_str()),
            name = text(&location.name),
            address = text(&location.address),
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn item_list_fragment(items: &Items) -> String {
    if items.is_empty() {
        return "<p>No items yet.</p>\n".to_string();
    }
    let mut out = String::from("<ul class=\"items\">\n");
    for item in items.iter() {
        out.push_str(&format!(
            "<li><a href=\"/items/{id}\">{name}</a></li>\n",
            id = attr(item.id.as_str()),
            name = text(&item.name),
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn task_list_fragment(tasks: &Tasks) -> String {
    if tasks.is_empty() {
        return "<p>No tasks.</p>\n".to_string();
    }
    let mut out = String::from("<ul class=\"tasks\">\n");
    for task in tasks.iter() {
        out.push_str(&format!(
            "<li>{name} <em>({kind})</em></li>\n",
            name = text(&task.name),
            kind = text(task.target.kind.as_str()),
        ));
    }
    out.push_str("</ul>\n");
    out
}

pub(crate) fn dashboard(agent: &Agent, dashboard: &Dashboard) -> String {
    let mut body = format!(
        "<p>Signed in as {agent}.</p>\n",
        agent = text(&agent.to_string()),
    );
    body.push_str("<h2>Locations</h2>\n");
    body.push_str(&location_list_fragment(&dashboard.locations));
    body.push_str("<h2>Rooms</h2>\n");
    if dashboard.rooms.is_empty() {
        body.push_str("<p>No rooms yet.</p>\n");
    } else {
        body.push_str("<ul class=\"rooms\">\n");
        for room in dashboard.rooms.iter() {
            body.push_str(&format!(
                "<li><a href=\"/rooms/{id}\">{name}</a></li>\n",
                id = attr(room.id.as_str()),
                name = text(&room.name),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<h2>Recent items</h2>\n");
    body.push_str(&item_list_fragment(&dashboard.items));
    body.push_str("<h2>Tasks</h2>\n");
    body.push_str(&task_list_fragment(&dashboard.tasks));
    layout("Dashboard", &body)
}

pub(crate) fn location_list(locations: &Locations) -> String {
    layout("Locations", &location_list_fragment(locations))
}

pub(crate) fn location_detail(detail: &LocationDetail) -> String {
    let location = &detail.location;
    let mut body = format!(
        "<p>{address}</p>\n",
        address = text(&location.address),
    );
    body.push_str("<h2>Rooms</h2>\n");
    if detail.rooms.is_empty() {
        body.push_str("<p>No rooms yet.</p>\n");
    } else {
        body.push_str("<ul class=\"rooms\">\n");
        for room in detail.rooms.iter() {
            body.push_str(&format!(
                "<li><a href=\"/rooms/{id}\">{name}</a></li>\n",
                id = attr(room.id.as_str()),
                name = text(&room.name),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"/locations/{id}/rooms/add\">Add a room</a></p>\n",
        id = attr(location.id.as_str()),
    ));
    body.push_str("<h2>Coatings</h2>\n");
    if detail.coatings.is_empty() {
        body.push_str("<p>No coatings recorded.</p>\n");
    } else {
        body.push_str("<ul class=\"coatings\">\n");
        for coating in detail.coatings.iter() {
            body.push_str(&format!(
                "<li>{kind}{product}</li>\n",
                kind = text(&coating.kind),
                product = coating.product.as_deref()
                    .map(|p| format!(": {}", text(p)))
                    .unwrap_or_default(),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<h2>Tasks</h2>\n");
    body.push_str(&task_list_fragment(&detail.tasks));
    layout(&location.name, &body)
}

fn field_messages(errors: &FieldErrors, field: &str) -> String {
    errors.iter()
        .filter(|(name, _)| *name == field)
        .map(|(_, message)| format!(
            "<p class=\"error\">{}</p>\n", text(message)))
        .collect()
}

pub(crate) fn room_add_form(
    location: &Location,
    form: &RoomForm,
    errors: &FieldErrors,
) -> String {
    let body = format!("\
<form method=\"post\" action=\"/locations/{id}/rooms/add\">
{name_errors}<label>Name <input name=\"name\" value=\"{name}\"></label>
{description_errors}<label>Description <textarea name=\"description\">{description}</textarea></label>
{size_errors}<label>Size (m²) <input name=\"size\" value=\"{size}\"></label>
<button type=\"submit\">Add room</button>
</form>
",
        id = attr(location.id.as_str()),
        name = attr(&form.name),
        name_errors = field_messages(errors, "name"),
        description = text(&form.description),
        description_errors = field_messages(errors, "description"),
        size = attr(&form.size),
        size_errors = field_messages(errors, "size"),
    );
    layout(&format!("Add a room to {}", location.name), &body)
}

pub(crate) fn room_detail(detail: &RoomDetail) -> String {
    let room = &detail.room;
    let mut body = String::new();
    if let Some(description) = &room.description {
        body.push_str(&format!("<p>{}</p>\n", text(description)));
    }
    if let Some(size) = room.size {
        body.push_str(&format!("<p>{size} m²</p>\n"));
    }
    body.push_str("<h2>Items</h2>\n");
    body.push_str(&item_list_fragment(&detail.items));
    body.push_str(&format!(
        "<p><a href=\"/rooms/{id}/items/add\">Add an item</a></p>\n",
        id = attr(room.id.as_str()),
    ));
    body.push_str("<h2>Photos</h2>\n");
    if detail.photos.is_empty() {
        body.push_str("<p>No photos.</p>\n");
    } else {
        body.push_str("<ul class=\"photos\">\n");
        for photo in detail.photos.iter() {
            body.push_str(&format!(
                "<li><img src=\"{image}\" alt=\"{caption}\"></li>\n",
                image = attr(&photo.image),
                caption = attr(photo.caption.as_deref().unwrap_or("")),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<h2>Coatings</h2>\n");
    if detail.coatings.is_empty() {
        body.push_str("<p>No coatings recorded.</p>\n");
    } else {
        body.push_str("<ul class=\"coatings\">\n");
        for coating in detail.coatings.iter() {
            body.push_str(&format!(
                "<li>{}</li>\n", text(&coating.kind)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<h2>Tasks</h2>\n");
    body.push_str(&task_list_fragment(&detail.tasks));
    layout(&room.name, &body)
}

pub(crate) fn item_add_form(
    room: &Room,
    form: &ItemForm,
    errors: &FieldErrors,
) -> String {
    let body = format!("\
<form method=\"post\" action=\"/rooms/{id}/items/add\">
{name_errors}<label>Name <input name=\"name\" value=\"{name}\"></label>
{description_errors}<label>Description <textarea name=\"description\">{description}</textarea></label>
<label>Purchased on <input name=\"purchased_on\" value=\"{purchased_on}\"></label>
<label>Brand <input name=\"brand\" value=\"{brand}\"></label>
<label>Model <input name=\"model\" value=\"{model}\"></label>
<label>Serial <input name=\"serial\" value=\"{serial}\"></label>
{notes_errors}<label>Notes <textarea name=\"notes\">{notes}</textarea></label>
<button type=\"submit\">Add item</button>
</form>
",
        id = attr(room.id.as_str()),
        name = attr(&form.name),
        name_errors = field_messages(errors, "name"),
        description = text(&form.description),
        description_errors = field_messages(errors, "description"),
        purchased_on = attr(&form.purchased_on),
        brand = attr(&form.brand),
        model = attr(&form.model),
        serial = attr(&form.serial),
        notes = text(&form.notes),
        notes_errors = field_messages(errors, "notes"),
    );
    layout(&format!("Add an item to {}", room.name), &body)
}

pub(crate) fn item_detail(detail: &ItemDetail) -> String {
    let item = &detail.item;
    let mut body = String::new();
    if let Some(description) = &item.description {
        body.push_str(&format!("<p>{}</p>\n", text(description)));
    }
    body.push_str("<dl>\n");
    for (label, value) in [
        ("Brand", &item.brand),
        ("Model", &item.model),
        ("Serial", &item.serial),
        ("Purchased on", &item.purchased_on),
        ("Notes", &item.notes),
    ] {
        if let Some(value) = value {
            body.push_str(&format!(
                "<dt>{label}</dt><dd>{value}</dd>\n",
                value = text(value),
            ));
        }
    }
    body.push_str("</dl>\n");
    body.push_str("<h2>Categories</h2>\n");
    if detail.categories.is_empty() {
        body.push_str("<p>Not categorised.</p>\n");
    } else {
        body.push_str("<ul class=\"categories\">\n");
        for category in detail.categories.iter() {
            body.push_str(&format!(
                "<li>{}</li>\n", text(&category.name)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<h2>Tasks</h2>\n");
    body.push_str(&task_list_fragment(&detail.tasks));
    layout(&item.name, &body)
}
