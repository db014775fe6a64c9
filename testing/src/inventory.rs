use hearthcore::{
    item::{
        ItemFields,
        traits::ItemBackend,
    },
    location::traits::LocationBackend,
    rid::Rid,
    room::traits::RoomBackend,
};

/// Seed a location with a single room for the given owner; returns the
/// (location, room) id pair.
pub async fn make_location_with_room(
    backend: &(impl LocationBackend + RoomBackend),
    owner: &str,
    name: &str,
) -> anyhow::Result<(Rid, Rid)> {
    let location_id = backend.add_location(
        owner,
        name,
        "1 Example Lane",
        None,
    ).await?;
    let room_id = backend.add_room(
        &location_id,
        "Front Room",
        None,
        None,
    ).await?;
    Ok((location_id, room_id))
}

/// Seed an item with only a name set, placed in the given room.
pub async fn make_named_item(
    backend: &impl ItemBackend,
    owner: &str,
    location_id: &Rid,
    room_id: Option<&Rid>,
    name: &str,
) -> anyhow::Result<Rid> {
    Ok(backend.add_item(
        owner,
        location_id,
        room_id,
        ItemFields::named(name),
    ).await?)
}
