use hearthcore::{
    ac::Agent,
    item::ItemFields,
    task::{
        TargetKind,
        TaskTarget,
    },
};
use hearthctrl::{
    error::Error,
    platform::{
        Builder,
        Platform,
    },
};
use hearthdb_sqlite::SqliteBackend;
use std::sync::Arc;

async fn create_sqlite_platform() -> anyhow::Result<Arc<Platform>> {
    let backend = SqliteBackend::from_url("sqlite::memory:").await?;
    Ok(Builder::new()
        .inventory_platform(backend)
        .build())
}

#[tokio::test]
async fn test_location_listing_and_owner_lookup() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");
    let bob = Agent::from("bob");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    platform
        .create_location(&alice, "Town House", "18 Queen Street", None)
        .await?;

    let listed = platform.list_locations(&alice).await?;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|location| location.id == lake_house));

    assert_eq!(platform.list_locations(&bob).await?.len(), 0);
    assert!(matches!(
        platform.get_location(&bob, &lake_house).await,
        Err(Error::NotFound),
    ));
    assert!(matches!(
        platform.get_location(&Agent::Anonymous, &lake_house).await,
        Err(Error::NotFound),
    ));

    let location = platform.get_location(&alice, &lake_house).await?;
    assert_eq!(location.name, "Lake House");
    assert_eq!(location.owner, "alice");
    Ok(())
}

#[tokio::test]
async fn test_shared_location_lookup_asymmetry() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");
    let bob = Agent::from("bob");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    let family = platform.create_group("family").await?;
    assert!(platform.add_group_member(&family, "bob").await?);
    assert!(platform.share_location(&alice, &lake_house, &family).await?);

    // the listing honours group shares
    let listed = platform.list_locations(&bob).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, lake_house);

    // the direct lookup does not
    assert!(matches!(
        platform.get_location(&bob, &lake_house).await,
        Err(Error::NotFound),
    ));
    // while the listing-consistent lookup does
    let shared = platform.get_location_shared(&bob, &lake_house).await?;
    assert_eq!(shared.name, "Lake House");

    // a second route to the same location must not duplicate it
    let friends = platform.create_group("friends").await?;
    platform.add_group_member(&friends, "bob").await?;
    platform.share_location(&alice, &lake_house, &friends).await?;
    assert_eq!(platform.list_locations(&bob).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_sharing_restricted_to_owner() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");
    let bob = Agent::from("bob");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    let band = platform.create_group("band").await?;
    platform.add_group_member(&band, "bob").await?;

    assert!(matches!(
        platform.share_location(&bob, &lake_house, &band).await,
        Err(Error::NotFound),
    ));
    Ok(())
}

#[tokio::test]
async fn test_room_access_follows_location_owner() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");
    let bob = Agent::from("bob");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    assert!(matches!(
        platform.create_room(&bob, &lake_house, "Den", None, None).await,
        Err(Error::NotFound),
    ));

    let den = platform
        .create_room(&alice, &lake_house, "Den", Some("cosy"), Some(12.5))
        .await?;
    let room = platform.get_room(&alice, &den).await?;
    assert_eq!(room.name, "Den");
    assert_eq!(room.location_id, lake_house);

    // group sharing opens the listing, not the rooms
    let family = platform.create_group("family").await?;
    platform.add_group_member(&family, "bob").await?;
    platform.share_location(&alice, &lake_house, &family).await?;
    assert!(matches!(
        platform.get_room(&bob, &den).await,
        Err(Error::NotFound),
    ));
    Ok(())
}

#[tokio::test]
async fn test_item_lookup_is_unrestricted() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");
    let bob = Agent::from("bob");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    // an item need not sit in any room
    let kayak = platform
        .create_item(&alice, &lake_house, None, ItemFields::named("Kayak"))
        .await?;

    let item = platform.get_item(&kayak).await?;
    assert_eq!(item.name, "Kayak");
    assert_eq!(item.room_id, None);

    // anyone holding the id may resolve it, checked form excepted
    let detail = platform.item_detail(&kayak).await?;
    assert_eq!(detail.item.id, kayak);
    assert!(matches!(
        platform.get_item_checked(&bob, &kayak).await,
        Err(Error::NotFound),
    ));
    let checked = platform.get_item_checked(&alice, &kayak).await?;
    assert_eq!(checked.id, kayak);
    Ok(())
}

#[tokio::test]
async fn test_create_item_room_consistency() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    let town_house = platform
        .create_location(&alice, "Town House", "18 Queen Street", None)
        .await?;
    let den = platform
        .create_room(&alice, &lake_house, "Den", None, None)
        .await?;

    assert!(matches!(
        platform
            .create_item(&alice, &town_house, Some(&den),
                ItemFields::named("Lamp"))
            .await,
        Err(Error::Validation(_)),
    ));

    let lamp = platform
        .create_item(&alice, &lake_house, Some(&den),
            ItemFields::named("Lamp"))
        .await?;
    let detail = platform.room_detail(&alice, &den).await?;
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].id, lamp);
    Ok(())
}

#[tokio::test]
async fn test_task_target_listing_is_exact() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    let den = platform
        .create_room(&alice, &lake_house, "Den", None, None)
        .await?;

    let task = platform
        .create_task(
            &alice,
            TaskTarget::room(den.clone()),
            "Repaint ceiling",
            None,
            Some("yearly"),
            None,
        )
        .await?;

    let on_room = platform
        .list_tasks_for_target(TargetKind::Room, &den)
        .await?;
    assert_eq!(on_room.len(), 1);
    assert_eq!(on_room[0].id, task);

    // the same id under a different kind matches nothing
    let on_item = platform
        .list_tasks_for_target(TargetKind::Item, &den)
        .await?;
    assert_eq!(on_item.len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_task_creation_requires_target_access() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");
    let bob = Agent::from("bob");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    let kayak = platform
        .create_item(&alice, &lake_house, None, ItemFields::named("Kayak"))
        .await?;

    assert!(matches!(
        platform
            .create_task(
                &bob,
                TaskTarget::item(kayak.clone()),
                "Wax hull",
                None,
                None,
                None,
            )
            .await,
        Err(Error::NotFound),
    ));
    let task = platform
        .create_task(
            &alice,
            TaskTarget::item(kayak.clone()),
            "Wax hull",
            None,
            None,
            None,
        )
        .await?;
    let detail = platform.item_detail(&kayak).await?;
    assert_eq!(detail.tasks.len(), 1);
    assert_eq!(detail.tasks[0].id, task);
    Ok(())
}

#[tokio::test]
async fn test_dashboard_rollup() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    let den = platform
        .create_room(&alice, &lake_house, "Den", None, None)
        .await?;
    platform
        .create_item(&alice, &lake_house, Some(&den),
            ItemFields::named("Lamp"))
        .await?;
    platform
        .create_item(&alice, &lake_house, None, ItemFields::named("Kayak"))
        .await?;

    let task = platform
        .create_task(
            &alice,
            TaskTarget::location(lake_house.clone()),
            "Clear gutters",
            None,
            Some("yearly"),
            None,
        )
        .await?;
    let family = platform.create_group("family").await?;
    platform.add_group_member(&family, "alice").await?;
    platform.assign_task_to_group(&task, &family).await?;

    let dashboard = platform.dashboard(&alice).await?;
    assert_eq!(dashboard.locations.len(), 1);
    assert_eq!(dashboard.rooms.len(), 1);
    assert_eq!(dashboard.items.len(), 2);
    assert_eq!(dashboard.tasks.len(), 1);

    // an anonymous caller sees an empty board
    let empty = platform.dashboard(&Agent::Anonymous).await?;
    assert_eq!(empty.locations.len(), 0);
    assert_eq!(empty.items.len(), 0);
    assert_eq!(empty.tasks.len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_validation_and_anonymous_rejection() -> anyhow::Result<()> {
    let platform = create_sqlite_platform().await?;
    let alice = Agent::from("alice");

    assert!(matches!(
        platform.create_location(&alice, "   ", "7 Shore Road", None).await,
        Err(Error::Validation(_)),
    ));
    assert!(matches!(
        platform
            .create_location(&Agent::Anonymous, "Lake House", "", None)
            .await,
        Err(Error::Anonymous),
    ));

    let lake_house = platform
        .create_location(&alice, "Lake House", "7 Shore Road", None)
        .await?;
    assert!(matches!(
        platform.create_room(&alice, &lake_house, "", None, None).await,
        Err(Error::Validation(_)),
    ));
    Ok(())
}
